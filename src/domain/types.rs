//! Shared domain types.
//!
//! Everything here is request-scoped: values are built for one analysis or
//! estimate and dropped afterwards. Nothing is persisted.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::Money;

/// Supported countries, by ISO 3166-1 alpha-2 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LocationCode {
    Us,
    In,
    De,
    Fr,
    Br,
    Ca,
    Au,
    Jp,
    Gb,
    It,
    Mx,
    Za,
    Kr,
    Es,
    Se,
    Cn,
    Ru,
    Ar,
    Eg,
    Ng,
    No,
    Is,
    Nz,
    Ch,
    Fi,
    Dk,
    Nl,
    Be,
    At,
    Pl,
}

impl LocationCode {
    pub const ALL: [LocationCode; 30] = [
        LocationCode::Us,
        LocationCode::In,
        LocationCode::De,
        LocationCode::Fr,
        LocationCode::Br,
        LocationCode::Ca,
        LocationCode::Au,
        LocationCode::Jp,
        LocationCode::Gb,
        LocationCode::It,
        LocationCode::Mx,
        LocationCode::Za,
        LocationCode::Kr,
        LocationCode::Es,
        LocationCode::Se,
        LocationCode::Cn,
        LocationCode::Ru,
        LocationCode::Ar,
        LocationCode::Eg,
        LocationCode::Ng,
        LocationCode::No,
        LocationCode::Is,
        LocationCode::Nz,
        LocationCode::Ch,
        LocationCode::Fi,
        LocationCode::Dk,
        LocationCode::Nl,
        LocationCode::Be,
        LocationCode::At,
        LocationCode::Pl,
    ];

    /// Two-letter code as shown in tags and reports.
    pub fn code(self) -> &'static str {
        match self {
            LocationCode::Us => "US",
            LocationCode::In => "IN",
            LocationCode::De => "DE",
            LocationCode::Fr => "FR",
            LocationCode::Br => "BR",
            LocationCode::Ca => "CA",
            LocationCode::Au => "AU",
            LocationCode::Jp => "JP",
            LocationCode::Gb => "GB",
            LocationCode::It => "IT",
            LocationCode::Mx => "MX",
            LocationCode::Za => "ZA",
            LocationCode::Kr => "KR",
            LocationCode::Es => "ES",
            LocationCode::Se => "SE",
            LocationCode::Cn => "CN",
            LocationCode::Ru => "RU",
            LocationCode::Ar => "AR",
            LocationCode::Eg => "EG",
            LocationCode::Ng => "NG",
            LocationCode::No => "NO",
            LocationCode::Is => "IS",
            LocationCode::Nz => "NZ",
            LocationCode::Ch => "CH",
            LocationCode::Fi => "FI",
            LocationCode::Dk => "DK",
            LocationCode::Nl => "NL",
            LocationCode::Be => "BE",
            LocationCode::At => "AT",
            LocationCode::Pl => "PL",
        }
    }

    pub fn is_india(self) -> bool {
        self == LocationCode::In
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LocationCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LocationCode::ALL
            .into_iter()
            .find(|loc| loc.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown location code '{wanted}'."))
    }
}

/// Qualitative suitability of a location for one kind of generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Potential {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl Potential {
    pub fn label(self) -> &'static str {
        match self {
            Potential::Excellent => "excellent",
            Potential::Good => "good",
            Potential::Moderate => "moderate",
            Potential::Low => "low",
        }
    }
}

/// Solar / wind / hydro ratings for one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenewablePotential {
    pub solar: Potential,
    pub wind: Potential,
    pub hydro: Potential,
}

/// The keyword groups the habit classifier recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HabitGroup {
    Cooling,
    Heating,
    ElectricVehicle,
    RemoteWork,
}

impl HabitGroup {
    pub fn tag_label(self) -> &'static str {
        match self {
            HabitGroup::Cooling => "❄️ Heavy Cooling",
            HabitGroup::Heating => "🔥 Electric Heating",
            HabitGroup::ElectricVehicle => "🚗 EV Owner",
            HabitGroup::RemoteWork => "💻 Remote Worker",
        }
    }
}

/// Input for one household analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub location: LocationCode,
    /// Hours per day the household is actively drawing its estimated load.
    pub daily_hours: f64,
    pub habits: String,
    pub state: Option<String>,
    pub city: Option<String>,
    /// Only consulted for India, against the regional town list.
    pub town: Option<String>,
}

impl AnalysisRequest {
    pub fn new(location: LocationCode, daily_hours: f64, habits: impl Into<String>) -> Self {
        Self {
            location,
            daily_hours,
            habits: habits.into(),
            state: None,
            city: None,
            town: None,
        }
    }
}

/// A descriptive label attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileTag {
    Location(LocationCode),
    Habit(HabitGroup),
    HighConsumer,
    EfficientConsumer,
    Town(String),
}

impl ProfileTag {
    pub fn label(&self) -> String {
        match self {
            ProfileTag::Location(loc) => format!("📍 {loc}"),
            ProfileTag::Habit(group) => group.tag_label().to_string(),
            ProfileTag::HighConsumer => "⚡ High Consumer".to_string(),
            ProfileTag::EfficientConsumer => "🌱 Efficient Consumer".to_string(),
            ProfileTag::Town(town) => format!("📍 {town}"),
        }
    }
}

/// One calendar-staged step of the action plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionStep {
    pub day: u16,
    pub text: &'static str,
}

impl fmt::Display for ActionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: {}", self.day, self.text)
    }
}

/// A renewable-energy recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// Town-level solar priority inside the regional (Bidar) district.
    RegionalSolar,
    RooftopSolar,
    SolarGoodRoi,
    MicroWind,
    BatteryStorage,
}

impl Recommendation {
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::RegionalSolar => {
                "☀️ Bidar Specific: Excellent solar irradiance (5.2 kWh/m²). Priority investment."
            }
            Recommendation::RooftopSolar => {
                "☀️ Rooftop Solar: High potential. 5kW system can offset 90% usage."
            }
            Recommendation::SolarGoodRoi => "☀️ Solar: Good ROI. Consider a 3-4kW system.",
            Recommendation::MicroWind => "💨 Micro-Wind: Feasible if you have open land.",
            Recommendation::BatteryStorage => "🔋 Battery Storage: Essential for your high usage.",
        }
    }

    pub fn is_solar(self) -> bool {
        matches!(
            self,
            Recommendation::RegionalSolar | Recommendation::RooftopSolar | Recommendation::SolarGoodRoi
        )
    }
}

/// Coarse payback bucket for the recommended investments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaybackPeriod {
    /// Solar was recommended.
    ThreeToFiveYears,
    /// Efficiency measures only.
    OneToTwoYears,
}

impl PaybackPeriod {
    pub fn label(self) -> &'static str {
        match self {
            PaybackPeriod::ThreeToFiveYears => "3-5",
            PaybackPeriod::OneToTwoYears => "1-2",
        }
    }
}

/// Everything derived from one `AnalysisRequest`.
#[derive(Debug, Clone)]
pub struct Profile {
    pub location: LocationCode,
    pub daily_hours: f64,
    pub load_kw: f64,
    pub monthly_kwh: f64,
    pub carbon_kg: f64,
    pub trees_to_offset: u64,
    pub annual_cost: Money,
    pub potential_savings: Money,
    pub tags: Vec<ProfileTag>,
    pub action_plan: Vec<ActionStep>,
    pub renewables: Vec<Recommendation>,
    /// Unique, between one and four entries.
    pub tips: Vec<&'static str>,
    pub payback: PaybackPeriod,
    pub summary: String,
}

impl Profile {
    pub fn has_tag(&self, tag: &ProfileTag) -> bool {
        self.tags.contains(tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEstimate {
    pub total_cost: Money,
    pub annual_savings: Money,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindEstimate {
    pub total_cost: Money,
    pub annual_energy_kwh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydroEstimate {
    pub system_size_kw: f64,
    pub total_cost: Money,
}

/// Current conditions at a location's reference coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature: f64,
    pub humidity: f64,
    pub description: String,
    pub feels_like: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<NaiveDateTime>,
}

/// A quick-start household template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExampleProfile {
    pub name: &'static str,
    pub location: LocationCode,
    pub daily_hours: f64,
    pub habits: &'static str,
}

impl ExampleProfile {
    pub fn to_request(&self) -> AnalysisRequest {
        AnalysisRequest::new(self.location, self.daily_hours, self.habits)
    }
}
