//! Household profile computation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::data::india::is_regional_town;
use crate::data::tables::{carbon_intensity, currency_symbol, electricity_rate};
use crate::domain::{
    AnalysisRequest, Money, PaybackPeriod, Profile, ProfileTag, ensure_non_negative, parse_non_negative,
};
use crate::engine::habits::classify_habits;
use crate::engine::plan::{build_action_plan, recommend_renewables};
use crate::engine::tips::select_tips;
use crate::error::AppError;

pub const DAYS_PER_MONTH: f64 = 30.0;
/// Monthly consumption above which a household is tagged a high consumer.
pub const HIGH_CONSUMER_KWH: f64 = 800.0;
/// CO2 absorbed by one tree per year, kg.
pub const TREE_ABSORPTION_KG_PER_YEAR: f64 = 21.0;
/// Reduction target used for the savings projection.
pub const SAVINGS_TARGET: f64 = 0.30;

/// Parse the daily-hours field. Blank input counts as zero hours.
pub fn parse_daily_hours(raw: &str) -> Result<f64, AppError> {
    Ok(parse_non_negative("hours", raw)?.unwrap_or(0.0))
}

/// Compute a profile with a freshly seeded RNG for tip sampling.
///
/// Tips may differ between calls with identical input; every other field is
/// deterministic.
pub fn compute_profile(request: &AnalysisRequest) -> Result<Profile, AppError> {
    let mut rng = StdRng::from_entropy();
    compute_profile_with_rng(request, &mut rng)
}

pub fn compute_profile_with_rng<R: Rng + ?Sized>(request: &AnalysisRequest, rng: &mut R) -> Result<Profile, AppError> {
    let daily_hours = ensure_non_negative("hours", request.daily_hours)?;
    let location = request.location;

    let habits = classify_habits(&request.habits);
    let load_kw = habits.load_kw;

    let mut tags = vec![ProfileTag::Location(location)];
    tags.extend(habits.groups.iter().map(|&g| ProfileTag::Habit(g)));

    let monthly_kwh = daily_hours * DAYS_PER_MONTH * load_kw;
    tags.push(if monthly_kwh > HIGH_CONSUMER_KWH {
        ProfileTag::HighConsumer
    } else {
        ProfileTag::EfficientConsumer
    });

    let carbon_kg = round2(monthly_kwh * carbon_intensity(location) / 1000.0);
    let trees_to_offset = (carbon_kg * 12.0 / TREE_ABSORPTION_KG_PER_YEAR).round() as u64;

    let symbol = currency_symbol(location);
    let annual_cost = monthly_kwh * 12.0 * electricity_rate(location);
    let potential_savings = annual_cost * SAVINGS_TARGET;

    let action_plan = build_action_plan(location, &habits.groups);
    let tips = select_tips(&habits.groups, rng);

    let town = request.town.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let renewables = recommend_renewables(location, monthly_kwh, town);
    if location.is_india() {
        if let Some(town) = town.filter(|t| is_regional_town(t)) {
            tags.push(ProfileTag::Town(town.to_string()));
        }
    }

    let payback = if renewables.iter().any(|r| r.is_solar()) {
        PaybackPeriod::ThreeToFiveYears
    } else {
        PaybackPeriod::OneToTwoYears
    };

    let summary = format!(
        "Based on your {daily_hours} hours of daily activity and detected habits, we estimate a load of {load_kw:.1}kW, resulting in approx {} kWh/month.",
        monthly_kwh.trunc() as u64
    );

    debug!(
        %location,
        groups = ?habits.groups,
        load_kw,
        monthly_kwh,
        carbon_kg,
        "profile computed"
    );

    Ok(Profile {
        location,
        daily_hours,
        load_kw,
        monthly_kwh,
        carbon_kg,
        trees_to_offset,
        annual_cost: Money::new(symbol, annual_cost),
        potential_savings: Money::new(symbol, potential_savings),
        tags,
        action_plan,
        renewables,
        tips,
        payback,
        summary,
    })
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HabitGroup, LocationCode, Recommendation};
    use crate::engine::plan::MIN_PLAN_STEPS;
    use crate::engine::tips::MAX_TIPS;
    use crate::error::ErrorKind;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn urban_apartment_reference_case() {
        let req = AnalysisRequest::new(LocationCode::Us, 12.0, "AC in summer, WFH setup");
        let p = compute_profile_with_rng(&req, &mut seeded()).unwrap();

        assert!((p.load_kw - 2.2).abs() < 1e-9);
        assert!((p.monthly_kwh - 792.0).abs() < 1e-9);
        assert!(p.has_tag(&ProfileTag::Habit(HabitGroup::Cooling)));
        assert!(p.has_tag(&ProfileTag::Habit(HabitGroup::RemoteWork)));
        assert!(p.has_tag(&ProfileTag::EfficientConsumer));
        assert!(!p.has_tag(&ProfileTag::HighConsumer));
        assert_eq!(p.tags[0], ProfileTag::Location(LocationCode::Us));

        // 792 * 424 / 1000 = 335.808
        assert_eq!(p.carbon_kg, 335.81);
        assert_eq!(p.trees_to_offset, (335.81_f64 * 12.0 / 21.0).round() as u64);

        // 792 * 12 * 0.14 = 1330.56; 30% of that.
        assert!((p.annual_cost.amount - 1330.56).abs() < 1e-6);
        assert!((p.potential_savings.amount - 399.168).abs() < 1e-6);
        assert_eq!(p.potential_savings.to_string(), "$399");

        // US: excellent solar, good wind, above battery threshold.
        assert_eq!(p.renewables, vec![Recommendation::RooftopSolar, Recommendation::BatteryStorage]);
        assert_eq!(p.payback, PaybackPeriod::ThreeToFiveYears);
        assert_eq!(
            p.summary,
            "Based on your 12 hours of daily activity and detected habits, we estimate a load of 2.2kW, resulting in approx 792 kWh/month."
        );
    }

    #[test]
    fn summary_prints_hours_as_given() {
        let req = AnalysisRequest::new(LocationCode::Se, 9.5, "");
        let p = compute_profile_with_rng(&req, &mut seeded()).unwrap();
        assert!(p.summary.starts_with("Based on your 9.5 hours of daily activity"));
        assert!(p.summary.ends_with("load of 0.5kW, resulting in approx 142 kWh/month."));
    }

    #[test]
    fn unrecognized_habits_use_base_load_only() {
        let req = AnalysisRequest::new(LocationCode::De, 10.0, "Fans, Lights, TV, Fridge");
        let p = compute_profile_with_rng(&req, &mut seeded()).unwrap();
        assert_eq!(p.load_kw, 0.5);
        assert!(!p.tags.iter().any(|t| matches!(t, ProfileTag::Habit(_))));
    }

    #[test]
    fn high_consumer_above_threshold() {
        let req = AnalysisRequest::new(LocationCode::Gb, 24.0, "EV and electric heater");
        let p = compute_profile_with_rng(&req, &mut seeded()).unwrap();
        // 24 * 30 * (0.5 + 1.5 + 2.0) = 2880
        assert!((p.monthly_kwh - 2880.0).abs() < 1e-9);
        assert!(p.has_tag(&ProfileTag::HighConsumer));
    }

    #[test]
    fn invariants_hold_for_every_location() {
        let mut rng = seeded();
        for loc in LocationCode::ALL {
            for habits in ["", "ac heat ev wfh", "Laptop, LED lights, No AC"] {
                let req = AnalysisRequest::new(loc, 9.5, habits);
                let p = compute_profile_with_rng(&req, &mut rng).unwrap();

                assert!(p.carbon_kg >= 0.0);
                assert_eq!(p.trees_to_offset, (p.carbon_kg * 12.0 / 21.0).round() as u64);
                assert!(p.action_plan.len() >= MIN_PLAN_STEPS);
                assert!((1..=MAX_TIPS).contains(&p.tips.len()));
                let solar = p.renewables.iter().any(|r| r.is_solar());
                assert_eq!(p.payback == PaybackPeriod::ThreeToFiveYears, solar);
            }
        }
    }

    #[test]
    fn regional_town_in_india() {
        let mut req = AnalysisRequest::new(LocationCode::In, 16.0, "Fans, Lights, TV, Fridge");
        req.state = Some("Karnataka".to_string());
        req.city = Some("Bidar".to_string());
        req.town = Some("Bhalki".to_string());
        let p = compute_profile_with_rng(&req, &mut seeded()).unwrap();

        assert_eq!(p.renewables[0], Recommendation::RegionalSolar);
        assert!(p.has_tag(&ProfileTag::Town("Bhalki".to_string())));
        assert!(p.action_plan.iter().any(|s| s.day == 15));
        assert_eq!(p.annual_cost.symbol, "₹");
    }

    #[test]
    fn town_is_ignored_outside_india() {
        let mut req = AnalysisRequest::new(LocationCode::Fr, 8.0, "");
        req.town = Some("Bhalki".to_string());
        let p = compute_profile_with_rng(&req, &mut seeded()).unwrap();
        assert!(!p.tags.iter().any(|t| matches!(t, ProfileTag::Town(_))));
        assert_ne!(p.renewables.first(), Some(&Recommendation::RegionalSolar));
    }

    #[test]
    fn deterministic_fields_do_not_depend_on_rng() {
        let req = AnalysisRequest::new(LocationCode::Au, 14.0, "pool heater and tesla");
        let a = compute_profile_with_rng(&req, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = compute_profile_with_rng(&req, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(a.carbon_kg, b.carbon_kg);
        assert_eq!(a.trees_to_offset, b.trees_to_offset);
        assert_eq!(a.action_plan, b.action_plan);
        assert_eq!(a.renewables, b.renewables);
        assert_eq!(a.tags, b.tags);
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn entropy_seeded_entry_point_works() {
        let req = AnalysisRequest::new(LocationCode::Se, 5.0, "laptop");
        let p = compute_profile(&req).unwrap();
        assert!((1..=MAX_TIPS).contains(&p.tips.len()));
    }

    #[test]
    fn negative_or_non_finite_hours_are_invalid() {
        for hours in [-1.0, f64::NAN, f64::INFINITY] {
            let req = AnalysisRequest::new(LocationCode::Us, hours, "");
            let err = compute_profile_with_rng(&req, &mut seeded()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn parse_daily_hours_rules() {
        assert_eq!(parse_daily_hours("12").unwrap(), 12.0);
        assert_eq!(parse_daily_hours("").unwrap(), 0.0);
        assert_eq!(parse_daily_hours("abc").unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(parse_daily_hours("-3").unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn zero_hours_is_valid_and_empty() {
        let req = AnalysisRequest::new(LocationCode::Us, 0.0, "ac");
        let p = compute_profile_with_rng(&req, &mut seeded()).unwrap();
        assert_eq!(p.monthly_kwh, 0.0);
        assert_eq!(p.carbon_kg, 0.0);
        assert_eq!(p.trees_to_offset, 0);
        assert!(p.has_tag(&ProfileTag::EfficientConsumer));
    }
}
