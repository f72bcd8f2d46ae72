//! JSON response shapes.
//!
//! Field names follow the analysis/estimator wire format the web front end
//! consumed, so output can be piped into the same tooling.

use serde::Serialize;

use crate::domain::{HydroEstimate, Profile, SolarEstimate, WindEstimate, group_thousands};

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub carbon_footprint_kg: f64,
    pub trees_needed: u64,
    pub annual_savings: String,
    pub payback_period: &'static str,
    pub action_plan: Vec<String>,
    pub renewable_recommendations: Vec<&'static str>,
    pub efficiency_tips: Vec<&'static str>,
    pub profile_tags: Vec<String>,
    pub habits_summary: String,
}

impl AnalyzeResponse {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            id: None,
            carbon_footprint_kg: profile.carbon_kg,
            trees_needed: profile.trees_to_offset,
            annual_savings: profile.potential_savings.to_string(),
            payback_period: profile.payback.label(),
            action_plan: profile.action_plan.iter().map(ToString::to_string).collect(),
            renewable_recommendations: profile.renewables.iter().map(|r| r.message()).collect(),
            efficiency_tips: profile.tips.clone(),
            profile_tags: profile.tags.iter().map(|t| t.label()).collect(),
            habits_summary: profile.summary.clone(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarResponse {
    pub total_cost: String,
    pub annual_savings: String,
}

impl From<&SolarEstimate> for SolarResponse {
    fn from(est: &SolarEstimate) -> Self {
        Self {
            total_cost: est.total_cost.to_string(),
            annual_savings: est.annual_savings.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindResponse {
    pub total_cost: String,
    pub annual_energy_kwh: String,
}

impl From<&WindEstimate> for WindResponse {
    fn from(est: &WindEstimate) -> Self {
        Self {
            total_cost: est.total_cost.to_string(),
            annual_energy_kwh: group_thousands(est.annual_energy_kwh),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydroResponse {
    pub system_size_kw: String,
    pub total_cost: String,
}

impl From<&HydroEstimate> for HydroResponse {
    fn from(est: &HydroEstimate) -> Self {
        Self {
            system_size_kw: format!("{:.2}", est.system_size_kw),
            total_cost: est.total_cost.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::Value;

    use super::*;
    use crate::domain::{AnalysisRequest, LocationCode};
    use crate::engine::compute_profile_with_rng;
    use crate::estimate::{estimate_hydro, estimate_wind};

    #[test]
    fn analyze_response_fields() {
        let req = AnalysisRequest::new(LocationCode::Us, 12.0, "AC in summer, WFH setup");
        let profile = compute_profile_with_rng(&req, &mut StdRng::seed_from_u64(5)).unwrap();
        let json: Value = serde_json::to_value(AnalyzeResponse::from_profile(&profile)).unwrap();

        assert_eq!(json["carbon_footprint_kg"], 335.81);
        assert_eq!(json["annual_savings"], "$399");
        assert_eq!(json["payback_period"], "3-5");
        assert_eq!(json["action_plan"][0], "Day 1: Install a smart energy monitor to track peak usage.");
        assert_eq!(json["profile_tags"][0], "📍 US");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn batch_rows_carry_their_id() {
        let req = AnalysisRequest::new(LocationCode::Fr, 3.0, "");
        let profile = compute_profile_with_rng(&req, &mut StdRng::seed_from_u64(5)).unwrap();
        let json = serde_json::to_value(AnalyzeResponse::from_profile(&profile).with_id("h-7")).unwrap();
        assert_eq!(json["id"], "h-7");
    }

    #[test]
    fn estimator_responses_are_display_strings() {
        let wind = WindResponse::from(&estimate_wind(LocationCode::Us, 5.0).unwrap());
        assert_eq!(wind.total_cost, "$17,500");
        assert_eq!(wind.annual_energy_kwh, "10,950");

        let hydro = HydroResponse::from(&estimate_hydro(LocationCode::Us, 20.0, 5.0).unwrap());
        assert_eq!(hydro.system_size_kw, "0.78");
        assert_eq!(hydro.total_cost, "$3,139");
    }
}
