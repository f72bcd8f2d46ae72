//! Action plan and renewable recommendations.

use crate::data::india::is_regional_town;
use crate::data::tables::renewable_potential;
use crate::domain::{ActionStep, HabitGroup, LocationCode, Potential, Recommendation};

pub const MIN_PLAN_STEPS: usize = 4;

/// Monthly consumption above which battery storage is recommended.
pub const BATTERY_THRESHOLD_KWH: f64 = 600.0;

const INSTALL_MONITOR: ActionStep = ActionStep {
    day: 1,
    text: "Install a smart energy monitor to track peak usage.",
};
const SERVICE_AC: ActionStep = ActionStep {
    day: 5,
    text: "Service AC filters and set thermostat to 24°C.",
};
const SEAL_DRAFTS: ActionStep = ActionStep {
    day: 7,
    text: "Seal window drafts to prevent heat loss.",
};
const OFF_PEAK_CHARGING: ActionStep = ActionStep {
    day: 10,
    text: "Schedule EV charging for off-peak hours (10PM+).",
};
const SURYA_GHAR: ActionStep = ActionStep {
    day: 15,
    text: "Check 'PM Surya Ghar' scheme eligibility.",
};
const SWITCH_TO_LED: ActionStep = ActionStep {
    day: 20,
    text: "Switch all remaining bulbs to LED.",
};
const UNPLUG_IDLE: ActionStep = ActionStep {
    day: 25,
    text: "Unplug idle electronics or put them on a smart power strip.",
};
const REVIEW_BILL: ActionStep = ActionStep {
    day: 30,
    text: "Review monthly bill for savings.",
};

/// Generic steps appended, in order, until a plan is long enough.
const PADDING_STEPS: [ActionStep; 3] = [SWITCH_TO_LED, UNPLUG_IDLE, REVIEW_BILL];

fn step_for(group: HabitGroup) -> Option<ActionStep> {
    match group {
        HabitGroup::Cooling => Some(SERVICE_AC),
        HabitGroup::Heating => Some(SEAL_DRAFTS),
        HabitGroup::ElectricVehicle => Some(OFF_PEAK_CHARGING),
        HabitGroup::RemoteWork => None,
    }
}

/// Build the calendar-staged plan. Always at least [`MIN_PLAN_STEPS`] long.
pub fn build_action_plan(location: LocationCode, groups: &[HabitGroup]) -> Vec<ActionStep> {
    let mut plan = vec![INSTALL_MONITOR];
    plan.extend(groups.iter().filter_map(|&g| step_for(g)));

    if location.is_india() {
        plan.push(SURYA_GHAR);
    }

    let missing = MIN_PLAN_STEPS.saturating_sub(plan.len());
    plan.extend(PADDING_STEPS.into_iter().take(missing));

    plan
}

/// Recommendations in display order.
///
/// A town from the regional list (India only) puts the town-level solar
/// recommendation first.
pub fn recommend_renewables(location: LocationCode, monthly_kwh: f64, town: Option<&str>) -> Vec<Recommendation> {
    let potential = renewable_potential(location);
    let mut out = Vec::new();

    if location.is_india() && town.is_some_and(is_regional_town) {
        out.push(Recommendation::RegionalSolar);
    }

    match potential.solar {
        Potential::Excellent => out.push(Recommendation::RooftopSolar),
        Potential::Good => out.push(Recommendation::SolarGoodRoi),
        Potential::Moderate | Potential::Low => {}
    }
    if potential.wind == Potential::Excellent {
        out.push(Recommendation::MicroWind);
    }
    if monthly_kwh > BATTERY_THRESHOLD_KWH {
        out.push(Recommendation::BatteryStorage);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_plan_is_padded_to_four() {
        let plan = build_action_plan(LocationCode::Us, &[]);
        let days: Vec<u16> = plan.iter().map(|s| s.day).collect();
        assert_eq!(days, vec![1, 20, 25, 30]);
    }

    #[test]
    fn padding_takes_generic_steps_in_order() {
        let plan = build_action_plan(LocationCode::Us, &[HabitGroup::Cooling]);
        let days: Vec<u16> = plan.iter().map(|s| s.day).collect();
        assert_eq!(days, vec![1, 5, 20, 25]);

        let plan = build_action_plan(LocationCode::In, &[HabitGroup::Cooling]);
        let days: Vec<u16> = plan.iter().map(|s| s.day).collect();
        assert_eq!(days, vec![1, 5, 15, 20]);
    }

    #[test]
    fn full_plan_gets_no_padding() {
        let groups = [HabitGroup::Cooling, HabitGroup::Heating, HabitGroup::ElectricVehicle];
        let plan = build_action_plan(LocationCode::Us, &groups);
        let days: Vec<u16> = plan.iter().map(|s| s.day).collect();
        assert_eq!(days, vec![1, 5, 7, 10]);
    }

    #[test]
    fn india_adds_scheme_step() {
        let plan = build_action_plan(LocationCode::In, &[HabitGroup::Heating, HabitGroup::ElectricVehicle]);
        let days: Vec<u16> = plan.iter().map(|s| s.day).collect();
        assert_eq!(days, vec![1, 7, 10, 15]);
    }

    #[test]
    fn remote_work_has_no_dedicated_step() {
        let plan = build_action_plan(LocationCode::De, &[HabitGroup::RemoteWork]);
        assert_eq!(plan[0], INSTALL_MONITOR);
        assert!(plan.len() >= MIN_PLAN_STEPS);
        assert!(!plan.iter().any(|s| (2..20).contains(&s.day)));
    }

    #[test]
    fn plan_is_always_sorted_by_day() {
        for loc in LocationCode::ALL {
            let plan = build_action_plan(loc, &[HabitGroup::Cooling, HabitGroup::ElectricVehicle]);
            assert!(plan.windows(2).all(|w| w[0].day < w[1].day));
        }
    }

    #[test]
    fn renewables_follow_potential_tiers() {
        // AU: excellent solar, excellent wind.
        assert_eq!(
            recommend_renewables(LocationCode::Au, 100.0, None),
            vec![Recommendation::RooftopSolar, Recommendation::MicroWind]
        );
        // JP: good solar only.
        assert_eq!(
            recommend_renewables(LocationCode::Jp, 100.0, None),
            vec![Recommendation::SolarGoodRoi]
        );
        // Unrated location: default moderate/low, so nothing but battery.
        assert_eq!(
            recommend_renewables(LocationCode::Pl, 601.0, None),
            vec![Recommendation::BatteryStorage]
        );
    }

    #[test]
    fn battery_threshold_is_strict() {
        assert!(!recommend_renewables(LocationCode::Pl, 600.0, None).contains(&Recommendation::BatteryStorage));
    }

    #[test]
    fn regional_town_goes_first_in_india_only() {
        let recs = recommend_renewables(LocationCode::In, 100.0, Some("Humnabad"));
        assert_eq!(recs[0], Recommendation::RegionalSolar);

        let recs = recommend_renewables(LocationCode::Us, 100.0, Some("Humnabad"));
        assert!(!recs.contains(&Recommendation::RegionalSolar));

        let recs = recommend_renewables(LocationCode::In, 100.0, Some("Pune"));
        assert!(!recs.contains(&Recommendation::RegionalSolar));
    }
}
