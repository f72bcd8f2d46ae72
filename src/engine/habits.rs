//! Keyword-based habit classification.
//!
//! Each rule is an independent substring test over the lower-cased habits
//! text. A text can match any number of rules; each match adds the rule's
//! load increment on top of [`BASE_LOAD_KW`].

use crate::domain::HabitGroup;

/// Always-on household load before any habit is considered.
pub const BASE_LOAD_KW: f64 = 0.5;

#[derive(Debug, Clone, Copy)]
pub struct HabitRule {
    pub group: HabitGroup,
    pub keywords: &'static [&'static str],
    pub load_kw: f64,
}

impl HabitRule {
    /// `habits` must already be lower-cased.
    pub fn matches(&self, habits: &str) -> bool {
        self.keywords.iter().any(|kw| habits.contains(kw))
    }
}

pub const HABIT_RULES: [HabitRule; 4] = [
    HabitRule {
        group: HabitGroup::Cooling,
        keywords: &["ac", "cooling", "air con"],
        load_kw: 1.5,
    },
    HabitRule {
        group: HabitGroup::Heating,
        keywords: &["heat", "heater", "winter"],
        load_kw: 1.5,
    },
    HabitRule {
        group: HabitGroup::ElectricVehicle,
        keywords: &["ev", "tesla", "car", "vehicle"],
        load_kw: 2.0,
    },
    HabitRule {
        group: HabitGroup::RemoteWork,
        keywords: &["office", "wfh", "computer", "laptop"],
        load_kw: 0.2,
    },
];

/// Result of running the rule list over one habits text.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitMatch {
    /// Matched groups, in rule order.
    pub groups: Vec<HabitGroup>,
    pub load_kw: f64,
}

impl HabitMatch {
    pub fn has(&self, group: HabitGroup) -> bool {
        self.groups.contains(&group)
    }
}

pub fn classify_habits(habits: &str) -> HabitMatch {
    classify_with(&HABIT_RULES, habits)
}

pub fn classify_with(rules: &[HabitRule], habits: &str) -> HabitMatch {
    let text = habits.to_lowercase();
    let mut groups = Vec::new();
    let mut load_kw = BASE_LOAD_KW;

    for rule in rules.iter().filter(|rule| rule.matches(&text)) {
        groups.push(rule.group);
        load_kw += rule.load_kw;
    }

    HabitMatch { groups, load_kw }
}
