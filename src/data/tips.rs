//! Canned efficiency tips.

use crate::domain::HabitGroup;

const COOLING_TIPS: [&str; 3] = [
    "🌡️ Set AC to 24-26°C. Each degree lower increases energy use by 6-8%.",
    "🪟 Use ceiling fans with AC to feel 4°C cooler at the same temperature.",
    "🌙 Use programmable thermostats/timers for night cooling.",
];

const HEATING_TIPS: [&str; 3] = [
    "🔥 Lower thermostat by 1°C to save 10% on heating bills.",
    "🏠 Seal windows and doors to prevent 20% heat loss.",
    "☀️ Open curtains during sunny days for free solar heating.",
];

const OFFICE_TIPS: [&str; 2] = [
    "💻 Use laptop instead of desktop - uses 50-80% less power.",
    "🔌 Use smart power strips to eliminate phantom loads from peripherals.",
];

const EV_TIPS: [&str; 2] = [
    "🚗 Charge during off-peak hours (usually 10 PM - 6 AM).",
    "🔋 Maintain battery between 20-80% for longevity.",
];

/// Appliance and lighting tips, used to top up short tip lists.
const GENERAL_TIPS: [&str; 4] = [
    "🧺 Wash clothes in cold water - saves 90% of washing energy.",
    "❄️ Keep fridge at 3-5°C and freezer at -18°C.",
    "💡 Switch to LED bulbs - use 75% less energy, last 25x longer.",
    "🌅 Use natural daylight and light-colored walls.",
];

/// Tip pool for a matched habit group.
pub fn tips_for(group: HabitGroup) -> &'static [&'static str] {
    match group {
        HabitGroup::Cooling => &COOLING_TIPS,
        HabitGroup::Heating => &HEATING_TIPS,
        HabitGroup::ElectricVehicle => &EV_TIPS,
        HabitGroup::RemoteWork => &OFFICE_TIPS,
    }
}

pub fn general_tips() -> &'static [&'static str] {
    &GENERAL_TIPS
}
