//! Per-country constants.
//!
//! All figures are illustrative. Tables are plain `const` slices keyed by
//! `LocationCode`; every read goes through [`lookup`] / [`lookup_or`] so a
//! code missing from a table resolves to that table's documented default.

use crate::domain::{ExampleProfile, LocationCode, Potential, RenewablePotential};

use LocationCode::*;

/// Default carbon price (currency units per tonne CO2).
pub const CARBON_PRICE_DEFAULT: f64 = 50.0;

pub const DEFAULT_CARBON_INTENSITY: f64 = 450.0;
pub const DEFAULT_ELECTRICITY_RATE: f64 = 0.15;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_POTENTIAL: RenewablePotential = RenewablePotential {
    solar: Potential::Moderate,
    wind: Potential::Low,
    hydro: Potential::Low,
};

/// Grid carbon intensity, gCO2 per kWh.
const CARBON_INTENSITY: [(LocationCode, f64); 30] = [
    (Us, 424.0), (In, 705.0), (De, 369.0), (Fr, 57.0), (Br, 89.0),
    (Ca, 130.0), (Au, 680.0), (Jp, 480.0), (Gb, 230.0), (It, 300.0),
    (Mx, 380.0), (Za, 850.0), (Kr, 450.0), (Es, 200.0), (Se, 15.0),
    (Cn, 580.0), (Ru, 470.0), (Ar, 360.0), (Eg, 450.0), (Ng, 400.0),
    (No, 8.0), (Is, 0.0), (Nz, 120.0), (Ch, 30.0), (Fi, 90.0),
    (Dk, 150.0), (Nl, 390.0), (Be, 220.0), (At, 140.0), (Pl, 690.0),
];

const CURRENCY_SYMBOL: [(LocationCode, &str); 30] = [
    (Us, "$"), (In, "₹"), (De, "€"), (Fr, "€"), (Br, "R$"),
    (Ca, "$"), (Au, "$"), (Jp, "¥"), (Gb, "£"), (It, "€"),
    (Mx, "$"), (Za, "R"), (Kr, "₩"), (Es, "€"), (Se, "kr"),
    (Cn, "¥"), (Ru, "₽"), (Ar, "$"), (Eg, "E£"), (Ng, "₦"),
    (No, "kr"), (Is, "kr"), (Nz, "$"), (Ch, "Fr"), (Fi, "€"),
    (Dk, "kr"), (Nl, "€"), (Be, "€"), (At, "€"), (Pl, "zł"),
];

/// Residential electricity price per kWh, in local currency.
const ELECTRICITY_RATE: [(LocationCode, f64); 30] = [
    (Us, 0.14), (In, 7.0), (De, 0.36), (Fr, 0.19), (Br, 0.80),
    (Ca, 0.13), (Au, 0.35), (Jp, 27.0), (Gb, 0.34), (It, 0.28),
    (Mx, 2.0), (Za, 2.5), (Kr, 120.0), (Es, 0.25), (Se, 2.5),
    (Cn, 0.6), (Ru, 5.0), (Ar, 50.0), (Eg, 1.5), (Ng, 50.0),
    (No, 1.5), (Is, 18.0), (Nz, 0.30), (Ch, 0.25), (Fi, 0.17),
    (Dk, 2.5), (Nl, 0.30), (Be, 0.30), (At, 0.25), (Pl, 0.70),
];

const fn rated(solar: Potential, wind: Potential, hydro: Potential) -> RenewablePotential {
    RenewablePotential { solar, wind, hydro }
}

const RENEWABLE_POTENTIAL: [(LocationCode, RenewablePotential); 10] = {
    use Potential::*;
    [
        (Us, rated(Excellent, Good, Moderate)),
        (In, rated(Excellent, Moderate, Good)),
        (De, rated(Moderate, Excellent, Low)),
        (Fr, rated(Good, Good, Excellent)),
        (Br, rated(Excellent, Good, Excellent)),
        (Ca, rated(Moderate, Excellent, Excellent)),
        (Au, rated(Excellent, Excellent, Low)),
        (Jp, rated(Good, Moderate, Good)),
        (Gb, rated(Low, Excellent, Moderate)),
        (Se, rated(Low, Good, Excellent)),
    ]
};

/// Reference coordinates (lat, lon) used for weather lookups.
const COORDINATES: [(LocationCode, (f64, f64)); 10] = [
    (Us, (37.09, -95.71)),
    (In, (20.59, 78.96)),
    (De, (51.16, 10.45)),
    (Fr, (46.22, 2.21)),
    (Br, (-14.23, -51.92)),
    (Ca, (56.13, -106.34)),
    (Au, (-25.27, 133.77)),
    (Jp, (36.20, 138.25)),
    (Gb, (55.37, -3.43)),
    (It, (41.87, 12.56)),
];

const EXAMPLE_PROFILES: [ExampleProfile; 3] = [
    ExampleProfile {
        name: "Urban Apt (US)",
        location: Us,
        daily_hours: 12.0,
        habits: "AC in summer, WFH setup",
    },
    ExampleProfile {
        name: "Family Home (IN)",
        location: In,
        daily_hours: 16.0,
        habits: "Fans, Lights, TV, Fridge",
    },
    ExampleProfile {
        name: "Eco Student (DE)",
        location: De,
        daily_hours: 6.0,
        habits: "Laptop, LED lights, No AC",
    },
];

/// Find `key` in `table`.
pub fn lookup<K: PartialEq, V: Copy>(table: &[(K, V)], key: K) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Find `key` in `table`, or return `default` when it is absent.
pub fn lookup_or<K: PartialEq, V: Copy>(table: &[(K, V)], key: K, default: V) -> V {
    lookup(table, key).unwrap_or(default)
}

pub fn carbon_intensity(location: LocationCode) -> f64 {
    lookup_or(&CARBON_INTENSITY, location, DEFAULT_CARBON_INTENSITY)
}

pub fn electricity_rate(location: LocationCode) -> f64 {
    lookup_or(&ELECTRICITY_RATE, location, DEFAULT_ELECTRICITY_RATE)
}

pub fn currency_symbol(location: LocationCode) -> &'static str {
    lookup_or(&CURRENCY_SYMBOL, location, DEFAULT_CURRENCY_SYMBOL)
}

pub fn renewable_potential(location: LocationCode) -> RenewablePotential {
    lookup_or(&RENEWABLE_POTENTIAL, location, DEFAULT_POTENTIAL)
}

/// Weather reference point, if the location has one.
pub fn coordinates(location: LocationCode) -> Option<(f64, f64)> {
    lookup(&COORDINATES, location)
}

pub fn example_profiles() -> &'static [ExampleProfile] {
    &EXAMPLE_PROFILES
}
