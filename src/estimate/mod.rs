//! Renewable investment estimators.
//!
//! Each estimator is a pure formula. Location only selects between two unit
//! costs (India and everywhere else) and the currency symbol.

use crate::config::Settings;
use crate::data::tables::currency_symbol;
use crate::domain::{HydroEstimate, LocationCode, Money, SolarEstimate, WindEstimate, ensure_non_negative};
use crate::error::AppError;

/// Fraction of roof area (sq ft) converted into installed capacity.
const SOLAR_KW_PER_SQFT: f64 = 0.015;
const SOLAR_SAVINGS_RATE: f64 = 0.15;
const WIND_CAPACITY_FACTOR: f64 = 0.25;
const HOURS_PER_YEAR: f64 = 24.0 * 365.0;
const GRAVITY: f64 = 9.81;
const HYDRO_EFFICIENCY: f64 = 0.8;
/// No hydro installation is quoted below this amount.
pub const HYDRO_MIN_COST: f64 = 2000.0;
const INR_PER_USD: f64 = 80.0;

pub const DEFAULT_ROOF_SQFT: f64 = 500.0;
pub const DEFAULT_TURBINE_KW: f64 = 5.0;
pub const DEFAULT_FLOW_LPS: f64 = 20.0;
pub const DEFAULT_HEAD_M: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technology {
    Solar,
    Wind,
    Hydro,
}

impl Technology {
    /// Installed cost per kW in local currency.
    pub fn unit_cost(self, location: LocationCode) -> f64 {
        let india = location.is_india();
        match self {
            Technology::Solar => {
                if india {
                    1000.0
                } else {
                    3000.0
                }
            }
            Technology::Wind => {
                if india {
                    1200.0
                } else {
                    3500.0
                }
            }
            Technology::Hydro => {
                if india {
                    1500.0
                } else {
                    4000.0
                }
            }
        }
    }
}

pub fn estimate_solar(location: LocationCode, roof_sqft: f64) -> Result<SolarEstimate, AppError> {
    let roof_sqft = ensure_non_negative("roof area", roof_sqft)?;
    let symbol = currency_symbol(location);

    let total = roof_sqft * SOLAR_KW_PER_SQFT * Technology::Solar.unit_cost(location);
    Ok(SolarEstimate {
        total_cost: Money::new(symbol, total),
        annual_savings: Money::new(symbol, total * SOLAR_SAVINGS_RATE),
    })
}

pub fn estimate_wind(location: LocationCode, turbine_kw: f64) -> Result<WindEstimate, AppError> {
    let turbine_kw = ensure_non_negative("turbine size", turbine_kw)?;
    let symbol = currency_symbol(location);

    Ok(WindEstimate {
        total_cost: Money::new(symbol, turbine_kw * Technology::Wind.unit_cost(location)),
        annual_energy_kwh: turbine_kw * HOURS_PER_YEAR * WIND_CAPACITY_FACTOR,
    })
}

/// `P = ρ g Q H η` with water density folded into the L/s → m³/s conversion.
pub fn estimate_hydro(location: LocationCode, flow_lps: f64, head_m: f64) -> Result<HydroEstimate, AppError> {
    let flow_lps = ensure_non_negative("flow rate", flow_lps)?;
    let head_m = ensure_non_negative("head height", head_m)?;
    let symbol = currency_symbol(location);

    let system_size_kw = GRAVITY * (flow_lps / 1000.0) * head_m * HYDRO_EFFICIENCY;
    let total = (system_size_kw * Technology::Hydro.unit_cost(location)).max(HYDRO_MIN_COST);
    Ok(HydroEstimate {
        system_size_kw,
        total_cost: Money::new(symbol, total),
    })
}

/// Carbon price per tonne, from configuration.
pub fn carbon_price(settings: &Settings) -> f64 {
    settings.carbon_price
}

/// Carbon price as displayed for a location.
///
/// India is shown in rupees at a fixed 80:1 conversion and Germany in euros at
/// par. Everywhere else gets dollars.
pub fn localized_carbon_price(price: f64, location: LocationCode) -> String {
    let (symbol, value) = match location {
        LocationCode::In => ("₹", price * INR_PER_USD),
        LocationCode::De => ("€", price),
        _ => ("$", price),
    };
    format!("{symbol}{value:.2}/ton")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn carbon_price_defaults_and_localizes() {
        assert_eq!(carbon_price(&Settings::default()), 50.0);
        assert_eq!(localized_carbon_price(50.0, LocationCode::Us), "$50.00/ton");
        assert_eq!(localized_carbon_price(50.0, LocationCode::In), "₹4000.00/ton");
        assert_eq!(localized_carbon_price(50.0, LocationCode::De), "€50.00/ton");
        // Other euro countries still show dollars.
        assert_eq!(localized_carbon_price(50.0, LocationCode::Fr), "$50.00/ton");
    }

    #[test]
    fn solar_defaults() {
        let us = estimate_solar(LocationCode::Us, DEFAULT_ROOF_SQFT).unwrap();
        assert!((us.total_cost.amount - 22500.0).abs() < 1e-9);
        assert!((us.annual_savings.amount - 3375.0).abs() < 1e-9);
        assert_eq!(us.total_cost.to_string(), "$22,500");

        let india = estimate_solar(LocationCode::In, DEFAULT_ROOF_SQFT).unwrap();
        assert!((india.total_cost.amount - 7500.0).abs() < 1e-9);
        assert_eq!(india.annual_savings.to_string(), "₹1,125");
    }

    #[test]
    fn wind_reference_case() {
        let est = estimate_wind(LocationCode::De, 5.0).unwrap();
        assert_eq!(est.total_cost.amount, 17500.0);
        assert_eq!(est.annual_energy_kwh, 10950.0);
        assert_eq!(est.total_cost.to_string(), "€17,500");

        let india = estimate_wind(LocationCode::In, 5.0).unwrap();
        assert_eq!(india.total_cost.amount, 6000.0);
    }

    #[test]
    fn hydro_reference_case() {
        let est = estimate_hydro(LocationCode::Us, 20.0, 5.0).unwrap();
        assert!((est.system_size_kw - 0.7848).abs() < 1e-12);
        assert_eq!(format!("{:.2}", est.system_size_kw), "0.78");
        // 0.7848 * 4000 = 3139.2, above the floor.
        assert!((est.total_cost.amount - 3139.2).abs() < 1e-9);
    }

    #[test]
    fn hydro_cost_floor() {
        // 0.7848 * 1500 = 1177.2, below the floor.
        let est = estimate_hydro(LocationCode::In, 20.0, 5.0).unwrap();
        assert_eq!(est.total_cost.amount, HYDRO_MIN_COST);

        let zero = estimate_hydro(LocationCode::Gb, 0.0, 0.0).unwrap();
        assert_eq!(zero.system_size_kw, 0.0);
        assert_eq!(zero.total_cost.amount, 2000.0);
    }

    #[test]
    fn estimators_are_pure() {
        assert_eq!(estimate_solar(LocationCode::Jp, 320.0).unwrap(), estimate_solar(LocationCode::Jp, 320.0).unwrap());
        assert_eq!(estimate_wind(LocationCode::Ca, 2.5).unwrap(), estimate_wind(LocationCode::Ca, 2.5).unwrap());
        assert_eq!(
            estimate_hydro(LocationCode::No, 55.0, 12.0).unwrap(),
            estimate_hydro(LocationCode::No, 55.0, 12.0).unwrap()
        );
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert_eq!(estimate_solar(LocationCode::Us, -1.0).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(estimate_wind(LocationCode::Us, f64::NAN).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(estimate_hydro(LocationCode::Us, 20.0, -5.0).unwrap_err().kind(), ErrorKind::InvalidInput);
    }
}
