//! Static lookup data and the external weather source.

pub mod india;
pub mod tables;
pub mod tips;
pub mod weather;

pub use india::{REGIONAL_CITY, cities_for_state, india_states, is_regional_town, regional_towns};
pub use tables::{CARBON_PRICE_DEFAULT, example_profiles};
pub use weather::WeatherClient;
