//! India administrative hierarchy offered by the region selector.
//!
//! Only a subset of states has a city list, and only the Bidar district
//! carries a town list (the "regional towns" that unlock the town-level
//! solar recommendation).

const INDIA_STATES: [&str; 28] = [
    "Andhra Pradesh", "Arunachal Pradesh", "Assam", "Bihar", "Chhattisgarh",
    "Goa", "Gujarat", "Haryana", "Himachal Pradesh", "Jharkhand",
    "Karnataka", "Kerala", "Madhya Pradesh", "Maharashtra", "Manipur",
    "Meghalaya", "Mizoram", "Nagaland", "Odisha", "Punjab",
    "Rajasthan", "Sikkim", "Tamil Nadu", "Telangana", "Tripura",
    "Uttar Pradesh", "Uttarakhand", "West Bengal",
];

// Delhi is a union territory, so it has cities but is not in the state list.
const CITIES_BY_STATE: [(&str, &[&str]); 9] = [
    ("Karnataka", &["Bengaluru", "Mysore", "Hubli", "Mangalore", "Bidar", "Belgaum"]),
    ("Maharashtra", &["Mumbai", "Pune", "Nagpur", "Nashik", "Aurangabad"]),
    ("Delhi", &["New Delhi", "North Delhi", "South Delhi"]),
    ("Tamil Nadu", &["Chennai", "Coimbatore", "Madurai", "Salem"]),
    ("Uttar Pradesh", &["Lucknow", "Kanpur", "Varanasi", "Agra", "Noida"]),
    ("Telangana", &["Hyderabad", "Warangal", "Nizamabad"]),
    ("Gujarat", &["Ahmedabad", "Surat", "Vadodara", "Rajkot"]),
    ("West Bengal", &["Kolkata", "Howrah", "Durgapur"]),
    ("Rajasthan", &["Jaipur", "Jodhpur", "Udaipur", "Kota"]),
];

/// City whose district towns are listed in [`REGIONAL_TOWNS`].
pub const REGIONAL_CITY: &str = "Bidar";

const REGIONAL_TOWNS: [&str; 12] = [
    "Aurad", "Basavakalyan", "Bhalki", "Chitgoppa", "Hulsoor", "Humnabad",
    "Kamalnagar", "Old City", "New City", "Gumpa", "Mailoor", "Chidri",
];

pub fn india_states() -> &'static [&'static str] {
    &INDIA_STATES
}

/// Cities known for `state`, or `None` when the state has no city list.
pub fn cities_for_state(state: &str) -> Option<&'static [&'static str]> {
    crate::data::tables::lookup(&CITIES_BY_STATE, state)
}

pub fn regional_towns() -> &'static [&'static str] {
    &REGIONAL_TOWNS
}

/// Exact, case-sensitive membership in the regional town list.
pub fn is_regional_town(town: &str) -> bool {
    REGIONAL_TOWNS.contains(&town)
}
