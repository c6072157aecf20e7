/// This module provides access to the raw data of contact lenses dataset
pub mod contact_lenses_raw;
/// This module provides access to the raw data of nominal weather dataset
pub mod weather_nominal_raw;
