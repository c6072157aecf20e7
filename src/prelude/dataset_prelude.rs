pub use crate::dataset::contact_lenses::load_contact_lenses;
pub use crate::dataset::weather_nominal::load_weather_nominal;
