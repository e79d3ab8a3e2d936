pub mod body;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod coordinates;
pub mod earth_orientation;
pub mod ephemeris_errors;
pub mod kepler;
pub mod observers;
pub mod orbit_type;
pub mod orbital_models;
pub mod position;
pub mod ref_system;
pub mod rise_set;
pub mod solar_system;
pub mod star;
pub mod time;
