//! VSOP87 elliptic elements (main version, ecliptic J2000).
mod earth_moon;
mod jupiter;
mod mercury;

pub use earth_moon::EARTH_MOON;
pub use jupiter::JUPITER;
pub use mercury::MERCURY;
