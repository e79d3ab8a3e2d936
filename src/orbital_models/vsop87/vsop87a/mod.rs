//! VSOP87A tables (rectangular variables, ecliptic J2000).
mod earth;
mod jupiter;

pub use earth::EARTH;
pub use jupiter::JUPITER;
