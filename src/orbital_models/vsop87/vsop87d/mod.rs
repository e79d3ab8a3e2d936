//! Complete VSOP87D tables (spherical variables, ecliptic of date).
mod earth;
mod jupiter;
mod mars;
mod mercury;
mod neptune;
mod saturn;
mod uranus;
mod venus;

pub use earth::EARTH;
pub use jupiter::JUPITER;
pub use mars::MARS;
pub use mercury::MERCURY;
pub use neptune::NEPTUNE;
pub use saturn::SATURN;
pub use uranus::URANUS;
pub use venus::VENUS;
