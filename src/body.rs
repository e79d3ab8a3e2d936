//! # Solar-system bodies
//!
//! The fixed set of bodies handled by the [`SolarSystem`](crate::solar_system::SolarSystem),
//! with their physical constants and the orbital model used for each.
use std::fmt;

use crate::{
    constants::Meter,
    orbital_models::{
        moon::Moon,
        pluto::Pluto,
        sun::Sun,
        vsop87::{vsop87c, Vsop87, EARTH, JUPITER, MARS, MERCURY, NEPTUNE, SATURN, URANUS, VENUS},
        OrbitalModel,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Moon,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Moon,
        Body::Pluto,
    ];

    /// Position of the body in [`Body::ALL`]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Moon => "Moon",
            Body::Pluto => "Pluto",
        }
    }

    /// Mass in kilograms, when known
    pub const fn mass(&self) -> Option<f64> {
        match self {
            Body::Earth => Some(5.9726e24),
            Body::Moon => Some(7.342e22),
            Body::Pluto => Some(1.303e22),
            _ => None,
        }
    }

    pub const fn equatorial_radius(&self) -> Meter {
        match self {
            Body::Sun => 6.96342e8,
            Body::Mercury => 2.439764e6,
            Body::Venus => 6.05159e6,
            Body::Earth => 6.37815e6,
            Body::Mars => 3.397e6,
            Body::Jupiter => 7.149268e7,
            Body::Saturn => 6.026714e7,
            Body::Uranus => 2.5559e7,
            Body::Neptune => 2.4764e7,
            Body::Moon => 1.7381e6,
            Body::Pluto => 1.187e6,
        }
    }

    /// Mean radius; the equatorial radius stands in where no mean radius is tabulated.
    pub const fn mean_radius(&self) -> Meter {
        match self {
            Body::Sun => 6.96342e8,
            Body::Earth => 6.371e6,
            Body::Moon => 1.7371e6,
            Body::Pluto => 1.187e6,
            _ => self.equatorial_radius(),
        }
    }

    /// Orbital model evaluating this body.
    pub fn default_model(&self) -> Box<dyn OrbitalModel> {
        match self {
            Body::Sun => Box::new(Sun),
            Body::Mercury => Box::new(Vsop87::new(&MERCURY)),
            Body::Venus => Box::new(Vsop87::new(&VENUS)),
            Body::Earth => Box::new(Vsop87::new(&EARTH)),
            Body::Mars => Box::new(Vsop87::new(&MARS)),
            Body::Jupiter => Box::new(Vsop87::new(&JUPITER)),
            Body::Saturn => Box::new(Vsop87::new(&SATURN)),
            Body::Uranus => Box::new(Vsop87::new(&URANUS)),
            Body::Neptune => Box::new(Vsop87::new(&NEPTUNE)),
            Body::Moon => Box::new(Moon::new()),
            Body::Pluto => Box::new(Pluto::new()),
        }
    }

    /// Same as [`Body::default_model`], the planets taken from the rectangular VSOP87C series.
    pub fn rectangular_model(&self) -> Box<dyn OrbitalModel> {
        match self {
            Body::Mercury => Box::new(Vsop87::new(&vsop87c::MERCURY)),
            Body::Venus => Box::new(Vsop87::new(&vsop87c::VENUS)),
            Body::Earth => Box::new(Vsop87::new(&vsop87c::EARTH)),
            Body::Mars => Box::new(Vsop87::new(&vsop87c::MARS)),
            Body::Jupiter => Box::new(Vsop87::new(&vsop87c::JUPITER)),
            Body::Saturn => Box::new(Vsop87::new(&vsop87c::SATURN)),
            Body::Uranus => Box::new(Vsop87::new(&vsop87c::URANUS)),
            Body::Neptune => Box::new(Vsop87::new(&vsop87c::NEPTUNE)),
            Body::Sun | Body::Moon | Body::Pluto => self.default_model(),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod body_test {
    use super::*;
    use crate::orbital_models::{DistanceUnit, ModelKind};

    #[test]
    fn test_index_matches_all() {
        for (i, body) in Body::ALL.iter().enumerate() {
            assert_eq!(body.index(), i);
        }
    }

    #[test]
    fn test_radius_fallback() {
        assert_eq!(Body::Mars.mean_radius(), Body::Mars.equatorial_radius());
        assert_eq!(Body::Earth.mean_radius(), 6.371e6);
        assert!(Body::Jupiter.mass().is_none());
    }

    #[test]
    fn test_models() {
        assert_eq!(Body::Moon.default_model().kind(), ModelKind::Geocentric);
        assert_eq!(Body::Moon.default_model().distance_unit(), DistanceUnit::Meter);
        for body in Body::ALL.iter().filter(|b| **b != Body::Moon) {
            assert_eq!(body.default_model().kind(), ModelKind::Heliocentric);
            assert_eq!(body.rectangular_model().kind(), ModelKind::Heliocentric);
        }
        assert_eq!(Body::Moon.rectangular_model().kind(), ModelKind::Geocentric);
    }

    #[test]
    fn test_display() {
        assert_eq!(Body::Neptune.to_string(), "Neptune");
    }
}
