use crate::{
    body::Body,
    constants::{Meter, Radian},
    ephemeris_errors::EphemerisError,
    observers::GeographicLocation,
    position::{Center, Equinox, Frame},
    solar_system::SolarSystem,
    time::Instant,
};

/// What the rise/set search needs to know about a target at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetObservation {
    /// Apparent right ascension, true equator of date
    pub right_ascension: Radian,
    /// Apparent declination, true equator of date
    pub declination: Radian,
    /// Distance from the observer, `f64::INFINITY` for stars
    pub distance: Meter,
    /// Physical radius of the target, zero for point sources
    pub radius: Meter,
    /// Local apparent sidereal time of the observer
    pub local_sidereal_time: Radian,
}

impl TargetObservation {
    /// Angular radius of the disk
    pub fn apparent_radius(&self) -> Radian {
        if self.distance.is_finite() && self.distance > 0.0 {
            (self.radius / self.distance).min(1.0).asin()
        } else {
            0.0
        }
    }

    /// Hour angle of the target, west positive
    pub fn hour_angle(&self) -> Radian {
        self.local_sidereal_time - self.right_ascension
    }
}

/// Something whose rising and setting can be searched for.
///
/// Fixed targets keep their declination over a search: when they do not cross the horizon
/// once, they never will, and the search stops immediately instead of scanning forward.
pub trait RiseSetTarget {
    fn name(&self) -> String;

    fn is_fixed(&self) -> bool;

    fn observe(
        &mut self,
        instant: Instant,
        location: &GeographicLocation,
    ) -> Result<TargetObservation, EphemerisError>;
}

/// A solar-system body, observed topocentrically through a [`SolarSystem`].
#[derive(Debug)]
pub struct BodyTarget<'a> {
    solar_system: &'a mut SolarSystem,
    body: Body,
}

impl<'a> BodyTarget<'a> {
    pub fn new(solar_system: &'a mut SolarSystem, body: Body) -> Self {
        BodyTarget { solar_system, body }
    }

    pub fn body(&self) -> Body {
        self.body
    }
}

impl RiseSetTarget for BodyTarget<'_> {
    fn name(&self) -> String {
        self.body.name().to_string()
    }

    fn is_fixed(&self) -> bool {
        false
    }

    fn observe(
        &mut self,
        instant: Instant,
        location: &GeographicLocation,
    ) -> Result<TargetObservation, EphemerisError> {
        self.solar_system.compute_single(instant, self.body)?;
        let position = self.solar_system.ephemerides(self.body, *location)?;
        let equatorial = position.spherical(Frame::Equatorial, Center::Topocentric, Equinox::True);

        Ok(TargetObservation {
            right_ascension: equatorial.longitude,
            declination: equatorial.latitude,
            distance: equatorial.distance,
            radius: self.body.mean_radius(),
            local_sidereal_time: position.topos().local_true_sidereal_time(),
        })
    }
}
