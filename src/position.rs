//! # Position of one body
//!
//! A [`Position`] is a transient view built by
//! [`SolarSystem::ephemerides`](crate::solar_system::SolarSystem::ephemerides): the
//! heliocentric and geocentric phase of one body, the apparent geocentric Sun, and an observer
//! ([`Topos`]). From these it produces coordinates in any
//!
//! * [`Frame`]: ecliptical, equatorial or horizontal,
//! * [`Center`]: heliocentric, geocentric or topocentric,
//! * [`Equinox`]: mean (precession only) or true (precession and nutation),
//!
//! plus the photometric and geometric quantities derived from the Sun–body–Earth triangle.
//!
//! Topocentric vectors are the geocentric ones minus the observer's geocentric vector in the
//! same frame. Horizontal spherical coordinates carry the azimuth (from north through east)
//! in `longitude` and the altitude in `latitude`.
//!
//! ## Sign conventions
//!
//! Phase angle and elongation are signed with the z component of a cross product in the
//! ecliptic, `atan2((a × b)·ẑ, a·b)` (see [`signed_angle`]):
//!
//! * phase angle: from the heliocentric to the geocentric direction of the body,
//! * elongation: from the Sun to the body as seen from the Earth (or the observer); positive
//!   when the body is east of the Sun.
use nalgebra::Vector3;

use crate::{
    body::Body,
    constants::{Meter, Radian},
    coordinates::{signed_angle, PhaseCartesian, Spherical},
    observers::Topos,
    ref_system::azimuth_altitude,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    Ecliptical,
    Equatorial,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Center {
    Heliocentric,
    Geocentric,
    Topocentric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equinox {
    Mean,
    True,
}

/// Cosine of the Sun–body–Earth angle mapped to the lit fraction of the disk
pub fn illuminated_fraction(heliocentric: &Vector3<f64>, geocentric: &Vector3<f64>) -> f64 {
    let cos_phase = heliocentric.dot(geocentric) / (heliocentric.norm() * geocentric.norm());
    (1.0 + cos_phase) * 0.5
}

/// Signed phase angle at the body between the Sun and the Earth
pub fn phase_angle(heliocentric: &Vector3<f64>, geocentric: &Vector3<f64>) -> Radian {
    signed_angle(heliocentric, geocentric)
}

/// Signed angle from the Sun to the body, both seen from the same origin
pub fn elongation(body: &Vector3<f64>, sun: &Vector3<f64>) -> Radian {
    signed_angle(sun, body)
}

/// Apparent motion is retrograde when the ecliptic longitude decreases.
pub fn is_retrograde(phase: &PhaseCartesian) -> bool {
    let p = &phase.position;
    let v = &phase.velocity;
    p.x * v.y - p.y * v.x < 0.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    body: Body,
    heliocentric: PhaseCartesian,
    geocentric: PhaseCartesian,
    sun_geocentric: Vector3<f64>,
    topos: Topos,
}

impl Position {
    /// Arguments
    /// ---------
    /// * `heliocentric`, `geocentric`: phase of the body, mean ecliptic of date (m, m/s)
    /// * `sun_geocentric`: apparent geocentric Sun, mean ecliptic of date (m)
    /// * `topos`: observer, which also fixes the instant of the frame matrices
    pub fn new(
        body: Body,
        heliocentric: PhaseCartesian,
        geocentric: PhaseCartesian,
        sun_geocentric: Vector3<f64>,
        topos: Topos,
    ) -> Self {
        Position {
            body,
            heliocentric,
            geocentric,
            sun_geocentric,
            topos,
        }
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub fn topos(&self) -> &Topos {
        &self.topos
    }

    pub fn heliocentric_phase(&self) -> &PhaseCartesian {
        &self.heliocentric
    }

    pub fn geocentric_phase(&self) -> &PhaseCartesian {
        &self.geocentric
    }

    /// Mean ecliptical vector of the body from `center`
    fn mean_ecliptical(&self, center: Center) -> Vector3<f64> {
        match center {
            Center::Heliocentric => self.heliocentric.position,
            Center::Geocentric => self.geocentric.position,
            Center::Topocentric => self.geocentric.position - self.topos.mean_ecliptical(),
        }
    }

    fn mean_equatorial(&self, center: Center) -> Vector3<f64> {
        let ecliptic = self.topos.ecliptic();
        match center {
            Center::Topocentric => {
                ecliptic.ecl_to_mean_equ() * self.geocentric.position - self.topos.mean_equatorial()
            }
            _ => ecliptic.ecl_to_mean_equ() * self.mean_ecliptical(center),
        }
    }

    fn true_ecliptical(&self, center: Center) -> Vector3<f64> {
        let ecliptic = self.topos.ecliptic();
        match center {
            Center::Topocentric => {
                ecliptic.mean_ecl_to_true_ecl() * self.geocentric.position
                    - self.topos.true_ecliptical()
            }
            _ => ecliptic.mean_ecl_to_true_ecl() * self.mean_ecliptical(center),
        }
    }

    fn true_equatorial(&self, center: Center) -> Vector3<f64> {
        let ecliptic = self.topos.ecliptic();
        match center {
            Center::Topocentric => {
                ecliptic.mean_ecl_to_true_equ() * self.geocentric.position
                    - self.topos.true_equatorial()
            }
            _ => ecliptic.mean_ecl_to_true_equ() * self.mean_ecliptical(center),
        }
    }

    /// Cartesian coordinates in meters.
    pub fn cartesian(&self, frame: Frame, center: Center, equinox: Equinox) -> Vector3<f64> {
        match (equinox, frame) {
            (Equinox::Mean, Frame::Ecliptical) => self.mean_ecliptical(center),
            (Equinox::Mean, Frame::Equatorial) => self.mean_equatorial(center),
            (Equinox::Mean, Frame::Horizontal) => {
                self.topos.mean_equatorial_to_horizontal() * self.mean_equatorial(center)
            }
            (Equinox::True, Frame::Ecliptical) => self.true_ecliptical(center),
            (Equinox::True, Frame::Equatorial) => self.true_equatorial(center),
            (Equinox::True, Frame::Horizontal) => {
                self.topos.true_equatorial_to_horizontal() * self.true_equatorial(center)
            }
        }
    }

    /// Spherical coordinates; for [`Frame::Horizontal`] the longitude is the azimuth from
    /// north and the latitude the altitude.
    pub fn spherical(&self, frame: Frame, center: Center, equinox: Equinox) -> Spherical {
        let cartesian = self.cartesian(frame, center, equinox);
        match frame {
            Frame::Horizontal => azimuth_altitude(&cartesian),
            _ => Spherical::from_cartesian(&cartesian),
        }
    }

    /// Distance of the body from `center` (meters)
    pub fn distance(&self, center: Center) -> Meter {
        self.mean_ecliptical(center).norm()
    }

    /// Apparent angular radius seen from `center`
    pub fn apparent_radius(&self, center: Center) -> Radian {
        (self.body.mean_radius() / self.distance(center)).min(1.0).asin()
    }

    pub fn illuminated_fraction(&self) -> f64 {
        illuminated_fraction(&self.heliocentric.position, &self.geocentric.position)
    }

    pub fn phase_angle(&self) -> Radian {
        phase_angle(&self.heliocentric.position, &self.geocentric.position)
    }

    /// Elongation from the Sun seen from the Earth's center or from the observer.
    ///
    /// A heliocentric center has no meaningful elongation; it is treated as geocentric.
    pub fn elongation(&self, center: Center) -> Radian {
        match center {
            Center::Topocentric => {
                let observer = self.topos.mean_ecliptical();
                elongation(
                    &(self.geocentric.position - observer),
                    &(self.sun_geocentric - observer),
                )
            }
            _ => elongation(&self.geocentric.position, &self.sun_geocentric),
        }
    }

    pub fn is_retrograde(&self) -> bool {
        is_retrograde(&self.geocentric)
    }

    /// True when the body's center is above the geometric horizon of the observer.
    pub fn is_visible(&self) -> bool {
        self.cartesian(Frame::Horizontal, Center::Topocentric, Equinox::Mean)
            .z
            > 0.0
    }
}

#[cfg(test)]
mod position_test {
    use super::*;
    use crate::{
        constants::{AU, DPI, RADEG},
        observers::GeographicLocation,
        time::Instant,
    };
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn topos() -> Topos {
        Topos::new(
            GeographicLocation::from_degrees(11.58198, 48.13513),
            Instant::from_gregorian_utc(2018, 5, 1, 12, 0, 0).unwrap(),
        )
    }

    /// Earth at (1, 0, 0) AU, body at (0, 1.5, 0) AU heliocentric
    fn quadrature() -> Position {
        let earth = Vector3::new(AU, 0.0, 0.0);
        let helio = Vector3::new(0.0, 1.5 * AU, 0.0);
        Position::new(
            Body::Mars,
            PhaseCartesian::new(helio, Vector3::new(-1.0, 0.0, 0.0)),
            PhaseCartesian::new(helio - earth, Vector3::new(10.0, 1.0, 0.0)),
            -earth,
            topos(),
        )
    }

    #[test]
    fn test_frames_share_distance() {
        let position = quadrature();
        let d = position.distance(Center::Geocentric);
        for frame in [Frame::Ecliptical, Frame::Equatorial, Frame::Horizontal] {
            for equinox in [Equinox::Mean, Equinox::True] {
                let s = position.spherical(frame, Center::Geocentric, equinox);
                assert_relative_eq!(s.distance, d, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_topocentric_is_geocentric_minus_observer() {
        let position = quadrature();
        let geo = position.cartesian(Frame::Equatorial, Center::Geocentric, Equinox::True);
        let topo = position.cartesian(Frame::Equatorial, Center::Topocentric, Equinox::True);
        assert_relative_eq!(geo - topo, position.topos().true_equatorial(), epsilon = 1e-3);

        let geo = position.cartesian(Frame::Ecliptical, Center::Geocentric, Equinox::Mean);
        let topo = position.cartesian(Frame::Ecliptical, Center::Topocentric, Equinox::Mean);
        assert_relative_eq!(geo - topo, position.topos().mean_ecliptical(), epsilon = 1e-3);
    }

    #[test]
    fn test_mean_equatorial_matches_obliquity_rotation() {
        let position = quadrature();
        let ecl = position.spherical(Frame::Ecliptical, Center::Heliocentric, Equinox::Mean);
        let equ = position.spherical(Frame::Equatorial, Center::Heliocentric, Equinox::Mean);
        // the body lies on the ecliptic at longitude 90°: declination equals the obliquity
        assert_relative_eq!(ecl.longitude, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(
            equ.latitude,
            position.topos().ecliptic().mean_obliquity(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_phase_and_elongation() {
        let position = quadrature();
        // Sun–body–Earth triangle: tan(phase) = 1 / 1.5
        let expected_phase = (1.0_f64 / 1.5).atan();
        assert_relative_eq!(position.phase_angle().abs(), expected_phase, epsilon = 1e-12);
        assert_relative_eq!(
            position.illuminated_fraction(),
            (1.0 + expected_phase.cos()) / 2.0,
            epsilon = 1e-12
        );
        // seen from the Earth the Sun is at 180°, the body at 180° − atan(1.5)
        let expected_elongation = -(1.5_f64).atan();
        assert_relative_eq!(
            position.elongation(Center::Geocentric),
            expected_elongation,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            position.elongation(Center::Topocentric),
            expected_elongation,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_retrograde_flag() {
        let position = quadrature();
        // geocentric position (−1, 1.5) AU, velocity (10, 1): x·vy − y·vx < 0
        assert!(position.is_retrograde());
        let prograde =
            PhaseCartesian::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert!(!is_retrograde(&prograde));
    }

    #[test]
    fn test_horizontal_altitude_range() {
        let position = quadrature();
        let horizontal = position.spherical(Frame::Horizontal, Center::Topocentric, Equinox::Mean);
        assert!(horizontal.latitude.abs() <= FRAC_PI_2);
        assert!(horizontal.longitude >= 0.0 && horizontal.longitude < DPI);
        assert_eq!(position.is_visible(), horizontal.latitude > 0.0);
    }

    #[test]
    fn test_apparent_radius() {
        let position = quadrature();
        let d = position.distance(Center::Geocentric);
        assert_relative_eq!(
            position.apparent_radius(Center::Geocentric),
            (3.397e6 / d).asin(),
            epsilon = 1e-15
        );
        assert!(position.apparent_radius(Center::Geocentric) < RADEG);
    }
}
