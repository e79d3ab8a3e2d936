//! The Sun is the origin of heliocentric coordinates.
use crate::{
    coordinates::{PhaseCartesian, PhaseSpherical},
    ephemeris_errors::EphemerisError,
    orbital_models::{DistanceUnit, ModelKind, OrbitalModel},
    time::Instant,
};

/// Identically zero heliocentric phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sun;

impl OrbitalModel for Sun {
    fn kind(&self) -> ModelKind {
        ModelKind::Heliocentric
    }

    fn distance_unit(&self) -> DistanceUnit {
        DistanceUnit::AstronomicalUnit
    }

    fn compute_spherical(
        &mut self,
        _instant: Instant,
        _with_velocity: bool,
    ) -> Result<PhaseSpherical, EphemerisError> {
        Ok(PhaseSpherical::default())
    }

    fn compute_cartesian(
        &mut self,
        _instant: Instant,
        _with_velocity: bool,
    ) -> Result<PhaseCartesian, EphemerisError> {
        Ok(PhaseCartesian::default())
    }
}

#[cfg(test)]
mod sun_test {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_sun_is_at_origin() {
        let phase = Sun
            .compute_cartesian(Instant::from_millis(1_525_132_800_000), true)
            .unwrap();
        assert_eq!(phase.position, Vector3::zeros());
        assert_eq!(phase.velocity, Vector3::zeros());
        assert_eq!(Sun.kind(), ModelKind::Heliocentric);
    }
}
