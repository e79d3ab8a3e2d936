//! # Orbital element representations
//!
//! Two element sets describe the orbits used by the analytic models:
//!
//! - [`keplerian_element`](crate::orbit_type::keplerian_element): classical elements
//!   `(Ω, i, ω, a, e, M)`, the mean lunar and solar orbits of the Moon model.
//! - [`vsop87_element`](crate::orbit_type::vsop87_element): VSOP87 elliptic elements
//!   `(a, λ, h, k, p, q)`, regular for vanishing eccentricity and inclination, produced by the
//!   [`Vsop87Elliptic`](crate::orbital_models::vsop87::Vsop87Elliptic) planet model.
//!
//! Both forms convert into each other with `From`.

/// Classical Keplerian elements structure and utilities.
pub mod keplerian_element;

/// VSOP87 elliptic elements and related conversions.
pub mod vsop87_element;

/// Newton tolerance used when solving Kepler's equation for element sets.
pub const KEPLER_TOLERANCE: f64 = 1e-15;
