//! Ephemeris module for computing celestial body positions.
//!
//! Analytic Keplerian propagation from the JPL approximate planetary
//! elements (valid 1800 AD – 2050 AD), with a mass-weighted solar
//! barycenter offset so positions come out barycentric like the DE-series
//! ephemerides this stands in for.
//!
//! Coordinate frame:
//! - Barycentric equatorial (ICRF-aligned), distances in AU.
//! - Internally computed in the J2000 ecliptic plane, then rotated by the
//!   mean obliquity.

pub mod data;
pub mod kepler;

#[cfg(test)]
mod proptest_ephemeris;

pub use data::BodyId;

use bevy::math::DVec3;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::types::SimDate;

use self::kepler::KeplerOrbit;

/// First year covered by the element tables.
pub const COVERAGE_START_YEAR: i32 = 1800;

/// Last year covered by the element tables.
pub const COVERAGE_END_YEAR: i32 = 2050;

/// Mean obliquity of the ecliptic at J2000, in degrees.
const OBLIQUITY_DEG: f64 = 23.43928;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("date {0} outside ephemeris coverage ({COVERAGE_START_YEAR}..={COVERAGE_END_YEAR})")]
    DateOutOfRange(SimDate),
}

/// Resource providing deterministic positions for all modeled bodies.
#[derive(Resource)]
pub struct Ephemeris {
    /// Baked orbital elements per body (Sun has none).
    orbits: HashMap<BodyId, Option<KeplerOrbit>>,
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl Ephemeris {
    /// Create an ephemeris with all body elements loaded.
    ///
    /// Elements are compiled in, so construction cannot fail.
    pub fn new() -> Self {
        let mut orbits = HashMap::new();
        orbits.insert(BodyId::Sun, None);
        for &id in BodyId::ORBITING {
            orbits.insert(id, id.orbit());
        }
        Self { orbits }
    }

    /// Barycentric equatorial position of a body at a calendar date, in AU.
    ///
    /// Deterministic: the same (body, date) pair always yields the same
    /// position. Dates outside the element tables' validity window are an
    /// error; callers treat that as fatal.
    pub fn position_at(&self, id: BodyId, date: SimDate) -> Result<DVec3, EphemerisError> {
        if date.year < COVERAGE_START_YEAR || date.year > COVERAGE_END_YEAR {
            return Err(EphemerisError::DateOutOfRange(date));
        }

        let heliocentric = self.heliocentric_ecliptic(id, date);
        let barycentric = heliocentric + self.sun_barycentric_offset(date);
        Ok(ecliptic_to_equatorial(barycentric))
    }

    /// Heliocentric position in the J2000 ecliptic frame (Sun at origin).
    fn heliocentric_ecliptic(&self, id: BodyId, date: SimDate) -> DVec3 {
        match self.orbits.get(&id) {
            Some(Some(orbit)) => orbit.position_at(date),
            _ => DVec3::ZERO, // Sun
        }
    }

    /// The Sun's offset from the solar-system barycenter, ecliptic frame.
    ///
    /// Mass-weighted over all modeled planets. Jupiter and Saturn dominate
    /// this sum, which is why they are in the tables at all.
    fn sun_barycentric_offset(&self, date: SimDate) -> DVec3 {
        let mut weighted = DVec3::ZERO;
        let mut total_mass = BodyId::Sun.mass_ratio();

        for &id in BodyId::ORBITING {
            let ratio = id.mass_ratio();
            weighted -= ratio * self.heliocentric_ecliptic(id, date);
            total_mass += ratio;
        }

        weighted / total_mass
    }
}

/// Rotate from the J2000 ecliptic frame to the equatorial frame.
fn ecliptic_to_equatorial(pos: DVec3) -> DVec3 {
    let (sin_e, cos_e) = OBLIQUITY_DEG.to_radians().sin_cos();
    DVec3::new(
        pos.x,
        cos_e * pos.y - sin_e * pos.z,
        sin_e * pos.y + cos_e * pos.z,
    )
}
