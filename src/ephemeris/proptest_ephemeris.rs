//! Property-based tests for ephemeris computations using proptest.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::kepler::solve_eccentric_anomaly;
use super::{BodyId, Ephemeris};
use crate::types::SimDate;

/// Any date inside the element tables' validity window.
fn covered_date() -> impl Strategy<Value = SimDate> {
    // Civil day range for 1800-01-01 .. 2050-12-31
    let start = SimDate::new(1800, 1, 1).to_civil_days();
    let end = SimDate::new(2050, 12, 31).to_civil_days();
    (start..=end).prop_map(SimDate::from_civil_days)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The solver must converge for all valid eccentricities and anomalies:
    /// the returned E must satisfy M = E - e*sin(E).
    #[test]
    fn prop_kepler_solver_convergence(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.95,
    ) {
        let mean_anomaly = mean_anomaly_normalized * TAU;
        let e_anom = solve_eccentric_anomaly(eccentricity, mean_anomaly);

        let m_check = e_anom - eccentricity * e_anom.sin();
        let m_normalized = mean_anomaly.rem_euclid(TAU);

        let error = (m_check - m_normalized).abs();
        prop_assert!(
            error < 1e-8,
            "Kepler solver failed: M={}, e={}, E={}, error={}",
            mean_anomaly, eccentricity, e_anom, error
        );
    }

    /// Every rendered body has a finite position within a plausible radius
    /// for the whole coverage window.
    #[test]
    fn prop_positions_finite_and_bounded(date in covered_date()) {
        let eph = Ephemeris::new();
        for &id in BodyId::RENDERED {
            let pos = eph.position_at(id, date).unwrap();
            prop_assert!(pos.is_finite(), "{} position not finite at {}", id.name(), date);
            // Mars aphelion is ~1.67 AU; nothing rendered goes past 2 AU
            prop_assert!(
                pos.length() < 2.0,
                "{} implausibly far at {}: {} AU",
                id.name(), date, pos.length()
            );
        }
    }

    /// Orbiting bodies keep a sensible distance from the Sun: no body falls
    /// into it or escapes its orbital band.
    #[test]
    fn prop_heliocentric_distance_bands(date in covered_date()) {
        let eph = Ephemeris::new();
        let sun = eph.position_at(BodyId::Sun, date).unwrap();

        // (body, perihelion floor, aphelion ceiling), AU with margin
        let bands = [
            (BodyId::Mercury, 0.29, 0.48),
            (BodyId::Venus, 0.70, 0.74),
            (BodyId::Earth, 0.96, 1.02),
            (BodyId::Mars, 1.35, 1.68),
        ];

        for (id, lo, hi) in bands {
            let dist = (eph.position_at(id, date).unwrap() - sun).length();
            prop_assert!(
                (lo..=hi).contains(&dist),
                "{} at {} is {} AU from the Sun, outside [{}, {}]",
                id.name(), date, dist, lo, hi
            );
        }
    }
}
