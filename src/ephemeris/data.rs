//! Orbital elements for the modeled bodies (J2000 epoch, with secular rates).
//! Source: NASA JPL "Keplerian elements for approximate positions of the
//! major planets" (Standish), 1800 AD – 2050 AD table. Earth uses the
//! Earth-Moon barycenter row.

use super::kepler::KeplerOrbit;

/// Identifier for the bodies known to the ephemeris.
///
/// Jupiter and Saturn are never rendered; they carry elements only so the
/// solar-system barycenter can be placed (see `Ephemeris::position_at`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
}

impl BodyId {
    /// The five bodies drawn in the scene.
    pub const RENDERED: &'static [BodyId] = &[
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
    ];

    /// Every body with a heliocentric orbit (everything but the Sun).
    pub const ORBITING: &'static [BodyId] = &[
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
        }
    }

    /// Mass relative to the Sun (used for the barycenter offset).
    /// Earth's value includes the Moon.
    pub fn mass_ratio(&self) -> f64 {
        match self {
            BodyId::Sun => 1.0,
            BodyId::Mercury => 1.660e-7,
            BodyId::Venus => 2.447e-6,
            BodyId::Earth => 3.040e-6,
            BodyId::Mars => 3.227e-7,
            BodyId::Jupiter => 9.5479e-4,
            BodyId::Saturn => 2.8589e-4,
        }
    }

    /// Heliocentric orbital elements, or None for the Sun.
    ///
    /// Element order: a (AU), e, I (deg), L (deg), ϖ (deg), Ω (deg);
    /// the second array holds the per-Julian-century rates.
    pub fn orbit(&self) -> Option<KeplerOrbit> {
        let (epoch, rates) = match self {
            BodyId::Sun => return None,
            BodyId::Mercury => (
                [0.387_099_27, 0.205_635_93, 7.004_979_02, 252.250_323_50, 77.457_796_28, 48.330_765_93],
                [0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81],
            ),
            BodyId::Venus => (
                [0.723_335_66, 0.006_776_72, 3.394_676_05, 181.979_099_50, 131.602_467_18, 76.679_842_55],
                [0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18],
            ),
            BodyId::Earth => (
                [1.000_002_61, 0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93, 0.0],
                [0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64, 0.0],
            ),
            BodyId::Mars => (
                [1.523_710_34, 0.093_394_10, 1.849_691_42, -4.553_432_05, -23.943_629_59, 49.559_538_91],
                [0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43],
            ),
            BodyId::Jupiter => (
                [5.202_887_00, 0.048_386_24, 1.304_396_95, 34.396_440_51, 14.728_479_83, 100.473_909_09],
                [-0.000_116_07, -0.000_132_53, -0.001_837_14, 3_034.746_127_75, 0.212_526_68, 0.204_691_06],
            ),
            BodyId::Saturn => (
                [9.536_675_94, 0.053_861_79, 2.485_991_87, 49.954_244_23, 92.598_878_31, 113.662_424_48],
                [-0.001_250_60, -0.000_509_91, 0.001_936_09, 1_222.493_622_01, -0.418_972_16, -0.288_677_94],
            ),
        };
        Some(KeplerOrbit::from_elements(epoch, rates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_has_no_orbit() {
        assert!(BodyId::Sun.orbit().is_none());
    }

    #[test]
    fn test_all_orbiting_bodies_have_elements() {
        for &id in BodyId::ORBITING {
            assert!(id.orbit().is_some(), "{} should have elements", id.name());
        }
    }

    #[test]
    fn test_rendered_set_is_the_fixed_five() {
        assert_eq!(BodyId::RENDERED.len(), 5);
        assert_eq!(BodyId::RENDERED[0], BodyId::Sun);
        assert!(!BodyId::RENDERED.contains(&BodyId::Jupiter));
        assert!(!BodyId::RENDERED.contains(&BodyId::Saturn));
    }

    #[test]
    fn test_mass_ratios_ordering() {
        // Jupiter dominates the planetary masses; everything is far below the Sun
        for &id in BodyId::ORBITING {
            assert!(id.mass_ratio() < 1e-3);
            if id != BodyId::Jupiter {
                assert!(id.mass_ratio() < BodyId::Jupiter.mass_ratio());
            }
        }
    }
}
