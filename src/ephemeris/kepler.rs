//! Kepler orbit solver using Newton's method for the Kepler equation.

use bevy::math::DVec3;

use crate::types::SimDate;

/// Days in a Julian century (the rate unit of the element tables).
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Keplerian orbital elements with secular rates, in the form of the JPL
/// approximate planetary ephemeris tables: distances in AU, angles in
/// degrees, rates per Julian century from J2000.
#[derive(Clone, Debug)]
pub struct KeplerOrbit {
    /// Semi-major axis in AU
    semi_major_axis: f64,
    /// Eccentricity (dimensionless, 0 ≤ e < 1 for ellipse)
    eccentricity: f64,
    /// Inclination to the ecliptic in degrees
    inclination: f64,
    /// Mean longitude at J2000 in degrees
    mean_longitude: f64,
    /// Longitude of perihelion in degrees
    longitude_of_perihelion: f64,
    /// Longitude of the ascending node in degrees
    ascending_node: f64,
    /// Secular rates of the six elements above, per Julian century
    rates: [f64; 6],
}

impl KeplerOrbit {
    /// Create an orbit from a table row of J2000 elements and their rates.
    ///
    /// Element order (both arrays): a (AU), e, I (deg), L (deg), ϖ (deg),
    /// Ω (deg) — the column order of the JPL approximate-elements table.
    pub fn from_elements(epoch: [f64; 6], rates: [f64; 6]) -> Self {
        Self {
            semi_major_axis: epoch[0],
            eccentricity: epoch[1],
            inclination: epoch[2],
            mean_longitude: epoch[3],
            longitude_of_perihelion: epoch[4],
            ascending_node: epoch[5],
            rates,
        }
    }

    /// Heliocentric position in the J2000 ecliptic frame at the given date.
    ///
    /// Returns (x, y, z) in AU.
    pub fn position_at(&self, date: SimDate) -> DVec3 {
        let t = date.days_since_j2000() / DAYS_PER_CENTURY;

        // Elements at time t (epoch value + secular rate)
        let a = self.semi_major_axis + self.rates[0] * t;
        let e = self.eccentricity + self.rates[1] * t;
        let i = (self.inclination + self.rates[2] * t).to_radians();
        let l = (self.mean_longitude + self.rates[3] * t).to_radians();
        let varpi = (self.longitude_of_perihelion + self.rates[4] * t).to_radians();
        let node = (self.ascending_node + self.rates[5] * t).to_radians();

        // Mean anomaly and argument of perihelion from the longitudes
        let mean_anomaly = l - varpi;
        let arg_perihelion = varpi - node;

        let e_anomaly = solve_eccentric_anomaly(e, mean_anomaly);

        // Position in the perifocal frame (periapsis along +x)
        let xp = a * (e_anomaly.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * e_anomaly.sin();

        // Rotate by argument of perihelion, inclination, ascending node
        let (sin_w, cos_w) = arg_perihelion.sin_cos();
        let (sin_o, cos_o) = node.sin_cos();
        let (sin_i, cos_i) = i.sin_cos();

        DVec3::new(
            (cos_w * cos_o - sin_w * sin_o * cos_i) * xp
                + (-sin_w * cos_o - cos_w * sin_o * cos_i) * yp,
            (cos_w * sin_o + sin_w * cos_o * cos_i) * xp
                + (-sin_w * sin_o + cos_w * cos_o * cos_i) * yp,
            (sin_w * sin_i) * xp + (cos_w * sin_i) * yp,
        )
    }

    /// Orbital period in days, from the mean-longitude rate.
    pub fn period_days(&self) -> f64 {
        360.0 / self.rates[3] * DAYS_PER_CENTURY
    }
}

/// Solve Kepler's equation M = E - e*sin(E) for eccentric anomaly E
/// using Newton's method.
///
/// Works well for eccentricities up to ~0.95; all planets here are far
/// below that.
pub fn solve_eccentric_anomaly(eccentricity: f64, mean_anomaly: f64) -> f64 {
    // Normalize mean anomaly to [0, 2π)
    let m = mean_anomaly.rem_euclid(std::f64::consts::TAU);

    // Initial guess: E = M for low eccentricity, π for high e
    let mut e_anomaly = if eccentricity < 0.8 {
        m
    } else {
        std::f64::consts::PI
    };

    // Newton's method iteration
    for _ in 0..50 {
        let sin_e = e_anomaly.sin();
        let cos_e = e_anomaly.cos();

        // f(E) = E - e*sin(E) - M
        let f = e_anomaly - eccentricity * sin_e - m;
        // f'(E) = 1 - e*cos(E)
        let f_prime = 1.0 - eccentricity * cos_e;

        // Newton step
        let delta = f / f_prime;
        e_anomaly -= delta;

        if delta.abs() < 1e-12 {
            break;
        }
    }

    e_anomaly
}
