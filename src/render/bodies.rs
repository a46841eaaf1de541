//! Celestial body spawning and per-frame position updates.
//!
//! Each body owns a bounded FIFO history of its recent scene positions (the
//! orbit trail), capped at one orbital period plus the current point.

use std::collections::VecDeque;

use bevy::{math::DVec3, prelude::*};

use crate::ephemeris::{BodyId, Ephemeris};
use crate::types::{FrameSet, SimulationClock, SCENE_SCALE};

/// Sphere tessellation: longitudinal sectors and latitudinal stacks.
const SPHERE_SECTORS: u32 = 40;
const SPHERE_STACKS: u32 = 40;

/// A renderable celestial body with its orbit trail.
#[derive(Component)]
pub struct Body {
    /// Identifier for ephemeris lookups.
    pub id: BodyId,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Sphere and trail color.
    pub color: Color,
    /// Days for one full orbit; bounds the trail length.
    pub orbital_period_days: usize,
    /// Factor from raw ephemeris AU to scene units.
    pub scale: f64,
    /// Recent scaled positions, oldest first.
    trail: VecDeque<Vec3>,
}

impl Body {
    pub fn new(id: BodyId, radius: f32, color: Color, orbital_period_days: usize) -> Self {
        Self {
            id,
            radius,
            color,
            orbital_period_days,
            scale: SCENE_SCALE,
            trail: VecDeque::with_capacity(orbital_period_days + 1),
        }
    }

    /// Record the body's raw ephemeris position for one frame.
    ///
    /// Scales each coordinate uniformly, appends the result to the trail,
    /// and evicts from the front while the trail exceeds its period+1 bound.
    /// Returns the scaled scene position.
    pub fn observe(&mut self, raw: DVec3) -> Vec3 {
        let scaled = raw * self.scale;
        let position = Vec3::new(scaled.x as f32, scaled.y as f32, scaled.z as f32);

        self.trail.push_back(position);
        while self.trail.len() > self.orbital_period_days + 1 {
            self.trail.pop_front();
        }

        position
    }

    /// Trail positions in insertion order (oldest to newest).
    pub fn trail(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.trail.iter().copied()
    }

    /// Consecutive trail position pairs, for segment drawing.
    pub fn trail_segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.trail
            .iter()
            .zip(self.trail.iter().skip(1))
            .map(|(a, b)| (*a, *b))
    }

    /// Current trail length.
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}

/// The fixed five bodies of the scene, with the visual parameters of the
/// original rendering: (id, radius, color, orbital period in days).
fn scene_bodies() -> [Body; 5] {
    [
        Body::new(BodyId::Sun, 0.5, Color::srgb(1.0, 1.0, 0.0), 0),
        Body::new(BodyId::Mercury, 0.2, Color::srgb(0.5, 0.5, 0.5), 88),
        Body::new(BodyId::Venus, 0.35, Color::srgb(0.9, 0.5, 0.2), 225),
        Body::new(BodyId::Earth, 0.4, Color::srgb(0.7, 0.8, 0.7), 365),
        Body::new(BodyId::Mars, 0.3, Color::srgb(0.6, 0.2, 0.2), 687),
    ]
}

/// Plugin providing body spawning and position updates.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system)
            .add_systems(Update, update_body_positions.in_set(FrameSet::Simulate));
    }
}

/// Spawn the Sun and the four inner planets.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    ephemeris: Res<Ephemeris>,
    clock: Res<SimulationClock>,
    mut exit: MessageWriter<AppExit>,
) {
    let date = clock.value();

    for mut body in scene_bodies() {
        let raw = match ephemeris.position_at(body.id, date) {
            Ok(raw) => raw,
            Err(err) => {
                // Startup-time ephemeris failure: abort before running
                error!("ephemeris unavailable for {} at {}: {}", body.id.name(), date, err);
                exit.write(AppExit::from_code(1));
                return;
            }
        };
        let position = body.observe(raw);

        let mesh = meshes.add(Sphere::new(body.radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS));

        // The Sun glows; planets are lit by it
        let material = materials.add(StandardMaterial {
            base_color: body.color,
            emissive: if body.id == BodyId::Sun {
                body.color.to_linear() * 2.0
            } else {
                LinearRgba::BLACK
            },
            ..default()
        });

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(position),
            body,
        ));
    }

    info!("Spawned solar system at {}", date);
}

/// Move every body to its ephemeris position for the current date.
///
/// An ephemeris failure is fatal: the fixed body set and the monotonically
/// advancing date are both under our control, so a failure means the date
/// walked off the ephemeris coverage. Log it and exit non-zero.
pub fn update_body_positions(
    ephemeris: Res<Ephemeris>,
    clock: Res<SimulationClock>,
    mut bodies: Query<(&mut Body, &mut Transform)>,
    mut exit: MessageWriter<AppExit>,
) {
    let date = clock.value();

    for (mut body, mut transform) in bodies.iter_mut() {
        match ephemeris.position_at(body.id, date) {
            Ok(raw) => {
                transform.translation = body.observe(raw);
            }
            Err(err) => {
                error!("ephemeris query failed for {} at {}: {}", body.id.name(), date, err);
                exit.write(AppExit::from_code(1));
                return;
            }
        }
    }
}
