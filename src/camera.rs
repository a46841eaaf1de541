//! Orbit camera for the solar system scene.
//!
//! A fixed-radius camera that circles the origin under arrow-key control.
//! No zoom, no pan: the user only rotates around the scene.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::types::FrameSet;

/// Fixed camera distance from the origin, in scene units.
pub const CAMERA_DISTANCE: f32 = 20.0;

/// Yaw/pitch step per frame while an arrow key is held, in radians.
pub const ANGLE_STEP: f32 = 0.05;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 40.0;

/// Near clip plane.
pub const NEAR_PLANE: f32 = 1.0;

/// Far clip plane.
pub const FAR_PLANE: f32 = 40.0;

/// One of the four orbit adjustments a held arrow key produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking the camera's orbit angles.
///
/// Both angles are kept in [0, 2π) at all times; wrap-around is intentional
/// so holding a key cycles smoothly through a full revolution.
#[derive(Resource, Clone, Debug)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: CAMERA_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Current yaw angle in [0, 2π).
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch angle in [0, 2π).
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply one held-key adjustment, then wrap both angles into [0, 2π).
    ///
    /// Uses `rem_euclid`, not `%`: the remainder operator would return
    /// negative values after a leftward/downward step from zero.
    pub fn apply(&mut self, direction: OrbitDirection) {
        match direction {
            OrbitDirection::Left => self.yaw -= ANGLE_STEP,
            OrbitDirection::Right => self.yaw += ANGLE_STEP,
            OrbitDirection::Down => self.pitch -= ANGLE_STEP,
            OrbitDirection::Up => self.pitch += ANGLE_STEP,
        }
        self.yaw = self.yaw.rem_euclid(TAU);
        self.pitch = self.pitch.rem_euclid(TAU);
    }

    /// Eye position from the orbit angles (spherical to Cartesian).
    ///
    /// The camera always looks at the origin with up = +Y.
    pub fn eye_position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(
            sin_yaw * cos_pitch * self.distance,
            sin_pitch * self.distance,
            cos_yaw * cos_pitch * self.distance,
        )
    }
}

/// Plugin providing the orbit camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, orbit_camera.in_set(FrameSet::Input));
    }
}

/// Spawn the main camera with the fixed perspective projection.
fn setup_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_translation(orbit.eye_position()).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Apply held arrow keys to the orbit angles and rewrite the camera transform.
///
/// This is the level-triggered half of the input model: it polls the
/// currently-down key snapshot once per frame. Several keys held at once all
/// apply within the frame; yaw and pitch are independent, so order across
/// keys does not matter.
fn orbit_camera(
    keys: Res<ButtonInput<KeyCode>>,
    mut orbit: ResMut<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if keys.pressed(KeyCode::ArrowLeft) {
        orbit.apply(OrbitDirection::Left);
    }
    if keys.pressed(KeyCode::ArrowRight) {
        orbit.apply(OrbitDirection::Right);
    }
    if keys.pressed(KeyCode::ArrowDown) {
        orbit.apply(OrbitDirection::Down);
    }
    if keys.pressed(KeyCode::ArrowUp) {
        orbit.apply(OrbitDirection::Up);
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    *transform =
        Transform::from_translation(orbit.eye_position()).looking_at(Vec3::ZERO, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_eye_position() {
        // At yaw=0, pitch=0 the camera sits on the +Z axis at full distance
        let cam = OrbitCamera::default();
        let eye = cam.eye_position();
        assert_abs_diff_eq!(eye.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(eye.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(eye.z, CAMERA_DISTANCE, epsilon = 1e-6);
    }

    #[test]
    fn test_eye_distance_constant() {
        // The eye stays on the sphere of radius `distance` under any input
        let mut cam = OrbitCamera::default();
        for i in 0..500 {
            let dir = match i % 4 {
                0 => OrbitDirection::Left,
                1 => OrbitDirection::Up,
                2 => OrbitDirection::Right,
                _ => OrbitDirection::Down,
            };
            cam.apply(dir);
            assert_abs_diff_eq!(cam.eye_position().length(), CAMERA_DISTANCE, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_angles_wrap_into_range() {
        let mut cam = OrbitCamera::default();

        // A single left step from zero must wrap to just under 2π, not go negative
        cam.apply(OrbitDirection::Left);
        assert_abs_diff_eq!(cam.yaw(), TAU - ANGLE_STEP, epsilon = 1e-6);

        // Long runs in every direction stay inside [0, 2π)
        for _ in 0..1000 {
            cam.apply(OrbitDirection::Left);
            cam.apply(OrbitDirection::Down);
            assert!((0.0..TAU).contains(&cam.yaw()), "yaw out of range: {}", cam.yaw());
            assert!((0.0..TAU).contains(&cam.pitch()), "pitch out of range: {}", cam.pitch());
        }
        for _ in 0..2500 {
            cam.apply(OrbitDirection::Right);
            cam.apply(OrbitDirection::Up);
            assert!((0.0..TAU).contains(&cam.yaw()), "yaw out of range: {}", cam.yaw());
            assert!((0.0..TAU).contains(&cam.pitch()), "pitch out of range: {}", cam.pitch());
        }
    }

    #[test]
    fn test_yaw_and_pitch_independent() {
        let mut cam = OrbitCamera::default();
        cam.apply(OrbitDirection::Right);
        assert_abs_diff_eq!(cam.yaw(), ANGLE_STEP, epsilon = 1e-6);
        assert_abs_diff_eq!(cam.pitch(), 0.0, epsilon = 1e-6);

        cam.apply(OrbitDirection::Up);
        assert_abs_diff_eq!(cam.yaw(), ANGLE_STEP, epsilon = 1e-6);
        assert_abs_diff_eq!(cam.pitch(), ANGLE_STEP, epsilon = 1e-6);
    }

    #[test]
    fn test_opposite_inputs_cancel() {
        let mut cam = OrbitCamera::default();
        cam.apply(OrbitDirection::Left);
        cam.apply(OrbitDirection::Right);
        assert_abs_diff_eq!(cam.yaw(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quarter_turn_up_looks_from_above() {
        let mut cam = OrbitCamera::default();
        // π/2 is not an exact multiple of the step; get close to it
        let steps = (std::f32::consts::FRAC_PI_2 / ANGLE_STEP).round() as usize;
        for _ in 0..steps {
            cam.apply(OrbitDirection::Up);
        }
        let eye = cam.eye_position();
        assert!(eye.y > 0.95 * CAMERA_DISTANCE, "eye should be near the +Y pole");
    }
}
