//! Scene lighting.
//!
//! A single fixed point light near the Sun's corner of the scene. The rig is
//! an immutable descriptor; once spawned it never changes.

use bevy::prelude::*;

/// Attenuation denominator below which the light is considered cut off.
/// The GL-style factor is 1 / (constant + linear · d); the light's range is
/// the distance where that denominator reaches this value.
const ATTENUATION_CUTOFF: f32 = 16.0;

/// Luminous intensity handed to the renderer, in lumens.
const LIGHT_INTENSITY: f32 = 40_000_000.0;

/// Marker component for the scene light.
#[derive(Component)]
pub struct SceneLight;

/// Immutable description of the scene's light source.
#[derive(Resource, Clone, Debug)]
pub struct LightRig {
    /// Homogeneous position; w = 1 marks a positional (not directional) light.
    pub position: Vec4,
    /// Diffuse color.
    pub color: Color,
    /// GL-style constant attenuation coefficient.
    pub constant_attenuation: f32,
    /// GL-style linear attenuation coefficient.
    pub linear_attenuation: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            position: Vec4::new(15.0, 5.0, 15.0, 1.0),
            color: Color::WHITE,
            constant_attenuation: 0.1,
            linear_attenuation: 0.05,
        }
    }
}

impl LightRig {
    /// Distance at which the attenuated light falls below the cutoff.
    pub fn range(&self) -> f32 {
        (ATTENUATION_CUTOFF - self.constant_attenuation) / self.linear_attenuation
    }
}

/// Plugin providing the scene light.
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LightRig>()
            .add_systems(Startup, spawn_light);
    }
}

/// Spawn the point light described by the rig.
fn spawn_light(mut commands: Commands, rig: Res<LightRig>) {
    commands.spawn((
        PointLight {
            color: rig.color,
            intensity: LIGHT_INTENSITY,
            range: rig.range(),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(rig.position.truncate()),
        SceneLight,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rig_constants() {
        let rig = LightRig::default();
        assert_eq!(rig.position, Vec4::new(15.0, 5.0, 15.0, 1.0));
        assert_eq!(rig.position.w, 1.0, "light is positional");
        assert_abs_diff_eq!(rig.constant_attenuation, 0.1);
        assert_abs_diff_eq!(rig.linear_attenuation, 0.05);
    }

    #[test]
    fn test_range_covers_scene() {
        // The far plane sits at 40 scene units; the light must reach past it
        let rig = LightRig::default();
        assert!(rig.range() > 40.0, "light range {} too short", rig.range());
    }
}
