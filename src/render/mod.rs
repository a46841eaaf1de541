//! Rendering systems for the solar system scene: bodies, orbit trails, and
//! lighting.

pub mod bodies;
pub mod lighting;
pub mod trails;

use bevy::prelude::*;

use self::bodies::BodiesPlugin;
use self::lighting::LightingPlugin;
use self::trails::TrailPlugin;

// Re-export for use in other modules
pub use self::bodies::Body;
pub use self::lighting::LightRig;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodiesPlugin, LightingPlugin, TrailPlugin));
    }
}
