//! Quit handling.
//!
//! The edge-triggered half of the input model: discrete events (Escape,
//! window close) are consumed once per frame. Continuous movement polling
//! lives with the camera.

use bevy::prelude::*;

use crate::types::FrameSet;

/// Plugin providing quit-on-escape.
///
/// Window close requests are already turned into an `AppExit` by Bevy's
/// window plugin; only the keyboard path is handled here.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, quit_on_escape.in_set(FrameSet::Input));
    }
}

/// Exit cleanly when Escape is pressed.
fn quit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
