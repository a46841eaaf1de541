//! Inner Solar System - animated ephemeris visualization
//!
//! Renders the Sun and the four inner planets at their ephemeris positions,
//! advancing one simulated day per frame, with arrow-key orbit controls.

use bevy::prelude::*;
use bevy::window::PresentMode;

mod camera;
mod ephemeris;
mod input;
mod render;
mod time;
mod types;

use camera::CameraPlugin;
use ephemeris::Ephemeris;
use input::InputPlugin;
use render::RenderPlugin;
use time::ClockPlugin;
use types::{FrameSet, SimulationClock};

fn main() -> AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Inner Solar System".into(),
                resolution: (800, 600).into(),
                // Vsync gives the soft ~60 Hz frame cap
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.1, 0.1, 0.1)))
        // Insert resources before plugins that depend on them
        .insert_resource(Ephemeris::default())
        .insert_resource(SimulationClock::default())
        // Frame order: input, then body updates and trail drawing for the
        // current date, then the one-day clock step
        .configure_sets(
            Update,
            (FrameSet::Input, FrameSet::Simulate, FrameSet::Advance).chain(),
        )
        .add_plugins((InputPlugin, CameraPlugin, ClockPlugin, RenderPlugin))
        .run()
}
