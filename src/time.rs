//! Clock advancement: one simulated day per rendered frame.

use bevy::prelude::*;

use crate::types::{FrameSet, SimulationClock};

/// Plugin stepping the simulation clock.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, advance_clock.in_set(FrameSet::Advance));
    }
}

/// Add exactly one day to the simulated date.
///
/// Runs after the body updates (see `FrameSet`), so every frame renders the
/// date the clock held when the frame began.
fn advance_clock(mut clock: ResMut<SimulationClock>) {
    clock.advance();
}
