//! Orbit trail rendering using Bevy Gizmos.
//!
//! Each planet's trail is the path it has traced since the start date, drawn
//! in the body's own color. Every consecutive position pair is issued as its
//! own segment rather than one continuous polyline, matching the per-pair
//! closed loops of the original renderer (a two-point loop collapses to the
//! segment itself).

use bevy::prelude::*;

use crate::ephemeris::BodyId;
use crate::types::FrameSet;

use super::bodies::{update_body_positions, Body};

/// Plugin providing trail drawing.
pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            draw_orbit_trails
                .in_set(FrameSet::Simulate)
                .after(update_body_positions),
        );
    }
}

/// Draw every non-Sun body's trail, one segment per consecutive pair.
fn draw_orbit_trails(mut gizmos: Gizmos, bodies: Query<&Body>) {
    for body in bodies.iter() {
        // The Sun barely moves and its period-0 trail holds a single point
        if body.id == BodyId::Sun {
            continue;
        }

        for (from, to) in body.trail_segments() {
            gizmos.line(from, to, body.color);
        }
    }
}
