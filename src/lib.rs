//! Inner Solar System - animated ephemeris visualization
//!
//! A library crate exposing the scene components (bodies, camera, clock,
//! ephemeris) for testing and integration purposes.

pub mod camera;
pub mod ephemeris;
pub mod input;
pub mod render;
pub mod time;
pub mod types;
