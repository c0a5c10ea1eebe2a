pub mod camera;
pub mod cli;
pub mod core;
pub mod geometry;
pub mod math;
pub mod sketches;
pub mod trail;
