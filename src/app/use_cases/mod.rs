//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod curve;
pub mod drag;
pub mod options;
pub mod pick;
pub mod viewport;
