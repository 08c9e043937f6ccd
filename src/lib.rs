//! Bézier-Kurven-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DragSession, PointerButton, Selection,
    ViewState,
};
pub use core::{
    bernstein_weights, midpoint_chain, tessellate, CubicBezier, CurveModel, CurvePreset,
    JointedCurve, OrbitCamera, PointMover, Segment, TravelerMode, ViewTransform,
};
pub use shared::{EditorOptions, RenderScene};
