//! Kern-Geometrie: Bézier-Mathematik, Kamera, Projektion, Punkt-Verschiebung.

pub mod bezier;
pub mod camera;
pub mod curve;
pub mod jointed;
pub mod mover;
pub mod presets;
pub mod tessellation;
pub mod traveler;
pub mod view;

pub use bezier::{bernstein_weights, cubic_bezier, midpoint, midpoint_chain, CubicBezier};
pub use camera::OrbitCamera;
pub use curve::CurveModel;
pub use jointed::{JointedCurve, Segment};
pub use mover::PointMover;
pub use presets::CurvePreset;
pub use tessellation::{tessellate, MIN_RESOLUTION};
pub use traveler::TravelerMode;
pub use view::ViewTransform;
