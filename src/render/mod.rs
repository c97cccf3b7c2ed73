//! The rendering pipeline.
//!
//! One [`draw_mesh`] call runs the whole pipeline synchronously: vertex
//! stage (transforms + optional per-vertex lighting), then per-triangle
//! scan conversion with depth testing and optional per-pixel lighting. The
//! caller owns every output buffer; the pipeline only reads and writes
//! individual elements.

mod raster;
mod shading;
mod targets;
mod uniforms;
mod vertex_stage;

pub use raster::{draw_mesh, draw_triangle};
pub use shading::{compute_lighting, Fragment, AMBIENT_STRENGTH, SHININESS, SPECULAR_STRENGTH};
pub use targets::{RenderTargets, FAR_DEPTH};
pub use uniforms::{LightingMode, UniformBuffer};
pub use vertex_stage::{process_vertex, ProcessedVertex};
