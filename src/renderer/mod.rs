//! Rendering module
//!
//! Entities draw onto the `Surface` trait. `ShapeBatch` tessellates those
//! draws into triangles and `RenderState` pushes them through WebGPU.

pub mod batch;
pub mod pipeline;
pub mod surface;
pub mod vertex;

pub use batch::ShapeBatch;
pub use pipeline::RenderState;
pub use surface::{Color, Surface, colors};
pub use vertex::Vertex;
