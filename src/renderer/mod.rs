//! wgpu rendering module
//!
//! The scene is tessellated on the CPU into one flat-colored triangle list
//! per frame.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
