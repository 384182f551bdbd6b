//! WebGPU rendering module
//!
//! Triangle-list pipeline fed by the pure shape generators in `shapes`.
//! Read-only with respect to game state.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
