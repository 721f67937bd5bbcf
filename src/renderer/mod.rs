//! WebGPU rendering module
//!
//! The board is drawn as flat-colored quads: one per live cell plus optional
//! grid lines. Geometry is built in CSS pixels and converted to NDC on upload.

pub mod layout;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use layout::CanvasLayout;
pub use pipeline::RenderState;
pub use vertex::{Palette, Vertex};
