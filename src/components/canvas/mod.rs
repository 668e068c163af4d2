//! Canvas plumbing shared by the animated widgets: context lookup, the
//! display list, and the frame loop.

mod animation;
mod context;
mod shape;

pub use animation::{RenderLoop, Scene, use_render_loop};
pub use context::{CanvasError, canvas_context, window};
pub use shape::{Shape, paint};
