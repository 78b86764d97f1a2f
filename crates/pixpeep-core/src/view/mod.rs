pub mod overlay;
pub mod render;
pub mod sync;
pub mod transform;
pub mod viewport;

pub use render::{DrawCommand, Rgba};
pub use sync::SyncController;
pub use transform::{Transform, ViewState, ZoomDirection};
pub use viewport::{ListenerId, PixelProbe, SharedViewport, Viewport};
