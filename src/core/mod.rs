pub mod canvas;
pub mod controller;
pub mod display_context;
pub mod frame;
pub mod gpu_context;
pub mod hud;
pub mod input_adapter;
pub mod surface_renderer;

pub use canvas::{Canvas, Color};
pub use controller::{Button, Controller};
pub use display_context::{DisplayContext, Viewport};
pub use frame::{FrameClock, FrameInfo};
pub use gpu_context::GpuContext;
pub use hud::Hud;
pub use input_adapter::WinitController;
pub use surface_renderer::SurfaceRenderer;
