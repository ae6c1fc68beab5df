//! Now-playing widget: display slots and the renderer that fills them.

mod html;
mod refresh;
mod renderer;
mod targets;

pub use refresh::{load_initial, refresh, run_refresh_loop, RenderHook};
pub use renderer::{render, RenderError};
pub use targets::{Element, WidgetTargets};
