mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod mouse_hover;

pub use app_events::handle_key;
pub use app_render::render;
pub use app_state::App;
pub use mouse_click::{handle_mouse_down, handle_mouse_up};
pub use mouse_hover::{handle_mouse_drag, handle_mouse_move};
