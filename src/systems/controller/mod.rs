mod commands;
mod keyboard;

pub use commands::apply_control_commands;
pub use keyboard::{camera_mouse_system, flight_keyboard_system};
