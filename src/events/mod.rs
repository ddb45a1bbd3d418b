pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_panel_toggle_h;
pub use pointer::wire_orbit_controls;
