mod hud;
mod layout;
mod panel;

pub use hud::hud_plugin;
pub use layout::{hit_test, PanelHit};
pub use panel::{panel_commands, panel_plugin, PanelCommand, PanelInput};
