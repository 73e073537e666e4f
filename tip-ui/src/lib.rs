pub mod app;
pub mod components;
pub mod gui;
pub mod logging;
pub mod settings;

use gpui::{App, actions};
pub use gui::{open_main_window, setup_app};
use tracing::info;

actions!(tip_calculator, [Quit]);

pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
