pub mod tip_form;
pub mod window;

use gpui::{Pixels, Size, px};

pub use tip_form::TipForm;
pub use window::AppWindow;

use crate::settings::WindowSettings;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        WindowSettings::default().into()
    }
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}

impl From<WindowSettings> for WindowPreferences {
    fn from(settings: WindowSettings) -> Self {
        Self::new(px(settings.width), px(settings.height))
    }
}
