use anyhow::Result;
use gpui::{
    AnyView, App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::info;

use crate::{
    Quit,
    app::TipSession,
    components::{AppWindow, TipForm, WindowPreferences},
    quit,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Tip Calculator".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window.
pub fn open_main_window(
    session: TipSession,
    preferences: WindowPreferences,
    app_cx: &mut App,
) -> Result<()> {
    let bounds = Bounds::centered(None, preferences.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some("Tip Calculator".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    info!(locale = %session.locale, "opening main window");
    app_cx.open_window(options, |window, cx| {
        let form = cx.new(|form_cx| TipForm::new(session, window, form_cx));
        let app_window = cx.new(|window_cx| AppWindow::new(form, window_cx));
        let view: AnyView = app_window.into();
        cx.new(|root_cx| Root::new(view, window, root_cx))
    })?;

    Ok(())
}
