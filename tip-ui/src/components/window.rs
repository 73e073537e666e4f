use gpui::{
    App, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
};
use gpui_component::StyledExt;
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::Quit;
#[cfg(not(target_os = "linux"))]
use crate::quit;

use super::TipForm;

/// Top-level view hosting the tip form.
pub struct AppWindow {
    form: Entity<TipForm>,
    _window_close_subscription: Subscription,
}

impl AppWindow {
    pub fn new(
        form: Entity<TipForm>,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Window closed callback");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        info!("Window constructed");
        Self {
            form,
            _window_close_subscription: subscription,
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .v_flex()
            .p_5()
            .size_full()
            .items_center()
            .justify_center()
            .child(self.form.clone())
    }
}
