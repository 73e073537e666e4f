use gpui::{
    AppContext, Context, Div, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, TextAlign, Window, div, px,
};
use gpui_component::{
    h_flex,
    input::{Input, InputEvent, InputState, MaskPattern},
    switch::Switch,
    v_flex,
};
use tip_core::{TipFormState, TipView};
use tracing::debug;

use crate::app::TipSession;

/// The single screen: bill amount, tip percentage, round-up switch, result.
///
/// Holds the current [`TipFormState`] and the [`TipView`] derived from it.
/// Every edit replaces the state and recomputes the view.
pub struct TipForm {
    session: TipSession,
    amount: Entity<InputState>,
    tip_percent: Entity<InputState>,
    state: TipFormState,
    view: TipView,
    _subscriptions: Vec<Subscription>,
}

impl TipForm {
    pub fn new(
        session: TipSession,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let state = session.initial_form();

        let amount = make_input_state_with_decimal_mask("Bill Amount", "", window, cx);
        let tip_percent =
            make_input_state_with_decimal_mask("Tip Percentage", &state.tip_input, window, cx);

        let subscriptions = vec![
            cx.subscribe_in(&amount, window, |this, input, event: &InputEvent, _, cx| {
                if matches!(event, InputEvent::Change { .. }) {
                    let text = input.read(cx).value();
                    this.apply(this.state.with_amount_input(text.as_str()), cx);
                }
            }),
            cx.subscribe_in(&tip_percent, window, |this, input, event: &InputEvent, _, cx| {
                if matches!(event, InputEvent::Change { .. }) {
                    let text = input.read(cx).value();
                    this.apply(this.state.with_tip_input(text.as_str()), cx);
                }
            }),
        ];

        let view = session.render(&state);

        Self {
            session,
            amount,
            tip_percent,
            state,
            view,
            _subscriptions: subscriptions,
        }
    }

    fn apply(
        &mut self,
        state: TipFormState,
        cx: &mut Context<Self>,
    ) {
        self.view = self.session.render(&state);
        self.state = state;
        debug!(tip = %self.view.formatted_tip, "tip recomputed");
        cx.notify();
    }
}

impl Render for TipForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_4()
            .w(px(340.))
            .child(div().text_lg().child("Calculate Tip"))
            .child(make_input_row(&self.amount, "Bill Amount:"))
            .child(make_input_row(&self.tip_percent, "Tip Percentage:"))
            .child(
                make_labeled_row("Round up tip?").child(
                    Switch::new("round-up")
                        .checked(self.state.round_up)
                        .on_click(cx.listener(|this, checked: &bool, _, cx| {
                            this.apply(this.state.with_round_up(*checked), cx);
                        })),
                ),
            )
            .child(
                div()
                    .pt_4()
                    .text_2xl()
                    .child(SharedString::from(self.view.label())),
            )
    }
}

fn make_input_state_with_decimal_mask(
    placeholder: impl Into<SharedString>,
    initial: &str,
    window: &mut Window,
    cx: &mut Context<TipForm>,
) -> Entity<InputState> {
    let pattern = MaskPattern::Number {
        separator: Some(','),
        fraction: Some(2),
    };
    let initial = SharedString::from(initial.to_string());

    cx.new(|closure_cx| {
        InputState::new(window, closure_cx)
            .mask_pattern(pattern)
            .placeholder(placeholder.into())
            .default_value(initial)
    })
}

fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(input_label).child(Input::new(state).flex_grow())
}

/// Common row layout: right-aligned label followed by the control.
fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .child(
            div()
                .min_w(px(130.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}
