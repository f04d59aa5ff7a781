use gpui::{App, Window};

/// Settings that control what a component does with the click that reaches it.
///
/// By default the click is consumed: `cx.stop_propagation()` and
/// `window.prevent_default()` are both called.
#[derive(Clone, Copy, Default, Debug)]
pub struct ClickBehavior {
    /// If true, `cx.stop_propagation()` will NOT be called.
    pub allow_propagation: bool,
    /// If true, `window.prevent_default()` will NOT be called.
    pub allow_default: bool,
}

impl ClickBehavior {
    pub fn apply(&self, window: &mut Window, cx: &mut App) {
        if !self.allow_default {
            window.prevent_default();
        }
        if !self.allow_propagation {
            cx.stop_propagation();
        }
    }
}

/// Implemented by components that let callers opt out of consuming clicks.
pub trait ClickBehaviorExt: Sized {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior;

    /// Lets the click bubble up to parent handlers.
    fn allow_click_propagation(mut self) -> Self {
        self.click_behavior_mut().allow_propagation = true;
        self
    }

    /// Keeps the default action of the click, e.g. moving focus.
    fn allow_default_click_behaviour(mut self) -> Self {
        self.click_behavior_mut().allow_default = true;
        self
    }
}
