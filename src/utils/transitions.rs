use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::Transition;

use crate::ElementIdExt;

/// Creates (or reuses) a keyed transition whose goal is picked from a list of
/// `condition => value` branches, the last one being `_ => value`.
///
/// ```ignore
/// conditional_transition!(id, window, cx, Duration::from_millis(400), {
///     is_focus => focus_color,
///     is_hover => hover_color,
///     _ => default_color
/// })
/// ```
#[macro_export]
macro_rules! conditional_transition {
    (
        $id:expr, $window:expr, $cx:expr, $duration:expr, $($rest:tt)+
    ) => {{
        use gpui_transitions::WindowUseTransition;

        let value = $crate::conditional_transition_branches!(@condition [ $($rest)+ ]);

        let transition = $window
            .use_keyed_transition($id, $cx, $duration, |_window, _cx| value)
            .with_easing(gpui::ease_out_quint());

        let value = value.into();

        if transition.read_goal($cx) != &value {
            transition.update($cx, |this, _cx| *this = value);
            $cx.notify(transition.entity_id());
        }

        transition
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! conditional_transition_branches {
    (@branch_list [ _ => $value:expr, $($rest:tt)+ ]) => {{
        compile_error!("`_ => value` is only allowed on the last branch.");
    }};

    (@condition [ { $cond:expr => $value:expr, $($rest:tt)+ } ]) => {{
        if $cond { $value } else { $crate::conditional_transition_branches!(@branch_list [ $($rest)+ ]) }
    }};

    (@branch_list [ $cond:expr => $value:expr, $($rest:tt)+ ]) => {{
        if $cond { $value } else { $crate::conditional_transition_branches!(@branch_list [ $($rest)+ ]) }
    }};

    (@branch_list [ _ => $value:expr ]) => {{
        $value
    }};

    (@branch_list [ $cond:expr => $value:expr ]) => {{
        compile_error!("The last branch must be `_ => value`");
    }};

    (@condition [ $($rest:tt)+ ]) => {{
        $($rest)+
    }};
}

/// Opacity transition that dims a component while it is disabled.
pub fn disabled_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_disabled: bool,
) -> Transition<f32> {
    conditional_transition!(
        base_id.into().with_suffix("state:transition:disabled"),
        window,
        cx,
        Duration::from_millis(365),
        {
            is_disabled => 0.45,
            _ => 1.
        }
    )
    .with_easing(ease_out_quint())
}
