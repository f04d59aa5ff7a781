use std::rc::Rc;

use gpui::{App, AppContext, ElementId, Entity, KeyBinding, SharedString, Window, actions};

use crate::ElementIdExt;

actions!(search_select, [MoveUp, MoveDown, Confirm, Dismiss]);

/// Called with the new value on every commit, and with `""` on clear.
pub type OnValueChangeFn = Rc<dyn Fn(&SharedString, &mut App)>;

pub fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("up", MoveUp, Some("SearchSelect")),
        KeyBinding::new("down", MoveDown, Some("SearchSelect")),
        KeyBinding::new("enter", Confirm, Some("SearchSelect")),
        KeyBinding::new("escape", Dismiss, Some("SearchSelect")),
    ]);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectPhase {
    #[default]
    Idle,
    /// The user is typing a search query.
    Editing,
    Committed,
    Cleared,
}

/// Current value and search query of a select control.
///
/// The control owns its value unless a controlled value is set, in which
/// case [`SelectionState::value`] mirrors the controlled value and local
/// commits only update the internal copy.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    internal_value: SharedString,
    controlled_value: Option<SharedString>,
    query: String,
    phase: SelectPhase,
}

impl SelectionState {
    pub fn new(default_value: Option<SharedString>) -> Self {
        Self {
            internal_value: default_value.unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Returns `true` if the controlled value changed.
    pub fn set_controlled_value(&mut self, value: Option<SharedString>) -> bool {
        if self.controlled_value == value {
            return false;
        }

        self.controlled_value = value;
        true
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled_value.is_some()
    }

    pub fn value(&self) -> &SharedString {
        self.controlled_value
            .as_ref()
            .unwrap_or(&self.internal_value)
    }

    pub fn has_value(&self) -> bool {
        !self.value().is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> SelectPhase {
        self.phase
    }

    pub fn is_editing(&self) -> bool {
        self.phase == SelectPhase::Editing
    }

    pub fn edit_query(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.query);
        self.phase = SelectPhase::Editing;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.edit_query(|current| *current = query);
    }

    pub fn commit(&mut self, value: SharedString) {
        self.internal_value = value;
        self.query.clear();
        self.phase = SelectPhase::Committed;
    }

    pub fn clear(&mut self) {
        self.internal_value = SharedString::default();
        self.query.clear();
        self.phase = SelectPhase::Cleared;
    }

    /// Drops an unfinished query, e.g. when the control loses focus.
    ///
    /// Returns `true` if there was one.
    pub fn abandon_query(&mut self) -> bool {
        if self.phase != SelectPhase::Editing {
            return false;
        }

        self.query.clear();
        self.phase = SelectPhase::Idle;
        true
    }
}

/// Index after `current` in a list of `len` rows, wrapping to the top.
pub(crate) fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    match (current, len) {
        (_, 0) => None,
        (Some(index), len) if index + 1 < len => Some(index + 1),
        _ => Some(0),
    }
}

/// Index before `current` in a list of `len` rows, wrapping to the bottom.
pub(crate) fn previous_index(current: Option<usize>, len: usize) -> Option<usize> {
    match (current, len) {
        (_, 0) => None,
        (Some(index), len) if index > 0 && index < len => Some(index - 1),
        (_, len) => Some(len - 1),
    }
}

/// Entity-backed state of a [`SearchSelect`](super::SearchSelect).
#[derive(Clone)]
pub struct SearchSelectState {
    pub(crate) selection: Entity<SelectionState>,
    /// Row of the filtered option list that keyboard navigation points at.
    pub(crate) highlighted: Entity<Option<usize>>,
}

impl SearchSelectState {
    pub fn new(cx: &mut App, default_value: Option<SharedString>) -> Self {
        Self {
            selection: cx.new(|_cx| SelectionState::new(default_value)),
            highlighted: cx.new(|_cx| None),
        }
    }

    /// Fetches the state kept by the window for the component with this id,
    /// creating it on first use.
    pub fn from_window(
        id: impl Into<ElementId>,
        window: &mut Window,
        cx: &mut App,
        default_value: Option<SharedString>,
    ) -> Self {
        let id = id.into();

        Self {
            selection: window.use_keyed_state(
                id.with_suffix("state:selection"),
                cx,
                |_window, _cx| SelectionState::new(default_value),
            ),
            highlighted: window.use_keyed_state(
                id.with_suffix("state:highlighted"),
                cx,
                |_window, _cx| None,
            ),
        }
    }

    pub fn value(&self, cx: &App) -> SharedString {
        self.selection.read(cx).value().clone()
    }

    pub fn query(&self, cx: &App) -> String {
        self.selection.read(cx).query().to_string()
    }

    pub fn phase(&self, cx: &App) -> SelectPhase {
        self.selection.read(cx).phase()
    }

    pub fn highlighted(&self, cx: &App) -> Option<usize> {
        *self.highlighted.read(cx)
    }

    pub fn sync_controlled_value(&self, cx: &mut App, value: Option<SharedString>) {
        self.selection.update(cx, |this, cx| {
            if this.set_controlled_value(value) {
                cx.notify();
            }
        });
    }

    /// Applies an edit to the search query and points the highlight at the
    /// first matching row.
    pub fn edit_query(&self, cx: &mut App, edit: impl FnOnce(&mut String)) {
        self.selection.update(cx, |this, cx| {
            this.edit_query(edit);
            cx.notify();
        });
        self.set_highlighted(cx, Some(0));
    }

    pub fn commit(
        &self,
        cx: &mut App,
        value: SharedString,
        on_value_change: Option<&OnValueChangeFn>,
    ) {
        tracing::debug!(%value, "search select committed");

        self.selection.update(cx, |this, cx| {
            this.commit(value.clone());
            cx.notify();
        });
        self.set_highlighted(cx, None);

        if let Some(on_value_change) = on_value_change {
            on_value_change(&value, cx);
        }
    }

    pub fn clear(&self, cx: &mut App, on_value_change: Option<&OnValueChangeFn>) {
        tracing::debug!("search select cleared");

        self.selection.update(cx, |this, cx| {
            this.clear();
            cx.notify();
        });
        self.set_highlighted(cx, None);

        if let Some(on_value_change) = on_value_change {
            on_value_change(&SharedString::default(), cx);
        }
    }

    /// Drops an unfinished query along with the highlight, which pointed
    /// into the list that query filtered.
    pub fn abandon_query(&self, cx: &mut App) {
        self.selection.update(cx, |this, cx| {
            if this.abandon_query() {
                cx.notify();
            }
        });
        self.set_highlighted(cx, None);
    }

    pub fn set_highlighted(&self, cx: &mut App, index: Option<usize>) {
        self.highlighted.update(cx, |this, cx| {
            if *this != index {
                *this = index;
                cx.notify();
            }
        });
    }

    pub fn move_highlight_down(&self, cx: &mut App, len: usize) {
        let next = next_index(self.highlighted(cx), len);
        self.set_highlighted(cx, next);
    }

    pub fn move_highlight_up(&self, cx: &mut App, len: usize) {
        let previous = previous_index(self.highlighted(cx), len);
        self.set_highlighted(cx, previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value_seeds_selection() {
        let state = SelectionState::new(Some("a".into()));
        assert_eq!(&**state.value(), "a");
        assert!(state.has_value());
        assert_eq!(state.phase(), SelectPhase::Idle);

        assert!(!SelectionState::new(None).has_value());
    }

    #[test]
    fn test_editing_then_commit() {
        let mut state = SelectionState::new(None);

        state.set_query("ap");
        state.edit_query(|query| query.push('p'));
        assert_eq!(state.query(), "app");
        assert!(state.is_editing());

        state.commit("a".into());
        assert_eq!(&**state.value(), "a");
        assert_eq!(state.query(), "");
        assert_eq!(state.phase(), SelectPhase::Committed);
    }

    #[test]
    fn test_clear_resets_value_and_query() {
        let mut state = SelectionState::new(Some("a".into()));
        state.set_query("ba");

        state.clear();
        assert_eq!(&**state.value(), "");
        assert_eq!(state.query(), "");
        assert_eq!(state.phase(), SelectPhase::Cleared);
    }

    #[test]
    fn test_controlled_value_is_authoritative() {
        let mut state = SelectionState::new(Some("a".into()));

        assert!(state.set_controlled_value(Some("b".into())));
        assert!(!state.set_controlled_value(Some("b".into())));
        assert!(state.is_controlled());
        assert_eq!(&**state.value(), "b");

        state.commit("c".into());
        assert_eq!(&**state.value(), "b", "External owner decides the value");

        assert!(state.set_controlled_value(None));
        assert_eq!(&**state.value(), "c");
    }

    #[test]
    fn test_abandon_query_only_while_editing() {
        let mut state = SelectionState::new(None);
        assert!(!state.abandon_query());

        state.set_query("x");
        assert!(state.abandon_query());
        assert_eq!(state.query(), "");
        assert_eq!(state.phase(), SelectPhase::Idle);
    }

    #[test]
    fn test_highlight_navigation_wraps() {
        assert_eq!(next_index(None, 3), Some(0));
        assert_eq!(next_index(Some(0), 3), Some(1));
        assert_eq!(next_index(Some(2), 3), Some(0));
        assert_eq!(next_index(Some(7), 3), Some(0));
        assert_eq!(next_index(Some(0), 0), None);

        assert_eq!(previous_index(None, 3), Some(2));
        assert_eq!(previous_index(Some(2), 3), Some(1));
        assert_eq!(previous_index(Some(0), 3), Some(2));
        assert_eq!(previous_index(Some(7), 3), Some(2));
        assert_eq!(previous_index(None, 0), None);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use std::cell::RefCell;

    use super::*;
    use gpui::TestAppContext;

    fn recording_callback() -> (OnValueChangeFn, Rc<RefCell<Vec<SharedString>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let callback: OnValueChangeFn = {
            let calls = calls.clone();
            Rc::new(move |value: &SharedString, _cx: &mut App| {
                calls.borrow_mut().push(value.clone())
            })
        };

        (callback, calls)
    }

    #[gpui::test]
    fn test_clear_invokes_callback_once_with_empty_value(cx: &mut TestAppContext) {
        let state = cx.update(|cx| SearchSelectState::new(cx, Some("a".into())));
        let (on_value_change, calls) = recording_callback();

        cx.update(|cx| {
            state.edit_query(cx, |query| query.push_str("ban"));
            state.clear(cx, Some(&on_value_change));
        });

        assert_eq!(*calls.borrow(), vec![SharedString::default()]);

        cx.update(|cx| {
            assert!(state.value(cx).is_empty());
            assert!(state.query(cx).is_empty());
            assert_eq!(state.phase(cx), SelectPhase::Cleared);
            assert_eq!(state.highlighted(cx), None);
        });
    }

    #[gpui::test]
    fn test_commit_invokes_callback_with_value(cx: &mut TestAppContext) {
        let state = cx.update(|cx| SearchSelectState::new(cx, None));
        let (on_value_change, calls) = recording_callback();

        cx.update(|cx| {
            state.edit_query(cx, |query| query.push('b'));
            assert_eq!(state.highlighted(cx), Some(0));

            state.commit(cx, "b".into(), Some(&on_value_change));
        });

        assert_eq!(*calls.borrow(), vec![SharedString::from("b")]);

        cx.update(|cx| {
            assert_eq!(state.value(cx), SharedString::from("b"));
            assert!(state.query(cx).is_empty());
        });
    }

    #[gpui::test]
    fn test_commit_without_callback(cx: &mut TestAppContext) {
        let state = cx.update(|cx| SearchSelectState::new(cx, None));

        cx.update(|cx| {
            state.commit(cx, "a".into(), None);
            assert_eq!(state.value(cx), SharedString::from("a"));
        });
    }

    #[gpui::test]
    fn test_controlled_state_mirrors_owner(cx: &mut TestAppContext) {
        let state = cx.update(|cx| SearchSelectState::new(cx, Some("a".into())));

        cx.update(|cx| {
            state.sync_controlled_value(cx, Some("b".into()));
            state.commit(cx, "c".into(), None);
            assert_eq!(state.value(cx), SharedString::from("b"));
        });
    }

    #[gpui::test]
    fn test_abandoned_query_drops_highlight(cx: &mut TestAppContext) {
        let state = cx.update(|cx| SearchSelectState::new(cx, None));

        cx.update(|cx| {
            state.edit_query(cx, |query| query.push_str("ch"));
            assert_eq!(state.highlighted(cx), Some(0));

            state.abandon_query(cx);
            assert!(state.query(cx).is_empty());
            assert_eq!(state.phase(cx), SelectPhase::Idle);
            assert_eq!(state.highlighted(cx), None);
        });
    }

    #[gpui::test]
    fn test_highlight_moves_over_rows(cx: &mut TestAppContext) {
        let state = cx.update(|cx| SearchSelectState::new(cx, None));

        cx.update(|cx| {
            state.move_highlight_down(cx, 2);
            assert_eq!(state.highlighted(cx), Some(0));
            state.move_highlight_down(cx, 2);
            assert_eq!(state.highlighted(cx), Some(1));
            state.move_highlight_down(cx, 2);
            assert_eq!(state.highlighted(cx), Some(0));
            state.move_highlight_up(cx, 2);
            assert_eq!(state.highlighted(cx), Some(1));
        });
    }
}
