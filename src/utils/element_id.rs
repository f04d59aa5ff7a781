use gpui::{ElementId, SharedString};

/// Derives child ids from a component id, so keyed state stays unique per
/// component instance.
pub trait ElementIdExt {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;

    fn with_index(&self, index: usize) -> ElementId {
        self.with_suffix(SharedString::from(index.to_string()))
    }
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }
}
