use gpui::{AnyElement, IntoElement, deferred};

/// Whether an overlay is painted after its siblings, and in which order.
#[derive(Clone, Copy, Debug)]
pub struct DeferredConfig {
    pub enabled: bool,
    /// Higher priorities paint later. Falls back to the component default.
    pub priority: Option<usize>,
}

impl Default for DeferredConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: None,
        }
    }
}

/// Implemented by overlays such as menus, which must draw above the
/// content that follows them in the tree.
pub trait Deferrable: Sized {
    const DEFAULT_PRIORITY: usize = 0;

    fn deferred_config_mut(&mut self) -> &mut DeferredConfig;

    fn deferred_config(&self) -> &DeferredConfig;

    fn deferred(mut self, enabled: bool) -> Self {
        self.deferred_config_mut().enabled = enabled;
        self
    }

    fn deferred_priority(mut self, priority: usize) -> Self {
        self.deferred_config_mut().priority = Some(priority);
        self
    }

    fn apply_deferred(&self, element: impl IntoElement) -> AnyElement {
        let config = self.deferred_config();

        if !config.enabled {
            return element.into_any_element();
        }

        deferred(element)
            .priority(config.priority.unwrap_or(Self::DEFAULT_PRIORITY))
            .into_any_element()
    }
}
