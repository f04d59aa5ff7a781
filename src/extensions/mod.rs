/// Controls how click events propagate and trigger default behaviors.
pub mod click_behavior;

/// Support for deferred rendering of overlays and popups.
pub mod deferrable;
