/// Prefix of every class name generated by [`component_class_name`].
pub const CLASS_NAME_PREFIX: &str = "mosaic";

/// Joins class names with a single space, skipping empty ones.
pub fn class_names<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn truncate_class(enabled: bool) -> &'static str {
    if enabled { "truncate" } else { "" }
}

pub fn h_full_class(enabled: bool) -> &'static str {
    if enabled { "h-full" } else { "" }
}

pub fn w_full_class(enabled: bool) -> &'static str {
    if enabled { "w-full" } else { "" }
}

/// Builds a stable class name for a part of a component, e.g.
/// `mosaic-SearchSelect-icon`.
pub fn component_class_name(component: &str, part: &str) -> String {
    format!("{CLASS_NAME_PREFIX}-{component}-{part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_skips_empty() {
        assert_eq!(class_names(["a", "", "b"]), "a b");
        assert_eq!(class_names(["", ""]), "");
        assert_eq!(
            class_names([truncate_class(true), w_full_class(false), h_full_class(true)]),
            "truncate h-full"
        );
    }

    #[test]
    fn test_component_class_name() {
        assert_eq!(
            component_class_name("SearchSelect", "icon"),
            "mosaic-SearchSelect-icon"
        );
    }
}
