use gpui::SharedString;
use indexmap::IndexMap;

use crate::components::IconSource;

/// One selectable entry of a select control.
#[derive(Clone)]
pub struct SelectOption {
    /// Identifies the option; unique within a list.
    pub value: SharedString,
    /// Text shown for the option. The value is shown when absent.
    pub label: Option<SharedString>,
    pub icon: Option<IconSource>,
}

impl SelectOption {
    pub fn new(value: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: None,
            icon: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<IconSource>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The label, or the value when the option has no label.
    pub fn display_text(&self) -> &SharedString {
        self.label.as_ref().unwrap_or(&self.value)
    }
}

impl From<&'static str> for SelectOption {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<SharedString> for SelectOption {
    fn from(value: SharedString) -> Self {
        Self::new(value)
    }
}

impl<V: Into<SharedString>, L: Into<SharedString>> From<(V, L)> for SelectOption {
    fn from((value, label): (V, L)) -> Self {
        Self::new(value).label(label)
    }
}

/// Keeps the options whose display text contains `query`, ignoring case.
///
/// An empty query keeps every option. Order is preserved.
pub fn filter_options(query: &str, options: &[SelectOption]) -> Vec<SelectOption> {
    if query.is_empty() {
        return options.to_vec();
    }

    let query = query.to_lowercase();

    options
        .iter()
        .filter(|option| option.display_text().to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Lookup from option value to display text.
#[derive(Debug, Default, Clone)]
pub struct LabelMap(IndexMap<SharedString, SharedString>);

impl LabelMap {
    /// Scans the options once; a repeated value keeps the last label seen.
    pub fn build(options: &[SelectOption]) -> Self {
        let mut map = IndexMap::with_capacity(options.len());

        for option in options {
            map.insert(option.value.clone(), option.display_text().clone());
        }

        Self(map)
    }

    /// The label for `value`, or an empty string if no option has it.
    pub fn label(&self, value: impl Into<SharedString>) -> SharedString {
        self.0.get(&value.into()).cloned().unwrap_or_default()
    }

    pub fn contains(&self, value: impl Into<SharedString>) -> bool {
        self.0.contains_key(&value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<SelectOption> {
        vec![
            ("a", "Apple").into(),
            ("b", "Banana").into(),
            ("c", "Cherry").into(),
            "pineapple".into(),
        ]
    }

    fn values(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|option| &*option.value).collect()
    }

    #[test]
    fn test_display_text_falls_back_to_value() {
        let option = SelectOption::new("raw");
        assert_eq!(&**option.display_text(), "raw");

        let option = option.label("Pretty");
        assert_eq!(&**option.display_text(), "Pretty");
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let options = fruits();
        let filtered = filter_options("", &options);

        assert_eq!(values(&filtered), values(&options));
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let options: Vec<SelectOption> = vec![("a", "Apple").into(), ("b", "Banana").into()];
        assert_eq!(values(&filter_options("Ap", &options)), ["a"]);

        let options = fruits();
        assert_eq!(values(&filter_options("AP", &options)), ["a", "pineapple"]);
        assert_eq!(values(&filter_options("an", &options)), ["b"]);
        assert!(filter_options("kiwi", &options).is_empty());
    }

    #[test]
    fn test_filter_matches_label_not_value() {
        let options = fruits();
        // "b" is the value of Banana, but only labels are searched.
        assert_eq!(values(&filter_options("b", &options)), ["b"]);
        assert!(filter_options("c", &options).len() == 1);
    }

    #[test]
    fn test_filter_leaves_input_untouched() {
        let options = fruits();
        let _ = filter_options("cherry", &options);

        assert_eq!(options.len(), 4);
        assert_eq!(values(&options), ["a", "b", "c", "pineapple"]);
    }

    #[test]
    fn test_label_map_has_every_value() {
        let options = fruits();
        let labels = LabelMap::build(&options);

        assert_eq!(labels.len(), options.len());
        for option in &options {
            assert!(labels.contains(option.value.clone()));
        }
        assert_eq!(&*labels.label("b"), "Banana");
        assert_eq!(&*labels.label("pineapple"), "pineapple");
    }

    #[test]
    fn test_label_map_last_duplicate_wins() {
        let options: Vec<SelectOption> = vec![("a", "Apple").into(), ("a", "Avocado").into()];
        let labels = LabelMap::build(&options);

        assert_eq!(labels.len(), 1);
        assert_eq!(&*labels.label("a"), "Avocado");
    }

    #[test]
    fn test_label_map_unknown_value_is_empty() {
        let labels = LabelMap::build(&fruits());
        assert_eq!(&*labels.label("zzz"), "");
        assert!(LabelMap::default().is_empty());
    }
}
