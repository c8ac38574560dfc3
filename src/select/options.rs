use std::fmt;

use thiserror::Error;

/// A value handed to [`sanitize`] that is not among the declared options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("highlighted select option \"{option}\" is not part of the provided options")]
pub struct InvalidOptionError {
    /// The rejected value, rendered with `Display`.
    pub option: String,
}

/// Options as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionSource<T> {
    /// Plain values; labels come from `Display`.
    List(Vec<T>),
    /// `(label, value)` pairs, kept in the given order.
    Keyed(Vec<(String, T)>),
}

impl<T> Default for OptionSource<T> {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// Raw input for one selector instance.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedSelectInput<T> {
    /// Current value, if the caller has one.
    pub selected: Option<T>,
    /// Declared options.
    pub options: OptionSource<T>,
    /// Whether to draw the highlight affordance.
    pub highlight: bool,
}

impl<T> Default for HighlightedSelectInput<T> {
    fn default() -> Self {
        Self {
            selected: None,
            options: OptionSource::default(),
            highlight: false,
        }
    }
}

/// Canonical option lists. `keys[i]` labels `values[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedSelectSettings<T> {
    /// Display labels.
    pub keys: Vec<String>,
    /// Underlying option values.
    pub values: Vec<T>,
    /// Whether to draw the highlight affordance.
    pub highlight: bool,
}

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSelect<T> {
    /// Value to display; `None` only when there are no options at all.
    pub value: Option<T>,
    /// Canonical settings for rendering.
    pub settings: HighlightedSelectSettings<T>,
}

/// Flattens caller input into parallel `keys`/`values` lists.
///
/// A `selected` value missing from the options is prepended so the control
/// can always render it. Without a `selected` value the first option is used.
pub fn normalize<T>(input: HighlightedSelectInput<T>) -> NormalizedSelect<T>
where
    T: Clone + PartialEq + fmt::Display,
{
    let HighlightedSelectInput {
        selected,
        options,
        highlight,
    } = input;

    let (mut keys, mut values): (Vec<String>, Vec<T>) = match options {
        OptionSource::List(values) => (values.iter().map(T::to_string).collect(), values),
        OptionSource::Keyed(pairs) => pairs.into_iter().unzip(),
    };

    let value = match selected {
        None => values.first().cloned(),
        Some(selected) => {
            if !values.contains(&selected) {
                keys.insert(0, selected.to_string());
                values.insert(0, selected.clone());
            }
            Some(selected)
        }
    };

    NormalizedSelect {
        value,
        settings: HighlightedSelectSettings {
            keys,
            values,
            highlight,
        },
    }
}

/// Accepts `value` only if it is one of `settings.values`.
///
/// An empty option list is unconstrained and accepts anything.
pub fn sanitize<T>(value: T, settings: &HighlightedSelectSettings<T>) -> Result<T, InvalidOptionError>
where
    T: PartialEq + fmt::Display,
{
    if settings.values.is_empty() || settings.values.contains(&value) {
        Ok(value)
    } else {
        Err(InvalidOptionError {
            option: value.to_string(),
        })
    }
}

/// Index of `value` in `settings.values` (first match), or 0 when absent.
pub fn format<T: PartialEq>(value: &T, settings: &HighlightedSelectSettings<T>) -> usize {
    settings
        .values
        .iter()
        .position(|v| v == value)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(options: &[&str], selected: Option<&str>) -> HighlightedSelectInput<String> {
        HighlightedSelectInput {
            selected: selected.map(str::to_owned),
            options: OptionSource::List(options.iter().map(|s| s.to_string()).collect()),
            highlight: false,
        }
    }

    fn settings(values: &[&str]) -> HighlightedSelectSettings<String> {
        HighlightedSelectSettings {
            keys: values.iter().map(|s| s.to_string()).collect(),
            values: values.iter().map(|s| s.to_string()).collect(),
            highlight: false,
        }
    }

    // ── normalize ───────────────────────────────────────────────────

    #[test]
    fn normalize_known_selection_keeps_options() {
        let out = normalize(list(&["a", "b", "c"], Some("b")));
        assert_eq!(out.settings.keys, ["a", "b", "c"]);
        assert_eq!(out.settings.values, ["a", "b", "c"]);
        assert_eq!(out.value.as_deref(), Some("b"));
    }

    #[test]
    fn normalize_prepends_unknown_selection() {
        let out = normalize(list(&["a", "b"], Some("z")));
        assert_eq!(out.settings.keys, ["z", "a", "b"]);
        assert_eq!(out.settings.values, ["z", "a", "b"]);
        assert_eq!(out.value.as_deref(), Some("z"));
    }

    #[test]
    fn normalize_without_selection_uses_first_option() {
        let out = normalize(list(&["x", "y"], None));
        assert_eq!(out.value.as_deref(), Some("x"));
        assert_eq!(out.settings.values.len(), 2);
    }

    #[test]
    fn normalize_empty_input_has_no_value() {
        let out = normalize(HighlightedSelectInput::<String>::default());
        assert!(out.value.is_none());
        assert!(out.settings.keys.is_empty());
        assert!(!out.settings.highlight);
    }

    #[test]
    fn normalize_keyed_preserves_labels_and_order() {
        let out = normalize(HighlightedSelectInput {
            selected: Some(2),
            options: OptionSource::Keyed(vec![
                ("two".to_owned(), 2),
                ("one".to_owned(), 1),
            ]),
            highlight: true,
        });
        assert_eq!(out.settings.keys, ["two", "one"]);
        assert_eq!(out.settings.values, [2, 1]);
        assert_eq!(out.value, Some(2));
        assert!(out.settings.highlight);
    }

    #[test]
    fn normalize_keeps_duplicates() {
        let out = normalize(list(&["a", "a", "b"], Some("a")));
        assert_eq!(out.settings.values, ["a", "a", "b"]);
    }

    // ── sanitize ────────────────────────────────────────────────────

    #[test]
    fn sanitize_rejects_unknown_value() {
        let err = sanitize("z".to_owned(), &settings(&["a", "b"])).unwrap_err();
        assert_eq!(err.option, "z");
        assert!(err.to_string().contains("\"z\""));
    }

    #[test]
    fn sanitize_passes_known_value() {
        assert_eq!(sanitize("a".to_owned(), &settings(&["a", "b"])), Ok("a".to_owned()));
    }

    #[test]
    fn sanitize_accepts_anything_without_options() {
        assert_eq!(sanitize("q".to_owned(), &settings(&[])), Ok("q".to_owned()));
    }

    // ── format ──────────────────────────────────────────────────────

    #[test]
    fn format_returns_index_of_value() {
        assert_eq!(format(&"b".to_owned(), &settings(&["a", "b", "c"])), 1);
    }

    #[test]
    fn format_falls_back_to_zero() {
        assert_eq!(format(&"q".to_owned(), &settings(&["a", "b", "c"])), 0);
        assert_eq!(format(&"q".to_owned(), &settings(&[])), 0);
    }

    #[test]
    fn format_uses_first_duplicate() {
        assert_eq!(format(&"b".to_owned(), &settings(&["a", "b", "b"])), 1);
    }
}
