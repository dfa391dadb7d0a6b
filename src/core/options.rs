//! Option values and their render functions
//!
//! Every option carries a plain `fn` pointer that turns a raw value into the
//! text of a table cell. Renderers are total: any [`OptionValue`] variant,
//! including [`OptionValue::Unspecified`], produces a non-empty cell.

use serde::{Deserialize, Serialize};

/// Cell text for an option with no recorded value.
pub const NO_VALUE: &str = "❓";

/// Render function stored on each option.
pub type RenderFn = fn(&OptionValue) -> String;

/// A framework's value for one option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Count(u64),
    Text(String),
    List(Vec<String>),
    #[default]
    Unspecified,
}

/// Built-in renderer families selectable from authored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Boolean,
    Count,
    Text,
    List,
}

impl OptionKind {
    pub fn renderer(self) -> RenderFn {
        match self {
            Self::Boolean => render_boolean,
            Self::Count => render_count,
            Self::Text => render_text,
            Self::List => render_list,
        }
    }
}

/// `✅` / `❌` for flags.
pub fn render_boolean(value: &OptionValue) -> String {
    match value {
        OptionValue::Bool(true) => "✅".to_string(),
        OptionValue::Bool(false) => "❌".to_string(),
        other => render_fallback(other),
    }
}

pub fn render_count(value: &OptionValue) -> String {
    match value {
        OptionValue::Count(n) => n.to_string(),
        other => render_fallback(other),
    }
}

pub fn render_text(value: &OptionValue) -> String {
    match value {
        OptionValue::Text(text) if !text.is_empty() => text.clone(),
        other => render_fallback(other),
    }
}

pub fn render_list(value: &OptionValue) -> String {
    match value {
        OptionValue::List(items) if items.is_empty() => "None".to_string(),
        OptionValue::List(items) => items.join(", "),
        other => render_fallback(other),
    }
}

// Shared arm for values a renderer does not specialise on.
fn render_fallback(value: &OptionValue) -> String {
    match value {
        OptionValue::Bool(flag) => render_boolean(&OptionValue::Bool(*flag)),
        OptionValue::Count(n) => n.to_string(),
        OptionValue::Text(text) if !text.is_empty() => text.clone(),
        OptionValue::List(items) if !items.is_empty() => items.join(", "),
        OptionValue::List(_) => "None".to_string(),
        OptionValue::Text(_) | OptionValue::Unspecified => NO_VALUE.to_string(),
    }
}

/// One comparison axis of a descriptor.
#[derive(Debug, Clone)]
pub struct OptionDescriptor {
    pub id: String,
    pub name: String,
    /// How the option is judged, shown in the criteria list.
    pub criterion: String,
    pub render: RenderFn,
}

impl OptionDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        criterion: impl Into<String>,
        render: RenderFn,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            criterion: criterion.into(),
            render,
        }
    }

    /// Render the cell for a possibly missing value.
    pub fn render_value(&self, value: Option<&OptionValue>) -> String {
        let cell = (self.render)(value.unwrap_or(&OptionValue::Unspecified));
        if cell.is_empty() {
            NO_VALUE.to_string()
        } else {
            cell
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [OptionKind; 4] = [
        OptionKind::Boolean,
        OptionKind::Count,
        OptionKind::Text,
        OptionKind::List,
    ];

    fn sample_values() -> Vec<OptionValue> {
        vec![
            OptionValue::Bool(true),
            OptionValue::Bool(false),
            OptionValue::Count(0),
            OptionValue::Count(12),
            OptionValue::Text(String::new()),
            OptionValue::Text("Outline".into()),
            OptionValue::List(vec![]),
            OptionValue::List(vec!["sm".into(), "lg".into()]),
            OptionValue::Unspecified,
        ]
    }

    #[test]
    fn test_renderers_are_total_and_never_empty() {
        for kind in ALL_KINDS {
            let render = kind.renderer();
            for value in sample_values() {
                let cell = render(&value);
                assert!(!cell.is_empty(), "{kind:?} rendered {value:?} as empty");
            }
        }
    }

    #[test]
    fn test_unspecified_renders_placeholder_for_every_kind() {
        for kind in ALL_KINDS {
            assert_eq!(kind.renderer()(&OptionValue::Unspecified), NO_VALUE);
        }
    }

    #[test]
    fn test_boolean_renderer() {
        assert_eq!(render_boolean(&OptionValue::Bool(true)), "✅");
        assert_eq!(render_boolean(&OptionValue::Bool(false)), "❌");
    }

    #[test]
    fn test_list_renderer_joins_items() {
        let value = OptionValue::List(vec!["info".into(), "warning".into()]);
        assert_eq!(render_list(&value), "info, warning");
        assert_eq!(render_list(&OptionValue::List(vec![])), "None");
    }

    #[test]
    fn test_render_value_for_missing_entry() {
        let option = OptionDescriptor::new("dismissible", "Dismissible", "", render_boolean);
        assert_eq!(option.render_value(None), NO_VALUE);
        assert_eq!(option.render_value(Some(&OptionValue::Bool(true))), "✅");
    }

    #[test]
    fn test_render_value_guards_custom_empty_renderer() {
        fn blank(_: &OptionValue) -> String {
            String::new()
        }
        let option = OptionDescriptor::new("x", "X", "", blank);
        assert_eq!(option.render_value(Some(&OptionValue::Count(1))), NO_VALUE);
    }

    #[test]
    fn test_option_value_deserializes_untagged() {
        let values: Vec<OptionValue> =
            serde_yaml::from_str("[true, 3, text, [a, b], ~, null]").unwrap();
        assert_eq!(
            values,
            vec![
                OptionValue::Bool(true),
                OptionValue::Count(3),
                OptionValue::Text("text".into()),
                OptionValue::List(vec!["a".into(), "b".into()]),
                OptionValue::Unspecified,
                OptionValue::Unspecified,
            ]
        );
    }

    #[test]
    fn test_null_value_renders_placeholder() {
        let values: std::collections::HashMap<String, OptionValue> =
            serde_yaml::from_str("dismissible: ~\nvariants: null\n").unwrap();
        let dismissible = OptionDescriptor::new("dismissible", "Dismissible", "", render_boolean);
        let variants = OptionDescriptor::new("variants", "Variants", "", render_count);

        assert_eq!(dismissible.render_value(values.get("dismissible")), NO_VALUE);
        assert_eq!(variants.render_value(values.get("variants")), NO_VALUE);
    }
}
