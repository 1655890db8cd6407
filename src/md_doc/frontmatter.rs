use serde_yaml::{Mapping, Value};
use std::str::Split;

const DELIMITER: &str = "---";

/// The YAML block at the very top of a document, delimited by `---` lines:
///
/// ```markdown
/// ---
/// title: My Document
/// tags: [rust, markdown]
/// ---
///
/// # Document content
/// ```
///
/// Frontmatter is best-effort. If the block isn't a valid YAML mapping, the document simply has no fields.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Frontmatter {
    fields: Mapping,
}

/// The result of looking up a field in [`Frontmatter`].
///
/// A field that's present with an explicit null (`field:` or `field: ~`) is different from a field that isn't there at
/// all, even though both have no value to show.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FieldLookup<'a> {
    Missing,
    Null,
    Value(&'a Value),
}

impl Frontmatter {
    /// Decodes a YAML mapping. Anything that doesn't decode to one (including syntax errors) results in empty
    /// frontmatter.
    pub fn decode(yaml: &str) -> Self {
        if yaml.trim().is_empty() {
            return Self::default();
        }
        match serde_yaml::from_str::<Mapping>(yaml) {
            Ok(fields) => Self { fields },
            Err(err) => {
                tracing::debug!(%err, "ignoring frontmatter that isn't a valid YAML mapping");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a top-level field by name.
    ///
    /// Keys that YAML reads as numbers or booleans (`2024: ...`, `true: ...`) can be looked up by their text.
    pub fn get(&self, field: &str) -> FieldLookup<'_> {
        match self.fields.iter().find(|(key, _)| key_matches(key, field)) {
            None => FieldLookup::Missing,
            Some((_, Value::Null)) => FieldLookup::Null,
            Some((_, value)) => FieldLookup::Value(value),
        }
    }
}

fn key_matches(key: &Value, field: &str) -> bool {
    match key {
        Value::String(key) => key == field,
        Value::Number(key) => key.to_string() == field,
        Value::Bool(key) => key.to_string() == field,
        _ => false,
    }
}

/// Splits the frontmatter block off the top of `text`, returning it along with the lines that come after it.
///
/// The block must start on the very first line. If it's never closed, it isn't treated as frontmatter; everything
/// after the opening `---` is returned as regular lines.
pub(crate) fn split_frontmatter(text: &str) -> (Frontmatter, Split<'_, char>) {
    let mut lines = text.split('\n');
    if !lines.next().is_some_and(|first| first.trim() == DELIMITER) {
        return (Frontmatter::default(), text.split('\n'));
    }
    let after_open = lines.clone();

    let mut block = Vec::new();
    while let Some(line) = lines.next() {
        if line.trim() == DELIMITER {
            return (Frontmatter::decode(&block.join("\n")), lines);
        }
        block.push(line);
    }
    tracing::debug!("frontmatter block was never closed; treating it as regular text");
    (Frontmatter::default(), after_open)
}

/// Renders a frontmatter value as a single string.
///
/// Scalars render as their plain text (strings aren't quoted), null renders as an empty string, and collections render
/// in YAML's flow style: `[a, b]` and `{k: v}`.
pub fn render_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(s),
        Value::Sequence(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Mapping(mapping) => {
            out.push('{');
            for (idx, (key, value)) in mapping.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_value(out, key);
                out.push_str(": ");
                write_value(out, value);
            }
            out.push('}');
        }
        Value::Tagged(tagged) => write_value(out, &tagged.value),
    }
}
