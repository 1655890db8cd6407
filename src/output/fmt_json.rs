use crate::select::QueryResult;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct JsonWriterOptions {
    /// Write one object per document, with a key per query, instead of one object per result.
    pub object: bool,
}

/// Writes results as pretty-printed JSON.
///
/// By default, each result is an object with `file`, and `heading` and `body` if present. A single result is written as
/// just that object; anything else is written as an array.
///
/// In [object](JsonWriterOptions::object) mode, each document becomes one object: `file` plus a key for each query,
/// whose value is the result's body (or `""`). A single document is written as just that object; anything else is
/// written as an array.
pub struct JsonWriter {
    options: JsonWriterOptions,
}

#[derive(Serialize)]
struct SerdeResult<'a> {
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    heading: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
}

impl<'a> From<&'a QueryResult> for SerdeResult<'a> {
    fn from(result: &'a QueryResult) -> Self {
        Self {
            file: &result.source,
            heading: result.heading.as_deref(),
            body: result.body.as_deref(),
        }
    }
}

impl JsonWriter {
    pub fn with_options(options: JsonWriterOptions) -> Self {
        Self { options }
    }

    pub fn write(&self, results: &[QueryResult], out: &mut String) -> serde_json::Result<()> {
        let json = if self.options.object {
            let objects = Self::objects_by_source(results);
            match objects.as_slice() {
                [only] => serde_json::to_string_pretty(only)?,
                _ => serde_json::to_string_pretty(&objects)?,
            }
        } else {
            match results {
                [only] => serde_json::to_string_pretty(&SerdeResult::from(only))?,
                _ => serde_json::to_string_pretty(&results.iter().map(SerdeResult::from).collect::<Vec<_>>())?,
            }
        };
        out.push_str(&json);
        Ok(())
    }

    fn objects_by_source(results: &[QueryResult]) -> Vec<Map<String, Value>> {
        let mut sources: Vec<&str> = Vec::new();
        let mut objects: Vec<Map<String, Value>> = Vec::new();
        for result in results {
            let idx = match sources.iter().position(|s| *s == result.source) {
                Some(idx) => idx,
                None => {
                    let mut object = Map::new();
                    object.insert("file".to_string(), Value::String(result.source.clone()));
                    sources.push(&result.source);
                    objects.push(object);
                    objects.len() - 1
                }
            };
            let value = result.body.clone().unwrap_or_default();
            objects[idx].insert(result.query.clone(), Value::String(value));
        }
        objects
    }
}
