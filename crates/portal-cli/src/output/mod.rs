use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Objects print their scalar fields as key/value rows, then one table per
/// list of records (courses, modules, ...).
fn render_table(value: Value) -> String {
    match value {
        Value::Array(items) => list_table(&items),
        Value::Object(map) => object_tables(map),
        scalar => cell(&scalar),
    }
}

fn object_tables(map: Map<String, Value>) -> String {
    let mut fields = Vec::new();
    let mut sections = Vec::new();
    for (key, value) in map {
        match value {
            Value::Array(items) if items.iter().all(Value::is_object) => {
                sections.push(format!("{key}:\n{}", list_table(&items)));
            }
            other => fields.push(vec![key, cell(&other)]),
        }
    }

    let mut blocks = Vec::new();
    if !fields.is_empty() {
        blocks.push(table::render_rows(&["field", "value"], &fields, options()));
    }
    blocks.extend(sections);
    blocks.join("\n\n")
}

fn list_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(none)");
    }

    let mut headers: Vec<String> = Vec::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(Map::keys) {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }

    if headers.is_empty() {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_rows(&["value"], &rows, options());
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(header).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect::<Vec<_>>();
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    table::render_rows(&header_refs, &rows, options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Snapshot {
        state: &'static str,
        courses: Vec<serde_json::Value>,
    }

    fn sample() -> Snapshot {
        Snapshot {
            state: "ready",
            courses: vec![
                json!({ "course_id": "C1", "course_name": "Algebra" }),
                json!({ "course_id": "C2", "course_name": "Biology" }),
            ],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&sample(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["state"], "ready");
        assert_eq!(parsed["courses"][1]["course_id"], "C2");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&sample(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_splits_fields_and_lists() {
        let out = render(&sample(), OutputFormat::Table).expect("table render should work");
        assert!(out.starts_with("field"));
        assert!(out.contains("courses:"));
        assert!(out.contains("course_name"));
        assert!(out.contains("Biology"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let out = render(&Vec::<serde_json::Value>::new(), OutputFormat::Table)
            .expect("table render should work");
        assert_eq!(out, "(none)");
    }
}
