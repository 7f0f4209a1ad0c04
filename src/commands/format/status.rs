//! Status message formatting helpers

use kb_core::error::Result;
use kb_core::format::{escape_quotes, records_header};
use serde::Serialize;
use serde_json::json;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a JSON status message with optional fields
///
/// # Examples
/// ```ignore
/// print_json_status("deleted", None, &[("path", json!(path))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

/// Print the records header line for `mode`
pub fn print_records_header(mode: &str, fields: &[(&str, String)]) {
    println!("{}", records_header(mode, fields));
}

/// A quoted records field, e.g. `path="/kb/ex/tar"`
pub fn record_field(key: &str, value: &str) -> String {
    format!("{key}=\"{}\"", escape_quotes(value))
}
