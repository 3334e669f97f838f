use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });
            if let Some(data_value) = data {
                response["data"] = data_value;
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Print the full envelope as JSON, or the `data` part as text
pub fn output_envelope(output_format: &OutputFormat, envelope: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(envelope)?),
        OutputFormat::Text => match envelope.get("data") {
            Some(Value::Array(records)) => output_record_list(records, envelope),
            Some(record @ Value::Object(_)) => output_record(record),
            Some(other) => println!("{}", other),
            None => {
                if let Some(message) = envelope.get("message").and_then(|m| m.as_str()) {
                    println!("{}", message);
                }
            }
        },
    }
    Ok(())
}

fn output_record_list(records: &[Value], envelope: &Value) {
    if records.is_empty() {
        println!("No records found");
    }
    for record in records {
        println!("{}  {}", field_str(record, "id"), record_title(record));
    }
    if let (Some(page), Some(count)) = (envelope.get("page"), envelope.get("count")) {
        println!("-- page {} ({} records)", page, count);
    }
}

fn output_record(record: &Value) {
    if let Some(obj) = record.as_object() {
        let width = obj.keys().map(|k| k.len()).max().unwrap_or(0);
        for (key, value) in obj {
            let shown = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            println!("{:width$}  {}", key, shown, width = width);
        }
    }
}

/// Best human label for a row of any of the four tables
fn record_title(record: &Value) -> String {
    for key in ["scientific_name", "specie_common_name", "name", "username"] {
        let value = field_str(record, key);
        if !value.is_empty() {
            return value;
        }
    }
    String::new()
}

fn field_str(record: &Value, key: &str) -> String {
    record.get(key).and_then(|v| v.as_str()).unwrap_or_default().to_string()
}
