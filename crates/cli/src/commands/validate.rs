use super::{read_file, Terminal};
use anyhow::{bail, Context};
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use terminal_validation::{fields, FormData};

/// Parse `name=value` from the command line
pub fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected name=value, got '{}'", raw)),
    }
}

/// Read a JSON object of field values; numbers are accepted as-is
fn load_form(path: &Path) -> anyhow::Result<FormData> {
    let source = read_file(path)?;
    let value: Value = serde_json::from_str(&source)
        .with_context(|| format!("Invalid form JSON in {}", path.display()))?;

    let Value::Object(map) = value else {
        bail!("Form file {} must contain a JSON object", path.display());
    };

    let mut form = FormData::new();
    for (name, value) in map {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Null => continue,
            other => bail!("Field '{}' must be a string or number, got {}", name, other),
        };
        form.insert(name, text);
    }
    Ok(form)
}

/// Returns whether the form is valid
pub fn run(
    terminal: &Terminal,
    cli_fields: Vec<(String, String)>,
    protocol: Option<String>,
    form_file: Option<&Path>,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut form = match form_file {
        Some(path) => load_form(path)?,
        None => FormData::new(),
    };
    form.extend(cli_fields);
    if let Some(protocol) = protocol {
        form.insert(fields::PROTOCOL.to_string(), protocol);
    }

    let report = terminal.registry.validate_form(&form);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report.to_json())?)?;
        return Ok(report.is_valid);
    }

    if report.is_empty() {
        let known = terminal.registry.field_names().join(", ");
        writeln!(out, "No known fields supplied. Known fields: {}", known)?;
        return Ok(true);
    }

    for field in terminal.registry.field_names() {
        let Some(result) = report.field_result(field) else {
            continue;
        };
        let mark = if result.valid { "✓" } else { "✗" };
        match result.card_type {
            Some(network) => writeln!(out, "{} {}: {} ({})", mark, field, result.message, network)?,
            None => writeln!(out, "{} {}: {}", mark, field, result.message)?,
        }
    }
    writeln!(out, "{}", report)?;

    Ok(report.is_valid)
}
