//! `get` and `exists` commands.

use anyhow::Context;
use gconfig::{ConfigError, ConfigStore};
use serde::Serialize;
use serde_json::Value;

use super::CommandOutput;
use crate::args::ValueKind;
use crate::error::ExitCode;
use crate::output::OutputFormat;

#[derive(Serialize)]
struct KeyValue<'a> {
    key: &'a str,
    value: Value,
}

#[derive(Serialize)]
struct KeyExists<'a> {
    key: &'a str,
    exists: bool,
}

pub fn run_get(
    store: &ConfigStore,
    key: &str,
    kind: ValueKind,
    format: OutputFormat,
) -> anyhow::Result<CommandOutput> {
    if !store.exists(key) {
        return Err(ConfigError::MissingKey(key.to_string()))
            .with_context(|| format!("Cannot get '{}' for profile '{}'", key, store.profile()));
    }

    let value = lookup(store, key, kind);
    let text = format.render(&KeyValue { key, value }, |kv| match &kv.value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })?;

    Ok(CommandOutput::success(text))
}

pub fn run_exists(
    store: &ConfigStore,
    key: &str,
    format: OutputFormat,
) -> anyhow::Result<CommandOutput> {
    let exists = store.exists(key);
    let text = format.render(&KeyExists { key, exists }, |ke| ke.exists.to_string())?;

    Ok(CommandOutput {
        text,
        exit_code: if exists {
            ExitCode::Success
        } else {
            ExitCode::NotFound
        },
    })
}

fn lookup(store: &ConfigStore, key: &str, kind: ValueKind) -> Value {
    match kind {
        ValueKind::String => Value::from(store.get_string(key)),
        ValueKind::Int => Value::from(store.get_int(key)),
        ValueKind::Float => Value::from(store.get_float(key)),
        ValueKind::Bool => Value::from(store.get_bool(key)),
        ValueKind::Default => Value::from(store.get_string_or_default(key)),
        ValueKind::List => Value::from(store.get_string_or_default_in_comma_separator(key)),
    }
}
