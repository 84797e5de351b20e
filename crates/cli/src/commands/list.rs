//! `list` command.

use std::collections::BTreeMap;

use gconfig::ConfigStore;

use super::CommandOutput;
use crate::output::OutputFormat;

pub fn run_list(store: &ConfigStore, format: OutputFormat) -> anyhow::Result<CommandOutput> {
    let entries: BTreeMap<&str, &str> = store.effective_entries();
    let text = format.render(&entries, |entries| {
        entries
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n")
    })?;

    Ok(CommandOutput::success(text))
}
