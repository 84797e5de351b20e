//! `profile` command.

use gconfig::{ConfigStore, PropertyLayer};
use serde::Serialize;

use super::CommandOutput;
use crate::output::OutputFormat;

#[derive(Serialize)]
struct LayerSummary<'a> {
    file: &'a str,
    keys: usize,
}

#[derive(Serialize)]
struct ProfileSummary<'a> {
    profile: &'a str,
    default_layer: Option<LayerSummary<'a>>,
    profile_layer: Option<LayerSummary<'a>>,
    empty: bool,
}

fn summarize(layer: Option<&PropertyLayer>) -> Option<LayerSummary<'_>> {
    layer.map(|layer| LayerSummary {
        file: layer.source_name(),
        keys: layer.len(),
    })
}

fn describe(layer: &Option<LayerSummary<'_>>) -> String {
    match layer {
        Some(layer) => format!("{} ({} keys)", layer.file, layer.keys),
        None => "none".to_string(),
    }
}

pub fn run_profile(store: &ConfigStore, format: OutputFormat) -> anyhow::Result<CommandOutput> {
    let summary = ProfileSummary {
        profile: store.profile(),
        default_layer: summarize(store.default_layer()),
        profile_layer: summarize(store.profile_layer()),
        empty: store.is_empty(),
    };

    let text = format.render(&summary, |s| {
        format!(
            "profile: {}\ndefault layer: {}\nprofile layer: {}",
            s.profile,
            describe(&s.default_layer),
            describe(&s.profile_layer)
        )
    })?;

    Ok(CommandOutput::success(text))
}
