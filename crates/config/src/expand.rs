//! Environment placeholder expansion for property values.
//!
//! Two placeholder forms are recognized, and only when they make up the whole
//! value (or the whole list element):
//!
//! - `${NAME}` - the value of environment variable `NAME`, empty when unset.
//! - `${NAME:default}` - the value of `NAME`, or `default` when unset or empty.
//!
//! ```text
//! "${CAPI_API_KEY}"                      -> "CAPIAPI"   (if CAPI_API_KEY=CAPIAPI)
//! "${CAPI_API_KEY:default}"              -> "default"   (if CAPI_API_KEY is unset)
//! "a, ${B:https://b.example}, c"         -> "a, https://b.example, c"
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

/// Source of environment variable values, so lookups can be redirected in tests.
pub trait EnvSource: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// A parsed `${NAME}` or `${NAME:default}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub name: &'a str,
    pub default: Option<&'a str>,
}

impl<'a> Placeholder<'a> {
    /// Parse `value` as a placeholder. Surrounding whitespace is not allowed.
    pub fn parse(value: &'a str) -> Option<Self> {
        let inner = value.strip_prefix("${")?.strip_suffix('}')?;
        let (name, default) = match inner.split_once(':') {
            Some((name, default)) => (name, Some(default)),
            None => (inner, None),
        };
        if name.is_empty() || name.contains(['$', '{', '}']) || name.trim() != name {
            return None;
        }
        Some(Self { name, default })
    }
}

/// Expand a whole-value `${NAME}` or `${NAME:default}` placeholder.
pub fn expand_with_default<'a>(value: &'a str, env: &dyn EnvSource) -> Cow<'a, str> {
    let Some(placeholder) = Placeholder::parse(value) else {
        return Cow::Borrowed(value);
    };
    match (env.var(placeholder.name), placeholder.default) {
        (Some(found), Some(_)) if !found.is_empty() => Cow::Owned(found),
        (_, Some(default)) => Cow::Borrowed(default),
        (found, None) => Cow::Owned(found.unwrap_or_default()),
    }
}

/// Expand every comma-separated element of `value` independently.
///
/// Whitespace around each element is preserved so unchanged elements render
/// exactly as written.
pub fn expand_list(value: &str, env: &dyn EnvSource) -> String {
    value
        .split(',')
        .map(|element| {
            let trimmed = element.trim();
            if trimmed.is_empty() {
                return element.to_string();
            }
            let expanded = expand_with_default(trimmed, env);
            let start = element.len() - element.trim_start().len();
            let end = element.trim_end().len();
            format!("{}{}{}", &element[..start], expanded, &element[end..])
        })
        .collect::<Vec<_>>()
        .join(",")
}
