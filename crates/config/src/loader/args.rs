//! Command-line flag scanning for `-profile` and `-path`.
//!
//! The host application usually owns argv, so flags this crate does not know
//! are skipped instead of rejected. Accepted forms are `-profile=dev`,
//! `--profile=dev`, `-profile dev` and `--profile dev` (same for `path`).

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::ConfigError;

const PROFILE_FLAG: &str = "profile";
const PATH_FLAG: &str = "path";

/// Profile and path taken from command-line arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadArgs {
    pub profile: Option<String>,
    pub path: Option<PathBuf>,
}

impl LoadArgs {
    /// Scan `args` (without the program name) for the loader flags.
    ///
    /// An empty value (`-profile=`) counts as not given. A later occurrence
    /// overrides an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgument`] if a flag has no value: it is the
    /// last argument, or the next argument starts with `-`. The next argument is
    /// never consumed as a value in that case.
    pub fn scan<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().map(Into::into).peekable();

        while let Some(arg) = args.next() {
            let arg = arg.to_string_lossy().into_owned();
            let Some((flag, inline)) = split_flag(&arg) else {
                continue;
            };

            let value = match inline {
                Some(value) => value.to_string(),
                None => args
                    .next_if(|next| !next.to_string_lossy().starts_with('-'))
                    .map(|next| next.to_string_lossy().into_owned())
                    .ok_or_else(|| ConfigError::InvalidArgument {
                        flag: format!("-{flag}"),
                        message: "flag needs a value".to_string(),
                    })?,
            };
            let value = value.trim();

            match flag {
                PROFILE_FLAG => parsed.profile = (!value.is_empty()).then(|| value.to_string()),
                PATH_FLAG => parsed.path = (!value.is_empty()).then(|| PathBuf::from(value)),
                _ => {}
            }
        }

        Ok(parsed)
    }
}

/// Split `-flag`, `--flag`, `-flag=value` or `--flag=value` for known flags.
fn split_flag(arg: &str) -> Option<(&'static str, Option<&str>)> {
    let body = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    let flag = match name {
        PROFILE_FLAG => PROFILE_FLAG,
        PATH_FLAG => PATH_FLAG,
        _ => return None,
    };
    Some((flag, value))
}

/// Rewrite single-dash `-profile`/`-path` flags to the double-dash form.
///
/// Lets parsers that only accept `--long` options understand the legacy spelling.
pub fn normalize_legacy_flags<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if !text.starts_with("--") && split_flag(text).is_some() {
                return OsString::from(format!("-{text}"));
            }
            arg
        })
        .collect()
}
