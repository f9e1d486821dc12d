//! Tracing setup.
//!
//! Output format is controlled by `MONKEY_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `json`: one JSON object per event
//!
//! ```bash
//! MONKEY_LOG=trace monkey
//! MONKEY_LOG="monkey::parser=debug" MONKEY_LOG_FORMAT=json monkey
//! ```
//!
//! The subscriber is only installed when `MONKEY_LOG` (or `RUST_LOG`) is
//! set. Everything is written to stderr; stdout belongs to the REPL.

use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Parses a format name case-insensitively; unknown names mean `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("MONKEY_LOG_FORMAT").unwrap_or_default())
    }
}

/// Picks the filter directives: `MONKEY_LOG` takes precedence over
/// `RUST_LOG`. `None` means logging was not requested.
fn filter_directives<F>(var: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    var("MONKEY_LOG").or_else(|| var("RUST_LOG"))
}

fn build_filter<F>(var: F) -> Option<EnvFilter>
where
    F: Fn(&str) -> Option<String>,
{
    filter_directives(var).map(|directives| EnvFilter::builder().parse_lossy(directives))
}

/// Installs the global tracing subscriber if logging was requested.
/// Calling it again after a subscriber is installed does nothing.
pub fn init_tracing() {
    let Some(filter) = build_filter(|key| std::env::var(key).ok()) else {
        return;
    };

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let _ = match LogFormat::from_env() {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
