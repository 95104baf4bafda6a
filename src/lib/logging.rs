//! Tracing subscriber setup. Formatted lines go to the browser console on wasm
//! and to stderr elsewhere. The filter accepts `EnvFilter` directives plus the
//! numeric/named verbosity shorthand used on the command line (`0`..`4`,
//! `error`..`trace`).

use crate::app_lib::AppError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps verbosity shorthand to a level. Returns `None` for anything else so the
/// value can be interpreted as a full filter directive instead.
pub fn parse_level(value: &str) -> Option<Level> {
    if let Ok(parsed) = value.trim().parse::<u8>() {
        return match parsed {
            0 => Some(Level::ERROR),
            1 => Some(Level::WARN),
            2 => Some(Level::INFO),
            3 => Some(Level::DEBUG),
            4 => Some(Level::TRACE),
            _ => None,
        };
    }

    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Builds the filter from a shorthand level or a directive string. Numbers
/// outside `0..=4` are rejected; `EnvFilter` would read them on its own
/// 1-based scale.
pub fn build_filter(value: &str) -> Result<EnvFilter, AppError> {
    let directive = match parse_level(value) {
        Some(level) => level.as_str().to_lowercase(),
        None if value.trim().parse::<u64>().is_ok() => {
            return Err(AppError::Logging(format!(
                "invalid log level '{value}': expected 0..4"
            )));
        }
        None => value.trim().to_string(),
    };
    EnvFilter::try_new(&directive)
        .map_err(|err| AppError::Logging(format!("invalid log filter '{value}': {err}")))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(filter: &str) -> Result<(), AppError> {
    let filter = build_filter(filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(console::ConsoleMakeWriter)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    /// Buffers one formatted event and flushes it to the console on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end();
            if line.is_empty() {
                return;
            }
            let value = wasm_bindgen::JsValue::from_str(line);
            match self.level {
                Level::ERROR => web_sys::console::error_1(&value),
                Level::WARN => web_sys::console::warn_1(&value),
                Level::INFO => web_sys::console::info_1(&value),
                _ => web_sys::console::log_1(&value),
            }
        }
    }

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod console {
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = io::Stderr;

        fn make_writer(&'a self) -> Self::Writer {
            io::stderr()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{build_filter, parse_level};
    use crate::app_lib::AppError;
    use tracing::Level;

    #[test]
    fn parse_level_accepts_numbers_and_names() {
        assert_eq!(parse_level("0"), Some(Level::ERROR));
        assert_eq!(parse_level("4"), Some(Level::TRACE));
        assert_eq!(parse_level("5"), None);
        assert_eq!(parse_level("Debug"), Some(Level::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(Level::WARN));
        assert_eq!(parse_level("navsidebar=debug"), None);
    }

    #[test]
    fn build_filter_accepts_directives() {
        assert!(build_filter("3").is_ok());
        assert!(build_filter("navsidebar=debug,leptos=warn").is_ok());
    }

    #[test]
    fn build_filter_rejects_numeric_levels_out_of_range() {
        assert!(matches!(build_filter("5"), Err(AppError::Logging(_))));
        assert!(matches!(build_filter(" 42 "), Err(AppError::Logging(_))));
        assert!(build_filter("4").is_ok());
    }

    #[test]
    fn build_filter_rejects_malformed_directives() {
        assert!(matches!(
            build_filter("navsidebar=loud"),
            Err(AppError::Logging(_))
        ));
    }
}
