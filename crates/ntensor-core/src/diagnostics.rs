//! Diagnostics collaborator
//!
//! The engine never writes to a global logger on its own account and never
//! exits the process. Operations that want to report progress take a
//! [`Diagnostics`] sink from the caller; [`LogDiagnostics`] forwards to the
//! `log` facade so the caller keeps ownership of the process-wide logger.
//!
//! Termination is a caller policy: [`OrFatal::or_fatal`] turns an error into a
//! fatal diagnostic, and only the sink decides what "fatal" means.
//!
//! # Examples
//!
//! ```no_run
//! use ntensor_core::{LogDiagnostics, OrFatal, Tensor, TensorConfig};
//!
//! let diag = LogDiagnostics::default();
//! // Logs the error and exits if the shape is rejected.
//! let tensor = Tensor::new(&[4, 4], 0.0f32, TensorConfig::default()).or_fatal(&diag);
//! assert_eq!(tensor.len(), 16);
//! ```

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::TensorResult;

/// Severity of a diagnostic message
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    fn to_log_level(self) -> log::Level {
        match self {
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error | Level::Fatal => log::Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        };
        f.write_str(name)
    }
}

/// Sink for leveled messages with a terminate-on-fatal capability
pub trait Diagnostics: Send + Sync {
    /// Record a non-fatal message.
    fn message(&self, level: Level, args: fmt::Arguments<'_>);

    /// Record a fatal message and stop the current computation.
    fn fatal(&self, args: fmt::Arguments<'_>) -> !;
}

/// Diagnostics backed by the `log` facade
///
/// Messages below `min_level` are dropped before reaching the logger. `fatal`
/// logs at error level and exits with a failure status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogDiagnostics {
    min_level: Level,
}

impl LogDiagnostics {
    pub fn new(min_level: Level) -> Self {
        Self { min_level }
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }
}

impl Default for LogDiagnostics {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl Diagnostics for LogDiagnostics {
    fn message(&self, level: Level, args: fmt::Arguments<'_>) {
        if level < self.min_level {
            return;
        }
        log::log!(target: "ntensor", level.to_log_level(), "{}", args);
    }

    fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        log::error!(target: "ntensor", "{}: {}", Level::Fatal, args);
        std::process::exit(1)
    }
}

/// Diagnostics that keep every message in memory
///
/// `fatal` panics with the message, unwinding the computation without exiting
/// the process.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    messages: Mutex<Vec<(Level, String)>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages in arrival order.
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Whether any recorded message at `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lock()
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(needle))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(Level, String)>> {
        // Poisoned only by a panicking reader; the Vec itself is intact.
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn message(&self, level: Level, args: fmt::Arguments<'_>) {
        self.lock().push((level, args.to_string()));
    }

    fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let msg = args.to_string();
        self.lock().push((Level::Fatal, msg.clone()));
        panic!("fatal: {}", msg)
    }
}

/// Caller-chosen escalation of errors to fatal diagnostics
pub trait OrFatal<T> {
    /// Unwrap the value, or hand the error to `diag.fatal`.
    fn or_fatal<D: Diagnostics + ?Sized>(self, diag: &D) -> T;
}

impl<T> OrFatal<T> for TensorResult<T> {
    fn or_fatal<D: Diagnostics + ?Sized>(self, diag: &D) -> T {
        match self {
            Ok(value) => value,
            Err(err) => diag.fatal(format_args!("{}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TensorError;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Error < Level::Fatal);
        assert_eq!(Level::Warn.to_string(), "WARN");
    }

    #[test]
    fn test_or_fatal_passes_values_through() {
        let diag = CollectingDiagnostics::new();
        let value: TensorResult<u32> = Ok(7);
        assert_eq!(value.or_fatal(&diag), 7);
        assert!(diag.messages().is_empty());
    }

    #[test]
    #[should_panic(expected = "fatal: rank mismatch")]
    fn test_or_fatal_escalates_errors() {
        let diag = CollectingDiagnostics::new();
        let value: TensorResult<u32> = Err(TensorError::RankMismatch {
            expected: 2,
            got: 3,
        });
        value.or_fatal(&diag);
    }

    #[test]
    fn test_collecting_diagnostics_records_in_order() {
        let diag = CollectingDiagnostics::new();
        diag.message(Level::Info, format_args!("first {}", 1));
        diag.message(Level::Debug, format_args!("second"));

        let messages = diag.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], (Level::Info, "first 1".to_string()));
        assert!(diag.contains(Level::Debug, "second"));
        assert!(!diag.contains(Level::Info, "second"));
    }

    #[test]
    fn test_log_diagnostics_filters_below_min_level() {
        // Nothing observable without a logger installed; this only exercises
        // the filter path.
        let diag = LogDiagnostics::new(Level::Warn);
        diag.message(Level::Debug, format_args!("dropped"));
        diag.message(Level::Error, format_args!("kept"));
        assert_eq!(diag.min_level(), Level::Warn);
    }
}
