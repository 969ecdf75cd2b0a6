//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Build the env filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use roster_people::Person;

    /// In-memory writer shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    /// Run `f` under a debug-level JSON subscriber and return the emitted lines.
    fn capture(f: impl FnOnce()) -> Vec<String> {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_max_level(::tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();

        ::tracing::subscriber::with_default(subscriber, f);
        logs.lines()
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        ::tracing::info!("observability initialized twice");
    }

    #[test]
    fn rejected_name_logs_field_and_reason() {
        let lines = capture(|| {
            assert!(Person::new("", 1990).is_err());
        });

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(r#""field":"name""#), "{}", lines[0]);
        assert!(lines[0].contains(r#""reason":"name is mandatory.""#), "{}", lines[0]);
        assert!(lines[0].contains(r#""level":"DEBUG""#), "{}", lines[0]);
    }

    #[test]
    fn rejected_absent_name_logs_field() {
        let lines = capture(|| {
            assert!(Person::from_option(None, 1990).is_err());
        });

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(r#""field":"name""#), "{}", lines[0]);
    }

    #[test]
    fn rejected_year_logs_field_and_year() {
        let lines = capture(|| {
            assert!(Person::new("A", 2019).is_err());
        });

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(r#""field":"year_of_birth""#), "{}", lines[0]);
        assert!(lines[0].contains(r#""year":2019"#), "{}", lines[0]);
        assert!(
            lines[0].contains(r#""reason":"year of birth is out of range.""#),
            "{}",
            lines[0]
        );
    }

    #[test]
    fn valid_construction_logs_nothing() {
        let lines = capture(|| {
            assert!(Person::new("A", 2000).is_ok());
        });

        assert!(lines.is_empty(), "unexpected log lines: {lines:?}");
    }
}
