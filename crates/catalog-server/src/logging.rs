//! Tracing subscriber setup.

use catalog_config::ObservabilityConfig;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Level used while the configuration is still being loaded.
const BOOTSTRAP_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `observability.log_level`.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json() {
        registry
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

/// Subscriber for the startup phase, before `observability` is known.
///
/// Meant to be scoped with [`tracing::subscriber::with_default`] around
/// configuration loading; [`init`] installs the real one afterwards.
pub fn bootstrap_subscriber() -> impl Subscriber + Send + Sync {
    bootstrap_with_writer(std::io::stdout)
}

fn bootstrap_with_writer<W>(writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(BOOTSTRAP_LEVEL)));

    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer),
    )
}

fn default_directives(level: &str) -> String {
    format!("{},sqlx=warn", level.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_config::ConfigLoader;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives("DEBUG"), "debug,sqlx=warn");
        assert!(EnvFilter::try_new(default_directives("info")).is_ok());
    }

    #[test]
    fn test_config_loading_is_logged_before_init() {
        let capture = Capture::default();
        let subscriber = bootstrap_with_writer(capture.clone());

        let loaded = tracing::subscriber::with_default(subscriber, || {
            ConfigLoader::with_environment("./no-such-config-dir", "staging")
        });

        assert!(loaded.is_ok());
        assert!(capture
            .contents()
            .contains("Loading configuration for environment: staging"));
    }
}
