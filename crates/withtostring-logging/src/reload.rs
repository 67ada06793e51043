//! Subscriber installation and dynamic log level reloading

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, reload};
use withtostring_core::LogLevel;

/// Handle for dynamically reloading the log level filter
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<LevelFilter, tracing_subscriber::Registry>>>,
    level: AtomicU8,
}

impl ReloadHandle {
    /// Create a new reload handle
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
            level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set the reload handle (called during initialization)
    pub fn set_handle(
        &self,
        handle: reload::Handle<LevelFilter, tracing_subscriber::Registry>,
        level: LogLevel,
    ) {
        *self.handle.lock() = Some(handle);
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Whether a subscriber with a reloadable filter has been installed
    pub fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// The level most recently applied
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Reload the filter to use a new log level
    pub fn reload_level(&self, level: LogLevel) -> Result<(), String> {
        let guard = self.handle.lock();
        if let Some(handle) = guard.as_ref() {
            let filter = convert_level_to_filter(level);
            handle
                .reload(filter)
                .map_err(|e| format!("Failed to reload filter: {}", e))?;
            self.level.store(level as u8, Ordering::SeqCst);
            Ok(())
        } else {
            Err("Reload handle not initialized".to_string())
        }
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert LogLevel to tracing LevelFilter
fn convert_level_to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Install a stderr subscriber at `level`.
///
/// When `RUST_LOG` is set it takes precedence and the level cannot be
/// reloaded afterwards. Calling this more than once has no effect.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    if let Ok(env_filter) = EnvFilter::try_from_default_env() {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer());
        let _ = tracing::subscriber::set_global_default(subscriber);
        return;
    }

    let (filter, handle) = reload::Layer::new(convert_level_to_filter(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer());

    // Try to set as global default (ignore error if already set)
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        ReloadHandle::global().set_handle(handle, level);
    }
}

fn stderr_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    use std::io::IsTerminal;

    tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
}
