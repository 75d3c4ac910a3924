use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use anyhow::{Context as _, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber, info};
use tracing_subscriber::{
    EnvFilter,
    Layer, // needed for .with_filter() on the stdout layer
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

const DEFAULT_FILTER: &str = "info,steuer_ui=debug,steuer_core=debug";

// --- Formatter ---

/// `<local timestamp> <LEVEL> <file:line> <fields>`, coloured on a terminal.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let colour = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        if ansi {
            write!(writer, "{colour}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file
                .rsplit_once("src/")
                .or_else(|| file.rsplit_once("src\\"))
                .map_or(file, |(_, rest)| rest);
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

type SharedFile = Arc<Mutex<Option<File>>>;

/// A MakeWriter that can be pointed at a file after initialization.
/// While no file is set, all writes are silently discarded.
#[derive(Clone)]
struct FileSlot(SharedFile);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

// --- Handles ---

type ReloadFn = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

struct LogHandles {
    /// Global ceiling shared by both layers.
    level: ReloadFn,
    /// Per-stdout gate; "trace" lets everything under the ceiling through.
    stdout: ReloadFn,
    file: SharedFile,
}

fn reloader<S>(
    what: &'static str,
    handle: reload::Handle<EnvFilter, S>,
) -> ReloadFn
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter: EnvFilter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("{what} reload failed: {e}"))
    })
}

static HANDLES: OnceLock<LogHandles> = OnceLock::new();

fn handles() -> Result<&'static LogHandles> {
    HANDLES
        .get()
        .ok_or_else(|| anyhow::anyhow!("logging not yet initialized"))
}

fn initial_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

// --- Public API ---

/// Initializes logging. Call once at startup.
///
/// - Stdout: colored when attached to a terminal, plain when piped.
/// - File: inactive until [`enable_file_logging`] is called.
/// - Level: `info` (debug for this workspace) unless RUST_LOG is set.
pub fn init_default_logging() {
    let file: SharedFile = Arc::new(Mutex::new(None));

    let (level_filter, level) = reload::Layer::new(initial_filter());
    let (stdout_gate, stdout) = reload::Layer::new(EnvFilter::new("trace"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(false)
        .with_writer(FileSlot(file.clone()));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = HANDLES.set(LogHandles {
            level: reloader("filter", level),
            stdout: reloader("stdout", stdout),
            file,
        });
    }
}

/// Changes the active log filter at runtime.
/// Accepts a bare level ("error", "warn", "info", "debug", "trace")
/// or any full EnvFilter directive.
pub fn set_log_level(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| anyhow::anyhow!("invalid log level '{level}': {e}"))?;
    (handles()?.level)(filter)
}

/// Shows or hides stdout log output without affecting file logging.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    let filter = EnvFilter::new(if enabled { "trace" } else { "off" });
    (handles()?.stdout)(filter)
}

/// Starts appending log output to `path`, replacing any open log file.
/// The directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    let slot = &handles()?.file;
    *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
    Ok(())
}

/// Closes the current log file.
pub fn disable_file_logging() {
    if let Some(handles) = HANDLES.get() {
        *handles.file.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Applies the `[logging]` config section; command-line values win over
/// the file.
pub fn apply_config(
    config: &LoggingConfig,
    level_override: Option<&str>,
    file_override: Option<&Path>,
) -> Result<()> {
    if let Some(level) = level_override.or(config.level.as_deref()) {
        set_log_level(level)?;
    }
    set_stdout_enabled(config.stdout)?;
    match file_override.or(config.file.as_deref()) {
        Some(path) => {
            enable_file_logging(path)?;
            info!(path = %path.display(), "file logging enabled");
        }
        None => disable_file_logging(),
    }
    Ok(())
}
