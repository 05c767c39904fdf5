//! Process-wide logging setup.
//!
//! A [`Logger`] collects handlers (file, stream, UDP, syslog), each with its
//! own level, and installs them as one `tracing` subscriber. Installation
//! happens once: a second `set_config` on the same logger, or any call after
//! another global subscriber is in place, fails with
//! [`LogError::AlreadyConfigured`].
//!
//! Every handler writes `[HH:MM:SS.mmm][LEVEL] message`.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::net::{ToSocketAddrs, UdpSocket};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Event, Level, Metadata, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::settings::{HandlerSettings, LogSettings, StreamTarget};

pub const DEFAULT_LOG_DIR: &str = "./logs/";
pub const DEFAULT_NAME_FORMAT: &str = "%y%m%d_%H%M%S";
pub const SYSLOG_ADDR: &str = "localhost:514";
const SYSLOG_TAG: &str = "monoui";

#[derive(Debug)]
pub enum LogError {
    AlreadyConfigured,
    UnknownLevel(String),
    BadNameFormat(String),
    Io(io::Error),
    Appender(String),
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::AlreadyConfigured => write!(f, "logging is already configured"),
            LogError::UnknownLevel(level) => write!(f, "unknown log level: {}", level),
            LogError::BadNameFormat(fmt) => write!(f, "invalid log file name format: {}", fmt),
            LogError::Io(e) => write!(f, "log handler i/o error: {}", e),
            LogError::Appender(msg) => write!(f, "log file appender failed: {}", msg),
        }
    }
}

impl std::error::Error for LogError {}

impl From<io::Error> for LogError {
    fn from(e: io::Error) -> Self {
        LogError::Io(e)
    }
}

/// Maps the level names used in settings to a filter. `critical` has no
/// tracing counterpart and maps to ERROR; `notset` lets everything through.
pub fn parse_level(name: &str) -> Result<LevelFilter, LogError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "critical" | "error" => Ok(LevelFilter::ERROR),
        "warning" | "warn" => Ok(LevelFilter::WARN),
        "info" => Ok(LevelFilter::INFO),
        "debug" => Ok(LevelFilter::DEBUG),
        "notset" | "trace" => Ok(LevelFilter::TRACE),
        "off" => Ok(LevelFilter::OFF),
        _ => Err(LogError::UnknownLevel(name.to_string())),
    }
}

enum Sink {
    File { dir: PathBuf, name_format: String },
    Stream(SharedStream),
    Udp { addr: String },
    Syslog { addr: String },
}

struct Handler {
    sink: Sink,
    level: LevelFilter,
}

/// Keeps background log writers alive; drop it last.
pub struct LoggingGuard {
    _guards: Vec<WorkerGuard>,
    files: Vec<PathBuf>,
    send_failures: Vec<Arc<AtomicUsize>>,
}

impl LoggingGuard {
    /// Log files opened by file handlers.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Records the UDP and syslog handlers failed to send.
    pub fn send_failures(&self) -> usize {
        self.send_failures
            .iter()
            .map(|n| n.load(Ordering::Relaxed))
            .sum()
    }
}

pub struct Logger {
    level: LevelFilter,
    handlers: Vec<Handler>,
    configured: bool,
}

impl Logger {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            handlers: Vec::new(),
            configured: false,
        }
    }

    pub fn from_settings(settings: &LogSettings) -> Result<Self, LogError> {
        let mut logger = Self::new(parse_level(&settings.level)?);
        for handler in &settings.handlers {
            match handler {
                HandlerSettings::File {
                    dir,
                    name_format,
                    level,
                } => logger.add_file_handler(dir, name_format, handler_level(level)?),
                HandlerSettings::Stream { target, level } => {
                    let level = handler_level(level)?;
                    match target {
                        StreamTarget::Stderr => logger.add_stream_handler(io::stderr, level),
                        StreamTarget::Stdout => logger.add_stream_handler(io::stdout, level),
                    }
                }
                HandlerSettings::Udp { host, port, level } => {
                    logger.add_udp_handler(host, *port, handler_level(level)?)
                }
                HandlerSettings::Syslog { address, level } => logger.add_syslog_handler(
                    address.as_deref().unwrap_or(SYSLOG_ADDR),
                    handler_level(level)?,
                ),
            }
        }
        Ok(logger)
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Logs to `{dir}/{strftime(name_format)}.log`, named when the logger is
    /// installed.
    pub fn add_file_handler(&mut self, dir: impl AsRef<Path>, name_format: &str, level: LevelFilter) {
        self.handlers.push(Handler {
            sink: Sink::File {
                dir: dir.as_ref().to_path_buf(),
                name_format: name_format.to_string(),
            },
            level,
        });
    }

    pub fn add_stream_handler<M>(&mut self, stream: M, level: LevelFilter)
    where
        M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.handlers.push(Handler {
            sink: Sink::Stream(SharedStream(Arc::new(BoxMakeWriter::new(stream)))),
            level,
        });
    }

    /// Sends every record as one UDP datagram.
    pub fn add_udp_handler(&mut self, host: &str, port: u16, level: LevelFilter) {
        self.handlers.push(Handler {
            sink: Sink::Udp {
                addr: format!("{}:{}", host, port),
            },
            level,
        });
    }

    /// Sends every record as an RFC 3164 style datagram, facility `user`.
    pub fn add_syslog_handler(&mut self, addr: &str, level: LevelFilter) {
        self.handlers.push(Handler {
            sink: Sink::Syslog {
                addr: addr.to_string(),
            },
            level,
        });
    }

    /// Builds the subscriber without installing it.
    pub fn build(&self) -> Result<(Dispatch, LoggingGuard), LogError> {
        let mut guards = Vec::new();
        let mut files = Vec::new();
        let mut send_failures = Vec::new();
        let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

        for handler in &self.handlers {
            let writer = match &handler.sink {
                Sink::File { dir, name_format } => {
                    let (writer, guard, path) = open_log_file(dir, name_format)?;
                    guards.push(guard);
                    files.push(path);
                    BoxMakeWriter::new(writer)
                }
                Sink::Stream(stream) => BoxMakeWriter::new(stream.clone()),
                Sink::Udp { addr } | Sink::Syslog { addr } => {
                    let tag = matches!(handler.sink, Sink::Syslog { .. }).then_some(SYSLOG_TAG);
                    let datagrams = DatagramMakeWriter::connect(addr, tag)?;
                    send_failures.push(datagrams.failures.clone());
                    BoxMakeWriter::new(datagrams)
                }
            };
            layers.push(
                tracing_subscriber::fmt::layer()
                    .event_format(BracketFormat)
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_filter(handler.level)
                    .boxed(),
            );
        }

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string()));

        let subscriber = tracing_subscriber::registry().with(layers).with(env_filter);
        Ok((
            Dispatch::new(subscriber),
            LoggingGuard {
                _guards: guards,
                files,
                send_failures,
            },
        ))
    }

    /// Installs the handlers as the global subscriber. Call once at startup.
    pub fn set_config(&mut self) -> Result<LoggingGuard, LogError> {
        if self.configured {
            return Err(LogError::AlreadyConfigured);
        }
        let (dispatch, guard) = self.build()?;
        tracing::dispatcher::set_global_default(dispatch)
            .map_err(|_| LogError::AlreadyConfigured)?;
        self.configured = true;

        std::panic::set_hook(Box::new(|panic_info| {
            tracing::error!(panic = %panic_info, "panic");
        }));

        tracing::info!(
            level = %self.level,
            handlers = self.handlers.len(),
            "logging initialized"
        );
        Ok(guard)
    }
}

fn handler_level(level: &Option<String>) -> Result<LevelFilter, LogError> {
    match level {
        Some(name) => parse_level(name),
        None => Ok(LevelFilter::TRACE),
    }
}

fn open_log_file(
    dir: &Path,
    name_format: &str,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard, PathBuf), LogError> {
    let mut stem = String::new();
    write!(stem, "{}", chrono::Local::now().format(name_format))
        .map_err(|_| LogError::BadNameFormat(name_format.to_string()))?;
    if stem.is_empty() || stem.contains(std::path::is_separator) {
        return Err(LogError::BadNameFormat(name_format.to_string()));
    }

    std::fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(stem.as_str())
        .filename_suffix("log")
        .build(dir)
        .map_err(|e| LogError::Appender(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    Ok((writer, guard, dir.join(format!("{}.log", stem))))
}

/// Lets a stream handler be rebuilt into more than one subscriber.
#[derive(Clone)]
struct SharedStream(Arc<BoxMakeWriter>);

impl<'a> MakeWriter<'a> for SharedStream {
    type Writer = <BoxMakeWriter as MakeWriter<'a>>::Writer;

    fn make_writer(&'a self) -> Self::Writer {
        self.0.make_writer()
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.0.make_writer_for(meta)
    }
}

/// `HH:MM:SS.mmm` in local time.
struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

struct BracketFormat;

impl<S, N> FormatEvent<S, N> for BracketFormat
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
        write!(writer, "[")?;
        ClockTime.format_time(&mut writer)?;
        write!(writer, "][{}] ", level_name(*event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Syslog severity for the `user` facility (1).
fn syslog_priority(level: &Level) -> u8 {
    let severity = match *level {
        Level::ERROR => 3,
        Level::WARN => 4,
        Level::INFO => 6,
        Level::DEBUG | Level::TRACE => 7,
    };
    8 + severity
}

#[derive(Clone)]
struct DatagramMakeWriter {
    socket: Arc<UdpSocket>,
    tag: Option<&'static str>,
    failures: Arc<AtomicUsize>,
}

impl DatagramMakeWriter {
    fn connect(addr: &str, tag: Option<&'static str>) -> io::Result<Self> {
        let target = addr.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("no address for {}", addr))
        })?;
        let local = if target.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = UdpSocket::bind(local)?;
        socket.connect(target)?;
        Ok(Self::new(socket, tag))
    }

    fn new(socket: UdpSocket, tag: Option<&'static str>) -> Self {
        Self {
            socket: Arc::new(socket),
            tag,
            failures: Arc::new(AtomicUsize::new(0)),
        }
    }
}

/// Buffers one formatted record and sends it when dropped.
struct DatagramWriter {
    socket: Arc<UdpSocket>,
    failures: Arc<AtomicUsize>,
    buf: Vec<u8>,
}

impl<'a> MakeWriter<'a> for DatagramMakeWriter {
    type Writer = DatagramWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer_with_header(String::new())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        match self.tag {
            Some(tag) => {
                let header = format!("<{}>{}: ", syslog_priority(meta.level()), tag);
                self.writer_with_header(header)
            }
            None => self.make_writer(),
        }
    }
}

impl DatagramMakeWriter {
    fn writer_with_header(&self, header: String) -> DatagramWriter {
        let mut buf = Vec::with_capacity(256);
        buf.extend_from_slice(header.as_bytes());
        DatagramWriter {
            socket: self.socket.clone(),
            failures: self.failures.clone(),
            buf,
        }
    }
}

impl Write for DatagramWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for DatagramWriter {
    fn drop(&mut self) {
        while self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.is_empty() {
            return;
        }
        if let Err(e) = self.socket.send(&self.buf) {
            // Only the first failure goes to stderr; all are counted.
            if self.failures.fetch_add(1, Ordering::Relaxed) == 0 {
                eprintln!("monoui: failed to send log datagram: {}", e);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
