//! Browser Console Logging
//!
//! Installs a `tracing` fmt subscriber whose output lands in the devtools
//! console. Each event is buffered and emitted as a single console line.

use std::io;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Creates one [`ConsoleWriter`] per event
#[derive(Clone, Copy, Default)]
struct ConsoleMakeWriter;

/// Buffers one formatted event, flushed to `console.log` on drop
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
    }
}

/// Install the global subscriber.
///
/// An invalid directive falls back to `info` rather than aborting startup.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
        web_sys::console::warn_1(&format!("[LOG] bad filter {:?}: {}", directive, err).into());
        EnvFilter::new("info")
    });

    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();

    if installed.is_err() {
        web_sys::console::warn_1(&"[LOG] subscriber already installed".into());
    }
}
