//! JSONL event trace, enabled with `--trace PATH`.
//!
//! Each line is `{"seq", "ts", "event", "payload"}`.

use std::fs::{self, File};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::notify::{Notice, Notifier};

#[derive(Serialize)]
struct TraceLine<'a, T> {
    seq: u64,
    ts: String,
    event: &'a str,
    payload: T,
}

#[derive(Serialize)]
struct StateChange<'a> {
    state: &'a str,
    from: &'a str,
    to: &'a str,
}

#[derive(Debug)]
struct Sink {
    out: LineWriter<File>,
    path: PathBuf,
    seq: u64,
}

impl Sink {
    fn create(path: &Path) -> Result<Self> {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .with_context(|| format!("create trace directory {}", dir.display()))?,
            _ => {}
        }
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open trace file {}", path.display()))?;
        Ok(Self {
            out: LineWriter::new(file),
            path: path.to_path_buf(),
            seq: 0,
        })
    }

    fn append<T: Serialize>(&mut self, event: &str, payload: T) -> Result<()> {
        let ts = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("format trace timestamp")?;
        let line = TraceLine {
            seq: self.seq + 1,
            ts,
            event,
            payload,
        };
        let text = serde_json::to_string(&line).context("serialize trace event")?;
        writeln!(self.out, "{}", text).context("append trace event")?;
        self.seq = line.seq;
        Ok(())
    }
}

/// Optional trace sink. A failed write disables the trace instead of
/// failing the command that emitted it.
#[derive(Debug, Default)]
pub struct Trace {
    sink: Option<Sink>,
}

impl Trace {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn open(path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            sink: path.map(Sink::create).transpose()?,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.sink.as_ref().map(|s| s.path.as_path())
    }

    pub fn event<T: Serialize>(&mut self, event: &str, payload: T) {
        if let Some(sink) = self.sink.as_mut()
            && sink.append(event, payload).is_err()
        {
            self.sink = None;
        }
    }

    pub fn state_change(&mut self, state: &str, from: &str, to: &str) {
        self.event("state_change", StateChange { state, from, to });
    }
}

/// Forwards notices to `inner` and records each one as a `notification`
/// trace event.
pub struct TracedNotifier<'a, N> {
    inner: N,
    trace: &'a mut Trace,
}

impl<'a, N: Notifier> TracedNotifier<'a, N> {
    pub fn new(inner: N, trace: &'a mut Trace) -> Self {
        Self { inner, trace }
    }

    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<N: Notifier> Notifier for TracedNotifier<'_, N> {
    fn notify(&mut self, notice: Notice) {
        self.trace.event("notification", &notice);
        self.inner.notify(notice);
    }
}

#[cfg(test)]
#[path = "tests/trace_tests.rs"]
mod tests;
