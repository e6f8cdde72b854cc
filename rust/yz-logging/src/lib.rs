//! yz-logging: NDJSON score events.
//!
//! Append-only, one JSON object per line, so a partially written file from a
//! crashed run still parses up to its last complete line.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use yz_core::{Category, Roll, Score};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// Minimal log schema versioning fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfoV1 {
    pub engine_version: String,
    pub ruleset_id: String,
}

impl VersionInfoV1 {
    pub fn current() -> Self {
        Self {
            engine_version: yz_core::VERSION.to_string(),
            ruleset_id: yz_core::RULESET_ID.to_string(),
        }
    }
}

/// One scored (roll, category) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEventV1 {
    pub event: String,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub dice: [u8; 5],
    pub category: String,
    pub score: Score,
}

impl ScoreEventV1 {
    pub const EVENT: &'static str = "score";

    pub fn new(roll: &Roll, category: Category, score: Score) -> Self {
        Self {
            event: Self::EVENT.to_string(),
            ts_ms: now_ms(),
            v: VersionInfoV1::current(),
            dice: roll.dice(),
            category: category.to_string(),
            score,
        }
    }
}

#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("ndjson io: {0}")]
    Io(#[from] io::Error),
    #[error("ndjson encode: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ndjson line {line} is corrupt: {source}")]
    Corrupt {
        line: usize,
        source: serde_json::Error,
    },
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

/// Read every event line, skipping blanks.
///
/// Only the final line may fail to parse, and only when the file does not end
/// with a newline (a write torn by a crash). Any other bad line is an error.
pub fn read_events_lenient(path: impl AsRef<Path>) -> Result<Vec<ScoreEventV1>, NdjsonError> {
    let s = std::fs::read_to_string(path)?;
    let torn_tail = !s.is_empty() && !s.ends_with('\n');
    let lines: Vec<&str> = s.lines().collect();

    let mut out = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ScoreEventV1>(line) {
            Ok(e) => out.push(e),
            Err(_) if torn_tail && i + 1 == lines.len() => break,
            Err(source) => return Err(NdjsonError::Corrupt { line: i + 1, source }),
        }
    }
    Ok(out)
}
