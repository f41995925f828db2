use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::Metadata;
use tracing_subscriber::fmt::MakeWriter;

use crate::terminal::print::PRINT_TARGET;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// The spinner currently on screen, if any. Output is routed above it.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

pub fn start_analysis_spinner(total: usize) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(TICK_STRINGS));
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Sweeping {} thresholds...", total.to_string().green().bold()));

    if let Ok(mut active) = ACTIVE.lock() {
        *active = Some(pb.clone());
    }
    pb
}

pub fn report_analysis_progress(done: usize, total: usize) {
    if let Ok(active) = ACTIVE.lock() {
        if let Some(pb) = active.as_ref() {
            pb.set_message(format!(
                "Analyzed {} of {} thresholds...",
                done.to_string().green().bold(),
                total
            ));
        }
    }
}

pub fn finish_spinner() {
    if let Ok(mut active) = ACTIVE.lock() {
        if let Some(pb) = active.take() {
            pb.finish_and_clear();
        }
    }
}

/// Picks stdout for report lines and stderr for logs.
pub struct TerminalWriter;

impl<'a> MakeWriter<'a> for TerminalWriter {
    type Writer = SpinnerWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SpinnerWriter::Log
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if meta.target() == PRINT_TARGET {
            SpinnerWriter::Report
        } else {
            SpinnerWriter::Log
        }
    }
}

/// Writes above the active spinner, or straight to the terminal when idle.
pub enum SpinnerWriter {
    Report,
    Log,
}

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(active) = ACTIVE.lock() {
            if let Some(pb) = active.as_ref() {
                let msg = String::from_utf8_lossy(buf);
                pb.println(msg.trim_end());
                return Ok(buf.len());
            }
        }

        match self {
            SpinnerWriter::Report => io::stdout().write_all(buf)?,
            SpinnerWriter::Log => io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SpinnerWriter::Report => io::stdout().flush(),
            SpinnerWriter::Log => io::stderr().flush(),
        }
    }
}
