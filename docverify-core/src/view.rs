use std::fmt::Write;

use serde::Serialize;

use crate::counters::Counters;
use crate::domain::{FileHandle, VerificationResult};
use crate::session::{AppState, Phase};

pub const TITLE: &str = "AI Document Verifier";

/// Serializable picture of the dashboard.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub selection: Option<&'a FileHandle>,
    pub result: Option<&'a VerificationResult>,
    pub counters: Counters,
}

pub fn snapshot(state: &AppState) -> Snapshot<'_> {
    Snapshot {
        phase: state.phase(),
        selection: state.selection().current(),
        result: state.result(),
        counters: state.counters(),
    }
}

pub fn render(state: &AppState) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = render_into(&mut out, state);
    out
}

fn render_into(out: &mut String, state: &AppState) -> std::fmt::Result {
    writeln!(out, "== {TITLE} ==")?;
    match state.selection().current() {
        Some(f) => writeln!(out, "File: {} ({} bytes)", f.name, f.size)?,
        None => writeln!(out, "No file selected")?,
    }

    if let Some(res) = state.result() {
        writeln!(out)?;
        writeln!(out, "  Status: {}", res.verdict.label())?;
        writeln!(out, "  {}", res.verdict.reason())?;
        writeln!(out, "  File: {}", res.file_name)?;
        if let Some(d) = &res.digest {
            writeln!(out, "  SHA256: {d}")?;
        }
    }

    let c = state.counters();
    writeln!(out)?;
    writeln!(
        out,
        "{:>12} {:>12} {:>12} {:>12}",
        "Total Docs", "Verified", "Suspicious", "Time Saved"
    )?;
    writeln!(
        out,
        "{:>12} {:>12} {:>12} {:>12}",
        c.total,
        c.verified,
        c.suspicious,
        format!("{} min", c.time_saved)
    )
}
