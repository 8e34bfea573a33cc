// docverify_core/src/domain.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VerifyError};

/// Reference to a user-selected file. Only metadata is read on selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

impl FileHandle {
    pub fn open(path: &Path) -> Result<Self> {
        let md = std::fs::metadata(path)?;
        if !md.is_file() {
            return Err(VerifyError::NotAFile(path.to_path_buf()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: md.len(),
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerdictLabel {
    Verified,
    Suspicious,
}

impl VerdictLabel {
    pub fn reason(self) -> &'static str {
        match self {
            VerdictLabel::Verified => "Signature detected",
            VerdictLabel::Suspicious => "Signature missing",
        }
    }
}

impl FromStr for VerdictLabel {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verified" => Ok(VerdictLabel::Verified),
            "suspicious" => Ok(VerdictLabel::Suspicious),
            other => Err(VerifyError::Parse(format!(
                "unknown verdict `{other}` (expected verified or suspicious)"
            ))),
        }
    }
}

impl fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictLabel::Verified => f.write_str("Verified"),
            VerdictLabel::Suspicious => f.write_str("Suspicious"),
        }
    }
}

/// Label plus its fixed reason. Fields are private so the pairing cannot drift.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VerdictRepr")]
pub struct Verdict {
    label: VerdictLabel,
    reason: String,
}

#[derive(Deserialize)]
struct VerdictRepr {
    label: VerdictLabel,
    reason: String,
}

impl TryFrom<VerdictRepr> for Verdict {
    type Error = VerifyError;

    fn try_from(r: VerdictRepr) -> Result<Self> {
        if r.reason != r.label.reason() {
            return Err(VerifyError::Parse(format!(
                "reason `{}` does not belong to {}",
                r.reason, r.label
            )));
        }
        Ok(Verdict::new(r.label))
    }
}

impl Verdict {
    pub fn new(label: VerdictLabel) -> Self {
        Self {
            label,
            reason: label.reason().to_string(),
        }
    }

    pub fn label(&self) -> VerdictLabel {
        self.label
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// What the result card shows for the latest trigger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub verdict: Verdict,
    pub file_name: String,
    /// Lowercase hex SHA-256 of the file bytes, when digests are enabled.
    pub digest: Option<String>,
}
