use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{FileHandle, VerdictLabel};
use crate::error::VerifyError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Random,
    Verified,
    Suspicious,
    Scripted,
}

impl FromStr for PolicyKind {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(PolicyKind::Random),
            "verified" => Ok(PolicyKind::Verified),
            "suspicious" => Ok(PolicyKind::Suspicious),
            "scripted" => Ok(PolicyKind::Scripted),
            other => Err(VerifyError::Parse(format!(
                "unknown policy `{other}` (expected random, verified, suspicious or scripted)"
            ))),
        }
    }
}

/// Decides the label for one verification. Implementations may ignore the
/// file entirely; a content-inspecting policy plugs in here.
pub trait VerdictPolicy: Send {
    fn kind(&self) -> &'static str;
    fn decide(&mut self, file: &FileHandle) -> VerdictLabel;
}

pub mod fixed;
pub mod random;
pub mod scripted;
