use serde::{Deserialize, Serialize};

use crate::domain::VerdictLabel;
use crate::policy::PolicyKind;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EngineOptions {
    pub policy: PolicyKind,
    /// Fixes the random policy's sequence; ignored by the others.
    pub seed: Option<u64>,
    /// Labels replayed in order by the scripted policy.
    #[serde(default)]
    pub script: Vec<VerdictLabel>,
    /// Hash the file bytes (SHA-256) and attach the digest to each result.
    pub digest: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Drop the displayed result when a new file is selected.
    pub clear_result_on_select: bool,
}
