use crate::digest::sha256_file;
use crate::domain::{FileHandle, Verdict, VerificationResult};
use crate::error::Result;
use crate::options::EngineOptions;
use crate::policy::VerdictPolicy;
use crate::policy_factory::build_policy;

pub struct VerdictEngine {
    policy: Box<dyn VerdictPolicy>,
    digest: bool,
}

impl VerdictEngine {
    pub fn new(opts: &EngineOptions) -> Self {
        Self::with_policy(build_policy(opts)).digest(opts.digest)
    }

    pub fn with_policy(policy: Box<dyn VerdictPolicy>) -> Self {
        Self {
            policy,
            digest: false,
        }
    }

    pub fn digest(mut self, on: bool) -> Self {
        self.digest = on;
        self
    }

    pub fn policy_kind(&self) -> &'static str {
        self.policy.kind()
    }

    /// Label and reason only; never touches the file.
    pub fn decide(&mut self, file: &FileHandle) -> Verdict {
        let verdict = Verdict::new(self.policy.decide(file));
        tracing::debug!(
            file = %file.name,
            policy = self.policy.kind(),
            label = %verdict.label(),
            "verdict"
        );
        verdict
    }

    /// Full result for the card. The digest is read before the policy runs so
    /// a failed read leaves the policy state untouched.
    pub fn verify(&mut self, file: &FileHandle) -> Result<VerificationResult> {
        let digest = if self.digest {
            Some(sha256_file(&file.path)?)
        } else {
            None
        };
        Ok(VerificationResult {
            verdict: self.decide(file),
            file_name: file.name.clone(),
            digest,
        })
    }
}
