use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::VerdictPolicy;
use crate::domain::{FileHandle, VerdictLabel};

/// Coin flip per call, independent of the file.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl VerdictPolicy for RandomPolicy {
    fn kind(&self) -> &'static str {
        "random"
    }

    fn decide(&mut self, _file: &FileHandle) -> VerdictLabel {
        if self.rng.random_bool(0.5) {
            VerdictLabel::Verified
        } else {
            VerdictLabel::Suspicious
        }
    }
}
