use crate::domain::VerdictLabel;
use crate::options::EngineOptions;
use crate::policy::fixed::FixedPolicy;
use crate::policy::random::RandomPolicy;
use crate::policy::scripted::ScriptedPolicy;
use crate::policy::{PolicyKind, VerdictPolicy};

pub fn build_policy(opts: &EngineOptions) -> Box<dyn VerdictPolicy> {
    match opts.policy {
        PolicyKind::Random => match opts.seed {
            Some(s) => Box::new(RandomPolicy::seeded(s)),
            None => Box::new(RandomPolicy::new()),
        },
        PolicyKind::Verified => Box::new(FixedPolicy(VerdictLabel::Verified)),
        PolicyKind::Suspicious => Box::new(FixedPolicy(VerdictLabel::Suspicious)),
        PolicyKind::Scripted => Box::new(ScriptedPolicy::new(opts.script.clone())),
    }
}
