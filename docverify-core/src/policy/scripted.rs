use super::VerdictPolicy;
use crate::domain::{FileHandle, VerdictLabel};

/// Replays a label sequence, wrapping around at the end.
pub struct ScriptedPolicy {
    script: Vec<VerdictLabel>,
    pos: usize,
}

impl ScriptedPolicy {
    /// An empty script answers `Suspicious`.
    pub fn new(script: Vec<VerdictLabel>) -> Self {
        Self { script, pos: 0 }
    }
}

impl VerdictPolicy for ScriptedPolicy {
    fn kind(&self) -> &'static str {
        "scripted"
    }

    fn decide(&mut self, _file: &FileHandle) -> VerdictLabel {
        if self.script.is_empty() {
            return VerdictLabel::Suspicious;
        }
        let label = self.script[self.pos % self.script.len()];
        self.pos += 1;
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn dummy() -> FileHandle {
        FileHandle {
            path: PathBuf::from("x"),
            name: "x".into(),
            size: 1,
        }
    }

    #[test]
    fn scripted_wraps() {
        let f = dummy();
        let mut p = ScriptedPolicy::new(vec![VerdictLabel::Verified, VerdictLabel::Suspicious]);
        let got: Vec<_> = (0..3).map(|_| p.decide(&f)).collect();
        assert_eq!(
            got,
            vec![
                VerdictLabel::Verified,
                VerdictLabel::Suspicious,
                VerdictLabel::Verified
            ]
        );
    }

    #[test]
    fn empty_script_is_suspicious() {
        let mut p = ScriptedPolicy::new(Vec::new());
        assert_eq!(p.decide(&dummy()), VerdictLabel::Suspicious);
    }
}
