use serde::Serialize;

use crate::counters::{CounterStore, Counters};
use crate::domain::{FileHandle, VerificationResult};
use crate::engine::VerdictEngine;
use crate::error::VerifyError;
use crate::options::SessionOptions;
use crate::selection::SelectionState;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No file chosen yet.
    #[default]
    Idle,
    /// File chosen and not yet verified. An earlier file's result may still
    /// be on the card.
    Selected,
    /// The card shows the result for the current file.
    Resulted,
}

#[derive(Clone, Debug)]
pub enum Event {
    Select(FileHandle),
    Trigger,
}

/// Everything the dashboard shows. Owned by the front end and only changed
/// through [`update`].
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: SessionOptions,
    selection: SelectionState,
    result: Option<VerificationResult>,
    counters: CounterStore,
    phase: Phase,
}

impl AppState {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The card, which may belong to an earlier selection while `Selected`.
    pub fn result(&self) -> Option<&VerificationResult> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn counters(&self) -> Counters {
        self.counters.snapshot()
    }
}

pub struct Transition {
    pub state: AppState,
    /// Set when the event was refused; `state` is then the input unchanged.
    pub notice: Option<VerifyError>,
}

impl Transition {
    fn ok(state: AppState) -> Self {
        Self {
            state,
            notice: None,
        }
    }
}

pub fn update(mut state: AppState, event: Event, engine: &mut VerdictEngine) -> Transition {
    match event {
        Event::Select(file) => {
            state.selection.select(file);
            if state.options.clear_result_on_select {
                state.result = None;
            }
            state.phase = Phase::Selected;
            Transition::ok(state)
        }
        Event::Trigger => {
            let Some(file) = state.selection.current() else {
                tracing::warn!("verification triggered with no file selected");
                return Transition {
                    state,
                    notice: Some(VerifyError::NoSelection),
                };
            };
            match engine.verify(file) {
                Ok(res) => {
                    state.counters.record(&res.verdict);
                    state.result = Some(res);
                    state.phase = Phase::Resulted;
                    Transition::ok(state)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "verification failed");
                    Transition {
                        state,
                        notice: Some(e),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VerdictLabel;
    use crate::policy::scripted::ScriptedPolicy;
    use std::path::{Path, PathBuf};

    fn handle(name: &str) -> FileHandle {
        FileHandle {
            path: PathBuf::from(name),
            name: name.to_string(),
            size: 10,
        }
    }

    fn scripted(labels: &[VerdictLabel]) -> VerdictEngine {
        VerdictEngine::with_policy(Box::new(ScriptedPolicy::new(labels.to_vec())))
    }

    fn step(state: AppState, event: Event, eng: &mut VerdictEngine) -> AppState {
        let t = update(state, event, eng);
        assert!(t.notice.is_none());
        t.state
    }

    #[test]
    fn trigger_without_selection_warns_and_changes_nothing() {
        let mut eng = scripted(&[VerdictLabel::Verified]);
        let t = update(AppState::default(), Event::Trigger, &mut eng);
        assert!(matches!(t.notice, Some(VerifyError::NoSelection)));
        assert_eq!(t.state.counters(), Counters::default());
        assert!(t.state.result.is_none());
        assert_eq!(t.state.phase(), Phase::Idle);
    }

    #[test]
    fn select_then_verify_verified() {
        let mut eng = scripted(&[VerdictLabel::Verified]);
        let s = step(AppState::default(), Event::Select(handle("a.png")), &mut eng);
        assert_eq!(s.phase(), Phase::Selected);
        let s = step(s, Event::Trigger, &mut eng);
        assert_eq!(s.phase(), Phase::Resulted);
        assert_eq!(
            s.counters(),
            Counters {
                total: 1,
                verified: 1,
                suspicious: 0,
                time_saved: 5,
            }
        );
        let res = s.result.as_ref().unwrap();
        assert_eq!(res.verdict.label().to_string(), "Verified");
        assert_eq!(res.verdict.reason(), "Signature detected");
    }

    #[test]
    fn three_verifications() {
        let mut eng = scripted(&[
            VerdictLabel::Verified,
            VerdictLabel::Suspicious,
            VerdictLabel::Verified,
        ]);
        let mut s = step(AppState::default(), Event::Select(handle("a.png")), &mut eng);
        for _ in 0..3 {
            s = step(s, Event::Trigger, &mut eng);
        }
        assert_eq!(
            s.counters(),
            Counters {
                total: 3,
                verified: 2,
                suspicious: 1,
                time_saved: 15,
            }
        );
    }

    #[test]
    fn reselect_replaces_selection_and_keeps_counters() {
        let mut eng = scripted(&[VerdictLabel::Suspicious]);
        let s = step(AppState::default(), Event::Select(handle("a.png")), &mut eng);
        let s = step(s, Event::Select(handle("b.png")), &mut eng);
        assert_eq!(s.selection.current().unwrap().path, Path::new("b.png"));
        assert_eq!(s.counters(), Counters::default());
        assert_eq!(s.phase(), Phase::Selected);
    }

    #[test]
    fn reselect_keeps_result_unless_configured() {
        let mut eng = scripted(&[VerdictLabel::Verified]);
        let s = step(AppState::default(), Event::Select(handle("a.png")), &mut eng);
        let s = step(s, Event::Trigger, &mut eng);
        let s = step(s, Event::Select(handle("b.png")), &mut eng);
        assert_eq!(s.phase(), Phase::Selected);
        assert_eq!(s.result.as_ref().unwrap().file_name, "a.png");
        let s = step(s, Event::Trigger, &mut eng);
        assert_eq!(s.phase(), Phase::Resulted);
        assert_eq!(s.result.as_ref().unwrap().file_name, "b.png");

        let opts = SessionOptions {
            clear_result_on_select: true,
        };
        let s = step(AppState::new(opts), Event::Select(handle("a.png")), &mut eng);
        let s = step(s, Event::Trigger, &mut eng);
        let s = step(s, Event::Select(handle("b.png")), &mut eng);
        assert_eq!(s.phase(), Phase::Selected);
        assert!(s.result.is_none());
        assert_eq!(s.counters().total, 1);
    }

    #[test]
    fn failed_digest_leaves_state_alone() {
        let mut eng = scripted(&[VerdictLabel::Verified]).digest(true);
        let s = step(
            AppState::default(),
            Event::Select(handle("/definitely/not/here.png")),
            &mut eng,
        );
        let t = update(s, Event::Trigger, &mut eng);
        assert!(matches!(t.notice, Some(VerifyError::Io(_))));
        assert_eq!(t.state.counters(), Counters::default());
        assert_eq!(t.state.phase(), Phase::Selected);
    }
}
