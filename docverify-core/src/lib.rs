#![forbid(unsafe_code)]

pub mod counters;
pub mod digest;
pub mod domain;
pub mod engine;
pub mod error;
pub mod options;
pub mod policy;
pub mod policy_factory;
pub mod selection;
pub mod session;
pub mod view;

// Re-exports: stable API surface
pub use counters::{CounterStore, Counters, MINUTES_SAVED_PER_DOC};
pub use domain::{FileHandle, Verdict, VerdictLabel, VerificationResult};
pub use engine::VerdictEngine;
pub use options::{EngineOptions, SessionOptions};
pub use policy::PolicyKind;
pub use session::{AppState, Event, Phase, Transition, update};
