#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Staggered character reveal animations.
//!
//! A [RevealPlan] assigns each character of a text a delay that
//! grows by a fixed [Stagger]; the plan is pure data so it can be
//! inspected without timers. [schedule] is the runtime harness
//! that spawns one deferred reveal per character.

mod error;
mod plan;
mod schedule;
mod stagger;

pub use error::Error;
pub use plan::{plan, RevealPlan, RevealStep};
pub use schedule::{schedule, RevealTarget, Scheduled};
pub use stagger::{
    resolve_stagger, Stagger, StaggerProfile, LEGACY_FALLBACK,
    STANDARD_FALLBACK,
};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
