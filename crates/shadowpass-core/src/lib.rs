//! Core logic for ShadowPass.
//!
//! Password generation, strength scoring, the save file format and the
//! session state driven by the GUI and TUI frontends. No UI dependencies.

pub mod activity;
pub mod alphabet;
pub mod error;
pub mod generator;
pub mod record;
pub mod session;
pub mod strength;

pub use activity::{Activity, ActivityEntry, ActivityLog};
pub use error::{Error, Result};
pub use record::SaveRecord;
pub use session::{SaveRequest, Session, SessionSettings, Visibility};
pub use strength::{Strength, Tier};
