//! Input trigger conditions
//!
//! The host translates raw device events into [`InputState`] values before
//! handing them to the manipulator set; the mapping from raw events to
//! triggers is the host's responsibility.

pub mod state;

pub use state::{InputState, TriggerPhase, TriggerSource};
