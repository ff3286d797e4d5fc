pub mod decision;
pub mod engine;
pub mod sampling;

pub use decision::ChurnDecision;
pub use engine::{withdrawal_count, AnnounceBounds, AnnouncedSet, ChurnEngine, CycleOutcome};
