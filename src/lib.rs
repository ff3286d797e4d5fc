// Re-export all public modules
pub mod shared;
pub mod as_paths;
pub mod prefix_universe;
pub mod churn_engine;
pub mod command_renderer;
pub mod churn_config;
pub mod scheduler;

// Re-export commonly used types at the crate root
pub use as_paths::{ASPath, ASPathGenerator, ASPathPool, ASN_RANGES};
pub use churn_config::ChurnConfig;
pub use churn_engine::{AnnounceBounds, AnnouncedSet, ChurnDecision, ChurnEngine, CycleOutcome};
pub use command_renderer::CommandRenderer;
pub use prefix_universe::{Prefix, PrefixUniverse};
pub use scheduler::{CycleReport, CycleScheduler, ScheduleSettings, Suspend, ThreadSleep};
pub use shared::{ChurnError, ConfigError, PeerIdentity, Phase, ASN};
