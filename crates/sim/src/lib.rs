//! Headless simulations driven by the point quadtree.

pub mod blob;
pub mod collision;
pub mod config;
pub mod error;
pub mod survey;
pub mod world;

// Re-export commonly used types
pub use blob::{Blob, Motion};
pub use collision::find_colliders;
pub use config::{CollisionMode, Config};
pub use error::ConfigError;
pub use survey::{run_survey, SurveyReport};
pub use world::{rng_from_seed, RunSummary, StepReport, World};
