pub mod history;
pub mod launcher;
pub mod options;

pub use history::{GenerationReport, RunHistory};
pub use launcher::{validate_cities, EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
