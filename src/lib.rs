// Name Cleaver - Core Library
// Parses, normalizes and compares individual, politician and organization
// names. Used by the CLI and by anything that links the crate directly.

pub mod assembler;
pub mod batch;
pub mod classifier;
pub mod cleaver;
pub mod comparator;
pub mod config;
pub mod error;
pub mod extraction;
pub mod names;
pub mod nicknames;
pub mod telemetry;

// Re-export commonly used types
pub use cleaver::{
    parse_individual_name, parse_name, parse_organization_name, parse_politician_name,
    IndividualNameCleaver, NameCleaver, OrganizationNameCleaver, PoliticianNameCleaver,
};
pub use comparator::{compare_organizations, compare_persons};
pub use config::{BatchConfig, CleaverOptions, NameKind, OutputFormat};
pub use error::{CleaverError, CleaverResult};
pub use names::{
    organization_processing_failed, person_processing_failed, Cleaved, HasPoliticalMetadata,
    OrganizationName, ParsedName, ParsedPolitician, PersonName, PoliticalMetadata, PoliticianName,
    RunningMatesNames,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
