pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use app::pipelines::BatchPipeline;
pub use config::TomlConfig;
pub use crate::core::{batch::BatchEngine, engine::ConfigEngine};
pub use domain::model::{
    Brand, CommandSequence, ConnectionType, GeneratedConfig, ParsedAddress, ProvisioningRequest,
    RawFields, RegistrationType,
};
pub use domain::services::ServiceCatalog;
pub use utils::error::{OltError, Result, UnknownVariant, ValidationError};
