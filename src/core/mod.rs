pub mod address;
pub mod assembler;
pub mod batch;
pub mod dialects;
pub mod engine;
pub mod validator;

pub use crate::domain::model::{CommandSequence, ParsedAddress, ProvisioningRequest, RawFields};
pub use crate::domain::ports::{DialectGenerator, GenerationContext, Pipeline, Storage};
pub use crate::domain::services::ServiceCatalog;
pub use crate::utils::error::Result;
