use crate::domain::model::{
    BatchRecord, BatchResult, BatchSummary, CommandSequence, ParsedAddress, ProvisioningRequest,
};
use crate::domain::services::ServiceCatalog;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// 寫入位置的完整路徑，用於顯示
    fn location(&self, path: &str) -> String;
}

/// Everything a dialect needs for one generation pass. The password is
/// resolved once before generation; it is empty for IPoE and never emitted then.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    pub request: &'a ProvisioningRequest,
    pub address: &'a ParsedAddress,
    pub catalog: &'a ServiceCatalog,
    pub password: &'a str,
}

pub trait DialectGenerator {
    fn generate(&self, ctx: &GenerationContext<'_>) -> CommandSequence;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<BatchRecord>>;
    fn transform(&self, records: Vec<BatchRecord>) -> Result<BatchResult>;
    fn load(&self, result: BatchResult) -> Result<BatchSummary>;
}
