use crate::core::{address, dialects, validator};
use crate::domain::model::{CommandSequence, GeneratedConfig, ProvisioningRequest, RawFields};
use crate::domain::ports::GenerationContext;
use crate::domain::services::ServiceCatalog;
use crate::utils::error::ValidationError;
use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// 設定產生引擎：驗證 → 解析位址 → 依廠牌產生 → 組合文字。
/// 不持有可變狀態，可在多執行緒間共用。
#[derive(Debug, Clone, Default)]
pub struct ConfigEngine {
    catalog: Arc<ServiceCatalog>,
}

impl ConfigEngine {
    pub fn new(catalog: ServiceCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn validate(&self, raw: &RawFields) -> Result<ProvisioningRequest, ValidationError> {
        validator::validate(raw, &self.catalog).inspect_err(|e| {
            tracing::debug!("Rejected {} request: {}", raw.brand, e);
        })
    }

    /// 使用今天日期作為預設 PPPoE 密碼
    pub fn generate(&self, raw: &RawFields) -> Result<String, ValidationError> {
        self.generate_on(raw, Local::now().date_naive())
    }

    pub fn generate_on(&self, raw: &RawFields, today: NaiveDate) -> Result<String, ValidationError> {
        Ok(self.render(raw, today)?.text)
    }

    pub fn render(
        &self,
        raw: &RawFields,
        today: NaiveDate,
    ) -> Result<GeneratedConfig, ValidationError> {
        let request = self.validate(raw)?;
        let sequence = self.sequence_for(&request, today);
        let text = sequence.assemble();

        Ok(GeneratedConfig {
            brand: request.brand(),
            registration_type: request.registration_type(),
            connection_type: request.connection_type(),
            serial_number: request.serial_number().to_string(),
            lines: sequence.into_lines(),
            text,
        })
    }

    /// Runs one generation pass over an already validated request.
    pub fn sequence_for(&self, request: &ProvisioningRequest, today: NaiveDate) -> CommandSequence {
        let address = address::parse(request.fsp_raw(), request.brand());
        if request.is_replacement() && !request.brand().supports_replace() {
            tracing::warn!(
                "{} has no ONU delete command; replacement output equals a new registration",
                request.brand().display_name()
            );
        }
        let password = request.resolve_password(today).unwrap_or_default();

        let ctx = GenerationContext {
            request,
            address: &address,
            catalog: &self.catalog,
            password: &password,
        };
        let sequence = dialects::generate(&ctx);

        tracing::debug!(
            "Generated {} lines for {} ({}, {}) at {}",
            sequence.len(),
            request.brand().display_name(),
            request.registration_type(),
            request.connection_type(),
            address
        );
        sequence
    }
}
