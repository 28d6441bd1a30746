use thiserror::Error;

/// 驗證階段的錯誤，依檢查順序排列
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid serial number '{value}': {reason}")]
    InvalidSerialNumber { value: String, reason: String },

    #[error("Invalid FSP format '{value}': expected {expected}")]
    InvalidFspFormat { value: String, expected: String },

    #[error("Invalid VLAN '{value}': {reason}")]
    InvalidVlan { value: String, reason: String },

    #[error("Invalid SID '{value}': must contain digits only")]
    InvalidSid { value: String },

    #[error("Customer name is required")]
    MissingCustomerName,

    #[error("PPPoE password is required")]
    MissingPassword,

    #[error("Invalid serviceport '{value}': must contain digits only")]
    InvalidServiceport { value: String },
}

impl ValidationError {
    /// 對應的輸入欄位名稱
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidSerialNumber { .. } => "serial_number",
            ValidationError::InvalidFspFormat { .. } => "fsp",
            ValidationError::InvalidVlan { .. } => "vlan",
            ValidationError::InvalidSid { .. } => "sid",
            ValidationError::MissingCustomerName => "customer_name",
            ValidationError::MissingPassword => "password",
            ValidationError::InvalidServiceport { .. } => "serviceport",
        }
    }
}

/// 廠牌、註冊類型、連線類型的字串無法辨識
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Error, Debug)]
pub enum OltError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Storage,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OltError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OltError::Validation(_) => ErrorCategory::Input,
            OltError::ConfigError { .. } | OltError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            OltError::ZipError(_) | OltError::IoError(_) => ErrorCategory::Storage,
            OltError::CsvError(_) | OltError::SerializationError(_) => {
                ErrorCategory::Serialization
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OltError::Validation(_) => ErrorSeverity::High,
            OltError::CsvError(_) => ErrorSeverity::Medium,
            OltError::ConfigError { .. } | OltError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            OltError::ZipError(_) | OltError::IoError(_) | OltError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OltError::Validation(e) => e.to_string(),
            OltError::ConfigError { field, message } => {
                format!("Settings problem in '{}': {}", field, message)
            }
            OltError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has an invalid value '{}': {}", field, value, reason)
            }
            OltError::CsvError(e) => format!("Could not read the batch input: {}", e),
            OltError::IoError(e) => format!("File system error: {}", e),
            OltError::ZipError(e) => format!("Could not build the ZIP bundle: {}", e),
            OltError::SerializationError(e) => format!("Could not encode output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            OltError::Validation(e) => match e {
                ValidationError::InvalidSerialNumber { .. } => {
                    "Serial numbers are 12 or 16 characters long".to_string()
                }
                ValidationError::InvalidFspFormat { expected, .. } => {
                    format!("Enter the address as {}", expected)
                }
                ValidationError::InvalidVlan { .. } => {
                    "Use a VLAN from 2900-2999 or one listed by the `catalog` command".to_string()
                }
                ValidationError::InvalidSid { .. } => "SID must be numeric".to_string(),
                ValidationError::MissingCustomerName => "Provide the customer name".to_string(),
                ValidationError::MissingPassword => {
                    "Pass --password or drop it to use today's date".to_string()
                }
                ValidationError::InvalidServiceport { .. } => {
                    "Huawei replacement needs the numeric service-port index".to_string()
                }
            },
            OltError::ConfigError { .. } | OltError::InvalidConfigValueError { .. } => {
                "Check the TOML settings file".to_string()
            }
            OltError::CsvError(_) => "Check the CSV header and column count".to_string(),
            OltError::IoError(_) | OltError::ZipError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            OltError::SerializationError(_) => "Retry with --format text".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OltError>;
