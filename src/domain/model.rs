use crate::utils::error::UnknownVariant;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum RegistrationType {
    New,
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    Pppoe,
    Ipoe,
}

/// OLT 廠牌，每個廠牌對應一種 CLI 方言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Brand {
    Raisecom,
    #[cfg_attr(feature = "cli", value(name = "zte_c610", alias = "zte-c610"))]
    ZteC610,
    #[cfg_attr(feature = "cli", value(name = "zte_c320", alias = "zte-c320"))]
    ZteC320,
    Bdcom,
    Huawei,
}

impl Brand {
    pub const ALL: [Brand; 5] = [
        Brand::Raisecom,
        Brand::ZteC610,
        Brand::ZteC320,
        Brand::Bdcom,
        Brand::Huawei,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Brand::Raisecom => "raisecom",
            Brand::ZteC610 => "zte_c610",
            Brand::ZteC320 => "zte_c320",
            Brand::Bdcom => "bdcom",
            Brand::Huawei => "huawei",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Brand::Raisecom => "Raisecom",
            Brand::ZteC610 => "ZTE C610",
            Brand::ZteC320 => "ZTE C320",
            Brand::Bdcom => "BDCOM",
            Brand::Huawei => "Huawei",
        }
    }

    /// FSP 欄位解析後應有的數字個數
    pub fn address_components(&self) -> usize {
        match self {
            Brand::Raisecom => 3,
            Brand::ZteC610 | Brand::ZteC320 | Brand::Huawei => 4,
            Brand::Bdcom => 2,
        }
    }

    pub fn fsp_hint(&self) -> &'static str {
        match self {
            Brand::Raisecom => "S/P/Onu id",
            Brand::ZteC610 | Brand::ZteC320 | Brand::Huawei => "F/S/P/Onu id",
            Brand::Bdcom => "P/Onu id",
        }
    }

    /// BDCOM 沒有刪除 ONU 的指令
    pub fn supports_replace(&self) -> bool {
        !matches!(self, Brand::Bdcom)
    }

    /// IPoE 時需要從服務目錄取頻寬標籤的廠牌
    pub fn needs_rate_profile(&self) -> bool {
        matches!(self, Brand::ZteC610 | Brand::ZteC320 | Brand::Huawei)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for RegistrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegistrationType::New => "new",
            RegistrationType::Replace => "replace",
        })
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnectionType::Pppoe => "pppoe",
            ConnectionType::Ipoe => "ipoe",
        })
    }
}

fn normalize_key(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

impl FromStr for Brand {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "raisecom" => Ok(Brand::Raisecom),
            "zte_c610" | "c610" => Ok(Brand::ZteC610),
            "zte_c320" | "c320" => Ok(Brand::ZteC320),
            "bdcom" => Ok(Brand::Bdcom),
            "huawei" => Ok(Brand::Huawei),
            _ => Err(UnknownVariant {
                kind: "brand",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for RegistrationType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "new" => Ok(RegistrationType::New),
            "replace" | "re_register" => Ok(RegistrationType::Replace),
            _ => Err(UnknownVariant {
                kind: "registration type",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for ConnectionType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "pppoe" => Ok(ConnectionType::Pppoe),
            "ipoe" => Ok(ConnectionType::Ipoe),
            _ => Err(UnknownVariant {
                kind: "connection type",
                value: s.to_string(),
            }),
        }
    }
}

fn default_true() -> bool {
    true
}

/// 使用者輸入的原始欄位，尚未驗證
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFields {
    pub registration_type: RegistrationType,
    pub connection_type: ConnectionType,
    pub brand: Brand,
    pub serial_number: String,
    pub fsp: String,
    pub vlan: String,
    pub sid: String,
    pub customer_name: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_true")]
    pub use_today_password: bool,
    #[serde(default)]
    pub use_nce: bool,
    #[serde(default)]
    pub serviceport: Option<String>,
}

/// 通過驗證的開通請求。只能由 validator 建立，建立後不可變。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningRequest {
    pub(crate) registration_type: RegistrationType,
    pub(crate) connection_type: ConnectionType,
    pub(crate) brand: Brand,
    pub(crate) serial_number: String,
    pub(crate) fsp_raw: String,
    pub(crate) vlan: String,
    pub(crate) sid: String,
    pub(crate) customer_name: String,
    pub(crate) password: Option<String>,
    pub(crate) use_today_password: bool,
    pub(crate) use_nce: bool,
    pub(crate) serviceport: Option<String>,
}

impl ProvisioningRequest {
    pub fn registration_type(&self) -> RegistrationType {
        self.registration_type
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn fsp_raw(&self) -> &str {
        &self.fsp_raw
    }

    pub fn vlan(&self) -> &str {
        &self.vlan
    }

    /// 已把空白換成 `.`
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn use_nce(&self) -> bool {
        self.use_nce
    }

    pub fn serviceport(&self) -> Option<&str> {
        self.serviceport.as_deref()
    }

    pub fn is_replacement(&self) -> bool {
        self.registration_type == RegistrationType::Replace
    }

    pub fn is_pppoe(&self) -> bool {
        self.connection_type == ConnectionType::Pppoe
    }

    /// `{sid}-{name}`, used by every dialect's description line
    pub fn description(&self) -> String {
        format!("{}-{}", self.sid, self.customer_name)
    }

    /// 判斷序號前綴，不分大小寫
    pub fn serial_has_prefix(&self, prefix: &str) -> bool {
        self.serial_number
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }

    /// PPPoE 使用的密碼；每次產生只解析一次
    pub fn resolve_password(&self, today: NaiveDate) -> Option<String> {
        if !self.is_pppoe() {
            return None;
        }
        match (&self.password, self.use_today_password) {
            (Some(password), false) => Some(password.clone()),
            _ => Some(today.format("%Y%m%d").to_string()),
        }
    }
}

/// FSP 解析結果，依廠牌為 2 到 4 個數字
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    components: Vec<u32>,
}

impl ParsedAddress {
    pub(crate) fn new(components: Vec<u32>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[u32] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.components.get(index).copied()
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSequence {
    lines: Vec<String>,
}

impl CommandSequence {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl From<Vec<String>> for CommandSequence {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

/// 單筆產生結果，`--format json` 直接序列化這個結構
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedConfig {
    pub brand: Brand,
    pub registration_type: RegistrationType,
    pub connection_type: ConnectionType,
    pub serial_number: String,
    pub lines: Vec<String>,
    pub text: String,
}

/// CSV 批次檔的一列。布林欄位可留空，留空時套用預設值。
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRow {
    pub registration_type: RegistrationType,
    pub connection_type: ConnectionType,
    pub brand: Brand,
    pub serial_number: String,
    pub fsp: String,
    pub vlan: String,
    pub sid: String,
    pub customer_name: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub use_today_password: Option<bool>,
    #[serde(default)]
    pub use_nce: Option<bool>,
    #[serde(default)]
    pub serviceport: Option<String>,
}

impl From<BatchRow> for RawFields {
    fn from(row: BatchRow) -> Self {
        let password = row.password.filter(|p| !p.trim().is_empty());
        let use_today_password = row.use_today_password.unwrap_or(password.is_none());
        RawFields {
            registration_type: row.registration_type,
            connection_type: row.connection_type,
            brand: row.brand,
            serial_number: row.serial_number,
            fsp: row.fsp,
            vlan: row.vlan,
            sid: row.sid,
            customer_name: row.customer_name,
            password,
            use_today_password,
            use_nce: row.use_nce.unwrap_or(false),
            serviceport: row.serviceport.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// 批次中的一筆輸入；反序列化失敗的列保留錯誤訊息
#[derive(Debug, Clone)]
pub struct BatchRecord {
    pub row: usize,
    pub fields: Result<RawFields, String>,
}

#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub row: usize,
    pub file_name: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowFailure {
    pub row: usize,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub generated: Vec<GeneratedFile>,
    pub failures: Vec<RowFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub output_path: String,
    pub generated: usize,
    pub failed: usize,
    pub failures: Vec<RowFailure>,
}
