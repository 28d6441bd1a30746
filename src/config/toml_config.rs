use crate::domain::services::{ServiceCatalog, DEFAULT_DYNAMIC_RANGE};
use crate::utils::error::{OltError, Result};
use crate::utils::validation::{
    validate_digits, validate_non_empty_string, validate_path, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "./olt-output";

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: Option<CatalogConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 有設定時取代內建的服務 VLAN 表
    pub services: Option<BTreeMap<String, String>>,
    pub bundled_vlans: Option<Vec<String>>,
    pub dynamic_range: Option<DynamicRangeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicRangeConfig {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(OltError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| OltError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OLT_OUTPUT_DIR})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_path("output.directory", self.output_directory())?;

        let Some(catalog) = &self.catalog else {
            return Ok(());
        };

        if let Some(services) = &catalog.services {
            for (vlan, label) in services {
                validate_digits("catalog.services", vlan)?;
                validate_non_empty_string(&format!("catalog.services.{}", vlan), label)?;
                validate_digits(&format!("catalog.services.{}", vlan), label)?;
            }
        }

        if let Some(range) = &catalog.dynamic_range {
            validate_range("catalog.dynamic_range.start", range.start, 1, 4094)?;
            validate_range("catalog.dynamic_range.end", range.end, range.start, 4094)?;
        }

        if let Some(bundled) = &catalog.bundled_vlans {
            let effective = self.service_catalog();
            for vlan in bundled {
                if effective.bandwidth(vlan).is_none() {
                    return Err(OltError::InvalidConfigValueError {
                        field: "catalog.bundled_vlans".to_string(),
                        value: vlan.clone(),
                        reason: "Bundled VLAN must have a bandwidth entry in catalog.services"
                            .to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// 取得輸出目錄
    pub fn output_directory(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.directory.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_DIRECTORY)
    }

    /// 依設定組出服務目錄；沒有設定的部分使用內建值
    pub fn service_catalog(&self) -> ServiceCatalog {
        let builtin = ServiceCatalog::builtin();
        let Some(catalog) = &self.catalog else {
            return builtin;
        };

        let services = match &catalog.services {
            Some(services) => services.clone(),
            None => builtin
                .entries()
                .map(|(vlan, label)| (vlan.to_string(), label.to_string()))
                .collect(),
        };
        let bundled: BTreeSet<String> = match &catalog.bundled_vlans {
            Some(bundled) => bundled.iter().cloned().collect(),
            None => builtin.bundled_vlans().map(str::to_string).collect(),
        };
        let dynamic_range = catalog
            .dynamic_range
            .as_ref()
            .map(|r| r.start..=r.end)
            .unwrap_or(DEFAULT_DYNAMIC_RANGE);

        ServiceCatalog::new(services, bundled, dynamic_range)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
