use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

/// 內建的服務 VLAN 與頻寬標籤 (Mbps)
const BUILTIN_SERVICES: [(&str, &str); 15] = [
    ("2801", "10"),
    ("2802", "10"),
    ("2828", "20"),
    ("2887", "5"),
    ("2888", "20"),
    ("2889", "50"),
    ("2890", "100"),
    ("1601", "10"),
    ("1602", "20"),
    ("1603", "30"),
    ("1604", "50"),
    ("1605", "100"),
    ("2820", "10"),
    ("2830", "20"),
    ("2819", "50"),
];

/// Huawei 上以 `AUTOPROV.<bandwidth>-<vlan>` 命名 profile 的 VLAN
const BUILTIN_BUNDLED_VLANS: [&str; 4] = ["2828", "2820", "2830", "2819"];

pub const DEFAULT_DYNAMIC_RANGE: RangeInclusive<u32> = 2900..=2999;

/// VLAN → bandwidth label lookup, plus the rules that decide which VLANs are
/// accepted at all. Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCatalog {
    services: BTreeMap<String, String>,
    bundled: BTreeSet<String>,
    dynamic_range: RangeInclusive<u32>,
}

impl ServiceCatalog {
    pub fn new(
        services: BTreeMap<String, String>,
        bundled: BTreeSet<String>,
        dynamic_range: RangeInclusive<u32>,
    ) -> Self {
        Self {
            services,
            bundled,
            dynamic_range,
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_SERVICES
                .iter()
                .map(|(vlan, label)| (vlan.to_string(), label.to_string()))
                .collect(),
            BUILTIN_BUNDLED_VLANS.iter().map(|v| v.to_string()).collect(),
            DEFAULT_DYNAMIC_RANGE,
        )
    }

    pub fn bandwidth(&self, vlan: &str) -> Option<&str> {
        self.services.get(vlan).map(String::as_str)
    }

    pub fn is_bundled(&self, vlan: &str) -> bool {
        self.bundled.contains(vlan)
    }

    /// 只接受十進位標準寫法，例如 "02950" 不算在範圍內
    pub fn in_dynamic_range(&self, vlan: &str) -> bool {
        match vlan.parse::<u32>() {
            Ok(n) => self.dynamic_range.contains(&n) && n.to_string() == vlan,
            Err(_) => false,
        }
    }

    /// VLAN universe: dynamic range ∪ catalog keys
    pub fn contains_vlan(&self, vlan: &str) -> bool {
        self.services.contains_key(vlan) || self.in_dynamic_range(vlan)
    }

    pub fn dynamic_range(&self) -> &RangeInclusive<u32> {
        &self.dynamic_range
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.services
            .iter()
            .map(|(vlan, label)| (vlan.as_str(), label.as_str()))
    }

    pub fn bundled_vlans(&self) -> impl Iterator<Item = &str> {
        self.bundled.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
