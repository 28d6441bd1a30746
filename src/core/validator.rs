use crate::domain::model::{
    Brand, ConnectionType, ProvisioningRequest, RawFields, RegistrationType,
};
use crate::domain::services::ServiceCatalog;
use crate::utils::error::ValidationError;
use crate::utils::validation::is_all_digits;
use regex::Regex;
use std::sync::LazyLock;

static SLOT_PORT_ONU: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]/[0-9]+/[0-9]+$").expect("valid FSP pattern"));
static FRAME_SLOT_PORT_ONU: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]/[0-9]/[0-9]+/[0-9]+$").expect("valid FSP pattern"));
static PORT_ONU: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+/[0-9]+$").expect("valid FSP pattern"));

const SERIAL_NUMBER_LENGTHS: [usize; 2] = [12, 16];

fn fsp_grammar(brand: Brand) -> &'static Regex {
    match brand {
        Brand::Raisecom => &SLOT_PORT_ONU,
        Brand::ZteC610 | Brand::ZteC320 | Brand::Huawei => &FRAME_SLOT_PORT_ONU,
        Brand::Bdcom => &PORT_ONU,
    }
}

/// 檢查順序固定：序號 → FSP → VLAN → SID → 客戶名稱 → 密碼 → serviceport。
/// 回報第一個失敗的欄位，失敗時不會產生任何部分結果。
pub fn validate(
    raw: &RawFields,
    catalog: &ServiceCatalog,
) -> Result<ProvisioningRequest, ValidationError> {
    let serial_number = check_serial_number(&raw.serial_number)?;
    let fsp = check_fsp(raw.brand, &raw.fsp)?;
    let vlan = check_vlan(raw, catalog)?;

    let sid = raw.sid.trim();
    if !is_all_digits(sid) {
        return Err(ValidationError::InvalidSid {
            value: raw.sid.clone(),
        });
    }

    let customer_name = raw.customer_name.trim();
    if customer_name.is_empty() {
        return Err(ValidationError::MissingCustomerName);
    }

    let password = check_password(raw)?;
    let serviceport = check_serviceport(raw)?;

    Ok(ProvisioningRequest {
        registration_type: raw.registration_type,
        connection_type: raw.connection_type,
        brand: raw.brand,
        serial_number: serial_number.to_string(),
        fsp_raw: fsp.to_string(),
        vlan: vlan.to_string(),
        sid: sid.to_string(),
        customer_name: customer_name.replace(' ', "."),
        password,
        use_today_password: raw.use_today_password,
        use_nce: raw.use_nce,
        serviceport,
    })
}

fn check_serial_number(value: &str) -> Result<&str, ValidationError> {
    let serial_number = value.trim();
    let length = serial_number.chars().count();
    if !SERIAL_NUMBER_LENGTHS.contains(&length) {
        return Err(ValidationError::InvalidSerialNumber {
            value: value.to_string(),
            reason: format!("expected 12 or 16 characters, got {}", length),
        });
    }
    Ok(serial_number)
}

fn check_fsp(brand: Brand, value: &str) -> Result<&str, ValidationError> {
    let fsp = value.trim();
    let invalid = || ValidationError::InvalidFspFormat {
        value: value.to_string(),
        expected: brand.fsp_hint().to_string(),
    };

    if !fsp_grammar(brand).is_match(fsp) {
        return Err(invalid());
    }
    // 每段都要能放進 u32，解析階段才不會失敗
    if fsp.split('/').any(|part| part.parse::<u32>().is_err()) {
        return Err(invalid());
    }
    Ok(fsp)
}

fn check_vlan<'a>(
    raw: &'a RawFields,
    catalog: &ServiceCatalog,
) -> Result<&'a str, ValidationError> {
    let vlan = raw.vlan.trim();
    if !catalog.contains_vlan(vlan) {
        return Err(ValidationError::InvalidVlan {
            value: raw.vlan.clone(),
            reason: format!(
                "not a service VLAN and outside {}-{}",
                catalog.dynamic_range().start(),
                catalog.dynamic_range().end()
            ),
        });
    }

    if raw.connection_type == ConnectionType::Ipoe
        && raw.brand.needs_rate_profile()
        && catalog.bandwidth(vlan).is_none()
    {
        return Err(ValidationError::InvalidVlan {
            value: raw.vlan.clone(),
            reason: format!(
                "IPoE on {} needs a VLAN with a bandwidth profile",
                raw.brand.display_name()
            ),
        });
    }
    Ok(vlan)
}

fn check_password(raw: &RawFields) -> Result<Option<String>, ValidationError> {
    if raw.connection_type != ConnectionType::Pppoe || raw.use_today_password {
        return Ok(None);
    }
    match raw.password.as_deref().map(str::trim) {
        Some(password) if !password.is_empty() => Ok(Some(password.to_string())),
        _ => Err(ValidationError::MissingPassword),
    }
}

fn check_serviceport(raw: &RawFields) -> Result<Option<String>, ValidationError> {
    if raw.brand != Brand::Huawei || raw.registration_type != RegistrationType::Replace {
        return Ok(None);
    }
    let value = raw.serviceport.as_deref().unwrap_or_default();
    let serviceport = value.trim();
    if !is_all_digits(serviceport) {
        return Err(ValidationError::InvalidServiceport {
            value: value.to_string(),
        });
    }
    Ok(Some(serviceport.to_string()))
}
