use olt_config::{
    Brand, ConfigEngine, ConnectionType, RawFields, RegistrationType, ValidationError,
};

fn valid_huawei_replace() -> RawFields {
    RawFields {
        registration_type: RegistrationType::Replace,
        connection_type: ConnectionType::Pppoe,
        brand: Brand::Huawei,
        serial_number: "HWTC12345678".to_string(),
        fsp: "0/1/3/7".to_string(),
        vlan: "2801".to_string(),
        sid: "4455".to_string(),
        customer_name: "John Doe".to_string(),
        password: Some("secret".to_string()),
        use_today_password: false,
        use_nce: false,
        serviceport: Some("88".to_string()),
    }
}

fn field_of(raw: &RawFields) -> &'static str {
    ConfigEngine::default().validate(raw).unwrap_err().field()
}

/// 逐一修正錯誤欄位，回報的錯誤必須依固定順序前進
#[test]
fn test_first_failing_field_is_reported() {
    let mut raw = valid_huawei_replace();
    raw.serial_number = "SHORT".to_string();
    raw.fsp = "0-1-3-7".to_string();
    raw.vlan = "100".to_string();
    raw.sid = "S-1".to_string();
    raw.customer_name = "   ".to_string();
    raw.password = None;
    raw.serviceport = Some("abc".to_string());

    let order = [
        "serial_number",
        "fsp",
        "vlan",
        "sid",
        "customer_name",
        "password",
        "serviceport",
    ];
    let fixes: [fn(&mut RawFields); 7] = [
        |r| r.serial_number = "HWTC12345678".to_string(),
        |r| r.fsp = "0/1/3/7".to_string(),
        |r| r.vlan = "2950".to_string(),
        |r| r.sid = "4455".to_string(),
        |r| r.customer_name = "Jane".to_string(),
        |r| r.password = Some("pw".to_string()),
        |r| r.serviceport = Some("12".to_string()),
    ];

    for (expected, fix) in order.iter().zip(fixes) {
        assert_eq!(field_of(&raw), *expected);
        fix(&mut raw);
    }
    assert!(ConfigEngine::default().validate(&raw).is_ok());
}

#[test]
fn test_vlan_membership() {
    let engine = ConfigEngine::default();
    let mut raw = valid_huawei_replace();

    for vlan in ["2900", "2950", "2999", "2801", "1605", "2819"] {
        raw.vlan = vlan.to_string();
        assert!(engine.validate(&raw).is_ok(), "{vlan} should be accepted");
    }
    for vlan in ["2899", "3000", "2803", "1600", "abc", "", "2900.0"] {
        raw.vlan = vlan.to_string();
        assert!(
            matches!(engine.validate(&raw), Err(ValidationError::InvalidVlan { .. })),
            "{vlan} should be rejected"
        );
    }
}

#[test]
fn test_ipoe_dynamic_vlan_rejected_for_rate_profile_brands() {
    let engine = ConfigEngine::default();
    for (brand, fsp, ok) in [
        (Brand::Huawei, "0/1/3/7", false),
        (Brand::ZteC610, "1/1/3/7", false),
        (Brand::ZteC320, "1/1/3/7", false),
        (Brand::Raisecom, "1/3/7", true),
        (Brand::Bdcom, "3/7", true),
    ] {
        let mut raw = valid_huawei_replace();
        raw.brand = brand;
        raw.fsp = fsp.to_string();
        raw.connection_type = ConnectionType::Ipoe;
        raw.vlan = "2950".to_string();
        assert_eq!(engine.validate(&raw).is_ok(), ok, "{brand}");
    }
}

#[test]
fn test_today_password_needs_no_password_field() {
    let engine = ConfigEngine::default();
    let mut raw = valid_huawei_replace();
    raw.password = None;
    raw.use_today_password = true;
    assert!(engine.validate(&raw).is_ok());
}

#[test]
fn test_error_messages_are_descriptive() {
    let mut raw = valid_huawei_replace();
    raw.fsp = "1/2/3".to_string();
    let err = ConfigEngine::default().validate(&raw).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid FSP format '1/2/3': expected F/S/P/Onu id"
    );
}
