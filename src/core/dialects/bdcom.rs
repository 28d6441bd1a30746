use crate::domain::model::CommandSequence;
use crate::domain::ports::{DialectGenerator, GenerationContext};

/// BDCOM：port/onu，沒有刪除指令，Replace 與 New 輸出相同
pub struct BdcomDialect;

impl DialectGenerator for BdcomDialect {
    fn generate(&self, ctx: &GenerationContext<'_>) -> CommandSequence {
        let request = ctx.request;
        let (port, onu) = (ctx.part(0), ctx.part(1));

        let mut config = vec![
            "config".to_string(),
            format!("interface gpoN 0/{}:{}", port, onu),
            format!("description {}", request.description()),
        ];

        // 5a54 = "ZT" 的十六進位，ZTE ONU 掛在 BDCOM 上
        if request.serial_has_prefix("5a54") {
            config.push("gpon onu flow-mapping-profile ZTE".to_string());
        }

        config.extend([
            "gpon onu wan 1 admin-status enable".to_string(),
            "gpon onu wan 1 nat enable".to_string(),
            "gpon onu wan 1 service-type internet".to_string(),
            "gpon onu wan 1 connection-type pppoe".to_string(),
        ]);

        if request.is_pppoe() {
            config.push(format!(
                "gpon onu wan 1 pppoe username {} password {}",
                request.serial_number(),
                ctx.password
            ));
        }

        config.extend([
            format!("gpon onu wan 1 tci vlan {}", request.vlan()),
            "gpon onu wan 1 bind lan1 lan2 ssid1".to_string(),
            "gpon onu wan 1 auto-get-dns-address enable".to_string(),
            "gpon onu wan 1 lan-dhcp enable".to_string(),
            "quit".to_string(),
            "write all".to_string(),
        ]);

        CommandSequence::from(config)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::dialects::test_support::{fields, lines};
    use crate::domain::model::{Brand, ConnectionType, RegistrationType};

    #[test]
    fn test_zte_onu_pppoe_with_manual_password() {
        let mut raw = fields(Brand::Bdcom, "5A5445474331", "3/64");
        raw.use_today_password = false;
        raw.password = Some("p4ss".to_string());
        assert_eq!(
            lines(&raw),
            vec![
                "config",
                "interface gpoN 0/3:64",
                "description 4455-John.Doe",
                "gpon onu flow-mapping-profile ZTE",
                "gpon onu wan 1 admin-status enable",
                "gpon onu wan 1 nat enable",
                "gpon onu wan 1 service-type internet",
                "gpon onu wan 1 connection-type pppoe",
                "gpon onu wan 1 pppoe username 5A5445474331 password p4ss",
                "gpon onu wan 1 tci vlan 2801",
                "gpon onu wan 1 bind lan1 lan2 ssid1",
                "gpon onu wan 1 auto-get-dns-address enable",
                "gpon onu wan 1 lan-dhcp enable",
                "quit",
                "write all",
            ]
        );
    }

    #[test]
    fn test_lowercase_zte_prefix_gets_flow_mapping() {
        let raw = fields(Brand::Bdcom, "5a5445474331", "3/64");
        let out = lines(&raw);
        assert_eq!(out[3], "gpon onu flow-mapping-profile ZTE");
        assert!(out.iter().any(|l| l.contains("pppoe username 5a5445474331 ")));
    }

    #[test]
    fn test_ipoe_without_flow_mapping() {
        let mut raw = fields(Brand::Bdcom, "HWTC12345678", "3/64");
        raw.connection_type = ConnectionType::Ipoe;
        raw.vlan = "2950".to_string();
        let out = lines(&raw);
        assert!(!out.iter().any(|l| l.contains("flow-mapping-profile")));
        assert!(!out.iter().any(|l| l.contains("pppoe username")));
        assert!(out.contains(&"gpon onu wan 1 connection-type pppoe".to_string()));
        assert_eq!(out.last().unwrap(), "write all");
    }

    #[test]
    fn test_replace_matches_new() {
        let raw = fields(Brand::Bdcom, "HWTC12345678", "3/64");
        let mut replace = raw.clone();
        replace.registration_type = RegistrationType::Replace;
        assert_eq!(lines(&raw), lines(&replace));
    }
}
