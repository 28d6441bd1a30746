use crate::domain::model::CommandSequence;
use crate::domain::ports::{DialectGenerator, GenerationContext};

/// ZTE C610：frame/slot/port/onu，介面名稱用底線 (`gpon_olt-`)
pub struct ZteC610Dialect;

impl DialectGenerator for ZteC610Dialect {
    fn generate(&self, ctx: &GenerationContext<'_>) -> CommandSequence {
        let request = ctx.request;
        let (frame, slot, port, onu) = (ctx.part(0), ctx.part(1), ctx.part(2), ctx.part(3));
        let sn = request.serial_number();
        let vlan = request.vlan();
        let onu_interface = format!("gpon_onu-{}/{}/{}:{}", frame, slot, port, onu);

        let mut config = vec![
            "config t".to_string(),
            format!("interface gpon_olt-{}/{}/{}", frame, slot, port),
        ];

        if request.is_replacement() {
            config.push(format!("no onu {}", onu));
        }

        config.push(format!("onu {} type ZTEG-F609 sn {}", onu, sn));
        config.push("exit".to_string());

        config.push(format!("interface {}", onu_interface));
        config.push(format!("description {}", request.description()));
        config.push(format!("tcont 1 name HSI profile {}", ctx.zte_rate_profile()));
        config.push("gemport 1 name HSI tcont 1".to_string());
        config.push("exit".to_string());
        config.push(format!("interface vport-{}/{}/{}.{}:1", frame, slot, port, onu));
        config.push(format!("service-port 1 user-vlan {} vlan {}", vlan, vlan));
        config.push("exit".to_string());

        config.push(format!("pon-onu-mng {}", onu_interface));
        config.push(format!("service HSI gemport 1 vlan {}", vlan));

        if request.serial_has_prefix("zte") {
            if request.is_pppoe() {
                for profile in ["vlan", "wan"] {
                    config.push(format!(
                        "wan-ip ipv4 mode pppoe username {} password {} vlan-profile {}{} host 1",
                        sn, ctx.password, profile, vlan
                    ));
                }
            } else {
                config.push(format!(
                    "wan-ip ipv4 mode dhcp vlan-profile vlan{} host 1",
                    vlan
                ));
            }
        }

        config.extend([
            format!("vlan port eth_0/1 mode tag vlan {}", vlan),
            format!("vlan port eth_0/2 mode tag vlan {}", vlan),
            "dhcp-ip ethuni eth_0/1 from-onu".to_string(),
            "dhcp-ip ethuni eth_0/2 from-onu".to_string(),
            "end".to_string(),
        ]);

        CommandSequence::from(config)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::dialects::test_support::{fields, lines};
    use crate::domain::model::{Brand, ConnectionType, RegistrationType};

    #[test]
    fn test_zte_pppoe_new() {
        let raw = fields(Brand::ZteC610, "ZTEGC1234567", "1/2/3/4");
        assert_eq!(
            lines(&raw),
            vec![
                "config t",
                "interface gpon_olt-1/2/3",
                "onu 4 type ZTEG-F609 sn ZTEGC1234567",
                "exit",
                "interface gpon_onu-1/2/3:4",
                "description 4455-John.Doe",
                "tcont 1 name HSI profile PPPOE",
                "gemport 1 name HSI tcont 1",
                "exit",
                "interface vport-1/2/3.4:1",
                "service-port 1 user-vlan 2801 vlan 2801",
                "exit",
                "pon-onu-mng gpon_onu-1/2/3:4",
                "service HSI gemport 1 vlan 2801",
                "wan-ip ipv4 mode pppoe username ZTEGC1234567 password 20240309 vlan-profile vlan2801 host 1",
                "wan-ip ipv4 mode pppoe username ZTEGC1234567 password 20240309 vlan-profile wan2801 host 1",
                "vlan port eth_0/1 mode tag vlan 2801",
                "vlan port eth_0/2 mode tag vlan 2801",
                "dhcp-ip ethuni eth_0/1 from-onu",
                "dhcp-ip ethuni eth_0/2 from-onu",
                "end",
            ]
        );
    }

    #[test]
    fn test_ipoe_uses_catalog_bandwidth() {
        let mut raw = fields(Brand::ZteC610, "zteGC1234567", "1/2/3/4");
        raw.connection_type = ConnectionType::Ipoe;
        raw.vlan = "2889".to_string();
        let out = lines(&raw);
        assert!(out.contains(&"tcont 1 name HSI profile 50Mbps".to_string()));
        assert!(out.contains(&"wan-ip ipv4 mode dhcp vlan-profile vlan2889 host 1".to_string()));
        assert_eq!(out.iter().filter(|l| l.starts_with("wan-ip")).count(), 1);
    }

    #[test]
    fn test_non_zte_onu_skips_wan_ip() {
        let mut raw = fields(Brand::ZteC610, "HWTC12345678", "1/2/3/4");
        raw.registration_type = RegistrationType::Replace;
        let out = lines(&raw);
        assert_eq!(out[2], "no onu 4");
        assert!(!out.iter().any(|l| l.starts_with("wan-ip")));
        assert_eq!(out.last().unwrap(), "end");
    }
}
