use crate::domain::model::CommandSequence;
use crate::domain::ports::{DialectGenerator, GenerationContext};

const AUTOPROV_PROFILE: &str = "ICONNET.AUTOPROV";

/// Huawei dialect.
///
/// Every command after `ont add` is separated by an empty line. Replacement
/// first drops the existing service-port and ONT. PPPoE with NCE omits the
/// internet/wan/policy-route profile lines.
pub struct HuaweiDialect;

impl HuaweiDialect {
    fn profile_name(ctx: &GenerationContext<'_>) -> String {
        let vlan = ctx.request.vlan();
        if ctx.request.is_pppoe() {
            format!("ICONNET.PPPOE.{}", vlan)
        } else if ctx.catalog.is_bundled(vlan) {
            format!("AUTOPROV.{}-{}", ctx.bandwidth(), vlan)
        } else {
            format!("AUTOPROV.{}", ctx.bandwidth())
        }
    }
}

impl DialectGenerator for HuaweiDialect {
    fn generate(&self, ctx: &GenerationContext<'_>) -> CommandSequence {
        let request = ctx.request;
        let (frame, slot, port, onu) = (ctx.part(0), ctx.part(1), ctx.part(2), ctx.part(3));
        let sn = request.serial_number();
        let vlan = request.vlan();

        let mut config = vec!["config".to_string()];

        if request.is_replacement() {
            if let Some(serviceport) = request.serviceport() {
                config.push(format!("undo service-port {}", serviceport));
            }
            config.push(format!("interface gpon {}/{}", frame, slot));
            config.push(format!("ont delete {} {}", port, onu));
        } else {
            config.push(format!("interface gpon {}/{}", frame, slot));
        }

        let profile = Self::profile_name(ctx);
        let mut commands = vec![format!(
            "ont add {} {} sn-auth {} omci ont-lineprofile-name {} ont-srvprofile-name {} desc {}",
            port,
            onu,
            sn,
            profile,
            profile,
            request.description()
        )];

        if request.is_pppoe() {
            commands.push(format!(
                "ont ipconfig {} {} pppoe vlan {} priority 0 user-account username {} password {}",
                port, onu, vlan, sn, ctx.password
            ));
        } else {
            commands.push(format!(
                "ont ipconfig {} {} dhcp vlan {} priority 0",
                port, onu, vlan
            ));
        }

        if !(request.is_pppoe() && request.use_nce()) {
            commands.push(format!("ont internet-config {} {} ip-index 0", port, onu));
            commands.push(format!(
                "ont wan-config {} {} ip-index 0 profile-name {}",
                port, onu, AUTOPROV_PROFILE
            ));
            commands.push(format!(
                "ont policy-route-config {} {} profile-name {}",
                port, onu, AUTOPROV_PROFILE
            ));
        }

        commands.push(format!("ont port route {} {} eth 1 enable", port, onu));
        commands.push(format!("ont port route {} {} eth 2 enable", port, onu));
        commands.push("quit".to_string());
        commands.push(format!(
            "service-port vlan {} gpon {}/{}/{} ont {} gemport 1 multi-service user-vlan {} tag-transform translate",
            vlan, frame, slot, port, onu, vlan
        ));
        commands.push("quit".to_string());

        for (i, command) in commands.into_iter().enumerate() {
            if i > 0 {
                config.push(String::new());
            }
            config.push(command);
        }

        CommandSequence::from(config)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::dialects::test_support::{fields, lines};
    use crate::domain::model::{Brand, ConnectionType, RegistrationType};

    #[test]
    fn test_pppoe_nce_short_sequence() {
        let mut raw = fields(Brand::Huawei, "HWTC12345678", "0/1/3/7");
        raw.use_nce = true;
        assert_eq!(
            lines(&raw),
            vec![
                "config",
                "interface gpon 0/1",
                "ont add 3 7 sn-auth HWTC12345678 omci ont-lineprofile-name ICONNET.PPPOE.2801 ont-srvprofile-name ICONNET.PPPOE.2801 desc 4455-John.Doe",
                "",
                "ont ipconfig 3 7 pppoe vlan 2801 priority 0 user-account username HWTC12345678 password 20240309",
                "",
                "ont port route 3 7 eth 1 enable",
                "",
                "ont port route 3 7 eth 2 enable",
                "",
                "quit",
                "",
                "service-port vlan 2801 gpon 0/1/3 ont 7 gemport 1 multi-service user-vlan 2801 tag-transform translate",
                "",
                "quit",
            ]
        );
    }

    #[test]
    fn test_pppoe_without_nce_adds_profiles() {
        let raw = fields(Brand::Huawei, "HWTC12345678", "0/1/3/7");
        let out = lines(&raw);
        assert_eq!(out.len(), 21);
        assert_eq!(out[6], "ont internet-config 3 7 ip-index 0");
        assert_eq!(out[8], "ont wan-config 3 7 ip-index 0 profile-name ICONNET.AUTOPROV");
        assert_eq!(out[10], "ont policy-route-config 3 7 profile-name ICONNET.AUTOPROV");
    }

    #[test]
    fn test_ipoe_bundled_vlan_profile() {
        let mut raw = fields(Brand::Huawei, "HWTC12345678", "0/1/3/7");
        raw.connection_type = ConnectionType::Ipoe;
        raw.vlan = "2828".to_string();
        let out = lines(&raw);
        assert_eq!(
            out[2],
            "ont add 3 7 sn-auth HWTC12345678 omci ont-lineprofile-name AUTOPROV.20-2828 ont-srvprofile-name AUTOPROV.20-2828 desc 4455-John.Doe"
        );
        assert_eq!(out[4], "ont ipconfig 3 7 dhcp vlan 2828 priority 0");
    }

    #[test]
    fn test_ipoe_plain_vlan_profile_ignores_nce() {
        let mut raw = fields(Brand::Huawei, "HWTC12345678", "0/1/3/7");
        raw.connection_type = ConnectionType::Ipoe;
        raw.vlan = "2890".to_string();
        raw.use_nce = true;
        let out = lines(&raw);
        assert!(out[2].contains("ont-lineprofile-name AUTOPROV.100 ont-srvprofile-name AUTOPROV.100 "));
        assert!(out.contains(&"ont internet-config 3 7 ip-index 0".to_string()));
    }

    #[test]
    fn test_replace_removes_service_port_and_ont() {
        let mut raw = fields(Brand::Huawei, "HWTC12345678", "0/1/3/7");
        raw.registration_type = RegistrationType::Replace;
        raw.serviceport = Some("1024".to_string());
        let out = lines(&raw);
        assert_eq!(
            &out[..4],
            &["config", "undo service-port 1024", "interface gpon 0/1", "ont delete 3 7"]
        );
    }
}
