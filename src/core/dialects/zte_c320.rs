use crate::domain::model::CommandSequence;
use crate::domain::ports::{DialectGenerator, GenerationContext};

/// ZTE C320：介面名稱用 `gpon-olt_`，service-port 直接綁在 ONU 介面上
pub struct ZteC320Dialect;

impl DialectGenerator for ZteC320Dialect {
    fn generate(&self, ctx: &GenerationContext<'_>) -> CommandSequence {
        let request = ctx.request;
        let (frame, slot, port, onu) = (ctx.part(0), ctx.part(1), ctx.part(2), ctx.part(3));
        let sn = request.serial_number();
        let vlan = request.vlan();
        let onu_interface = format!("gpon-onu_{}/{}/{}:{}", frame, slot, port, onu);

        let mut config = vec![
            "config t".to_string(),
            format!("interface gpon-olt_{}/{}/{}", frame, slot, port),
        ];

        if request.is_replacement() {
            config.push(format!("no onu {}", onu));
        }

        config.push(format!("onu {} type ZTEG-F609 sn {}", onu, sn));
        config.push("exit".to_string());

        config.push(format!("interface {}", onu_interface));
        config.push(format!("description {}", request.description()));
        config.push("sn-bind enable sn".to_string());
        config.push(format!("tcont 1 name HSI profile {}", ctx.zte_rate_profile()));
        config.push("gemport 1 name HSI tcont 1".to_string());
        config.push(format!(
            "service-port 1 vport 1 user-vlan {} vlan {}",
            vlan, vlan
        ));
        config.push("exit".to_string());

        config.push(format!("pon-onu-mng {}", onu_interface));
        config.push(format!("service HSI gemport 1 vlan {}", vlan));

        if request.serial_has_prefix("zte") {
            if request.is_pppoe() {
                config.push(format!(
                    "wan-ip 1 mode pppoe username {} password {} vlan-profile vlan{} host 1",
                    sn, ctx.password, vlan
                ));
            } else {
                for profile in ["vlan", "wan"] {
                    config.push(format!(
                        "wan-ip 1 mode dhcp vlan-profile {}{} host 1",
                        profile, vlan
                    ));
                }
            }
        }

        config.extend([
            format!("vlan port eth_0/1 mode tag vlan {}", vlan),
            "dhcp-ip ethuni eth_0/1 from-onu".to_string(),
            "end".to_string(),
        ]);

        CommandSequence::from(config)
    }
}
