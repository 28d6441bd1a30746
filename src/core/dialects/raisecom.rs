use crate::domain::model::CommandSequence;
use crate::domain::ports::{DialectGenerator, GenerationContext};

/// Raisecom：slot/port/onu
pub struct RaisecomDialect;

impl DialectGenerator for RaisecomDialect {
    fn generate(&self, ctx: &GenerationContext<'_>) -> CommandSequence {
        let request = ctx.request;
        let (slot, port, onu) = (ctx.part(0), ctx.part(1), ctx.part(2));
        let sn = request.serial_number();
        let vlan = request.vlan();

        let mut config = vec![
            "config".to_string(),
            format!("interface gpon-olt {}/{}", slot, port),
        ];

        if request.is_replacement() {
            config.push(format!("no create gpon-onu {}", onu));
        }

        config.push(format!(
            "create gpon-onu {} sn {} line-profile-id 1 service-profile-id 1",
            onu, sn
        ));
        config.push("quit".to_string());
        config.push(format!("interface gpon-onu {}", ctx.address));
        config.push(format!("description {}", request.description()));
        config.push("quit".to_string());

        // 只有 Raisecom 自家 ONU 才設定 iphost
        if request.serial_has_prefix("rcm") {
            config.push(format!("gpon-onu {}", ctx.address));
            if request.is_pppoe() {
                config.push("iphost 1 mode pppoe".to_string());
                config.push(format!(
                    "iphost 1 pppoe username {} password {}",
                    sn, ctx.password
                ));
            } else {
                config.push("iphost 1 mode dhcp".to_string());
            }
            config.push(format!("iphost 1 vlan {}", vlan));
            config.push("iphost 1 service Internet".to_string());
            config.push(
                "iphost 1 service mode route nat enable cos 0 portlist 1,2 ssidlist 1".to_string(),
            );
            config.push("end".to_string());
        }

        CommandSequence::from(config)
    }
}
