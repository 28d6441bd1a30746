pub mod bdcom;
pub mod huawei;
pub mod raisecom;
pub mod zte_c320;
pub mod zte_c610;

pub use bdcom::BdcomDialect;
pub use huawei::HuaweiDialect;
pub use raisecom::RaisecomDialect;
pub use zte_c320::ZteC320Dialect;
pub use zte_c610::ZteC610Dialect;

use crate::domain::model::{Brand, CommandSequence};
use crate::domain::ports::{DialectGenerator, GenerationContext};

pub fn generator_for(brand: Brand) -> &'static dyn DialectGenerator {
    match brand {
        Brand::Raisecom => &RaisecomDialect,
        Brand::ZteC610 => &ZteC610Dialect,
        Brand::ZteC320 => &ZteC320Dialect,
        Brand::Bdcom => &BdcomDialect,
        Brand::Huawei => &HuaweiDialect,
    }
}

pub fn generate(ctx: &GenerationContext<'_>) -> CommandSequence {
    generator_for(ctx.request.brand()).generate(ctx)
}

impl GenerationContext<'_> {
    /// 第 `index` 個位址欄位；長度已由 parser 保證
    pub(crate) fn part(&self, index: usize) -> u32 {
        self.address.components()[index]
    }

    /// Bandwidth label for the request's VLAN.
    ///
    /// # Panics
    ///
    /// Panics if the VLAN has no catalog entry. The validator rejects IPoE
    /// requests on rate-profile brands without one.
    pub(crate) fn bandwidth(&self) -> &str {
        let vlan = self.request.vlan();
        self.catalog
            .bandwidth(vlan)
            .unwrap_or_else(|| unreachable!("VLAN {vlan} passed validation without a catalog entry"))
    }

    /// ZTE 的 tcont profile：PPPoE 固定 `PPPOE`，IPoE 用頻寬標籤
    pub(crate) fn zte_rate_profile(&self) -> String {
        if self.request.is_pppoe() {
            "PPPOE".to_string()
        } else {
            format!("{}Mbps", self.bandwidth())
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::{address, validator};
    use crate::domain::model::{
        Brand, CommandSequence, ConnectionType, RawFields, RegistrationType,
    };
    use crate::domain::ports::GenerationContext;
    use crate::domain::services::ServiceCatalog;
    use chrono::NaiveDate;

    pub fn fields(brand: Brand, sn: &str, fsp: &str) -> RawFields {
        RawFields {
            registration_type: RegistrationType::New,
            connection_type: ConnectionType::Pppoe,
            brand,
            serial_number: sn.to_string(),
            fsp: fsp.to_string(),
            vlan: "2801".to_string(),
            sid: "4455".to_string(),
            customer_name: "John Doe".to_string(),
            password: None,
            use_today_password: true,
            use_nce: false,
            serviceport: None,
        }
    }

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    pub fn render(raw: &RawFields) -> CommandSequence {
        let catalog = ServiceCatalog::builtin();
        let request = validator::validate(raw, &catalog).unwrap();
        let address = address::parse(request.fsp_raw(), request.brand());
        let password = request.resolve_password(today()).unwrap_or_default();
        let ctx = GenerationContext {
            request: &request,
            address: &address,
            catalog: &catalog,
            password: &password,
        };
        super::generate(&ctx)
    }

    pub fn lines(raw: &RawFields) -> Vec<String> {
        render(raw).into_lines()
    }
}
