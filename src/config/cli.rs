use crate::domain::model::{Brand, ConnectionType, RawFields, RegistrationType};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "olt-config")]
#[command(about = "Generate GPON ONU provisioning commands for Raisecom, ZTE, BDCOM and Huawei OLTs")]
#[command(version)]
pub struct CliConfig {
    /// Path to TOML settings file (service catalog, output directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate the command text for a single ONU
    Generate(GenerateArgs),
    /// Generate one config file per row of a CSV file
    Batch(BatchArgs),
    /// Print the effective service catalog
    Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[arg(long, value_enum)]
    pub brand: Brand,

    #[arg(long, value_enum, default_value_t = RegistrationType::New)]
    pub registration: RegistrationType,

    #[arg(long, value_enum, default_value_t = ConnectionType::Pppoe)]
    pub connection: ConnectionType,

    /// ONU serial number (12 or 16 characters)
    #[arg(long)]
    pub sn: String,

    /// Port address: S/P/Onu id (Raisecom), P/Onu id (BDCOM), F/S/P/Onu id (others)
    #[arg(long)]
    pub fsp: String,

    #[arg(long)]
    pub vlan: String,

    #[arg(long)]
    pub sid: String,

    /// Customer name, spaces become dots
    #[arg(long)]
    pub name: String,

    /// PPPoE password; today's date (YYYYMMDD) when omitted
    #[arg(long)]
    pub password: Option<String>,

    /// Huawei only: use the NCE management sequence
    #[arg(long)]
    pub nce: bool,

    /// Huawei replacement only: service-port index to remove
    #[arg(long)]
    pub serviceport: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

impl GenerateArgs {
    pub fn to_raw_fields(&self) -> RawFields {
        RawFields {
            registration_type: self.registration,
            connection_type: self.connection,
            brand: self.brand,
            serial_number: self.sn.clone(),
            fsp: self.fsp.clone(),
            vlan: self.vlan.clone(),
            sid: self.sid.clone(),
            customer_name: self.name.clone(),
            password: self.password.clone(),
            use_today_password: self.password.is_none(),
            use_nce: self.nce,
            serviceport: self.serviceport.clone(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// CSV file with one provisioning request per row
    #[arg(short, long)]
    pub input: String,

    /// Output directory; defaults to the settings file value
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Bundle all generated files into olt_configs.zip
    #[arg(long)]
    pub zip: bool,
}
