use anyhow::Context;
use clap::Parser;
use olt_config::config::{BatchArgs, Command, GenerateArgs, OutputFormat};
use olt_config::utils::error::ErrorSeverity;
use olt_config::utils::{logger, validation::Validate};
use olt_config::{
    BatchEngine, BatchPipeline, CliConfig, ConfigEngine, LocalStorage, OltError, TomlConfig,
};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading settings from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("❌ Failed to load settings file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => TomlConfig::default(),
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Settings validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let engine = ConfigEngine::new(settings.service_catalog());

    let outcome = match &config.command {
        Command::Generate(args) => run_generate(&engine, args),
        Command::Batch(args) => run_batch(engine, &settings, args),
        Command::Catalog => {
            print_catalog(&engine)?;
            Ok(0)
        }
    };

    match outcome {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(
                "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}

fn run_generate(engine: &ConfigEngine, args: &GenerateArgs) -> Result<i32, OltError> {
    let raw = args.to_raw_fields();
    let generated = engine.render(&raw, chrono::Local::now().date_naive())?;

    let body = match args.format {
        OutputFormat::Text => generated.text.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(&generated)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &body)?;
            tracing::info!("✅ Configuration written to: {}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", body)?;
        }
    }

    Ok(0)
}

fn run_batch(
    engine: ConfigEngine,
    settings: &TomlConfig,
    args: &BatchArgs,
) -> Result<i32, OltError> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| settings.output_directory().to_string());

    let storage = LocalStorage::new(output_dir);
    let pipeline = BatchPipeline::new(storage, engine, &args.input).with_zip(args.zip);
    let summary = BatchEngine::new(pipeline).run()?;

    println!("✅ Generated {} configurations", summary.generated);
    println!("📁 Output saved to: {}", summary.output_path);
    if summary.failed > 0 {
        eprintln!("⚠️ {} rows rejected:", summary.failed);
        for failure in &summary.failures {
            eprintln!("   row {}: {}", failure.row, failure.message);
        }
        return Ok(2);
    }

    Ok(0)
}

fn print_catalog(engine: &ConfigEngine) -> anyhow::Result<()> {
    let catalog = engine.catalog();
    let mut stdout = std::io::stdout().lock();

    writeln!(stdout, "VLAN\tBandwidth (Mbps)\tBundled").context("writing catalog to stdout")?;
    for (vlan, label) in catalog.entries() {
        let bundled = if catalog.is_bundled(vlan) { "yes" } else { "" };
        writeln!(stdout, "{}\t{}\t{}", vlan, label, bundled)
            .context("writing catalog to stdout")?;
    }
    writeln!(
        stdout,
        "Dynamic VLANs: {}-{} (no bandwidth profile)",
        catalog.dynamic_range().start(),
        catalog.dynamic_range().end()
    )
    .context("writing catalog to stdout")?;

    Ok(())
}
