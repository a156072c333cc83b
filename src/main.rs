use astro_match::app::server;
use astro_match::config::toml_config::TomlConfig;
use astro_match::utils::error::ErrorSeverity;
use astro_match::utils::{logger, validation::Validate};
use astro_match::{AstroError, CliConfig, ServerSettings};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    // 載入 TOML 配置 (選用)
    let file_config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let settings = match ServerSettings::from_env(&args.overrides(), file_config.as_ref()) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    // 初始化日誌
    if settings.json_logs() {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting astro-match");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        exit_with(e);
    }

    if args.dry_run {
        display_config_summary(&settings, args.config.as_deref());
        return Ok(());
    }

    if let Err(e) = server::run(&settings).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        exit_with(e);
    }

    Ok(())
}

fn exit_with(e: AstroError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn display_config_summary(settings: &ServerSettings, config_path: Option<&str>) {
    println!("📋 Configuration Summary:");
    println!("  Config file: {}", config_path.unwrap_or("(none)"));
    println!("  Bind: {}", settings.bind_address());
    println!("  Landing page: {}", settings.index_file);
    println!("  Static folder: {}", settings.static_dir);
    println!("  Log format: {}", settings.log_format);
    println!("  🔍 DRY RUN MODE - server not started");
}
