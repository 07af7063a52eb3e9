use clap::Parser;
use customs_estimator::core::ProductIdentifier;
use customs_estimator::utils::error::{EstimateError, ErrorSeverity};
use customs_estimator::utils::{logger, validation::Validate};
use customs_estimator::{
    CliConfig, EstimateEngine, EstimatePipeline, EstimatorConfig, LocalStorage, NamedProduct,
    TitleScraper,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting customs-estimator");

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match EstimatorConfig::from_file(path) {
                Ok(file_config) => file_config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => EstimatorConfig::default(),
    };
    config.merge_file(&file_config);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = file_config.validate().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.dry_run {
        display_config_summary(&config, &file_config);
        return Ok(());
    }

    let result = match (&config.url, &config.name) {
        (Some(url), _) => {
            let timeout = Duration::from_secs(
                config
                    .timeout_seconds
                    .unwrap_or(customs_estimator::adapters::title_scraper::DEFAULT_TIMEOUT_SECONDS),
            );
            match TitleScraper::new(url, timeout, config.user_agent.as_deref()) {
                Ok(scraper) => run(scraper, config.clone(), &file_config).await,
                Err(e) => Err(e),
            }
        }
        (None, Some(name)) => run(NamedProduct::new(name.clone()), config.clone(), &file_config).await,
        // clap 的 ArgGroup 保證至少有一個
        (None, None) => Err(EstimateError::MissingConfigError {
            field: "--url or --name".to_string(),
        }),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Estimate failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run<I: ProductIdentifier>(
    identifier: I,
    config: CliConfig,
    file_config: &EstimatorConfig,
) -> customs_estimator::Result<()> {
    let storage = LocalStorage::new(config.output_path.clone().unwrap_or_else(|| ".".to_string()));
    let pipeline =
        EstimatePipeline::with_estimator(identifier, storage, config, file_config.estimator());
    let engine = EstimateEngine::new(pipeline);

    let report = engine.run().await?;

    print!("{}", report.invoice);
    for path in &report.written_files {
        println!("📁 Saved: {}", path);
    }
    Ok(())
}

fn display_config_summary(config: &CliConfig, file_config: &EstimatorConfig) {
    println!("📋 Configuration Summary:");
    match (&config.url, &config.name) {
        (Some(url), _) => println!("  Product page: {}", url),
        (None, Some(name)) => println!("  Product name: {}", name),
        (None, None) => {}
    }
    println!("  Declared Value: ${:.2}", config.declared_value);
    println!(
        "  Output: {}",
        config.output_path.as_deref().unwrap_or("(stdout only)")
    );
    println!("  Formats: {}", config.formats.join(", "));

    let shipping = &file_config.shipping;
    println!(
        "  Shipping: ${}/kg, ${} up to {} cbft, ${} up to {} cbft, +${}/cbft beyond",
        shipping.per_kg_rate,
        shipping.base_volume_charge,
        shipping.base_volume_limit,
        shipping.mid_volume_charge,
        shipping.mid_volume_limit,
        shipping.excess_rate_per_cbft
    );

    let table = file_config.rate_table();
    for category in customs_estimator::CategoryId::ALL {
        let rates = table.rates(category);
        println!(
            "  {:<12} {} kg, {} cbft, duty {}, OB tax {}",
            category.keyword(),
            rates.weight_kg,
            rates.volume_cbft,
            rates.duty_rate,
            rates.sales_tax_rate
        );
    }
    println!("  🔍 DRY RUN MODE - nothing fetched or written");
}
