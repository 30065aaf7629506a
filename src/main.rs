use anyhow::Context;
use clap::Parser;
use shopping_list_connector::core::output::render;
use shopping_list_connector::utils::logger;
use shopping_list_connector::{CliConfig, Connector, ConnectorError, Product, ProductFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let products = match run(&config).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("❌ Fetch failed: {} (Category: {:?})", e, e.category());
            tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let rendered = render(&products, config.output).context("failed to render product list")?;
    println!("{}", rendered);

    Ok(())
}

async fn run(config: &CliConfig) -> Result<Vec<Product>, ConnectorError> {
    let resolved = config.resolve()?;
    tracing::info!("Using endpoint {}", resolved.endpoint);

    let connector = Connector::new(ProductFetcher::new(&resolved)?);

    tokio::select! {
        result = connector.run() => result,
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, abandoning request");
            Err(ConnectorError::Interrupted)
        }
    }
}
