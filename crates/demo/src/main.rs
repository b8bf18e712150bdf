use anyhow::Context;
use storefront_demo::{DemoConfig, ReportFormat};

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(data = %config.data_path.display(), seed = config.seed, "starting demo");

    let summary = storefront_demo::run(&config)?;

    match config.report {
        ReportFormat::Text => {
            for report in &summary.complexity {
                tracing::info!("{report}");
            }
        }
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&summary).context("encoding summary")?;
            println!("{json}");
        }
    }

    Ok(())
}
