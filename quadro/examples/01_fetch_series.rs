//! Fetch a single series and a batch through the routed engine, using the
//! mock connector so the example runs offline.
//!
//! Run with: `cargo run -p quadro --example 01_fetch_series`

use std::sync::Arc;

use quadro::{Quadro, Source};
use quadro_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mock = MockConnector::builder()
        .source(Source::Fred)
        .with_series(quadro_mock::fixtures::unemployment_rate())
        .with_series(quadro_mock::fixtures::real_gdp_growth())
        .build();

    let engine = Quadro::builder()
        .with_connector(Arc::new(mock))
        .with_cache(quadro::CacheConfig::default())
        .build()?;

    let series = engine.series("UNRATE", None).await?;
    if let Some(latest) = series.latest() {
        println!(
            "{}: {} {} ({})",
            series.name, latest.value, series.units, latest.date
        );
    }

    let ids: Vec<String> = ["UNRATE", "A191RL1Q225SBEA", "NOT_A_SERIES"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let map = engine.series_map(&ids, None).await;
    for (id, series) in &map {
        match &series.error {
            Some(error) => println!("{id}: error: {error}"),
            None => println!("{id}: {} observations", series.len()),
        }
    }

    Ok(())
}
