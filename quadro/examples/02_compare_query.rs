//! Resolve a temporal comparison query end to end: intent classification,
//! routed fetch, period extraction, validation, and (if needed) the
//! single-shot self-correction.
//!
//! Run with: `cargo run -p quadro --example 02_compare_query`

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
        .build();
    let engine = Quadro::builder().with_connector(Arc::new(mock)).build()?;

    let query = "how has unemployment changed since pre-pandemic?";
    let resolution = engine
        .resolve(query, &["UNRATE".to_string()], None)
        .await;

    println!("query:       {query}");
    println!("intent:      {:?}", resolution.intent.kind);
    println!("explanation: {}", resolution.intent.explanation);

    for metric in resolution.data.metrics.values() {
        println!("metric:      {metric}");
    }
    if let Some(note) = &resolution.correction_note {
        println!("correction:  {note}");
    }
    let message = resolution.validation.user_message();
    if !message.is_empty() {
        println!("validation:\n{message}");
    }

    Ok(())
}
