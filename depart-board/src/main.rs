use askama::Template;
use tracing::{error, info};

use depart_board::board::{BoardTemplate, Model};
use depart_board::navitia::{NavitiaClient, NavitiaConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Get the credential from the environment
    let api_key = std::env::var("NAVITIA_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: NAVITIA_API_KEY not set. The API call will fail.");
        String::new()
    });

    let client = NavitiaClient::new(NavitiaConfig::new(api_key));

    info!("fetching departures");
    let result = client.fetch_departures().await;

    match &result {
        Ok(departures) => info!(count = departures.len(), "departures received"),
        Err(e) => error!("fetch failed: {e}"),
    }

    // The single state transition: initial -> success or failure.
    let model = Model::initial().resolve(result);

    let page = BoardTemplate::from_model(&model)
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e));
    println!("{page}");
}
