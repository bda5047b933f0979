use postrake::config::Settings;
use postrake::ops::telemetry;
use postrake::server;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let settings = Settings::from_env();
    if settings.render_api_key.is_none() {
        tracing::warn!("SCRAPINGBEE_API_KEY not set; rendered-DOM tier disabled");
    }

    if let Err(e) = server::run(settings).await {
        tracing::error!(error = %e, "Server terminated with error");
        std::process::exit(1);
    }
}
