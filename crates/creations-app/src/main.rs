//! Main application entry point.

#[tokio::main]
async fn main() {
    env_logger::init();
    log::info!("Starting CustomCreations");

    if let Err(e) = creations_app::run().await {
        log::error!("Fatal: {}", e);
        eprintln!("creations: {}", e);
        std::process::exit(1);
    }
}
