use crate::api::HttpListingSource;
use crate::config::Config;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};

mod api;
mod config;
mod domain;
mod errors;
mod listing;
mod observability;
mod responses;
mod router;
mod state;
mod templates;


fn main() {
    // 1️⃣ Configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    observability::init_tracing(&config.log_filter);

    // 2️⃣ Listing service client
    let source = match HttpListingSource::new(
        config.api_base_url.clone(),
        config.detail_base_url.clone(),
        config.http_timeout,
    ) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "listing client initialization failed");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(Arc::new(source), config.filter_page_policy));

    // 3️⃣ First page, before any request arrives
    state.list.load();

    // 4️⃣ Start the server
    let addr = config.bind_addr;
    info!(%addr, api = %config.api_base_url, "starting server");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
