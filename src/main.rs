use crate::config::AppConfig;
use crate::router::respond;
use crate::state::AppState;
use astra::{ConnectionInfo, Request, Server};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod endpoint;
mod errors;
mod handlers;
mod lookup;
mod responses;
mod router;
mod state;
mod templates;
mod upstream;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if config.upstream.required().is_none() {
        tracing::warn!("upstream API settings incomplete; property lookups and the proxy will fail");
    }

    let state = match AppState::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP clients");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %config.bind_addr, workers = config.max_workers, "starting server");

    let server = Server::bind(config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req: Request, _info: ConnectionInfo| respond(req, &state));

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
