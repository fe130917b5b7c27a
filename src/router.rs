use crate::domain::navigation::DETAILS_PATH;
use crate::errors::ServerError;
use crate::handlers;
use crate::responses::{css_response, html_error_response, html_response, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{home_page, HomeVm};
use astra::{Request, Response};

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Entry point for the server: runs `handle`, renders errors as HTML and logs the outcome.
pub fn respond(req: Request, state: &AppState) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(%method, %path, error = %err, "request failed");
            html_error_response(err)
        }
    };

    tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
    resp
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query();

    match (method, path) {
        ("GET", "/") => html_response(home_page(&HomeVm::default())),
        ("GET", "/search") => handlers::search(query, state),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        ("GET", p) if p == DETAILS_PATH || p.starts_with("/details/") => {
            handlers::details(p, query, state)
        }
        ("GET", p) if p.starts_with(handlers::PROXY_PREFIX) => handlers::property_proxy(p, state),

        _ => Err(ServerError::NotFound),
    }
}
