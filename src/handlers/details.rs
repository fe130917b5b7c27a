// handlers/details.rs
use crate::domain::navigation::{details_url, parse_query, resolve_property_id};
use crate::lookup::fetch_property_by_id;
use crate::responses::{html_response, html_response_with_status, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{
    details_page, load_failed_page, missing_id_page, not_found_page, DetailsVm,
};

/// `GET /details` and `GET /details/<id>`.
pub fn details(path: &str, query: Option<&str>, state: &AppState) -> ResultResp {
    let params = parse_query(query);

    let Some(property_id) = resolve_property_id(path, &params) else {
        return html_response_with_status(404, missing_id_page());
    };

    match fetch_property_by_id(state.properties.as_ref(), &property_id) {
        Ok(Some(property)) => {
            let page_url = format!(
                "{}{}",
                state.public_origin.trim_end_matches('/'),
                details_url(&property_id)
            );
            html_response(details_page(&DetailsVm::new(&property, page_url)))
        }
        Ok(None) => html_response_with_status(404, not_found_page(&property_id)),
        Err(e) => {
            tracing::error!(property_id = %property_id, error = %e, "failed to load property");
            html_response_with_status(502, load_failed_page())
        }
    }
}
