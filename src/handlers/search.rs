// handlers/search.rs
use crate::domain::navigation::{details_url, parse_query};
use crate::lookup::fetch_property_by_id;
use crate::responses::{html_response, see_other, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{home_page, HomeVm, NOT_FOUND_MESSAGE, SEARCH_FAILED_MESSAGE};

/// `GET /search?code=...`: redirect to the details view when the code exists,
/// otherwise redraw the form with a popup.
pub fn search(query: Option<&str>, state: &AppState) -> ResultResp {
    let params = parse_query(query);
    let code = params.get("code").map(|c| c.trim()).unwrap_or("");

    if code.is_empty() {
        return html_response(home_page(&HomeVm::default()));
    }

    match fetch_property_by_id(state.properties.as_ref(), code) {
        Ok(Some(_)) => see_other(&details_url(code)),
        Ok(None) => {
            tracing::info!(code, url = %state.properties.describe(code), "property code not found");
            html_response(home_page(&HomeVm {
                code,
                popup_message: Some(NOT_FOUND_MESSAGE),
            }))
        }
        Err(e) => {
            tracing::error!(code, error = %e, "property search failed");
            html_response(home_page(&HomeVm {
                code,
                popup_message: Some(SEARCH_FAILED_MESSAGE),
            }))
        }
    }
}
