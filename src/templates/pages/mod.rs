pub mod details;
pub mod home;

pub use details::{details_page, load_failed_page, missing_id_page, not_found_page, DetailsVm};
pub use home::{home_page, HomeVm, NOT_FOUND_MESSAGE, SEARCH_FAILED_MESSAGE};
