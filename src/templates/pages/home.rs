// templates/pages/home.rs

use crate::templates::{
    components::{button, popup},
    desktop_layout,
};
use maud::{html, Markup};

pub const NOT_FOUND_MESSAGE: &str =
    "No property found with the provided code. Please check the code and try again.";
pub const SEARCH_FAILED_MESSAGE: &str =
    "An error occurred while searching for the property. Please try again.";

#[derive(Debug, Default)]
pub struct HomeVm<'a> {
    /// Last submitted code, echoed back into the input.
    pub code: &'a str,
    pub popup_message: Option<&'a str>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Search",
        html! {
            div class="form-wrapper" {
                form
                    method="get"
                    action="/search"
                    class="search-form"
                    onsubmit="this.classList.add('loading'); this.querySelector('button').disabled = true;"
                {
                    label for="code" class="label" { "Enter the property code to view details" }
                    div class="form-row" {
                        input
                            type="text"
                            id="code"
                            name="code"
                            value=(vm.code)
                            class="input"
                            autocomplete="off"
                            required;
                        (button("SUBMIT"))
                    }
                }
            }

            @if let Some(message) = vm.popup_message {
                (popup("Property Code Not Found", message))
            }
        },
    )
}
