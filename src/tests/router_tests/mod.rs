mod details_tests;
mod proxy_tests;
mod search_tests;
