mod auth_tests;
mod route_tests;
mod test_utils;
