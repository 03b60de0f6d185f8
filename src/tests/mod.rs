mod parse_tests;
mod payload_tests;
mod prompt_tests;
mod routes_tests;
