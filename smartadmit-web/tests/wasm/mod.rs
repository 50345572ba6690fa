mod app_tests;
mod buffered_input_tests;
