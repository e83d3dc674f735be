// Test modules for Mockify
// Each module tests the public API of the corresponding source module

mod generator_tests;
mod templates_tests;
mod tui_tests;
