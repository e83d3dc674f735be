// TUI Tests Module - Testing the public tui module
// Tests organized by TUI module structure:
// - app_tests: App key handling, exports and screen switching
// - screens_tests: EditorScreen and TemplatesScreen
// - types_tests: Screen and EditorField
// - ui_tests: UI helper functions and full-frame rendering

mod app_tests;
mod screens_tests;
mod types_tests;
mod ui_tests;
