pub mod command_tests;
pub mod input_tests;
pub mod scroll_tests;
pub mod state_tests;
