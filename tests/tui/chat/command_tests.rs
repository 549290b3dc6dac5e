//! Command parsing tests

use airoom::tui::screens::chat::{CommandResult, parse_command};

#[test]
fn test_parse_help() {
    assert_eq!(parse_command("/help"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/?"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/HELP"), CommandResult::ShowHelp);
}

#[test]
fn test_parse_exit() {
    assert_eq!(parse_command("/exit"), CommandResult::Exit);
    assert_eq!(parse_command("/quit"), CommandResult::Exit);
    assert_eq!(parse_command("/bye"), CommandResult::Exit);
}

#[test]
fn test_parse_bare_slash() {
    assert_eq!(parse_command("/"), CommandResult::None);
}

#[test]
fn test_parse_unknown() {
    assert_eq!(
        parse_command("/reset"),
        CommandResult::Unknown("reset".to_string())
    );
}

#[test]
fn test_parse_ignores_arguments() {
    assert_eq!(parse_command("/help me please"), CommandResult::ShowHelp);
}
