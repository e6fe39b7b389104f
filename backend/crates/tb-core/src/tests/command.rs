use crate::{Command, CommandRequest, quote_value};

use serde_json::json;

#[test]
fn test_quote_value_plain_left_alone() {
    assert_eq!(quote_value("Critical"), "Critical");
    assert_eq!(quote_value("john.doe"), "john.doe");
}

#[test]
fn test_quote_value_whitespace_wrapped() {
    assert_eq!(quote_value("John Doe"), "\"John Doe\"");
    assert_eq!(quote_value("In\tProgress"), "\"In\tProgress\"");
}

#[test]
fn test_quote_value_embedded_quote_escaped() {
    assert_eq!(quote_value("a\"b"), "\"a\\\"b\"");
    assert_eq!(quote_value("say \"hi\""), "\"say \\\"hi\\\"\"");
}

#[test]
fn test_field_command() {
    assert_eq!(Command::field("Priority", "Critical").as_str(), "Priority Critical");
    assert_eq!(
        Command::field("Assignee", "John Doe").as_str(),
        "Assignee \"John Doe\""
    );
}

#[test]
fn test_link_command_uses_phrase() {
    let command = Command::link(Some("depends on"), "relates to", "PROJ-2");
    assert_eq!(command.as_str(), "depends on PROJ-2");
}

#[test]
fn test_link_command_collapses_whitespace() {
    let command = Command::link(Some("  is   duplicated\tby "), "relates to", "PROJ-2");
    assert_eq!(command.as_str(), "is duplicated by PROJ-2");
}

#[test]
fn test_link_command_empty_phrase_falls_back_to_default() {
    assert_eq!(
        Command::link(None, "relates to", "PROJ-2").as_str(),
        "relates to PROJ-2"
    );
    assert_eq!(
        Command::link(Some("   "), "relates to", "PROJ-2").as_str(),
        "relates to PROJ-2"
    );
}

#[test]
fn test_command_request_internal_target() {
    let request = CommandRequest::single("3-42", &Command::new("  State Fixed  "));

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"query": "State Fixed", "issues": [{"id": "3-42"}]})
    );
}

#[test]
fn test_command_request_readable_target() {
    let request = CommandRequest::single("PROJ-7", &Command::new("State Fixed"));

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"query": "State Fixed", "issues": [{"idReadable": "PROJ-7"}]})
    );
}
