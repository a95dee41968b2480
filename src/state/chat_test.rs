use super::*;

// =============================================================
// trimmed_message
// =============================================================

#[test]
fn trimmed_message_rejects_empty_input() {
    assert_eq!(trimmed_message(""), None);
}

#[test]
fn trimmed_message_rejects_whitespace_only_input() {
    assert_eq!(trimmed_message("   \n\t  "), None);
}

#[test]
fn trimmed_message_strips_surrounding_whitespace() {
    assert_eq!(trimmed_message("  hello  "), Some("hello"));
}

#[test]
fn trimmed_message_passes_plain_text_through() {
    assert_eq!(trimmed_message("what causes leaf curl?"), Some("what causes leaf curl?"));
}

// =============================================================
// Transcript ordering
// =============================================================

#[test]
fn default_state_has_empty_transcript() {
    let chat = ChatState::default();
    assert!(chat.messages.is_empty());
    assert!(!chat.sending);
    assert_eq!(chat.disease_context, None);
}

#[test]
fn begin_send_echoes_user_before_the_request() {
    let mut chat = ChatState::default();
    chat.begin_send("is this treatable?");

    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].sender, Sender::User);
    assert_eq!(chat.messages[0].content, "is this treatable?");
    assert!(chat.sending);
}

#[test]
fn user_echo_precedes_bot_reply() {
    let mut chat = ChatState::default();
    chat.begin_send("is this treatable?");
    chat.settle_reply("Yes, with a copper fungicide.".to_owned());

    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[0].sender, Sender::User);
    assert_eq!(chat.messages[1].sender, Sender::Bot);
    assert_eq!(chat.messages[1].content, "Yes, with a copper fungicide.");
    assert!(!chat.sending);
}

// =============================================================
// Error substitution
// =============================================================

#[test]
fn settle_error_formats_substitute_reply() {
    let mut chat = ChatState::default();
    chat.begin_send("hello");
    chat.settle_error("timeout");

    assert_eq!(chat.messages[1].sender, Sender::Bot);
    assert_eq!(chat.messages[1].content, "Sorry, I encountered an error: timeout");
}

#[test]
fn failed_exchange_still_reenables_sending() {
    let mut chat = ChatState::default();
    chat.begin_send("hello");
    chat.settle_error("network unreachable");

    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[0].sender, Sender::User);
    assert_eq!(chat.messages[1].sender, Sender::Bot);
    assert!(chat.messages[1].content.starts_with(ERROR_REPLY_PREFIX));
    assert!(!chat.sending);
}
