use super::*;

// =============================================================
// In-memory store
// =============================================================

#[test]
fn fresh_context_has_no_token() {
    let session = SessionContext::in_memory();
    assert_eq!(session.token(), None);
}

#[test]
fn remember_then_token_round_trips() {
    let session = SessionContext::in_memory();
    session.remember("abc-123");
    assert_eq!(session.token(), Some("abc-123".to_owned()));
}

#[test]
fn remember_overwrites_previous_token() {
    let session = SessionContext::in_memory();
    session.remember("first");
    session.remember("second");
    assert_eq!(session.token(), Some("second".to_owned()));
}

#[test]
fn clones_share_the_same_store() {
    let session = SessionContext::in_memory();
    let other = session.clone();
    session.remember("shared");
    assert_eq!(other.token(), Some("shared".to_owned()));
}

// =============================================================
// Adopt semantics
// =============================================================

#[test]
fn adopt_some_stores_the_token() {
    let session = SessionContext::in_memory();
    session.adopt(Some("s1"));
    assert_eq!(session.token(), Some("s1".to_owned()));
}

#[test]
fn adopt_none_keeps_established_session() {
    let session = SessionContext::in_memory();
    session.remember("established");
    session.adopt(None);
    assert_eq!(session.token(), Some("established".to_owned()));
}

#[test]
fn adopt_some_replaces_established_session() {
    let session = SessionContext::in_memory();
    session.remember("old");
    session.adopt(Some("new"));
    assert_eq!(session.token(), Some("new".to_owned()));
}

// =============================================================
// Browser store off the browser
// =============================================================

#[test]
fn browser_store_reports_no_token_without_a_window() {
    // Unit tests run on the host, where no `window` exists; both branches
    // of the browser store must degrade to "no session".
    let session = SessionContext::browser();
    session.remember("ignored");
    assert_eq!(session.token(), None);
}
