#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tally_server::config;
use tally_server::notify::NotifyList;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
server:
  listen: "0.0.0.0:3000"
notify:
  webook_url: "https://example.com/hook" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn empty_document_yields_defaults() {
    let cfg = config::load_from_str("{}").expect("must parse");
    assert_eq!(cfg.server.listen, "0.0.0.0:3000");
    assert_eq!(cfg.store.path, "tally-store.json");
    assert!(cfg.notify.webhook_url.is_none());
    assert!(cfg.notify.keys.is_empty());
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
server:
  listen: "127.0.0.1:8081"
notify:
  webhook_url: "https://example.com/hook"
  keys: "a, b"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen, "127.0.0.1:8081");
    assert_eq!(cfg.notify.webhook_url.as_deref(), Some("https://example.com/hook"));
    assert_eq!(cfg.notify.keys, "a, b");
}

#[test]
fn bad_listen_rejected() {
    let bad = "server:\n  listen: \"nonsense\"\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn notify_list_trims_entries() {
    let list = NotifyList::parse(" a, b ,c");
    assert!(list.contains("a"));
    assert!(list.contains("b"));
    assert!(list.contains("c"));
    assert!(!list.contains(" a"));
    assert!(!list.contains("d"));
}

#[test]
fn notify_list_drops_empty_entries() {
    assert!(NotifyList::parse("").is_empty());
    assert!(NotifyList::parse(" , ,").is_empty());

    let list = NotifyList::parse("a,,b");
    assert!(list.contains("a") && list.contains("b"));
    assert!(!list.contains(""));
}

#[test]
fn keys_are_case_sensitive() {
    let list = NotifyList::parse("Demo");
    assert!(list.contains("Demo"));
    assert!(!list.contains("demo"));
}
