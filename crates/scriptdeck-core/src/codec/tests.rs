//! Tests for argument encoding

use super::*;
use crate::params::ArgumentParts;
use crate::registry::EntryKind;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

fn parts(selection: Option<&str>, typed: Option<&str>) -> ArgumentParts {
    ArgumentParts {
        selection: selection.map(String::from),
        typed: typed.map(String::from),
    }
}

fn unwrap_token(token: &str) -> String {
    String::from_utf8(STANDARD.decode(token).unwrap()).unwrap()
}

#[test]
fn test_token_carries_text_unchanged() {
    for text in [r#"[1, "two", true]"#, "hello world", "line one\nline 'two'", "", "é ✓"] {
        assert_eq!(unwrap_token(&encode_token(text)), text);
    }
}

#[test]
fn test_token_is_shell_safe() {
    let token = encode_token("it's \"quoted\"; rm -rf / && echo $HOME\n");
    assert!(
        token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
    );
}

#[test]
fn test_join_parts_puts_selection_first() {
    assert_eq!(join_parts(&["sel", "1, 2"]), "sel, 1, 2");
    assert_eq!(join_parts(&["only"]), "only");
    assert_eq!(join_parts(&[]), "");
}

#[test]
fn test_module_encoding_uses_one_token() {
    assert!(encode_arguments(EntryKind::Module, &ArgumentParts::none()).is_empty());

    let argv = encode_arguments(EntryKind::Module, &parts(Some("foo"), None));
    assert_eq!(argv.len(), 1);
    assert_eq!(unwrap_token(&argv[0]), "foo");

    let argv = encode_arguments(EntryKind::Module, &parts(Some("'sel'"), Some("3")));
    assert_eq!(argv.len(), 1);
    assert_eq!(unwrap_token(&argv[0]), "'sel', 3");
}

#[test]
fn test_module_encoding_of_empty_prompt_answer() {
    let argv = encode_arguments(EntryKind::Module, &parts(None, Some("")));
    assert_eq!(argv.len(), 1);
    assert_eq!(unwrap_token(&argv[0]), "");
}

#[test]
fn test_direct_encoding_splits_typed_text_only() {
    let argv = encode_arguments(
        EntryKind::Direct,
        &parts(Some("a, b"), Some("x, 'y, z'")),
    );
    assert_eq!(argv, vec!["a, b", "x", "y, z"]);

    assert!(encode_arguments(EntryKind::Direct, &ArgumentParts::none()).is_empty());
}
