//! Typing tests - bracket auto-closing and Enter indentation through EditSession

mod common;

use common::{marked, sentinel, session_at, session_marked};
use edit_assist::assist::{ChangeNotice, EditEvent};
use edit_assist::{
    AfterChange, AssistConfig, BracketAutoCloser, EditSession, IndentEngine, RopeBuffer,
    TextBuffer, TextBufferMut,
};

// ========================================================================
// Bracket auto-closing
// ========================================================================

#[test]
fn test_each_opening_bracket_is_closed() {
    for (open, close) in [('(', ')'), ('{', '}'), ('[', ']')] {
        let mut s = session_at("ab", 1);
        s.type_char(open);
        assert_eq!(s.text(), format!("a{open}{close}b"));
        assert_eq!(s.cursor(), 2, "cursor between the pair for {open}");
    }
}

#[test]
fn test_bracket_at_buffer_start() {
    let mut s = session_at("", 0);
    s.type_char('[');
    assert_eq!(marked(&s), "[|]");
}

#[test]
fn test_typing_inside_auto_closed_pair() {
    let mut s = session_at("let v = ", 8);
    s.type_text("vec![1");
    assert_eq!(marked(&s), "let v = vec![1|]");
}

#[test]
fn test_closing_bracket_is_typed_normally() {
    let mut s = session_marked("foo|");
    s.type_char(')');
    assert_eq!(marked(&s), "foo)|");
}

// ========================================================================
// Enter indentation
// ========================================================================

#[test]
fn test_enter_after_open_brace_indents() {
    let mut s = session_marked("    if (x) {|\n    }");
    s.type_char('\n');
    assert_eq!(marked(&s), "    if (x) {\n        |\n    }");
}

#[test]
fn test_enter_keeps_plain_indent() {
    let mut s = session_marked("\tlet a = 1;|");
    s.type_char('\n');
    assert_eq!(marked(&s), "\tlet a = 1;\n\t|");
}

#[test]
fn test_enter_after_unmatched_paren() {
    let mut s = session_marked("foo(|");
    s.type_char('\n');
    assert_eq!(marked(&s), "foo(\n    |");
}

#[test]
fn test_enter_after_matched_parens() {
    let mut s = session_marked("foo()|");
    s.type_char('\n');
    assert_eq!(marked(&s), "foo()\n|");
}

#[test]
fn test_enter_between_empty_braces_splits() {
    let mut s = session_marked("foo() {|}");
    let outcome = s.type_char('\n');
    assert!(matches!(outcome, AfterChange::StrippedSentinel { .. }));
    assert_eq!(marked(&s), "foo() {\n    |\n}");
    assert!(!s.text().contains(&sentinel()));
}

#[test]
fn test_enter_between_braces_keeps_outer_indent() {
    let mut s = session_marked("  fn a() {\n    match x {|}\n  }");
    s.type_char('\n');
    assert_eq!(marked(&s), "  fn a() {\n    match x {\n        |\n    }\n  }");
}

#[test]
fn test_enter_at_buffer_start() {
    let mut s = session_at("abc", 0);
    s.type_char('\n');
    assert_eq!(marked(&s), "\n|abc");
}

#[test]
fn test_enter_mid_comment_continues_marker() {
    let mut s = session_marked("  // split |here");
    s.type_char('\n');
    assert_eq!(marked(&s), "  // split \n  //|here");
}

#[test]
fn test_repeated_enter_does_not_drift() {
    let mut s = session_marked("        value;|");
    s.type_char('\n');
    s.type_text("next;");
    s.type_char('\n');
    assert_eq!(marked(&s), "        value;\n        next;\n        |");
}

// ========================================================================
// Full typing flows
// ========================================================================

#[test]
fn test_type_function_body() {
    let mut s = session_marked("fn main() |");
    s.type_text("{\nlet x = (1 +\n2");
    assert_eq!(
        marked(&s),
        "fn main() {\n    let x = (1 +\n        2|)\n}"
    );
}

#[test]
fn test_disabled_config_types_verbatim() {
    let config = AssistConfig {
        auto_close_brackets: false,
        auto_indent: false,
        ..AssistConfig::default()
    };
    let mut s = EditSession::from_text("", &config);
    s.type_text("if x {\n}");
    assert_eq!(s.text(), "if x {\n}");
    assert_eq!(s.cursor(), 8);
}

#[test]
fn test_custom_indent_unit() {
    let config = AssistConfig {
        indent_unit: "\t".to_string(),
        ..AssistConfig::default()
    };
    let mut s = EditSession::from_text("", &config);
    s.type_text("{\n");
    assert_eq!(s.text(), "{\n\t\n}");
    assert_eq!(s.cursor(), 3);
}

// ========================================================================
// Filter and observer used separately, as a host would wire them
// ========================================================================

#[test]
fn test_host_wiring_filter_then_observer() {
    let config = AssistConfig::default();
    let engine = IndentEngine::from_config(&config);
    let closer = BracketAutoCloser::from_config(&config);

    let mut buffer = RopeBuffer::from_text("x = [");
    closer.after_change(&mut buffer, &ChangeNotice::inserted(4, 1));
    assert_eq!(buffer.content(), "x = []");

    let replacement = {
        let event = EditEvent::new("\n", 0, 1, &buffer, 5, 5).unwrap();
        engine.filter(&event).unwrap()
    };
    buffer.insert(5, &replacement);
    let notice = ChangeNotice::inserted(5, replacement.chars().count());
    let outcome = closer.after_change(&mut buffer, &notice);

    // `[` opens a scope but only `{}` pairs are split
    assert_eq!(buffer.content(), "x = [\n    ]");
    assert_eq!(outcome, AfterChange::Unchanged);
}

#[test]
fn test_sentinel_from_any_source_is_stripped() {
    let mut s = session_at("ab", 1);
    let pasted = format!("1{}2", sentinel());
    s.commit_external(1..1, &pasted);
    assert_eq!(marked(&s), "a1|2b");
}
