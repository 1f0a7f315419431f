//! Property-based tests for the prefer-reflect matchers
//!
//! These verify invariants that should hold for all inputs:
//! - Classification is total: unrecognized method names are non-matches
//! - Calls through the Reflect identifier are never flagged
//! - Bare-identifier deletes are never flagged
//! - Linting is deterministic over an unchanged source

use prefer_reflect::{Diagnostic, Linter, PreferReflect};
use proptest::prelude::*;
use serde_json::Value;

/// Legacy method names the call matcher recognizes
const LEGACY_METHODS: &[&str] = &[
    "apply",
    "call",
    "defineProperty",
    "getOwnPropertyDescriptor",
    "getPrototypeOf",
    "isExtensible",
    "getOwnPropertyNames",
    "preventExtensions",
    "setPrototypeOf",
];

/// Reserved words to keep generated snippets parseable
const JS_RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "export", "extends", "finally", "for", "function", "if", "import", "in", "instanceof",
    "let", "new", "of", "return", "static", "super", "switch", "this", "throw", "try", "typeof",
    "var", "void", "while", "with", "yield", "true", "false", "null",
];

const STATEMENTS: &[&str] = &[
    "Object.getOwnPropertyNames(subject);",
    "Object.getPrototypeOf(subject);",
    "(function(){}).call(null, 1, 2);",
    "delete subject.marker;",
    "'marker' in subject;",
    "Reflect.ownKeys(subject);",
    "plainCall();",
    "for (var key in subject) { visit(key); }",
];

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,11}"
        .prop_filter("not a reserved word", |s| !JS_RESERVED.contains(&s.as_str()))
}

fn lint(source: &str) -> Vec<Diagnostic> {
    let rule = PreferReflect::from_options(&[] as &[Value]).expect("default options");
    let mut linter = Linter::new_javascript()
        .expect("JavaScript grammar")
        .with_rule(Box::new(rule));
    linter.lint(source).expect("lint should not fail")
}

proptest! {
    /// Property: method-call classification is total - exactly the nine
    /// legacy names match, every other property name is a non-match
    #[test]
    fn prop_method_calls_flag_only_legacy_names(name in identifier()) {
        let source = format!("receiver.{name}(payload);");
        let diagnostics = lint(&source);

        if LEGACY_METHODS.contains(&name.as_str()) {
            prop_assert_eq!(diagnostics.len(), 1);
        } else {
            prop_assert!(diagnostics.is_empty());
        }
    }

    /// Property: calls through the Reflect identifier are compliant no
    /// matter which method name they use
    #[test]
    fn prop_reflect_qualified_calls_are_never_flagged(name in identifier()) {
        let source = format!("Reflect.{name}(payload);");
        prop_assert!(lint(&source).is_empty());
    }

    /// Property: deleting a bare identifier is never a violation
    #[test]
    fn prop_bare_identifier_delete_is_never_flagged(name in identifier()) {
        let source = format!("delete {name};");
        prop_assert!(lint(&source).is_empty());
    }

    /// Property: linting is deterministic - the same source and options
    /// always yield the same diagnostics, in the same order
    #[test]
    fn prop_linting_is_deterministic(
        lines in proptest::sample::subsequence(STATEMENTS.to_vec(), 0..STATEMENTS.len())
    ) {
        let source = lines.join("\n");
        prop_assert_eq!(lint(&source), lint(&source));
    }
}
