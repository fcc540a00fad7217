//! Comprehensive test suite for magicnum-core.
//!
//! Unit tests live next to their modules; this suite exercises whole
//! rewrite sessions end to end.

use crate::*;

fn extract(source: &str) -> Extraction {
    extract_magic_numbers(source).unwrap()
}

fn extract_with(source: &str, options: &ExtractOptions) -> Extraction {
    extract_magic_numbers_with(source, options).unwrap()
}

// One declaration per distinct value, every occurrence replaced.
#[test]
fn test_value_dedup_two_occurrences() {
    let out = extract("class C { int f() { return 5 + g(5); } }");

    assert_eq!(out.values, vec!["5"]);
    assert_eq!(
        out.text.matches("private static final int MAGIC_NUMBER_5 = 5;").count(),
        1,
        "exactly one declaration for the value"
    );
    assert!(out.text.contains("return MAGIC_NUMBER_5 + g(MAGIC_NUMBER_5);"));
}

// Rerunning on the output extracts nothing.
#[test]
fn test_idempotence() {
    let first = extract("class C { void m() { a(7); b(12); c(7); } }");
    assert_eq!(first.values, vec!["7", "12"]);

    let second = extract(&first.text);
    assert!(second.values.is_empty(), "second pass must find nothing");
    assert_eq!(second.text, first.text, "second pass must not mutate");
    assert_eq!(second.summary(), "No magic number found!");
}

// Report order is first-encountered, distinct.
#[test]
fn test_report_order_first_encountered() {
    let out = extract("class C { void m() { a(9); b(3); c(9); d(1); } }");
    assert_eq!(out.values, vec!["9", "3", "1"]);
    assert_eq!(out.summary(), "Extracted: 9;3;1;");
}

// Values that are substrings of each other are still distinct entries.
#[test]
fn test_report_keeps_substring_values_distinct() {
    let out = extract("class C { void m() { a(17); b(7); } }");
    assert_eq!(out.values, vec!["17", "7"]);
    assert!(out.text.contains("MAGIC_NUMBER_17 = 17;"));
    assert!(out.text.contains("MAGIC_NUMBER_7 = 7;"));
}

// --- EXCLUSION TESTS ---

#[test]
fn test_line_comment_literal_excluded() {
    let out = extract("class C {\n\t// retry limit is 42 by default\n\tvoid m() {}\n}");
    assert!(out.values.is_empty());
    assert!(!out.text.contains("MAGIC_NUMBER_42"));
}

#[test]
fn test_block_comment_literal_excluded() {
    let out = extract("class C { /* holds 42 entries */ void m() {} }");
    assert!(out.values.is_empty());
}

#[test]
fn test_identifier_digits_excluded() {
    let out = extract("class C { void m() { var42 = var42; } }");
    assert!(out.values.is_empty());
    assert_eq!(out.text, "class C { void m() { var42 = var42; } }");
}

#[test]
fn test_mixed_comment_and_code() {
    // Same value in a comment and in code: the code occurrence is
    // rewritten, the comment is untouched.
    let out = extract("class C {\n\t// uses 8 workers\n\tvoid m() { spawn(8); }\n}");
    assert_eq!(out.values, vec!["8"]);
    assert!(out.text.contains("// uses 8 workers"));
    assert!(out.text.contains("spawn(MAGIC_NUMBER_8);"));
}

// --- END-TO-END SCENARIOS ---

// A literal that is the value of a pre-existing declaration is excluded
// entirely - nothing inserted, nothing replaced.
#[test]
fn test_scenario_pre_existing_declaration_untouched() {
    let source = "class C { void m(){ int x = 7; } }";
    let out = extract(source);
    assert!(out.values.is_empty());
    assert_eq!(out.text, source);
}

// Type-aware grammar recognizes a double declaration.
#[test]
fn test_scenario_double_declaration_excluded() {
    let source = "class C { double d = 3.14; }";
    let out = extract(source);
    assert!(out.values.is_empty());
    assert_eq!(out.text, source);
}

// No digits at all.
#[test]
fn test_scenario_no_digits() {
    let source = "class C { void m() { log(name); } }";
    let out = extract(source);
    assert!(out.values.is_empty());
    assert_eq!(out.text, source);
    assert_eq!(out.summary(), "No magic number found!");
}

// Digits inside string quotes.
#[test]
fn test_scenario_string_literal_excluded() {
    let source = "class C { void m() { set(\"2024\"); } }";
    let out = extract(source);
    assert!(out.values.is_empty());
    assert_eq!(out.text, source);
}

#[test]
fn test_char_literal_excluded() {
    let source = "class C { void m() { put('7'); } }";
    let out = extract(source);
    assert!(out.values.is_empty());
}

// --- TYPE INFERENCE ---

#[test]
fn test_typed_declarations_from_suffixes() {
    let out = extract("class C { void m() { a(2.5); b(3l); c(4f); } }");
    assert_eq!(out.values, vec!["2.5", "3l", "4f"]);
    assert!(out.text.contains("private static final double MAGIC_NUMBER_2_5 = 2.5;"));
    assert!(out.text.contains("private static final long MAGIC_NUMBER_3l = 3l;"));
    assert!(out.text.contains("private static final float MAGIC_NUMBER_4f = 4f;"));
}

#[test]
fn test_decimal_name_encodes_dot_as_underscore() {
    let out = extract("class C { void m() { area(3.14); } }");
    assert_eq!(out.values, vec!["3.14"]);
    assert!(out.text.contains("area(MAGIC_NUMBER_3_14);"));
}

// --- STRUCTURE OF THE REWRITE ---

#[test]
fn test_declarations_inserted_inside_first_brace() {
    let out = extract("class C { void m() { a(1); b(2); } }");
    // Every declaration sits between the class brace and the method, each
    // on its own indented line.
    let brace = out.text.find('{').unwrap();
    let method = out.text.find("void m").unwrap();
    for decl in ["MAGIC_NUMBER_1 = 1;", "MAGIC_NUMBER_2 = 2;"] {
        let pos = out.text.find(decl).unwrap();
        assert!(pos > brace && pos < method, "declaration placed inside the outer scope");
    }
    assert!(out.text.contains("{\n\tprivate static final int"));
}

#[test]
fn test_later_values_declared_closest_to_brace() {
    // Each insertion lands at the same anchor, so the most recent
    // declaration sits directly after the brace.
    let out = extract("class C { void m() { a(1); b(2); } }");
    let one = out.text.find("MAGIC_NUMBER_1 = 1;").unwrap();
    let two = out.text.find("MAGIC_NUMBER_2 = 2;").unwrap();
    assert!(two < one);
}

#[test]
fn test_many_values_all_tracked() {
    let source = "class C { void m() { a(1); b(2); c(3); d(4); e(5); f(1); g(3); } }";
    let out = extract(source);
    assert_eq!(out.values, vec!["1", "2", "3", "4", "5"]);
    for v in &out.values {
        assert_eq!(
            out.text
                .matches(&format!("MAGIC_NUMBER_{v} = {v};"))
                .count(),
            1
        );
    }
    // No raw literal survives outside the declarations.
    assert!(out.text.contains("f(MAGIC_NUMBER_1);"));
    assert!(out.text.contains("g(MAGIC_NUMBER_3);"));
}

// A pre-existing declaration that already uses a generated name: no new
// insertion, but occurrences are still replaced with that name.
#[test]
fn test_collision_with_pre_existing_generated_name() {
    let source = "class C {\n\tint MAGIC_NUMBER_7 = 7;\n\tvoid m() { a(7); }\n}";
    let out = extract(source);
    assert_eq!(out.values, vec!["7"]);
    assert!(out.text.contains("a(MAGIC_NUMBER_7);"));
    assert_eq!(
        out.text.matches("MAGIC_NUMBER_7 = 7;").count(),
        1,
        "the pre-existing declaration is reused, not duplicated"
    );
}

// --- GRAMMAR VARIANTS ---

#[test]
fn test_untyped_grammar_treats_bare_assignment_as_declaration() {
    let options = ExtractOptions {
        declaration_grammar: DeclarationGrammar::Untyped,
        ..ExtractOptions::default()
    };
    let source = "class C { void m() { x = 7; } }";
    let out = extract_with(source, &options);
    assert!(out.values.is_empty());
    assert_eq!(out.text, source);
}

#[test]
fn test_int_only_grammar_ignores_long_declarations() {
    let options = ExtractOptions {
        declaration_grammar: DeclarationGrammar::IntOnly,
        ..ExtractOptions::default()
    };
    let out = extract_with("class C { int a = 1; long b = 8; }", &options);
    // `int a = 1;` is a declaration; `long b = 8;` is not, so 8 is magic.
    assert_eq!(out.values, vec!["8"]);
    assert!(out.text.contains("long b = MAGIC_NUMBER_8;"));
    assert!(out.text.contains("int a = 1;"));
}

#[test]
fn test_bare_digits_grammar_splits_decimals() {
    let options = ExtractOptions {
        literal_grammar: LiteralGrammar::BareDigits,
        declaration_grammar: DeclarationGrammar::Untyped,
        ..ExtractOptions::default()
    };
    let out = extract_with("class C { void m() { f(250); } }", &options);
    assert_eq!(out.values, vec!["250"]);
    assert!(out.text.contains("f(MAGIC_NUMBER_250);"));
}

#[test]
fn test_custom_indent() {
    let options = ExtractOptions {
        indent: "    ".to_string(),
        ..ExtractOptions::default()
    };
    let out = extract_with("class C { void m() { a(6); } }", &options);
    assert!(out.text.contains("{\n    private static final int MAGIC_NUMBER_6 = 6;"));
}

// --- ERROR PATHS ---

#[test]
fn test_empty_input() {
    assert!(matches!(
        extract_magic_numbers(""),
        Err(MagicnumError::EmptyInput)
    ));
}

#[test]
fn test_no_anchor_with_magic_number() {
    assert!(matches!(
        extract_magic_numbers("value = compute(99)"),
        Err(MagicnumError::NoInsertionAnchor)
    ));
}

#[test]
fn test_no_anchor_without_magic_number_succeeds() {
    let out = extract("nothing numeric here");
    assert!(out.values.is_empty());
}

// A prefix that leaves a digit exposed at the head of the constant name
// would make every replacement re-scan as a literal; the session must
// refuse the options instead of rewriting forever.
#[test]
fn test_prefix_that_cannot_shield_digits_is_rejected() {
    let source = "class C { void m() { a(7); } }";
    for prefix in ["", "V2", "X."] {
        let options = ExtractOptions {
            prefix: prefix.to_string(),
            ..ExtractOptions::default()
        };
        assert!(
            matches!(
                extract_magic_numbers_with(source, &options),
                Err(MagicnumError::InvalidPrefix { .. })
            ),
            "prefix {prefix:?} must be rejected"
        );
    }
}

#[test]
fn test_alphabetic_prefix_is_accepted() {
    let options = ExtractOptions {
        prefix: "CONST".to_string(),
        ..ExtractOptions::default()
    };
    let out = extract_with("class C { void m() { a(7); } }", &options);
    assert_eq!(out.values, vec!["7"]);
    assert!(out.text.contains("a(CONST7);"));
}

// --- STABILITY ---

#[test]
fn test_larger_session_remains_consistent() {
    // A denser input: comments, strings, identifiers, declarations and
    // repeated values all interleaved.
    let source = concat!(
        "class Config {\n",
        "\tint port = 8080;\n",
        "\t// timeout of 30 seconds\n",
        "\tString tag = \"v2\";\n",
        "\tvoid apply() {\n",
        "\t\tsetRetries(3);\n",
        "\t\tsetTimeout(30);\n",
        "\t\tsetBackoff(3);\n",
        "\t}\n",
        "}\n",
    );
    let out = extract(source);
    assert_eq!(out.values, vec!["3", "30"]);
    assert!(out.text.contains("int port = 8080;"), "declaration untouched");
    assert!(out.text.contains("// timeout of 30 seconds"), "comment untouched");
    assert!(out.text.contains("setRetries(MAGIC_NUMBER_3);"));
    assert!(out.text.contains("setTimeout(MAGIC_NUMBER_30);"));
    assert!(out.text.contains("setBackoff(MAGIC_NUMBER_3);"));

    // And the whole thing is idempotent.
    let again = extract(&out.text);
    assert!(again.values.is_empty());
    assert_eq!(again.text, out.text);
}
