use std::fs;

use cfgxml::{
    ConfigError, Entry, Value, parse_config, parse_value, translate,
    translator::{evaluator::core::Namespace, parser::literal::MAX_NESTING_DEPTH},
};
use num::BigInt;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_config_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = translate(&code) {
                panic!("Config example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No config examples found in book/src");
}

fn extract_config_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```cfgxml") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_parses_to(src: &str, expected: &[Entry]) {
    match parse_config(src) {
        Ok(entries) => assert_eq!(entries, expected),
        Err(e) => panic!("Config failed: {e}"),
    }
}

fn assert_failure(src: &str) -> ConfigError {
    match parse_config(src) {
        Ok(entries) => panic!("Config succeeded but was expected to fail: {entries:?}"),
        Err(e) => e,
    }
}

#[test]
#[allow(clippy::approx_constant)]
fn decimal_constant() {
    assert_parses_to("var pi := 3.14159", &[Entry::constant("pi", 3.14159)]);
}

#[test]
fn integer_constants() {
    assert_parses_to("var answer := 42", &[Entry::constant("answer", 42_i64)]);
    assert_parses_to("var offset := -7", &[Entry::constant("offset", -7_i64)]);
    assert_parses_to("var padded := 007", &[Entry::constant("padded", 7_i64)]);
    assert_parses_to("var zero := -0", &[Entry::constant("zero", 0_i64)]);
}

#[test]
fn array_constant() {
    assert_parses_to("var numbers := <<1, 2, 3>>",
                     &[Entry::constant("numbers", vec![1_i64, 2, 3])]);
}

#[test]
fn evaluation_after_declaration() {
    assert_parses_to("\n        var g := 9.81\n        ![g]\n        ",
                     &[Entry::constant("g", 9.81), Entry::evaluation("g", 9.81)]);
}

#[test]
fn whitespace_around_walrus_is_optional() {
    assert_parses_to("var a:=1\nvar b :=2\nvar c:= 3\nvar\t\td \t:=\t4",
                     &[Entry::constant("a", 1_i64),
                       Entry::constant("b", 2_i64),
                       Entry::constant("c", 3_i64),
                       Entry::constant("d", 4_i64)]);
}

#[test]
fn identifiers_may_contain_digits_underscores_and_keywords() {
    assert_parses_to("var max_depth_2 := 8\nvar var := 1\nvar variable := 2\n![var]",
                     &[Entry::constant("max_depth_2", 8_i64),
                       Entry::constant("var", 1_i64),
                       Entry::constant("variable", 2_i64),
                       Entry::evaluation("var", 1_i64)]);
}

#[test]
fn mixed_and_nested_arrays() {
    let expected = Value::from(vec![Value::from(vec![1_i64]),
                                    Value::Real(2.5),
                                    Value::from(vec![Value::from(vec![-3_i64])])]);

    assert_parses_to("var nested := << <<1>> , 2.5,<<<<-3>>>> >>",
                     &[Entry::constant("nested", expected)]);
}

#[test]
fn empty_arrays() {
    let empty = Value::Array(Vec::new());

    assert_eq!(parse_value("<<>>").unwrap(), empty);
    assert_eq!(parse_value("<<   >>").unwrap(), empty);
    assert_eq!(parse_value("<<<<>>>>").unwrap(), Value::from(vec![empty]));
}

#[test]
fn nested_arrays_with_inner_commas_are_rejected() {
    let err = assert_failure("var m := <<<<1, 2>>, <<3, 4>>>>");
    assert_eq!(err,
               ConfigError::InvalidValue { text: "<<1".to_string(),
                                           line: 1, });
}

#[test]
fn trailing_comma_is_rejected() {
    let err = assert_failure("var a := <<1, 2,>>");
    assert_eq!(err,
               ConfigError::InvalidValue { text: String::new(),
                                           line: 1, });
}

#[test]
fn malformed_numbers_are_invalid_values() {
    for literal in [".5", "1.", "1e3", "+1", "1.2.3", "--1", "1 2", "0x10", "true", "\"x\""] {
        let err = assert_failure(&format!("var x := {literal}"));
        assert!(matches!(err, ConfigError::InvalidValue { line: 1, .. }),
                "{literal} gave {err:?}");
    }
}

#[test]
fn integers_keep_full_precision() {
    let big: BigInt = "99999999999999999999".parse().unwrap();
    assert_parses_to("var big := 99999999999999999999\n![big]",
                     &[Entry::constant("big", big.clone()), Entry::evaluation("big", big)]);

    assert_eq!(translate("var big := -123456789012345678901234567890").unwrap(),
               concat!("<config><constant name=\"big\">",
                       "<value>-123456789012345678901234567890</value>",
                       "</constant></config>"));

    assert_parses_to("var small := -9223372036854775808",
                     &[Entry::constant("small", i64::MIN)]);
}

fn nested(depth: usize) -> String {
    format!("{}1{}", "<<".repeat(depth), ">>".repeat(depth))
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let value = parse_value(&nested(MAX_NESTING_DEPTH)).unwrap();
    assert_eq!(value.depth(), MAX_NESTING_DEPTH);
}

#[test]
fn nesting_beyond_the_limit_is_rejected() {
    assert_eq!(parse_value(&nested(MAX_NESTING_DEPTH + 1)),
               Err(ConfigError::NestingTooDeep { line: 1 }));

    let err = assert_failure(&format!("var ok := 1\nvar deep := {}", nested(5000)));
    assert_eq!(err, ConfigError::NestingTooDeep { line: 2 });
    assert_eq!(err.to_string(), "Error on line 2: arrays nested too deeply");
}

#[test]
fn missing_walrus_is_syntax_error() {
    let err = assert_failure("var pi = 3.14159");
    assert_eq!(err,
               ConfigError::SyntaxError { text: "var pi = 3.14159".to_string(),
                                          line: 1, });
}

#[test]
fn malformed_lines_are_syntax_errors() {
    for line in ["var := 1",
                 "var x :=",
                 "varx := 1",
                 "var 1x := 1",
                 "var x y := 1",
                 "x := 1",
                 "![ x ]",
                 "! [x]",
                 "![1]",
                 "<<1, 2>>",
                 "hello world"]
    {
        let err = assert_failure(line);
        assert!(matches!(err, ConfigError::SyntaxError { line: 1, .. }), "{line} gave {err:?}");
    }
}

#[test]
fn evaluation_ignores_text_after_bracket() {
    assert_parses_to("var g := 1\n![g] // note\n![g]x",
                     &[Entry::constant("g", 1_i64),
                       Entry::evaluation("g", 1_i64),
                       Entry::evaluation("g", 1_i64)]);

    let err = assert_failure("![missing] // note");
    assert_eq!(err,
               ConfigError::UndefinedConstant { name: "missing".to_string(),
                                                line: 1, });
}

#[test]
fn undefined_constant_is_error() {
    let err = assert_failure("![undefined]");
    assert_eq!(err,
               ConfigError::UndefinedConstant { name: "undefined".to_string(),
                                                line: 1, });
}

#[test]
fn evaluation_before_declaration_is_error() {
    let err = assert_failure("![late]\nvar late := 1");
    assert!(matches!(err, ConfigError::UndefinedConstant { line: 1, .. }));
}

#[test]
fn error_reports_source_line() {
    let err = assert_failure("// header\n\nvar a := 1\n![a]\nvar b := <<1, x>>");
    assert_eq!(err.line(), 5);
    assert_eq!(err.to_string(), "Error on line 5: invalid value: x");
}

#[test]
fn error_messages() {
    assert_eq!(assert_failure("var x = 1").to_string(),
               "Error on line 1: syntax error: var x = 1");
    assert_eq!(assert_failure("\n![nope]").to_string(),
               "Error on line 2: undefined constant: nope");
}

#[test]
fn redeclaration_does_not_rewrite_earlier_evaluations() {
    assert_parses_to("var x := 1\n![x]\nvar x := <<2>>\n![x]",
                     &[Entry::constant("x", 1_i64),
                       Entry::evaluation("x", 1_i64),
                       Entry::constant("x", vec![2_i64]),
                       Entry::evaluation("x", vec![2_i64])]);
}

#[test]
fn line_comments_and_blank_lines_are_skipped() {
    assert_parses_to("// first\n\n   // indented\n\t\nvar a := 1\n//![a] is not evaluated",
                     &[Entry::constant("a", 1_i64)]);
}

#[test]
fn block_comments_are_skipped_without_checking() {
    let src = "{{!--\nvar broken = !!\n![undefined]\n--}}\nvar a := 1";
    assert_parses_to(src, &[Entry::constant("a", 1_i64)]);
}

#[test]
fn single_line_block_comment() {
    assert_parses_to("{{!-- var a := 1 --}}\nvar b := 2", &[Entry::constant("b", 2_i64)]);
}

#[test]
fn block_comment_ends_on_line_ending_with_marker() {
    let src = "  {{!-- start\nstill comment --}} \nvar a := 1\n--}}";
    assert_eq!(assert_failure(src),
               ConfigError::SyntaxError { text: "--}}".to_string(),
                                          line: 4, });
}

#[test]
fn unterminated_block_comment_ends_the_document() {
    assert_parses_to("var a := 1\n{{!--\nvar b := 2\n![zzz]", &[Entry::constant("a", 1_i64)]);
}

#[test]
fn empty_document_has_no_entries() {
    assert_parses_to("", &[]);
    assert_parses_to("\n\n   \n", &[]);
}

#[test]
fn crlf_line_endings() {
    assert_parses_to("var a := 1\r\n![a]\r\n",
                     &[Entry::constant("a", 1_i64), Entry::evaluation("a", 1_i64)]);
}

#[test]
fn other_line_breaks_end_lines() {
    assert_parses_to("var a := 1\rvar b := 2\u{2028}![a]\u{0c}var c := 3\u{85}![b]\r",
                     &[Entry::constant("a", 1_i64),
                       Entry::constant("b", 2_i64),
                       Entry::evaluation("a", 1_i64),
                       Entry::constant("c", 3_i64),
                       Entry::evaluation("b", 2_i64)]);

    let err = assert_failure("var a := 1\r\n\r\n![b]");
    assert_eq!(err.line(), 3);
}

#[test]
fn unicode_whitespace_separates_tokens() {
    assert_parses_to("var\u{a0}a\u{3000}:=\u{a0}1\u{a0}",
                     &[Entry::constant("a", 1_i64)]);
}

#[test]
fn failure_returns_no_partial_entries() {
    let result = parse_config("var a := 1\nvar b := 2\n![c]\nvar d := 4");
    assert!(result.is_err());
}

#[test]
fn namespace_tracks_declarations() {
    let mut namespace = Namespace::new();
    assert!(namespace.is_empty());

    namespace.declare("a".to_string(), Value::from(1_i64));
    namespace.declare("a".to_string(), Value::from(2_i64));
    namespace.declare("b".to_string(), Value::from(vec![3_i64]));

    assert_eq!(namespace.len(), 2);
    assert_eq!(namespace.get("a"), Some(&Value::from(2_i64)));
    assert_eq!(namespace.evaluate("b".to_string(), 7).unwrap(),
               Entry::evaluation("b", vec![3_i64]));
    assert_eq!(namespace.evaluate("c".to_string(), 7).unwrap_err(),
               ConfigError::UndefinedConstant { name: "c".to_string(),
                                                line: 7, });
}

#[test]
fn example_translates() {
    let source = fs::read_to_string("tests/example.conf").expect("missing file");
    let expected = fs::read_to_string("tests/example.xml").expect("missing file");

    assert_eq!(translate(&source).unwrap(), expected.trim_end());
}
