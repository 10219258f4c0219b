use std::fs::{self};

use caesium::{LineResult, error::ErrorKind, interpreter::environment::Environment, run_line};
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

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut env = Environment::new();

            for line in code.lines() {
                let result = run_line(line, &mut env);
                let expected = line.split_once("# =>").map(|(_, e)| e.trim());

                if !matches_expectation(&result, expected) {
                    panic!("caesium example {} in {:?} failed on line {:?}\nexpected: {:?}\ngot: {:?}",
                           i + 1,
                           path,
                           line,
                           expected,
                           result);
                }
            }
        }
    }

    assert!(count > 0, "No caesium examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```caesium") {
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

/// A line with no `# =>` annotation must simply not fail.
fn matches_expectation(result: &LineResult, expected: Option<&str>) -> bool {
    match (expected, result) {
        (None, LineResult::Error(ErrorKind::EmptyExpression, _)) => true,
        (None, LineResult::Error(..)) => false,
        (None, _) => true,
        (Some("true"), LineResult::Value(true))
        | (Some("false"), LineResult::Value(false))
        | (Some("error"), LineResult::Error(..))
        | (Some("help"), LineResult::Help(_))
        | (Some("exit"), LineResult::Exit) => true,
        _ => false,
    }
}

fn eval(env: &mut Environment, src: &str) -> bool {
    match run_line(src, env) {
        LineResult::Value(value) => value,
        other => panic!("Line {src:?} did not produce a value: {other:?}"),
    }
}

fn assert_error(src: &str, kind: ErrorKind) {
    match run_line(src, &mut Environment::new()) {
        LineResult::Error(found, message) => {
            assert_eq!(found, kind, "Line {src:?} failed with {message:?}");
        },
        other => panic!("Line {src:?} succeeded with {other:?} but was expected to fail"),
    }
}

#[test]
fn new_environment_holds_only_literals() {
    let env = Environment::new();
    assert!(env.bindings().is_empty());
    assert_eq!([env.get("true"), env.get("1"), env.get("false"), env.get("0")],
               [Some(true), Some(true), Some(false), Some(false)]);
}

#[test]
fn literals_are_equal_valued() {
    let mut env = Environment::new();
    assert!(eval(&mut env, "true"));
    assert!(eval(&mut env, "1"));
    assert!(!eval(&mut env, "false"));
    assert!(!eval(&mut env, "0"));
}

#[test]
fn keywords_and_names_ignore_case() {
    let mut env = Environment::new();
    assert_eq!(eval(&mut env, "TrUe"), eval(&mut env, "true"));
    assert!(eval(&mut env, "X = true"));
    assert!(eval(&mut env, "x"));
    assert!(!eval(&mut env, "NOT x"));
}

#[test]
fn assignment_persists_until_reassigned() {
    let mut env = Environment::new();
    assert!(eval(&mut env, "x = true"));
    for _ in 0..3 {
        assert!(eval(&mut env, "x"));
    }
    assert!(!eval(&mut env, "x = false"));
    assert!(!eval(&mut env, "x"));
}

#[test]
fn chained_assignment_binds_every_name() {
    let mut env = Environment::new();
    assert!(eval(&mut env, "E_VAR = e_var2 = TRUE"));
    assert!(eval(&mut env, "e_var and E_VAR2"));
    assert!(!eval(&mut env, "quux = (foo = True) ^ (bar = True)"));
    assert!(eval(&mut env, "foo and bar and not quux"));
}

#[test]
fn reserved_names_cannot_be_assigned() {
    for src in ["true = false", "1 = 0", "and = true", "NOT = true", "exit = true",
                "random = false", "help = true", "HELP = false"]
    {
        assert_error(src, ErrorKind::ReservedName);
    }
}

#[test]
fn failed_assignment_leaves_environment_untouched() {
    let mut env = Environment::new();
    assert!(matches!(run_line("true = false", &mut env), LineResult::Error(..)));
    assert!(eval(&mut env, "true"));
    assert!(matches!(run_line("y = undefined_name", &mut env), LineResult::Error(..)));
    assert_eq!(env.get("y"), None);
}

#[test]
fn mixed_operators_nest_to_the_right() {
    let mut env = Environment::new();
    eval(&mut env, "a = false");
    eval(&mut env, "b = true");
    eval(&mut env, "c = false");
    assert!(!eval(&mut env, "a and b or c"));
    assert!(eval(&mut env, "(a and b) or b"));
}

#[test]
fn operators_accept_any_number_of_operands() {
    let mut env = Environment::new();
    assert!(eval(&mut env, "1 and 1 and 1 and 1"));
    assert!(!eval(&mut env, "1 & 1 && 1 and 0"));
    assert!(eval(&mut env, "0 or 0 or 1"));
    assert!(eval(&mut env, "1 ^ 1 ^ 0"));
    assert!(!eval(&mut env, "0 xor 0 xor 0"));
    assert!(eval(&mut env, "1 nand 1 nand 0"));
    assert!(!eval(&mut env, "0 nor 0 nor 1"));
}

#[test]
fn unmatched_parentheses_are_errors() {
    assert_error("(a and b", ErrorKind::UnmatchedParenthesis);
    assert_error("a)", ErrorKind::UnmatchedParenthesis);
    assert_error("((true)", ErrorKind::UnmatchedParenthesis);
}

#[test]
fn invalid_characters_are_reported() {
    match run_line("a + b", &mut Environment::new()) {
        LineResult::Error(ErrorKind::InvalidCharacter, message) => {
            assert_eq!(message, "Invalid syntax: \"+\".");
        },
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn malformed_lines_are_errors() {
    assert_error("", ErrorKind::EmptyExpression);
    assert_error("   # only a comment", ErrorKind::EmptyExpression);
    assert_error("true and", ErrorKind::InvalidSyntax);
    assert_error("true and and false", ErrorKind::InvalidSyntax);
    assert_error("or true", ErrorKind::InvalidSyntax);
    assert_error("not", ErrorKind::InvalidSyntax);
    assert_error("()", ErrorKind::InvalidSyntax);
    assert_error("true false", ErrorKind::InvalidSyntax);
    assert_error("(a) = true", ErrorKind::InvalidSyntax);
}

#[test]
fn deep_nesting_is_rejected_without_crashing() {
    let mut env = Environment::new();
    assert!(eval(&mut env, &format!("{}true", "not ".repeat(200))));
    assert!(eval(&mut env, &format!("{}true{}", "(".repeat(200), ")".repeat(200))));

    assert_error(&format!("{}true", "not ".repeat(10_000)), ErrorKind::InvalidSyntax);
    assert_error(&format!("{}true{}", "(".repeat(10_000), ")".repeat(10_000)),
                 ErrorKind::InvalidSyntax);
    assert_error(&format!("{}true", "x = ".repeat(10_000)), ErrorKind::InvalidSyntax);
}

#[test]
fn undefined_names_are_reported() {
    match run_line("Missing", &mut Environment::new()) {
        LineResult::Error(ErrorKind::UndefinedName, message) => {
            assert_eq!(message, "Undefined name \"Missing\".");
        },
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn exit_interrupts_evaluation_anywhere() {
    let mut env = Environment::new();
    assert_eq!(run_line("exit", &mut env), LineResult::Exit);
    assert_eq!(run_line("true and exit", &mut env), LineResult::Exit);
    assert_eq!(run_line("x = not (false or EXIT)", &mut env), LineResult::Exit);
    assert_eq!(env.get("x"), None);
}

#[test]
fn random_only_produces_booleans() {
    let mut env = Environment::new();
    for _ in 0..64 {
        assert!(matches!(run_line("random", &mut env), LineResult::Value(_)));
    }
    assert!(eval(&mut env, "random or true or random"));
}

#[test]
fn help_describes_operators_and_names() {
    let mut env = Environment::new();
    eval(&mut env, "door = false");

    let LineResult::Help(text) = run_line("help door", &mut env) else {
        panic!("help did not produce help text");
    };
    assert!(text.contains("door is a variable bound to false"));

    let LineResult::Help(text) = run_line("? XOR", &mut env) else {
        panic!("help did not produce help text");
    };
    assert!(text.starts_with("xor"));

    let LineResult::Help(text) = run_line("help", &mut env) else {
        panic!("help did not produce help text");
    };
    assert!(text.contains("door = false"));

    assert!(matches!(run_line("help nowhere", &mut env), LineResult::Help(_)));
    assert!(matches!(run_line("help a and b", &mut env), LineResult::Help(_)));
}

#[test]
fn comments_are_ignored() {
    let mut env = Environment::new();
    assert!(eval(&mut env, "true # or false"));
    assert!(!eval(&mut env, "  false  # and true"));
}
