use std::fs;

use symrun::{
    ast::{SimpleExpr, Type},
    interpreter::{executor::Executor, lexer::Lexer, parser::core::parse_function},
    run_source,
};
use walkdir::WalkDir;

fn parse(src: &str) -> symrun::ast::Func {
    parse_function(&mut Lexer::new(src)).unwrap_or_else(|e| panic!("parse failed for {src:?}: {e}"))
}

fn paths(src: &str) -> Vec<symrun::interpreter::executor::PathResult> {
    Executor::new(parse(src)).unwrap_or_else(|e| panic!("executor rejected {src:?}: {e}"))
                             .run()
                             .unwrap_or_else(|e| panic!("execution failed for {src:?}: {e}"))
}

fn assert_parse_failure(src: &str) {
    if parse_function(&mut Lexer::new(src)).is_ok() {
        panic!("parsing succeeded but was expected to fail: {src:?}")
    }
}

#[test]
fn straight_line_function_has_single_true_path() {
    let results = paths("f(int x, bool y): bool { return y }");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].condition, "true");
    assert_eq!(results[0].output, "'y'");

    let names: Vec<&str> = results[0].memory.iter().map(|var| var.name.as_str()).collect();
    let values: Vec<&str> = results[0].memory.iter().map(|var| var.value.as_str()).collect();
    assert_eq!(names, ["x", "y"]);
    assert_eq!(values, ["'x'", "'y'"]);
}

#[test]
fn assignment_substitutes_into_memory() {
    let results = paths("f(int x): int { x = x + 1 return x }");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].memory[0].value, "'x' + 1");
    assert_eq!(results[0].output, "'x' + 1");
}

#[test]
fn single_conditional_forks_two_paths() {
    let results = paths("f(int x): int { if (x > 0) { x = 1 } else { x = 2 } return x }");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].condition, "true && ('x' > 0)");
    assert_eq!(results[0].output, " 1");
    assert_eq!(results[1].condition, "true && !('x' > 0)");
    assert_eq!(results[1].output, " 2");
}

#[test]
fn conditional_nested_in_true_branch_yields_three_paths() {
    let src = "f(int x, int y): int {
        if (x > 0) { if (y > 0) { x = 1 } else { x = 2 } } else { x = 3 }
        return x
    }";
    let results = paths(src);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].condition, "true && ('x' > 0) && ('y' > 0)");
    assert_eq!(results[1].condition, "true && ('x' > 0) && !('y' > 0)");
    assert_eq!(results[2].condition, "true && !('x' > 0)");
    assert_eq!(results[0].output, " 1");
    assert_eq!(results[1].output, " 2");
    assert_eq!(results[2].output, " 3");
}

#[test]
fn two_sequential_conditionals_yield_four_paths() {
    let src = "f(int x, int y): int {
        if (x > 0) { x = 1 } else { x = 2 }
        if (y > 0) { y = 1 } else { y = 2 }
        return x
    }";
    let results = paths(src);

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].condition, "true && ('x' > 0) && ('y' > 0)");
    assert_eq!(results[1].condition, "true && !('x' > 0) && ('y' > 0)");
    assert_eq!(results[2].condition, "true && ('x' > 0) && !('y' > 0)");
    assert_eq!(results[3].condition, "true && !('x' > 0) && !('y' > 0)");
}

#[test]
fn literal_only_expression_renders_identically_on_every_path() {
    let results = paths("f(int x): int { if (x > 0) { x = 1 } else { x = 2 } return 4 + 5 }");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].output, " 4 + 5");
    assert_eq!(results[1].output, " 4 + 5");
}

#[test]
fn later_return_overwrites_earlier_one() {
    let results = paths("f(int x): int { return x return 1 }");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].output, " 1");
}

#[test]
fn statements_after_a_return_still_execute() {
    let results = paths("f(int x): int { return x x = 7 }");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].memory[0].value, " 7");
    assert_eq!(results[0].output, " 7");
}

#[test]
fn branch_conditions_use_prebranch_memory() {
    let results = paths("f(int x): int { if (x > 0) { x = x + 1 } else { x = x - 1 } return x }");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].condition, "true && ('x' > 0)");
    assert_eq!(results[0].output, "'x' + 1");
    assert_eq!(results[1].condition, "true && !('x' > 0)");
    assert_eq!(results[1].output, "'x' - 1");
}

#[test]
fn returns_inside_both_branches_are_explored() {
    let results = paths("f(int x): int { if (x > 0) { return x } else { return x } }");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].output, "'x'");
    assert_eq!(results[0].condition, "true && ('x' > 0)");
    assert_eq!(results[1].output, "'x'");
    assert_eq!(results[1].condition, "true && !('x' > 0)");
}

#[test]
fn boolean_parameter_can_be_a_whole_condition() {
    let results = paths("f(bool b, int x): int { if (b) { x = 1 } else { x = 2 } return x }");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].condition, "true && ('b')");
    assert_eq!(results[1].condition, "true && !('b')");
}

#[test]
fn operator_chains_render_flat_and_left_associative() {
    let results = paths("f(int x): int { return x - 2 + 1 }");

    assert_eq!(results[0].output, "'x' - 2 + 1");
}

#[test]
fn variable_payloads_render_without_a_separator() {
    let results = paths("f(int x, int y): int { return x + y }");

    assert_eq!(results[0].output, "'x' +'y'");
}

#[test]
fn empty_parameter_list_parses() {
    let report = run_source("f(): int { return 5 }").unwrap();

    assert_eq!(report, "{\noutput:  5\ncondition: true\n}\n");
}

#[test]
fn report_format_lists_memory_output_and_condition() {
    let report = run_source("f(int x): int { if (x > 0) { x = x + 1 } else { x = x - 1 } return x }").unwrap();

    assert_eq!(report,
               "{\nx = 'x' + 1\noutput: 'x' + 1\ncondition: true && ('x' > 0)\n}\n\
                {\nx = 'x' - 1\noutput: 'x' - 1\ncondition: true && !('x' > 0)\n}\n");
}

#[test]
fn literals_carry_their_type_tags() {
    let func = parse("f(bool b): bool { return true }");
    let ret = func.body.return_expression.unwrap();
    assert_eq!(ret.return_type, Type::Bool);
    assert_eq!(ret.simple, SimpleExpr::Literal("true".to_string()));

    let func = parse("f(int x): int { return 5 }");
    let ret = func.body.return_expression.unwrap();
    assert_eq!(ret.return_type, Type::Int);
    assert_eq!(ret.simple, SimpleExpr::Literal("5".to_string()));
}

#[test]
fn missing_return_fails_at_executor_construction() {
    let func = parse("f(int x): int { x = x }");
    assert!(Executor::new(func).is_err());
}

#[test]
fn missing_closing_paren_is_a_parse_error() {
    assert_parse_failure("f(int x: int { return x }");
}

#[test]
fn keyword_in_function_name_position_is_rejected() {
    assert_parse_failure("if(int x): int { return x }");
    assert_parse_failure("int(int x): int { return x }");
}

#[test]
fn undeclared_assignment_target_is_rejected() {
    assert_parse_failure("f(int x): int { y = 1 return x }");
}

#[test]
fn undeclared_variable_in_expression_is_rejected() {
    assert_parse_failure("f(int x): int { return z }");
}

#[test]
fn duplicate_parameter_names_are_rejected() {
    assert_parse_failure("f(int x, bool x): int { return x }");
}

#[test]
fn missing_else_is_a_parse_error() {
    assert_parse_failure("f(int x): int { if (x > 0) { x = 1 } return x }");
}

#[test]
fn invalid_characters_fail_only_where_a_rule_requires_otherwise() {
    assert_parse_failure("f(int x): int { return x; }");
    assert_parse_failure("F(int x): int { return x }");
}

#[test]
fn demo_programs_match_recorded_reports() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "sym"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
            panic!("Failed to read the recorded report for {path:?}: {e}")
        });

        count += 1;
        let report = run_source(&source).unwrap_or_else(|e| panic!("Demo {path:?} failed: {e}"));
        assert_eq!(report, expected, "demo {path:?} produced a different report");
    }

    assert!(count > 0, "No demo programs found in demos/");
}
