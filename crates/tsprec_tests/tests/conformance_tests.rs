//! Parenthesization conformance suite.
//!
//! Each case builds a tree the way a transform would and asks whether a
//! printer must parenthesize a child. Results are grouped by category and
//! summarized; every case must agree with the expected answer.

use tsprec_ast::{NodeFactory, SyntaxKind};
use tsprec_core::NodeArena;
use tsprec_precedence::*;

/// Result of a single conformance case.
#[derive(Debug, Clone)]
struct CaseResult {
    name: String,
    category: String,
    passed: bool,
    error: Option<String>,
}

/// Run a single case: build its tree in a fresh arena and compare the
/// predicate's answer to `expected`.
fn run_case(
    name: &str,
    category: &str,
    expected: bool,
    build: fn(NodeFactory<'_>) -> bool,
) -> CaseResult {
    let outcome = std::panic::catch_unwind(|| {
        let arena = NodeArena::new();
        build(NodeFactory::new(&arena))
    });

    match outcome {
        Ok(actual) => CaseResult {
            name: name.to_string(),
            category: category.to_string(),
            passed: actual == expected,
            error: (actual != expected).then(|| format!("expected {expected}, got {actual}")),
        },
        Err(e) => {
            let msg = if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            CaseResult {
                name: name.to_string(),
                category: category.to_string(),
                passed: false,
                error: Some(msg),
            }
        }
    }
}

struct ConformanceSuite {
    results: Vec<CaseResult>,
}

impl ConformanceSuite {
    fn new() -> Self {
        Self { results: Vec::new() }
    }

    fn add_case(
        &mut self,
        name: &str,
        category: &str,
        expected: bool,
        build: fn(NodeFactory<'_>) -> bool,
    ) {
        self.results.push(run_case(name, category, expected, build));
    }

    fn failures(&self) -> Vec<&CaseResult> {
        self.results.iter().filter(|r| !r.passed).collect()
    }

    fn print_summary(&self) {
        let total = self.results.len();
        let passed = self.results.iter().filter(|r| r.passed).count();

        println!("\n=== Parenthesization Conformance Summary ===");
        println!("Total cases: {}", total);
        println!("Passed: {}", passed);
        println!("Failed: {}", total - passed);

        let mut categories: std::collections::BTreeMap<&str, (usize, usize)> =
            std::collections::BTreeMap::new();
        for result in &self.results {
            let entry = categories.entry(result.category.as_str()).or_insert((0, 0));
            if result.passed {
                entry.0 += 1;
            }
            entry.1 += 1;
        }

        println!("\n--- Results by Category ---");
        for (category, (passed_count, total_count)) in &categories {
            println!("  {}: {}/{}", category, passed_count, total_count);
        }

        let failures = self.failures();
        if !failures.is_empty() {
            println!("\n--- Failed Cases ---");
            for failure in &failures {
                println!(
                    "  [{}] {}: {}",
                    failure.category,
                    failure.name,
                    failure.error.as_deref().unwrap_or("Unknown error")
                );
            }
        }
    }
}

// ============================================================================
// Cases
// ============================================================================

#[test]
fn test_parenthesization_conformance() {
    let mut suite = ConformanceSuite::new();

    // ========================================================================
    // Category: binary operands
    // ========================================================================
    suite.add_case("(a + b) * c", "binary", true, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(
            SyntaxKind::AsteriskToken,
            f.binary(a, SyntaxKind::PlusToken, a),
            true,
            None,
        )
    });
    suite.add_case("a * b + c", "binary", false, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(
            SyntaxKind::PlusToken,
            f.binary(a, SyntaxKind::AsteriskToken, a),
            true,
            None,
        )
    });
    suite.add_case("a - (b - c)", "binary", true, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(
            SyntaxKind::MinusToken,
            f.binary(a, SyntaxKind::MinusToken, a),
            false,
            Some(a),
        )
    });
    suite.add_case("a * (b * c)", "binary", false, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(
            SyntaxKind::AsteriskToken,
            f.binary(a, SyntaxKind::AsteriskToken, a),
            false,
            Some(a),
        )
    });
    suite.add_case("a / (b * c)", "binary", true, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(
            SyntaxKind::SlashToken,
            f.binary(a, SyntaxKind::AsteriskToken, a),
            false,
            Some(a),
        )
    });
    suite.add_case("(a ** b) ** c", "binary", true, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(
            SyntaxKind::AsteriskAsteriskToken,
            f.binary(a, SyntaxKind::AsteriskAsteriskToken, a),
            true,
            None,
        )
    });
    suite.add_case("'a' + ('b' + 'c')", "binary", false, |f| {
        let right = f.binary(f.string_literal("b"), SyntaxKind::PlusToken, f.string_literal("c"));
        binary_operand_needs_parentheses(
            SyntaxKind::PlusToken,
            right,
            false,
            Some(f.string_literal("a")),
        )
    });
    suite.add_case("a + (b + c)", "binary", true, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(
            SyntaxKind::PlusToken,
            f.binary(a, SyntaxKind::PlusToken, a),
            false,
            Some(a),
        )
    });
    suite.add_case("a || (() => b)", "binary", true, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(
            SyntaxKind::BarBarToken,
            f.arrow_function_expression_body(a),
            false,
            Some(a),
        )
    });
    suite.add_case("a = () => b", "binary", false, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(
            SyntaxKind::EqualsToken,
            f.arrow_function_expression_body(a),
            false,
            Some(a),
        )
    });
    suite.add_case("a = yield b", "binary", false, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(
            SyntaxKind::EqualsToken,
            f.yield_expression(false, Some(a)),
            false,
            Some(a),
        )
    });
    suite.add_case("(a, b) + c", "binary", true, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(SyntaxKind::PlusToken, f.comma_list(&[a, a]), true, None)
    });
    suite.add_case("(a as T) < b", "binary", false, |f| {
        let a = f.identifier("a");
        let asserted = f.as_expression(a, f.type_reference("T", None));
        binary_operand_needs_parentheses(SyntaxKind::LessThanToken, asserted, true, None)
    });
    suite.add_case("(a ? b : c) ?? d", "binary", true, |f| {
        let a = f.identifier("a");
        binary_operand_needs_parentheses(
            SyntaxKind::QuestionQuestionToken,
            f.conditional(a, a, a),
            true,
            None,
        )
    });

    // ========================================================================
    // Category: member access and new
    // ========================================================================
    suite.add_case("(new A).b", "access", true, |f| {
        left_side_of_access_needs_parentheses(f.new_expression(f.identifier("A"), None), false)
    });
    suite.add_case("new A().b", "access", false, |f| {
        left_side_of_access_needs_parentheses(f.new_expression(f.identifier("A"), Some(&[])), false)
    });
    suite.add_case("(a?.b).c", "access", true, |f| {
        left_side_of_access_needs_parentheses(
            f.property_access_chain(f.identifier("a"), true, "b"),
            false,
        )
    });
    suite.add_case("a?.b?.c", "access", false, |f| {
        left_side_of_access_needs_parentheses(
            f.property_access_chain(f.identifier("a"), true, "b"),
            true,
        )
    });
    suite.add_case("(await a).b", "access", true, |f| {
        left_side_of_access_needs_parentheses(f.await_expression(f.identifier("a")), false)
    });
    suite.add_case("new (f())", "new", true, |f| {
        expression_of_new_needs_parentheses(f.call(f.identifier("f"), &[]))
    });
    suite.add_case("new (f().g)", "new", true, |f| {
        expression_of_new_needs_parentheses(f.property_access(f.call(f.identifier("f"), &[]), "g"))
    });
    suite.add_case("new a.b.C", "new", false, |f| {
        expression_of_new_needs_parentheses(
            f.property_access(f.property_access(f.identifier("a"), "b"), "C"),
        )
    });

    // ========================================================================
    // Category: statements and conditions
    // ========================================================================
    suite.add_case("({}).toString()", "statement", true, |f| {
        let callee = f.property_access(f.object_literal(&[]), "toString");
        expression_statement_needs_parentheses(f.call(callee, &[]))
    });
    suite.add_case("(function () {})()", "statement", true, |f| {
        expression_statement_needs_parentheses(f.call(f.function_expression(None), &[]))
    });
    suite.add_case("a = {}", "statement", false, |f| {
        expression_statement_needs_parentheses(
            f.binary(f.identifier("a"), SyntaxKind::EqualsToken, f.object_literal(&[])),
        )
    });
    suite.add_case("(a = b) ? c : d", "condition", true, |f| {
        let a = f.identifier("a");
        condition_of_conditional_needs_parentheses(f.binary(a, SyntaxKind::EqualsToken, a))
    });
    suite.add_case("a || b ? c : d", "condition", false, |f| {
        let a = f.identifier("a");
        condition_of_conditional_needs_parentheses(f.binary(a, SyntaxKind::BarBarToken, a))
    });
    suite.add_case("f((a, b))", "argument", true, |f| {
        let a = f.identifier("a");
        disallowed_comma_needs_parentheses(f.binary(a, SyntaxKind::CommaToken, a))
    });
    suite.add_case("f(...a)", "argument", false, |f| {
        disallowed_comma_needs_parentheses(f.spread(f.identifier("a")))
    });

    // ========================================================================
    // Category: types
    // ========================================================================
    suite.add_case("(A | B)[]", "type", true, |f| {
        let a = f.type_reference("A", None);
        array_element_type_needs_parentheses(f.union_type(&[a, a]))
    });
    suite.add_case("(typeof x)[]", "type", true, |f| {
        array_element_type_needs_parentheses(f.type_query("x"))
    });
    suite.add_case("A[][]", "type", false, |f| {
        array_element_type_needs_parentheses(f.array_type(f.type_reference("A", None)))
    });
    suite.add_case("(A | B) & C", "type", true, |f| {
        let a = f.type_reference("A", None);
        type_needs_parentheses(f.union_type(&[a, a]), TypePrecedence::Intersection)
    });
    suite.add_case("keyof A[]", "type", false, |f| {
        type_needs_parentheses(
            f.array_type(f.type_reference("A", None)),
            TypePrecedence::TypeOperator,
        )
    });
    suite.add_case("(() => A) extends B ? C : D", "type", true, |f| {
        check_type_needs_parentheses(f.function_type(f.type_reference("A", None)))
    });
    suite.add_case("(infer U extends A) | B", "type", true, |f| {
        let a = f.type_reference("A", None);
        type_needs_parentheses(f.infer_type("U", Some(a)), TypePrecedence::Union)
    });

    suite.print_summary();
    let failures = suite.failures();
    assert!(failures.is_empty(), "{} conformance cases failed", failures.len());
}
