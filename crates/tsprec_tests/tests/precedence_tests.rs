//! Expression precedence integration tests.
//!
//! Checks every expression variant against its expected tier and the
//! ordering properties printers and parsers rely on.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tsprec_ast::{Expression, NodeFactory, SyntaxKind};
use tsprec_core::NodeArena;
use tsprec_precedence::*;
use tsprec_tests::{climb, expression_cases, expression_variant_index, EXPRESSION_VARIANT_COUNT};

fn binary(text: &str) -> SyntaxKind {
    SyntaxKind::from_token_text(text).unwrap_or_else(|| panic!("no token for {text:?}"))
}

// ============================================================================
// Totality
// ============================================================================

#[test]
fn test_every_expression_variant_is_covered() {
    let arena = NodeArena::new();
    let f = NodeFactory::new(&arena);
    let covered: HashSet<usize> = expression_cases(f)
        .iter()
        .map(|case| expression_variant_index(case.expression))
        .collect();
    let missing: Vec<usize> = (0..EXPRESSION_VARIANT_COUNT)
        .filter(|index| !covered.contains(index))
        .collect();
    assert!(missing.is_empty(), "uncovered expression variants: {missing:?}");
}

#[test]
fn test_every_expression_has_expected_precedence() {
    let arena = NodeArena::new();
    let f = NodeFactory::new(&arena);
    for case in expression_cases(f) {
        assert_eq!(
            get_expression_precedence(case.expression),
            case.precedence,
            "{}",
            case.name
        );
    }
}

#[test]
fn test_expression_precedence_matches_operator_precedence() {
    let arena = NodeArena::new();
    let f = NodeFactory::new(&arena);
    for case in expression_cases(f) {
        let expression = case.expression;
        let direct = get_operator_precedence(
            expression.kind(),
            expression_operator(expression),
            expression_precedence_flags(expression),
        );
        assert_eq!(get_expression_precedence(expression), direct, "{}", case.name);
    }
}

#[test]
fn test_at_most_one_flag() {
    let arena = NodeArena::new();
    let f = NodeFactory::new(&arena);
    for case in expression_cases(f) {
        let flags = expression_precedence_flags(case.expression);
        assert!(flags.bits().count_ones() <= 1, "{}: {flags:?}", case.name);
    }
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_invalid_is_below_every_tier() {
    let arena = NodeArena::new();
    let f = NodeFactory::new(&arena);
    for case in expression_cases(f) {
        if case.precedence.is_valid() {
            assert!(OperatorPrecedence::Invalid < case.precedence, "{}", case.name);
            assert!(case.precedence >= OperatorPrecedence::LOWEST, "{}", case.name);
            assert!(case.precedence <= OperatorPrecedence::HIGHEST, "{}", case.name);
        }
    }
}

#[test]
fn test_binary_operator_table_is_monotonic() {
    let chain = ["??", "||", "&&", "|", "^", "&", "===", ">=", ">>>", "-", "%", "**"];
    let levels: Vec<OperatorPrecedence> = chain
        .iter()
        .map(|text| get_binary_operator_precedence(binary(text)))
        .collect();
    assert!(levels.windows(2).all(|w| w[0] < w[1]), "{levels:?}");
    assert!(levels[0] > OperatorPrecedence::Conditional);
    assert!(levels[levels.len() - 1] < OperatorPrecedence::Unary);
}

#[test]
fn test_binary_table_only_covers_binary_operators() {
    for &kind in SyntaxKind::ALL {
        let precedence = get_binary_operator_precedence(kind);
        if precedence.is_valid() {
            assert!(
                kind.is_binary_operator()
                    || kind == SyntaxKind::InKeyword
                    || kind == SyntaxKind::InstanceOfKeyword
                    || kind == SyntaxKind::AsKeyword
                    || kind == SyntaxKind::SatisfiesKeyword,
                "{kind} has binary precedence {precedence:?}"
            );
        }
    }
}

#[test]
fn test_assignment_tokens_in_binary_expressions() {
    for &kind in SyntaxKind::ALL {
        let precedence = get_operator_precedence(
            SyntaxKind::BinaryExpression,
            kind,
            OperatorPrecedenceFlags::NONE,
        );
        if kind.is_assignment_operator() {
            assert_eq!(precedence, OperatorPrecedence::Assignment, "{kind}");
            assert_eq!(get_binary_operator_precedence(kind), OperatorPrecedence::Invalid);
        } else if kind != SyntaxKind::CommaToken {
            assert_eq!(precedence, get_binary_operator_precedence(kind), "{kind}");
        }
    }
}

// ============================================================================
// Contextual tiers
// ============================================================================

#[test]
fn test_new_without_arguments_is_left_hand_side() {
    let arena = NodeArena::new();
    let f = NodeFactory::new(&arena);
    let foo = f.identifier("Foo");
    assert_eq!(
        get_expression_precedence(f.new_expression(foo, None)),
        OperatorPrecedence::LeftHandSide
    );
    assert_eq!(
        get_expression_precedence(f.new_expression(foo, Some(&[]))),
        OperatorPrecedence::Member
    );
}

#[test]
fn test_chain_continuations_stay_in_optional_chain_tier() {
    let arena = NodeArena::new();
    let f = NodeFactory::new(&arena);
    let a = f.identifier("a");
    let root = f.property_access_chain(a, true, "b");
    let continued = f.call_chain(f.element_access_chain(root, false, a), false, &[]);
    assert_eq!(get_expression_precedence(continued), OperatorPrecedence::OptionalChain);
}

#[test]
fn test_parenthesized_ceiling() {
    let arena = NodeArena::new();
    let f = NodeFactory::new(&arena);
    let a = f.identifier("a");
    for case in expression_cases(f) {
        let wrapped = f.parenthesized(case.expression);
        assert_eq!(get_expression_precedence(wrapped), OperatorPrecedence::HIGHEST);
        assert!(get_expression_precedence(wrapped) >= get_expression_precedence(case.expression));
    }
    assert!(get_expression_precedence(f.parenthesized(a)) > get_expression_precedence(a));
}

// ============================================================================
// Precedence climbing
// ============================================================================

const CLIMB_OPERATORS: &[&str] = &[
    "??", "||", "&&", "|", "^", "&", "==", "!==", "<", "instanceof", "<<", ">>", "+", "-", "*",
    "/", "%", "**",
];

fn assert_no_operand_needs_parentheses(expression: &Expression<'_>) {
    if let Expression::Binary(n) = expression {
        let operator = n.operator_token.kind();
        assert!(
            !binary_operand_needs_parentheses(operator, n.left, true, None),
            "left operand of {operator}"
        );
        assert!(
            !binary_operand_needs_parentheses(operator, n.right, false, Some(n.left)),
            "right operand of {operator}"
        );
        assert!(get_expression_precedence(n.left) >= get_expression_precedence(expression));
        assert_no_operand_needs_parentheses(n.left);
        assert_no_operand_needs_parentheses(n.right);
    }
}

#[test]
fn test_climb_respects_precedence() {
    let arena = NodeArena::new();
    let f = NodeFactory::new(&arena);
    let [a, b, c] = [f.identifier("a"), f.identifier("b"), f.identifier("c")];

    // a + b * c
    let tree = climb(f, &[binary("+"), binary("*")], &[a, b, c]);
    let Expression::Binary(sum) = tree else { panic!("expected binary") };
    assert_eq!(sum.operator_token.kind(), SyntaxKind::PlusToken);
    assert_eq!(sum.right.kind(), SyntaxKind::BinaryExpression);

    // a - b - c groups to the left
    let tree = climb(f, &[binary("-"), binary("-")], &[a, b, c]);
    let Expression::Binary(outer) = tree else { panic!("expected binary") };
    assert_eq!(outer.left.kind(), SyntaxKind::BinaryExpression);

    // a ** b ** c groups to the right
    let tree = climb(f, &[binary("**"), binary("**")], &[a, b, c]);
    let Expression::Binary(outer) = tree else { panic!("expected binary") };
    assert_eq!(outer.right.kind(), SyntaxKind::BinaryExpression);
}

#[test]
fn test_climbed_trees_print_without_parentheses() {
    let operators: Vec<SyntaxKind> = CLIMB_OPERATORS.iter().map(|text| binary(text)).collect();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let length: usize = rng.gen_range(1..=12);
        let sequence: Vec<SyntaxKind> = (0..length)
            .filter_map(|_| operators.choose(&mut rng).copied())
            .collect();
        let operands: Vec<_> = (0..=length).map(|_| f.identifier("x")).collect();
        let tree = climb(f, &sequence, &operands);
        assert_no_operand_needs_parentheses(tree);
    }
}
