//! Operator associativity.

use tsprec_ast::syntax_kind::SyntaxKind;
use tsprec_ast::Expression;

use crate::precedence::expression_operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Get the associativity of an operator. `has_arguments` only matters for
/// `new` expressions: `new a` nests to the right, `new a()` to the left.
pub fn get_operator_associativity(
    node_kind: SyntaxKind,
    operator_kind: SyntaxKind,
    has_arguments: bool,
) -> Associativity {
    match node_kind {
        SyntaxKind::NewExpression => {
            if has_arguments {
                Associativity::Left
            } else {
                Associativity::Right
            }
        }
        SyntaxKind::PrefixUnaryExpression
        | SyntaxKind::TypeOfExpression
        | SyntaxKind::VoidExpression
        | SyntaxKind::DeleteExpression
        | SyntaxKind::AwaitExpression
        | SyntaxKind::ConditionalExpression
        | SyntaxKind::YieldExpression => Associativity::Right,
        SyntaxKind::BinaryExpression => {
            if operator_kind == SyntaxKind::AsteriskAsteriskToken
                || operator_kind.is_assignment_operator()
            {
                Associativity::Right
            } else {
                Associativity::Left
            }
        }
        _ => Associativity::Left,
    }
}

pub fn get_expression_associativity(expression: &Expression<'_>) -> Associativity {
    let has_arguments = match expression {
        Expression::New(n) => n.arguments.is_some(),
        _ => false,
    };
    get_operator_associativity(expression.kind(), expression_operator(expression), has_arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsprec_ast::NodeFactory;
    use tsprec_core::NodeArena;

    fn binary(op: SyntaxKind) -> Associativity {
        get_operator_associativity(SyntaxKind::BinaryExpression, op, false)
    }

    #[test]
    fn test_binary_operators() {
        assert_eq!(binary(SyntaxKind::AsteriskAsteriskToken), Associativity::Right);
        assert_eq!(binary(SyntaxKind::EqualsToken), Associativity::Right);
        assert_eq!(binary(SyntaxKind::QuestionQuestionEqualsToken), Associativity::Right);
        assert_eq!(binary(SyntaxKind::MinusToken), Associativity::Left);
        assert_eq!(binary(SyntaxKind::QuestionQuestionToken), Associativity::Left);
        assert_eq!(binary(SyntaxKind::CommaToken), Associativity::Left);
    }

    #[test]
    fn test_unary_and_conditional_are_right() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let a = f.identifier("a");
        for expr in [
            f.prefix_unary(SyntaxKind::ExclamationToken, a),
            f.type_of_expression(a),
            f.await_expression(a),
            f.conditional(a, a, a),
            f.yield_expression(false, Some(a)),
        ] {
            assert_eq!(get_expression_associativity(expr), Associativity::Right);
        }
        assert_eq!(
            get_expression_associativity(f.postfix_unary(a, SyntaxKind::MinusMinusToken)),
            Associativity::Left
        );
    }

    #[test]
    fn test_new_depends_on_arguments() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let a = f.identifier("A");
        assert_eq!(get_expression_associativity(f.new_expression(a, None)), Associativity::Right);
        assert_eq!(
            get_expression_associativity(f.new_expression(a, Some(&[]))),
            Associativity::Left
        );
    }
}
