//! Parenthesization decisions for printers and tree transforms.
//!
//! Each predicate answers whether a child must be wrapped in parentheses to
//! keep its meaning in a given position. They consult only precedence,
//! associativity and the leftmost-expression walk, never source text.

use tsprec_ast::syntax_kind::SyntaxKind;
use tsprec_ast::utilities::{
    is_left_hand_side_expression, is_optional_chain, skip_partially_emitted_expressions,
};
use tsprec_ast::{Expression, TypeNode};

use crate::associativity::{get_expression_associativity, get_operator_associativity, Associativity};
use crate::leftmost::get_leftmost_expression;
use crate::precedence::{
    get_expression_precedence, get_operator_precedence, OperatorPrecedence,
    OperatorPrecedenceFlags,
};
use crate::type_precedence::{get_type_node_precedence, TypePrecedence};

fn binary_operator_precedence(operator: SyntaxKind) -> OperatorPrecedence {
    get_operator_precedence(SyntaxKind::BinaryExpression, operator, OperatorPrecedenceFlags::NONE)
}

/// `(a op b) op c` equals `a op (b op c)` for these operators.
fn operator_has_associative_property(operator: SyntaxKind) -> bool {
    matches!(
        operator,
        SyntaxKind::AsteriskToken
            | SyntaxKind::BarToken
            | SyntaxKind::AmpersandToken
            | SyntaxKind::CaretToken
    )
}

/// The literal kind of an operand of `+` when it is a literal, or a chain
/// of `+` over literals of one kind.
///
/// Walks the `+` tree with an explicit stack, so arbitrarily long
/// concatenations are checked in constant call depth.
fn literal_kind_of_binary_plus_operand(node: &Expression<'_>) -> Option<SyntaxKind> {
    let mut kind = None;
    let mut pending = vec![node];
    while let Some(node) = pending.pop() {
        let node = skip_partially_emitted_expressions(node);
        if node.kind().is_literal() {
            match kind {
                None => kind = Some(node.kind()),
                Some(seen) if seen == node.kind() => {}
                Some(_) => return None,
            }
            continue;
        }
        match node {
            Expression::Binary(n) if n.operator_token.kind() == SyntaxKind::PlusToken => {
                pending.push(n.right);
                pending.push(n.left);
            }
            _ => return None,
        }
    }
    kind
}

/// Whether `operand` needs parentheses as an operand of the binary
/// `operator`. `left_operand` is the sibling on the left when `operand` is
/// the right side.
pub fn binary_operand_needs_parentheses(
    operator: SyntaxKind,
    operand: &Expression<'_>,
    is_left_side_of_binary: bool,
    left_operand: Option<&Expression<'_>>,
) -> bool {
    let operator_precedence = binary_operator_precedence(operator);
    let operator_associativity =
        get_operator_associativity(SyntaxKind::BinaryExpression, operator, false);
    let emitted = skip_partially_emitted_expressions(operand);

    // An arrow body extends as far right as it can.
    if !is_left_side_of_binary && matches!(emitted, Expression::ArrowFunction(_)) {
        return operator_precedence > OperatorPrecedence::Assignment;
    }

    let operand_precedence = get_expression_precedence(emitted);
    match operand_precedence.cmp(&operator_precedence) {
        std::cmp::Ordering::Less => {
            // `a = yield b` stays unwrapped on the right of `=`.
            !(!is_left_side_of_binary
                && operator_associativity == Associativity::Right
                && matches!(operand, Expression::Yield(_)))
        }
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => {
            if is_left_side_of_binary {
                return operator_associativity == Associativity::Right;
            }
            if let Expression::Binary(n) = emitted {
                if n.operator_token.kind() == operator {
                    if operator_has_associative_property(operator) {
                        return false;
                    }
                    if operator == SyntaxKind::PlusToken {
                        let left_kind = left_operand.and_then(literal_kind_of_binary_plus_operand);
                        if left_kind.is_some()
                            && left_kind == literal_kind_of_binary_plus_operand(emitted)
                        {
                            return false;
                        }
                    }
                }
            }
            get_expression_associativity(emitted) == Associativity::Left
        }
    }
}

/// Whether `condition` needs parentheses as the condition of `?:`.
pub fn condition_of_conditional_needs_parentheses(condition: &Expression<'_>) -> bool {
    let conditional_precedence = get_operator_precedence(
        SyntaxKind::ConditionalExpression,
        SyntaxKind::QuestionToken,
        OperatorPrecedenceFlags::NONE,
    );
    get_expression_precedence(skip_partially_emitted_expressions(condition))
        <= conditional_precedence
}

/// Whether `expression` needs parentheses where a top-level comma would be
/// read as a separator: arguments, array elements, initializers.
pub fn disallowed_comma_needs_parentheses(expression: &Expression<'_>) -> bool {
    get_expression_precedence(skip_partially_emitted_expressions(expression))
        <= binary_operator_precedence(SyntaxKind::CommaToken)
}

/// Whether `expression` needs parentheses as the object of a property
/// access, element access or call. `optional_chain` is true when the access
/// itself continues an optional chain.
pub fn left_side_of_access_needs_parentheses(
    expression: &Expression<'_>,
    optional_chain: bool,
) -> bool {
    let emitted = skip_partially_emitted_expressions(expression);
    let new_without_arguments = matches!(emitted, Expression::New(n) if n.arguments.is_none());
    !(is_left_hand_side_expression(emitted)
        && !new_without_arguments
        && (optional_chain || !is_optional_chain(emitted)))
}

/// Whether `expression` needs parentheses as the target of `new`.
pub fn expression_of_new_needs_parentheses(expression: &Expression<'_>) -> bool {
    match get_leftmost_expression(expression, true) {
        Expression::Call(_) => true,
        Expression::New(n) if n.arguments.is_none() => true,
        _ => left_side_of_access_needs_parentheses(expression, false),
    }
}

/// Whether `expression` needs parentheses to stand as an expression
/// statement without being read as a block or a declaration.
pub fn expression_statement_needs_parentheses(expression: &Expression<'_>) -> bool {
    let emitted = skip_partially_emitted_expressions(expression);
    matches!(
        get_leftmost_expression(emitted, false),
        Expression::ObjectLiteral(_)
            | Expression::FunctionExpression(_)
            | Expression::ClassExpression(_)
    )
}

/// Whether `child` needs parentheses in a position that requires at least
/// `required` precedence.
pub fn type_needs_parentheses(child: &TypeNode<'_>, required: TypePrecedence) -> bool {
    get_type_node_precedence(child) < required
}

/// Whether `element` needs parentheses as the element type of `T[]` or the
/// object type of `T[K]`.
pub fn array_element_type_needs_parentheses(element: &TypeNode<'_>) -> bool {
    matches!(element, TypeNode::TypeQuery(_))
        || type_needs_parentheses(element, TypePrecedence::Postfix)
}

/// Whether `check` needs parentheses as the check type of a conditional
/// type.
pub fn check_type_needs_parentheses(check: &TypeNode<'_>) -> bool {
    type_needs_parentheses(check, TypePrecedence::Union)
}
