//! Finding the expression that starts the source text of another.

use tsprec_ast::Expression;

/// Descend to the expression whose text begins `node`'s text.
///
/// Follows the left operand of postfix, binary, conditional, tagged
/// template, access, assertion and partially emitted expressions. When
/// `stop_at_call_expressions` is set, the walk stops at the first call
/// instead of descending into its callee. Runs in constant stack space.
pub fn get_leftmost_expression<'a>(
    mut node: &'a Expression<'a>,
    stop_at_call_expressions: bool,
) -> &'a Expression<'a> {
    loop {
        node = match node {
            Expression::PostfixUnary(n) => n.operand,
            Expression::Binary(n) => n.left,
            Expression::Conditional(n) => n.condition,
            Expression::TaggedTemplate(n) => n.tag,
            Expression::Call(n) => {
                if stop_at_call_expressions {
                    return node;
                }
                n.expression
            }
            Expression::As(n) | Expression::Satisfies(n) => n.expression,
            Expression::ElementAccess(n) => n.expression,
            Expression::PropertyAccess(n) => n.expression,
            Expression::NonNull(n) => n.expression,
            Expression::PartiallyEmitted(n) => n.expression,
            _ => return node,
        };
    }
}
