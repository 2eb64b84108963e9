//! tsprec_precedence: operator precedence, associativity and
//! parenthesization for JavaScript and TypeScript syntax trees.
//!
//! All queries are pure functions of their arguments. They read the
//! immutable node model from `tsprec_ast` and may be called from any
//! number of threads at once.

mod associativity;
mod leftmost;
mod parenthesize;
mod precedence;
mod type_precedence;

pub use associativity::{get_expression_associativity, get_operator_associativity, Associativity};
pub use leftmost::get_leftmost_expression;
pub use parenthesize::{
    array_element_type_needs_parentheses, binary_operand_needs_parentheses,
    check_type_needs_parentheses, condition_of_conditional_needs_parentheses,
    disallowed_comma_needs_parentheses, expression_of_new_needs_parentheses,
    expression_statement_needs_parentheses, left_side_of_access_needs_parentheses,
    type_needs_parentheses,
};
pub use precedence::{
    expression_operator, expression_precedence_flags, get_binary_operator_precedence,
    get_expression_precedence, get_operator_precedence, OperatorPrecedence,
    OperatorPrecedenceFlags,
};
pub use type_precedence::{get_type_node_precedence, TypePrecedence};
