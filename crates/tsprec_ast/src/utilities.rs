//! Shape predicates and wrapper-skipping helpers over expressions.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::NodeFlags;

bitflags::bitflags! {
    /// Wrapper expressions that [`skip_outer_expressions`] may look through.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OuterExpressionKinds: u8 {
        const PARENTHESES                    = 1 << 0;
        /// `<T>x`, `x as T` and `x satisfies T`.
        const TYPE_ASSERTIONS                = 1 << 1;
        const NON_NULL_ASSERTIONS            = 1 << 2;
        const PARTIALLY_EMITTED_EXPRESSIONS  = 1 << 3;
        const EXPRESSIONS_WITH_TYPE_ARGUMENTS = 1 << 4;

        const ASSERTIONS = Self::TYPE_ASSERTIONS.bits() | Self::NON_NULL_ASSERTIONS.bits();
        const ALL = Self::PARENTHESES.bits()
            | Self::ASSERTIONS.bits()
            | Self::PARTIALLY_EMITTED_EXPRESSIONS.bits()
            | Self::EXPRESSIONS_WITH_TYPE_ARGUMENTS.bits();
    }
}

/// Whether `node` is a link of an optional chain: a property access,
/// element access, call or non-null assertion carrying
/// [`NodeFlags::OPTIONAL_CHAIN`].
pub fn is_optional_chain(node: &Expression<'_>) -> bool {
    node.flags().contains(NodeFlags::OPTIONAL_CHAIN)
        && matches!(
            node,
            Expression::PropertyAccess(_)
                | Expression::ElementAccess(_)
                | Expression::Call(_)
                | Expression::NonNull(_)
        )
}

/// Whether `node` starts an optional chain, i.e. is itself written with `?.`.
pub fn is_optional_chain_root(node: &Expression<'_>) -> bool {
    if !is_optional_chain(node) {
        return false;
    }
    let question_dot = match node {
        Expression::PropertyAccess(n) => n.question_dot_token,
        Expression::ElementAccess(n) => n.question_dot_token,
        Expression::Call(n) => n.question_dot_token,
        _ => None,
    };
    question_dot.is_some()
}

/// The wrapped expression when `node` is an outer expression of one of
/// `kinds`.
fn outer_expression_inner<'a>(
    node: &'a Expression<'a>,
    kinds: OuterExpressionKinds,
) -> Option<&'a Expression<'a>> {
    let (inner, kind) = match node {
        Expression::Parenthesized(n) => (n.expression, OuterExpressionKinds::PARENTHESES),
        Expression::TypeAssertion(n) => (n.expression, OuterExpressionKinds::TYPE_ASSERTIONS),
        Expression::As(n) | Expression::Satisfies(n) => {
            (n.expression, OuterExpressionKinds::TYPE_ASSERTIONS)
        }
        Expression::NonNull(n) => (n.expression, OuterExpressionKinds::NON_NULL_ASSERTIONS),
        Expression::PartiallyEmitted(n) => (
            n.expression,
            OuterExpressionKinds::PARTIALLY_EMITTED_EXPRESSIONS,
        ),
        Expression::ExpressionWithTypeArguments(n) => (
            n.expression,
            OuterExpressionKinds::EXPRESSIONS_WITH_TYPE_ARGUMENTS,
        ),
        _ => return None,
    };
    kinds.intersects(kind).then_some(inner)
}

pub fn is_outer_expression(node: &Expression<'_>, kinds: OuterExpressionKinds) -> bool {
    outer_expression_inner(node, kinds).is_some()
}

/// Descend through every outer expression of `kinds` wrapping `node`.
pub fn skip_outer_expressions<'a>(
    mut node: &'a Expression<'a>,
    kinds: OuterExpressionKinds,
) -> &'a Expression<'a> {
    while let Some(inner) = outer_expression_inner(node, kinds) {
        node = inner;
    }
    node
}

pub fn skip_parentheses<'a>(node: &'a Expression<'a>) -> &'a Expression<'a> {
    skip_outer_expressions(node, OuterExpressionKinds::PARENTHESES)
}

pub fn skip_partially_emitted_expressions<'a>(node: &'a Expression<'a>) -> &'a Expression<'a> {
    skip_outer_expressions(node, OuterExpressionKinds::PARTIALLY_EMITTED_EXPRESSIONS)
}

pub fn skip_type_parentheses<'a>(mut node: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
    while let TypeNode::ParenthesizedType(n) = node {
        node = n.type_node;
    }
    node
}

/// Whether an expression of this kind is a LeftHandSideExpression in the
/// grammar, judged by kind alone.
pub fn is_left_hand_side_expression_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PropertyAccessExpression
            | SyntaxKind::ElementAccessExpression
            | SyntaxKind::NewExpression
            | SyntaxKind::CallExpression
            | SyntaxKind::JsxElement
            | SyntaxKind::JsxSelfClosingElement
            | SyntaxKind::JsxFragment
            | SyntaxKind::TaggedTemplateExpression
            | SyntaxKind::ArrayLiteralExpression
            | SyntaxKind::ParenthesizedExpression
            | SyntaxKind::ObjectLiteralExpression
            | SyntaxKind::ClassExpression
            | SyntaxKind::FunctionExpression
            | SyntaxKind::Identifier
            | SyntaxKind::PrivateIdentifier
            | SyntaxKind::RegularExpressionLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateExpression
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::ThisKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NonNullExpression
            | SyntaxKind::ExpressionWithTypeArguments
            | SyntaxKind::MetaProperty
            | SyntaxKind::ImportKeyword
            | SyntaxKind::MissingDeclaration
    )
}

pub fn is_left_hand_side_expression(node: &Expression<'_>) -> bool {
    is_left_hand_side_expression_kind(node.kind())
}
