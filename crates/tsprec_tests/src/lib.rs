//! Shared fixtures for the integration tests: one node of every expression
//! and type node variant with its expected precedence, deep chains, and a
//! precedence-climbing tree builder.

use tsprec_ast::{Expression, NodeFactory, SyntaxKind, TypeNode};
use tsprec_precedence::{
    get_binary_operator_precedence, get_operator_associativity, Associativity, OperatorPrecedence,
    TypePrecedence,
};

/// A fixture expression and the precedence it must report.
pub struct ExpressionCase<'a> {
    pub name: &'static str,
    pub expression: &'a Expression<'a>,
    pub precedence: OperatorPrecedence,
}

/// A fixture type node and the precedence it must report.
pub struct TypeCase<'a> {
    pub name: &'static str,
    pub type_node: &'a TypeNode<'a>,
    pub precedence: TypePrecedence,
}

pub const EXPRESSION_VARIANT_COUNT: usize = 47;
pub const TYPE_NODE_VARIANT_COUNT: usize = 29;

/// Position of `expression`'s variant in [`Expression`]. Exhaustive, so a
/// new variant fails to compile here until the fixtures cover it.
pub fn expression_variant_index(expression: &Expression<'_>) -> usize {
    match expression {
        Expression::Identifier(_) => 0,
        Expression::PrivateIdentifier(_) => 1,
        Expression::StringLiteral(_) => 2,
        Expression::NumericLiteral(_) => 3,
        Expression::BigIntLiteral(_) => 4,
        Expression::RegularExpressionLiteral(_) => 5,
        Expression::NoSubstitutionTemplateLiteral(_) => 6,
        Expression::TemplateExpression(_) => 7,
        Expression::ArrayLiteral(_) => 8,
        Expression::ObjectLiteral(_) => 9,
        Expression::PropertyAccess(_) => 10,
        Expression::ElementAccess(_) => 11,
        Expression::Call(_) => 12,
        Expression::New(_) => 13,
        Expression::TaggedTemplate(_) => 14,
        Expression::TypeAssertion(_) => 15,
        Expression::Parenthesized(_) => 16,
        Expression::FunctionExpression(_) => 17,
        Expression::ArrowFunction(_) => 18,
        Expression::Delete(_) => 19,
        Expression::TypeOf(_) => 20,
        Expression::Void(_) => 21,
        Expression::Await(_) => 22,
        Expression::PrefixUnary(_) => 23,
        Expression::PostfixUnary(_) => 24,
        Expression::Binary(_) => 25,
        Expression::Conditional(_) => 26,
        Expression::Yield(_) => 27,
        Expression::Spread(_) => 28,
        Expression::ClassExpression(_) => 29,
        Expression::OmittedExpression(_) => 30,
        Expression::ExpressionWithTypeArguments(_) => 31,
        Expression::As(_) => 32,
        Expression::NonNull(_) => 33,
        Expression::MetaProperty(_) => 34,
        Expression::Satisfies(_) => 35,
        Expression::JsxElement(_) => 36,
        Expression::JsxSelfClosingElement(_) => 37,
        Expression::JsxFragment(_) => 38,
        Expression::PartiallyEmitted(_) => 39,
        Expression::CommaList(_) => 40,
        Expression::ThisKeyword(_) => 41,
        Expression::SuperKeyword(_) => 42,
        Expression::ImportKeyword(_) => 43,
        Expression::NullKeyword(_) => 44,
        Expression::TrueKeyword(_) => 45,
        Expression::FalseKeyword(_) => 46,
    }
}

/// Position of `type_node`'s variant in [`TypeNode`].
pub fn type_node_variant_index(type_node: &TypeNode<'_>) -> usize {
    match type_node {
        TypeNode::KeywordType(_) => 0,
        TypeNode::TypeReference(_) => 1,
        TypeNode::FunctionType(_) => 2,
        TypeNode::ConstructorType(_) => 3,
        TypeNode::TypeQuery(_) => 4,
        TypeNode::TypeLiteral(_) => 5,
        TypeNode::ArrayType(_) => 6,
        TypeNode::TupleType(_) => 7,
        TypeNode::OptionalType(_) => 8,
        TypeNode::RestType(_) => 9,
        TypeNode::UnionType(_) => 10,
        TypeNode::IntersectionType(_) => 11,
        TypeNode::ConditionalType(_) => 12,
        TypeNode::InferType(_) => 13,
        TypeNode::ParenthesizedType(_) => 14,
        TypeNode::ThisType(_) => 15,
        TypeNode::TypeOperator(_) => 16,
        TypeNode::IndexedAccessType(_) => 17,
        TypeNode::MappedType(_) => 18,
        TypeNode::LiteralType(_) => 19,
        TypeNode::NamedTupleMember(_) => 20,
        TypeNode::TemplateLiteralType(_) => 21,
        TypeNode::ImportType(_) => 22,
        TypeNode::TypePredicate(_) => 23,
        TypeNode::JSDocAllType(_) => 24,
        TypeNode::JSDocNullableType(_) => 25,
        TypeNode::JSDocNonNullableType(_) => 26,
        TypeNode::JSDocOptionalType(_) => 27,
        TypeNode::JSDocVariadicType(_) => 28,
    }
}

/// At least one expression of every variant, with its expected precedence.
pub fn expression_cases<'a>(f: NodeFactory<'a>) -> Vec<ExpressionCase<'a>> {
    use OperatorPrecedence as P;

    let a = f.identifier("a");
    let b = f.identifier("b");
    let t = f.type_reference("T", None);

    let case = |name, expression, precedence| ExpressionCase { name, expression, precedence };
    vec![
        case("identifier", a, P::Primary),
        case("private identifier", f.private_identifier("#x"), P::Primary),
        case("string literal", f.string_literal("s"), P::Primary),
        case("numeric literal", f.numeric_literal("1"), P::Primary),
        case("bigint literal", f.bigint_literal("1n"), P::Primary),
        case("regular expression", f.regular_expression_literal("/x/g"), P::Primary),
        case("template literal", f.no_substitution_template_literal("t"), P::Primary),
        case("template expression", f.template_expression(&[a]), P::Primary),
        case("array literal", f.array_literal(&[a, b]), P::Primary),
        case("object literal", f.object_literal(&[("k", a)]), P::Primary),
        case("property access", f.property_access(a, "b"), P::Member),
        case("optional property access", f.property_access_chain(a, true, "b"), P::OptionalChain),
        case("element access", f.element_access(a, b), P::Member),
        case("optional element access", f.element_access_chain(a, true, b), P::OptionalChain),
        case("call", f.call(a, &[b]), P::Member),
        case("optional call", f.call_chain(a, true, &[]), P::OptionalChain),
        case("new with arguments", f.new_expression(a, Some(&[b])), P::Member),
        case("new without arguments", f.new_expression(a, None), P::LeftHandSide),
        case(
            "tagged template",
            f.tagged_template(a, f.no_substitution_template_literal("t")),
            P::Member,
        ),
        case("type assertion", f.type_assertion(t, a), P::Unary),
        case(
            "parenthesized",
            f.parenthesized(f.binary(a, SyntaxKind::CommaToken, b)),
            P::Parentheses,
        ),
        case("function expression", f.function_expression(Some("f")), P::Primary),
        case("arrow function", f.arrow_function_expression_body(a), P::Assignment),
        case("arrow function with block", f.arrow_function_block_body(), P::Assignment),
        case("delete", f.delete_expression(a), P::Unary),
        case("typeof", f.type_of_expression(a), P::Unary),
        case("void", f.void_expression(a), P::Unary),
        case("await", f.await_expression(a), P::Unary),
        case("prefix unary", f.prefix_unary(SyntaxKind::ExclamationToken, a), P::Unary),
        case("postfix unary", f.postfix_unary(a, SyntaxKind::PlusPlusToken), P::Update),
        case("binary", f.binary(a, SyntaxKind::PlusToken, b), P::Additive),
        case("conditional", f.conditional(a, a, b), P::Conditional),
        case("yield", f.yield_expression(true, Some(a)), P::Yield),
        case("spread", f.spread(a), P::Spread),
        case("class expression", f.class_expression(None), P::Primary),
        case("omitted expression", f.omitted_expression(), P::Primary),
        case(
            "expression with type arguments",
            f.expression_with_type_arguments(a, Some(&[t])),
            P::Member,
        ),
        case("as", f.as_expression(a, t), P::Relational),
        case("non-null", f.non_null(a), P::Unary),
        case(
            "non-null in chain",
            f.non_null_chain(f.property_access_chain(a, true, "b")),
            P::Unary,
        ),
        case("meta property", f.meta_property(SyntaxKind::NewKeyword, "target"), P::Member),
        case("satisfies", f.satisfies_expression(a, t), P::Relational),
        case("jsx element", f.jsx_element("div"), P::Primary),
        case("jsx self-closing element", f.jsx_self_closing_element("br"), P::Primary),
        case("jsx fragment", f.jsx_fragment(&[a]), P::Primary),
        case("partially emitted", f.partially_emitted(a), P::Invalid),
        case("comma list", f.comma_list(&[a, b]), P::Comma),
        case("this", f.this_keyword(), P::Primary),
        case("super", f.super_keyword(), P::Primary),
        case("import", f.import_keyword(), P::Primary),
        case("null", f.null_literal(), P::Primary),
        case("true", f.true_literal(), P::Primary),
        case("false", f.false_literal(), P::Primary),
    ]
}

/// At least one type node of every variant, with its expected precedence.
pub fn type_cases<'a>(f: NodeFactory<'a>) -> Vec<TypeCase<'a>> {
    use TypePrecedence as P;

    let a = f.type_reference("A", None);
    let b = f.type_reference("B", None);
    let string = f.keyword_type(SyntaxKind::StringKeyword);

    let case = |name, type_node, precedence| TypeCase { name, type_node, precedence };
    vec![
        case("keyword", string, P::NonArray),
        case("type reference", f.type_reference("Map", Some(&[a, b])), P::NonArray),
        case("function type", f.function_type(a), P::Function),
        case("constructor type", f.constructor_type(a), P::Function),
        case("type query", f.type_query("x"), P::Postfix),
        case("type literal", f.type_literal(&[("k", a)]), P::NonArray),
        case("array type", f.array_type(a), P::Postfix),
        case("tuple type", f.tuple_type(&[a, b]), P::NonArray),
        case("optional type", f.optional_type(a), P::Postfix),
        case("rest type", f.rest_type(a), P::NonArray),
        case("union type", f.union_type(&[a, b]), P::Union),
        case("intersection type", f.intersection_type(&[a, b]), P::Intersection),
        case("conditional type", f.conditional_type(a, b, a, b), P::Conditional),
        case("infer", f.infer_type("U", None), P::TypeOperator),
        case("infer with constraint", f.infer_type("U", Some(string)), P::Function),
        case("parenthesized type", f.parenthesized_type(f.union_type(&[a, b])), P::NonArray),
        case("this type", f.this_type(), P::NonArray),
        case("type operator", f.type_operator(SyntaxKind::KeyOfKeyword, a), P::TypeOperator),
        case("indexed access type", f.indexed_access_type(a, string), P::Postfix),
        case("mapped type", f.mapped_type("K", string, Some(a)), P::NonArray),
        case("literal type", f.literal_type(f.string_literal("s")), P::NonArray),
        case("named tuple member", f.named_tuple_member("x", a), P::NonArray),
        case("template literal type", f.template_literal_type(&[string]), P::NonArray),
        case("import type", f.import_type("./mod"), P::NonArray),
        case("type predicate", f.type_predicate("x", Some(a)), P::NonArray),
        case("jsdoc all type", f.jsdoc_all_type(), P::NonArray),
        case("jsdoc nullable type", f.jsdoc_nullable_type(a, false), P::NonArray),
        case("jsdoc non-nullable type", f.jsdoc_non_nullable_type(a, true), P::NonArray),
        case("jsdoc optional type", f.jsdoc_optional_type(a), P::JSDoc),
        case("jsdoc variadic type", f.jsdoc_variadic_type(a), P::JSDoc),
    ]
}

/// The shape of each link in a chain built by [`deep_chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainLink {
    PropertyAccess,
    ElementAccess,
    Call,
    NonNull,
    Postfix,
    Binary,
    Conditional,
    TaggedTemplate,
    As,
    Satisfies,
    PartiallyEmitted,
}

impl ChainLink {
    pub const ALL: [ChainLink; 11] = [
        ChainLink::PropertyAccess,
        ChainLink::ElementAccess,
        ChainLink::Call,
        ChainLink::NonNull,
        ChainLink::Postfix,
        ChainLink::Binary,
        ChainLink::Conditional,
        ChainLink::TaggedTemplate,
        ChainLink::As,
        ChainLink::Satisfies,
        ChainLink::PartiallyEmitted,
    ];

    /// Wrap `expression` in one link, keeping it as the leftmost child.
    pub fn wrap<'a>(
        self,
        f: NodeFactory<'a>,
        expression: &'a Expression<'a>,
    ) -> &'a Expression<'a> {
        let other = f.identifier("z");
        match self {
            ChainLink::PropertyAccess => f.property_access(expression, "p"),
            ChainLink::ElementAccess => f.element_access(expression, other),
            ChainLink::Call => f.call(expression, &[other]),
            ChainLink::NonNull => f.non_null(expression),
            ChainLink::Postfix => f.postfix_unary(expression, SyntaxKind::MinusMinusToken),
            ChainLink::Binary => f.binary(expression, SyntaxKind::AsteriskToken, other),
            ChainLink::Conditional => f.conditional(expression, other, other),
            ChainLink::TaggedTemplate => {
                f.tagged_template(expression, f.no_substitution_template_literal("t"))
            }
            ChainLink::As => f.as_expression(expression, f.type_reference("T", None)),
            ChainLink::Satisfies => f.satisfies_expression(expression, f.type_reference("T", None)),
            ChainLink::PartiallyEmitted => f.partially_emitted(expression),
        }
    }
}

/// Wrap `root` in `depth` links, cycling through `links`.
pub fn deep_chain<'a>(
    f: NodeFactory<'a>,
    root: &'a Expression<'a>,
    links: &[ChainLink],
    depth: usize,
) -> &'a Expression<'a> {
    links
        .iter()
        .cycle()
        .take(depth)
        .fold(root, |expression, link| link.wrap(f, expression))
}

/// Fold `operands[0] operators[0] operands[1] ... operands[n]` into a
/// binary tree by precedence climbing. `operands` must hold one more
/// element than `operators`.
pub fn climb<'a>(
    f: NodeFactory<'a>,
    operators: &[SyntaxKind],
    operands: &[&'a Expression<'a>],
) -> &'a Expression<'a> {
    assert_eq!(operands.len(), operators.len() + 1, "operand count mismatch");
    let mut position = 0;
    climb_from(f, operators, operands, &mut position, OperatorPrecedence::Invalid)
}

fn climb_from<'a>(
    f: NodeFactory<'a>,
    operators: &[SyntaxKind],
    operands: &[&'a Expression<'a>],
    position: &mut usize,
    min_precedence: OperatorPrecedence,
) -> &'a Expression<'a> {
    let mut left = operands[*position];
    while let Some(&operator) = operators.get(*position) {
        let precedence = get_binary_operator_precedence(operator);
        let right_associative =
            get_operator_associativity(SyntaxKind::BinaryExpression, operator, false)
                == Associativity::Right;
        if precedence == OperatorPrecedence::Invalid
            || precedence < min_precedence
            || (precedence == min_precedence && !right_associative)
        {
            break;
        }
        *position += 1;
        let right = climb_from(f, operators, operands, position, precedence);
        left = f.binary(left, operator, right);
    }
    left
}
