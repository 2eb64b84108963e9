//! NodeFactory: builds synthesized nodes inside a [`NodeArena`].
//!
//! Every node produced here carries [`NodeFlags::SYNTHESIZED`]. Optional
//! chain constructors additionally set [`NodeFlags::OPTIONAL_CHAIN`].

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::NodeFlags;
use tsprec_core::NodeArena;

#[derive(Clone, Copy)]
pub struct NodeFactory<'a> {
    arena: &'a NodeArena,
}

impl<'a> NodeFactory<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        Self { arena }
    }

    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    // ========================================================================
    // Allocation
    // ========================================================================

    #[inline]
    fn data(&self, kind: SyntaxKind) -> NodeData {
        NodeData::with_flags(kind, NodeFlags::SYNTHESIZED)
    }

    #[inline]
    fn chain_data(&self, kind: SyntaxKind) -> NodeData {
        NodeData::with_flags(kind, NodeFlags::SYNTHESIZED | NodeFlags::OPTIONAL_CHAIN)
    }

    pub fn alloc_expression(&self, expression: Expression<'a>) -> &'a Expression<'a> {
        self.arena.alloc(expression)
    }

    pub fn alloc_type(&self, type_node: TypeNode<'a>) -> &'a TypeNode<'a> {
        self.arena.alloc(type_node)
    }

    fn expressions(&self, items: &[&'a Expression<'a>]) -> NodeList<'a, &'a Expression<'a>> {
        self.arena.alloc_slice(items.iter().copied())
    }

    fn types(&self, items: &[&'a TypeNode<'a>]) -> NodeList<'a, &'a TypeNode<'a>> {
        self.arena.alloc_slice(items.iter().copied())
    }

    pub fn name(&self, text: &str) -> Identifier<'a> {
        Identifier {
            data: self.data(SyntaxKind::Identifier),
            text: self.arena.alloc_str(text),
        }
    }

    fn literal(&self, kind: SyntaxKind, text: &str) -> LiteralExpression<'a> {
        LiteralExpression {
            data: self.data(kind),
            text: self.arena.alloc_str(text),
        }
    }

    fn empty_block(&self) -> &'a Block<'a> {
        self.arena.alloc(Block {
            data: self.data(SyntaxKind::Block),
            statements: &[],
        })
    }

    // ========================================================================
    // Names and Literals
    // ========================================================================

    pub fn identifier(&self, text: &str) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Identifier(self.name(text)))
    }

    pub fn private_identifier(&self, text: &str) -> &'a Expression<'a> {
        self.alloc_expression(Expression::PrivateIdentifier(Identifier {
            data: self.data(SyntaxKind::PrivateIdentifier),
            text: self.arena.alloc_str(text),
        }))
    }

    pub fn numeric_literal(&self, text: &str) -> &'a Expression<'a> {
        self.alloc_expression(Expression::NumericLiteral(
            self.literal(SyntaxKind::NumericLiteral, text),
        ))
    }

    pub fn bigint_literal(&self, text: &str) -> &'a Expression<'a> {
        self.alloc_expression(Expression::BigIntLiteral(
            self.literal(SyntaxKind::BigIntLiteral, text),
        ))
    }

    pub fn string_literal(&self, text: &str) -> &'a Expression<'a> {
        self.alloc_expression(Expression::StringLiteral(
            self.literal(SyntaxKind::StringLiteral, text),
        ))
    }

    pub fn regular_expression_literal(&self, text: &str) -> &'a Expression<'a> {
        self.alloc_expression(Expression::RegularExpressionLiteral(
            self.literal(SyntaxKind::RegularExpressionLiteral, text),
        ))
    }

    pub fn no_substitution_template_literal(&self, text: &str) -> &'a Expression<'a> {
        self.alloc_expression(Expression::NoSubstitutionTemplateLiteral(
            self.literal(SyntaxKind::NoSubstitutionTemplateLiteral, text),
        ))
    }

    /// `` `${a}${b}` `` with one span per substitution.
    pub fn template_expression(&self, substitutions: &[&'a Expression<'a>]) -> &'a Expression<'a> {
        let last = substitutions.len().saturating_sub(1);
        let spans = self
            .arena
            .alloc_slice(substitutions.iter().enumerate().map(|(i, &expression)| {
                let literal = if i == last {
                    SyntaxKind::TemplateTail
                } else {
                    SyntaxKind::TemplateMiddle
                };
                TemplateSpan {
                    data: self.data(SyntaxKind::TemplateSpan),
                    expression,
                    literal: Token::new(literal),
                }
            }));
        self.alloc_expression(Expression::TemplateExpression(TemplateExpression {
            data: self.data(SyntaxKind::TemplateExpression),
            head: Token::new(SyntaxKind::TemplateHead),
            template_spans: spans,
        }))
    }

    pub fn this_keyword(&self) -> &'a Expression<'a> {
        self.alloc_expression(Expression::ThisKeyword(self.data(SyntaxKind::ThisKeyword)))
    }

    pub fn super_keyword(&self) -> &'a Expression<'a> {
        self.alloc_expression(Expression::SuperKeyword(self.data(SyntaxKind::SuperKeyword)))
    }

    pub fn import_keyword(&self) -> &'a Expression<'a> {
        self.alloc_expression(Expression::ImportKeyword(self.data(SyntaxKind::ImportKeyword)))
    }

    pub fn null_literal(&self) -> &'a Expression<'a> {
        self.alloc_expression(Expression::NullKeyword(self.data(SyntaxKind::NullKeyword)))
    }

    pub fn true_literal(&self) -> &'a Expression<'a> {
        self.alloc_expression(Expression::TrueKeyword(self.data(SyntaxKind::TrueKeyword)))
    }

    pub fn false_literal(&self) -> &'a Expression<'a> {
        self.alloc_expression(Expression::FalseKeyword(self.data(SyntaxKind::FalseKeyword)))
    }

    pub fn omitted_expression(&self) -> &'a Expression<'a> {
        self.alloc_expression(Expression::OmittedExpression(
            self.data(SyntaxKind::OmittedExpression),
        ))
    }

    // ========================================================================
    // Literals with Children
    // ========================================================================

    pub fn array_literal(&self, elements: &[&'a Expression<'a>]) -> &'a Expression<'a> {
        self.alloc_expression(Expression::ArrayLiteral(ArrayLiteralExpression {
            data: self.data(SyntaxKind::ArrayLiteralExpression),
            elements: self.expressions(elements),
        }))
    }

    /// `{ name: value, ... }` built from property assignments.
    pub fn object_literal(&self, properties: &[(&str, &'a Expression<'a>)]) -> &'a Expression<'a> {
        let properties = self
            .arena
            .alloc_slice(properties.iter().map(|&(name, initializer)| {
                ObjectLiteralElement::PropertyAssignment(PropertyAssignment {
                    data: self.data(SyntaxKind::PropertyAssignment),
                    name: PropertyName::Identifier(self.name(name)),
                    initializer,
                })
            }));
        self.alloc_expression(Expression::ObjectLiteral(ObjectLiteralExpression {
            data: self.data(SyntaxKind::ObjectLiteralExpression),
            properties,
        }))
    }

    // ========================================================================
    // Member Access and Calls
    // ========================================================================

    pub fn property_access(
        &self,
        expression: &'a Expression<'a>,
        name: &str,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::PropertyAccess(PropertyAccessExpression {
            data: self.data(SyntaxKind::PropertyAccessExpression),
            expression,
            question_dot_token: None,
            name: MemberName::Identifier(self.name(name)),
        }))
    }

    /// A property access inside an optional chain. `question_dot` is true
    /// for the link written with `?.` and false for the links after it.
    pub fn property_access_chain(
        &self,
        expression: &'a Expression<'a>,
        question_dot: bool,
        name: &str,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::PropertyAccess(PropertyAccessExpression {
            data: self.chain_data(SyntaxKind::PropertyAccessExpression),
            expression,
            question_dot_token: question_dot.then(|| Token::new(SyntaxKind::QuestionDotToken)),
            name: MemberName::Identifier(self.name(name)),
        }))
    }

    pub fn element_access(
        &self,
        expression: &'a Expression<'a>,
        argument_expression: &'a Expression<'a>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::ElementAccess(ElementAccessExpression {
            data: self.data(SyntaxKind::ElementAccessExpression),
            expression,
            question_dot_token: None,
            argument_expression,
        }))
    }

    pub fn element_access_chain(
        &self,
        expression: &'a Expression<'a>,
        question_dot: bool,
        argument_expression: &'a Expression<'a>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::ElementAccess(ElementAccessExpression {
            data: self.chain_data(SyntaxKind::ElementAccessExpression),
            expression,
            question_dot_token: question_dot.then(|| Token::new(SyntaxKind::QuestionDotToken)),
            argument_expression,
        }))
    }

    pub fn call(
        &self,
        expression: &'a Expression<'a>,
        arguments: &[&'a Expression<'a>],
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Call(CallExpression {
            data: self.data(SyntaxKind::CallExpression),
            expression,
            question_dot_token: None,
            type_arguments: None,
            arguments: self.expressions(arguments),
        }))
    }

    pub fn call_chain(
        &self,
        expression: &'a Expression<'a>,
        question_dot: bool,
        arguments: &[&'a Expression<'a>],
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Call(CallExpression {
            data: self.chain_data(SyntaxKind::CallExpression),
            expression,
            question_dot_token: question_dot.then(|| Token::new(SyntaxKind::QuestionDotToken)),
            type_arguments: None,
            arguments: self.expressions(arguments),
        }))
    }

    /// `new expression(arguments)`; `None` builds `new expression` without
    /// an argument list.
    pub fn new_expression(
        &self,
        expression: &'a Expression<'a>,
        arguments: Option<&[&'a Expression<'a>]>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::New(NewExpression {
            data: self.data(SyntaxKind::NewExpression),
            expression,
            type_arguments: None,
            arguments: arguments.map(|args| self.expressions(args)),
        }))
    }

    pub fn tagged_template(
        &self,
        tag: &'a Expression<'a>,
        template: &'a Expression<'a>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::TaggedTemplate(TaggedTemplateExpression {
            data: self.data(SyntaxKind::TaggedTemplateExpression),
            tag,
            type_arguments: None,
            template,
        }))
    }

    /// `new.target` or `import.meta`.
    pub fn meta_property(&self, keyword_token: SyntaxKind, name: &str) -> &'a Expression<'a> {
        self.alloc_expression(Expression::MetaProperty(MetaPropertyExpression {
            data: self.data(SyntaxKind::MetaProperty),
            keyword_token,
            name: self.name(name),
        }))
    }

    pub fn expression_with_type_arguments(
        &self,
        expression: &'a Expression<'a>,
        type_arguments: Option<&[&'a TypeNode<'a>]>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::ExpressionWithTypeArguments(
            ExpressionWithTypeArguments {
                data: self.data(SyntaxKind::ExpressionWithTypeArguments),
                expression,
                type_arguments: type_arguments.map(|args| self.types(args)),
            },
        ))
    }

    // ========================================================================
    // Type Assertions
    // ========================================================================

    pub fn type_assertion(
        &self,
        type_node: &'a TypeNode<'a>,
        expression: &'a Expression<'a>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::TypeAssertion(TypeAssertionExpression {
            data: self.data(SyntaxKind::TypeAssertionExpression),
            type_node,
            expression,
        }))
    }

    pub fn as_expression(
        &self,
        expression: &'a Expression<'a>,
        type_node: &'a TypeNode<'a>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::As(TypeCheckExpression {
            data: self.data(SyntaxKind::AsExpression),
            expression,
            type_node,
        }))
    }

    pub fn satisfies_expression(
        &self,
        expression: &'a Expression<'a>,
        type_node: &'a TypeNode<'a>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Satisfies(TypeCheckExpression {
            data: self.data(SyntaxKind::SatisfiesExpression),
            expression,
            type_node,
        }))
    }

    pub fn non_null(&self, expression: &'a Expression<'a>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::NonNull(NonNullExpression {
            data: self.data(SyntaxKind::NonNullExpression),
            expression,
        }))
    }

    pub fn non_null_chain(&self, expression: &'a Expression<'a>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::NonNull(NonNullExpression {
            data: self.chain_data(SyntaxKind::NonNullExpression),
            expression,
        }))
    }

    // ========================================================================
    // Operators
    // ========================================================================

    pub fn parenthesized(&self, expression: &'a Expression<'a>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Parenthesized(ParenthesizedExpression {
            data: self.data(SyntaxKind::ParenthesizedExpression),
            expression,
        }))
    }

    fn keyword_unary(
        &self,
        kind: SyntaxKind,
        expression: &'a Expression<'a>,
    ) -> KeywordUnaryExpression<'a> {
        KeywordUnaryExpression {
            data: self.data(kind),
            expression,
        }
    }

    pub fn delete_expression(&self, expression: &'a Expression<'a>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Delete(
            self.keyword_unary(SyntaxKind::DeleteExpression, expression),
        ))
    }

    pub fn type_of_expression(&self, expression: &'a Expression<'a>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::TypeOf(
            self.keyword_unary(SyntaxKind::TypeOfExpression, expression),
        ))
    }

    pub fn void_expression(&self, expression: &'a Expression<'a>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Void(
            self.keyword_unary(SyntaxKind::VoidExpression, expression),
        ))
    }

    pub fn await_expression(&self, expression: &'a Expression<'a>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Await(
            self.keyword_unary(SyntaxKind::AwaitExpression, expression),
        ))
    }

    pub fn prefix_unary(
        &self,
        operator: SyntaxKind,
        operand: &'a Expression<'a>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::PrefixUnary(PrefixUnaryExpression {
            data: self.data(SyntaxKind::PrefixUnaryExpression),
            operator,
            operand,
        }))
    }

    pub fn postfix_unary(
        &self,
        operand: &'a Expression<'a>,
        operator: SyntaxKind,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::PostfixUnary(PostfixUnaryExpression {
            data: self.data(SyntaxKind::PostfixUnaryExpression),
            operand,
            operator,
        }))
    }

    pub fn binary(
        &self,
        left: &'a Expression<'a>,
        operator: SyntaxKind,
        right: &'a Expression<'a>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Binary(BinaryExpression {
            data: self.data(SyntaxKind::BinaryExpression),
            left,
            operator_token: Token::new(operator),
            right,
        }))
    }

    pub fn conditional(
        &self,
        condition: &'a Expression<'a>,
        when_true: &'a Expression<'a>,
        when_false: &'a Expression<'a>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Conditional(ConditionalExpression {
            data: self.data(SyntaxKind::ConditionalExpression),
            condition,
            when_true,
            when_false,
        }))
    }

    pub fn yield_expression(
        &self,
        delegate: bool,
        expression: Option<&'a Expression<'a>>,
    ) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Yield(YieldExpression {
            data: self.data(SyntaxKind::YieldExpression),
            asterisk_token: delegate.then(|| Token::new(SyntaxKind::AsteriskToken)),
            expression,
        }))
    }

    pub fn spread(&self, expression: &'a Expression<'a>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::Spread(SpreadElement {
            data: self.data(SyntaxKind::SpreadElement),
            expression,
        }))
    }

    pub fn comma_list(&self, elements: &[&'a Expression<'a>]) -> &'a Expression<'a> {
        self.alloc_expression(Expression::CommaList(CommaListExpression {
            data: self.data(SyntaxKind::CommaListExpression),
            elements: self.expressions(elements),
        }))
    }

    pub fn partially_emitted(&self, expression: &'a Expression<'a>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::PartiallyEmitted(PartiallyEmittedExpression {
            data: self.data(SyntaxKind::PartiallyEmittedExpression),
            expression,
        }))
    }

    // ========================================================================
    // Functions, Classes and JSX
    // ========================================================================

    /// `function name() {}`
    pub fn function_expression(&self, name: Option<&str>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::FunctionExpression(FunctionExpression {
            data: self.data(SyntaxKind::FunctionExpression),
            name: name.map(|n| self.name(n)),
            asterisk_token: None,
            type_parameters: None,
            parameters: &[],
            return_type: None,
            body: self.empty_block(),
        }))
    }

    /// `() => body`
    pub fn arrow_function_expression_body(&self, body: &'a Expression<'a>) -> &'a Expression<'a> {
        self.arrow_function(ArrowFunctionBody::Expression(body))
    }

    /// `() => {}`
    pub fn arrow_function_block_body(&self) -> &'a Expression<'a> {
        self.arrow_function(ArrowFunctionBody::Block(self.empty_block()))
    }

    fn arrow_function(&self, body: ArrowFunctionBody<'a>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::ArrowFunction(ArrowFunction {
            data: self.data(SyntaxKind::ArrowFunction),
            type_parameters: None,
            parameters: &[],
            return_type: None,
            body,
        }))
    }

    /// `class name {}`
    pub fn class_expression(&self, name: Option<&str>) -> &'a Expression<'a> {
        self.alloc_expression(Expression::ClassExpression(ClassExpression {
            data: self.data(SyntaxKind::ClassExpression),
            name: name.map(|n| self.name(n)),
            type_parameters: None,
            heritage_clauses: &[],
            members: &[],
        }))
    }

    /// `<tag></tag>`
    pub fn jsx_element(&self, tag: &str) -> &'a Expression<'a> {
        self.alloc_expression(Expression::JsxElement(JsxElement {
            data: self.data(SyntaxKind::JsxElement),
            tag_name: self.identifier(tag),
            attributes: &[],
            children: &[],
        }))
    }

    /// `<tag />`
    pub fn jsx_self_closing_element(&self, tag: &str) -> &'a Expression<'a> {
        self.alloc_expression(Expression::JsxSelfClosingElement(JsxSelfClosingElement {
            data: self.data(SyntaxKind::JsxSelfClosingElement),
            tag_name: self.identifier(tag),
            type_arguments: None,
            attributes: &[],
        }))
    }

    /// `<>{children}</>` with one expression container per child.
    pub fn jsx_fragment(&self, children: &[&'a Expression<'a>]) -> &'a Expression<'a> {
        let children = self
            .arena
            .alloc_slice(children.iter().map(|&child| JsxChild::Expression(Some(child))));
        self.alloc_expression(Expression::JsxFragment(JsxFragment {
            data: self.data(SyntaxKind::JsxFragment),
            children,
        }))
    }

    // ========================================================================
    // Type Nodes
    // ========================================================================

    fn type_parameter(
        &self,
        name: &str,
        constraint: Option<&'a TypeNode<'a>>,
    ) -> &'a TypeParameterDeclaration<'a> {
        self.arena.alloc(TypeParameterDeclaration {
            data: self.data(SyntaxKind::TypeParameter),
            name: self.name(name),
            constraint,
            default: None,
        })
    }

    fn wrapped_type(
        &self,
        kind: SyntaxKind,
        type_node: &'a TypeNode<'a>,
        postfix: bool,
    ) -> WrappedTypeNode<'a> {
        WrappedTypeNode {
            data: self.data(kind),
            type_node,
            postfix,
        }
    }

    /// A keyword type such as `string`; `kind` is the keyword token kind.
    pub fn keyword_type(&self, kind: SyntaxKind) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::KeywordType(KeywordTypeNode { data: self.data(kind) }))
    }

    pub fn type_reference(
        &self,
        name: &str,
        type_arguments: Option<&[&'a TypeNode<'a>]>,
    ) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::TypeReference(TypeReferenceNode {
            data: self.data(SyntaxKind::TypeReference),
            type_name: EntityName::Identifier(self.name(name)),
            type_arguments: type_arguments.map(|args| self.types(args)),
        }))
    }

    /// `() => return_type`
    pub fn function_type(&self, return_type: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::FunctionType(FunctionTypeNode {
            data: self.data(SyntaxKind::FunctionType),
            type_parameters: None,
            parameters: &[],
            return_type,
        }))
    }

    /// `new () => return_type`
    pub fn constructor_type(&self, return_type: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::ConstructorType(FunctionTypeNode {
            data: self.data(SyntaxKind::ConstructorType),
            type_parameters: None,
            parameters: &[],
            return_type,
        }))
    }

    /// `typeof name`
    pub fn type_query(&self, name: &str) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::TypeQuery(TypeQueryNode {
            data: self.data(SyntaxKind::TypeQuery),
            expr_name: EntityName::Identifier(self.name(name)),
            type_arguments: None,
        }))
    }

    /// `{ name: type, ... }`
    pub fn type_literal(&self, members: &[(&str, &'a TypeNode<'a>)]) -> &'a TypeNode<'a> {
        let members = self
            .arena
            .alloc_slice(members.iter().map(|&(name, type_annotation)| {
                TypeElement::PropertySignature(PropertySignatureNode {
                    data: self.data(SyntaxKind::PropertySignature),
                    name: PropertyName::Identifier(self.name(name)),
                    question_token: None,
                    type_annotation: Some(type_annotation),
                })
            }));
        self.alloc_type(TypeNode::TypeLiteral(TypeLiteralNode {
            data: self.data(SyntaxKind::TypeLiteral),
            members,
        }))
    }

    pub fn array_type(&self, element_type: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::ArrayType(ArrayTypeNode {
            data: self.data(SyntaxKind::ArrayType),
            element_type,
        }))
    }

    pub fn tuple_type(&self, elements: &[&'a TypeNode<'a>]) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::TupleType(TupleTypeNode {
            data: self.data(SyntaxKind::TupleType),
            elements: self.types(elements),
        }))
    }

    pub fn optional_type(&self, type_node: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::OptionalType(
            self.wrapped_type(SyntaxKind::OptionalType, type_node, true),
        ))
    }

    pub fn rest_type(&self, type_node: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::RestType(
            self.wrapped_type(SyntaxKind::RestType, type_node, false),
        ))
    }

    pub fn union_type(&self, types: &[&'a TypeNode<'a>]) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::UnionType(UnionOrIntersectionTypeNode {
            data: self.data(SyntaxKind::UnionType),
            types: self.types(types),
        }))
    }

    pub fn intersection_type(&self, types: &[&'a TypeNode<'a>]) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::IntersectionType(UnionOrIntersectionTypeNode {
            data: self.data(SyntaxKind::IntersectionType),
            types: self.types(types),
        }))
    }

    pub fn conditional_type(
        &self,
        check_type: &'a TypeNode<'a>,
        extends_type: &'a TypeNode<'a>,
        true_type: &'a TypeNode<'a>,
        false_type: &'a TypeNode<'a>,
    ) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::ConditionalType(ConditionalTypeNode {
            data: self.data(SyntaxKind::ConditionalType),
            check_type,
            extends_type,
            true_type,
            false_type,
        }))
    }

    /// `infer name` or `infer name extends constraint`.
    pub fn infer_type(&self, name: &str, constraint: Option<&'a TypeNode<'a>>) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::InferType(InferTypeNode {
            data: self.data(SyntaxKind::InferType),
            type_parameter: self.type_parameter(name, constraint),
        }))
    }

    pub fn parenthesized_type(&self, type_node: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::ParenthesizedType(
            self.wrapped_type(SyntaxKind::ParenthesizedType, type_node, false),
        ))
    }

    pub fn this_type(&self) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::ThisType(self.data(SyntaxKind::ThisType)))
    }

    /// `keyof T`, `unique T` or `readonly T`.
    pub fn type_operator(
        &self,
        operator: SyntaxKind,
        type_node: &'a TypeNode<'a>,
    ) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::TypeOperator(TypeOperatorNode {
            data: self.data(SyntaxKind::TypeOperator),
            operator,
            type_node,
        }))
    }

    pub fn indexed_access_type(
        &self,
        object_type: &'a TypeNode<'a>,
        index_type: &'a TypeNode<'a>,
    ) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::IndexedAccessType(IndexedAccessTypeNode {
            data: self.data(SyntaxKind::IndexedAccessType),
            object_type,
            index_type,
        }))
    }

    /// `{ [name in constraint]: type_node }`
    pub fn mapped_type(
        &self,
        name: &str,
        constraint: &'a TypeNode<'a>,
        type_node: Option<&'a TypeNode<'a>>,
    ) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::MappedType(MappedTypeNode {
            data: self.data(SyntaxKind::MappedType),
            readonly_token: None,
            type_parameter: self.type_parameter(name, Some(constraint)),
            name_type: None,
            question_token: None,
            type_node,
        }))
    }

    pub fn literal_type(&self, literal: &'a Expression<'a>) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::LiteralType(LiteralTypeNode {
            data: self.data(SyntaxKind::LiteralType),
            literal,
        }))
    }

    pub fn named_tuple_member(&self, name: &str, type_node: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::NamedTupleMember(NamedTupleMemberNode {
            data: self.data(SyntaxKind::NamedTupleMember),
            dot_dot_dot_token: None,
            name: self.name(name),
            question_token: None,
            type_node,
        }))
    }

    /// `` `${A}${B}` `` at the type level.
    pub fn template_literal_type(&self, types: &[&'a TypeNode<'a>]) -> &'a TypeNode<'a> {
        let last = types.len().saturating_sub(1);
        let spans = self
            .arena
            .alloc_slice(types.iter().enumerate().map(|(i, &type_node)| {
                let literal = if i == last {
                    SyntaxKind::TemplateTail
                } else {
                    SyntaxKind::TemplateMiddle
                };
                TemplateLiteralTypeSpan {
                    data: self.data(SyntaxKind::TemplateLiteralTypeSpan),
                    type_node,
                    literal: Token::new(literal),
                }
            }));
        self.alloc_type(TypeNode::TemplateLiteralType(TemplateLiteralTypeNode {
            data: self.data(SyntaxKind::TemplateLiteralType),
            head: Token::new(SyntaxKind::TemplateHead),
            template_spans: spans,
        }))
    }

    /// `import("specifier")`
    pub fn import_type(&self, specifier: &str) -> &'a TypeNode<'a> {
        let argument = self.literal_type(self.string_literal(specifier));
        self.alloc_type(TypeNode::ImportType(ImportTypeNode {
            data: self.data(SyntaxKind::ImportType),
            is_type_of: false,
            argument,
            qualifier: None,
            type_arguments: None,
        }))
    }

    /// `name is type_node`
    pub fn type_predicate(
        &self,
        name: &str,
        type_node: Option<&'a TypeNode<'a>>,
    ) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::TypePredicate(TypePredicateNode {
            data: self.data(SyntaxKind::TypePredicate),
            asserts_modifier: None,
            parameter_name: self.name(name),
            type_node,
        }))
    }

    /// JSDoc `*`.
    pub fn jsdoc_all_type(&self) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::JSDocAllType(self.data(SyntaxKind::JSDocAllType)))
    }

    /// JSDoc `?T`, or `T?` when `postfix`.
    pub fn jsdoc_nullable_type(
        &self,
        type_node: &'a TypeNode<'a>,
        postfix: bool,
    ) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::JSDocNullableType(
            self.wrapped_type(SyntaxKind::JSDocNullableType, type_node, postfix),
        ))
    }

    /// JSDoc `!T`, or `T!` when `postfix`.
    pub fn jsdoc_non_nullable_type(
        &self,
        type_node: &'a TypeNode<'a>,
        postfix: bool,
    ) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::JSDocNonNullableType(
            self.wrapped_type(SyntaxKind::JSDocNonNullableType, type_node, postfix),
        ))
    }

    /// JSDoc `T=`.
    pub fn jsdoc_optional_type(&self, type_node: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::JSDocOptionalType(
            self.wrapped_type(SyntaxKind::JSDocOptionalType, type_node, true),
        ))
    }

    /// JSDoc `...T`.
    pub fn jsdoc_variadic_type(&self, type_node: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc_type(TypeNode::JSDocVariadicType(
            self.wrapped_type(SyntaxKind::JSDocVariadicType, type_node, false),
        ))
    }
}
