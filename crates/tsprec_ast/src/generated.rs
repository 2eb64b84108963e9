//! Node data accessors for the node enums.
//!
//! Every match here is exhaustive so that adding a variant fails to compile
//! until its accessor arm exists.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::NodeFlags;

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::Block(n) => &n.data,
            Statement::EmptyStatement(d) => d,
            Statement::ExpressionStatement(n) => &n.data,
            Statement::ReturnStatement(n) => &n.data,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }
}

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::Identifier(n) => &n.data,
            Expression::PrivateIdentifier(n) => &n.data,
            Expression::StringLiteral(n) => &n.data,
            Expression::NumericLiteral(n) => &n.data,
            Expression::BigIntLiteral(n) => &n.data,
            Expression::RegularExpressionLiteral(n) => &n.data,
            Expression::NoSubstitutionTemplateLiteral(n) => &n.data,
            Expression::TemplateExpression(n) => &n.data,
            Expression::ArrayLiteral(n) => &n.data,
            Expression::ObjectLiteral(n) => &n.data,
            Expression::PropertyAccess(n) => &n.data,
            Expression::ElementAccess(n) => &n.data,
            Expression::Call(n) => &n.data,
            Expression::New(n) => &n.data,
            Expression::TaggedTemplate(n) => &n.data,
            Expression::TypeAssertion(n) => &n.data,
            Expression::Parenthesized(n) => &n.data,
            Expression::FunctionExpression(n) => &n.data,
            Expression::ArrowFunction(n) => &n.data,
            Expression::Delete(n) => &n.data,
            Expression::TypeOf(n) => &n.data,
            Expression::Void(n) => &n.data,
            Expression::Await(n) => &n.data,
            Expression::PrefixUnary(n) => &n.data,
            Expression::PostfixUnary(n) => &n.data,
            Expression::Binary(n) => &n.data,
            Expression::Conditional(n) => &n.data,
            Expression::Yield(n) => &n.data,
            Expression::Spread(n) => &n.data,
            Expression::ClassExpression(n) => &n.data,
            Expression::OmittedExpression(d) => d,
            Expression::ExpressionWithTypeArguments(n) => &n.data,
            Expression::As(n) => &n.data,
            Expression::NonNull(n) => &n.data,
            Expression::MetaProperty(n) => &n.data,
            Expression::Satisfies(n) => &n.data,
            Expression::JsxElement(n) => &n.data,
            Expression::JsxSelfClosingElement(n) => &n.data,
            Expression::JsxFragment(n) => &n.data,
            Expression::PartiallyEmitted(n) => &n.data,
            Expression::CommaList(n) => &n.data,
            Expression::ThisKeyword(d) => d,
            Expression::SuperKeyword(d) => d,
            Expression::ImportKeyword(d) => d,
            Expression::NullKeyword(d) => d,
            Expression::TrueKeyword(d) => d,
            Expression::FalseKeyword(d) => d,
        }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    #[inline]
    pub fn flags(&self) -> NodeFlags {
        self.data().flags
    }
}

impl<'a> TypeNode<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            TypeNode::KeywordType(n) => &n.data,
            TypeNode::TypeReference(n) => &n.data,
            TypeNode::FunctionType(n) => &n.data,
            TypeNode::ConstructorType(n) => &n.data,
            TypeNode::TypeQuery(n) => &n.data,
            TypeNode::TypeLiteral(n) => &n.data,
            TypeNode::ArrayType(n) => &n.data,
            TypeNode::TupleType(n) => &n.data,
            TypeNode::OptionalType(n) => &n.data,
            TypeNode::RestType(n) => &n.data,
            TypeNode::UnionType(n) => &n.data,
            TypeNode::IntersectionType(n) => &n.data,
            TypeNode::ConditionalType(n) => &n.data,
            TypeNode::InferType(n) => &n.data,
            TypeNode::ParenthesizedType(n) => &n.data,
            TypeNode::ThisType(d) => d,
            TypeNode::TypeOperator(n) => &n.data,
            TypeNode::IndexedAccessType(n) => &n.data,
            TypeNode::MappedType(n) => &n.data,
            TypeNode::LiteralType(n) => &n.data,
            TypeNode::NamedTupleMember(n) => &n.data,
            TypeNode::TemplateLiteralType(n) => &n.data,
            TypeNode::ImportType(n) => &n.data,
            TypeNode::TypePredicate(n) => &n.data,
            TypeNode::JSDocAllType(d) => d,
            TypeNode::JSDocNullableType(n) => &n.data,
            TypeNode::JSDocNonNullableType(n) => &n.data,
            TypeNode::JSDocOptionalType(n) => &n.data,
            TypeNode::JSDocVariadicType(n) => &n.data,
        }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }
}
