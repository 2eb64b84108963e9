//! Syntax tree node definitions.
//!
//! Nodes reference their children through arena-allocated references, so a
//! tree is immutable once built and can be shared freely between threads.
//! Only the shape the precedence engine and its callers read is modeled:
//! kinds, flags, operator tokens and child links. Source positions are not
//! tracked.

use crate::syntax_kind::SyntaxKind;
use crate::types::NodeFlags;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeData {
    pub kind: SyntaxKind,
    pub flags: NodeFlags,
}

impl NodeData {
    pub fn new(kind: SyntaxKind) -> Self {
        Self {
            kind,
            flags: NodeFlags::NONE,
        }
    }

    pub fn with_flags(kind: SyntaxKind, flags: NodeFlags) -> Self {
        Self { kind, flags }
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

// ============================================================================
// Token
// ============================================================================

/// A token that appears as a child of a node, such as an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub data: NodeData,
}

impl Token {
    pub fn new(kind: SyntaxKind) -> Self {
        Self {
            data: NodeData::new(kind),
        }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data.kind
    }
}

// ============================================================================
// Identifier
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Identifier<'a> {
    pub data: NodeData,
    pub text: &'a str,
}

// ============================================================================
// Type Nodes
// ============================================================================

#[derive(Debug)]
pub enum TypeNode<'a> {
    /// `any`, `string`, `void`, ...; the keyword is the node's kind.
    KeywordType(KeywordTypeNode),
    TypeReference(TypeReferenceNode<'a>),
    FunctionType(FunctionTypeNode<'a>),
    ConstructorType(FunctionTypeNode<'a>),
    TypeQuery(TypeQueryNode<'a>),
    TypeLiteral(TypeLiteralNode<'a>),
    ArrayType(ArrayTypeNode<'a>),
    TupleType(TupleTypeNode<'a>),
    OptionalType(WrappedTypeNode<'a>),
    RestType(WrappedTypeNode<'a>),
    UnionType(UnionOrIntersectionTypeNode<'a>),
    IntersectionType(UnionOrIntersectionTypeNode<'a>),
    ConditionalType(ConditionalTypeNode<'a>),
    InferType(InferTypeNode<'a>),
    ParenthesizedType(WrappedTypeNode<'a>),
    ThisType(NodeData),
    TypeOperator(TypeOperatorNode<'a>),
    IndexedAccessType(IndexedAccessTypeNode<'a>),
    MappedType(MappedTypeNode<'a>),
    LiteralType(LiteralTypeNode<'a>),
    NamedTupleMember(NamedTupleMemberNode<'a>),
    TemplateLiteralType(TemplateLiteralTypeNode<'a>),
    ImportType(ImportTypeNode<'a>),
    TypePredicate(TypePredicateNode<'a>),
    JSDocAllType(NodeData),
    JSDocNullableType(WrappedTypeNode<'a>),
    JSDocNonNullableType(WrappedTypeNode<'a>),
    JSDocOptionalType(WrappedTypeNode<'a>),
    JSDocVariadicType(WrappedTypeNode<'a>),
}

#[derive(Debug)]
pub struct KeywordTypeNode {
    pub data: NodeData,
}

/// A type node whose only child is another type: `T?`, `...T`, `(T)`,
/// and the JSDoc wrappers `?T`, `!T`, `T=`, `...T`.
#[derive(Debug)]
pub struct WrappedTypeNode<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    /// JSDoc nullability written after the type (`T?` rather than `?T`).
    pub postfix: bool,
}

#[derive(Debug)]
pub struct TypeReferenceNode<'a> {
    pub data: NodeData,
    pub type_name: EntityName<'a>,
    pub type_arguments: Option<NodeList<'a, &'a TypeNode<'a>>>,
}

/// Function and constructor types share one shape.
#[derive(Debug)]
pub struct FunctionTypeNode<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct TypeQueryNode<'a> {
    pub data: NodeData,
    pub expr_name: EntityName<'a>,
    pub type_arguments: Option<NodeList<'a, &'a TypeNode<'a>>>,
}

#[derive(Debug)]
pub struct TypeLiteralNode<'a> {
    pub data: NodeData,
    pub members: NodeList<'a, TypeElement<'a>>,
}

#[derive(Debug)]
pub struct ArrayTypeNode<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct TupleTypeNode<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, &'a TypeNode<'a>>,
}

#[derive(Debug)]
pub struct UnionOrIntersectionTypeNode<'a> {
    pub data: NodeData,
    pub types: NodeList<'a, &'a TypeNode<'a>>,
}

#[derive(Debug)]
pub struct ConditionalTypeNode<'a> {
    pub data: NodeData,
    pub check_type: &'a TypeNode<'a>,
    pub extends_type: &'a TypeNode<'a>,
    pub true_type: &'a TypeNode<'a>,
    pub false_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct InferTypeNode<'a> {
    pub data: NodeData,
    pub type_parameter: &'a TypeParameterDeclaration<'a>,
}

#[derive(Debug)]
pub struct TypeOperatorNode<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind, // KeyOfKeyword, UniqueKeyword, ReadonlyKeyword
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct IndexedAccessTypeNode<'a> {
    pub data: NodeData,
    pub object_type: &'a TypeNode<'a>,
    pub index_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct MappedTypeNode<'a> {
    pub data: NodeData,
    pub readonly_token: Option<Token>,
    pub type_parameter: &'a TypeParameterDeclaration<'a>,
    pub name_type: OptionalNode<'a, TypeNode<'a>>,
    pub question_token: Option<Token>,
    pub type_node: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct LiteralTypeNode<'a> {
    pub data: NodeData,
    pub literal: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct NamedTupleMemberNode<'a> {
    pub data: NodeData,
    pub dot_dot_dot_token: Option<Token>,
    pub name: Identifier<'a>,
    pub question_token: Option<Token>,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct TemplateLiteralTypeNode<'a> {
    pub data: NodeData,
    pub head: Token, // TemplateHead
    pub template_spans: NodeList<'a, TemplateLiteralTypeSpan<'a>>,
}

#[derive(Debug)]
pub struct TemplateLiteralTypeSpan<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    pub literal: Token, // TemplateMiddle or TemplateTail
}

#[derive(Debug)]
pub struct ImportTypeNode<'a> {
    pub data: NodeData,
    pub is_type_of: bool,
    pub argument: &'a TypeNode<'a>,
    pub qualifier: Option<EntityName<'a>>,
    pub type_arguments: Option<NodeList<'a, &'a TypeNode<'a>>>,
}

#[derive(Debug)]
pub struct TypePredicateNode<'a> {
    pub data: NodeData,
    pub asserts_modifier: Option<Token>,
    pub parameter_name: Identifier<'a>,
    pub type_node: OptionalNode<'a, TypeNode<'a>>,
}

// ============================================================================
// Type Members
// ============================================================================

#[derive(Debug)]
pub enum TypeElement<'a> {
    PropertySignature(PropertySignatureNode<'a>),
    CallSignature(CallSignatureNode<'a>),
    IndexSignature(IndexSignatureNode<'a>),
}

#[derive(Debug)]
pub struct PropertySignatureNode<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub question_token: Option<Token>,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct CallSignatureNode<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct IndexSignatureNode<'a> {
    pub data: NodeData,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
}

// ============================================================================
// Declarations and Names
// ============================================================================

#[derive(Debug)]
pub struct TypeParameterDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier<'a>,
    pub constraint: OptionalNode<'a, TypeNode<'a>>,
    pub default: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct ParameterDeclaration<'a> {
    pub data: NodeData,
    pub dot_dot_dot_token: Option<Token>,
    pub name: Identifier<'a>,
    pub question_token: Option<Token>,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub enum EntityName<'a> {
    Identifier(Identifier<'a>),
    QualifiedName(&'a QualifiedName<'a>),
}

#[derive(Debug)]
pub struct QualifiedName<'a> {
    pub data: NodeData,
    pub left: EntityName<'a>,
    pub right: Identifier<'a>,
}

#[derive(Debug)]
pub enum PropertyName<'a> {
    Identifier(Identifier<'a>),
    PrivateIdentifier(Identifier<'a>),
    StringLiteral(LiteralExpression<'a>),
    NumericLiteral(LiteralExpression<'a>),
    ComputedPropertyName(&'a ComputedPropertyName<'a>),
}

#[derive(Debug)]
pub struct ComputedPropertyName<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    Identifier(Identifier<'a>),
    PrivateIdentifier(Identifier<'a>),
    StringLiteral(LiteralExpression<'a>),
    NumericLiteral(LiteralExpression<'a>),
    BigIntLiteral(LiteralExpression<'a>),
    RegularExpressionLiteral(LiteralExpression<'a>),
    NoSubstitutionTemplateLiteral(LiteralExpression<'a>),
    TemplateExpression(TemplateExpression<'a>),
    ArrayLiteral(ArrayLiteralExpression<'a>),
    ObjectLiteral(ObjectLiteralExpression<'a>),
    PropertyAccess(PropertyAccessExpression<'a>),
    ElementAccess(ElementAccessExpression<'a>),
    Call(CallExpression<'a>),
    New(NewExpression<'a>),
    TaggedTemplate(TaggedTemplateExpression<'a>),
    TypeAssertion(TypeAssertionExpression<'a>),
    Parenthesized(ParenthesizedExpression<'a>),
    FunctionExpression(FunctionExpression<'a>),
    ArrowFunction(ArrowFunction<'a>),
    Delete(KeywordUnaryExpression<'a>),
    TypeOf(KeywordUnaryExpression<'a>),
    Void(KeywordUnaryExpression<'a>),
    Await(KeywordUnaryExpression<'a>),
    PrefixUnary(PrefixUnaryExpression<'a>),
    PostfixUnary(PostfixUnaryExpression<'a>),
    Binary(BinaryExpression<'a>),
    Conditional(ConditionalExpression<'a>),
    Yield(YieldExpression<'a>),
    Spread(SpreadElement<'a>),
    ClassExpression(ClassExpression<'a>),
    OmittedExpression(NodeData),
    ExpressionWithTypeArguments(ExpressionWithTypeArguments<'a>),
    As(TypeCheckExpression<'a>),
    NonNull(NonNullExpression<'a>),
    MetaProperty(MetaPropertyExpression<'a>),
    Satisfies(TypeCheckExpression<'a>),
    JsxElement(JsxElement<'a>),
    JsxSelfClosingElement(JsxSelfClosingElement<'a>),
    JsxFragment(JsxFragment<'a>),
    // Transformation output
    PartiallyEmitted(PartiallyEmittedExpression<'a>),
    CommaList(CommaListExpression<'a>),
    // Keyword expressions
    ThisKeyword(NodeData),
    SuperKeyword(NodeData),
    ImportKeyword(NodeData),
    NullKeyword(NodeData),
    TrueKeyword(NodeData),
    FalseKeyword(NodeData),
}

// -- Literal Expressions --

/// Numeric, bigint, string, regular expression and no-substitution
/// template literals. The literal flavor is the node's kind.
#[derive(Debug, Clone, Copy)]
pub struct LiteralExpression<'a> {
    pub data: NodeData,
    pub text: &'a str,
}

#[derive(Debug)]
pub struct TemplateExpression<'a> {
    pub data: NodeData,
    pub head: Token,
    pub template_spans: NodeList<'a, TemplateSpan<'a>>,
}

#[derive(Debug)]
pub struct TemplateSpan<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub literal: Token,
}

// -- Compound Expressions --

#[derive(Debug)]
pub struct ArrayLiteralExpression<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, &'a Expression<'a>>,
}

#[derive(Debug)]
pub struct ObjectLiteralExpression<'a> {
    pub data: NodeData,
    pub properties: NodeList<'a, ObjectLiteralElement<'a>>,
}

#[derive(Debug)]
pub enum ObjectLiteralElement<'a> {
    PropertyAssignment(PropertyAssignment<'a>),
    ShorthandPropertyAssignment(ShorthandPropertyAssignment<'a>),
    SpreadAssignment(SpreadAssignment<'a>),
}

#[derive(Debug)]
pub struct PropertyAssignment<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub initializer: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ShorthandPropertyAssignment<'a> {
    pub data: NodeData,
    pub name: Identifier<'a>,
}

#[derive(Debug)]
pub struct SpreadAssignment<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

// -- Member and Call Expressions --

#[derive(Debug)]
pub struct PropertyAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot_token: Option<Token>,
    pub name: MemberName<'a>,
}

#[derive(Debug)]
pub enum MemberName<'a> {
    Identifier(Identifier<'a>),
    PrivateIdentifier(Identifier<'a>),
}

#[derive(Debug)]
pub struct ElementAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot_token: Option<Token>,
    pub argument_expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct CallExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot_token: Option<Token>,
    pub type_arguments: Option<NodeList<'a, &'a TypeNode<'a>>>,
    pub arguments: NodeList<'a, &'a Expression<'a>>,
}

#[derive(Debug)]
pub struct NewExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, &'a TypeNode<'a>>>,
    /// `None` for `new Foo`; `Some(&[])` for `new Foo()`.
    pub arguments: Option<NodeList<'a, &'a Expression<'a>>>,
}

#[derive(Debug)]
pub struct TaggedTemplateExpression<'a> {
    pub data: NodeData,
    pub tag: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, &'a TypeNode<'a>>>,
    pub template: &'a Expression<'a>, // NoSubstitutionTemplateLiteral or TemplateExpression
}

#[derive(Debug)]
pub struct MetaPropertyExpression<'a> {
    pub data: NodeData,
    pub keyword_token: SyntaxKind, // NewKeyword or ImportKeyword
    pub name: Identifier<'a>,
}

#[derive(Debug)]
pub struct ExpressionWithTypeArguments<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, &'a TypeNode<'a>>>,
}

// -- Type Assertions --

#[derive(Debug)]
pub struct TypeAssertionExpression<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    pub expression: &'a Expression<'a>,
}

/// `x as T` and `x satisfies T`.
#[derive(Debug)]
pub struct TypeCheckExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct NonNullExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

// -- Operators --

#[derive(Debug)]
pub struct ParenthesizedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// `delete x`, `typeof x`, `void x` and `await x`.
#[derive(Debug)]
pub struct KeywordUnaryExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PrefixUnaryExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub operand: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PostfixUnaryExpression<'a> {
    pub data: NodeData,
    pub operand: &'a Expression<'a>,
    pub operator: SyntaxKind,
}

#[derive(Debug)]
pub struct BinaryExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator_token: Token,
    pub right: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ConditionalExpression<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub when_true: &'a Expression<'a>,
    pub when_false: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct YieldExpression<'a> {
    pub data: NodeData,
    pub asterisk_token: Option<Token>,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct SpreadElement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct CommaListExpression<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, &'a Expression<'a>>,
}

/// Wrapper left behind by a transformation that elided part of the
/// original node. Transparent for precedence purposes.
#[derive(Debug)]
pub struct PartiallyEmittedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

// -- Functions and Classes --

#[derive(Debug)]
pub struct FunctionExpression<'a> {
    pub data: NodeData,
    pub name: Option<Identifier<'a>>,
    pub asterisk_token: Option<Token>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: &'a Block<'a>,
}

#[derive(Debug)]
pub struct ArrowFunction<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: ArrowFunctionBody<'a>,
}

#[derive(Debug)]
pub enum ArrowFunctionBody<'a> {
    Block(&'a Block<'a>),
    Expression(&'a Expression<'a>),
}

#[derive(Debug)]
pub struct ClassExpression<'a> {
    pub data: NodeData,
    pub name: Option<Identifier<'a>>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub heritage_clauses: NodeList<'a, HeritageClause<'a>>,
    pub members: NodeList<'a, ClassElement<'a>>,
}

#[derive(Debug)]
pub struct HeritageClause<'a> {
    pub data: NodeData,
    pub token: SyntaxKind, // ExtendsKeyword or ImplementsKeyword
    pub types: NodeList<'a, ExpressionWithTypeArguments<'a>>,
}

#[derive(Debug)]
pub enum ClassElement<'a> {
    Property(PropertyDeclaration<'a>),
    Method(MethodDeclaration<'a>),
    SemicolonClassElement(NodeData),
}

#[derive(Debug)]
pub struct PropertyDeclaration<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct MethodDeclaration<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: OptionalNode<'a, Block<'a>>,
}

// -- JSX --

#[derive(Debug)]
pub struct JsxElement<'a> {
    pub data: NodeData,
    pub tag_name: &'a Expression<'a>,
    pub attributes: NodeList<'a, JsxAttribute<'a>>,
    pub children: NodeList<'a, JsxChild<'a>>,
}

#[derive(Debug)]
pub struct JsxSelfClosingElement<'a> {
    pub data: NodeData,
    pub tag_name: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, &'a TypeNode<'a>>>,
    pub attributes: NodeList<'a, JsxAttribute<'a>>,
}

#[derive(Debug)]
pub struct JsxFragment<'a> {
    pub data: NodeData,
    pub children: NodeList<'a, JsxChild<'a>>,
}

#[derive(Debug)]
pub struct JsxAttribute<'a> {
    pub data: NodeData,
    pub name: Identifier<'a>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub enum JsxChild<'a> {
    Text(LiteralExpression<'a>),
    /// `{expr}`; `None` for an empty `{}`.
    Expression(OptionalNode<'a, Expression<'a>>),
    /// A nested element, self-closing element or fragment.
    Element(&'a Expression<'a>),
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    Block(&'a Block<'a>),
    EmptyStatement(NodeData),
    ExpressionStatement(ExpressionStatement<'a>),
    ReturnStatement(ReturnStatement<'a>),
}

#[derive(Debug)]
pub struct Block<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ReturnStatement<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
}
