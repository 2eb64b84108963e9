//! Precedence of type nodes.

use tracing::error;
use tsprec_ast::syntax_kind::SyntaxKind;
use tsprec_ast::TypeNode;

/// Type precedence levels, from weakest to strongest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TypePrecedence {
    /// `A extends B ? C : D`
    Conditional,
    /// `T=` and `...T` in JSDoc.
    JSDoc,
    /// `() => T`, `new () => T`, and `infer X extends T`.
    Function,
    /// `A | B`
    Union,
    /// `A & B`
    Intersection,
    /// `keyof T`, `unique T`, `readonly T`, and `infer X`.
    TypeOperator,
    /// `T[]`, `T[K]`, `T?`, and `typeof x`.
    Postfix,
    /// Type references, literals, keywords, tuples, parenthesized types.
    NonArray,
}

impl TypePrecedence {
    pub const LOWEST: TypePrecedence = TypePrecedence::Conditional;
    pub const HIGHEST: TypePrecedence = TypePrecedence::NonArray;
}

/// Get the precedence of a type node.
///
/// # Panics
///
/// Panics if a keyword type node carries a kind that is not a type keyword.
pub fn get_type_node_precedence(node: &TypeNode<'_>) -> TypePrecedence {
    match node {
        TypeNode::ConditionalType(_) => TypePrecedence::Conditional,
        TypeNode::JSDocOptionalType(_) | TypeNode::JSDocVariadicType(_) => TypePrecedence::JSDoc,
        TypeNode::FunctionType(_) | TypeNode::ConstructorType(_) => TypePrecedence::Function,
        TypeNode::UnionType(_) => TypePrecedence::Union,
        TypeNode::IntersectionType(_) => TypePrecedence::Intersection,
        TypeNode::TypeOperator(_) => TypePrecedence::TypeOperator,
        // `infer X extends T` swallows everything to its right like a
        // function type does.
        TypeNode::InferType(n) => {
            if n.type_parameter.constraint.is_some() {
                TypePrecedence::Function
            } else {
                TypePrecedence::TypeOperator
            }
        }
        TypeNode::IndexedAccessType(_) | TypeNode::ArrayType(_) | TypeNode::OptionalType(_) => {
            TypePrecedence::Postfix
        }
        // Grammatically a non-array type, but `typeof x[]` must not be
        // emitted for an array of `typeof x`.
        TypeNode::TypeQuery(_) => TypePrecedence::Postfix,
        TypeNode::KeywordType(n) => keyword_type_precedence(n.data.kind),
        TypeNode::JSDocAllType(_)
        | TypeNode::JSDocNullableType(_)
        | TypeNode::JSDocNonNullableType(_)
        | TypeNode::LiteralType(_)
        | TypeNode::TypePredicate(_)
        | TypeNode::TypeReference(_)
        | TypeNode::TypeLiteral(_)
        | TypeNode::TupleType(_)
        | TypeNode::RestType(_)
        | TypeNode::ParenthesizedType(_)
        | TypeNode::ThisType(_)
        | TypeNode::MappedType(_)
        | TypeNode::NamedTupleMember(_)
        | TypeNode::TemplateLiteralType(_)
        | TypeNode::ImportType(_) => TypePrecedence::NonArray,
    }
}

fn keyword_type_precedence(kind: SyntaxKind) -> TypePrecedence {
    match kind {
        SyntaxKind::AnyKeyword
        | SyntaxKind::UnknownKeyword
        | SyntaxKind::StringKeyword
        | SyntaxKind::NumberKeyword
        | SyntaxKind::BigIntKeyword
        | SyntaxKind::SymbolKeyword
        | SyntaxKind::BooleanKeyword
        | SyntaxKind::UndefinedKeyword
        | SyntaxKind::NeverKeyword
        | SyntaxKind::ObjectKeyword
        | SyntaxKind::IntrinsicKeyword
        | SyntaxKind::VoidKeyword => TypePrecedence::NonArray,
        _ => unhandled_type_node(kind),
    }
}

#[cold]
#[inline(never)]
fn unhandled_type_node(kind: SyntaxKind) -> ! {
    error!(kind = %kind, "type node kind has no precedence");
    panic!("unhandled TypeNode: {kind}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsprec_ast::NodeFactory;
    use tsprec_core::NodeArena;

    #[test]
    fn test_levels_are_ordered() {
        let levels = [
            TypePrecedence::Conditional,
            TypePrecedence::JSDoc,
            TypePrecedence::Function,
            TypePrecedence::Union,
            TypePrecedence::Intersection,
            TypePrecedence::TypeOperator,
            TypePrecedence::Postfix,
            TypePrecedence::NonArray,
        ];
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(levels[0], TypePrecedence::LOWEST);
        assert_eq!(levels[7], TypePrecedence::HIGHEST);
    }

    #[test]
    fn test_composite_types() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let a = f.type_reference("A", None);
        let b = f.type_reference("B", None);

        assert_eq!(
            get_type_node_precedence(f.conditional_type(a, b, a, b)),
            TypePrecedence::Conditional
        );
        assert_eq!(get_type_node_precedence(f.function_type(a)), TypePrecedence::Function);
        assert_eq!(get_type_node_precedence(f.constructor_type(a)), TypePrecedence::Function);
        assert_eq!(get_type_node_precedence(f.union_type(&[a, b])), TypePrecedence::Union);
        assert_eq!(
            get_type_node_precedence(f.intersection_type(&[a, b])),
            TypePrecedence::Intersection
        );
        assert_eq!(
            get_type_node_precedence(f.type_operator(SyntaxKind::KeyOfKeyword, a)),
            TypePrecedence::TypeOperator
        );
        assert_eq!(get_type_node_precedence(f.array_type(a)), TypePrecedence::Postfix);
        assert_eq!(get_type_node_precedence(a), TypePrecedence::NonArray);
    }

    #[test]
    fn test_infer_depends_on_constraint() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let bare = f.infer_type("U", None);
        let constrained = f.infer_type("U", Some(f.keyword_type(SyntaxKind::StringKeyword)));
        assert_eq!(get_type_node_precedence(bare), TypePrecedence::TypeOperator);
        assert_eq!(get_type_node_precedence(constrained), TypePrecedence::Function);
    }

    #[test]
    fn test_type_query_ranks_as_postfix() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        assert_eq!(get_type_node_precedence(f.type_query("x")), TypePrecedence::Postfix);
    }

    #[test]
    fn test_jsdoc_types() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let a = f.type_reference("A", None);
        assert_eq!(get_type_node_precedence(f.jsdoc_optional_type(a)), TypePrecedence::JSDoc);
        assert_eq!(get_type_node_precedence(f.jsdoc_variadic_type(a)), TypePrecedence::JSDoc);
        assert_eq!(
            get_type_node_precedence(f.jsdoc_nullable_type(a, false)),
            TypePrecedence::NonArray
        );
        assert_eq!(get_type_node_precedence(f.jsdoc_all_type()), TypePrecedence::NonArray);
    }

    #[test]
    fn test_every_type_keyword_is_non_array() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        for kind in [
            SyntaxKind::AnyKeyword,
            SyntaxKind::UnknownKeyword,
            SyntaxKind::StringKeyword,
            SyntaxKind::NumberKeyword,
            SyntaxKind::BigIntKeyword,
            SyntaxKind::SymbolKeyword,
            SyntaxKind::BooleanKeyword,
            SyntaxKind::UndefinedKeyword,
            SyntaxKind::NeverKeyword,
            SyntaxKind::ObjectKeyword,
            SyntaxKind::IntrinsicKeyword,
            SyntaxKind::VoidKeyword,
        ] {
            assert_eq!(get_type_node_precedence(f.keyword_type(kind)), TypePrecedence::NonArray);
        }
    }

    #[test]
    #[should_panic(expected = "unhandled TypeNode")]
    fn test_non_type_keyword_panics() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        get_type_node_precedence(f.keyword_type(SyntaxKind::IfKeyword));
    }
}
