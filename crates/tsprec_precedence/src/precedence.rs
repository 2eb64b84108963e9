//! Operator precedence for expressions and binary operators.

use tsprec_ast::syntax_kind::SyntaxKind;
use tsprec_ast::utilities::is_optional_chain;
use tsprec_ast::Expression;

/// Expression precedence levels, from weakest to strongest binding.
///
/// Each level corresponds to one production of the expression grammar.
/// A few levels deviate from the textbook grammar so that parenthesization
/// decisions stay consistent; those are noted on the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum OperatorPrecedence {
    /// No precedence: the expression or token is not an operator. Compares
    /// lower than every real level, so precedence climbing stops on it.
    Invalid = -1,
    /// `a, b`
    Comma = 0,
    /// `...a`. Above comma because of how element lists are parsed.
    Spread = 1,
    /// `yield a`
    Yield = 2,
    /// `a = b`, compound assignments, and arrow functions.
    Assignment = 3,
    /// `a ? b : c`. Shares the assignment production in the grammar but
    /// ranks one above it here.
    Conditional = 4,
    /// `a ?? b`
    Coalesce = 5,
    LogicalOr = 6,
    LogicalAnd = 7,
    BitwiseOr = 8,
    BitwiseXor = 9,
    BitwiseAnd = 10,
    /// `==`, `!=`, `===`, `!==`
    Equality = 11,
    /// `<`, `>`, `<=`, `>=`, `instanceof`, `in`, `as`, `satisfies`
    Relational = 12,
    Shift = 13,
    Additive = 14,
    Multiplicative = 15,
    /// `a ** b`
    Exponentiation = 16,
    /// Prefix operators, `typeof`, `void`, `delete`, `await`, `<T>a`, `a!`.
    Unary = 17,
    /// Postfix `++` and `--`.
    Update = 18,
    /// `new a` without an argument list.
    LeftHandSide = 19,
    /// `a?.b`, `a?.[b]`, `a?.()` and the links chained after them.
    OptionalChain = 20,
    /// `a.b`, `a[b]`, `a()`, `new a()`, tagged templates, meta properties.
    Member = 21,
    /// Identifiers, literals, `this`, function and class expressions, JSX.
    Primary = 22,
    /// `(a)`. Above primary so that an already parenthesized child is never
    /// wrapped again.
    Parentheses = 23,
}

impl OperatorPrecedence {
    pub const LOWEST: OperatorPrecedence = OperatorPrecedence::Comma;
    pub const HIGHEST: OperatorPrecedence = OperatorPrecedence::Parentheses;
    /// Minimum precedence of an expression allowed where a bare comma would
    /// be ambiguous, such as an argument or array element.
    pub const DISALLOW_COMMA: OperatorPrecedence = OperatorPrecedence::Yield;

    #[inline]
    pub fn is_valid(self) -> bool {
        self != OperatorPrecedence::Invalid
    }
}

bitflags::bitflags! {
    /// Contextual facts about an expression that change its precedence.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OperatorPrecedenceFlags: u8 {
        const NONE                  = 0;
        /// A `new` expression written without an argument list.
        const NEW_WITHOUT_ARGUMENTS = 1 << 0;
        /// A property access, element access or call inside an optional chain.
        const OPTIONAL_CHAIN        = 1 << 1;
    }
}

/// The operator of `expression`: the operator token of binary and unary
/// expressions, and the expression's own kind for everything else.
pub fn expression_operator(expression: &Expression<'_>) -> SyntaxKind {
    match expression {
        Expression::Binary(n) => n.operator_token.kind(),
        Expression::PrefixUnary(n) => n.operator,
        Expression::PostfixUnary(n) => n.operator,
        _ => expression.kind(),
    }
}

/// The contextual flags of `expression`. A `new` expression is never part
/// of an optional chain, so at most one flag is set.
pub fn expression_precedence_flags(expression: &Expression<'_>) -> OperatorPrecedenceFlags {
    match expression {
        Expression::New(n) if n.arguments.is_none() => {
            OperatorPrecedenceFlags::NEW_WITHOUT_ARGUMENTS
        }
        _ if is_optional_chain(expression) => OperatorPrecedenceFlags::OPTIONAL_CHAIN,
        _ => OperatorPrecedenceFlags::NONE,
    }
}

/// Get the precedence of an expression.
pub fn get_expression_precedence(expression: &Expression<'_>) -> OperatorPrecedence {
    get_operator_precedence(
        expression.kind(),
        expression_operator(expression),
        expression_precedence_flags(expression),
    )
}

/// Get the precedence of an operator given the kind of the node it appears
/// in, the operator token (or the node kind for non-operator expressions),
/// and the contextual flags.
pub fn get_operator_precedence(
    node_kind: SyntaxKind,
    operator_kind: SyntaxKind,
    flags: OperatorPrecedenceFlags,
) -> OperatorPrecedence {
    match node_kind {
        SyntaxKind::CommaListExpression => OperatorPrecedence::Comma,
        SyntaxKind::SpreadElement => OperatorPrecedence::Spread,
        SyntaxKind::YieldExpression => OperatorPrecedence::Yield,
        // Ranked with assignment rather than as a primary expression.
        SyntaxKind::ArrowFunction => OperatorPrecedence::Assignment,
        SyntaxKind::ConditionalExpression => OperatorPrecedence::Conditional,
        SyntaxKind::BinaryExpression => match operator_kind {
            SyntaxKind::CommaToken => OperatorPrecedence::Comma,
            SyntaxKind::EqualsToken
            | SyntaxKind::PlusEqualsToken
            | SyntaxKind::MinusEqualsToken
            | SyntaxKind::AsteriskAsteriskEqualsToken
            | SyntaxKind::AsteriskEqualsToken
            | SyntaxKind::SlashEqualsToken
            | SyntaxKind::PercentEqualsToken
            | SyntaxKind::LessThanLessThanEqualsToken
            | SyntaxKind::GreaterThanGreaterThanEqualsToken
            | SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
            | SyntaxKind::AmpersandEqualsToken
            | SyntaxKind::CaretEqualsToken
            | SyntaxKind::BarEqualsToken
            | SyntaxKind::BarBarEqualsToken
            | SyntaxKind::AmpersandAmpersandEqualsToken
            | SyntaxKind::QuestionQuestionEqualsToken => OperatorPrecedence::Assignment,
            _ => get_binary_operator_precedence(operator_kind),
        },
        SyntaxKind::TypeAssertionExpression
        | SyntaxKind::NonNullExpression
        | SyntaxKind::PrefixUnaryExpression
        | SyntaxKind::TypeOfExpression
        | SyntaxKind::VoidExpression
        | SyntaxKind::DeleteExpression
        | SyntaxKind::AwaitExpression => OperatorPrecedence::Unary,
        SyntaxKind::PostfixUnaryExpression => OperatorPrecedence::Update,
        SyntaxKind::PropertyAccessExpression
        | SyntaxKind::ElementAccessExpression
        | SyntaxKind::CallExpression => {
            if flags.contains(OperatorPrecedenceFlags::OPTIONAL_CHAIN) {
                OperatorPrecedence::OptionalChain
            } else {
                OperatorPrecedence::Member
            }
        }
        SyntaxKind::NewExpression => {
            if flags.contains(OperatorPrecedenceFlags::NEW_WITHOUT_ARGUMENTS) {
                OperatorPrecedence::LeftHandSide
            } else {
                OperatorPrecedence::Member
            }
        }
        SyntaxKind::TaggedTemplateExpression
        | SyntaxKind::MetaProperty
        | SyntaxKind::ExpressionWithTypeArguments => OperatorPrecedence::Member,
        SyntaxKind::AsExpression | SyntaxKind::SatisfiesExpression => {
            OperatorPrecedence::Relational
        }
        SyntaxKind::ThisKeyword
        | SyntaxKind::SuperKeyword
        | SyntaxKind::ImportKeyword
        | SyntaxKind::Identifier
        | SyntaxKind::PrivateIdentifier
        | SyntaxKind::NullKeyword
        | SyntaxKind::TrueKeyword
        | SyntaxKind::FalseKeyword
        | SyntaxKind::NumericLiteral
        | SyntaxKind::BigIntLiteral
        | SyntaxKind::StringLiteral
        | SyntaxKind::ArrayLiteralExpression
        | SyntaxKind::ObjectLiteralExpression
        | SyntaxKind::FunctionExpression
        | SyntaxKind::ClassExpression
        | SyntaxKind::RegularExpressionLiteral
        | SyntaxKind::NoSubstitutionTemplateLiteral
        | SyntaxKind::TemplateExpression
        | SyntaxKind::OmittedExpression
        | SyntaxKind::JsxElement
        | SyntaxKind::JsxSelfClosingElement
        | SyntaxKind::JsxFragment => OperatorPrecedence::Primary,
        SyntaxKind::ParenthesizedExpression => OperatorPrecedence::Parentheses,
        _ => OperatorPrecedence::Invalid,
    }
}

/// Get the binary operator precedence for a given token kind.
///
/// Returns [`OperatorPrecedence::Invalid`] for tokens that do not continue a
/// binary expression. Mixing `??` with `||` or `&&` is a grammar error this
/// table does not detect.
pub fn get_binary_operator_precedence(kind: SyntaxKind) -> OperatorPrecedence {
    match kind {
        SyntaxKind::QuestionQuestionToken => OperatorPrecedence::Coalesce,
        SyntaxKind::BarBarToken => OperatorPrecedence::LogicalOr,
        SyntaxKind::AmpersandAmpersandToken => OperatorPrecedence::LogicalAnd,
        SyntaxKind::BarToken => OperatorPrecedence::BitwiseOr,
        SyntaxKind::CaretToken => OperatorPrecedence::BitwiseXor,
        SyntaxKind::AmpersandToken => OperatorPrecedence::BitwiseAnd,
        SyntaxKind::EqualsEqualsToken
        | SyntaxKind::ExclamationEqualsToken
        | SyntaxKind::EqualsEqualsEqualsToken
        | SyntaxKind::ExclamationEqualsEqualsToken => OperatorPrecedence::Equality,
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken
        | SyntaxKind::InstanceOfKeyword
        | SyntaxKind::InKeyword
        | SyntaxKind::AsKeyword
        | SyntaxKind::SatisfiesKeyword => OperatorPrecedence::Relational,
        SyntaxKind::LessThanLessThanToken
        | SyntaxKind::GreaterThanGreaterThanToken
        | SyntaxKind::GreaterThanGreaterThanGreaterThanToken => OperatorPrecedence::Shift,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => OperatorPrecedence::Additive,
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => {
            OperatorPrecedence::Multiplicative
        }
        SyntaxKind::AsteriskAsteriskToken => OperatorPrecedence::Exponentiation,
        _ => OperatorPrecedence::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsprec_ast::NodeFactory;
    use tsprec_core::NodeArena;

    fn binary_precedence(text: &str) -> OperatorPrecedence {
        let kind = SyntaxKind::from_token_text(text)
            .unwrap_or_else(|| panic!("no token for {text:?}"));
        get_binary_operator_precedence(kind)
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    #[test]
    fn test_invalid_is_lowest() {
        assert!(OperatorPrecedence::Invalid < OperatorPrecedence::LOWEST);
        assert_eq!(OperatorPrecedence::Invalid as i8, -1);
        assert_eq!(OperatorPrecedence::HIGHEST as i8, 23);
        assert!(!OperatorPrecedence::Invalid.is_valid());
        assert!(OperatorPrecedence::DISALLOW_COMMA > OperatorPrecedence::Comma);
    }

    #[test]
    fn test_binary_operator_chain_is_monotonic() {
        let chain = [
            "??", "||", "&&", "|", "^", "&", "==", "<", "<<", "+", "*", "**",
        ];
        for pair in chain.windows(2) {
            assert!(
                binary_precedence(pair[0]) < binary_precedence(pair[1]),
                "{} should bind looser than {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_binary_operator_groups() {
        for op in ["==", "!=", "===", "!=="] {
            assert_eq!(binary_precedence(op), OperatorPrecedence::Equality);
        }
        for op in ["<", ">", "<=", ">=", "instanceof", "in", "as", "satisfies"] {
            assert_eq!(binary_precedence(op), OperatorPrecedence::Relational);
        }
        for op in ["<<", ">>", ">>>"] {
            assert_eq!(binary_precedence(op), OperatorPrecedence::Shift);
        }
        for op in ["*", "/", "%"] {
            assert_eq!(binary_precedence(op), OperatorPrecedence::Multiplicative);
        }
    }

    #[test]
    fn test_non_binary_tokens_are_invalid() {
        for op in [",", "=", "+=", "=>", "!", "?", "(", "typeof"] {
            assert_eq!(binary_precedence(op), OperatorPrecedence::Invalid, "{op}");
        }
    }

    // ========================================================================
    // Operator precedence by node kind
    // ========================================================================

    #[test]
    fn test_binary_expression_comma_and_assignment() {
        let none = OperatorPrecedenceFlags::NONE;
        assert_eq!(
            get_operator_precedence(SyntaxKind::BinaryExpression, SyntaxKind::CommaToken, none),
            OperatorPrecedence::Comma
        );
        let assignments = SyntaxKind::ALL
            .iter()
            .copied()
            .filter(|kind| kind.is_assignment_operator());
        let mut count = 0;
        for op in assignments {
            assert_eq!(
                get_operator_precedence(SyntaxKind::BinaryExpression, op, none),
                OperatorPrecedence::Assignment,
                "{op}"
            );
            count += 1;
        }
        assert_eq!(count, 16);
        assert_eq!(
            get_operator_precedence(SyntaxKind::BinaryExpression, SyntaxKind::PlusToken, none),
            OperatorPrecedence::Additive
        );
    }

    #[test]
    fn test_flags_select_tiers() {
        let member = get_operator_precedence(
            SyntaxKind::CallExpression,
            SyntaxKind::CallExpression,
            OperatorPrecedenceFlags::NONE,
        );
        let chain = get_operator_precedence(
            SyntaxKind::CallExpression,
            SyntaxKind::CallExpression,
            OperatorPrecedenceFlags::OPTIONAL_CHAIN,
        );
        assert_eq!(member, OperatorPrecedence::Member);
        assert_eq!(chain, OperatorPrecedence::OptionalChain);

        let new_bare = get_operator_precedence(
            SyntaxKind::NewExpression,
            SyntaxKind::NewExpression,
            OperatorPrecedenceFlags::NEW_WITHOUT_ARGUMENTS,
        );
        assert_eq!(new_bare, OperatorPrecedence::LeftHandSide);
    }

    #[test]
    fn test_non_expression_kinds_are_invalid() {
        for kind in [
            SyntaxKind::Block,
            SyntaxKind::VariableDeclaration,
            SyntaxKind::UnionType,
            SyntaxKind::PlusToken,
            SyntaxKind::Unknown,
        ] {
            assert_eq!(
                get_operator_precedence(kind, kind, OperatorPrecedenceFlags::NONE),
                OperatorPrecedence::Invalid,
                "{kind}"
            );
        }
    }

    // ========================================================================
    // Expression precedence
    // ========================================================================

    #[test]
    fn test_expression_operator() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let a = f.identifier("a");
        assert_eq!(
            expression_operator(f.binary(a, SyntaxKind::BarBarToken, a)),
            SyntaxKind::BarBarToken
        );
        assert_eq!(
            expression_operator(f.prefix_unary(SyntaxKind::TildeToken, a)),
            SyntaxKind::TildeToken
        );
        assert_eq!(
            expression_operator(f.postfix_unary(a, SyntaxKind::PlusPlusToken)),
            SyntaxKind::PlusPlusToken
        );
        assert_eq!(expression_operator(a), SyntaxKind::Identifier);
    }

    #[test]
    fn test_optional_chain_binds_looser_than_member() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let a = f.identifier("a");
        let chained = get_expression_precedence(f.property_access_chain(a, true, "b"));
        let plain = get_expression_precedence(f.property_access(a, "b"));
        assert_eq!(chained, OperatorPrecedence::OptionalChain);
        assert_eq!(plain, OperatorPrecedence::Member);
        assert!(chained < plain);
    }

    #[test]
    fn test_new_without_arguments() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let foo = f.identifier("Foo");
        let bare = f.new_expression(foo, None);
        let called = f.new_expression(foo, Some(&[]));
        assert_eq!(
            expression_precedence_flags(bare),
            OperatorPrecedenceFlags::NEW_WITHOUT_ARGUMENTS
        );
        assert_eq!(get_expression_precedence(bare), OperatorPrecedence::LeftHandSide);
        assert_eq!(get_expression_precedence(called), OperatorPrecedence::Member);
    }

    #[test]
    fn test_parentheses_outrank_primary() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let a = f.identifier("a");
        let comma = f.binary(a, SyntaxKind::CommaToken, a);
        assert_eq!(get_expression_precedence(comma), OperatorPrecedence::Comma);
        let wrapped = f.parenthesized(comma);
        assert_eq!(get_expression_precedence(wrapped), OperatorPrecedence::Parentheses);
        let literal = f.numeric_literal("1");
        assert!(get_expression_precedence(wrapped) > get_expression_precedence(literal));
    }

    #[test]
    fn test_deliberate_deviations() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let a = f.identifier("a");
        assert_eq!(
            get_expression_precedence(f.arrow_function_expression_body(a)),
            OperatorPrecedence::Assignment
        );
        assert_eq!(
            get_expression_precedence(f.conditional(a, a, a)),
            OperatorPrecedence::Conditional
        );
        assert_eq!(
            get_expression_precedence(f.yield_expression(false, None)),
            OperatorPrecedence::Yield
        );
        assert_eq!(get_expression_precedence(f.spread(a)), OperatorPrecedence::Spread);
    }

    #[test]
    fn test_partially_emitted_has_no_precedence_of_its_own() {
        let arena = NodeArena::new();
        let f = NodeFactory::new(&arena);
        let wrapped = f.partially_emitted(f.identifier("a"));
        assert_eq!(get_expression_precedence(wrapped), OperatorPrecedence::Invalid);
    }
}
