//! SyntaxKind: the closed taxonomy of every token and node kind.
//!
//! The declaration order of the variants is part of the contract. Range
//! markers such as [`SyntaxKind::FIRST_KEYWORD`] assume that each semantic
//! group occupies a contiguous run of discriminants, and the range queries
//! below are plain ordinal bounds checks. Moving a variant across a group
//! boundary must be paired with a marker update; [`crate::kind_ranges`]
//! checks every declared range against an ordinal-independent definition of
//! its members.

use std::fmt;

macro_rules! syntax_kinds {
    ($($name:ident = $value:literal,)*) => {
        /// The kind of a syntax token or node.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum SyntaxKind {
            $($name = $value,)*
        }

        impl SyntaxKind {
            /// Every kind, in ordinal order. `ALL[k as usize] == k` for every `k`.
            pub const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$name,)*];
        }
    };
}

syntax_kinds! {
    // ========================================================================
    // Tokens
    // ========================================================================
    Unknown = 0,
    EndOfFileToken = 1,

    // Trivia
    SingleLineCommentTrivia = 2,
    MultiLineCommentTrivia = 3,
    NewLineTrivia = 4,
    WhitespaceTrivia = 5,
    ShebangTrivia = 6,
    ConflictMarkerTrivia = 7,
    NonTextFileMarkerTrivia = 8,

    // Literals
    NumericLiteral = 9,
    BigIntLiteral = 10,
    StringLiteral = 11,
    JsxText = 12,
    JsxTextAllWhiteSpaces = 13,
    RegularExpressionLiteral = 14,
    NoSubstitutionTemplateLiteral = 15,

    // Pseudo-literals
    TemplateHead = 16,
    TemplateMiddle = 17,
    TemplateTail = 18,

    // Punctuation
    OpenBraceToken = 19,
    CloseBraceToken = 20,
    OpenParenToken = 21,
    CloseParenToken = 22,
    OpenBracketToken = 23,
    CloseBracketToken = 24,
    DotToken = 25,
    DotDotDotToken = 26,
    SemicolonToken = 27,
    CommaToken = 28,
    QuestionDotToken = 29,
    LessThanToken = 30,
    LessThanSlashToken = 31,
    GreaterThanToken = 32,
    LessThanEqualsToken = 33,
    GreaterThanEqualsToken = 34,
    EqualsEqualsToken = 35,
    ExclamationEqualsToken = 36,
    EqualsEqualsEqualsToken = 37,
    ExclamationEqualsEqualsToken = 38,
    EqualsGreaterThanToken = 39,
    PlusToken = 40,
    MinusToken = 41,
    AsteriskToken = 42,
    AsteriskAsteriskToken = 43,
    SlashToken = 44,
    PercentToken = 45,
    PlusPlusToken = 46,
    MinusMinusToken = 47,
    LessThanLessThanToken = 48,
    GreaterThanGreaterThanToken = 49,
    GreaterThanGreaterThanGreaterThanToken = 50,
    AmpersandToken = 51,
    BarToken = 52,
    CaretToken = 53,
    ExclamationToken = 54,
    TildeToken = 55,
    AmpersandAmpersandToken = 56,
    BarBarToken = 57,
    QuestionToken = 58,
    ColonToken = 59,
    AtToken = 60,
    QuestionQuestionToken = 61,
    BacktickToken = 62,
    HashToken = 63,

    // Assignments
    EqualsToken = 64,
    PlusEqualsToken = 65,
    MinusEqualsToken = 66,
    AsteriskEqualsToken = 67,
    AsteriskAsteriskEqualsToken = 68,
    SlashEqualsToken = 69,
    PercentEqualsToken = 70,
    LessThanLessThanEqualsToken = 71,
    GreaterThanGreaterThanEqualsToken = 72,
    GreaterThanGreaterThanGreaterThanEqualsToken = 73,
    AmpersandEqualsToken = 74,
    BarEqualsToken = 75,
    CaretEqualsToken = 76,
    BarBarEqualsToken = 77,
    AmpersandAmpersandEqualsToken = 78,
    QuestionQuestionEqualsToken = 79,

    // Identifiers
    Identifier = 80,
    PrivateIdentifier = 81,
    JSDocCommentTextToken = 82,

    // Reserved words
    BreakKeyword = 83,
    CaseKeyword = 84,
    CatchKeyword = 85,
    ClassKeyword = 86,
    ConstKeyword = 87,
    ContinueKeyword = 88,
    DebuggerKeyword = 89,
    DefaultKeyword = 90,
    DeleteKeyword = 91,
    DoKeyword = 92,
    ElseKeyword = 93,
    EnumKeyword = 94,
    ExportKeyword = 95,
    ExtendsKeyword = 96,
    FalseKeyword = 97,
    FinallyKeyword = 98,
    ForKeyword = 99,
    FunctionKeyword = 100,
    IfKeyword = 101,
    ImportKeyword = 102,
    InKeyword = 103,
    InstanceOfKeyword = 104,
    NewKeyword = 105,
    NullKeyword = 106,
    ReturnKeyword = 107,
    SuperKeyword = 108,
    SwitchKeyword = 109,
    ThisKeyword = 110,
    ThrowKeyword = 111,
    TrueKeyword = 112,
    TryKeyword = 113,
    TypeOfKeyword = 114,
    VarKeyword = 115,
    VoidKeyword = 116,
    WhileKeyword = 117,
    WithKeyword = 118,

    // Strict mode reserved words
    ImplementsKeyword = 119,
    InterfaceKeyword = 120,
    LetKeyword = 121,
    PackageKeyword = 122,
    PrivateKeyword = 123,
    ProtectedKeyword = 124,
    PublicKeyword = 125,
    StaticKeyword = 126,
    YieldKeyword = 127,

    // Contextual keywords
    AbstractKeyword = 128,
    AccessorKeyword = 129,
    AsKeyword = 130,
    AssertsKeyword = 131,
    AssertKeyword = 132,
    AnyKeyword = 133,
    AsyncKeyword = 134,
    AwaitKeyword = 135,
    BooleanKeyword = 136,
    ConstructorKeyword = 137,
    DeclareKeyword = 138,
    GetKeyword = 139,
    InferKeyword = 140,
    IntrinsicKeyword = 141,
    IsKeyword = 142,
    KeyOfKeyword = 143,
    ModuleKeyword = 144,
    NamespaceKeyword = 145,
    NeverKeyword = 146,
    OutKeyword = 147,
    ReadonlyKeyword = 148,
    RequireKeyword = 149,
    NumberKeyword = 150,
    ObjectKeyword = 151,
    SatisfiesKeyword = 152,
    SetKeyword = 153,
    StringKeyword = 154,
    SymbolKeyword = 155,
    TypeKeyword = 156,
    UndefinedKeyword = 157,
    UniqueKeyword = 158,
    UnknownKeyword = 159,
    UsingKeyword = 160,
    FromKeyword = 161,
    GlobalKeyword = 162,
    BigIntKeyword = 163,
    OverrideKeyword = 164,
    OfKeyword = 165,

    // ========================================================================
    // Nodes
    // ========================================================================

    // Names
    QualifiedName = 166,
    ComputedPropertyName = 167,

    // Signature elements
    TypeParameter = 168,
    Parameter = 169,
    Decorator = 170,

    // Type members
    PropertySignature = 171,
    PropertyDeclaration = 172,
    MethodSignature = 173,
    MethodDeclaration = 174,
    ClassStaticBlockDeclaration = 175,
    Constructor = 176,
    GetAccessor = 177,
    SetAccessor = 178,
    CallSignature = 179,
    ConstructSignature = 180,
    IndexSignature = 181,

    // Types
    TypePredicate = 182,
    TypeReference = 183,
    FunctionType = 184,
    ConstructorType = 185,
    TypeQuery = 186,
    TypeLiteral = 187,
    ArrayType = 188,
    TupleType = 189,
    OptionalType = 190,
    RestType = 191,
    UnionType = 192,
    IntersectionType = 193,
    ConditionalType = 194,
    InferType = 195,
    ParenthesizedType = 196,
    ThisType = 197,
    TypeOperator = 198,
    IndexedAccessType = 199,
    MappedType = 200,
    LiteralType = 201,
    NamedTupleMember = 202,
    TemplateLiteralType = 203,
    TemplateLiteralTypeSpan = 204,
    ImportType = 205,

    // Binding patterns
    ObjectBindingPattern = 206,
    ArrayBindingPattern = 207,
    BindingElement = 208,

    // Expressions
    ArrayLiteralExpression = 209,
    ObjectLiteralExpression = 210,
    PropertyAccessExpression = 211,
    ElementAccessExpression = 212,
    CallExpression = 213,
    NewExpression = 214,
    TaggedTemplateExpression = 215,
    TypeAssertionExpression = 216,
    ParenthesizedExpression = 217,
    FunctionExpression = 218,
    ArrowFunction = 219,
    DeleteExpression = 220,
    TypeOfExpression = 221,
    VoidExpression = 222,
    AwaitExpression = 223,
    PrefixUnaryExpression = 224,
    PostfixUnaryExpression = 225,
    BinaryExpression = 226,
    ConditionalExpression = 227,
    TemplateExpression = 228,
    YieldExpression = 229,
    SpreadElement = 230,
    ClassExpression = 231,
    OmittedExpression = 232,
    ExpressionWithTypeArguments = 233,
    AsExpression = 234,
    NonNullExpression = 235,
    MetaProperty = 236,
    SyntheticExpression = 237,
    SatisfiesExpression = 238,

    // Misc
    TemplateSpan = 239,
    SemicolonClassElement = 240,

    // Statements
    Block = 241,
    EmptyStatement = 242,
    VariableStatement = 243,
    ExpressionStatement = 244,
    IfStatement = 245,
    DoStatement = 246,
    WhileStatement = 247,
    ForStatement = 248,
    ForInStatement = 249,
    ForOfStatement = 250,
    ContinueStatement = 251,
    BreakStatement = 252,
    ReturnStatement = 253,
    WithStatement = 254,
    SwitchStatement = 255,
    LabeledStatement = 256,
    ThrowStatement = 257,
    TryStatement = 258,
    DebuggerStatement = 259,

    // Declarations
    VariableDeclaration = 260,
    VariableDeclarationList = 261,
    FunctionDeclaration = 262,
    ClassDeclaration = 263,
    InterfaceDeclaration = 264,
    TypeAliasDeclaration = 265,
    EnumDeclaration = 266,
    ModuleDeclaration = 267,
    ModuleBlock = 268,
    CaseBlock = 269,
    NamespaceExportDeclaration = 270,
    ImportEqualsDeclaration = 271,
    ImportDeclaration = 272,
    ImportClause = 273,
    NamespaceImport = 274,
    NamedImports = 275,
    ImportSpecifier = 276,
    ExportAssignment = 277,
    ExportDeclaration = 278,
    NamedExports = 279,
    NamespaceExport = 280,
    ExportSpecifier = 281,
    MissingDeclaration = 282,

    // Module references
    ExternalModuleReference = 283,

    // JSX
    JsxElement = 284,
    JsxSelfClosingElement = 285,
    JsxOpeningElement = 286,
    JsxClosingElement = 287,
    JsxFragment = 288,
    JsxOpeningFragment = 289,
    JsxClosingFragment = 290,
    JsxAttribute = 291,
    JsxAttributes = 292,
    JsxSpreadAttribute = 293,
    JsxExpression = 294,
    JsxNamespacedName = 295,

    // Clauses
    CaseClause = 296,
    DefaultClause = 297,
    HeritageClause = 298,
    CatchClause = 299,

    // Import attributes
    ImportAttributes = 300,
    ImportAttribute = 301,

    // Property assignments
    PropertyAssignment = 302,
    ShorthandPropertyAssignment = 303,
    SpreadAssignment = 304,

    // Enum
    EnumMember = 305,

    // Top-level nodes
    SourceFile = 306,
    Bundle = 307,

    // JSDoc nodes
    JSDocTypeExpression = 308,
    JSDocNameReference = 309,
    JSDocMemberName = 310,
    JSDocAllType = 311,
    JSDocUnknownType = 312,
    JSDocNullableType = 313,
    JSDocNonNullableType = 314,
    JSDocOptionalType = 315,
    JSDocFunctionType = 316,
    JSDocVariadicType = 317,
    JSDocNamepathType = 318,
    JSDocComment = 319,
    JSDocText = 320,
    JSDocTypeLiteral = 321,
    JSDocSignature = 322,
    JSDocLink = 323,
    JSDocLinkCode = 324,
    JSDocLinkPlain = 325,
    JSDocTag = 326,
    JSDocAugmentsTag = 327,
    JSDocImplementsTag = 328,
    JSDocAuthorTag = 329,
    JSDocDeprecatedTag = 330,
    JSDocClassTag = 331,
    JSDocPublicTag = 332,
    JSDocPrivateTag = 333,
    JSDocProtectedTag = 334,
    JSDocReadonlyTag = 335,
    JSDocOverrideTag = 336,
    JSDocCallbackTag = 337,
    JSDocOverloadTag = 338,
    JSDocEnumTag = 339,
    JSDocParameterTag = 340,
    JSDocReturnTag = 341,
    JSDocThisTag = 342,
    JSDocTypeTag = 343,
    JSDocTemplateTag = 344,
    JSDocTypedefTag = 345,
    JSDocSeeTag = 346,
    JSDocPropertyTag = 347,
    JSDocThrowsTag = 348,
    JSDocSatisfiesTag = 349,
    JSDocImportTag = 350,

    // Synthesized and transformation nodes
    SyntaxList = 351,
    NotEmittedStatement = 352,
    PartiallyEmittedExpression = 353,
    CommaListExpression = 354,
    SyntheticReferenceExpression = 355,
    NotEmittedTypeElement = 356,
}

// Range markers. These can't be variants because Rust doesn't allow
// duplicate discriminants.
impl SyntaxKind {
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::PlusEqualsToken;
    pub const LAST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_RESERVED_WORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_RESERVED_WORD: SyntaxKind = SyntaxKind::WithKeyword;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_FUTURE_RESERVED_WORD: SyntaxKind = SyntaxKind::ImplementsKeyword;
    pub const LAST_FUTURE_RESERVED_WORD: SyntaxKind = SyntaxKind::YieldKeyword;
    pub const FIRST_CONTEXTUAL_KEYWORD: SyntaxKind = SyntaxKind::AbstractKeyword;
    pub const LAST_CONTEXTUAL_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_TYPE_NODE: SyntaxKind = SyntaxKind::TypePredicate;
    pub const LAST_TYPE_NODE: SyntaxKind = SyntaxKind::ImportType;
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_TOKEN: SyntaxKind = SyntaxKind::Unknown;
    pub const LAST_TOKEN: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_TRIVIA_TOKEN: SyntaxKind = SyntaxKind::SingleLineCommentTrivia;
    pub const LAST_TRIVIA_TOKEN: SyntaxKind = SyntaxKind::NonTextFileMarkerTrivia;
    pub const FIRST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NumericLiteral;
    pub const LAST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const FIRST_TEMPLATE_TOKEN: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const LAST_TEMPLATE_TOKEN: SyntaxKind = SyntaxKind::TemplateTail;
    pub const FIRST_BINARY_OPERATOR: SyntaxKind = SyntaxKind::LessThanToken;
    pub const LAST_BINARY_OPERATOR: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_STATEMENT: SyntaxKind = SyntaxKind::Block;
    pub const LAST_STATEMENT: SyntaxKind = SyntaxKind::DebuggerStatement;
    pub const FIRST_NODE: SyntaxKind = SyntaxKind::QualifiedName;
    pub const LAST_NODE: SyntaxKind = SyntaxKind::NotEmittedTypeElement;
    pub const FIRST_JSDOC_NODE: SyntaxKind = SyntaxKind::JSDocTypeExpression;
    pub const LAST_JSDOC_NODE: SyntaxKind = SyntaxKind::JSDocImportTag;
    pub const FIRST_JSDOC_TAG_NODE: SyntaxKind = SyntaxKind::JSDocTag;
    pub const LAST_JSDOC_TAG_NODE: SyntaxKind = SyntaxKind::JSDocImportTag;

    /// Number of declared kinds.
    pub const COUNT: usize = Self::ALL.len();
}

impl SyntaxKind {
    /// Look up a kind by its ordinal.
    #[inline]
    pub fn from_u16(value: u16) -> Option<SyntaxKind> {
        Self::ALL.get(value as usize).copied()
    }

    /// Whether this kind lies within `[first, last]` by ordinal.
    #[inline]
    pub const fn in_range(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        let v = self as u16;
        v >= first as u16 && v <= last as u16
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self.in_range(Self::FIRST_ASSIGNMENT, Self::LAST_ASSIGNMENT)
    }

    /// Whether this kind is an assignment operator other than `=`.
    #[inline]
    pub fn is_compound_assignment(self) -> bool {
        self.in_range(Self::FIRST_COMPOUND_ASSIGNMENT, Self::LAST_COMPOUND_ASSIGNMENT)
    }

    #[inline]
    pub fn is_reserved_word(self) -> bool {
        self.in_range(Self::FIRST_RESERVED_WORD, Self::LAST_RESERVED_WORD)
    }

    /// Whether this kind is a keyword of any flavor: reserved, strict-mode
    /// reserved, or contextual.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.in_range(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    /// Whether this kind is reserved only in strict mode code.
    #[inline]
    pub fn is_future_reserved_word(self) -> bool {
        self.in_range(Self::FIRST_FUTURE_RESERVED_WORD, Self::LAST_FUTURE_RESERVED_WORD)
    }

    /// Whether this kind is a keyword only in certain positions, an
    /// identifier everywhere else.
    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        self.in_range(Self::FIRST_CONTEXTUAL_KEYWORD, Self::LAST_CONTEXTUAL_KEYWORD)
    }

    /// Whether this kind is a type node. Keyword types such as `string` are
    /// represented by their keyword kind and are not covered by this range.
    #[inline]
    pub fn is_type_node(self) -> bool {
        self.in_range(Self::FIRST_TYPE_NODE, Self::LAST_TYPE_NODE)
    }

    /// Whether this kind is punctuation, assignment operators included.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        self.in_range(Self::FIRST_PUNCTUATION, Self::LAST_PUNCTUATION)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        self.in_range(Self::FIRST_TOKEN, Self::LAST_TOKEN)
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        self.in_range(Self::FIRST_TRIVIA_TOKEN, Self::LAST_TRIVIA_TOKEN)
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        self.in_range(Self::FIRST_LITERAL_TOKEN, Self::LAST_LITERAL_TOKEN)
    }

    #[inline]
    pub fn is_template_literal_kind(self) -> bool {
        self.in_range(Self::FIRST_TEMPLATE_TOKEN, Self::LAST_TEMPLATE_TOKEN)
    }

    /// Whether this kind lies in the punctuation binary-operator range.
    ///
    /// The range also holds a few punctuation tokens that never appear
    /// between two operands (`=>`, `++`, `!`, ...), and it excludes the
    /// comma and the keyword operators (`in`, `instanceof`, `as`,
    /// `satisfies`). Use the binary precedence table to decide whether a
    /// token actually continues a binary expression.
    #[inline]
    pub fn is_binary_operator(self) -> bool {
        self.in_range(Self::FIRST_BINARY_OPERATOR, Self::LAST_BINARY_OPERATOR)
    }

    #[inline]
    pub fn is_statement(self) -> bool {
        self.in_range(Self::FIRST_STATEMENT, Self::LAST_STATEMENT)
    }

    /// Whether this kind is a tree node rather than a token.
    #[inline]
    pub fn is_node(self) -> bool {
        self.in_range(Self::FIRST_NODE, Self::LAST_NODE)
    }

    #[inline]
    pub fn is_jsdoc_kind(self) -> bool {
        self.in_range(Self::FIRST_JSDOC_NODE, Self::LAST_JSDOC_NODE)
    }

    #[inline]
    pub fn is_jsdoc_tag_kind(self) -> bool {
        self.in_range(Self::FIRST_JSDOC_TAG_NODE, Self::LAST_JSDOC_TAG_NODE)
    }

    /// Whether this kind is a modifier keyword.
    #[inline]
    pub fn is_modifier_kind(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::AccessorKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::InKeyword
                | SyntaxKind::OutKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::StaticKeyword
        )
    }

    #[inline]
    pub fn is_logical_operator(self) -> bool {
        matches!(self, SyntaxKind::AmpersandAmpersandToken | SyntaxKind::BarBarToken)
    }

    #[inline]
    pub fn is_logical_or_coalescing_operator(self) -> bool {
        self.is_logical_operator() || self == SyntaxKind::QuestionQuestionToken
    }

    #[inline]
    pub fn is_logical_or_coalescing_assignment(self) -> bool {
        matches!(
            self,
            SyntaxKind::BarBarEqualsToken
                | SyntaxKind::AmpersandAmpersandEqualsToken
                | SyntaxKind::QuestionQuestionEqualsToken
        )
    }
}

/// The semantic group a [`SyntaxKind`] belongs to.
///
/// Every kind belongs to exactly one category. The mapping is written as an
/// exhaustive match without a wildcard, so a new kind does not compile until
/// it is placed in a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindCategory {
    /// `Unknown` and end-of-file.
    Sentinel,
    Trivia,
    /// Literal tokens and template pseudo-literals.
    Literal,
    Punctuation,
    Assignment,
    Identifier,
    ReservedWord,
    StrictModeReservedWord,
    ContextualKeyword,
    Name,
    SignatureElement,
    TypeMember,
    TypeNode,
    BindingPattern,
    Expression,
    /// Structural pieces that are neither statements nor expressions:
    /// template spans, property assignments, enum members, import attributes.
    Element,
    Statement,
    Declaration,
    ModuleReference,
    Jsx,
    Clause,
    TopLevel,
    JSDoc,
    /// Nodes synthesized by transformations; never produced by the parser.
    Synthetic,
}

impl KindCategory {
    /// Whether kinds of this category are produced by the tokenizer.
    pub fn is_token(self) -> bool {
        matches!(
            self,
            KindCategory::Sentinel
                | KindCategory::Trivia
                | KindCategory::Literal
                | KindCategory::Punctuation
                | KindCategory::Assignment
                | KindCategory::Identifier
                | KindCategory::ReservedWord
                | KindCategory::StrictModeReservedWord
                | KindCategory::ContextualKeyword
        )
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            KindCategory::ReservedWord
                | KindCategory::StrictModeReservedWord
                | KindCategory::ContextualKeyword
        )
    }
}

impl SyntaxKind {
    pub fn category(self) -> KindCategory {
        use SyntaxKind as K;
        match self {
            K::Unknown | K::EndOfFileToken => KindCategory::Sentinel,
            K::SingleLineCommentTrivia
            | K::MultiLineCommentTrivia
            | K::NewLineTrivia
            | K::WhitespaceTrivia
            | K::ShebangTrivia
            | K::ConflictMarkerTrivia
            | K::NonTextFileMarkerTrivia => KindCategory::Trivia,
            K::NumericLiteral
            | K::BigIntLiteral
            | K::StringLiteral
            | K::JsxText
            | K::JsxTextAllWhiteSpaces
            | K::RegularExpressionLiteral
            | K::NoSubstitutionTemplateLiteral
            | K::TemplateHead
            | K::TemplateMiddle
            | K::TemplateTail => KindCategory::Literal,
            K::OpenBraceToken
            | K::CloseBraceToken
            | K::OpenParenToken
            | K::CloseParenToken
            | K::OpenBracketToken
            | K::CloseBracketToken
            | K::DotToken
            | K::DotDotDotToken
            | K::SemicolonToken
            | K::CommaToken
            | K::QuestionDotToken
            | K::LessThanToken
            | K::LessThanSlashToken
            | K::GreaterThanToken
            | K::LessThanEqualsToken
            | K::GreaterThanEqualsToken
            | K::EqualsEqualsToken
            | K::ExclamationEqualsToken
            | K::EqualsEqualsEqualsToken
            | K::ExclamationEqualsEqualsToken
            | K::EqualsGreaterThanToken
            | K::PlusToken
            | K::MinusToken
            | K::AsteriskToken
            | K::AsteriskAsteriskToken
            | K::SlashToken
            | K::PercentToken
            | K::PlusPlusToken
            | K::MinusMinusToken
            | K::LessThanLessThanToken
            | K::GreaterThanGreaterThanToken
            | K::GreaterThanGreaterThanGreaterThanToken
            | K::AmpersandToken
            | K::BarToken
            | K::CaretToken
            | K::ExclamationToken
            | K::TildeToken
            | K::AmpersandAmpersandToken
            | K::BarBarToken
            | K::QuestionToken
            | K::ColonToken
            | K::AtToken
            | K::QuestionQuestionToken
            | K::BacktickToken
            | K::HashToken => KindCategory::Punctuation,
            K::EqualsToken
            | K::PlusEqualsToken
            | K::MinusEqualsToken
            | K::AsteriskEqualsToken
            | K::AsteriskAsteriskEqualsToken
            | K::SlashEqualsToken
            | K::PercentEqualsToken
            | K::LessThanLessThanEqualsToken
            | K::GreaterThanGreaterThanEqualsToken
            | K::GreaterThanGreaterThanGreaterThanEqualsToken
            | K::AmpersandEqualsToken
            | K::BarEqualsToken
            | K::CaretEqualsToken
            | K::BarBarEqualsToken
            | K::AmpersandAmpersandEqualsToken
            | K::QuestionQuestionEqualsToken => KindCategory::Assignment,
            K::Identifier
            | K::PrivateIdentifier
            | K::JSDocCommentTextToken => KindCategory::Identifier,
            K::BreakKeyword
            | K::CaseKeyword
            | K::CatchKeyword
            | K::ClassKeyword
            | K::ConstKeyword
            | K::ContinueKeyword
            | K::DebuggerKeyword
            | K::DefaultKeyword
            | K::DeleteKeyword
            | K::DoKeyword
            | K::ElseKeyword
            | K::EnumKeyword
            | K::ExportKeyword
            | K::ExtendsKeyword
            | K::FalseKeyword
            | K::FinallyKeyword
            | K::ForKeyword
            | K::FunctionKeyword
            | K::IfKeyword
            | K::ImportKeyword
            | K::InKeyword
            | K::InstanceOfKeyword
            | K::NewKeyword
            | K::NullKeyword
            | K::ReturnKeyword
            | K::SuperKeyword
            | K::SwitchKeyword
            | K::ThisKeyword
            | K::ThrowKeyword
            | K::TrueKeyword
            | K::TryKeyword
            | K::TypeOfKeyword
            | K::VarKeyword
            | K::VoidKeyword
            | K::WhileKeyword
            | K::WithKeyword => KindCategory::ReservedWord,
            K::ImplementsKeyword
            | K::InterfaceKeyword
            | K::LetKeyword
            | K::PackageKeyword
            | K::PrivateKeyword
            | K::ProtectedKeyword
            | K::PublicKeyword
            | K::StaticKeyword
            | K::YieldKeyword => KindCategory::StrictModeReservedWord,
            K::AbstractKeyword
            | K::AccessorKeyword
            | K::AsKeyword
            | K::AssertsKeyword
            | K::AssertKeyword
            | K::AnyKeyword
            | K::AsyncKeyword
            | K::AwaitKeyword
            | K::BooleanKeyword
            | K::ConstructorKeyword
            | K::DeclareKeyword
            | K::GetKeyword
            | K::InferKeyword
            | K::IntrinsicKeyword
            | K::IsKeyword
            | K::KeyOfKeyword
            | K::ModuleKeyword
            | K::NamespaceKeyword
            | K::NeverKeyword
            | K::OutKeyword
            | K::ReadonlyKeyword
            | K::RequireKeyword
            | K::NumberKeyword
            | K::ObjectKeyword
            | K::SatisfiesKeyword
            | K::SetKeyword
            | K::StringKeyword
            | K::SymbolKeyword
            | K::TypeKeyword
            | K::UndefinedKeyword
            | K::UniqueKeyword
            | K::UnknownKeyword
            | K::UsingKeyword
            | K::FromKeyword
            | K::GlobalKeyword
            | K::BigIntKeyword
            | K::OverrideKeyword
            | K::OfKeyword => KindCategory::ContextualKeyword,
            K::QualifiedName | K::ComputedPropertyName => KindCategory::Name,
            K::TypeParameter | K::Parameter | K::Decorator => KindCategory::SignatureElement,
            K::PropertySignature
            | K::PropertyDeclaration
            | K::MethodSignature
            | K::MethodDeclaration
            | K::ClassStaticBlockDeclaration
            | K::Constructor
            | K::GetAccessor
            | K::SetAccessor
            | K::CallSignature
            | K::ConstructSignature
            | K::IndexSignature => KindCategory::TypeMember,
            K::TypePredicate
            | K::TypeReference
            | K::FunctionType
            | K::ConstructorType
            | K::TypeQuery
            | K::TypeLiteral
            | K::ArrayType
            | K::TupleType
            | K::OptionalType
            | K::RestType
            | K::UnionType
            | K::IntersectionType
            | K::ConditionalType
            | K::InferType
            | K::ParenthesizedType
            | K::ThisType
            | K::TypeOperator
            | K::IndexedAccessType
            | K::MappedType
            | K::LiteralType
            | K::NamedTupleMember
            | K::TemplateLiteralType
            | K::TemplateLiteralTypeSpan
            | K::ImportType => KindCategory::TypeNode,
            K::ObjectBindingPattern
            | K::ArrayBindingPattern
            | K::BindingElement => KindCategory::BindingPattern,
            K::ArrayLiteralExpression
            | K::ObjectLiteralExpression
            | K::PropertyAccessExpression
            | K::ElementAccessExpression
            | K::CallExpression
            | K::NewExpression
            | K::TaggedTemplateExpression
            | K::TypeAssertionExpression
            | K::ParenthesizedExpression
            | K::FunctionExpression
            | K::ArrowFunction
            | K::DeleteExpression
            | K::TypeOfExpression
            | K::VoidExpression
            | K::AwaitExpression
            | K::PrefixUnaryExpression
            | K::PostfixUnaryExpression
            | K::BinaryExpression
            | K::ConditionalExpression
            | K::TemplateExpression
            | K::YieldExpression
            | K::SpreadElement
            | K::ClassExpression
            | K::OmittedExpression
            | K::ExpressionWithTypeArguments
            | K::AsExpression
            | K::NonNullExpression
            | K::MetaProperty
            | K::SyntheticExpression
            | K::SatisfiesExpression => KindCategory::Expression,
            K::TemplateSpan
            | K::SemicolonClassElement
            | K::ImportAttributes
            | K::ImportAttribute
            | K::PropertyAssignment
            | K::ShorthandPropertyAssignment
            | K::SpreadAssignment
            | K::EnumMember => KindCategory::Element,
            K::Block
            | K::EmptyStatement
            | K::VariableStatement
            | K::ExpressionStatement
            | K::IfStatement
            | K::DoStatement
            | K::WhileStatement
            | K::ForStatement
            | K::ForInStatement
            | K::ForOfStatement
            | K::ContinueStatement
            | K::BreakStatement
            | K::ReturnStatement
            | K::WithStatement
            | K::SwitchStatement
            | K::LabeledStatement
            | K::ThrowStatement
            | K::TryStatement
            | K::DebuggerStatement => KindCategory::Statement,
            K::VariableDeclaration
            | K::VariableDeclarationList
            | K::FunctionDeclaration
            | K::ClassDeclaration
            | K::InterfaceDeclaration
            | K::TypeAliasDeclaration
            | K::EnumDeclaration
            | K::ModuleDeclaration
            | K::ModuleBlock
            | K::CaseBlock
            | K::NamespaceExportDeclaration
            | K::ImportEqualsDeclaration
            | K::ImportDeclaration
            | K::ImportClause
            | K::NamespaceImport
            | K::NamedImports
            | K::ImportSpecifier
            | K::ExportAssignment
            | K::ExportDeclaration
            | K::NamedExports
            | K::NamespaceExport
            | K::ExportSpecifier
            | K::MissingDeclaration => KindCategory::Declaration,
            K::ExternalModuleReference => KindCategory::ModuleReference,
            K::JsxElement
            | K::JsxSelfClosingElement
            | K::JsxOpeningElement
            | K::JsxClosingElement
            | K::JsxFragment
            | K::JsxOpeningFragment
            | K::JsxClosingFragment
            | K::JsxAttribute
            | K::JsxAttributes
            | K::JsxSpreadAttribute
            | K::JsxExpression
            | K::JsxNamespacedName => KindCategory::Jsx,
            K::CaseClause
            | K::DefaultClause
            | K::HeritageClause
            | K::CatchClause => KindCategory::Clause,
            K::SourceFile | K::Bundle => KindCategory::TopLevel,
            K::JSDocTypeExpression
            | K::JSDocNameReference
            | K::JSDocMemberName
            | K::JSDocAllType
            | K::JSDocUnknownType
            | K::JSDocNullableType
            | K::JSDocNonNullableType
            | K::JSDocOptionalType
            | K::JSDocFunctionType
            | K::JSDocVariadicType
            | K::JSDocNamepathType
            | K::JSDocComment
            | K::JSDocText
            | K::JSDocTypeLiteral
            | K::JSDocSignature
            | K::JSDocLink
            | K::JSDocLinkCode
            | K::JSDocLinkPlain
            | K::JSDocTag
            | K::JSDocAugmentsTag
            | K::JSDocImplementsTag
            | K::JSDocAuthorTag
            | K::JSDocDeprecatedTag
            | K::JSDocClassTag
            | K::JSDocPublicTag
            | K::JSDocPrivateTag
            | K::JSDocProtectedTag
            | K::JSDocReadonlyTag
            | K::JSDocOverrideTag
            | K::JSDocCallbackTag
            | K::JSDocOverloadTag
            | K::JSDocEnumTag
            | K::JSDocParameterTag
            | K::JSDocReturnTag
            | K::JSDocThisTag
            | K::JSDocTypeTag
            | K::JSDocTemplateTag
            | K::JSDocTypedefTag
            | K::JSDocSeeTag
            | K::JSDocPropertyTag
            | K::JSDocThrowsTag
            | K::JSDocSatisfiesTag
            | K::JSDocImportTag => KindCategory::JSDoc,
            K::SyntaxList
            | K::NotEmittedStatement
            | K::PartiallyEmittedExpression
            | K::CommaListExpression
            | K::SyntheticReferenceExpression
            | K::NotEmittedTypeElement => KindCategory::Synthetic,
        }
    }

    /// Source text of a punctuation, assignment, or keyword token.
    pub fn token_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::OpenBraceToken => "{",
            SyntaxKind::CloseBraceToken => "}",
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::OpenBracketToken => "[",
            SyntaxKind::CloseBracketToken => "]",
            SyntaxKind::DotToken => ".",
            SyntaxKind::DotDotDotToken => "...",
            SyntaxKind::SemicolonToken => ";",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::QuestionDotToken => "?.",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::LessThanSlashToken => "</",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::LessThanEqualsToken => "<=",
            SyntaxKind::GreaterThanEqualsToken => ">=",
            SyntaxKind::EqualsEqualsToken => "==",
            SyntaxKind::ExclamationEqualsToken => "!=",
            SyntaxKind::EqualsEqualsEqualsToken => "===",
            SyntaxKind::ExclamationEqualsEqualsToken => "!==",
            SyntaxKind::EqualsGreaterThanToken => "=>",
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::AsteriskAsteriskToken => "**",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::PercentToken => "%",
            SyntaxKind::PlusPlusToken => "++",
            SyntaxKind::MinusMinusToken => "--",
            SyntaxKind::LessThanLessThanToken => "<<",
            SyntaxKind::GreaterThanGreaterThanToken => ">>",
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => ">>>",
            SyntaxKind::AmpersandToken => "&",
            SyntaxKind::BarToken => "|",
            SyntaxKind::CaretToken => "^",
            SyntaxKind::ExclamationToken => "!",
            SyntaxKind::TildeToken => "~",
            SyntaxKind::AmpersandAmpersandToken => "&&",
            SyntaxKind::BarBarToken => "||",
            SyntaxKind::QuestionToken => "?",
            SyntaxKind::ColonToken => ":",
            SyntaxKind::AtToken => "@",
            SyntaxKind::QuestionQuestionToken => "??",
            SyntaxKind::BacktickToken => "`",
            SyntaxKind::HashToken => "#",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::PlusEqualsToken => "+=",
            SyntaxKind::MinusEqualsToken => "-=",
            SyntaxKind::AsteriskEqualsToken => "*=",
            SyntaxKind::AsteriskAsteriskEqualsToken => "**=",
            SyntaxKind::SlashEqualsToken => "/=",
            SyntaxKind::PercentEqualsToken => "%=",
            SyntaxKind::LessThanLessThanEqualsToken => "<<=",
            SyntaxKind::GreaterThanGreaterThanEqualsToken => ">>=",
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
            SyntaxKind::AmpersandEqualsToken => "&=",
            SyntaxKind::BarEqualsToken => "|=",
            SyntaxKind::CaretEqualsToken => "^=",
            SyntaxKind::BarBarEqualsToken => "||=",
            SyntaxKind::AmpersandAmpersandEqualsToken => "&&=",
            SyntaxKind::QuestionQuestionEqualsToken => "??=",
            SyntaxKind::BreakKeyword => "break",
            SyntaxKind::CaseKeyword => "case",
            SyntaxKind::CatchKeyword => "catch",
            SyntaxKind::ClassKeyword => "class",
            SyntaxKind::ConstKeyword => "const",
            SyntaxKind::ContinueKeyword => "continue",
            SyntaxKind::DebuggerKeyword => "debugger",
            SyntaxKind::DefaultKeyword => "default",
            SyntaxKind::DeleteKeyword => "delete",
            SyntaxKind::DoKeyword => "do",
            SyntaxKind::ElseKeyword => "else",
            SyntaxKind::EnumKeyword => "enum",
            SyntaxKind::ExportKeyword => "export",
            SyntaxKind::ExtendsKeyword => "extends",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::FinallyKeyword => "finally",
            SyntaxKind::ForKeyword => "for",
            SyntaxKind::FunctionKeyword => "function",
            SyntaxKind::IfKeyword => "if",
            SyntaxKind::ImportKeyword => "import",
            SyntaxKind::InKeyword => "in",
            SyntaxKind::InstanceOfKeyword => "instanceof",
            SyntaxKind::NewKeyword => "new",
            SyntaxKind::NullKeyword => "null",
            SyntaxKind::ReturnKeyword => "return",
            SyntaxKind::SuperKeyword => "super",
            SyntaxKind::SwitchKeyword => "switch",
            SyntaxKind::ThisKeyword => "this",
            SyntaxKind::ThrowKeyword => "throw",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::TryKeyword => "try",
            SyntaxKind::TypeOfKeyword => "typeof",
            SyntaxKind::VarKeyword => "var",
            SyntaxKind::VoidKeyword => "void",
            SyntaxKind::WhileKeyword => "while",
            SyntaxKind::WithKeyword => "with",
            SyntaxKind::ImplementsKeyword => "implements",
            SyntaxKind::InterfaceKeyword => "interface",
            SyntaxKind::LetKeyword => "let",
            SyntaxKind::PackageKeyword => "package",
            SyntaxKind::PrivateKeyword => "private",
            SyntaxKind::ProtectedKeyword => "protected",
            SyntaxKind::PublicKeyword => "public",
            SyntaxKind::StaticKeyword => "static",
            SyntaxKind::YieldKeyword => "yield",
            SyntaxKind::AbstractKeyword => "abstract",
            SyntaxKind::AccessorKeyword => "accessor",
            SyntaxKind::AsKeyword => "as",
            SyntaxKind::AssertsKeyword => "asserts",
            SyntaxKind::AssertKeyword => "assert",
            SyntaxKind::AnyKeyword => "any",
            SyntaxKind::AsyncKeyword => "async",
            SyntaxKind::AwaitKeyword => "await",
            SyntaxKind::BooleanKeyword => "boolean",
            SyntaxKind::ConstructorKeyword => "constructor",
            SyntaxKind::DeclareKeyword => "declare",
            SyntaxKind::GetKeyword => "get",
            SyntaxKind::InferKeyword => "infer",
            SyntaxKind::IntrinsicKeyword => "intrinsic",
            SyntaxKind::IsKeyword => "is",
            SyntaxKind::KeyOfKeyword => "keyof",
            SyntaxKind::ModuleKeyword => "module",
            SyntaxKind::NamespaceKeyword => "namespace",
            SyntaxKind::NeverKeyword => "never",
            SyntaxKind::OutKeyword => "out",
            SyntaxKind::ReadonlyKeyword => "readonly",
            SyntaxKind::RequireKeyword => "require",
            SyntaxKind::NumberKeyword => "number",
            SyntaxKind::ObjectKeyword => "object",
            SyntaxKind::SatisfiesKeyword => "satisfies",
            SyntaxKind::SetKeyword => "set",
            SyntaxKind::StringKeyword => "string",
            SyntaxKind::SymbolKeyword => "symbol",
            SyntaxKind::TypeKeyword => "type",
            SyntaxKind::UndefinedKeyword => "undefined",
            SyntaxKind::UniqueKeyword => "unique",
            SyntaxKind::UnknownKeyword => "unknown",
            SyntaxKind::UsingKeyword => "using",
            SyntaxKind::FromKeyword => "from",
            SyntaxKind::GlobalKeyword => "global",
            SyntaxKind::BigIntKeyword => "bigint",
            SyntaxKind::OverrideKeyword => "override",
            SyntaxKind::OfKeyword => "of",
            _ => return None,
        };
        Some(text)
    }

    /// Reverse of [`SyntaxKind::token_text`]. Linear in the number of kinds.
    pub fn from_token_text(text: &str) -> Option<SyntaxKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.token_text() == Some(text))
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_contiguous() {
        for (index, kind) in SyntaxKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, index, "{kind} is out of place");
            assert_eq!(SyntaxKind::from_u16(index as u16), Some(*kind));
        }
        assert_eq!(SyntaxKind::from_u16(SyntaxKind::COUNT as u16), None);
        assert_eq!(SyntaxKind::ALL.last(), Some(&SyntaxKind::LAST_NODE));
    }

    #[test]
    fn test_keyword_ranges() {
        assert!(SyntaxKind::BreakKeyword.is_keyword());
        assert!(SyntaxKind::OfKeyword.is_keyword());
        assert!(!SyntaxKind::Identifier.is_keyword());
        assert!(!SyntaxKind::QualifiedName.is_keyword());

        assert!(SyntaxKind::WithKeyword.is_reserved_word());
        assert!(!SyntaxKind::ImplementsKeyword.is_reserved_word());
        assert!(SyntaxKind::YieldKeyword.is_future_reserved_word());
        assert!(SyntaxKind::SatisfiesKeyword.is_contextual_keyword());
        assert!(!SyntaxKind::YieldKeyword.is_contextual_keyword());
    }

    #[test]
    fn test_punctuation_and_operator_ranges() {
        assert!(SyntaxKind::OpenBraceToken.is_punctuation());
        assert!(SyntaxKind::QuestionQuestionEqualsToken.is_punctuation());
        assert!(!SyntaxKind::Identifier.is_punctuation());

        assert!(SyntaxKind::LessThanToken.is_binary_operator());
        assert!(SyntaxKind::AsteriskAsteriskToken.is_binary_operator());
        assert!(SyntaxKind::BarBarEqualsToken.is_binary_operator());
        assert!(!SyntaxKind::CommaToken.is_binary_operator());
        assert!(!SyntaxKind::InstanceOfKeyword.is_binary_operator());

        assert!(SyntaxKind::EqualsToken.is_assignment_operator());
        assert!(!SyntaxKind::EqualsToken.is_compound_assignment());
        assert!(SyntaxKind::CaretEqualsToken.is_compound_assignment());
        assert!(!SyntaxKind::EqualsEqualsToken.is_assignment_operator());
    }

    #[test]
    fn test_node_ranges() {
        assert!(SyntaxKind::Unknown.is_token());
        assert!(!SyntaxKind::QualifiedName.is_token());
        assert!(SyntaxKind::QualifiedName.is_node());
        assert!(SyntaxKind::NotEmittedTypeElement.is_node());

        assert!(SyntaxKind::UnionType.is_type_node());
        assert!(!SyntaxKind::StringKeyword.is_type_node());
        assert!(SyntaxKind::Block.is_statement());
        assert!(!SyntaxKind::VariableDeclaration.is_statement());

        assert!(SyntaxKind::JSDocAllType.is_jsdoc_kind());
        assert!(!SyntaxKind::JSDocAllType.is_jsdoc_tag_kind());
        assert!(SyntaxKind::JSDocImportTag.is_jsdoc_tag_kind());
    }

    #[test]
    fn test_trivia_literal_and_template_ranges() {
        assert!(SyntaxKind::ShebangTrivia.is_trivia());
        assert!(!SyntaxKind::EndOfFileToken.is_trivia());
        assert!(SyntaxKind::RegularExpressionLiteral.is_literal());
        assert!(!SyntaxKind::TemplateHead.is_literal());
        assert!(SyntaxKind::NoSubstitutionTemplateLiteral.is_template_literal_kind());
        assert!(SyntaxKind::TemplateTail.is_template_literal_kind());
        assert!(!SyntaxKind::StringLiteral.is_template_literal_kind());
    }

    #[test]
    fn test_categories() {
        assert_eq!(SyntaxKind::EndOfFileToken.category(), KindCategory::Sentinel);
        assert_eq!(SyntaxKind::TemplateMiddle.category(), KindCategory::Literal);
        assert_eq!(SyntaxKind::PrivateIdentifier.category(), KindCategory::Identifier);
        assert_eq!(SyntaxKind::LetKeyword.category(), KindCategory::StrictModeReservedWord);
        assert_eq!(SyntaxKind::SatisfiesExpression.category(), KindCategory::Expression);
        assert_eq!(SyntaxKind::EnumMember.category(), KindCategory::Element);
        assert_eq!(SyntaxKind::CommaListExpression.category(), KindCategory::Synthetic);
        for kind in SyntaxKind::ALL {
            assert_eq!(kind.category().is_token(), kind.is_token(), "{kind}");
        }
    }

    #[test]
    fn test_logical_operator_classification() {
        assert!(SyntaxKind::BarBarToken.is_logical_operator());
        assert!(!SyntaxKind::QuestionQuestionToken.is_logical_operator());
        assert!(SyntaxKind::QuestionQuestionToken.is_logical_or_coalescing_operator());
        assert!(SyntaxKind::QuestionQuestionEqualsToken.is_logical_or_coalescing_assignment());
        assert!(!SyntaxKind::BarEqualsToken.is_logical_or_coalescing_assignment());
        assert!(SyntaxKind::ReadonlyKeyword.is_modifier_kind());
        assert!(!SyntaxKind::LetKeyword.is_modifier_kind());
    }

    #[test]
    fn test_token_text() {
        assert_eq!(SyntaxKind::AsteriskAsteriskToken.token_text(), Some("**"));
        assert_eq!(SyntaxKind::InstanceOfKeyword.token_text(), Some("instanceof"));
        assert_eq!(SyntaxKind::BinaryExpression.token_text(), None);
        assert_eq!(
            SyntaxKind::from_token_text(">>>="),
            Some(SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken)
        );
        assert_eq!(SyntaxKind::from_token_text("satisfies"), Some(SyntaxKind::SatisfiesKeyword));
        assert_eq!(SyntaxKind::from_token_text("nope"), None);

        for kind in SyntaxKind::ALL {
            if kind.is_punctuation() || kind.is_keyword() {
                assert!(kind.token_text().is_some(), "{kind} has no text");
            }
        }
    }
}
