//! Declared ordinal ranges over [`SyntaxKind`] and their conformance check.
//!
//! Range queries such as [`SyntaxKind::is_keyword`] are ordinal bounds
//! checks, which silently go wrong when a kind is moved across a group
//! boundary. Each range below is paired with a membership predicate that
//! does not look at ordinals, and [`validate_kind_ranges`] checks the two
//! against each other for every declared kind.

use crate::syntax_kind::{KindCategory, SyntaxKind};
use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{debug, warn};

/// A named `[first, last]` run of kind ordinals.
#[derive(Debug, Clone, Copy)]
pub struct KindRange {
    pub name: &'static str,
    pub first: SyntaxKind,
    pub last: SyntaxKind,
    /// The public range query answering for this range.
    pub query: fn(SyntaxKind) -> bool,
    /// The intended members, decided without looking at ordinals.
    pub members: fn(SyntaxKind) -> bool,
    /// When set, the range may hold intended members only. Otherwise it
    /// only has to contain all of them.
    pub exact: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindRangeError {
    #[error("kind range `{range}` is inverted: {first} comes after {last}")]
    Inverted {
        range: &'static str,
        first: SyntaxKind,
        last: SyntaxKind,
    },
    #[error("{kind} belongs to kind range `{range}` but lies outside {first}..={last}")]
    MemberOutsideRange {
        range: &'static str,
        kind: SyntaxKind,
        first: SyntaxKind,
        last: SyntaxKind,
    },
    #[error("{kind} lies inside kind range `{range}` but is not one of its members")]
    ForeignKind { range: &'static str, kind: SyntaxKind },
    #[error("range query for `{range}` disagrees with its bounds on {kind}")]
    QueryMismatch { range: &'static str, kind: SyntaxKind },
}

impl KindRange {
    #[inline]
    pub fn contains(&self, kind: SyntaxKind) -> bool {
        kind.in_range(self.first, self.last)
    }

    /// Check this range against every declared kind, reporting the first
    /// violation.
    pub fn check(&self) -> Result<(), KindRangeError> {
        if self.first > self.last {
            warn!(range = self.name, first = %self.first, last = %self.last, "inverted kind range");
            return Err(KindRangeError::Inverted {
                range: self.name,
                first: self.first,
                last: self.last,
            });
        }
        for &kind in SyntaxKind::ALL {
            let inside = self.contains(kind);
            let intended = (self.members)(kind);
            if intended && !inside {
                warn!(range = self.name, kind = %kind, "kind outside its declared range");
                return Err(KindRangeError::MemberOutsideRange {
                    range: self.name,
                    kind,
                    first: self.first,
                    last: self.last,
                });
            }
            if self.exact && inside && !intended {
                warn!(range = self.name, kind = %kind, "foreign kind inside exact range");
                return Err(KindRangeError::ForeignKind {
                    range: self.name,
                    kind,
                });
            }
            if (self.query)(kind) != inside {
                warn!(range = self.name, kind = %kind, "range query disagrees with bounds");
                return Err(KindRangeError::QueryMismatch {
                    range: self.name,
                    kind,
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Membership predicates
// ============================================================================

fn category_is(kind: SyntaxKind, category: KindCategory) -> bool {
    kind.category() == category
}

fn assignment_members(kind: SyntaxKind) -> bool {
    category_is(kind, KindCategory::Assignment)
}

fn compound_assignment_members(kind: SyntaxKind) -> bool {
    assignment_members(kind) && kind != SyntaxKind::EqualsToken
}

fn reserved_word_members(kind: SyntaxKind) -> bool {
    category_is(kind, KindCategory::ReservedWord)
}

fn keyword_members(kind: SyntaxKind) -> bool {
    kind.category().is_keyword()
}

fn future_reserved_word_members(kind: SyntaxKind) -> bool {
    category_is(kind, KindCategory::StrictModeReservedWord)
}

fn contextual_keyword_members(kind: SyntaxKind) -> bool {
    category_is(kind, KindCategory::ContextualKeyword)
}

fn type_node_members(kind: SyntaxKind) -> bool {
    category_is(kind, KindCategory::TypeNode)
}

fn punctuation_members(kind: SyntaxKind) -> bool {
    matches!(
        kind.category(),
        KindCategory::Punctuation | KindCategory::Assignment
    )
}

fn token_members(kind: SyntaxKind) -> bool {
    kind.category().is_token()
}

fn trivia_members(kind: SyntaxKind) -> bool {
    category_is(kind, KindCategory::Trivia)
}

fn literal_members(kind: SyntaxKind) -> bool {
    category_is(kind, KindCategory::Literal) && !template_fragment(kind)
}

fn template_fragment(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::TemplateHead | SyntaxKind::TemplateMiddle | SyntaxKind::TemplateTail
    )
}

fn template_members(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::NoSubstitutionTemplateLiteral || template_fragment(kind)
}

/// Punctuation that can sit between two operands of a binary expression.
fn binary_operator_members(kind: SyntaxKind) -> bool {
    assignment_members(kind)
        || matches!(
            kind,
            SyntaxKind::LessThanToken
                | SyntaxKind::GreaterThanToken
                | SyntaxKind::LessThanEqualsToken
                | SyntaxKind::GreaterThanEqualsToken
                | SyntaxKind::EqualsEqualsToken
                | SyntaxKind::ExclamationEqualsToken
                | SyntaxKind::EqualsEqualsEqualsToken
                | SyntaxKind::ExclamationEqualsEqualsToken
                | SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::AsteriskToken
                | SyntaxKind::AsteriskAsteriskToken
                | SyntaxKind::SlashToken
                | SyntaxKind::PercentToken
                | SyntaxKind::LessThanLessThanToken
                | SyntaxKind::GreaterThanGreaterThanToken
                | SyntaxKind::GreaterThanGreaterThanGreaterThanToken
                | SyntaxKind::AmpersandToken
                | SyntaxKind::BarToken
                | SyntaxKind::CaretToken
                | SyntaxKind::AmpersandAmpersandToken
                | SyntaxKind::BarBarToken
                | SyntaxKind::QuestionQuestionToken
        )
}

fn statement_members(kind: SyntaxKind) -> bool {
    category_is(kind, KindCategory::Statement)
}

fn node_members(kind: SyntaxKind) -> bool {
    !kind.category().is_token()
}

fn jsdoc_members(kind: SyntaxKind) -> bool {
    category_is(kind, KindCategory::JSDoc)
}

fn jsdoc_tag_members(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::JSDocTag
            | SyntaxKind::JSDocAugmentsTag
            | SyntaxKind::JSDocImplementsTag
            | SyntaxKind::JSDocAuthorTag
            | SyntaxKind::JSDocDeprecatedTag
            | SyntaxKind::JSDocClassTag
            | SyntaxKind::JSDocPublicTag
            | SyntaxKind::JSDocPrivateTag
            | SyntaxKind::JSDocProtectedTag
            | SyntaxKind::JSDocReadonlyTag
            | SyntaxKind::JSDocOverrideTag
            | SyntaxKind::JSDocCallbackTag
            | SyntaxKind::JSDocOverloadTag
            | SyntaxKind::JSDocEnumTag
            | SyntaxKind::JSDocParameterTag
            | SyntaxKind::JSDocReturnTag
            | SyntaxKind::JSDocThisTag
            | SyntaxKind::JSDocTypeTag
            | SyntaxKind::JSDocTemplateTag
            | SyntaxKind::JSDocTypedefTag
            | SyntaxKind::JSDocSeeTag
            | SyntaxKind::JSDocPropertyTag
            | SyntaxKind::JSDocThrowsTag
            | SyntaxKind::JSDocSatisfiesTag
            | SyntaxKind::JSDocImportTag
    )
}

// ============================================================================
// Declared ranges
// ============================================================================

macro_rules! kind_range {
    (
        $name:literal,
        $first:ident,
        $last:ident,
        $query:ident,
        $members:ident,
        exact: $exact:literal
    ) => {
        KindRange {
            name: $name,
            first: SyntaxKind::$first,
            last: SyntaxKind::$last,
            query: SyntaxKind::$query,
            members: $members,
            exact: $exact,
        }
    };
}

/// Every range marker pair declared on [`SyntaxKind`].
pub const KIND_RANGES: &[KindRange] = &[
    kind_range!(
        "assignment",
        FIRST_ASSIGNMENT,
        LAST_ASSIGNMENT,
        is_assignment_operator,
        assignment_members,
        exact: true
    ),
    kind_range!(
        "compound assignment",
        FIRST_COMPOUND_ASSIGNMENT,
        LAST_COMPOUND_ASSIGNMENT,
        is_compound_assignment,
        compound_assignment_members,
        exact: true
    ),
    kind_range!(
        "reserved word",
        FIRST_RESERVED_WORD,
        LAST_RESERVED_WORD,
        is_reserved_word,
        reserved_word_members,
        exact: true
    ),
    kind_range!("keyword", FIRST_KEYWORD, LAST_KEYWORD, is_keyword, keyword_members, exact: true),
    kind_range!(
        "future reserved word",
        FIRST_FUTURE_RESERVED_WORD,
        LAST_FUTURE_RESERVED_WORD,
        is_future_reserved_word,
        future_reserved_word_members,
        exact: true
    ),
    kind_range!(
        "contextual keyword",
        FIRST_CONTEXTUAL_KEYWORD,
        LAST_CONTEXTUAL_KEYWORD,
        is_contextual_keyword,
        contextual_keyword_members,
        exact: true
    ),
    kind_range!(
        "type node",
        FIRST_TYPE_NODE,
        LAST_TYPE_NODE,
        is_type_node,
        type_node_members,
        exact: true
    ),
    kind_range!(
        "punctuation",
        FIRST_PUNCTUATION,
        LAST_PUNCTUATION,
        is_punctuation,
        punctuation_members,
        exact: true
    ),
    kind_range!("token", FIRST_TOKEN, LAST_TOKEN, is_token, token_members, exact: true),
    kind_range!(
        "trivia",
        FIRST_TRIVIA_TOKEN,
        LAST_TRIVIA_TOKEN,
        is_trivia,
        trivia_members,
        exact: true
    ),
    kind_range!(
        "literal token",
        FIRST_LITERAL_TOKEN,
        LAST_LITERAL_TOKEN,
        is_literal,
        literal_members,
        exact: true
    ),
    kind_range!(
        "template token",
        FIRST_TEMPLATE_TOKEN,
        LAST_TEMPLATE_TOKEN,
        is_template_literal_kind,
        template_members,
        exact: true
    ),
    kind_range!(
        "binary operator",
        FIRST_BINARY_OPERATOR,
        LAST_BINARY_OPERATOR,
        is_binary_operator,
        binary_operator_members,
        exact: false
    ),
    kind_range!(
        "statement",
        FIRST_STATEMENT,
        LAST_STATEMENT,
        is_statement,
        statement_members,
        exact: true
    ),
    kind_range!("node", FIRST_NODE, LAST_NODE, is_node, node_members, exact: true),
    kind_range!(
        "jsdoc node",
        FIRST_JSDOC_NODE,
        LAST_JSDOC_NODE,
        is_jsdoc_kind,
        jsdoc_members,
        exact: true
    ),
    kind_range!(
        "jsdoc tag",
        FIRST_JSDOC_TAG_NODE,
        LAST_JSDOC_TAG_NODE,
        is_jsdoc_tag_kind,
        jsdoc_tag_members,
        exact: true
    ),
];

const fn ranges_are_ordered(ranges: &[KindRange]) -> bool {
    let mut i = 0;
    while i < ranges.len() {
        if ranges[i].first as u16 > ranges[i].last as u16 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    ranges_are_ordered(KIND_RANGES),
    "a declared kind range has first after last"
);

/// Check every declared range against its intended members.
pub fn validate_kind_ranges() -> Result<(), KindRangeError> {
    for range in KIND_RANGES {
        range.check()?;
    }
    debug!(
        ranges = KIND_RANGES.len(),
        kinds = SyntaxKind::COUNT,
        "kind ranges validated"
    );
    Ok(())
}

static KIND_RANGE_CHECK: Lazy<Result<(), KindRangeError>> = Lazy::new(validate_kind_ranges);

/// [`validate_kind_ranges`], run at most once per process.
pub fn ensure_kind_ranges() -> Result<(), KindRangeError> {
    KIND_RANGE_CHECK.clone()
}
