//! Token kinds produced by the Jsonnet lexer.

/// All token kinds the import scanner distinguishes.
///
/// Only the kinds that matter for finding imports are modelled precisely;
/// every operator and bracket collapses into [`SyntaxKind::PUNCT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,       // // ... or # ...
    BLOCK_COMMENT,      // /* ... */

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,
    NUMBER,
    DOUBLE_STRING,      // "..."
    SINGLE_STRING,      // '...'
    VERBATIM_DOUBLE,    // @"..."
    VERBATIM_SINGLE,    // @'...'
    TEXT_BLOCK,         // |||\n  ...\n|||

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    IMPORT_KW,
    IMPORTSTR_KW,
    IMPORTBIN_KW,

    PUNCT,
    ERROR,
}

impl SyntaxKind {
    /// Check if this is trivia (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Check if this is any string literal form, text blocks included
    pub fn is_string(self) -> bool {
        matches!(
            self,
            Self::DOUBLE_STRING
                | Self::SINGLE_STRING
                | Self::VERBATIM_DOUBLE
                | Self::VERBATIM_SINGLE
                | Self::TEXT_BLOCK
        )
    }
}
