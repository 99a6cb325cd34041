//! Import extraction from Jsonnet source text.

use indexmap::IndexMap;
use text_size::{TextRange, TextSize};

use super::lexer::{Lexer, Token};
use super::literal;
use super::syntax_kind::SyntaxKind;
use crate::base::{Error, LiteralError, Result};

/// Which import expression referenced a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportForm {
    /// `import "x"`: the target is evaluated as code.
    Code,
    /// `importstr "x"`: the target is read as an opaque string.
    String,
    /// `importbin "x"`: the target is read as opaque bytes.
    Binary,
}

impl ImportForm {
    fn from_keyword(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::IMPORT_KW => Some(Self::Code),
            SyntaxKind::IMPORTSTR_KW => Some(Self::String),
            SyntaxKind::IMPORTBIN_KW => Some(Self::Binary),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Code => "import",
            Self::String => "importstr",
            Self::Binary => "importbin",
        }
    }
}

/// A literal import target as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReference {
    /// Decoded value of the string literal.
    pub literal: String,
    pub form: ImportForm,
    /// Range of the literal token in the source.
    pub range: TextRange,
}

/// Extract every import target from `text`, in order of first occurrence.
///
/// Imports inside comments, strings and text blocks are never reported.
/// A target imported several times is reported once, with the form and range
/// of its first occurrence.
///
/// # Errors
///
/// [`Error::MalformedImportLiteral`] when an import keyword is not followed
/// by a decodable string literal.
pub fn extract_imports(text: &str) -> Result<Vec<ImportReference>> {
    let mut seen: IndexMap<String, ImportReference> = IndexMap::new();
    let mut tokens = Lexer::new(text).filter(|t| !t.kind.is_trivia());

    while let Some(token) = tokens.next() {
        let Some(form) = ImportForm::from_keyword(token.kind) else {
            continue;
        };
        let reference = read_literal(form, &token, tokens.next())?;
        seen.entry(reference.literal.clone()).or_insert(reference);
    }

    Ok(seen.into_values().collect())
}

fn read_literal(
    form: ImportForm,
    keyword: &Token<'_>,
    next: Option<Token<'_>>,
) -> Result<ImportReference> {
    let Some(token) = next else {
        return Err(Error::malformed(
            keyword.offset,
            LiteralError::MissingLiteral(form.keyword()),
        ));
    };

    if token.kind == SyntaxKind::ERROR && token.text.starts_with(['"', '\'', '@']) {
        return Err(Error::malformed(token.offset, LiteralError::Unterminated));
    }
    if !token.kind.is_string() {
        return Err(Error::malformed(
            token.offset,
            LiteralError::MissingLiteral(form.keyword()),
        ));
    }

    let literal = literal::decode(token.kind, token.text)
        .map_err(|reason| Error::malformed(token.offset, reason))?;
    let len = TextSize::new(token.text.len() as u32);
    Ok(ImportReference {
        literal,
        form,
        range: TextRange::at(token.offset, len),
    })
}
