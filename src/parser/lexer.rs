//! Logos-based lexer for Jsonnet
//!
//! Tokenizes just enough of the language to find import expressions without
//! being fooled by comments, string contents or text blocks.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    #[regex(r"#[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    DoubleString,

    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    SingleString,

    #[regex(r#"@"([^"]|"")*""#)]
    VerbatimDouble,

    #[regex(r"@'([^']|'')*'")]
    VerbatimSingle,

    #[token("|||", lex_text_block)]
    TextBlock,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("import")]
    ImportKw,

    #[token("importstr")]
    ImportstrKw,

    #[token("importbin")]
    ImportbinKw,

    #[regex(r"[{}\[\]().,;:+\-*/%<>=!~&|^$?]")]
    Punct,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            Ident => SyntaxKind::IDENT,
            Number => SyntaxKind::NUMBER,
            DoubleString => SyntaxKind::DOUBLE_STRING,
            SingleString => SyntaxKind::SINGLE_STRING,
            VerbatimDouble => SyntaxKind::VERBATIM_DOUBLE,
            VerbatimSingle => SyntaxKind::VERBATIM_SINGLE,
            TextBlock => SyntaxKind::TEXT_BLOCK,

            ImportKw => SyntaxKind::IMPORT_KW,
            ImportstrKw => SyntaxKind::IMPORTSTR_KW,
            ImportbinKw => SyntaxKind::IMPORTBIN_KW,

            Punct => SyntaxKind::PUNCT,
        }
    }
}

/// Consume a text block body after its opening `|||`.
fn lex_text_block(lex: &mut logos::Lexer<'_, LogosToken>) -> bool {
    match text_block_len(lex.remainder()) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => false,
    }
}

/// Length of a text block body, up to and including the closing `|||`.
///
/// The opening `|||` (optionally followed by the `-` chomp marker) must end
/// its line. The first non-blank line fixes the indentation; the block ends
/// at the first line that is less indented, which must be whitespace
/// followed by `|||`.
fn text_block_len(rest: &str) -> Option<usize> {
    let mut pos = usize::from(rest.starts_with('-'));
    let first_newline = pos + rest[pos..].find('\n')?;
    if !rest[pos..first_newline].trim().is_empty() {
        return None;
    }
    pos = first_newline + 1;

    let mut indent: Option<&str> = None;
    loop {
        let line_end = rest[pos..].find('\n').map_or(rest.len(), |i| pos + i);
        let line = &rest[pos..line_end];
        let ws_len = line.len() - line.trim_start_matches([' ', '\t']).len();

        match indent {
            None if line.trim().is_empty() => {}
            None if ws_len == 0 => return None,
            None => indent = Some(&line[..ws_len]),
            Some(ind) if line.starts_with(ind) || line.trim().is_empty() => {}
            Some(_) => {
                return line[ws_len..]
                    .starts_with("|||")
                    .then_some(pos + ws_len + 3);
            }
        }

        if line_end == rest.len() {
            return None;
        }
        pos = line_end + 1;
    }
}
