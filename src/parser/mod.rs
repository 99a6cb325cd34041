//! Import scanning for Jsonnet sources
//!
//! Nothing here evaluates Jsonnet. A **logos** lexer splits the source into
//! tokens precisely enough that comments, strings and text blocks are never
//! mistaken for code, and the extractor reads the string literal after each
//! import keyword.
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! extract_imports → ImportReference { literal, form, range }
//! ```

mod imports;
mod lexer;
mod literal;
mod syntax_kind;

pub use imports::{ImportForm, ImportReference, extract_imports};
pub use lexer::{Lexer, Token, tokenize};
pub use syntax_kind::SyntaxKind;
