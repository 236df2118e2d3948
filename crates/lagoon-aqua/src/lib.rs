//! Lexer, parser, tree model, and writer for the **aquarium scene file
//! format** (`.aqua`) — a small attribute-only XML subset.
//!
//! This crate is intentionally dependency-free so scene-file tooling can
//! read and write `.aqua` documents without pulling in any engine code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`tree`] | `Element`, `Attribute` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//! | [`writer`] | `write_document` |
//!
//! # Quick start
//!
//! ```rust
//! use lagoon_aqua::parse_str;
//!
//! let src = r#"<aqua><item x="100" y="200" type="castle"/></aqua>"#;
//!
//! let root = parse_str(src).unwrap();
//! assert_eq!(root.name, "aqua");
//! assert_eq!(root.children[0].attr("type"), Some("castle"));
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod tree;
pub mod writer;

pub use error::ParseError;
pub use parser::parse_str;
pub use tree::{Attribute, Element};
pub use writer::write_document;
