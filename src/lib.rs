//! A small INI-style configuration format.
//!
//! ```
//! use sconf::{Document, Value};
//!
//! let doc: Document = "; greeting\n[hello]\nname = \"Ada\"\nnums = [1, 2]\n".parse().unwrap();
//! assert_eq!(doc.get_section("hello").unwrap()["name"], Value::from("Ada"));
//! assert_eq!(doc.get_comments("hello").unwrap(), ["greeting"]);
//! assert_eq!(sconf::to_string(&doc).unwrap(), "; greeting\n[hello]\nname = Ada\nnums = [1, 2]\n");
//! ```

pub mod document;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod value;

pub use document::{Document, Section};
pub use error::{Result, SconfError};
pub use export::{export_to_json, serialize, to_string};
pub use parser::{parse, parse_with_options, ParseOptions, Parser};
pub use value::{Value, ValueKind};
