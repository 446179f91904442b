use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::document::Document;
use crate::error::Result;
use crate::lexer::{self, Line};

mod value;

/// Knobs for [`parse_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Type bare (unquoted) scalars as integer, double, boolean or date when
    /// they look like one. Off by default: every parsed scalar is a string.
    pub infer_types: bool,
}

/// Line-oriented parser. Feed it lines with [`Parser::feed`] and collect the
/// result with [`Parser::finish`].
pub struct Parser {
    document: Document,
    current_section: String,
    comment_buffer: Vec<String>,
    line_no: usize,
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            document: Document::new(),
            current_section: String::new(),
            comment_buffer: Vec::new(),
            line_no: 0,
            options,
        }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Consume one line of input.
    pub fn feed(&mut self, text: &str) -> Result<()> {
        self.line_no += 1;

        match lexer::classify_line(text, self.line_no)? {
            Line::Blank => return Ok(()),
            Line::Comment(comment) => {
                self.comment_buffer.push(comment.to_string());
                return Ok(());
            }
            Line::Section(name) => {
                trace!(section = name, line = self.line_no, "section header");
                self.current_section = name.to_string();
                let slot = self.document.comment_slot(name);
                slot.append(&mut self.comment_buffer);
            }
            Line::Entry { key, value: raw } => {
                let value = value::decode(raw, &self.options);
                self.document
                    .section_entry(&self.current_section)
                    .insert(key.to_string(), value);
            }
        }

        self.comment_buffer.clear();
        Ok(())
    }

    pub fn finish(self) -> Document {
        if !self.comment_buffer.is_empty() {
            warn!(
                count = self.comment_buffer.len(),
                "discarding trailing comments with no following section"
            );
        }
        let keys: usize = self.document.sections_iter().map(|(_, keys)| keys.len()).sum();
        debug!(
            sections = self.document.len(),
            keys,
            lines = self.line_no,
            "parsed document"
        );
        self.document
    }
}

/// Parse a sequence of lines with default options.
pub fn parse<I, S>(lines: I) -> Result<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_with_options(lines, ParseOptions::default())
}

/// Parse a sequence of lines. The first malformed line aborts the whole parse.
pub fn parse_with_options<I, S>(lines: I, options: ParseOptions) -> Result<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new(options);
    for line in lines {
        parser.feed(line.as_ref())?;
    }
    Ok(parser.finish())
}
