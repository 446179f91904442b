// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Result, SconfError};
use crate::export;
use crate::lexer::{trim, trim_quotes};
use crate::parser::{self, ParseOptions};
use crate::value::Value;

mod access;
mod comments;
mod conversion;

/// Keys of one section, in insertion order.
pub type Section = IndexMap<String, Value>;

/// An in-memory configuration document: named sections of typed values, plus
/// the comments that preceded each section header.
///
/// Sections and keys keep the order in which they were first inserted.
/// Every name passed to the public API is trimmed and stripped of one pair of
/// surrounding quotes, so `" \"net\" "` and `net` address the same section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    data: IndexMap<String, Section>,
    comments: IndexMap<String, Vec<String>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections holding data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Parse a document from already-split lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parser::parse(lines)
    }

    pub fn from_lines_with_options<I, S>(lines: I, options: ParseOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parser::parse_with_options(lines, options)
    }

    /// Load a document from disk with default parse options.
    ///
    /// A leading `~/` is expanded to the home directory.
    ///
    /// # Example
    /// ```no_run
    /// # use sconf::Document;
    /// # fn main() -> Result<(), sconf::SconfError> {
    /// let doc = Document::from_file("~/.config/app/app.sconf")?;
    /// for name in doc.sections() {
    ///     println!("[{}]", name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with_options(path, ParseOptions::default())
    }

    pub fn from_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = resolve_path(path.as_ref())?;

        let content = fs::read_to_string(&path).map_err(|e| SconfError::IoUnavailable {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read config file");

        parser::parse_with_options(content.lines(), options)
    }

    /// Load from `primary`, falling back to `fallback` if `primary` cannot be
    /// read. Parse errors in `primary` are returned as-is.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self> {
        match Self::from_file(&primary) {
            Ok(doc) => Ok(doc),
            Err(SconfError::IoUnavailable { .. }) => {
                debug!(
                    primary = %primary.as_ref().display(),
                    fallback = %fallback.as_ref().display(),
                    "primary config unavailable, trying fallback"
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    SconfError::IoUnavailable { message, .. } => SconfError::IoUnavailable {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: fallback.as_ref().to_string_lossy().to_string(),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(302),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Serialize the document and write it to `path`, replacing its contents.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = resolve_path(path.as_ref())?;
        let text = export::to_string(self)?;

        fs::write(&path, text).map_err(|e| SconfError::IoUnavailable {
            message: format!("Failed to write file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the directory exists and is writable".into()),
            code: Some(303),
        })?;
        debug!(path = %path.display(), sections = self.len(), "wrote config file");
        Ok(())
    }

    pub(crate) fn sections_iter(&self) -> impl Iterator<Item = (&String, &Section)> {
        self.data.iter()
    }

    pub(crate) fn comments_iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.comments.iter()
    }

    pub(crate) fn comments_for(&self, section: &str) -> Option<&[String]> {
        self.comments.get(section).map(Vec::as_slice)
    }

    /// Section map for `name`, created empty if missing. `name` must already
    /// be normalized.
    pub(crate) fn section_entry(&mut self, name: &str) -> &mut Section {
        self.data.entry(name.to_string()).or_default()
    }

    /// Comment list for `name`, created empty if missing.
    pub(crate) fn comment_slot(&mut self, name: &str) -> &mut Vec<String> {
        self.comments.entry(name.to_string()).or_default()
    }
}

impl FromStr for Document {
    type Err = SconfError;

    fn from_str(content: &str) -> Result<Self> {
        parser::parse(content.lines())
    }
}

/// Trim and strip one pair of quotes, as applied to every section/key name.
pub(crate) fn normalize(name: &str) -> &str {
    trim_quotes(trim(name))
}

/// Expand "~/" against the home directory.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    match raw.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| SconfError::IoUnavailable {
                message: "Could not determine home directory for ~ expansion".into(),
                path: raw.to_string(),
                hint: Some("Set HOME or use an absolute path".into()),
                code: Some(300),
            })?;
            Ok(home.join(rest))
        }
        None => Ok(path.to_path_buf()),
    }
}
