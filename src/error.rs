use std::fmt;

/// The main error type for sconf parsing, access and I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum SconfError {
    /// Raised when the underlying file cannot be read or written.
    IoUnavailable {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A non-blank line that is neither a comment, a header nor `key = value`.
    MalformedLine {
        message: String,
        line: usize,
        content: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    SectionNotFound {
        section: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    KeyNotFound {
        section: String,
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeMismatch {
        expected: String,
        found: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ConversionError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidDate {
        value: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnsupportedType {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

pub type Result<T> = std::result::Result<T, SconfError>;

impl SconfError {
    pub(crate) fn section_not_found(section: &str) -> Self {
        SconfError::SectionNotFound {
            section: section.to_string(),
            hint: Some("Create it first with add_section".into()),
            code: Some(501),
        }
    }

    pub(crate) fn comments_not_found(section: &str) -> Self {
        SconfError::SectionNotFound {
            section: section.to_string(),
            hint: Some("No comments recorded for this section; add one with add_comment".into()),
            code: Some(503),
        }
    }

    pub(crate) fn key_not_found(section: &str, key: &str) -> Self {
        SconfError::KeyNotFound {
            section: section.to_string(),
            key: key.to_string(),
            hint: None,
            code: Some(502),
        }
    }

    pub(crate) fn type_mismatch(expected: &str, found: &str) -> Self {
        SconfError::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
            hint: None,
            code: Some(401),
        }
    }

    /// Numeric code attached to the error, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            SconfError::IoUnavailable { code, .. }
            | SconfError::MalformedLine { code, .. }
            | SconfError::SectionNotFound { code, .. }
            | SconfError::KeyNotFound { code, .. }
            | SconfError::TypeMismatch { code, .. }
            | SconfError::ConversionError { code, .. }
            | SconfError::InvalidDate { code, .. }
            | SconfError::UnsupportedType { code, .. } => *code,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for SconfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SconfError::IoUnavailable { message, path, hint, code } =>
                write!(f, "[SCONF] File Error '{}': {}{}", path, message, suffix(hint, code)),
            SconfError::MalformedLine { message, line, content, hint, code } =>
                write!(f, "[SCONF] Malformed line {}: {} ({:?}){}",
                    line, message, content, suffix(hint, code)),
            SconfError::SectionNotFound { section, hint, code } =>
                write!(f, "[SCONF] Section not found: '{}'{}", section, suffix(hint, code)),
            SconfError::KeyNotFound { section, key, hint, code } =>
                write!(f, "[SCONF] Key '{}' not found in section '{}'{}",
                    key, section, suffix(hint, code)),
            SconfError::TypeMismatch { expected, found, hint, code } =>
                write!(f, "[SCONF] Type Error: expected {}, found {}{}",
                    expected, found, suffix(hint, code)),
            SconfError::ConversionError { message, hint, code } =>
                write!(f, "[SCONF] Conversion Error: {}{}", message, suffix(hint, code)),
            SconfError::InvalidDate { value, hint, code } =>
                write!(f, "[SCONF] Invalid date '{}'{}", value, suffix(hint, code)),
            SconfError::UnsupportedType { message, hint, code } =>
                write!(f, "[SCONF] Unsupported type: {}{}", message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for SconfError {}
