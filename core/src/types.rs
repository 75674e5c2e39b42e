//! Dialect configuration and record type aliases.
//!
//! A [`Dialect`] describes how a delimited text file's bytes map to fields:
//! which character separates fields, how fields are quoted, how quote
//! characters are embedded, and whether malformed structure is an error or
//! recovered from. The defaults match the most common interchange format
//! (comma-separated, double-quoted, quote doubling enabled).

/// An ordered sequence of column names, parsed from the first record of a
/// file.
///
/// Uniqueness is not enforced; duplicate names pass through to the storage
/// engine, which rejects them at table-creation time.
pub type Header = Vec<String>;

/// An ordered sequence of field values for one data record.
///
/// The length is expected, but not guaranteed, to match the header width.
/// A blank physical line produces an empty row.
pub type Row = Vec<String>;

/// Syntactic conventions governing how CSV bytes map to fields.
///
/// Construct with [`Default`] and refine with the builder-style `with_*`
/// methods.
///
/// # Examples
///
/// ```
/// use csv2sql_core::Dialect;
///
/// let dialect = Dialect::default();
/// assert_eq!(dialect.delimiter, ',');
/// assert_eq!(dialect.quote, Some('"'));
/// assert!(dialect.double_quote);
/// assert!(!dialect.strict);
///
/// let tsv = Dialect::default()
///     .with_delimiter('\t')
///     .with_quote(None);
/// assert_eq!(tsv.quote, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    /// Field separator character.
    pub delimiter: char,
    /// Quote character; `None` disables quoting entirely.
    pub quote: Option<char>,
    /// Escape character taking the following character literally; `None`
    /// disables escaping.
    pub escape: Option<char>,
    /// When `true`, a doubled quote character inside a quoted field is one
    /// literal quote character.
    pub double_quote: bool,
    /// When `true`, spaces immediately following a delimiter (outside
    /// quotes) are discarded before the field value begins.
    pub skip_initial_space: bool,
    /// Record terminator. Advisory only: record splitting follows universal
    /// newline handling (`\n`, with a preceding `\r` stripped).
    pub terminator: String,
    /// When `true`, malformed quoting is a parse error; when `false`, the
    /// reader recovers by treating the malformed remainder as literal text.
    pub strict: bool,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: Some('"'),
            escape: None,
            double_quote: true,
            skip_initial_space: false,
            terminator: "\r\n".to_string(),
            strict: false,
        }
    }
}

impl Dialect {
    /// Sets the field separator character.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character, or disables quoting with `None`.
    pub fn with_quote(mut self, quote: Option<char>) -> Self {
        self.quote = quote;
        self
    }

    /// Sets the escape character, or disables escaping with `None`.
    pub fn with_escape(mut self, escape: Option<char>) -> Self {
        self.escape = escape;
        self
    }

    /// Enables or disables quote doubling inside quoted fields.
    pub fn with_double_quote(mut self, double_quote: bool) -> Self {
        self.double_quote = double_quote;
        self
    }

    /// Enables or disables discarding spaces after delimiters.
    pub fn with_skip_initial_space(mut self, skip: bool) -> Self {
        self.skip_initial_space = skip;
        self
    }

    /// Sets the advisory record terminator.
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// Enables or disables strict parsing.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
