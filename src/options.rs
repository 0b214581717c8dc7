use crate::error::{Error, Result};

/// Search-scoping keyword, translated into a query operator prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Publisher,
    Subject,
    Isbn,
}

impl Field {
    /// The operator prefix the API expects, prepended directly onto the
    /// query text with no extra separator.
    pub fn operator(self) -> &'static str {
        match self {
            Field::Title => "intitle:",
            Field::Author => "inauthor:",
            Field::Publisher => "inpublisher:",
            Field::Subject => "subject:",
            Field::Isbn => "isbn:",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintType {
    #[default]
    All,
    Books,
    Magazines,
}

impl PrintType {
    pub fn as_str(self) -> &'static str {
        match self {
            PrintType::All => "all",
            PrintType::Books => "books",
            PrintType::Magazines => "magazines",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Relevance,
    Newest,
}

impl OrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderBy::Relevance => "relevance",
            OrderBy::Newest => "newest",
        }
    }
}

/// Options for a search call. Construct with struct-update syntax over the
/// defaults:
///
/// ```
/// use google_books_search::{Field, SearchOptions};
///
/// let options = SearchOptions {
///     field: Some(Field::Title),
///     limit: 20,
///     ..SearchOptions::default()
/// };
/// ```
///
/// `offset` and `limit` are kept signed so out-of-range values can be
/// reported as errors instead of silently wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Optional API key, passed through as the `key` parameter.
    pub key: Option<String>,
    /// Restrict matching to a single field of the volume.
    pub field: Option<Field>,
    /// Index of the first result to return.
    pub offset: i32,
    /// Maximum number of results, between 1 and 40.
    pub limit: i32,
    pub print_type: PrintType,
    pub order: OrderBy,
    /// Two-letter language code. Omitted from the request when unset.
    pub lang: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            key: None,
            field: None,
            offset: 0,
            limit: 10,
            print_type: PrintType::All,
            order: OrderBy::Relevance,
            lang: None,
        }
    }
}

impl SearchOptions {
    /// Checked before any request is built or sent.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.offset < 0 {
            return Err(Error::OffsetBelowZero);
        }
        if self.limit < 1 || self.limit > 40 {
            return Err(Error::LimitOutOfRange);
        }
        Ok(())
    }
}

/// Options for a fetch-by-id call. Only the language restriction applies to
/// a volume lookup, so nothing else is accepted here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchOptions {
    /// Two-letter language code. Omitted from the request when unset.
    pub lang: Option<String>,
}
