//! Client for the Google Books `volumes` API.
//!
//! Two entry points: [`search`] runs a free-text (optionally field-scoped)
//! query, [`fetch`] looks a single volume up by id. Both normalize the API's
//! JSON into the flat [`Book`] record. One HTTPS GET per call, no retries,
//! no caching; every failure comes back as an [`Error`].
//!
//! ```no_run
//! use google_books_search::{search, Field, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> google_books_search::Result<()> {
//!     let options = SearchOptions {
//!         field: Some(Field::Title),
//!         limit: 5,
//!         ..SearchOptions::default()
//!     };
//!     for book in search("the google story", &options).await? {
//!         println!("{:?} ({:?})", book.title, book.isbn13);
//!     }
//!     Ok(())
//! }
//! ```

pub mod book;
pub mod error;
pub mod google_books_api;
pub mod options;

pub use book::Book;
pub use error::{Error, Result};
pub use google_books_api::Client;
pub use options::{FetchOptions, Field, OrderBy, PrintType, SearchOptions};

/// Search volumes with a one-off [`Client`]. Use [`Client`] directly to
/// reuse its connection pool across calls.
pub async fn search(query: &str, options: &SearchOptions) -> Result<Vec<Book>> {
    Client::new().search(query, options).await
}

/// Fetch a volume by id with a one-off [`Client`].
pub async fn fetch(volume_id: &str, options: &FetchOptions) -> Result<Option<Book>> {
    Client::new().fetch(volume_id, options).await
}
