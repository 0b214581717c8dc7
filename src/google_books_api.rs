use reqwest::StatusCode;
use tracing::debug;

use crate::{
    book::{Book, RawVolume, VolumeList},
    error::{Error, Result},
    options::{FetchOptions, SearchOptions},
};

const BASE_URL: &str = "https://www.googleapis.com/books/v1";

/// Handle on the volumes API. Wraps a `reqwest::Client`, so it is cheap to
/// clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Client::new()
    }
}

impl Client {
    pub fn new() -> Client {
        Client::with_base_url(BASE_URL)
    }

    /// Point the client at a different API root, mainly for tests against a
    /// local server. No trailing slash.
    pub fn with_base_url(base_url: impl Into<String>) -> Client {
        Client {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search volumes matching `query`. Results come back in the order the
    /// API returned them; a response without any items is an empty list,
    /// not an error.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<Book>> {
        if query.is_empty() {
            return Err(Error::QueryRequired);
        }
        options.validate()?;

        let url = format!("{}/volumes", self.base_url);
        let pairs = search_query_pairs(query, options);
        debug!("search request: {} {:?}", url, pairs);

        let body = self.get_body(self.http.get(&url).query(&pairs)).await?;
        let list: VolumeList = serde_json::from_str(&body)?;
        Ok(list
            .items
            .unwrap_or_default()
            .into_iter()
            .map(Book::from_raw)
            .collect())
    }

    /// Look a volume up by its id. `Ok(None)` means the API answered with an
    /// empty body rather than a volume.
    pub async fn fetch(&self, volume_id: &str, options: &FetchOptions) -> Result<Option<Book>> {
        if volume_id.is_empty() {
            return Err(Error::BookIdRequired);
        }

        let url = format!("{}/volumes/{}", self.base_url, volume_id);
        let mut request = self.http.get(&url);
        if let Some(lang) = &options.lang {
            request = request.query(&[("langRestrict", lang)]);
        }
        debug!("fetch request: {}", url);

        let body = self.get_body(request).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let raw: Option<RawVolume> = serde_json::from_str(&body)?;
        Ok(raw.map(Book::from_raw))
    }

    /// Issue the request and accumulate the whole body. Anything other than
    /// a 200 fails without the body being read.
    async fn get_body(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!("request rejected with status {}", status);
            return Err(Error::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

/// The outbound parameter set for a search. Percent-encoding is left to
/// reqwest's query serializer. `langRestrict` and `key` are absent, not
/// empty, when unset.
fn search_query_pairs(query: &str, options: &SearchOptions) -> Vec<(&'static str, String)> {
    let q = match options.field {
        Some(field) => format!("{}{}", field.operator(), query),
        None => query.to_string(),
    };

    let mut pairs = vec![
        ("q", q),
        ("startIndex", options.offset.to_string()),
        ("maxResults", options.limit.to_string()),
        ("printType", options.print_type.as_str().to_string()),
        ("orderBy", options.order.as_str().to_string()),
    ];
    if let Some(lang) = &options.lang {
        pairs.push(("langRestrict", lang.clone()));
    }
    if let Some(key) = &options.key {
        pairs.push(("key", key.clone()));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Field, OrderBy, PrintType};

    fn pair<'a>(pairs: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn field_prefixes_query_text() {
        let options = SearchOptions {
            field: Some(Field::Title),
            ..SearchOptions::default()
        };
        let pairs = search_query_pairs("foo", &options);
        assert_eq!(pair(&pairs, "q"), Some("intitle:foo"));
    }

    #[test]
    fn defaults_map_to_expected_pairs() {
        let pairs = search_query_pairs("rust programming", &SearchOptions::default());
        assert_eq!(pair(&pairs, "q"), Some("rust programming"));
        assert_eq!(pair(&pairs, "startIndex"), Some("0"));
        assert_eq!(pair(&pairs, "maxResults"), Some("10"));
        assert_eq!(pair(&pairs, "printType"), Some("all"));
        assert_eq!(pair(&pairs, "orderBy"), Some("relevance"));
    }

    #[test]
    fn unset_lang_and_key_are_absent() {
        let pairs = search_query_pairs("foo", &SearchOptions::default());
        assert_eq!(pair(&pairs, "langRestrict"), None);
        assert_eq!(pair(&pairs, "key"), None);
    }

    #[test]
    fn lang_and_key_pass_through() {
        let options = SearchOptions {
            key: Some("SECRET".to_string()),
            lang: Some("fr".to_string()),
            print_type: PrintType::Magazines,
            order: OrderBy::Newest,
            offset: 20,
            limit: 40,
            ..SearchOptions::default()
        };
        let pairs = search_query_pairs("foo", &options);
        assert_eq!(pair(&pairs, "langRestrict"), Some("fr"));
        assert_eq!(pair(&pairs, "key"), Some("SECRET"));
        assert_eq!(pair(&pairs, "printType"), Some("magazines"));
        assert_eq!(pair(&pairs, "orderBy"), Some("newest"));
        assert_eq!(pair(&pairs, "startIndex"), Some("20"));
        assert_eq!(pair(&pairs, "maxResults"), Some("40"));
    }
}
