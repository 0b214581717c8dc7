use serde::{Deserialize, Serialize};

/// One volume as reported by the API, flattened to the fields this crate
/// exposes. Everything except `id` is optional because the API omits fields
/// freely depending on the volume.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub self_link: Option<String>,
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub page_count: Option<i64>,
    pub print_type: Option<String>,
    pub categories: Option<Vec<String>>,
    pub language: Option<String>,
    pub info_link: Option<String>,
    pub description: Option<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<i64>,
    pub preview_link: Option<String>,
    /// Hoisted from `imageLinks.thumbnail` when the volume has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn10: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn13: Option<String>,
}

// Wire shapes, deserialize-only. Fields the crate does not surface are
// ignored by serde.

#[derive(Deserialize, Debug)]
pub(crate) struct VolumeList {
    pub(crate) items: Option<Vec<RawVolume>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawVolume {
    #[serde(default)]
    pub(crate) id: String,
    pub(crate) self_link: Option<String>,
    pub(crate) volume_info: Option<RawVolumeInfo>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawVolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    publisher: Option<String>,
    published_date: Option<String>,
    page_count: Option<i64>,
    print_type: Option<String>,
    categories: Option<Vec<String>>,
    language: Option<String>,
    info_link: Option<String>,
    description: Option<String>,
    average_rating: Option<f64>,
    ratings_count: Option<i64>,
    preview_link: Option<String>,
    image_links: Option<RawImageLinks>,
    industry_identifiers: Option<Vec<RawIndustryIdentifier>>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct RawImageLinks {
    thumbnail: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawIndustryIdentifier {
    #[serde(rename = "type")]
    kind: String,
    identifier: String,
}

impl Book {
    /// Project a raw API volume into the flat record. Copies the whitelisted
    /// volumeInfo fields, attaches id and selfLink from the enclosing item,
    /// hoists the thumbnail link, and routes industry identifiers to
    /// isbn10/isbn13. When the same identifier type appears more than once
    /// the last entry wins.
    pub(crate) fn from_raw(raw: RawVolume) -> Book {
        let info = raw.volume_info.unwrap_or_default();

        let mut isbn10 = None;
        let mut isbn13 = None;
        for entry in info.industry_identifiers.unwrap_or_default() {
            match entry.kind.as_str() {
                "ISBN_10" => isbn10 = Some(entry.identifier),
                "ISBN_13" => isbn13 = Some(entry.identifier),
                _ => {}
            }
        }

        Book {
            id: raw.id,
            self_link: raw.self_link,
            title: info.title,
            authors: info.authors,
            publisher: info.publisher,
            published_date: info.published_date,
            page_count: info.page_count,
            print_type: info.print_type,
            categories: info.categories,
            language: info.language,
            info_link: info.info_link,
            description: info.description,
            average_rating: info.average_rating,
            ratings_count: info.ratings_count,
            preview_link: info.preview_link,
            thumbnail: info.image_links.and_then(|links| links.thumbnail),
            isbn10,
            isbn13,
        }
    }
}
