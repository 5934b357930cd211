use super::{Query, segment};

/// `GET` the categories shown on Spotify's Browse tab.
///
/// `locale` combines an ISO 639-1 language and ISO 3166-1 country code,
/// e.g. `es_MX`.
pub fn get_several_browse_categories(
    locale: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    Query::new("/browse/categories")
        .opt("locale", locale)
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `GET` a single browse category.
pub fn get_single_browse_category(category_id: &str, locale: Option<&str>) -> String {
    Query::new(format!("/browse/categories/{}", segment(category_id)))
        .opt("locale", locale)
        .build()
}
