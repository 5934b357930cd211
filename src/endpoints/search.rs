use super::{Query, SearchType};

/// `GET` catalog items matching a keyword query.
///
/// `q` may use field filters (`album:`, `artist:`, `track:`, `year:`,
/// `upc:`, `tag:hipster`, `tag:new`, `isrc:`, `genre:`) and is encoded here,
/// so pass it unencoded. `include_external` accepts `audio`, marking
/// externally hosted audio as playable.
///
/// ```
/// let url = search_for_item("remaster track:Doxy artist:Miles Davis", &[SearchType::Track], None, Some(5), None, None);
/// ```
pub fn search_for_item(
    q: &str,
    types: &[SearchType],
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
    include_external: Option<&str>,
) -> String {
    Query::new("/search")
        .param("q", q)
        .list("type", types)
        .opt("market", market)
        .opt("limit", limit)
        .opt("offset", offset)
        .opt("include_external", include_external)
        .build()
}
