use super::{Query, segment};

/// `GET` a single audiobook chapter.
pub fn get_chapter(id: &str, market: Option<&str>) -> String {
    Query::new(format!("/chapters/{}", segment(id)))
        .opt("market", market)
        .build()
}

/// `GET` several chapters (maximum 50 ids).
pub fn get_several_chapters(ids: &[&str], market: Option<&str>) -> String {
    Query::new("/chapters")
        .list("ids", ids)
        .opt("market", market)
        .build()
}
