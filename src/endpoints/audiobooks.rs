//! Audiobooks. Only available in the US, UK, Canada, Ireland, New Zealand
//! and Australia markets.

use super::{Query, segment};

/// `GET` a single audiobook.
pub fn get_audiobook(id: &str, market: Option<&str>) -> String {
    Query::new(format!("/audiobooks/{}", segment(id)))
        .opt("market", market)
        .build()
}

/// `GET` several audiobooks (maximum 50 ids).
pub fn get_several_audiobooks(ids: &[&str], market: Option<&str>) -> String {
    Query::new("/audiobooks")
        .list("ids", ids)
        .opt("market", market)
        .build()
}

/// `GET` the chapters of an audiobook.
pub fn get_audiobook_chapters(
    id: &str,
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    Query::new(format!("/audiobooks/{}/chapters", segment(id)))
        .opt("market", market)
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `GET` the audiobooks saved in the current user's library.
///
/// Scopes: `user-library-read`.
pub fn get_users_saved_audiobooks(limit: Option<u32>, offset: Option<u32>) -> String {
    Query::new("/me/audiobooks")
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `PUT` audiobooks into the current user's library.
///
/// Scopes: `user-library-modify`.
pub fn save_audiobooks_for_current_user(ids: &[&str]) -> String {
    Query::new("/me/audiobooks").list("ids", ids).build()
}

/// `DELETE` audiobooks from the current user's library.
///
/// Scopes: `user-library-modify`.
pub fn remove_users_saved_audiobooks(ids: &[&str]) -> String {
    save_audiobooks_for_current_user(ids)
}

/// `GET` whether audiobooks are saved in the current user's library.
///
/// Scopes: `user-library-read`.
pub fn check_users_saved_audiobooks(ids: &[&str]) -> String {
    Query::new("/me/audiobooks/contains").list("ids", ids).build()
}
