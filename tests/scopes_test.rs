use spotlibfy::scopes::{Scope, ScopeSet};

#[test]
fn test_catalog_has_every_scope_once() {
    assert_eq!(Scope::ALL.len(), 25);
    for (i, a) in Scope::ALL.iter().enumerate() {
        for b in &Scope::ALL[i + 1..] {
            assert_ne!(a.as_str(), b.as_str());
        }
    }
}

#[test]
fn test_scope_identifiers() {
    assert_eq!(Scope::UgcImageUpload.as_str(), "ugc-image-upload");
    assert_eq!(Scope::UserSoaLink.as_str(), "user-soa-link");
    assert_eq!(Scope::SoaCreatePartner.as_str(), "soa-create-partner");
    assert_eq!(Scope::PlaylistModifyPublic.to_string(), "playlist-modify-public");
}

#[test]
fn test_scope_from_str_round_trip() {
    for scope in Scope::ALL {
        assert_eq!(scope.as_str().parse::<Scope>().unwrap(), scope);
    }
    assert!("user-read-everything".parse::<Scope>().is_err());
}

#[test]
fn test_every_scope_is_described() {
    assert!(Scope::ALL.iter().all(|s| !s.description().is_empty()));
}

#[test]
fn test_scope_set_keeps_order() {
    let set = ScopeSet::from([Scope::UserReadEmail, Scope::PlaylistModifyPublic]);
    assert_eq!(set.to_query_value(), "user-read-email playlist-modify-public");
}

#[test]
fn test_scope_set_ignores_duplicates() {
    let mut set = ScopeSet::new().with(Scope::Streaming);
    assert!(!set.insert(Scope::Streaming));
    assert!(set.insert(Scope::UserTopRead));
    assert_eq!(set.len(), 2);
    assert_eq!(set.to_query_value(), "streaming user-top-read");
}

#[test]
fn test_scope_set_parse_mixed_separators() {
    let set = ScopeSet::parse("user-read-email, playlist-modify-public  user-read-email").unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.contains(Scope::UserReadEmail));
    assert!(set.contains(Scope::PlaylistModifyPublic));
}

#[test]
fn test_scope_set_parse_unknown_fails() {
    assert!(ScopeSet::parse("user-read-email nope").is_err());
}

#[test]
fn test_empty_scope_set() {
    let set = ScopeSet::new();
    assert!(set.is_empty());
    assert_eq!(set.to_query_value(), "");
}
