use std::path::PathBuf;

use spotlibfy::management::TokenManager;
use spotlibfy::types::AccessToken;

fn temp_token_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("spotlibfy-test-{}-{}", name, std::process::id()))
        .join("cache/token.json")
}

#[tokio::test]
async fn test_persist_and_load_token() {
    let path = temp_token_path("persist");
    let manager = TokenManager::new(AccessToken::new("tok_1")).at_path(path.clone());
    manager.persist().await.unwrap();

    let loaded = TokenManager::load_from(path.clone()).await.unwrap();
    assert_eq!(loaded.access_token().as_str(), "tok_1");
    assert_eq!(
        loaded.current_token().obtained_at,
        manager.current_token().obtained_at
    );
    assert_eq!(loaded.path(), &path);

    let _ = std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
}

#[tokio::test]
async fn test_load_missing_token_fails() {
    let path = temp_token_path("missing");
    assert!(TokenManager::load_from(path).await.is_err());
}

#[test]
fn test_access_token_debug_is_masked() {
    let token = AccessToken::new("secret-token");
    assert!(!format!("{:?}", token).contains("secret-token"));
}
