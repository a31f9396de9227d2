//! Static generation tests against a mock content service.

use std::path::PathBuf;

use cms_gateway::pages::Prerenderer;

mod common;

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cms-gateway-test-{}-{}", name, std::process::id()))
}

#[tokio::test]
async fn test_build_writes_known_pages() {
    let cms = common::start_mock_cms(vec![
        common::page_doc("/", "Home"),
        common::page_doc("/fr/about", "À propos"),
    ])
    .await;
    let config = common::gateway_config(&cms);
    let out = scratch_dir("build");

    let summary = Prerenderer::new(common::resolver_for(&config))
        .build(&out)
        .await
        .unwrap();

    assert_eq!(summary.pages, 2);
    assert_eq!(summary.not_found, 0);

    let home = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(home.contains("<title>Home</title>"));

    let about = std::fs::read_to_string(out.join("fr/about/index.html")).unwrap();
    assert!(about.contains(r#"<html lang="fr">"#));
    assert!(about.contains("<title>À propos</title>"));

    std::fs::remove_dir_all(&out).unwrap_or_default();
}

#[tokio::test]
async fn test_build_fails_when_enumeration_fails() {
    let cms = common::start_failing_cms().await;
    let config = common::gateway_config(&cms);
    let out = scratch_dir("fail");

    let result = Prerenderer::new(common::resolver_for(&config))
        .build(&out)
        .await;
    assert!(result.is_err());

    // Nothing partial was written
    assert!(!out.exists());
}
