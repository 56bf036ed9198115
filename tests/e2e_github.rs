//! GitHub tags source E2E tests

mod helper;

use helper::serve;
use latest::version::checker::{Checker, check};
use latest::version::error::CheckError;
use latest::version::semver::VersionFix;
use latest::version::sources::GitHubTagSource;

const TAGS: &str = r#"[
    {"name": "v1.0.0"},
    {"name": "v1.1.0"},
    {"name": "not-a-version"}
]"#;

#[tokio::test]
async fn check_uses_greatest_tag_and_reports_malformed() {
    let (server, mock) = serve("/repos/tcnksm/ghr/tags", "application/json", TAGS).await;

    let source = GitHubTagSource::new("tcnksm", "ghr")
        .with_base_url(&server.url())
        .with_fix(VersionFix::delete_leading_v());
    let result = check("1.0.0", &source).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.current, "1.1.0");
    assert!(result.outdated);
    assert_eq!(result.malformed, vec!["not-a-version".to_string()]);
    assert_eq!(result.meta, None);
}

#[tokio::test]
async fn check_accepts_prefixed_target_with_target_fix() {
    let (server, mock) = serve("/repos/tcnksm/ghr/tags", "application/json", TAGS).await;

    let source = GitHubTagSource::new("tcnksm", "ghr")
        .with_base_url(&server.url())
        .with_fix(VersionFix::delete_leading_v());
    let result = Checker::new()
        .with_target_fix(VersionFix::delete_leading_v())
        .check("v1.2.0", &source)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.latest);
    assert!(result.new);
}

#[tokio::test]
async fn check_fails_when_no_tag_is_a_version() {
    let (server, mock) = serve(
        "/repos/tcnksm/ghr/tags",
        "application/json",
        r#"[{"name": "nightly"}, {"name": "stable"}]"#,
    )
    .await;

    let source = GitHubTagSource::new("tcnksm", "ghr").with_base_url(&server.url());
    let result = check("1.0.0", &source).await;

    mock.assert_async().await;
    assert!(matches!(result, Err(CheckError::NoVersionToCompare)));
}

#[tokio::test]
async fn check_rejects_missing_owner_before_request() {
    let source = GitHubTagSource::new("", "ghr").with_base_url("http://127.0.0.1:9");

    let result = check("1.0.0", &source).await;

    assert!(matches!(result, Err(CheckError::Config(_))));
}
