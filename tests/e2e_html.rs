//! HTML and HTML meta tag source E2E tests

mod helper;

use helper::serve;
use latest::version::checker::check;
use latest::version::error::CheckError;
use latest::version::sources::{HtmlMetaSource, HtmlSource};
use latest::version::types::Meta;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="go-latest" content="otherapp 9.0.0">
    <meta name="go-latest" content="myapp 2.0.0 upgrade now">
    <title>myapp</title>
  </head>
  <body><h1>myapp</h1></body>
</html>"#;

#[tokio::test]
async fn check_reads_meta_tag_for_product() {
    let (server, mock) = serve("/", "text/html", PAGE).await;

    let source = HtmlMetaSource::new(&server.url(), "myapp");
    let result = check("1.9.0", &source).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.current, "2.0.0");
    assert!(!result.latest);
    assert!(result.outdated);
    assert_eq!(result.meta, Some(Meta::with_message("upgrade now")));
}

#[tokio::test]
async fn check_fails_when_product_has_no_meta_tag() {
    let (server, mock) = serve("/", "text/html", PAGE).await;

    let source = HtmlMetaSource::new(&server.url(), "unknown");
    let result = check("1.0.0", &source).await;

    mock.assert_async().await;
    assert!(matches!(result, Err(CheckError::NotFound(_))));
}

#[tokio::test]
async fn check_reads_plain_text_endpoint() {
    let (server, mock) = serve("/VERSION", "text/plain", "3.1.4\n").await;

    let source = HtmlSource::new(&format!("{}/VERSION", server.url()));
    let result = check("3.1.4", &source).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.current, "3.1.4");
    assert!(result.latest);
    assert!(!result.new);
}
