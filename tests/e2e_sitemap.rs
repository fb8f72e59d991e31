// tests/e2e_sitemap.rs
use axum::http::{StatusCode, header};
use lumezza_catalog::domain::product::ProductCatalog;

mod support;

#[tokio::test]
async fn sitemap_lists_root_then_each_product() {
    let resp = support::get(support::make_test_router(), "/sitemap.xml").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
    assert!(ct.starts_with("application/xml"), "unexpected content-type: {ct}");

    let xml = String::from_utf8(support::read_body(resp).await).unwrap();
    let locs: Vec<&str> = xml
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix("<loc>")
                .and_then(|rest| rest.strip_suffix("</loc>"))
        })
        .collect();

    // Colliding titles are emitted as they are.
    assert_eq!(
        locs,
        vec![
            "https://lumezza.test",
            "https://lumezza.test/product/gold-ring",
            "https://lumezza.test/product/silver-band",
            "https://lumezza.test/product/gold-ring",
        ]
    );
    assert_eq!(xml.matches("<lastmod>2025-01-01T00:00:00Z</lastmod>").count(), 4);
    assert_eq!(xml.matches("<changefreq>daily</changefreq>").count(), 1);
    assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 3);
    assert_eq!(xml.matches("<priority>1.0</priority>").count(), 1);
    assert_eq!(xml.matches("<priority>0.8</priority>").count(), 3);
}

#[tokio::test]
async fn sitemap_for_empty_catalog_has_only_root() {
    let app = support::build_test_app(ProductCatalog::default(), support::RecordingForwarder::default());
    let resp = support::get(app.router, "/sitemap.xml").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let xml = String::from_utf8(support::read_body(resp).await).unwrap();
    assert_eq!(xml.matches("<url>").count(), 1);
    assert!(xml.contains("<loc>https://lumezza.test</loc>"));
}
