//! End-to-end fetcher tests over the mock model.

use chrono::Utc;
use intel::testing::MockModel;
use intel::{IntelError, ListingFetcher, ModelReply};

fn extraction_json() -> String {
    serde_json::json!({
        "name": "Alpha Signals",
        "creator": "Alpha Sellers",
        "category": "Trading",
        "plans": [
            {"name": "Starter", "price": 19.0, "currency": "$", "cycle": "monthly"},
            {"name": "Pro", "price": 49.0, "currency": "$", "cycle": "monthly"}
        ],
        "description": "A signals hub for futures traders.",
        "features": ["Live alerts", "Daily recaps"],
        "sentimentScore": 8.2,
        "sentimentBreakdown": {
            "valueForMoney": 70.0,
            "quality": 60.0,
            "support": 50.0,
            "easeOfUse": 40.0
        },
        "competitors": [
            {"name": "Beta Desk", "priceRange": "$30-80/mo", "advantage": "Faster alerts"}
        ],
        "growthPotential": "Growing retail futures market.",
        "pros": ["Responsive team"],
        "cons": ["Premium pricing"],
        "confidenceScore": 92.0
    })
    .to_string()
}

#[tokio::test]
async fn fetch_assembles_a_complete_listing() {
    let reply = ModelReply::from_text(extraction_json())
        .with_web_citation("A", "u1")
        .with_opaque_citation()
        .with_web_citation("B", "u2");
    let fetcher = ListingFetcher::new(MockModel::returning(reply));

    let listing = fetcher.fetch("Some Product").await.unwrap();

    assert!(!listing.id.is_empty());
    assert!(listing.extracted_at <= Utc::now());
    assert_eq!(listing.url, "Search: Some Product");
    assert_eq!(listing.name, "Alpha Signals");
    assert_eq!(listing.creator.as_deref(), Some("Alpha Sellers"));
    assert_eq!(listing.plans.len(), 2);
    assert_eq!(listing.sentiment_breakdown.value_for_money, 70.0);
    assert_eq!(listing.confidence_score, 92.0);

    // Non-web chunks are dropped; order and duplicates preserved
    assert_eq!(listing.sources.len(), 2);
    assert_eq!(listing.sources[0].title, "A");
    assert_eq!(listing.sources[0].uri, "u1");
    assert_eq!(listing.sources[1].title, "B");
    assert!(listing
        .sources
        .iter()
        .all(|s| !s.title.is_empty() && !s.uri.is_empty()));
}

#[tokio::test]
async fn url_like_queries_pass_through_verbatim() {
    let fetcher = ListingFetcher::new(MockModel::returning_text(extraction_json()));

    let listing = fetcher.fetch("https://whop.com/x").await.unwrap();
    assert_eq!(listing.url, "https://whop.com/x");
}

#[tokio::test]
async fn each_fetch_gets_a_fresh_id() {
    let fetcher = ListingFetcher::new(MockModel::returning_text(extraction_json()));

    let first = fetcher.fetch("Some Product").await.unwrap();
    let second = fetcher.fetch("Some Product").await.unwrap();
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn prompt_embeds_the_query() {
    let mock = MockModel::returning_text(extraction_json());
    let fetcher = ListingFetcher::new(mock.clone());

    fetcher.fetch("Alpha Signals").await.unwrap();

    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"Alpha Signals\""));
}

#[tokio::test]
async fn non_json_reply_is_the_single_documented_failure() {
    let fetcher = ListingFetcher::new(MockModel::returning_text("not json at all"));

    let err = fetcher.fetch("Some Product").await.unwrap_err();
    assert!(matches!(err, IntelError::DataBlock));
}

#[tokio::test]
async fn schema_violating_reply_is_the_single_documented_failure() {
    // Valid JSON, wrong shape
    let fetcher = ListingFetcher::new(MockModel::returning_text(r#"{"name": "x"}"#));

    let err = fetcher.fetch("Some Product").await.unwrap_err();
    assert!(matches!(err, IntelError::DataBlock));
}

#[tokio::test]
async fn model_failure_is_the_single_documented_failure() {
    let fetcher = ListingFetcher::new(MockModel::failing("HTTP 429: quota exceeded"));

    let err = fetcher.fetch("Some Product").await.unwrap_err();
    assert!(matches!(err, IntelError::DataBlock));
    assert_eq!(
        err.to_string(),
        "Intelligence engine encountered a data block. Please try a different product name."
    );
}
