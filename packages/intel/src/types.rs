//! Domain types for one market-intelligence record.
//!
//! `ExtractedListing` is the exact shape the model is instructed to return
//! (it derives `JsonSchema` and IS the response-schema contract — change it
//! together with the prompt in `prompts.rs`). `Listing` is the assembled
//! record the rest of the system consumes: the extraction plus an opaque id,
//! the derived url, the fetch timestamp, and the citation list.
//!
//! All wire names are camelCase.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One pricing tier of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub name: String,
    /// Non-negative by intent; not enforced
    pub price: f64,
    pub currency: String,
    /// Billing cycle, free text ("monthly", "one-time", ...)
    pub cycle: String,
}

/// A competitor of the analyzed listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub name: String,
    /// Free text, e.g. "$30-80/mo"
    pub price_range: String,
    /// The analyzed product's edge over this competitor
    pub advantage: String,
}

/// Four public-perception sub-scores, each intended in [0, 100].
///
/// The model may violate the range; nothing clamps these, and the
/// presenter renders them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SentimentBreakdown {
    pub value_for_money: f64,
    pub quality: f64,
    pub support: f64,
    pub ease_of_use: f64,
}

/// A web source the extraction was grounded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceLink {
    pub title: String,
    pub uri: String,
}

/// The model-populated portion of a listing.
///
/// This type is handed to the service as the response schema; the model
/// must return a JSON document matching it. `creator`, `pros` and `cons`
/// are the only optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedListing {
    pub name: String,
    #[serde(default)]
    pub creator: Option<String>,
    pub category: String,
    pub plans: Vec<Plan>,
    pub description: String,
    pub features: Vec<String>,
    /// Overall public sentiment, intended in [0, 10]
    pub sentiment_score: f64,
    pub sentiment_breakdown: SentimentBreakdown,
    pub competitors: Vec<Competitor>,
    /// Free-text growth narrative
    pub growth_potential: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    /// Model-reported extraction reliability, intended in [0, 100]
    pub confidence_score: f64,
}

/// The structured market-intelligence record for one product query.
///
/// Immutable once constructed; the fetcher is the only writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Opaque unique identifier, generated at fetch time
    pub id: String,
    pub name: String,
    /// The query verbatim for URL-like queries, else "Search: {query}"
    pub url: String,
    #[serde(default)]
    pub creator: Option<String>,
    pub category: String,
    pub plans: Vec<Plan>,
    pub description: String,
    pub features: Vec<String>,
    pub sentiment_score: f64,
    pub sentiment_breakdown: SentimentBreakdown,
    pub competitors: Vec<Competitor>,
    pub growth_potential: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub confidence_score: f64,
    /// When the fetch that produced this record ran
    pub extracted_at: DateTime<Utc>,
    /// Web citations in the order the service returned them; may be empty
    pub sources: Vec<SourceLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown() -> SentimentBreakdown {
        SentimentBreakdown {
            value_for_money: 70.0,
            quality: 60.0,
            support: 50.0,
            ease_of_use: 40.0,
        }
    }

    #[test]
    fn extraction_wire_names_are_camel_case() {
        let extraction = ExtractedListing {
            name: "Alpha Signals".into(),
            creator: Some("Alpha Sellers".into()),
            category: "Trading".into(),
            plans: vec![Plan {
                name: "Pro".into(),
                price: 49.99,
                currency: "$".into(),
                cycle: "monthly".into(),
            }],
            description: "Signals hub".into(),
            features: vec!["Live alerts".into()],
            sentiment_score: 8.0,
            sentiment_breakdown: breakdown(),
            competitors: vec![Competitor {
                name: "Beta Desk".into(),
                price_range: "$30-80/mo".into(),
                advantage: "Faster alerts".into(),
            }],
            growth_potential: "Expanding market".into(),
            pros: vec![],
            cons: vec![],
            confidence_score: 92.0,
        };

        let json = serde_json::to_value(&extraction).unwrap();
        assert!(json.get("sentimentScore").is_some());
        assert!(json["sentimentBreakdown"].get("valueForMoney").is_some());
        assert!(json["competitors"][0].get("priceRange").is_some());
        assert!(json.get("growthPotential").is_some());
    }

    #[test]
    fn extraction_parses_without_optional_fields() {
        let body = serde_json::json!({
            "name": "Alpha Signals",
            "category": "Trading",
            "plans": [],
            "description": "Signals hub",
            "features": [],
            "sentimentScore": 7.5,
            "sentimentBreakdown": {
                "valueForMoney": 70.0,
                "quality": 60.0,
                "support": 50.0,
                "easeOfUse": 40.0
            },
            "competitors": [],
            "growthPotential": "n/a",
            "confidenceScore": 55.0
        });

        let extraction: ExtractedListing = serde_json::from_value(body).unwrap();
        assert!(extraction.creator.is_none());
        assert!(extraction.pros.is_empty());
        assert!(extraction.cons.is_empty());
    }

    #[test]
    fn listing_round_trips_through_json() {
        let listing = Listing {
            id: "abc123".into(),
            name: "Alpha Signals".into(),
            url: "Search: Alpha Signals".into(),
            creator: None,
            category: "Trading".into(),
            plans: vec![],
            description: "Signals hub".into(),
            features: vec![],
            sentiment_score: 8.0,
            sentiment_breakdown: breakdown(),
            competitors: vec![],
            growth_potential: "Expanding".into(),
            pros: vec!["Responsive team".into()],
            cons: vec![],
            confidence_score: 81.0,
            extracted_at: Utc::now(),
            sources: vec![SourceLink {
                title: "A".into(),
                uri: "u1".into(),
            }],
        };

        let json = serde_json::to_string(&listing).unwrap();
        let back: Listing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, listing);
    }
}
