//! The fixed extraction prompt.
//!
//! This prompt and the `ExtractedListing` schema in `types.rs` together
//! form the contract with the generative service; version them together.

/// Instruction prompt for one market-intelligence extraction.
pub const EXTRACTION_PROMPT: &str = r#"Perform an elite-level market intelligence extraction for this Whop.com product/hub: "{query}".

You are a professional market analyst. Extract:
1. Entity name, primary category, and the name of the creator/brand if available.
2. Comprehensive pricing hierarchy (all available tiers).
3. Precise description of the core value proposition.
4. Top 8-10 features or digital assets provided.
5. A 1-10 sentiment score based on public perception.
6. A detailed sentiment breakdown (1-100) for: Value for Money, Quality, Customer Support, and Ease of Use.
7. 3-4 specific competitors on Whop or similar hubs, their pricing, and the unique competitive advantage of THIS product.
8. Strategic growth potential analysis (market size, trends).
9. Assign a 'Confidence Score' (0-100) based on the clarity and quantity of data found.

Return the result as a strict JSON object following the requested schema."#;

/// Render the extraction prompt for a query.
pub fn extraction_prompt(query: &str) -> String {
    EXTRACTION_PROMPT.replace("{query}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_query() {
        let prompt = extraction_prompt("Alpha Signals");
        assert!(prompt.contains("\"Alpha Signals\""));
        assert!(!prompt.contains("{query}"));
    }
}
