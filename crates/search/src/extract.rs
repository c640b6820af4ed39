//! Extraction of usable text from a crawl response.
//!
//! The service has shipped several response shapes over time, so the text
//! can live in `content`, `results.content`, or `data`. Rather than a
//! chain of optional-field checks inline in handlers, each shape is one
//! named strategy and [`extract_text`] tries them in a fixed priority
//! order.

use serde_json::Value;

/// One way of pulling text out of a crawl response.
pub struct ExtractionStrategy {
    /// Field path this strategy reads, for logging.
    pub name: &'static str,
    pub extract: fn(&Value) -> Option<String>,
}

/// All strategies, in priority order.
pub static STRATEGIES: &[ExtractionStrategy] = &[
    ExtractionStrategy { name: "content", extract: direct_content },
    ExtractionStrategy { name: "results.content", extract: nested_results_content },
    ExtractionStrategy { name: "data", extract: data_field },
];

/// Extract the first non-blank text the strategy chain finds.
pub fn extract_text(response: &Value) -> Option<String> {
    STRATEGIES
        .iter()
        .find_map(|strategy| (strategy.extract)(response))
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn direct_content(response: &Value) -> Option<String> {
    response
        .get("content")
        .and_then(Value::as_str)
        .and_then(non_blank)
}

fn nested_results_content(response: &Value) -> Option<String> {
    response
        .get("results")
        .and_then(|r| r.get("content"))
        .and_then(Value::as_str)
        .and_then(non_blank)
}

fn data_field(response: &Value) -> Option<String> {
    response
        .get("data")
        .and_then(Value::as_str)
        .and_then(non_blank)
}
