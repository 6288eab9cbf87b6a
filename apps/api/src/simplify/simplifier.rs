//! Document simplifier: pluggable, trait-based producer of `SimplificationResult`.
//!
//! Default: `CannedSimplifier` (constant output, never reads the document).
//!
//! `AppState` holds an `Arc<dyn DocumentSimplifier>`, chosen at startup.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::document::SimplificationResult;
use crate::simplify::content::{ACTION_ITEMS, SIMPLIFIED_TEXT};

/// Implement this to swap in a real analysis engine without touching the
/// handlers. Only the file name and MIME type are passed in.
#[async_trait]
pub trait DocumentSimplifier: Send + Sync {
    async fn simplify(
        &self,
        file_name: &str,
        file_type: &str,
    ) -> Result<SimplificationResult, AppError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Returns the same eviction-notice explanation for every document.
pub struct CannedSimplifier;

#[async_trait]
impl DocumentSimplifier for CannedSimplifier {
    async fn simplify(
        &self,
        _file_name: &str,
        _file_type: &str,
    ) -> Result<SimplificationResult, AppError> {
        Ok(canned_result())
    }

    fn backend(&self) -> &'static str {
        "canned"
    }
}

fn canned_result() -> SimplificationResult {
    SimplificationResult {
        simplified_text: SIMPLIFIED_TEXT.to_string(),
        action_items: ACTION_ITEMS.iter().map(|item| item.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[tokio::test]
    async fn test_notice_pdf_scenario() {
        let result = CannedSimplifier
            .simplify("notice.pdf", "application/pdf")
            .await
            .unwrap();
        assert!(result.simplified_text.starts_with("This document is a notice"));
        assert_eq!(
            result.action_items[0],
            "You have 3-5 days to respond to this notice"
        );
    }

    #[tokio::test]
    async fn test_empty_inputs_still_produce_full_result() {
        let result = CannedSimplifier.simplify("", "").await.unwrap();
        assert_eq!(result.action_items.len(), 5);
        for heading in ["What This Means", "Your Timeline", "What You Can Do"] {
            assert!(result.simplified_text.contains(heading), "missing {heading}");
        }
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let first = CannedSimplifier.simplify("a.png", "image/png").await.unwrap();
        let second = CannedSimplifier.simplify("a.png", "image/png").await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_backend_label_is_canned() {
        assert_eq!(CannedSimplifier.backend(), "canned");
    }

    proptest! {
        #[test]
        fn prop_output_ignores_inputs(name in ".{0,60}", mime in "[a-z/.+-]{0,40}") {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let result = rt.block_on(CannedSimplifier.simplify(&name, &mime)).unwrap();
            prop_assert_eq!(result, canned_result());
        }
    }
}
