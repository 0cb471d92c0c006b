//! # Advisor Feed
//!
//! Builds and submits AI-advisor requests.
//!
//! The advisor answers free-text questions about the business. Its only
//! data source is the reporting engine: each question travels with the
//! current [`Summary`] and the full product list so the backend can ground
//! the answer in real numbers. The backend owns the model vendor key; this
//! client never talks to the vendor directly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use warung_core::{Product, Summary};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// One advisor question with its business context.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorRequest<'a> {
    pub question: &'a str,
    /// UI language tag (`id`, `en`, `cn`); the advisor answers in kind.
    pub language: &'a str,
    pub summary: &'a Summary,
    pub products: &'a [Product],
}

#[derive(Debug, Clone, Deserialize)]
struct AdvisorReply {
    answer: String,
}

/// Client for the `/advisor` endpoint.
#[derive(Debug, Clone)]
pub struct Advisor {
    client: ApiClient,
}

impl Advisor {
    pub fn new(client: ApiClient) -> Self {
        Advisor { client }
    }

    /// Asks the advisor one question. Fails with an [`crate::ApiError`] on
    /// rejection or transport failure; no retry.
    pub async fn ask(
        &self,
        question: &str,
        language: &str,
        summary: &Summary,
        products: &[Product],
    ) -> ApiResult<String> {
        debug!(language = %language, products = products.len(), "advisor question");

        let reply: AdvisorReply = self
            .client
            .post(
                "/advisor",
                &AdvisorRequest {
                    question,
                    language,
                    summary,
                    products,
                },
            )
            .await?;

        Ok(reply.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_summary_inline() {
        let summary = Summary {
            total_revenue: 150000.0,
            total_profit: 50000.0,
            total_products: 3,
            total_sales: 7,
            sales_by_day: vec![],
            top_products: vec![],
        };

        let json = serde_json::to_value(AdvisorRequest {
            question: "Produk mana yang paling laku?",
            language: "id",
            summary: &summary,
            products: &[],
        })
        .unwrap();

        assert_eq!(json["language"], "id");
        assert_eq!(json["summary"]["totalRevenue"], 150000.0);
        assert_eq!(json["summary"]["totalSales"], 7);
    }
}
