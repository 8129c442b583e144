//! Insight generators.
//!
//! One public method per screen, all with the same shape: placeholder when
//! the service is unconfigured, fingerprint the dataset, probe the cache,
//! otherwise build a context, call the model, shape the answer, cache it.
//! Failures anywhere in that chain collapse into the screen's fixed
//! fallback; a generator never returns an error.

use boussala_cache::{CachedValue, InsightCache};
use boussala_config::AppConfig;
use boussala_core::{Client, Expense, Product, SalesPoint, Supplier};

use crate::chat::{ChatStream, ChatTurn};
use crate::client::GeminiClient;
use crate::error::InsightError;
use crate::{context, fallback, fingerprint, postprocess, prompt};

/// Generates all five insight kinds and opens chat sessions.
///
/// Built from explicit configuration; holds no process-wide state.
#[derive(Debug, Clone)]
pub struct InsightEngine {
    client: Option<GeminiClient>,
    cache: InsightCache,
}

impl InsightEngine {
    /// Build from resolved configuration. An empty API key disables the
    /// remote service; every generator then answers with its placeholder.
    pub fn new(config: &AppConfig, cache: InsightCache) -> Self {
        let client = config
            .ai_configured()
            .then(|| GeminiClient::new(config.gemini_api_key.clone()));
        Self { client, cache }
    }

    /// Build from a pre-configured client (tests, custom endpoints).
    pub fn with_client(client: Option<GeminiClient>, cache: InsightCache) -> Self {
        Self { client, cache }
    }

    /// Up to three cash-flow decisions for the dashboard.
    pub async fn dashboard_insights(
        &self,
        sales_chart: &[SalesPoint],
        products: &[Product],
    ) -> Vec<String> {
        let Some(client) = &self.client else {
            return fallback::owned(&fallback::DASHBOARD_DISABLED);
        };
        let key = fingerprint::dashboard_key(sales_chart, products);

        match self.try_dashboard(client, &key, sales_chart, products).await {
            Ok(tips) => tips,
            Err(err) => {
                tracing::warn!(key, error = %err, "dashboard insight generation failed");
                fallback::owned(&fallback::DASHBOARD_ERROR)
            }
        }
    }

    async fn try_dashboard(
        &self,
        client: &GeminiClient,
        key: &str,
        sales_chart: &[SalesPoint],
        products: &[Product],
    ) -> Result<Vec<String>, InsightError> {
        if let Some(CachedValue::Tips(tips)) = self.cache.get(key).await {
            return Ok(tips);
        }

        let data_context = context::dashboard_context(sales_chart, products);
        let raw = client.generate(&prompt::dashboard_prompt(&data_context)).await?;

        let mut tips = postprocess::extract_tips(&raw);
        if tips.is_empty() {
            // The model ignored the bullet format; ship stock advice instead.
            tips = fallback::owned(&fallback::DASHBOARD_NO_TIPS);
        }

        self.cache.set(key, CachedValue::Tips(tips.clone())).await;
        Ok(tips)
    }

    /// One inventory recommendation.
    pub async fn inventory_insight(&self, products: &[Product]) -> String {
        let Some(client) = &self.client else {
            return fallback::INVENTORY_DISABLED.to_string();
        };
        let key = fingerprint::inventory_key(products);

        match self.try_text(client, &key, context::inventory_context(products), fallback::INVENTORY_NO_TEXT).await {
            Ok(insight) => insight,
            Err(err) => {
                tracing::warn!(key, error = %err, "inventory insight generation failed");
                fallback::INVENTORY_ERROR.to_string()
            }
        }
    }

    /// One client-debt recommendation. Degrades to an empty string; the
    /// clients screen hides empty insights.
    pub async fn client_insight(&self, clients: &[Client]) -> String {
        let Some(client) = &self.client else {
            return String::new();
        };
        let key = fingerprint::clients_key(clients);

        match self.try_text(client, &key, context::clients_context(clients), fallback::CLIENTS_NO_TEXT).await {
            Ok(insight) => insight,
            Err(err) => {
                tracing::warn!(key, error = %err, "client insight generation failed");
                String::new()
            }
        }
    }

    /// One supplier-debt recommendation. Degrades like [`Self::client_insight`].
    pub async fn supplier_insight(&self, suppliers: &[Supplier]) -> String {
        let Some(client) = &self.client else {
            return String::new();
        };
        let key = fingerprint::suppliers_key(suppliers);

        match self.try_text(client, &key, context::suppliers_context(suppliers), fallback::SUPPLIERS_NO_TEXT).await {
            Ok(insight) => insight,
            Err(err) => {
                tracing::warn!(key, error = %err, "supplier insight generation failed");
                String::new()
            }
        }
    }

    /// A single expense tip, wrapped in a list for the expenses screen.
    pub async fn expense_insights(&self, expenses: &[Expense], total_sales: i64) -> Vec<String> {
        let Some(client) = &self.client else {
            return Vec::new();
        };
        let key = fingerprint::expenses_key(expenses, total_sales);

        match self.try_expenses(client, &key, expenses, total_sales).await {
            Ok(tips) => tips,
            Err(err) => {
                tracing::warn!(key, error = %err, "expense insight generation failed");
                fallback::owned(&fallback::EXPENSES_ERROR)
            }
        }
    }

    async fn try_expenses(
        &self,
        client: &GeminiClient,
        key: &str,
        expenses: &[Expense],
        total_sales: i64,
    ) -> Result<Vec<String>, InsightError> {
        if let Some(CachedValue::Tips(tips)) = self.cache.get(key).await {
            return Ok(tips);
        }

        let data_context = context::expenses_context(expenses, total_sales);
        let raw = client.generate(&prompt::analyst_prompt(&data_context)).await?;

        let tip = if raw.trim().is_empty() {
            fallback::EXPENSES_NO_TEXT.to_string()
        } else {
            raw
        };
        let tips = vec![tip];

        self.cache.set(key, CachedValue::Tips(tips.clone())).await;
        Ok(tips)
    }

    /// Shared path for the single-sentence endpoints: cache probe, analyst
    /// prompt, empty-answer substitution, cache write.
    async fn try_text(
        &self,
        client: &GeminiClient,
        key: &str,
        data_context: String,
        empty_fallback: &str,
    ) -> Result<String, InsightError> {
        if let Some(CachedValue::Text(cached)) = self.cache.get(key).await {
            return Ok(cached);
        }

        let raw = client.generate(&prompt::analyst_prompt(&data_context)).await?;
        let insight = if raw.trim().is_empty() {
            empty_fallback.to_string()
        } else {
            raw
        };

        self.cache.set(key, CachedValue::Text(insight.clone())).await;
        Ok(insight)
    }

    /// Open a streaming chat session.
    ///
    /// Unlike the generators, this fails loudly when no credential is
    /// configured: an interactive conversation cannot degrade to canned
    /// text.
    pub async fn open_chat(
        &self,
        history: &[ChatTurn],
        message: &str,
    ) -> Result<ChatStream, InsightError> {
        let client = self.client.as_ref().ok_or(InsightError::NotConfigured)?;
        client.stream_chat(history, message).await
    }
}
