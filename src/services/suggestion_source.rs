use async_trait::async_trait;

/// Anything that can turn one query string into autocomplete suggestions.
#[async_trait]
pub trait SuggestionSource {
    async fn fetch(&self, query: &str) -> anyhow::Result<Vec<String>>;
}
