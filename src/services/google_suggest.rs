use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use reqwest::{header::USER_AGENT, Client, StatusCode};
use scraper::{Html, Selector};
use serde::Serialize;
use url::Url;

use crate::configuration::SuggestSettings;

use super::SuggestionSource;

const OUTPUT_FORMAT: &str = "toolbar";

#[derive(Serialize)]
struct SuggestQuery<'a> {
    output: &'a str,
    hl: &'a str,
    gl: &'a str,
    q: &'a str,
}

pub struct GoogleSuggestClient {
    client: Client,
    endpoint: Url,
    language_code: String,
    country_code: String,
    user_agents: Vec<String>,
}

impl GoogleSuggestClient {
    pub fn new(settings: &SuggestSettings) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&settings.endpoint)?;

        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(GoogleSuggestClient {
            client: builder.build()?,
            endpoint,
            language_code: settings.language_code.clone(),
            country_code: settings.country_code.clone(),
            user_agents: settings.user_agents.clone(),
        })
    }

    fn random_user_agent(&self) -> Option<&str> {
        self.user_agents
            .choose(&mut rand::thread_rng())
            .map(|ua| ua.as_str())
    }
}

#[async_trait]
impl SuggestionSource for GoogleSuggestClient {
    async fn fetch(&self, query: &str) -> anyhow::Result<Vec<String>> {
        let mut request = self.client.get(self.endpoint.clone()).query(&SuggestQuery {
            output: OUTPUT_FORMAT,
            hl: &self.language_code,
            gl: &self.country_code,
            q: query,
        });
        if let Some(user_agent) = self.random_user_agent() {
            request = request.header(USER_AGENT, user_agent);
        }

        let res = request.send().await?;
        if res.status() != StatusCode::OK {
            log::warn!(
                "Suggest endpoint answered {} on query: {}",
                res.status(),
                query
            );
            return Ok(vec![]);
        }

        let body = res.text().await?;
        parse_suggestions(&body)
    }
}

/// Reads the `data` attribute of every `suggestion` element, in document order.
pub fn parse_suggestions(body: &str) -> anyhow::Result<Vec<String>> {
    let suggestion_selector = Selector::parse("suggestion")
        .map_err(|e| anyhow!("Invalid suggestion selector: {:?}", e))?;
    let document = Html::parse_document(body);

    Ok(document
        .select(&suggestion_selector)
        .filter_map(|tag| tag.value().attr("data").map(|data| data.to_string()))
        .collect())
}
