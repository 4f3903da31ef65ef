use actix_web::{post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{
    domain::{generate_variants, GeneratorOptions, ModifierCatalog, ResultSet, SuggestionRecord},
    services::{aggregate_suggestions, to_csv, ExportLayout, SuggestionSource},
};

use super::{default_route::IndexTemplate, render_html};

#[derive(Deserialize)]
pub struct ScrapeForm {
    pub seed: String,
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate {
    seed: String,
    categorized: bool,
    rows: Vec<ResultsTemplateRow>,
    csv: String,
}

struct ResultsTemplateRow {
    category: String,
    modifier: String,
    suggestion: String,
}

impl From<&SuggestionRecord> for ResultsTemplateRow {
    fn from(value: &SuggestionRecord) -> Self {
        Self {
            category: value.category.clone().unwrap_or_default(),
            modifier: value.modifier.clone(),
            suggestion: value.suggestion.clone(),
        }
    }
}

/// One full generate-fetch-dedup pass for a seed keyword.
pub async fn scrape_seed<S>(
    seed: &str,
    source: &S,
    catalog: &ModifierCatalog,
    options: GeneratorOptions,
) -> ResultSet
where
    S: SuggestionSource + ?Sized,
{
    let variants = generate_variants(seed, catalog, options);
    aggregate_suggestions(&variants, source).await
}

#[post("/scrape")]
pub async fn scrape(
    form: web::Form<ScrapeForm>,
    source: web::Data<dyn SuggestionSource + Send + Sync>,
    catalog: web::Data<ModifierCatalog>,
    options: web::Data<GeneratorOptions>,
) -> HttpResponse {
    if form.seed.trim().is_empty() {
        return render_html(IndexTemplate {
            seed: String::new(),
            message: Some("Enter a seed keyword to scrape suggestions.".to_string()),
        });
    }

    let seed = form.seed.clone();
    let options = *options.get_ref();
    log::info!("Scraping suggestions for seed keyword: {}", seed);

    let result_set = scrape_seed(&seed, source.get_ref(), &catalog, options).await;

    let csv = match to_csv(&result_set, ExportLayout::from(options)) {
        Ok(csv) => csv,
        Err(e) => {
            log::error!("Failed to export results to csv: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    render_html(ResultsTemplate {
        seed,
        categorized: options.categorize,
        rows: result_set.records().iter().map(|r| r.into()).collect(),
        csv,
    })
}
