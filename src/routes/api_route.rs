use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::{
    domain::{GeneratorOptions, ModifierCatalog},
    services::SuggestionSource,
};

use super::scrape_route::scrape_seed;

#[derive(Deserialize)]
pub struct SeedQuery {
    pub seed: String,
}

#[get("/suggestions")]
pub async fn get_suggestions(
    query: web::Query<SeedQuery>,
    source: web::Data<dyn SuggestionSource + Send + Sync>,
    catalog: web::Data<ModifierCatalog>,
    options: web::Data<GeneratorOptions>,
) -> HttpResponse {
    if query.seed.trim().is_empty() {
        return HttpResponse::BadRequest().body("Seed keyword must not be empty");
    }

    let result_set = scrape_seed(&query.seed, source.get_ref(), &catalog, **options).await;

    HttpResponse::Ok().json(result_set)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, web, App};
    use async_trait::async_trait;

    use crate::{
        domain::{GeneratorOptions, ModifierCatalog},
        services::SuggestionSource,
    };

    use super::get_suggestions;

    struct FixedSource;

    #[async_trait]
    impl SuggestionSource for FixedSource {
        async fn fetch(&self, query: &str) -> anyhow::Result<Vec<String>> {
            Ok(vec![format!("{} tips", query.replace('*', "").trim())])
        }
    }

    #[actix_web::test]
    async fn returns_json_rows() {
        let source: Arc<dyn SuggestionSource + Send + Sync> = Arc::new(FixedSource);
        let options = GeneratorOptions {
            alphabet: false,
            numbers: false,
            modifiers: false,
            ..GeneratorOptions::default()
        };
        let app = test::init_service(
            App::new()
                .service(web::scope("/api").service(get_suggestions))
                .app_data(web::Data::from(source))
                .app_data(web::Data::new(ModifierCatalog::default()))
                .app_data(web::Data::new(options)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/suggestions?seed=rust")
            .to_request();
        let rows: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            rows,
            serde_json::json!([{"type": "Alphabetic", "modifier": "Original", "query": "rust tips"}])
        );

        let req = test::TestRequest::get()
            .uri("/api/suggestions?seed=%20")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status().as_u16(), 400);
    }
}
