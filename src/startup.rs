use std::{net::TcpListener, sync::Arc};

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    domain::{GeneratorOptions, ModifierCatalog},
    routes::{api_route, default_route, download_route, scrape_route},
    services::SuggestionSource,
};

pub fn run(
    listener: TcpListener,
    source: Arc<dyn SuggestionSource + Send + Sync>,
    catalog: ModifierCatalog,
    options: GeneratorOptions,
) -> Result<Server, std::io::Error> {
    let source = web::Data::from(source);
    let catalog = web::Data::new(catalog);
    let options = web::Data::new(options);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::default)
            .service(default_route::health_check)
            .service(scrape_route::scrape)
            .service(download_route::download)
            .service(web::scope("/api").service(api_route::get_suggestions))
            .app_data(source.clone())
            .app_data(catalog.clone())
            .app_data(options.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
