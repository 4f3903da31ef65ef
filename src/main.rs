use std::{net::TcpListener, sync::Arc};

use autosuggest::{
    configuration::get_configuration, services::GoogleSuggestClient, startup::run,
};
use env_logger::Env;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let suggest_client = GoogleSuggestClient::new(&configuration.suggest)
        .expect("Failed to build suggest client.");
    let catalog = configuration.catalog();

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;
    log::info!(
        "Listening on {} with {} modifiers in catalog",
        listener.local_addr()?,
        catalog.modifier_count()
    );

    run(
        listener,
        Arc::new(suggest_client),
        catalog,
        configuration.generator,
    )?
    .await
}
