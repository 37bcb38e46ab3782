use clap::Parser;
use tracing::{error, info, Instrument};

use user_registry::{setup_tracing, RandomUserHttpGenerator, RegistryConfig, RegistrySystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = RegistryConfig::parse();
    setup_tracing(&config.log_filter);

    info!("Starting user registry");

    config.validate().map_err(|e| e.to_string())?;
    let endpoint = config.generator_endpoint().map_err(|e| e.to_string())?;
    let generator = RandomUserHttpGenerator::new(endpoint, config.generator_timeout())
        .map_err(|e| e.to_string())?;

    let system = RegistrySystem::new(&config, generator).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("random_import", requested = config.generate);
    let import_result = async {
        info!("Importing random users");
        system.client.generate_users(config.generate).await
    }
    .instrument(span)
    .await;

    match import_result {
        Ok(users) => info!(imported = users.len(), "Random users imported"),
        Err(e) => error!(error = %e, status = e.status_code(), "Random import failed"),
    }

    let span = tracing::info_span!("listing");
    async {
        let mut page_number = 0usize;
        while let Some(page) = system.client.current_page().await.map_err(|e| e.to_string())? {
            for user in &page {
                info!(page = page_number, %user, "Listed user");
            }
            page_number += 1;
        }
        info!(pages = page_number, "Listing complete");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("User registry finished");
    Ok(())
}
