//! Cheezy synthetic data generator
//!
//! Builds a deterministic dataset of users, restaurants, dishes, images,
//! swipes and geofence events, and writes it as a single JSON document.

mod config;
mod errors;
mod generator;
mod models;
mod output;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(config.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.log_json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting Cheezy data generation");
    tracing::info!("Image directory: {:?}", config.image_dir);
    tracing::info!("Output path: {:?}", config.output_path);
    tracing::info!(
        "Seed {} anchored at {}, {} users, {} restos x {} dishes, {} swipes, {} locations",
        config.seed,
        config.anchor,
        config.n_users,
        config.n_restos,
        config.n_dishes,
        config.n_swipes,
        config.n_locations
    );

    if config.swipe_image_ids == config::SwipeImageIds::Legacy {
        tracing::warn!("Swipe imageId values use the legacy user prefix (CHEEZY_SWIPE_IMAGE_IDS=image to change)");
    }

    let dataset = generator::simulate(&config)?;
    output::write_dataset(&dataset, &config.output_path)?;

    tracing::info!("Done");
    Ok(())
}
