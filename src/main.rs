//! Catvisit - main entry point.
//!
//! Wires configuration, storage, the geocoder client and the reminder
//! scheduler, then runs until interrupted.

use anyhow::Result;
use catvisit::client::{AsyncGeocodingClient, GeocodingClient, GeocodingProvider};
use catvisit::notify::{DesktopNotifier, FallbackNotifier, InAppNotifier, Notifier};
use catvisit::repositories::{
    AppointmentRepository, FileAppointmentRepository, FileSettingsRepository, SettingsRepository,
};
use catvisit::services::ReminderScheduler;
use catvisit::{App, Config};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logging goes to stderr only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting catvisit with geocoder gateway: {}",
        config.geocoder_base_url
    );

    let sync_client = GeocodingClient::new(&config);
    let provider = Arc::new(AsyncGeocodingClient::new(sync_client)) as Arc<dyn GeocodingProvider>;

    let settings_repo =
        Arc::new(FileSettingsRepository::new(&config.data_dir)) as Arc<dyn SettingsRepository>;
    let appointment_repo = Arc::new(FileAppointmentRepository::new(&config.data_dir))
        as Arc<dyn AppointmentRepository>;

    let app = App::load(&config, provider, settings_repo, appointment_repo).await?;

    // Alert path: system notifications with in-app fallback
    let (in_app, mut transient_messages) = InAppNotifier::new();
    let notifier = Arc::new(FallbackNotifier::new(
        Arc::new(DesktopNotifier),
        Arc::new(in_app),
    )) as Arc<dyn Notifier>;

    let scheduler = Arc::new(ReminderScheduler::new(
        app.book().clone(),
        notifier,
        Duration::from_secs(config.reminder_tick_secs),
    ));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler_handle = scheduler.spawn(shutdown_rx);

    info!(
        "Reminder scheduler running (tick every {} s)",
        config.reminder_tick_secs
    );

    // Drain fallback messages to the log until interrupted
    loop {
        tokio::select! {
            message = transient_messages.recv() => {
                match message {
                    Some(m) => info!("{}: {}", m.title, m.body),
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, shutting down");
                break;
            }
        }
    }

    let _ = shutdown_tx.send(true);
    scheduler_handle.await?;

    info!("catvisit shutdown complete");
    Ok(())
}
