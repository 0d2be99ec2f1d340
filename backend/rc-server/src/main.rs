use rc_scheduler::{
    BroadcastConfig, ChannelBroadcaster, HealthMonitor, HealthThresholds, RestartScheduler,
    SchedulerSettings, ShutdownCoordinator,
};
use rc_server::{
    AppState, CommandHaltAction, ServerError, SystemSampler, announcement_log, build_router,
    logger, reload_from_disk,
};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = rc_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting rc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let prometheus = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Metrics recorder not installed, /metrics disabled: {e}");
            None
        }
    };

    let shutdown = ShutdownCoordinator::new();

    // Announcements go to the log; other subscribers may attach later
    let broadcaster = ChannelBroadcaster::new(BroadcastConfig::default());
    let announcements =
        announcement_log::spawn(broadcaster.subscribe(), shutdown.subscribe_guard());

    let halt_action = CommandHaltAction::from_config(&config.halt);
    let settings = SchedulerSettings::from_config(&config)?;
    let scheduler = RestartScheduler::new(settings, Arc::new(broadcaster), Arc::new(halt_action));

    let sampler = SystemSampler::from_config(&config.monitoring);
    let monitor = HealthMonitor::new(
        Arc::new(sampler),
        scheduler.clone(),
        HealthThresholds::from_config(&config),
    );

    scheduler.initialize().await;
    match scheduler.next_scheduled_restart().await {
        Some(next) => info!("Next scheduled restart: {}", next.to_rfc3339()),
        None => info!("No recurring restarts configured"),
    }

    if config.monitoring.enabled {
        monitor
            .start_monitoring(Duration::from_secs(config.monitoring.check_interval_secs))
            .await;
        info!(
            "Health monitoring started ({}s interval)",
            config.monitoring.check_interval_secs
        );
    } else {
        warn!("Health monitoring DISABLED");
    }

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    #[cfg(unix)]
    spawn_reload_on_sighup(scheduler.clone(), monitor.clone(), shutdown.clone())?;

    if config.admin.enabled {
        let mut app_state = AppState::new(scheduler.clone(), monitor.clone(), shutdown.clone());
        if let Some(handle) = prometheus {
            app_state = app_state.with_metrics(handle);
        }
        let app = build_router(app_state);

        let bind_addr = config.admin.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ServerError::bind(bind_addr.clone(), e))?;

        // Actual address matters when port is 0 / auto-assigned
        let actual_addr = listener.local_addr()?;
        info!("Admin API listening on {}", actual_addr);

        let shutdown_for_serve = shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_for_serve.subscribe_guard().wait().await;
            })
            .await?;
    } else {
        info!("Admin API disabled, waiting for shutdown signal");
        shutdown.subscribe_guard().wait().await;
    }

    // Stop new work first so nothing re-arms a restart while tearing down
    monitor.stop_monitoring().await;
    scheduler.shutdown().await;
    if let Err(e) = announcements.await {
        warn!("Announcement log task ended abnormally: {e}");
    }

    info!(
        "Lifetime: {} restart(s) managed, {} health check(s), {} emergency trigger(s)",
        scheduler.total_restarts_managed().await,
        monitor.total_checks().await,
        monitor.emergency_triggers().await
    );
    info!("Graceful shutdown complete");

    Ok(())
}

/// SIGHUP re-reads the config file, same as POST /api/v1/reload
#[cfg(unix)]
fn spawn_reload_on_sighup(
    scheduler: RestartScheduler,
    monitor: HealthMonitor,
    shutdown: ShutdownCoordinator,
) -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangups = signal(SignalKind::hangup())?;
    let mut guard = shutdown.subscribe_guard();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = guard.wait() => break,
                received = hangups.recv() => {
                    if received.is_none() {
                        break;
                    }
                    info!("Received SIGHUP, reloading configuration");
                    if let Err(e) = reload_from_disk(&scheduler, &monitor).await {
                        error!("Reload rejected, keeping current configuration: {e}");
                    }
                }
            }
        }
    });
    Ok(())
}
