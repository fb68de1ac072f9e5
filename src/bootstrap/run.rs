use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use ck_app::MonitorSettings;
use ck_core::ports::AppDirsPort;
use ck_platform::{DirsAppDirsAdapter, RuntimeCommand};
use tokio::io::BufReader;
use tracing::{error, info, warn};

use super::config::{load_or_default, logs_dir};
use super::tracing::init_tracing_subscriber;
use super::wiring::{wire_dependencies, WiredApp};
use crate::console::{Console, ConsoleNotifier, MonitorControl};

/// `--config <path>`, `--config=<path>`, or a bare first argument.
pub fn config_arg<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    if let Some(first) = args.peek() {
        if !first.starts_with('-') {
            return Some(PathBuf::from(first));
        }
    }
    while let Some(arg) = args.next() {
        if arg == "--config" || arg == "-c" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}

/// How long shutdown waits for blocking work, such as a pending stdin read.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Entry point for `main`.
pub fn run_blocking() -> anyhow::Result<()> {
    block_on_with_grace(run(), SHUTDOWN_GRACE)
}

/// Drives `future` on a fresh multi-thread runtime, then abandons blocking
/// tasks that are still running after `grace`.
pub fn block_on_with_grace<F>(future: F, grace: Duration) -> anyhow::Result<()>
where
    F: Future<Output = anyhow::Result<()>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;
    let result = runtime.block_on(future);
    runtime.shutdown_timeout(grace);
    result
}

pub async fn run() -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;

    let loaded = load_or_default(config_arg(std::env::args().skip(1)), &app_dirs);

    if let Err(err) = init_tracing_subscriber(&logs_dir(&loaded.config, &app_dirs)) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }
    match (&loaded.source, &loaded.error) {
        (Some(path), _) => info!(config = %path.display(), "configuration loaded"),
        (None, Some(err)) => warn!(error = ?err, "config unusable, using defaults"),
        (None, None) => info!("no config file, using defaults"),
    }

    let settings = MonitorSettings::from_config(&loaded.config, &app_dirs.app_data_root);
    info!(?settings, "monitor settings resolved");

    let (notifier, notifications) = ConsoleNotifier::new();
    let WiredApp { service, runtime } = wire_dependencies(&settings, Arc::new(notifier));

    if settings.cleanup_on_start {
        match service.cleanup_stale_images().await {
            Ok(removed) => info!(removed, "stale images removed"),
            Err(err) => warn!(error = ?err, "stale image cleanup failed"),
        }
    }

    let (runtime_task, command_tx) = match runtime {
        Some((runtime, command_tx)) => (Some(tokio::spawn(runtime.run())), Some(command_tx)),
        None => (None, None),
    };

    let console = Console::new(
        Arc::clone(&service),
        MonitorControl::new(service.monitor(), command_tx.clone()),
        notifications,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };
    let console_result = console.run(shutdown).await;

    if let Some(command_tx) = command_tx {
        let _ = command_tx.send(RuntimeCommand::Shutdown).await;
    }
    if let Some(task) = runtime_task {
        if let Err(err) = task.await {
            error!(error = %err, "clipboard runtime task failed");
        }
    }
    service.shutdown().await;
    info!("clipkeep stopped");

    console_result
}
