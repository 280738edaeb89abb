use std::future::Future;
use std::pin::Pin;

use aizuchi::response_selector::ResponseSelector;
use aizuchi::{store, Aizuchi};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tokio::net::TcpListener;
use tokio::signal;
use utils::{print_err, unwrap_or_def_verbose, ResultExt as _};

mod aizuchi;
mod api;
mod logging;
mod utils;

/// Answers every message with a polite acknowledgment
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Listen on all interfaces instead of the loopback address
    #[clap(long)]
    share: bool,
}

async fn terminate_on_signal() -> Result<()> {
    let interrupt_signal: Pin<Box<dyn Future<Output = _>>> = Box::pin(async {
        signal::unix::signal(signal::unix::SignalKind::interrupt())
            .context("Failed to register terminate signal handlers!")?
            .recv()
            .await;
        Ok(())
    });
    let terminate_signal = Box::pin(async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to register terminate signal handlers!")?
            .recv()
            .await;
        Ok(())
    });
    futures_util::future::select_all([interrupt_signal, terminate_signal])
        .await
        .0
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = logging::init();
    let config = unwrap_or_def_verbose(store::load_config());

    let aizuchi = Aizuchi::new(ResponseSelector::new());
    let app = api::router(aizuchi, &config.static_serving_dir);

    let addr = config.serving_addr(args.share);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))
        .inspect_err(print_err)?;
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .context("Server stopped")
            .print_err()
    });

    info!("Running on http://{addr}");
    let _ = terminate_on_signal().await.inspect_err(print_err);
    info!("Terminating.");
    Ok(())
}
