//! Graceful shutdown on process signals

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install interrupt handler: {0}")]
    Interrupt(#[source] io::Error),

    #[error("failed to install terminate handler: {0}")]
    Terminate(#[source] io::Error),
}

/// The signal that stopped the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Interrupt => "interrupt",
            Self::Terminate => "terminate",
        }
    }
}

#[cfg(unix)]
async fn terminate() -> Result<(), ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::Terminate)?
        .recv()
        .await;

    Ok(())
}

#[cfg(windows)]
async fn terminate() -> Result<(), ShutdownSignalError> {
    signal::windows::ctrl_close()
        .map_err(ShutdownSignalError::Terminate)?
        .recv()
        .await;

    Ok(())
}

async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::Interrupt)?;

            Ok(ShutdownSignal::Interrupt)
        }
        result = terminate() => {
            result?;

            Ok(ShutdownSignal::Terminate)
        }
    }
}

/// Stop accepting connections once a signal arrives, then give in-flight
/// requests up to `timeout` to finish. `None` waits for all of them.
pub(crate) async fn listen(
    handle: ServerHandle,
    timeout: Option<Duration>,
) -> Result<(), ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    info!(
        signal = signal.as_str(),
        timeout_secs = timeout.map(|t| t.as_secs()),
        "draining in-flight requests"
    );

    handle.stop_graceful(timeout);

    Ok(())
}
