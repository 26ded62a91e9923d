use crate::database::Database;
use std::future::Future;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::Instant;

/// Resolves on SIGINT or SIGTERM, then tells `notify` so the grace period can
/// start counting.
pub async fn shutdown_signal(notify: oneshot::Sender<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, draining");
    // the receiver is gone only when the server already stopped
    let _ = notify.send(());
}

/// Drives `server` to completion. From the moment `signalled` fires, the
/// in-flight request drain and the pool close share one `grace` budget;
/// overrunning it is an error.
pub async fn serve_until_drained<S>(
    server: S,
    signalled: oneshot::Receiver<()>,
    db: &Database,
    grace: Duration,
) -> anyhow::Result<()>
where
    S: Future<Output = std::io::Result<()>>,
{
    let mut server = std::pin::pin!(server);

    let stopped = tokio::select! {
        result = &mut server => {
            result?;
            true
        }
        _ = signalled => false,
    };

    let deadline = Instant::now() + grace;

    if !stopped {
        match tokio::time::timeout_at(deadline, &mut server).await {
            Ok(result) => result?,
            Err(_) => anyhow::bail!("in-flight requests did not finish within {:?}", grace),
        }
    }

    tracing::info!("closing connection pool");
    match tokio::time::timeout_at(deadline, db.close()).await {
        Ok(()) => {
            tracing::info!("pool closed");
            Ok(())
        }
        Err(_) => anyhow::bail!("connection pool did not drain within {:?}", grace),
    }
}
