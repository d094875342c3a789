use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::watch;

/// Counter of refresh requests. A slow subscriber only ever sees the latest
/// value.
#[derive(Clone)]
pub(crate) struct ReloadHandle {
    tx: watch::Sender<u64>,
}

impl ReloadHandle {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx }
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }

    pub(crate) fn notify_reload(&self) -> u64 {
        let mut epoch = 0;
        self.tx.send_modify(|e| {
            *e += 1;
            epoch = *e;
        });
        tracing::info!(epoch, "reload signaled");
        epoch
    }

    pub(crate) async fn forward_sighup(&self) -> anyhow::Result<()> {
        let mut hup = signal(SignalKind::hangup())?;

        while hup.recv().await.is_some() {
            self.notify_reload();
        }
        Ok(())
    }
}
