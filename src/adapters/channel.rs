use crate::domain::ports::InterruptSource;
use tokio::sync::mpsc;

/// In-process interruptions: any holder of an [`Interrupter`] can wake the
/// daemon's wait. OS signals never reach this channel, so SIGINT keeps its
/// default action and ends the process.
pub fn interrupt_channel() -> (Interrupter, ChannelInterrupts) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Interrupter { tx }, ChannelInterrupts { rx })
}

#[derive(Debug, Clone)]
pub struct Interrupter {
    tx: mpsc::UnboundedSender<()>,
}

impl Interrupter {
    /// Returns false once the receiving side is gone.
    pub fn interrupt(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

#[derive(Debug)]
pub struct ChannelInterrupts {
    rx: mpsc::UnboundedReceiver<()>,
}

impl InterruptSource for ChannelInterrupts {
    async fn interrupted(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}
