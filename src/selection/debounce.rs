use std::time::Duration;

use tokio::sync::mpsc;

/// Emits the latest value once its input has been quiet for a fixed delay
#[derive(Debug)]
pub struct Debouncer<T> {
    rx: mpsc::Receiver<T>,
    delay: Duration,
}

/// Create a sender and a [`Debouncer`] reading from it
pub fn debounced<T>(delay: Duration, buffer: usize) -> (mpsc::Sender<T>, Debouncer<T>) {
    let (tx, rx) = mpsc::channel(buffer.max(1));
    (tx, Debouncer::new(rx, delay))
}

impl<T> Debouncer<T> {
    pub fn new(rx: mpsc::Receiver<T>, delay: Duration) -> Self {
        Self { rx, delay }
    }

    /// Wait for input, then keep absorbing newer values until none arrives within
    /// the delay. Returns `None` once all senders are gone and nothing is pending.
    pub async fn next(&mut self) -> Option<T> {
        let mut latest = self.rx.recv().await?;
        loop {
            match tokio::time::timeout(self.delay, self.rx.recv()).await {
                Ok(Some(value)) => latest = value,
                Ok(None) | Err(_) => return Some(latest),
            }
        }
    }
}
