use crate::event::AppEvent;
use eframe::egui;
use std::sync::mpsc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration};

/// Simulated assistant: every scheduled reply lands on the event channel once
/// its delay has elapsed. Outstanding replies are aborted when the scheduler
/// is dropped.
pub struct ReplyScheduler {
    runtime_handle: Handle,
    tx: mpsc::Sender<AppEvent>,
    delay: Duration,
    reply_text: String,
    pending: Vec<JoinHandle<()>>,
}

impl ReplyScheduler {
    pub fn new(
        runtime_handle: Handle,
        tx: mpsc::Sender<AppEvent>,
        delay: Duration,
        reply_text: impl Into<String>,
    ) -> Self {
        Self {
            runtime_handle,
            tx,
            delay,
            reply_text: reply_text.into(),
            pending: Vec::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, repaint: Option<egui::Context>) {
        self.pending.retain(|handle| !handle.is_finished());

        let tx = self.tx.clone();
        let delay = self.delay;
        let reply = self.reply_text.clone();
        let handle = self.runtime_handle.spawn(async move {
            time::sleep(delay).await;
            if tx.send(AppEvent::AssistantReply(reply)).is_err() {
                tracing::debug!("reply discarded: event channel closed");
                return;
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
        self.pending.push(handle);
        tracing::debug!(delay_ms = delay.as_millis() as u64, "assistant reply scheduled");
    }

    pub fn pending(&self) -> usize {
        self.pending
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    pub fn cancel_all(&mut self) {
        let cancelled = self.pending.len();
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        if cancelled > 0 {
            tracing::debug!(cancelled, "pending assistant replies aborted");
        }
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
