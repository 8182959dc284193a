use crate::assistant::ReplyScheduler;
use crate::event::AppEvent;
use crate::session::{AgentStats, Message};
use crate::ui::ViewAction;
use eframe::egui;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

/// Owns the patient selection, the mode flag and the transcript. Views only
/// ever see shared borrows and hand changes back as [`ViewAction`]s.
pub struct RootController {
    rx: Receiver<AppEvent>,
    replies: ReplyScheduler,
    selected_patient: String,
    is_local_mode: bool,
    messages: Vec<Message>,
    agent_stats: AgentStats,
}

impl RootController {
    pub fn new(
        rx: Receiver<AppEvent>,
        replies: ReplyScheduler,
        selected_patient: impl Into<String>,
        is_local_mode: bool,
    ) -> Self {
        Self {
            rx,
            replies,
            selected_patient: selected_patient.into(),
            is_local_mode,
            messages: Vec::new(),
            agent_stats: AgentStats::default(),
        }
    }

    pub fn selected_patient(&self) -> &str {
        &self.selected_patient
    }

    pub fn is_local_mode(&self) -> bool {
        self.is_local_mode
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn agent_stats(&self) -> AgentStats {
        self.agent_stats
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.pending()
    }

    pub fn reply_delay(&self) -> Duration {
        self.replies.delay()
    }

    pub fn send_message(&mut self, text: impl Into<String>, ctx: Option<&egui::Context>) {
        let message = Message::user(text);
        tracing::info!(
            chars = message.content.chars().count(),
            patient = %self.selected_patient,
            "user message appended"
        );
        self.messages.push(message);
        self.replies.schedule(ctx.cloned());
    }

    pub fn change_patient(&mut self, patient: impl Into<String>) {
        self.selected_patient = patient.into();
        tracing::info!(patient = %self.selected_patient, "patient changed");
    }

    pub fn change_mode(&mut self, is_local_mode: bool) {
        self.is_local_mode = is_local_mode;
        tracing::info!(local = is_local_mode, "connection mode changed");
    }

    pub fn apply_action(&mut self, action: ViewAction, ctx: Option<&egui::Context>) {
        match action {
            ViewAction::PatientChanged(patient) => self.change_patient(patient),
            ViewAction::ModeChanged(is_local_mode) => self.change_mode(is_local_mode),
            ViewAction::SendMessage(text) => self.send_message(text, ctx),
        }
    }

    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    self.apply_event(event);
                    applied += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("event channel disconnected");
                    break;
                }
            }
        }
        applied
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AssistantReply(content) => {
                self.messages.push(Message::assistant(content));
                tracing::info!(total = self.messages.len(), "assistant reply appended");
            }
        }
    }
}
