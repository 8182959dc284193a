use crate::theme::Theme;
use crate::ui::ViewAction;
use eframe::egui::{self, RichText};

pub const PLACEHOLDER: &str = "Ask me about symptoms, appointments, or reminders...";
pub const DISCLAIMER: &str = "AI Assistant can make mistakes. Please verify important information.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterIntent {
    Submit,
    PassToEditor,
}

/// A bare Enter sends. Any modifier (Shift for a newline) leaves the key to
/// the editor.
pub fn enter_intent(modifiers: egui::Modifiers) -> EnterIntent {
    if modifiers.is_none() {
        EnterIntent::Submit
    } else {
        EnterIntent::PassToEditor
    }
}

/// Removes submitting Enter presses from this frame's events. The modifiers
/// are read off each key event, not the frame-wide state.
fn take_submit_keys(input: &mut egui::InputState) -> bool {
    let mut submit = false;
    input.events.retain(|event| match event {
        egui::Event::Key {
            key: egui::Key::Enter,
            pressed: true,
            modifiers,
            ..
        } if enter_intent(*modifiers) == EnterIntent::Submit => {
            submit = true;
            false
        }
        _ => true,
    });
    submit
}

#[derive(Debug, Default)]
pub struct ChatInput {
    buffer: String,
}

impl ChatInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editor_id() -> egui::Id {
        egui::Id::new("chat_input_editor")
    }

    #[cfg(test)]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[cfg(test)]
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.buffer.trim().is_empty()
    }

    /// Takes the buffer when it holds anything besides whitespace. The text is
    /// forwarded as typed; trimming only decides whether to send.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        Some(std::mem::take(&mut self.buffer))
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme, emit: &mut dyn FnMut(ViewAction)) {
        let editor_id = Self::editor_id();
        let mut send_now = false;

        if ui.memory(|memory| memory.has_focus(editor_id)) {
            // Consumed before the editor runs so it never sees the newline.
            send_now = ui.input_mut(take_submit_keys);
        }

        theme.composer_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                // Attachments and voice input are decorative.
                ui.add(egui::Button::new("📎").stroke(theme.subtle_button_stroke()));

                let send_width = 96.0;
                let mic_width = 40.0;
                let editor_width =
                    (ui.available_width() - send_width - mic_width - theme.spacing_24).max(120.0);
                ui.add(
                    egui::TextEdit::multiline(&mut self.buffer)
                        .id(editor_id)
                        .desired_rows(1)
                        .desired_width(editor_width)
                        .hint_text(PLACEHOLDER),
                );

                ui.add(egui::Button::new("🎤").frame(false));

                let clicked = ui
                    .add_enabled(
                        self.can_submit(),
                        egui::Button::new(
                            RichText::new("➤ Send").color(theme.text_on_accent),
                        )
                        .fill(theme.accent_primary)
                        .min_size(egui::vec2(send_width, 36.0)),
                    )
                    .clicked();
                send_now |= clicked;
            });
        });

        if send_now {
            if let Some(text) = self.submit() {
                emit(ViewAction::SendMessage(text));
                ui.memory_mut(|memory| memory.request_focus(editor_id));
            }
        }

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(DISCLAIMER).small().color(theme.text_muted));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_takes_text_as_typed_and_clears_buffer() {
        let mut input = ChatInput::new();
        input.set_buffer("  my child has fever  ");

        assert_eq!(input.submit().as_deref(), Some("  my child has fever  "));
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn blank_buffers_are_not_submitted_or_cleared() {
        let mut input = ChatInput::new();
        assert_eq!(input.submit(), None);

        input.set_buffer(" \n\t ");
        assert!(!input.can_submit());
        assert_eq!(input.submit(), None);
        assert_eq!(input.buffer(), " \n\t ");
    }

    #[test]
    fn only_bare_enter_submits() {
        assert_eq!(enter_intent(egui::Modifiers::NONE), EnterIntent::Submit);
        assert_eq!(enter_intent(egui::Modifiers::SHIFT), EnterIntent::PassToEditor);
        assert_eq!(enter_intent(egui::Modifiers::ALT), EnterIntent::PassToEditor);
        assert_eq!(enter_intent(egui::Modifiers::CTRL), EnterIntent::PassToEditor);
    }

    fn run_frame(
        ctx: &egui::Context,
        input: &mut ChatInput,
        events: Vec<egui::Event>,
        modifiers: egui::Modifiers,
    ) -> Vec<ViewAction> {
        let theme = Theme::default();
        let mut actions = Vec::new();
        let raw_input = egui::RawInput {
            events,
            modifiers,
            ..Default::default()
        };
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                input.show(ui, &theme, &mut |action| actions.push(action));
            });
        });
        actions
    }

    fn focused(ctx: &egui::Context, input: &mut ChatInput) {
        run_frame(ctx, input, Vec::new(), egui::Modifiers::NONE);
        ctx.memory_mut(|memory| memory.request_focus(ChatInput::editor_id()));
        run_frame(ctx, input, Vec::new(), egui::Modifiers::NONE);
    }

    fn type_text(ctx: &egui::Context, input: &mut ChatInput, text: &str) {
        let actions = run_frame(
            ctx,
            input,
            vec![egui::Event::Text(text.to_string())],
            egui::Modifiers::NONE,
        );
        assert!(actions.is_empty());
    }

    fn enter(
        ctx: &egui::Context,
        input: &mut ChatInput,
        event_modifiers: egui::Modifiers,
        frame_modifiers: egui::Modifiers,
    ) -> Vec<ViewAction> {
        let event = egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: event_modifiers,
        };
        run_frame(ctx, input, vec![event], frame_modifiers)
    }

    #[test]
    fn shift_enter_inserts_newline_and_enter_sends() {
        let ctx = egui::Context::default();
        let mut input = ChatInput::new();
        focused(&ctx, &mut input);
        type_text(&ctx, &mut input, "fever");

        let actions = enter(&ctx, &mut input, egui::Modifiers::SHIFT, egui::Modifiers::SHIFT);
        assert!(actions.is_empty());
        assert_eq!(input.buffer(), "fever\n");

        let actions = enter(&ctx, &mut input, egui::Modifiers::NONE, egui::Modifiers::NONE);
        assert_eq!(actions, vec![ViewAction::SendMessage("fever\n".to_string())]);
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn enter_on_blank_buffer_sends_nothing_and_adds_no_newline() {
        let ctx = egui::Context::default();
        let mut input = ChatInput::new();
        focused(&ctx, &mut input);

        let actions = enter(&ctx, &mut input, egui::Modifiers::NONE, egui::Modifiers::NONE);
        assert!(actions.is_empty());
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn shift_on_the_key_event_wins_over_frame_modifiers() {
        let ctx = egui::Context::default();
        let mut input = ChatInput::new();
        focused(&ctx, &mut input);
        type_text(&ctx, &mut input, "cough");

        let actions = enter(&ctx, &mut input, egui::Modifiers::SHIFT, egui::Modifiers::NONE);
        assert!(actions.is_empty());
        assert!(input.buffer().starts_with("cough"));
    }

    #[test]
    fn alt_enter_does_not_send() {
        let ctx = egui::Context::default();
        let mut input = ChatInput::new();
        focused(&ctx, &mut input);
        type_text(&ctx, &mut input, "x");

        let actions = enter(&ctx, &mut input, egui::Modifiers::ALT, egui::Modifiers::ALT);
        assert!(actions.is_empty());
        assert!(input.buffer().starts_with('x'));
    }

    #[test]
    fn multiline_text_survives_submit() {
        let mut input = ChatInput::new();
        input.set_buffer("line one\nline two");
        assert_eq!(input.submit().as_deref(), Some("line one\nline two"));
    }
}
