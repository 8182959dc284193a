use crate::session::{mode_label, Message, Role};
use crate::theme::{Accent, Theme};
use crate::ui::samples::{QueryGroup, QuickAction, QUERY_GROUPS, QUICK_ACTIONS};
use chrono::{Datelike, NaiveDate};
use eframe::egui::{self, Color32, RichText, ScrollArea};

pub struct DashboardProps<'a> {
    pub selected_patient: &'a str,
    pub is_local_mode: bool,
    pub messages: &'a [Message],
    pub today: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardContent {
    Welcome,
    Transcript,
}

impl DashboardContent {
    pub fn for_messages(messages: &[Message]) -> Self {
        if messages.is_empty() {
            Self::Welcome
        } else {
            Self::Transcript
        }
    }
}

pub fn bubble_align(role: Role) -> egui::Align {
    match role {
        Role::User => egui::Align::Max,
        Role::Assistant => egui::Align::Min,
    }
}

pub fn patient_label(patient: &str) -> String {
    format!("Current Patient: {patient}")
}

pub fn date_badge_label(date: NaiveDate) -> String {
    format!("{}, {} {}", date.format("%a"), date.format("%b"), date.day())
}

pub fn show(ui: &mut egui::Ui, theme: &Theme, props: &DashboardProps<'_>) {
    render_header(ui, theme, props);
    ui.add_space(theme.spacing_8);

    ScrollArea::vertical()
        .id_salt("dashboard_scroll")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(theme.spacing_16);
            match DashboardContent::for_messages(props.messages) {
                DashboardContent::Welcome => render_welcome(ui, theme),
                DashboardContent::Transcript => render_transcript(ui, theme, props.messages),
            }
            ui.add_space(theme.spacing_16);
        });
}

fn render_header(ui: &mut egui::Ui, theme: &Theme, props: &DashboardProps<'_>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("✚").size(30.0).color(theme.accent_primary));
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0;
            ui.heading("Hospital AI Assistant");
            ui.label(RichText::new("Intelligent Healthcare Support").color(theme.text_muted));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (blue, tint) = theme.accent(Accent::Blue);
            theme.badge_frame(tint, tint).show(ui, |ui| {
                ui.label(
                    RichText::new(format!("🕑 {}", date_badge_label(props.today)))
                        .small()
                        .color(blue),
                );
            });
        });
    });

    ui.add_space(theme.spacing_8);
    theme.banner_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("✚").color(theme.accent_primary));
            ui.label(RichText::new(patient_label(props.selected_patient)).color(theme.text_primary));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (fg, fill) = if props.is_local_mode {
                    theme.accent(Accent::Green)
                } else {
                    (theme.text_secondary, theme.surface_2)
                };
                theme.badge_frame(fill, fg.gamma_multiply(0.4)).show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("Mode: {}", mode_label(props.is_local_mode)))
                            .small()
                            .color(fg),
                    );
                });
            });
        });
    });
}

fn render_welcome(ui: &mut egui::Ui, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("✚").size(48.0).color(theme.accent_primary));
        ui.heading("Welcome to Hospital AI Assistant");
        ui.label(
            RichText::new(
                "I'm here to help you with medical triage, appointment scheduling, medication \
                 reminders, and more. Try one of the sample queries below or ask me anything.",
            )
            .color(theme.text_secondary),
        );
    });

    ui.add_space(theme.spacing_24);
    ui.horizontal(|ui| {
        ui.label(RichText::new("ⓘ").color(theme.accent_primary));
        ui.label(RichText::new("Try These Sample Queries").strong());
    });
    ui.add_space(theme.spacing_8);

    ui.columns(QUERY_GROUPS.len(), |columns| {
        for (column, group) in columns.iter_mut().zip(QUERY_GROUPS.iter()) {
            render_query_group(column, theme, group);
        }
    });

    ui.add_space(theme.spacing_16);
    ui.columns(QUICK_ACTIONS.len(), |columns| {
        for (column, action) in columns.iter_mut().zip(QUICK_ACTIONS.iter()) {
            render_quick_action(column, theme, action);
        }
    });
}

fn render_query_group(ui: &mut egui::Ui, theme: &Theme, group: &QueryGroup) {
    let (fg, tint) = theme.accent(group.accent);
    theme.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            theme.badge_frame(tint, tint).show(ui, |ui| {
                ui.label(RichText::new(group.icon).size(18.0).color(fg));
            });
            ui.label(RichText::new(group.category).strong());
        });
        ui.add_space(theme.spacing_8);
        for query in group.queries {
            // Placeholders only: clicking a sample query does nothing.
            ui.add_sized(
                [ui.available_width(), 36.0],
                egui::Button::new(
                    RichText::new(format!("\"{query}\""))
                        .small()
                        .color(theme.text_secondary),
                )
                .fill(theme.surface_2)
                .stroke(theme.subtle_button_stroke())
                .wrap(),
            );
        }
    });
}

fn render_quick_action(ui: &mut egui::Ui, theme: &Theme, action: &QuickAction) {
    let (fg, _) = theme.accent(action.accent);
    theme.tinted_card_frame(action.accent).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            theme.badge_frame(Color32::WHITE, Color32::WHITE).show(ui, |ui| {
                ui.label(RichText::new(action.icon).size(22.0).color(fg));
            });
            ui.vertical(|ui| {
                ui.label(RichText::new(action.title).strong());
                ui.label(
                    RichText::new(action.description)
                        .small()
                        .color(theme.text_secondary),
                );
            });
        });
    });
}

fn render_transcript(ui: &mut egui::Ui, theme: &Theme, messages: &[Message]) {
    let max_bubble_width = ui.available_width() * 0.7;
    for message in messages {
        let from_user = message.role == Role::User;
        let text_color = if from_user {
            theme.text_on_accent
        } else {
            theme.text_primary
        };
        ui.with_layout(
            egui::Layout::top_down(bubble_align(message.role)),
            |ui| {
                theme.bubble_frame(from_user).show(ui, |ui| {
                    ui.set_max_width(max_bubble_width);
                    ui.label(RichText::new(&message.content).color(text_color));
                });
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_only_while_transcript_is_empty() {
        assert_eq!(DashboardContent::for_messages(&[]), DashboardContent::Welcome);
        assert_eq!(
            DashboardContent::for_messages(&[Message::user("hi")]),
            DashboardContent::Transcript
        );
        assert_eq!(
            DashboardContent::for_messages(&[Message::user("hi"), Message::assistant("hello")]),
            DashboardContent::Transcript
        );
    }

    #[test]
    fn user_bubbles_align_right_and_assistant_left() {
        assert_eq!(bubble_align(Role::User), egui::Align::Max);
        assert_eq!(bubble_align(Role::Assistant), egui::Align::Min);
    }

    #[test]
    fn patient_label_shows_exact_selection() {
        for patient in crate::session::PATIENTS {
            assert_eq!(patient_label(patient), format!("Current Patient: {patient}"));
        }
    }

    #[test]
    fn date_badge_uses_short_weekday_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        assert_eq!(date_badge_label(date), "Tue, Mar 5");
    }
}
