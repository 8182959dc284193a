use crate::session::{mode_label, AgentStats, PATIENTS};
use crate::theme::{Accent, Theme};
use crate::ui::ViewAction;
use eframe::egui::{self, RichText};

pub struct SidebarProps<'a> {
    pub selected_patient: &'a str,
    pub is_local_mode: bool,
    pub agent_stats: AgentStats,
}

pub fn stat_rows(stats: AgentStats) -> [(&'static str, &'static str, Accent, u32); 3] {
    [
        ("📄", "Total Queries", Accent::Blue, stats.total_queries),
        ("⚕", "Triage Requests", Accent::Purple, stats.triage_requests),
        ("📅", "Bookings", Accent::Green, stats.bookings),
    ]
}

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    props: &SidebarProps<'_>,
    emit: &mut dyn FnMut(ViewAction),
) {
    ui.add_space(theme.spacing_16);
    ui.horizontal(|ui| {
        ui.label(RichText::new("✚").size(24.0).color(theme.accent_primary));
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 0.0;
            ui.label(RichText::new("Health AI").strong().size(16.0));
            ui.label(
                RichText::new("Multi-Agent System")
                    .small()
                    .color(theme.text_muted),
            );
        });
    });
    ui.add_space(theme.spacing_8);
    ui.separator();

    section_label(ui, theme, "Patient Information");
    let mut selection = props.selected_patient.to_string();
    egui::ComboBox::from_id_salt("patient_select")
        .width(ui.available_width())
        .selected_text(format!("👤 {selection}"))
        .show_ui(ui, |ui| {
            for patient in PATIENTS {
                ui.selectable_value(&mut selection, patient.to_string(), patient);
            }
        });
    if selection != props.selected_patient {
        emit(ViewAction::PatientChanged(selection));
    }

    ui.separator();

    section_label(ui, theme, "Connection Mode");
    theme
        .panel_frame(theme.surface_2, theme.spacing_12 as i8)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let dot = if props.is_local_mode {
                    theme.success
                } else {
                    theme.text_muted
                };
                ui.label(RichText::new("●").color(dot));
                ui.label(
                    RichText::new(mode_label(props.is_local_mode)).color(theme.text_secondary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut is_local_mode = props.is_local_mode;
                    if toggle_switch(ui, theme, &mut is_local_mode).changed() {
                        emit(ViewAction::ModeChanged(is_local_mode));
                    }
                });
            });
        });

    ui.separator();

    section_label(ui, theme, "Agent Statistics");
    for (icon, label, accent, value) in stat_rows(props.agent_stats) {
        let (fg, _) = theme.accent(accent);
        theme.tinted_card_frame(accent).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).color(fg));
                ui.label(RichText::new(label).color(theme.text_secondary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(value.to_string()).color(fg).strong());
                });
            });
        });
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(theme.spacing_16);
        ui.label(
            RichText::new("Powered by Multi-Agent AI")
                .small()
                .color(theme.text_muted),
        );
        ui.separator();
    });
}

/// Pill-shaped on/off switch. The knob slides right when `on`.
pub fn toggle_switch(ui: &mut egui::Ui, theme: &Theme, on: &mut bool) -> egui::Response {
    let size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
    let (rect, mut response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }
    response.widget_info(|| {
        egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), *on, "")
    });

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool_responsive(response.id, *on);
        let radius = 0.5 * rect.height();
        let track = if *on {
            theme.accent_primary
        } else {
            theme.surface_3
        };
        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        let painter = ui.painter();
        painter.rect_filled(rect, radius, track);
        painter.circle_filled(
            egui::pos2(knob_x, rect.center().y),
            0.75 * radius,
            egui::Color32::WHITE,
        );
    }

    response
}

fn section_label(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(RichText::new(text).small().color(theme.text_muted));
}
