use crate::controller::RootController;
use crate::theme::Theme;
use crate::ui::chat_input::ChatInput;
use crate::ui::dashboard::{self, DashboardProps};
use crate::ui::sidebar::{self, SidebarProps};
use crate::ui::ViewAction;
use eframe::egui;

pub struct HospitalApp {
    controller: RootController,
    chat_input: ChatInput,
    theme: Theme,
}

impl HospitalApp {
    pub fn new(controller: RootController, theme: Theme) -> Self {
        Self {
            controller,
            chat_input: ChatInput::new(),
            theme,
        }
    }

    fn render_sidebar(&self, ctx: &egui::Context, actions: &mut Vec<ViewAction>) {
        let props = SidebarProps {
            selected_patient: self.controller.selected_patient(),
            is_local_mode: self.controller.is_local_mode(),
            agent_stats: self.controller.agent_stats(),
        };
        egui::SidePanel::left("patient_sidebar")
            .resizable(false)
            .exact_width(self.theme.sidebar_width)
            .frame(
                egui::Frame::new()
                    .fill(self.theme.surface_1)
                    .inner_margin(egui::Margin::same(self.theme.spacing_24 as i8)),
            )
            .show(ctx, |ui| {
                sidebar::show(ui, &self.theme, &props, &mut |action| actions.push(action));
            });
    }

    fn render_chat_input(&mut self, ctx: &egui::Context, actions: &mut Vec<ViewAction>) {
        let theme = &self.theme;
        let chat_input = &mut self.chat_input;
        egui::TopBottomPanel::bottom("chat_input")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface_1)
                    .inner_margin(egui::Margin::symmetric(
                        theme.spacing_24 as i8,
                        theme.spacing_16 as i8,
                    )),
            )
            .show(ctx, |ui| {
                chat_input.show(ui, theme, &mut |action| actions.push(action));
            });
    }

    fn render_dashboard(&self, ctx: &egui::Context) {
        let props = DashboardProps {
            selected_patient: self.controller.selected_patient(),
            is_local_mode: self.controller.is_local_mode(),
            messages: self.controller.messages(),
            today: chrono::Local::now().date_naive(),
        };
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.surface_0)
                    .inner_margin(egui::Margin::same(self.theme.spacing_24 as i8)),
            )
            .show(ctx, |ui| {
                dashboard::show(ui, &self.theme, &props);
            });
    }
}

impl eframe::App for HospitalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.drain_events();

        let mut actions = Vec::new();
        self.render_sidebar(ctx, &mut actions);
        self.render_chat_input(ctx, &mut actions);
        self.render_dashboard(ctx);

        if !actions.is_empty() {
            for action in actions {
                self.controller.apply_action(action, Some(ctx));
            }
            ctx.request_repaint();
        }

        if self.controller.pending_replies() > 0 {
            ctx.request_repaint_after(self.controller.reply_delay());
        }
    }
}
