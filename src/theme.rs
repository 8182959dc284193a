use eframe::egui::{self, Color32, CornerRadius, FontId, Frame, Margin, Stroke, TextStyle};

#[derive(Debug, Clone, Copy)]
pub enum Accent {
    Blue,
    Purple,
    Rose,
    Amber,
    Green,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub surface_0: Color32,
    pub surface_1: Color32,
    pub surface_2: Color32,
    pub surface_3: Color32,
    pub accent_primary: Color32,
    pub accent_muted: Color32,
    pub success: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub text_on_accent: Color32,
    pub border_subtle: Color32,
    pub banner_fill: Color32,
    pub banner_border: Color32,
    pub spacing_8: f32,
    pub spacing_12: f32,
    pub spacing_16: f32,
    pub spacing_24: f32,
    pub radius_8: u8,
    pub radius_12: u8,
    pub radius_16: u8,
    pub sidebar_width: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface_0: Color32::from_rgb(0xF8, 0xFA, 0xFC),
            surface_1: Color32::WHITE,
            surface_2: Color32::from_rgb(0xF1, 0xF5, 0xF9),
            surface_3: Color32::from_rgb(0xE2, 0xE8, 0xF0),
            accent_primary: Color32::from_rgb(0x25, 0x63, 0xEB),
            accent_muted: Color32::from_rgb(0x1D, 0x4E, 0xD8),
            success: Color32::from_rgb(0x22, 0xC5, 0x5E),
            text_primary: Color32::from_rgb(0x0F, 0x17, 0x2A),
            text_secondary: Color32::from_rgb(0x33, 0x41, 0x55),
            text_muted: Color32::from_rgb(0x64, 0x74, 0x8B),
            text_on_accent: Color32::WHITE,
            border_subtle: Color32::from_rgb(0xE2, 0xE8, 0xF0),
            banner_fill: Color32::from_rgb(0xEF, 0xF6, 0xFF),
            banner_border: Color32::from_rgb(0xDB, 0xEA, 0xFE),
            spacing_8: Self::P8,
            spacing_12: Self::P12,
            spacing_16: Self::P16,
            spacing_24: Self::P24,
            radius_8: Self::R8,
            radius_12: Self::R12,
            radius_16: 16,
            sidebar_width: 320.0,
        }
    }
}

impl Theme {
    pub const R8: u8 = 8;
    pub const R12: u8 = 12;
    pub const P8: f32 = 8.0;
    pub const P12: f32 = 12.0;
    pub const P16: f32 = 16.0;
    pub const P24: f32 = 24.0;

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = self.surface_0;
        visuals.override_text_color = Some(self.text_primary);
        visuals.widgets.noninteractive.fg_stroke.color = self.text_primary;
        visuals.widgets.noninteractive.bg_fill = self.surface_1;
        visuals.widgets.noninteractive.weak_bg_fill = self.surface_1;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border_subtle);
        visuals.widgets.inactive.bg_fill = self.surface_2;
        visuals.widgets.inactive.weak_bg_fill = self.surface_2;
        visuals.widgets.inactive.fg_stroke.color = self.text_secondary;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border_subtle);
        visuals.widgets.hovered.bg_fill = self.surface_3;
        visuals.widgets.hovered.weak_bg_fill = self.surface_3;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.surface_3);
        visuals.widgets.hovered.fg_stroke.color = self.text_primary;
        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.fg_stroke.color = self.text_on_accent;
        visuals.selection.bg_fill = self.accent_primary;
        visuals.selection.stroke = Stroke::new(1.0, self.text_on_accent);
        visuals.hyperlink_color = self.accent_primary;
        visuals.window_fill = self.surface_1;
        visuals.window_stroke = Stroke::new(1.0, self.border_subtle);
        visuals.window_corner_radius = CornerRadius::same(self.radius_12);
        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(20.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Button, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Monospace, FontId::monospace(13.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(12.0));
        ctx.set_style(style);
    }

    /// Foreground and light background tint for an accent family.
    pub fn accent(&self, accent: Accent) -> (Color32, Color32) {
        match accent {
            Accent::Blue => (
                Color32::from_rgb(0x25, 0x63, 0xEB),
                Color32::from_rgb(0xDB, 0xEA, 0xFE),
            ),
            Accent::Purple => (
                Color32::from_rgb(0x93, 0x33, 0xEA),
                Color32::from_rgb(0xF3, 0xE8, 0xFF),
            ),
            Accent::Rose => (
                Color32::from_rgb(0xE1, 0x1D, 0x48),
                Color32::from_rgb(0xFF, 0xE4, 0xE6),
            ),
            Accent::Amber => (
                Color32::from_rgb(0xD9, 0x77, 0x06),
                Color32::from_rgb(0xFE, 0xF3, 0xC7),
            ),
            Accent::Green => (
                Color32::from_rgb(0x16, 0xA3, 0x4A),
                Color32::from_rgb(0xDC, 0xFC, 0xE7),
            ),
        }
    }

    pub fn panel_frame(&self, fill: Color32, inner_padding: i8) -> Frame {
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::same(inner_padding))
            .corner_radius(CornerRadius::same(self.radius_12))
            .stroke(Stroke::new(1.0, self.border_subtle))
    }

    pub fn card_frame(&self) -> Frame {
        self.panel_frame(self.surface_1, self.spacing_24 as i8)
            .shadow(egui::epaint::Shadow {
                offset: [0, 2],
                blur: 8,
                spread: 0,
                color: Color32::from_black_alpha(12),
            })
    }

    pub fn tinted_card_frame(&self, accent: Accent) -> Frame {
        let (fg, tint) = self.accent(accent);
        Frame::new()
            .fill(tint)
            .inner_margin(Margin::same(self.spacing_12 as i8))
            .corner_radius(CornerRadius::same(self.radius_8))
            .stroke(Stroke::new(1.0, fg.gamma_multiply(0.25)))
    }

    pub fn banner_frame(&self) -> Frame {
        Frame::new()
            .fill(self.banner_fill)
            .inner_margin(Margin::same(self.spacing_16 as i8))
            .corner_radius(CornerRadius::same(self.radius_12))
            .stroke(Stroke::new(1.0, self.banner_border))
    }

    pub fn badge_frame(&self, fill: Color32, border: Color32) -> Frame {
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::symmetric(self.spacing_8 as i8, 4))
            .corner_radius(CornerRadius::same(self.radius_8))
            .stroke(Stroke::new(1.0, border))
    }

    pub fn bubble_frame(&self, from_user: bool) -> Frame {
        let (fill, stroke) = if from_user {
            (self.accent_primary, Stroke::NONE)
        } else {
            (self.surface_1, Stroke::new(1.0, self.border_subtle))
        };
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::same(self.spacing_16 as i8))
            .corner_radius(CornerRadius::same(self.radius_16))
            .stroke(stroke)
    }

    pub fn composer_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface_1)
            .inner_margin(Margin::symmetric(self.spacing_12 as i8, 10))
            .corner_radius(CornerRadius::same(self.radius_12))
            .stroke(Stroke::new(1.0, self.surface_3))
    }

    pub fn subtle_button_stroke(&self) -> Stroke {
        Stroke::new(1.0, self.surface_3)
    }
}
