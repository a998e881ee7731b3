//! # GUI Theme
//!
//! Warm bakery palette for egui: cream panels, chocolate text and a caramel accent.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

use crate::services::NotificationKind;

/// Bakery color palette
#[derive(Debug, Clone)]
pub struct BakeryColors {
    /// Cream background
    pub background: Color32,
    /// Slightly darker cream for cards and inputs
    pub surface: Color32,
    /// Chocolate text
    pub text: Color32,
    /// Caramel accent
    pub accent: Color32,
    /// Darker caramel for pressed widgets
    pub accent_dark: Color32,
    /// Soft border
    pub border: Color32,
    pub green_success: Color32,
    pub red_error: Color32,
    pub yellow_warning: Color32,
    pub blue_info: Color32,
    /// Secondary text
    pub gray_secondary: Color32,
}

impl Default for BakeryColors {
    fn default() -> Self {
        BakeryColors {
            background: Color32::from_rgb(253, 246, 236),     // #FDF6EC - Cream
            surface: Color32::from_rgb(245, 233, 218),        // #F5E9DA - Dough
            text: Color32::from_rgb(74, 44, 29),              // #4A2C1D - Chocolate
            accent: Color32::from_rgb(196, 120, 52),          // #C47834 - Caramel
            accent_dark: Color32::from_rgb(150, 86, 30),      // #96561E - Burnt caramel
            border: Color32::from_rgb(222, 200, 176),         // #DEC8B0
            green_success: Color32::from_rgb(46, 125, 50),    // #2E7D32
            red_error: Color32::from_rgb(198, 40, 40),        // #C62828
            yellow_warning: Color32::from_rgb(237, 108, 2),   // #ED6C02
            blue_info: Color32::from_rgb(2, 136, 209),        // #0288D1
            gray_secondary: Color32::from_rgb(130, 110, 96),  // #826E60
        }
    }
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: BakeryColors,
    /// Normal text color
    pub normal: Color32,
    /// Headings, selected tabs and primary buttons
    pub selected: Color32,
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = BakeryColors::default();
        Theme {
            colors: colors.clone(),
            normal: colors.text,
            selected: colors.accent,
            border: colors.border,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.yellow_warning,
            info: colors.blue_info,
            background: colors.background,
        }
    }
}

impl Theme {
    /// Toast stripe color
    pub fn notification_color(&self, kind: NotificationKind) -> Color32 {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Error => self.error,
            NotificationKind::Warning => self.warning,
            NotificationKind::Info => self.info,
        }
    }

    /// Badge color for an order status name.
    pub fn order_status_color(&self, status_name: &str) -> Color32 {
        let name = status_name.to_lowercase();
        if name.contains("cancel") {
            self.error
        } else if name.contains("deliver") || name.contains("complet") {
            self.success
        } else if name.contains("pend") {
            self.warning
        } else {
            self.info
        }
    }

    /// Active/inactive badge color
    pub fn active_color(&self, active: bool) -> Color32 {
        if active {
            self.success
        } else {
            self.dim
        }
    }

    pub fn bakery_visuals(colors: &BakeryColors) -> Visuals {
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(colors.text);

        visuals.faint_bg_color = colors.surface;
        visuals.extreme_bg_color = Color32::WHITE;
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.window_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.surface;
        visuals.widgets.inactive.weak_bg_fill = colors.surface;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);

        // Hover and press use the caramel accent
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(240, 214, 186);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(240, 214, 186);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.accent);

        visuals.widgets.active.bg_fill = Color32::from_rgb(230, 190, 150);
        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(230, 190, 150);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.accent_dark);

        visuals.widgets.open.bg_fill = Color32::from_rgb(240, 214, 186);
        visuals.widgets.open.bg_stroke = Stroke::new(1.5, colors.accent);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(196, 120, 52, 90);
        visuals.selection.stroke = Stroke::new(1.5, colors.accent_dark);

        visuals.hyperlink_color = colors.blue_info;
        visuals.striped = true;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Apply the bakery theme to an egui context
    pub fn apply_bakery_theme(ctx: &Context) {
        let visuals = Self::bakery_visuals(&BakeryColors::default());

        for theme in [EguiTheme::Light, EguiTheme::Dark] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.window_margin = egui::Margin::same(12);
                style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 26.0);
            });
        }

        tracing::debug!("Applied bakery theme visuals");
    }
}
