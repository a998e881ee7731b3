//! # Admin Dashboard Screen
//!
//! Header, side navigation and one management tab at a time. Modals are drawn after
//! the panels so they float above the table of the active tab.

mod categories;
mod common;
mod ingredients;
mod orders;
mod overview;
mod products;
mod users;

use crate::app::BakeryApp;
use crate::facades::DashboardTab;
use crate::ui::theme::Theme;
use crate::ui::widgets::header;

pub fn render(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    let active = app.admin.dashboard.state().active_tab();

    let mut logout = false;
    egui::TopBottomPanel::top("admin_header").show(ctx, |ui| {
        logout = header::render_header(ui, "Bakery Admin", &app.admin.dashboard.user_name(), theme);
    });

    let mut next_tab = None;
    egui::SidePanel::left("admin_nav")
        .resizable(false)
        .exact_width(170.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            for tab in DashboardTab::all() {
                let text = egui::RichText::new(tab.title()).size(15.0);
                if ui.selectable_label(tab == active, text).clicked() && tab != active {
                    next_tab = Some(tab);
                }
                ui.add_space(2.0);
            }
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(active.title());
        ui.add_space(8.0);
        match active {
            DashboardTab::Overview => overview::render(ui, app, theme),
            DashboardTab::Users => users::render(ui, app, theme),
            DashboardTab::Products => products::render(ui, app, theme),
            DashboardTab::Categories => categories::render(ui, app, theme),
            DashboardTab::Ingredients => ingredients::render(ui, app, theme),
            DashboardTab::Orders => orders::render(ui, app, theme),
        }
    });

    match active {
        DashboardTab::Overview => {}
        DashboardTab::Users => users::render_modals(ctx, app, theme),
        DashboardTab::Products => products::render_modals(ctx, app, theme),
        DashboardTab::Categories => categories::render_modals(ctx, app, theme),
        DashboardTab::Ingredients => ingredients::render_modals(ctx, app, theme),
        DashboardTab::Orders => orders::render_modals(ctx, app, theme),
    }

    if logout {
        app.handle_logout();
    } else if let Some(tab) = next_tab {
        app.handle_tab_change(tab);
    }
}
