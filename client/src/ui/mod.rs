//! # User Interface
//!
//! egui rendering for [`BakeryApp`]. Screens read facade snapshots and call the app's
//! `handle_*` methods; they never talk to the backend directly.
//!
//! ```text
//! ui/
//! ├── theme.rs     - Bakery palette and egui visuals
//! ├── screens/     - login, admin dashboard, customer dashboard
//! └── widgets/     - forms, tables, modals, header, toast overlay
//! ```

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::BakeryApp;
use crate::routing::Route;
use theme::Theme;

/// One-time style setup, called from the eframe creation context.
pub fn setup(ctx: &egui::Context) {
    Theme::apply_bakery_theme(ctx);
}

/// Draw the current route and the toast overlay.
pub fn render(ctx: &egui::Context, app: &mut BakeryApp) {
    let theme = Theme::default();

    match app.route() {
        Route::Login => screens::login::render(ctx, app, &theme),
        Route::AdminDashboard => screens::admin::render(ctx, app, &theme),
        Route::CustomerDashboard => screens::customer::render(ctx, app, &theme),
    }

    widgets::notifications::show(ctx, &app.notifications, &theme);
}
