//! # Notifications Widget
//!
//! Toast overlay for the shared [`NotificationCenter`]: newest at the bottom-right,
//! errors stay until closed, actions run their callback and dismiss the toast.

use crate::services::{Notification, NotificationCenter, NotificationKind};
use crate::ui::theme::Theme;

const TOAST_WIDTH: f32 = 320.0;

/// Render every active notification
pub fn show(ctx: &egui::Context, notifications: &NotificationCenter, theme: &Theme) {
    let active = notifications.active();
    if active.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_width(TOAST_WIDTH);
            for notification in &active {
                render_toast(ui, notification, notifications, theme);
                ui.add_space(6.0);
            }
        });
}

fn render_toast(ui: &mut egui::Ui, notification: &Notification, notifications: &NotificationCenter, theme: &Theme) {
    let stripe = theme.notification_color(notification.kind);

    egui::Frame::popup(ui.style())
        .stroke(egui::Stroke::new(2.0, stripe))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(TOAST_WIDTH);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&notification.title).strong().color(stripe));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Errors have no timeout, so they always get a close button
                    let closable = notification.kind == NotificationKind::Error || notification.expires_at().is_none();
                    if closable && ui.small_button("x").clicked() {
                        notifications.dismiss(&notification.id);
                    }
                });
            });
            ui.label(&notification.message);

            if let Some(action) = &notification.action {
                if ui.button(&action.label).clicked() {
                    (action.callback)();
                    notifications.dismiss(&notification.id);
                }
            }
        });
}
