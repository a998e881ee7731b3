//! # Login Screen
//!
//! Email/password form with a show-password toggle and the password recovery modal.

use crate::app::BakeryApp;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, layouts, modal};

pub fn render(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    let mut submit = false;
    let mut forgot = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        layouts::render_centered(ui, 80.0, |ui| {
            ui.label(egui::RichText::new("Bakery").size(36.0).strong().color(theme.selected));
            ui.add_space(24.0);

            ui.allocate_ui(egui::vec2(forms::INPUT_WIDTH + 40.0, 0.0), |ui| {
                ui.vertical(|ui| {
                    forms::render_form_heading(ui, "Sign in", theme);
                    submit = render_login_form(ui, app, theme);
                    ui.add_space(12.0);
                    forgot = ui.link("Forgot your password?").clicked();

                    if !app.session_checked {
                        ui.add_space(12.0);
                        forms::render_hint(ui, "Checking for an existing session...", theme);
                    }
                });
            });
        });
    });

    if forgot {
        app.recovery.open();
    }
    if submit {
        app.handle_login_submit();
    }
    if app.recovery.open {
        render_recovery(ctx, app, theme);
    }
}

/// Returns `true` when the form was submitted.
fn render_login_form(ui: &mut egui::Ui, app: &mut BakeryApp, theme: &Theme) -> bool {
    let form = &mut app.login;
    let mut submit = false;

    ui.add_enabled_ui(!form.is_loading, |ui| {
        forms::render_text_input(ui, "Email", &mut form.email, "you@example.com", false);
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Password").size(14.0));
        ui.horizontal(|ui| {
            let password = ui.add_sized(
                [forms::INPUT_WIDTH, 28.0],
                egui::TextEdit::singleline(&mut form.password)
                    .password(!form.show_password)
                    .hint_text("Your password"),
            );
            submit |= forms::submitted(ui, &password);

            let toggle = if form.show_password { "Hide" } else { "Show" };
            if ui.small_button(toggle).clicked() {
                form.toggle_password();
            }
        });
    });

    ui.add_space(12.0);
    if let Some(error) = form.error.as_deref() {
        forms::render_error(ui, error, theme);
    }

    submit |= forms::render_submit_button(ui, "Sign in", form.is_loading, theme);
    submit && !form.is_loading
}

fn render_recovery(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    let form = &mut app.recovery;
    let mut submit = false;
    let mut cancel = false;

    let open = modal::render_modal(ctx, "Recover password", 360.0, |ui| {
        ui.label("Enter your account email and we will send you a link to reset your password.");
        ui.add_space(8.0);

        let email = forms::render_text_input(ui, "Email", &mut form.email, "you@example.com", false);
        submit = forms::submitted(ui, &email);

        if let Some(error) = form.error.as_deref() {
            ui.add_space(4.0);
            forms::render_error(ui, error, theme);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            submit |= forms::render_submit_button(ui, "Send link", form.is_sending, theme);
            cancel = ui.button("Cancel").clicked();
        });
    });

    if !open || cancel {
        app.recovery.close();
    } else if submit && !app.recovery.is_sending {
        app.handle_recovery_submit();
    }
}
