//! Users tab: list with role/status filters, create/edit modal, detail modal with the
//! online status.

use shared::{Role, User};

use crate::app::{BakeryApp, OnlineStatus, UserEditor};
use crate::facades::{EntityFacade, ManagementState, StatusFilter};
use crate::ui::theme::Theme;
use crate::ui::widgets::tables::{self, RowAction};
use crate::ui::widgets::{forms, modal};
use crate::utils::validation::MIN_PASSWORD_LENGTH;

use super::common;

fn role_label(role: Option<Role>) -> &'static str {
    match role {
        None => "All roles",
        Some(Role::Admin) => "Administrator",
        Some(Role::Customer) => "Customer",
        Some(Role::Unknown) => "Unknown",
    }
}

pub fn render(ui: &mut egui::Ui, app: &mut BakeryApp, theme: &Theme) {
    let facade = app.admin.users.clone();
    let state = facade.snapshot();

    let toolbar = common::render_toolbar(ui, &facade, &state, Some("New user"), theme, |ui| {
        render_filters(ui, &facade, &state)
    });

    let rows = state.filtered();
    let (draw_table, retry) = common::render_load_state(ui, &state, rows.len(), theme);

    let mut clicked: Option<(RowAction, User)> = None;
    if draw_table {
        tables::table(ui, "users_table", 4)
            .header(24.0, |mut header| {
                tables::header_cells(&mut header, &["Name", "Email", "Role", "Status", "Actions"], theme)
            })
            .body(|body| {
                body.rows(tables::ROW_HEIGHT, rows.len(), |mut row| {
                    let user = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(user.full_name());
                    });
                    row.col(|ui| {
                        ui.label(&user.email);
                    });
                    row.col(|ui| {
                        ui.label(role_label(Some(user.role)));
                    });
                    row.col(|ui| {
                        let (text, color) = if user.active() {
                            ("Active", theme.active_color(true))
                        } else {
                            ("Inactive", theme.active_color(false))
                        };
                        ui.colored_label(color, text);
                    });
                    row.col(|ui| {
                        let actions = [RowAction::View, RowAction::Edit, RowAction::Delete];
                        if let Some(action) = tables::row_actions(ui, &actions, state.is_deleting) {
                            clicked = Some((action, user.clone()));
                        }
                    });
                });
            });
    }

    if toolbar.refresh || retry {
        app.handle_refresh();
    }
    if toolbar.create {
        app.handle_open_create::<User>();
    }
    match clicked {
        Some((RowAction::View, user)) => app.handle_user_detail(user),
        Some((RowAction::Edit, user)) => app.handle_open_edit(user),
        Some((RowAction::Delete, user)) => facade.open_delete(user.id),
        None => {}
    }
}

fn render_filters(ui: &mut egui::Ui, facade: &EntityFacade<User>, state: &ManagementState<User>) {
    let mut filter = state.filter;

    egui::ComboBox::from_id_salt("user_role_filter")
        .selected_text(role_label(filter.role))
        .show_ui(ui, |ui| {
            for role in [None, Some(Role::Admin), Some(Role::Customer)] {
                ui.selectable_value(&mut filter.role, role, role_label(role));
            }
        });

    egui::ComboBox::from_id_salt("user_status_filter")
        .selected_text(filter.status.label())
        .show_ui(ui, |ui| {
            for status in StatusFilter::all() {
                ui.selectable_value(&mut filter.status, status, status.label());
            }
        });

    if filter != state.filter {
        facade.set_filter(filter);
    }
}

pub fn render_modals(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    common::render_edit_modal::<User>(ctx, app, theme, render_fields);
    common::render_delete_confirm::<User>(ctx, app, |user| user.full_name());
    render_detail(ctx, app, theme);
}

fn render_fields(ui: &mut egui::Ui, editor: &mut UserEditor) {
    let creating = editor.id.is_none();

    forms::render_text_input(ui, "First name", &mut editor.first_name, "", false);
    forms::render_text_input(ui, "Last name", &mut editor.last_name, "", false);

    // The backend does not accept email changes
    ui.add_enabled_ui(creating, |ui| {
        forms::render_text_input(ui, "Email", &mut editor.email, "name@example.com", false);
    });
    forms::render_text_input(ui, "Phone", &mut editor.phone, "Optional", false);

    if creating {
        let hint = format!("At least {} characters", MIN_PASSWORD_LENGTH);
        forms::render_text_input(ui, "Password", &mut editor.password, &hint, true);
    }

    ui.label("Role");
    egui::ComboBox::from_id_salt("user_role_edit")
        .selected_text(role_label(Some(editor.role)))
        .show_ui(ui, |ui| {
            for role in [Role::Admin, Role::Customer] {
                ui.selectable_value(&mut editor.role, role, role_label(Some(role)));
            }
        });

    if !creating {
        ui.checkbox(&mut editor.is_active, "Active");
    }
}

fn render_detail(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    let Some(user) = app.admin.users.snapshot().selected else {
        return;
    };
    let status = app.user_status.status.clone();

    let open = modal::render_modal(ctx, "User details", 360.0, |ui| {
        egui::Grid::new("user_detail").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
            common::detail_row(ui, "Name", user.full_name(), theme);
            common::detail_row(ui, "Email", user.email.as_str(), theme);
            common::detail_row(ui, "Phone", user.phone_number.as_deref().unwrap_or("-"), theme);
            common::detail_row(ui, "Role", role_label(Some(user.role)), theme);
            common::detail_row(ui, "Active", if user.active() { "Yes" } else { "No" }, theme);
            common::detail_row(ui, "Created", common::timestamp(user.created_at.as_deref()), theme);

            ui.label(egui::RichText::new("Online").color(theme.dim));
            match &status {
                OnlineStatus::Unknown => {
                    ui.label("-");
                }
                OnlineStatus::Loading => {
                    ui.spinner();
                }
                OnlineStatus::Loaded(online) if online.is_online => {
                    ui.colored_label(theme.success, "Online");
                }
                OnlineStatus::Loaded(online) => {
                    let last_seen = online.last_seen.as_deref().or(user.last_seen.as_deref());
                    ui.colored_label(theme.dim, format!("Offline, last seen {}", common::timestamp(last_seen)));
                }
                OnlineStatus::Failed => {
                    ui.colored_label(theme.error, "Status unavailable");
                }
            }
            ui.end_row();
        });
    });

    if !open {
        app.handle_close_user_detail();
    }
}
