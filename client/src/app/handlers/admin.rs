//! # Admin Dashboard Handlers
//!
//! Tab changes, modal saves and delete confirmations for the management screens. The
//! handlers are generic over [`ManagedEntity`] so every table shares one save/delete path.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use shared::{Category, Ingredient, Order, OrderStatus, Product, User};

use crate::app::{
    AdminFacades, AppEvent, BakeryApp, CategoryEditor, EntityEditor, IngredientEditor, OrderEditor,
    OrderStatusEditor, ProductEditor, Tasks, UserEditor, UserStatusView,
};
use crate::core::service::{ManagedEntity, UserDirectory};
use crate::facades::{DashboardTab, EntityFacade};

/// Disjoint borrows of the app that one management screen works with.
pub struct ScreenParts<'a, E: ManagedEntity, Ed> {
    pub facade: &'a EntityFacade<E>,
    pub editor: &'a mut Ed,
    pub error: &'a mut Option<String>,
    pub tasks: &'a Tasks,
}

/// Binds a managed entity to its facade and edit buffer inside [`BakeryApp`].
pub trait AdminScreen: ManagedEntity {
    type Editor: EntityEditor<Self>;

    fn parts(app: &mut BakeryApp) -> ScreenParts<'_, Self, Self::Editor>;

    /// Follow-up work once a save or delete went through.
    fn after_change(_admin: &AdminFacades) -> BoxFuture<'static, ()> {
        Box::pin(async {})
    }
}

fn refresh_stats(admin: &AdminFacades) -> BoxFuture<'static, ()> {
    let dashboard = admin.dashboard.clone();
    Box::pin(async move { dashboard.refresh_stats().await })
}

impl AdminScreen for User {
    type Editor = UserEditor;

    fn parts(app: &mut BakeryApp) -> ScreenParts<'_, Self, UserEditor> {
        ScreenParts {
            facade: &app.admin.users,
            editor: &mut app.editors.user,
            error: &mut app.editors.error,
            tasks: &app.tasks,
        }
    }

    fn after_change(admin: &AdminFacades) -> BoxFuture<'static, ()> {
        refresh_stats(admin)
    }
}

impl AdminScreen for Product {
    type Editor = ProductEditor;

    fn parts(app: &mut BakeryApp) -> ScreenParts<'_, Self, ProductEditor> {
        ScreenParts {
            facade: &app.admin.products,
            editor: &mut app.editors.product,
            error: &mut app.editors.error,
            tasks: &app.tasks,
        }
    }

    fn after_change(admin: &AdminFacades) -> BoxFuture<'static, ()> {
        refresh_stats(admin)
    }
}

impl AdminScreen for Category {
    type Editor = CategoryEditor;

    fn parts(app: &mut BakeryApp) -> ScreenParts<'_, Self, CategoryEditor> {
        ScreenParts {
            facade: &app.admin.categories,
            editor: &mut app.editors.category,
            error: &mut app.editors.error,
            tasks: &app.tasks,
        }
    }

    fn after_change(admin: &AdminFacades) -> BoxFuture<'static, ()> {
        refresh_stats(admin)
    }
}

impl AdminScreen for Ingredient {
    type Editor = IngredientEditor;

    fn parts(app: &mut BakeryApp) -> ScreenParts<'_, Self, IngredientEditor> {
        ScreenParts {
            facade: &app.admin.ingredients,
            editor: &mut app.editors.ingredient,
            error: &mut app.editors.error,
            tasks: &app.tasks,
        }
    }

    fn after_change(admin: &AdminFacades) -> BoxFuture<'static, ()> {
        refresh_stats(admin)
    }
}

impl AdminScreen for Order {
    type Editor = OrderEditor;

    fn parts(app: &mut BakeryApp) -> ScreenParts<'_, Self, OrderEditor> {
        ScreenParts {
            facade: app.admin.orders.orders(),
            editor: &mut app.editors.order,
            error: &mut app.editors.error,
            tasks: &app.tasks,
        }
    }
}

impl AdminScreen for OrderStatus {
    type Editor = OrderStatusEditor;

    fn parts(app: &mut BakeryApp) -> ScreenParts<'_, Self, OrderStatusEditor> {
        ScreenParts {
            facade: &app.admin.order_statuses,
            editor: &mut app.editors.order_status,
            error: &mut app.editors.error,
            tasks: &app.tasks,
        }
    }

    /// Order rows show status names, so the lookup is reloaded.
    fn after_change(admin: &AdminFacades) -> BoxFuture<'static, ()> {
        let orders = admin.orders.clone();
        Box::pin(async move { orders.load_statuses().await })
    }
}

enum Save<E: ManagedEntity> {
    Create(E::Draft),
    Update(E::Id, E::Patch),
}

fn load<E: ManagedEntity>(tasks: &Tasks, facade: &EntityFacade<E>) {
    let facade = facade.clone();
    tasks.run(async move {
        let _ = facade.load().await;
    });
}

/// Switch tabs and load the data that tab shows.
pub(crate) fn handle_tab_change(admin: &AdminFacades, tasks: &Tasks, tab: DashboardTab) {
    admin.dashboard.set_active_tab(tab);

    match tab {
        DashboardTab::Overview => {
            let dashboard = admin.dashboard.clone();
            tasks.run(async move { dashboard.refresh_stats().await });
        }
        DashboardTab::Users => load(tasks, &admin.users),
        DashboardTab::Products => {
            load(tasks, &admin.products);
            // category names for the table and the product form
            load(tasks, &admin.categories);
        }
        DashboardTab::Categories => load(tasks, &admin.categories),
        DashboardTab::Ingredients => load(tasks, &admin.ingredients),
        DashboardTab::Orders => {
            let orders = admin.orders.clone();
            tasks.run(async move {
                let _ = orders.load().await;
            });
        }
    }
}

pub(crate) fn handle_open_create<E, Ed>(facade: &EntityFacade<E>, editor: &mut Ed, error: &mut Option<String>)
where
    E: ManagedEntity,
    Ed: EntityEditor<E>,
{
    *editor = Ed::default();
    *error = None;
    facade.open_create();
}

pub(crate) fn handle_open_edit<E, Ed>(facade: &EntityFacade<E>, editor: &mut Ed, error: &mut Option<String>, item: E)
where
    E: ManagedEntity,
    Ed: EntityEditor<E>,
{
    *editor = Ed::from_entity(&item);
    *error = None;
    facade.open_edit(item);
}

/// Validate the edit buffer and create or update through the facade.
///
/// Validation failures stay in `error` and nothing is sent. `after_success` runs only
/// when the backend accepted the change.
pub(crate) fn handle_save<E, Ed, F>(
    facade: &EntityFacade<E>,
    editor: &Ed,
    error: &mut Option<String>,
    tasks: &Tasks,
    after_success: F,
) where
    E: ManagedEntity,
    Ed: EntityEditor<E>,
    F: Future<Output = ()> + Send + 'static,
{
    let save = match editor.editing_id() {
        Some(id) => editor.to_patch().map(|patch| Save::<E>::Update(id, patch)),
        None => editor.to_draft().map(Save::<E>::Create),
    };

    let save = match save {
        Ok(save) => save,
        Err(err) => {
            *error = Some(err.user_message());
            return;
        }
    };
    *error = None;

    let facade = facade.clone();
    tasks.run(async move {
        let saved = match save {
            Save::Create(draft) => facade.create(draft).await.is_ok(),
            Save::Update(id, patch) => facade.update(id, patch).await.is_ok(),
        };
        if saved {
            after_success.await;
        }
    });
}

/// Delete the item awaiting confirmation, if any.
pub(crate) fn handle_delete_confirm<E, F>(facade: &EntityFacade<E>, tasks: &Tasks, after_success: F)
where
    E: ManagedEntity,
    F: Future<Output = ()> + Send + 'static,
{
    let Some(id) = facade.snapshot().deleting_id else {
        return;
    };

    let facade = facade.clone();
    tasks.run(async move {
        if facade.delete(id).await.is_ok() {
            after_success.await;
        }
    });
}

/// Open the detail modal and fetch the user's online status.
pub(crate) fn handle_user_detail(
    users: &EntityFacade<User>,
    directory: &Arc<dyn UserDirectory>,
    view: &mut UserStatusView,
    tasks: &Tasks,
    user: User,
) {
    let user_id = user.id;
    users.select(user);

    if view.track(user_id) {
        let directory = directory.clone();
        tasks.report(async move {
            AppEvent::UserStatusLoaded {
                user_id,
                result: directory.user_status(user_id).await,
            }
        });
    }
}

/// Open the order status manager.
pub(crate) fn handle_open_status_manager(admin: &AdminFacades, tasks: &Tasks, open: &mut bool) {
    *open = true;
    load(tasks, &admin.order_statuses);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::services::auth::tests::MockAuthGateway;

    async fn eventually(mut check: impl FnMut() -> bool) {
        for _ in 0..100 {
            if check() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("condition never became true");
    }

    #[tokio::test]
    async fn test_invalid_editor_never_reaches_gateway() {
        let app = test_app(MockAuthGateway::default());
        let mut error = None;
        let editor = CategoryEditor {
            name: "ab".to_string(),
            ..CategoryEditor::default()
        };

        handle_save(&app.admin.categories, &editor, &mut error, app.tasks(), async {});

        assert_eq!(error.as_deref(), Some("Name must be at least 3 characters"));
        assert!(!app.admin.categories.snapshot().is_updating);
    }

    #[tokio::test]
    async fn test_create_then_delete_category() {
        let app = test_app(MockAuthGateway::default());
        let categories = app.admin.categories.clone();
        let mut editor = CategoryEditor::default();
        let mut error = Some("stale".to_string());

        handle_open_create(&categories, &mut editor, &mut error);
        assert!(categories.snapshot().creating);
        assert!(error.is_none());

        editor.name = "Breads".to_string();
        handle_save(&categories, &editor, &mut error, app.tasks(), async {});
        eventually(|| categories.items().iter().any(|c| c.name == "Breads")).await;
        assert!(!categories.snapshot().is_modal_open());

        let created = categories.items().into_iter().find(|c| c.name == "Breads").unwrap();
        categories.open_delete(created.id);
        handle_delete_confirm(&categories, app.tasks(), async {});
        eventually(|| categories.items().iter().all(|c| c.id != created.id)).await;
    }

    #[tokio::test]
    async fn test_status_change_refreshes_order_labels() {
        let app = test_app(MockAuthGateway::default());
        let orders = app.admin.orders.clone();
        let editor = OrderStatusEditor {
            id: None,
            status_name: "Baking".to_string(),
        };
        let mut error = None;

        let refresh = {
            let orders = orders.clone();
            async move { orders.load_statuses().await }
        };
        handle_save(&app.admin.order_statuses, &editor, &mut error, app.tasks(), refresh);

        eventually(|| orders.statuses().iter().any(|s| s.status_name == "Baking")).await;
    }

    #[tokio::test]
    async fn test_admin_screen_save_refreshes_stats() {
        let mut app = test_app(MockAuthGateway::default());

        app.handle_open_create::<Category>();
        app.editors.category.name = "Pastries".to_string();
        app.handle_save::<Category>();

        let dashboard = app.admin.dashboard.clone();
        eventually(|| dashboard.state().stats().total_categories == 2).await;
        assert!(app.editors.error.is_none());
    }

    #[tokio::test]
    async fn test_order_editor_cannot_create() {
        let mut app = test_app(MockAuthGateway::default());

        app.handle_open_create::<Order>();
        app.handle_save::<Order>();

        assert_eq!(
            app.editors.error.as_deref(),
            Some("Orders are created from the storefront")
        );
    }

    #[tokio::test]
    async fn test_tab_change_loads_tab_data() {
        let app = test_app(MockAuthGateway::default());

        handle_tab_change(&app.admin, app.tasks(), DashboardTab::Users);

        assert_eq!(app.admin.dashboard.state().active_tab(), DashboardTab::Users);
        eventually(|| app.admin.users.items().len() == 2).await;
    }
}
