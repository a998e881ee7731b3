//! # Application Orchestrator
//!
//! [`BakeryApp`] wires the session, router, facades and screen-local forms together and
//! implements [`eframe::App`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  BakeryApp                                                  │
//! │  - on_tick()      drains AppEvents, re-checks route guards  │
//! │  - handle_*()     user actions, delegated to `handlers`     │
//! │  - ui::render()   draws the current route from snapshots    │
//! └───────────────┬─────────────────────────▲───────────────────┘
//!                 │ Tasks::run / report     │ async_channel (AppEvent)
//! ┌───────────────▼─────────────────────────┴───────────────────┐
//! │              Tokio runtime (utils::runtime)                 │
//! │  facade.load() / create() / ...  write facade state         │
//! │  auth.login() / check_authentication()  send AppEvents      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Facade work writes straight into the facade's `Arc<RwLock<_>>`; only results that
//! need the router or the login form travel back as [`AppEvent`]s. Every spawned task
//! requests a repaint when it finishes so the next frame shows the new state.

mod editors;
mod event_handler;
mod events;
mod handlers;
mod state;

pub use editors::*;
pub use events::AppEvent;
pub use handlers::admin::{AdminScreen, ScreenParts};
pub use state::*;

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use async_channel::{unbounded, Receiver, Sender};
use shared::{Category, Ingredient, Order, OrderStatus, Product, User};

use crate::core::config::ClientConfig;
use crate::core::error::Result;
use crate::core::service::{AuthGateway, CatalogSearch, CrudGateway, UserDirectory};
use crate::facades::{
    AdminDashboardFacade, CustomerDashboardFacade, DashboardStateStore, DashboardStatsLoader, DashboardTab,
    EntityFacade, OrderManagementFacade,
};
use crate::routing::{Route, Router};
use crate::services::{ApiClient, AuthService, AuthSession, NotificationCenter};
use crate::utils::runtime;

/// Backend gateways the app talks to. Production code fills every slot with the same
/// [`ApiClient`]; tests plug in in-memory mocks.
#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<dyn AuthGateway>,
    pub users: Arc<dyn CrudGateway<User>>,
    pub directory: Arc<dyn UserDirectory>,
    pub products: Arc<dyn CrudGateway<Product>>,
    pub catalog: Arc<dyn CatalogSearch>,
    pub categories: Arc<dyn CrudGateway<Category>>,
    pub ingredients: Arc<dyn CrudGateway<Ingredient>>,
    pub orders: Arc<dyn CrudGateway<Order>>,
    pub order_statuses: Arc<dyn CrudGateway<OrderStatus>>,
}

impl AppServices {
    pub fn from_client(client: &ApiClient) -> Self {
        let client = Arc::new(client.clone());
        Self {
            auth: client.clone(),
            users: client.clone(),
            directory: client.clone(),
            products: client.clone(),
            catalog: client.clone(),
            categories: client.clone(),
            ingredients: client.clone(),
            orders: client.clone(),
            order_statuses: client,
        }
    }
}

/// Facades behind the admin dashboard.
#[derive(Clone)]
pub struct AdminFacades {
    pub dashboard: AdminDashboardFacade,
    pub users: EntityFacade<User>,
    pub products: EntityFacade<Product>,
    pub categories: EntityFacade<Category>,
    pub ingredients: EntityFacade<Ingredient>,
    pub orders: OrderManagementFacade,
    pub order_statuses: EntityFacade<OrderStatus>,
}

impl AdminFacades {
    fn new(services: &AppServices, auth: &AuthService, notifications: &NotificationCenter) -> Self {
        let state = DashboardStateStore::default();
        let stats = DashboardStatsLoader::new(
            services.users.clone(),
            services.products.clone(),
            services.categories.clone(),
            services.ingredients.clone(),
            state.clone(),
        );
        Self {
            dashboard: AdminDashboardFacade::new(auth.clone(), state, stats),
            users: EntityFacade::new(services.users.clone(), notifications.clone()),
            products: EntityFacade::new(services.products.clone(), notifications.clone()),
            categories: EntityFacade::new(services.categories.clone(), notifications.clone()),
            ingredients: EntityFacade::new(services.ingredients.clone(), notifications.clone()),
            orders: OrderManagementFacade::new(
                services.orders.clone(),
                services.order_statuses.clone(),
                notifications.clone(),
            ),
            order_statuses: EntityFacade::new(services.order_statuses.clone(), notifications.clone()),
        }
    }

    fn reset(&self) {
        self.dashboard.cleanup();
        self.users.reset();
        self.products.reset();
        self.categories.reset();
        self.ingredients.reset();
        self.orders.reset();
        self.order_statuses.reset();
    }
}

/// Spawns background work and wakes the UI when it finishes.
#[derive(Clone)]
pub struct Tasks {
    ctx: egui::Context,
    event_tx: Sender<AppEvent>,
}

impl Tasks {
    /// Run `future` on the runtime, then request a repaint.
    pub fn run<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let ctx = self.ctx.clone();
        runtime::spawn(async move {
            future.await;
            ctx.request_repaint();
        });
    }

    /// Run `future` and deliver its event to the main thread.
    pub fn report<F>(&self, future: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let tx = self.event_tx.clone();
        self.run(async move {
            let event = future.await;
            if tx.send(event).await.is_err() {
                tracing::warn!("Event channel closed, dropping event");
            }
        });
    }
}

/// Main application orchestrator.
pub struct BakeryApp {
    pub auth: AuthService,
    pub router: Router,
    pub notifications: NotificationCenter,
    pub admin: AdminFacades,
    pub customer: CustomerDashboardFacade,
    directory: Arc<dyn UserDirectory>,

    pub login: LoginForm,
    pub recovery: RecoveryForm,
    pub editors: Editors,
    pub user_status: UserStatusView,
    pub checkout: CheckoutForm,
    /// The startup `/me` check has answered.
    pub session_checked: bool,

    /// Receives `AppEvent`s from spawned tasks; polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,
    tasks: Tasks,
}

impl BakeryApp {
    pub fn new(services: AppServices, session: AuthSession, ctx: egui::Context) -> Self {
        let notifications = NotificationCenter::new();
        let auth = AuthService::new(services.auth.clone(), session);
        let admin = AdminFacades::new(&services, &auth, &notifications);
        let customer = CustomerDashboardFacade::new(
            services.products.clone(),
            services.catalog.clone(),
            services.orders.clone(),
            auth.clone(),
            notifications.clone(),
        );
        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized");

        Self {
            auth,
            router: Router::new(),
            notifications,
            admin,
            customer,
            directory: services.directory,
            login: LoginForm::default(),
            recovery: RecoveryForm::default(),
            editors: Editors::default(),
            user_status: UserStatusView::default(),
            checkout: CheckoutForm::default(),
            session_checked: false,
            event_rx,
            tasks: Tasks { ctx, event_tx },
        }
    }

    /// Build the HTTP client from `config` and start the session check.
    pub fn connect(config: ClientConfig, ctx: egui::Context) -> Result<Self> {
        let session = AuthSession::new();
        let client = ApiClient::new(config, session.clone())?;
        let app = Self::new(AppServices::from_client(&client), session, ctx);
        app.start();
        Ok(app)
    }

    /// Ask the backend for an existing session (cookie based).
    pub fn start(&self) {
        handlers::auth::handle_session_check(&self.auth, &self.tasks);
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    pub fn tasks(&self) -> &Tasks {
        &self.tasks
    }

    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.tasks.event_tx.clone()
    }

    /// Called every frame: apply finished background work and re-run the guards of the
    /// current route (the session can be cleared by any task).
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: processed events");
        }

        let current = self.router.current();
        if current != Route::Login && !self.auth.is_authenticated() {
            self.navigate(current);
        }

        self.notifications.prune_expired(Instant::now());
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    pub fn navigate(&mut self, target: Route) -> Route {
        handlers::navigation::handle_navigate(self, target)
    }

    pub fn handle_login_submit(&mut self) {
        handlers::auth::handle_login_submit(&self.auth, &mut self.login, &self.tasks);
    }

    pub fn handle_recovery_submit(&mut self) {
        handlers::auth::handle_recovery_submit(&self.auth, &mut self.recovery, &self.tasks);
    }

    pub fn handle_logout(&mut self) {
        handlers::auth::handle_logout(self);
    }

    pub fn handle_tab_change(&mut self, tab: DashboardTab) {
        handlers::admin::handle_tab_change(&self.admin, &self.tasks, tab);
    }

    pub fn handle_open_create<E: AdminScreen>(&mut self) {
        let parts = E::parts(self);
        handlers::admin::handle_open_create(parts.facade, parts.editor, parts.error);
    }

    pub fn handle_open_edit<E: AdminScreen>(&mut self, item: E) {
        let parts = E::parts(self);
        handlers::admin::handle_open_edit(parts.facade, parts.editor, parts.error, item);
    }

    pub fn handle_close_edit<E: AdminScreen>(&mut self) {
        let parts = E::parts(self);
        *parts.error = None;
        parts.facade.close_edit();
    }

    pub fn handle_save<E: AdminScreen>(&mut self) {
        let after = E::after_change(&self.admin);
        let parts = E::parts(self);
        handlers::admin::handle_save(parts.facade, &*parts.editor, parts.error, parts.tasks, after);
    }

    pub fn handle_delete_confirm<E: AdminScreen>(&mut self) {
        let after = E::after_change(&self.admin);
        let parts = E::parts(self);
        handlers::admin::handle_delete_confirm(parts.facade, parts.tasks, after);
    }

    pub fn handle_open_status_manager(&mut self) {
        handlers::admin::handle_open_status_manager(
            &self.admin,
            &self.tasks,
            &mut self.editors.status_manager_open,
        );
    }

    pub fn handle_close_status_manager(&mut self) {
        self.editors.status_manager_open = false;
        self.admin.order_statuses.close_edit();
        self.admin.order_statuses.close_delete();
    }

    /// Reload the current admin tab.
    pub fn handle_refresh(&mut self) {
        let tab = self.admin.dashboard.state().active_tab();
        self.handle_tab_change(tab);
    }

    /// Reload the storefront catalog.
    pub fn handle_reload_catalog(&mut self) {
        self.checkout.catalog_query.clear();
        let customer = self.customer.clone();
        self.tasks.run(async move {
            let _ = customer.load_products().await;
        });
    }

    pub fn handle_user_detail(&mut self, user: User) {
        handlers::admin::handle_user_detail(
            &self.admin.users,
            &self.directory,
            &mut self.user_status,
            &self.tasks,
            user,
        );
    }

    pub fn handle_close_user_detail(&mut self) {
        self.admin.users.close_detail();
        self.user_status.clear();
    }

    pub fn handle_checkout(&mut self) {
        handlers::customer::handle_checkout(&self.customer, &self.checkout, &self.tasks);
    }

    pub fn handle_catalog_search(&mut self) {
        handlers::customer::handle_catalog_search(&self.customer, &self.checkout, &self.tasks);
    }

    /// Reset every screen after logout.
    fn reset_screens(&mut self) {
        self.admin.reset();
        self.customer.reset();
        self.login = LoginForm::default();
        self.recovery = RecoveryForm::default();
        self.editors = Editors::default();
        self.user_status.clear();
        self.checkout = CheckoutForm::default();
    }
}

impl eframe::App for BakeryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.on_tick();

        crate::ui::render(ctx, self);

        if let Some(expiry) = self.notifications.next_expiry() {
            ctx.request_repaint_after(expiry.saturating_duration_since(Instant::now()));
        }
    }
}
