//! # Admin Dashboard
//!
//! Tab selection and the overview counters, plus the facade the admin screen talks to.
//!
//! ```text
//! AdminDashboardFacade
//! ├── DashboardStateStore  - active tab + DashboardStats
//! ├── DashboardStatsLoader - counts users/products/categories/ingredients concurrently
//! └── AuthService          - greeting and logout
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use shared::{Category, Ingredient, Product, User};

use crate::core::service::CrudGateway;
use crate::services::auth::AuthService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Users,
    Products,
    Categories,
    Ingredients,
    Orders,
}

impl DashboardTab {
    pub fn all() -> [DashboardTab; 6] {
        [
            DashboardTab::Overview,
            DashboardTab::Users,
            DashboardTab::Products,
            DashboardTab::Categories,
            DashboardTab::Ingredients,
            DashboardTab::Orders,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Users => "Users",
            DashboardTab::Products => "Products",
            DashboardTab::Categories => "Categories",
            DashboardTab::Ingredients => "Ingredients",
            DashboardTab::Orders => "Orders",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_products: usize,
    pub total_categories: usize,
    pub total_ingredients: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    pub stats: DashboardStats,
}

/// Shared dashboard state.
#[derive(Debug, Clone, Default)]
pub struct DashboardStateStore {
    inner: Arc<RwLock<DashboardState>>,
}

impl DashboardStateStore {
    pub fn snapshot(&self) -> DashboardState {
        self.inner.read().clone()
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.inner.read().active_tab
    }

    pub fn stats(&self) -> DashboardStats {
        self.inner.read().stats.clone()
    }

    pub fn set_active_tab(&self, tab: DashboardTab) {
        self.inner.write().active_tab = tab;
    }

    pub fn update_stats(&self, f: impl FnOnce(&mut DashboardStats)) {
        f(&mut self.inner.write().stats);
    }

    /// Starting a load clears the previous error; finishing keeps it.
    pub fn set_stats_loading(&self, is_loading: bool) {
        let mut state = self.inner.write();
        state.stats.is_loading = is_loading;
        if is_loading {
            state.stats.error = None;
        }
    }

    pub fn set_stats_error(&self, error: Option<String>) {
        let mut state = self.inner.write();
        state.stats.error = error;
        state.stats.is_loading = false;
    }

    pub fn reset(&self) {
        *self.inner.write() = DashboardState::default();
    }
}

/// Computes the overview counters.
#[derive(Clone)]
pub struct DashboardStatsLoader {
    users: Arc<dyn CrudGateway<User>>,
    products: Arc<dyn CrudGateway<Product>>,
    categories: Arc<dyn CrudGateway<Category>>,
    ingredients: Arc<dyn CrudGateway<Ingredient>>,
    state: DashboardStateStore,
}

impl DashboardStatsLoader {
    pub fn new(
        users: Arc<dyn CrudGateway<User>>,
        products: Arc<dyn CrudGateway<Product>>,
        categories: Arc<dyn CrudGateway<Category>>,
        ingredients: Arc<dyn CrudGateway<Ingredient>>,
        state: DashboardStateStore,
    ) -> Self {
        Self {
            users,
            products,
            categories,
            ingredients,
            state,
        }
    }

    /// Count all four collections concurrently.
    ///
    /// Only a users failure is reported in `stats.error`; the other lists just log.
    pub async fn load(&self) {
        self.state.set_stats_loading(true);

        let (users, products, categories, ingredients) = futures::join!(
            self.users.list(),
            self.products.list(),
            self.categories.list(),
            self.ingredients.list(),
        );

        let mut users_error = None;
        self.state.update_stats(|stats| {
            match users {
                Ok(list) => stats.total_users = list.len(),
                Err(e) => {
                    tracing::error!(error = %e, "Error loading users for dashboard");
                    users_error = Some("Error loading users".to_string());
                }
            }
            match products {
                Ok(list) => stats.total_products = list.len(),
                Err(e) => tracing::error!(error = %e, "Error loading products for dashboard"),
            }
            match categories {
                Ok(list) => stats.total_categories = list.len(),
                Err(e) => tracing::error!(error = %e, "Error loading categories for dashboard"),
            }
            match ingredients {
                Ok(list) => stats.total_ingredients = list.len(),
                Err(e) => tracing::error!(error = %e, "Error loading ingredients for dashboard"),
            }
        });

        if users_error.is_some() {
            self.state.set_stats_error(users_error);
        }
        self.state.set_stats_loading(false);
    }
}

/// Everything the admin dashboard screen needs.
#[derive(Clone)]
pub struct AdminDashboardFacade {
    auth: AuthService,
    state: DashboardStateStore,
    stats: DashboardStatsLoader,
    initialized: Arc<AtomicBool>,
}

impl AdminDashboardFacade {
    pub fn new(auth: AuthService, state: DashboardStateStore, stats: DashboardStatsLoader) -> Self {
        Self {
            auth,
            state,
            stats,
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> &DashboardStateStore {
        &self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Load the stats the first time the dashboard opens; later calls do nothing.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::AcqRel) {
            return;
        }
        self.stats.load().await;
    }

    pub async fn refresh_stats(&self) {
        self.stats.load().await;
    }

    pub fn set_active_tab(&self, tab: DashboardTab) {
        self.state.set_active_tab(tab);
    }

    /// Greeting name: "First Last", or "Administrator" without a session.
    pub fn user_name(&self) -> String {
        match self.auth.current_user() {
            Some(user) => {
                let name = user.full_name();
                if name.is_empty() {
                    user.email
                } else {
                    name
                }
            }
            None => "Administrator".to_string(),
        }
    }

    /// Clear the session and the dashboard state. The caller navigates to login.
    pub fn logout(&self) {
        self.auth.logout();
        self.cleanup();
    }

    pub fn cleanup(&self) {
        self.state.reset();
        self.initialized.store(false, Ordering::Release);
    }
}
