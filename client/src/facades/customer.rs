//! # Customer Dashboard
//!
//! Storefront state: the product catalog, a local cart and checkout.
//!
//! The cart lives only in memory. Checkout sends one order with every cart line in
//! the pending status and empties the cart on success.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{Order, OrderDraft, OrderItemDraft, Product, PENDING_STATUS_ID};

use crate::core::error::{AppError, Result};
use crate::core::service::{CatalogSearch, CrudGateway};
use crate::services::auth::AuthService;
use crate::services::notifications::NotificationCenter;

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerState {
    pub products: Vec<Product>,
    pub cart: Vec<CartItem>,
    pub is_loading: bool,
    pub is_creating_order: bool,
    pub error: Option<String>,
    pub search_term: String,
}

impl CustomerState {
    pub fn filtered_products(&self) -> Vec<Product> {
        let search = self.search_term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                search.is_empty()
                    || product.name.to_lowercase().contains(&search)
                    || product.description.to_lowercase().contains(&search)
            })
            .cloned()
            .collect()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.iter().map(CartItem::subtotal).sum()
    }

    pub fn cart_item_count(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }
}

/// An order claimed by [`CustomerDashboardFacade::begin_order`] and not yet sent.
#[derive(Debug)]
pub struct PendingOrder {
    user_id: i64,
    draft: OrderDraft,
}

#[derive(Clone)]
pub struct CustomerDashboardFacade {
    products: Arc<dyn CrudGateway<Product>>,
    search: Arc<dyn CatalogSearch>,
    orders: Arc<dyn CrudGateway<Order>>,
    auth: AuthService,
    notifications: NotificationCenter,
    state: Arc<RwLock<CustomerState>>,
}

impl CustomerDashboardFacade {
    pub fn new(
        products: Arc<dyn CrudGateway<Product>>,
        search: Arc<dyn CatalogSearch>,
        orders: Arc<dyn CrudGateway<Order>>,
        auth: AuthService,
        notifications: NotificationCenter,
    ) -> Self {
        Self {
            products,
            search,
            orders,
            auth,
            notifications,
            state: Arc::new(RwLock::new(CustomerState::default())),
        }
    }

    pub fn snapshot(&self) -> CustomerState {
        self.state.read().clone()
    }

    pub fn filtered_products(&self) -> Vec<Product> {
        self.state.read().filtered_products()
    }

    pub fn cart_total(&self) -> f64 {
        self.state.read().cart_total()
    }

    pub fn cart_item_count(&self) -> u32 {
        self.state.read().cart_item_count()
    }

    /// Load the full catalog. Failures are shown inline, not as a toast.
    pub async fn load_products(&self) -> Result<()> {
        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
        }

        let result = self.products.list().await;
        let mut state = self.state.write();
        state.is_loading = false;
        match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Catalog loaded");
                state.products = products;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Error loading catalog");
                state.error = Some("Error loading products".to_string());
                Err(err)
            }
        }
    }

    /// Replace the catalog with server-side search results. A blank term reloads
    /// the full catalog.
    pub async fn search_catalog(&self, term: &str) -> Result<()> {
        let term = term.trim();
        if term.is_empty() {
            return self.load_products().await;
        }

        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
        }

        let result = self.search.search_products(term).await;
        let mut state = self.state.write();
        state.is_loading = false;
        match result {
            Ok(products) => {
                state.products = products;
                state.search_term.clear();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, term, "Catalog search failed");
                state.error = Some("Error searching products".to_string());
                Err(err)
            }
        }
    }

    pub fn set_search_term(&self, term: &str) {
        self.state.write().search_term = term.to_string();
    }

    /// Add one unit of `product`, merging with an existing line.
    pub fn add_to_cart(&self, product: &Product) {
        {
            let mut state = self.state.write();
            match state.cart.iter_mut().find(|item| item.product.id == product.id) {
                Some(item) => item.quantity += 1,
                None => state.cart.push(CartItem {
                    product: product.clone(),
                    quantity: 1,
                }),
            }
        }
        self.notifications
            .success("Product added", &format!("{} added to cart", product.name));
    }

    pub fn remove_from_cart(&self, product_id: i64) {
        self.state.write().cart.retain(|item| item.product.id != product_id);
    }

    /// Set a line's quantity; zero or less removes the line.
    pub fn update_quantity(&self, product_id: i64, quantity: i64) {
        let Ok(quantity) = u32::try_from(quantity) else {
            if quantity <= 0 {
                self.remove_from_cart(product_id);
            }
            return;
        };
        if quantity == 0 {
            self.remove_from_cart(product_id);
            return;
        }

        if let Some(item) = self
            .state
            .write()
            .cart
            .iter_mut()
            .find(|item| item.product.id == product_id)
        {
            item.quantity = quantity;
        }
    }

    pub fn clear_cart(&self) {
        self.state.write().cart.clear();
    }

    /// Place an order with the whole cart.
    ///
    /// Requires a logged-in user and a non-empty cart. On success the cart is emptied.
    pub async fn create_order(&self, special_instructions: &str) -> Result<Order> {
        let pending = self.begin_order(special_instructions)?;
        self.submit_order(pending).await
    }

    /// Validate the cart and mark an order as in flight.
    ///
    /// Fails with [`AppError::State`] while another order is still being placed, so a
    /// second click cannot send the cart twice.
    pub fn begin_order(&self, special_instructions: &str) -> Result<PendingOrder> {
        let user = self
            .auth
            .current_user()
            .ok_or_else(|| AppError::State("You must be logged in to place an order".to_string()))?;

        let mut state = self.state.write();
        if state.is_creating_order {
            return Err(AppError::State("An order is already being placed".to_string()));
        }
        if state.cart.is_empty() {
            drop(state);
            self.notifications.warning("Empty cart", "Add products before ordering");
            return Err(AppError::Validation("Your cart is empty".to_string()));
        }
        state.is_creating_order = true;

        let notes = special_instructions.trim();
        let draft = OrderDraft {
            user_id: user.id,
            status_id: PENDING_STATUS_ID,
            total_amount: state.cart_total(),
            special_instructions: (!notes.is_empty()).then(|| notes.to_string()),
            items: state
                .cart
                .iter()
                .map(|item| OrderItemDraft {
                    product_id: item.product.id,
                    quantity: item.quantity,
                    price_per_unit: item.product.price,
                })
                .collect(),
        };
        Ok(PendingOrder { user_id: user.id, draft })
    }

    /// Send an order prepared by [`Self::begin_order`].
    pub async fn submit_order(&self, pending: PendingOrder) -> Result<Order> {
        let PendingOrder { user_id, draft } = pending;

        match self.orders.create(draft).await {
            Ok(order) => {
                tracing::info!(order_id = order.id, user_id, "Order placed");
                {
                    let mut state = self.state.write();
                    state.cart.clear();
                    state.is_creating_order = false;
                }
                self.notifications
                    .success("Order created", "Your order has been placed successfully");
                Ok(order)
            }
            Err(err) => {
                tracing::warn!(error = %err, user_id, "Order creation failed");
                self.state.write().is_creating_order = false;
                self.notifications.error("Error", "Could not create order");
                Err(err)
            }
        }
    }

    pub fn reset(&self) {
        *self.state.write() = CustomerState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facades::orders::tests::order_gateway;
    use crate::facades::entity::tests::MemoryGateway;
    use crate::services::auth::tests::{logged_in_service, MockAuthGateway};
    use crate::services::auth::AuthSession;
    use crate::services::notifications::NotificationKind;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::{ProductDraft, ProductPatch, Role};

    fn product(id: i64, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            price,
            image: None,
            category_id: 1,
            created_at: None,
            updated_at: None,
        }
    }

    fn product_gateway(items: Vec<Product>) -> MemoryGateway<Product> {
        MemoryGateway::new(
            items,
            |id, draft: ProductDraft| Product {
                id,
                name: draft.name,
                description: draft.description,
                price: draft.price,
                image: draft.image,
                category_id: draft.category_id,
                created_at: None,
                updated_at: None,
            },
            |_, _: ProductPatch| {},
        )
    }

    #[derive(Default)]
    struct MockSearch {
        terms: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CatalogSearch for MockSearch {
        async fn search_products(&self, term: &str) -> Result<Vec<Product>> {
            self.terms.lock().push(term.to_string());
            Ok(vec![product(9, "Searched", 1.0)])
        }
    }

    struct Fixture {
        facade: CustomerDashboardFacade,
        notifications: NotificationCenter,
        orders: Arc<MemoryGateway<Order>>,
        search: Arc<MockSearch>,
    }

    fn fixture(auth: AuthService, orders: MemoryGateway<Order>) -> Fixture {
        let notifications = NotificationCenter::new();
        let orders = Arc::new(orders);
        let search = Arc::new(MockSearch::default());
        let facade = CustomerDashboardFacade::new(
            Arc::new(product_gateway(vec![product(1, "Brownie", 2.5), product(2, "Flan", 4.0)])),
            search.clone(),
            orders.clone(),
            auth,
            notifications.clone(),
        );
        Fixture {
            facade,
            notifications,
            orders,
            search,
        }
    }

    #[tokio::test]
    async fn test_cart_totals_and_quantities() {
        let f = fixture(logged_in_service(Role::Customer), order_gateway(vec![]));
        f.facade.load_products().await.unwrap();
        let products = f.facade.snapshot().products;

        f.facade.add_to_cart(&products[0]);
        f.facade.add_to_cart(&products[0]);
        f.facade.add_to_cart(&products[1]);

        assert_eq!(f.facade.cart_item_count(), 3);
        assert_eq!(f.facade.cart_total(), 9.0);
        assert_eq!(f.notifications.active()[0].message, "Brownie added to cart");

        f.facade.update_quantity(2, 3);
        assert_eq!(f.facade.cart_total(), 17.0);

        f.facade.update_quantity(1, 0);
        assert_eq!(f.facade.snapshot().cart.len(), 1);
        f.facade.update_quantity(2, -4);
        assert!(f.facade.snapshot().cart.is_empty());
    }

    #[tokio::test]
    async fn test_create_order_sends_cart_and_clears_it() {
        let f = fixture(logged_in_service(Role::Customer), order_gateway(vec![]));
        f.facade.add_to_cart(&product(1, "Brownie", 2.5));
        f.facade.add_to_cart(&product(1, "Brownie", 2.5));

        let order = f.facade.create_order("  extra icing ").await.unwrap();

        assert_eq!(order.status_id, PENDING_STATUS_ID);
        assert_eq!(order.total_amount, 5.0);
        assert_eq!(order.special_instructions.as_deref(), Some("extra icing"));
        assert_eq!(f.orders.items.lock().len(), 1);

        let state = f.facade.snapshot();
        assert!(state.cart.is_empty());
        assert!(!state.is_creating_order);
        assert_eq!(f.notifications.active().last().unwrap().title, "Order created");
    }

    #[tokio::test]
    async fn test_create_order_failure_keeps_cart() {
        let base = order_gateway(vec![]);
        let failing = MemoryGateway::failing(
            AppError::Api {
                status: 500,
                message: "boom".to_string(),
            },
            base.build,
            base.apply,
        );
        let f = fixture(logged_in_service(Role::Customer), failing);
        f.facade.add_to_cart(&product(1, "Brownie", 2.5));

        assert!(f.facade.create_order("").await.is_err());

        let state = f.facade.snapshot();
        assert_eq!(state.cart.len(), 1);
        assert!(!state.is_creating_order);
        let last = f.notifications.active().pop().unwrap();
        assert_eq!(last.kind, NotificationKind::Error);
        assert_eq!(last.message, "Could not create order");
    }

    #[tokio::test]
    async fn test_create_order_requires_user_and_items() {
        let logged_out = AuthService::new(Arc::new(MockAuthGateway::default()), AuthSession::new());
        let f = fixture(logged_out, order_gateway(vec![]));
        f.facade.add_to_cart(&product(1, "Brownie", 2.5));
        assert!(matches!(f.facade.create_order("").await, Err(AppError::State(_))));
        assert!(f.orders.items.lock().is_empty());

        let f = fixture(logged_in_service(Role::Customer), order_gateway(vec![]));
        assert!(matches!(f.facade.create_order("").await, Err(AppError::Validation(_))));
        assert_eq!(f.notifications.active()[0].kind, NotificationKind::Warning);
    }

    #[tokio::test]
    async fn test_second_order_refused_while_first_in_flight() {
        let f = fixture(logged_in_service(Role::Customer), order_gateway(vec![]));
        f.facade.add_to_cart(&product(1, "Brownie", 2.5));

        let pending = f.facade.begin_order("").unwrap();
        assert!(f.facade.snapshot().is_creating_order);
        assert!(matches!(f.facade.begin_order(""), Err(AppError::State(_))));

        f.facade.submit_order(pending).await.unwrap();
        assert_eq!(f.orders.items.lock().len(), 1);
        assert!(!f.facade.snapshot().is_creating_order);
    }

    #[tokio::test]
    async fn test_local_filter_and_remote_search() {
        let f = fixture(logged_in_service(Role::Customer), order_gateway(vec![]));
        f.facade.load_products().await.unwrap();

        f.facade.set_search_term("FLAN");
        assert_eq!(f.facade.filtered_products().len(), 1);

        f.facade.search_catalog(" choc ").await.unwrap();
        assert_eq!(f.search.terms.lock().as_slice(), ["choc"]);
        assert_eq!(f.facade.filtered_products()[0].name, "Searched");

        f.facade.search_catalog("   ").await.unwrap();
        assert_eq!(f.facade.snapshot().products.len(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_sets_inline_error_only() {
        let base = product_gateway(vec![]);
        let notifications = NotificationCenter::new();
        let facade = CustomerDashboardFacade::new(
            Arc::new(MemoryGateway::failing(AppError::Network("down".to_string()), base.build, base.apply)),
            Arc::new(MockSearch::default()),
            Arc::new(order_gateway(vec![])),
            logged_in_service(Role::Customer),
            notifications.clone(),
        );

        assert!(facade.load_products().await.is_err());
        let state = facade.snapshot();
        assert_eq!(state.error.as_deref(), Some("Error loading products"));
        assert!(!state.is_loading);
        assert!(notifications.active().is_empty());
    }
}
