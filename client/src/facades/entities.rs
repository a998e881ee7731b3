//! Entity bindings for [`EntityFacade`](super::entity::EntityFacade): labels, search
//! fields and screen filters for every managed resource.

use shared::{
    Category, CategoryDraft, CategoryPatch, Ingredient, IngredientDraft, IngredientPatch, Order,
    OrderDraft, OrderPatch, OrderStatus, OrderStatusDraft, OrderStatusPatch, Product, ProductDraft,
    ProductPatch, Role, UpdateUserDto, User, UserDraft,
};

use crate::core::service::{EntityLabels, ManagedEntity};

fn contains(haystack: &str, search: &str) -> bool {
    search.is_empty() || haystack.to_lowercase().contains(search)
}

/// Active/inactive filter of the users screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn all() -> [StatusFilter; 3] {
        [StatusFilter::Any, StatusFilter::Active, StatusFilter::Inactive]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::Any => "All statuses",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub status: StatusFilter,
}

impl ManagedEntity for User {
    type Id = i64;
    type Filter = UserFilter;
    type Draft = UserDraft;
    type Patch = UpdateUserDto;

    const LABELS: EntityLabels = EntityLabels {
        singular: "User",
        plural: "users",
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, search: &str, filter: &UserFilter) -> bool {
        let matches_search = search.is_empty()
            || contains(&self.email, search)
            || contains(&self.first_name, search)
            || contains(&self.last_name, search);

        let matches_role = filter.role.is_none_or(|role| self.role == role);

        let matches_status = match filter.status {
            StatusFilter::Any => true,
            StatusFilter::Active => self.active(),
            StatusFilter::Inactive => !self.active(),
        };

        matches_search && matches_role && matches_status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductFilter {
    pub category_id: Option<i64>,
}

impl ManagedEntity for Product {
    type Id = i64;
    type Filter = ProductFilter;
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    const LABELS: EntityLabels = EntityLabels {
        singular: "Product",
        plural: "products",
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, search: &str, filter: &ProductFilter) -> bool {
        let matches_search = search.is_empty() || contains(&self.name, search) || contains(&self.description, search);
        let matches_category = filter.category_id.is_none_or(|id| self.category_id == id);
        matches_search && matches_category
    }
}

impl ManagedEntity for Category {
    type Id = i64;
    type Filter = ();
    type Draft = CategoryDraft;
    type Patch = CategoryPatch;

    const LABELS: EntityLabels = EntityLabels {
        singular: "Category",
        plural: "categories",
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, search: &str, _filter: &()) -> bool {
        contains(&self.name, search)
    }
}

impl ManagedEntity for Ingredient {
    type Id = i64;
    type Filter = ();
    type Draft = IngredientDraft;
    type Patch = IngredientPatch;

    const LABELS: EntityLabels = EntityLabels {
        singular: "Ingredient",
        plural: "ingredients",
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, search: &str, _filter: &()) -> bool {
        contains(&self.name, search)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderFilter {
    pub status_id: Option<i64>,
}

impl ManagedEntity for Order {
    type Id = i64;
    type Filter = OrderFilter;
    type Draft = OrderDraft;
    type Patch = OrderPatch;

    const LABELS: EntityLabels = EntityLabels {
        singular: "Order",
        plural: "orders",
    };
    const NEWEST_FIRST: bool = true;

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, search: &str, filter: &OrderFilter) -> bool {
        let matches_search = search.is_empty()
            || self.id.to_string().contains(search)
            || self
                .special_instructions
                .as_deref()
                .is_some_and(|text| contains(text, search));
        let matches_status = filter.status_id.is_none_or(|id| self.status_id == id);
        matches_search && matches_status
    }
}

impl ManagedEntity for OrderStatus {
    type Id = i64;
    type Filter = ();
    type Draft = OrderStatusDraft;
    type Patch = OrderStatusPatch;

    const LABELS: EntityLabels = EntityLabels {
        singular: "Order status",
        plural: "order statuses",
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, search: &str, _filter: &()) -> bool {
        contains(&self.status_name, search)
    }
}
