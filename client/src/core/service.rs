//! # Service Traits
//!
//! Traits for dependency injection. [`crate::services::api::ApiClient`] implements
//! every gateway; facade tests substitute in-memory mocks.

use std::fmt::{Debug, Display};

use async_trait::async_trait;
use shared::{
    LoginRequest, LoginResponse, MeResponse, Product, RecoveryPasswordRequest,
    RecoveryPasswordResponse, RegisterRequest, User, UserStatus,
};

use super::error::Result;

/// Display names used in toasts and screen titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityLabels {
    /// "Product"
    pub singular: &'static str,
    /// "products"
    pub plural: &'static str,
}

impl EntityLabels {
    pub fn created(&self) -> String {
        format!("{} created", self.singular)
    }

    pub fn updated(&self) -> String {
        format!("{} updated", self.singular)
    }

    pub fn deleted(&self) -> String {
        format!("{} deleted", self.singular)
    }

    pub fn load_failed(&self) -> String {
        format!("Error loading {}", self.plural)
    }

    pub fn create_failed(&self) -> String {
        format!("Error creating {}", self.singular.to_lowercase())
    }

    pub fn update_failed(&self) -> String {
        format!("Error updating {}", self.singular.to_lowercase())
    }

    pub fn delete_failed(&self) -> String {
        format!("Error deleting {}", self.singular.to_lowercase())
    }
}

/// A backend resource managed through the generic CRUD facade.
pub trait ManagedEntity: Clone + Debug + Send + Sync + 'static {
    type Id: Copy + Eq + Debug + Display + Send + Sync + 'static;
    /// Screen-specific filter (role, category, status...). `()` when the list has none.
    type Filter: Clone + Default + PartialEq + Debug + Send + Sync + 'static;
    type Draft: Send + 'static;
    type Patch: Send + 'static;

    const LABELS: EntityLabels;
    /// Newly created items go to the top of the list instead of the bottom.
    const NEWEST_FIRST: bool = false;

    fn id(&self) -> Self::Id;

    /// `search` is already lowercased; an empty string matches everything.
    fn matches(&self, search: &str, filter: &Self::Filter) -> bool;
}

/// List/create/update/delete against one REST collection.
#[async_trait]
pub trait CrudGateway<E: ManagedEntity>: Send + Sync {
    async fn list(&self) -> Result<Vec<E>>;

    async fn create(&self, draft: E::Draft) -> Result<E>;

    async fn update(&self, id: E::Id, patch: E::Patch) -> Result<E>;

    async fn delete(&self, id: E::Id) -> Result<()>;
}

/// Authentication endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse>;

    async fn register(&self, request: RegisterRequest) -> Result<LoginResponse>;

    /// Current session as seen by the backend (cookie or bearer token).
    async fn me(&self) -> Result<MeResponse>;

    async fn recovery_password(&self, request: RecoveryPasswordRequest) -> Result<RecoveryPasswordResponse>;
}

/// Free-text product search (GraphQL).
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    async fn search_products(&self, term: &str) -> Result<Vec<Product>>;
}

/// User lookups outside plain CRUD.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn user_status(&self, id: i64) -> Result<UserStatus>;

    async fn user_by_email(&self, email: &str) -> Result<User>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_messages() {
        let labels = EntityLabels {
            singular: "Category",
            plural: "categories",
        };
        assert_eq!(labels.created(), "Category created");
        assert_eq!(labels.load_failed(), "Error loading categories");
        assert_eq!(labels.delete_failed(), "Error deleting category");
    }
}
