//! Edit buffers behind the create/edit modals.
//!
//! egui text fields need owned `String`s, so each modal edits one of these and converts
//! it into the typed draft or patch on save. Conversion is where field validation runs.

use shared::{
    Category, CategoryDraft, CategoryPatch, Ingredient, IngredientDraft, IngredientPatch, IngredientUnit,
    Order, OrderPatch, OrderStatus, OrderStatusDraft, OrderStatusPatch, Product, ProductDraft, ProductPatch,
    Role, UpdateUserDto, User, UserDraft,
};

use crate::core::error::{AppError, Result};
use crate::core::service::ManagedEntity;
use crate::utils::validation::{parse_amount, validate_email, validate_password, validate_required};

pub trait EntityEditor<E: ManagedEntity>: Default + Clone {
    fn from_entity(item: &E) -> Self;

    /// `None` while creating a new item.
    fn editing_id(&self) -> Option<E::Id>;

    fn to_draft(&self) -> Result<E::Draft>;

    fn to_patch(&self) -> Result<E::Patch>;
}

fn min_chars(field: &str, value: &str, min: usize) -> Result<()> {
    validate_required(field, value).into_result()?;
    if value.trim().chars().count() < min {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserEditor {
    pub id: Option<i64>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
    pub is_active: bool,
}

impl Default for UserEditor {
    fn default() -> Self {
        Self {
            id: None,
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            password: String::new(),
            role: Role::Customer,
            is_active: true,
        }
    }
}

impl UserEditor {
    fn validate_names(&self) -> Result<()> {
        min_chars("First name", &self.first_name, 2)?;
        min_chars("Last name", &self.last_name, 2)
    }
}

impl EntityEditor<User> for UserEditor {
    fn from_entity(user: &User) -> Self {
        Self {
            id: Some(user.id),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone_number.clone().unwrap_or_default(),
            password: String::new(),
            role: user.role,
            is_active: user.active(),
        }
    }

    fn editing_id(&self) -> Option<i64> {
        self.id
    }

    fn to_draft(&self) -> Result<UserDraft> {
        self.validate_names()?;
        validate_email(&self.email).into_result()?;
        validate_password(&self.password).into_result()?;
        Ok(UserDraft {
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: optional(&self.phone),
            password: self.password.clone(),
            role: self.role,
        })
    }

    fn to_patch(&self) -> Result<UpdateUserDto> {
        self.validate_names()?;
        Ok(UpdateUserDto {
            first_name: Some(self.first_name.trim().to_string()),
            last_name: Some(self.last_name.trim().to_string()),
            phone_number: Some(self.phone.trim().to_string()),
            email: None,
            role: Some(self.role),
            is_active: Some(self.is_active),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductEditor {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category_id: Option<i64>,
}

impl ProductEditor {
    fn parsed(&self) -> Result<(f64, i64)> {
        validate_required("Name", &self.name).into_result()?;
        let price = parse_amount("Price", &self.price)?;
        let category_id = self
            .category_id
            .ok_or_else(|| AppError::Validation("Category is required".to_string()))?;
        Ok((price, category_id))
    }
}

impl EntityEditor<Product> for ProductEditor {
    fn from_entity(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format!("{:.2}", product.price),
            image: product.image.clone().unwrap_or_default(),
            category_id: Some(product.category_id),
        }
    }

    fn editing_id(&self) -> Option<i64> {
        self.id
    }

    fn to_draft(&self) -> Result<ProductDraft> {
        let (price, category_id) = self.parsed()?;
        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            image: optional(&self.image),
            category_id,
        })
    }

    fn to_patch(&self) -> Result<ProductPatch> {
        let (price, category_id) = self.parsed()?;
        Ok(ProductPatch {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            price: Some(price),
            // an empty string clears the stored image
            image: Some(self.image.trim().to_string()),
            category_id: Some(category_id),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryEditor {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

impl EntityEditor<Category> for CategoryEditor {
    fn from_entity(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }

    fn editing_id(&self) -> Option<i64> {
        self.id
    }

    fn to_draft(&self) -> Result<CategoryDraft> {
        min_chars("Name", &self.name, 3)?;
        Ok(CategoryDraft {
            name: self.name.trim().to_string(),
            description: optional(&self.description),
        })
    }

    fn to_patch(&self) -> Result<CategoryPatch> {
        min_chars("Name", &self.name, 3)?;
        Ok(CategoryPatch {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientEditor {
    pub id: Option<i64>,
    pub name: String,
    pub stock_quantity: String,
    pub unit: IngredientUnit,
}

impl Default for IngredientEditor {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            stock_quantity: String::new(),
            unit: IngredientUnit::Kg,
        }
    }
}

impl EntityEditor<Ingredient> for IngredientEditor {
    fn from_entity(ingredient: &Ingredient) -> Self {
        Self {
            id: Some(ingredient.id),
            name: ingredient.name.clone(),
            stock_quantity: ingredient.stock_quantity.to_string(),
            unit: ingredient.unit,
        }
    }

    fn editing_id(&self) -> Option<i64> {
        self.id
    }

    fn to_draft(&self) -> Result<IngredientDraft> {
        min_chars("Name", &self.name, 3)?;
        Ok(IngredientDraft {
            name: self.name.trim().to_string(),
            stock_quantity: parse_amount("Stock", &self.stock_quantity)?,
            unit: self.unit,
        })
    }

    fn to_patch(&self) -> Result<IngredientPatch> {
        let draft = self.to_draft()?;
        Ok(IngredientPatch {
            name: Some(draft.name),
            stock_quantity: Some(draft.stock_quantity),
            unit: Some(draft.unit),
        })
    }
}

/// Orders are placed by customers; admins only change status and notes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderEditor {
    pub id: Option<i64>,
    pub status_id: i64,
    pub special_instructions: String,
}

impl EntityEditor<Order> for OrderEditor {
    fn from_entity(order: &Order) -> Self {
        Self {
            id: Some(order.id),
            status_id: order.status_id,
            special_instructions: order.special_instructions.clone().unwrap_or_default(),
        }
    }

    fn editing_id(&self) -> Option<i64> {
        self.id
    }

    fn to_draft(&self) -> Result<shared::OrderDraft> {
        Err(AppError::Validation(
            "Orders are created from the storefront".to_string(),
        ))
    }

    fn to_patch(&self) -> Result<OrderPatch> {
        Ok(OrderPatch {
            status_id: Some(self.status_id),
            total_amount: None,
            special_instructions: Some(self.special_instructions.trim().to_string()),
            completed_at: None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStatusEditor {
    pub id: Option<i64>,
    pub status_name: String,
}

impl EntityEditor<OrderStatus> for OrderStatusEditor {
    fn from_entity(status: &OrderStatus) -> Self {
        Self {
            id: Some(status.id),
            status_name: status.status_name.clone(),
        }
    }

    fn editing_id(&self) -> Option<i64> {
        self.id
    }

    fn to_draft(&self) -> Result<OrderStatusDraft> {
        validate_required("Status name", &self.status_name).into_result()?;
        Ok(OrderStatusDraft {
            status_name: self.status_name.trim().to_string(),
        })
    }

    fn to_patch(&self) -> Result<OrderStatusPatch> {
        let draft = self.to_draft()?;
        Ok(OrderStatusPatch {
            status_name: Some(draft.status_name),
        })
    }
}

/// One buffer per admin screen.
#[derive(Debug, Clone, Default)]
pub struct Editors {
    pub user: UserEditor,
    pub product: ProductEditor,
    pub category: CategoryEditor,
    pub ingredient: IngredientEditor,
    pub order: OrderEditor,
    pub order_status: OrderStatusEditor,
    /// Validation message of the open modal.
    pub error: Option<String>,
    /// The order status manager window is shown.
    pub status_manager_open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::tests::user_with_role;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_editor_create_requires_credentials() {
        let mut editor = UserEditor {
            first_name: "Ana".to_string(),
            last_name: "Paz".to_string(),
            email: "ana@bakery.test".to_string(),
            ..UserEditor::default()
        };
        assert_eq!(
            editor.to_draft().unwrap_err(),
            AppError::Validation("Password is required".to_string())
        );

        editor.password = "secret1".to_string();
        editor.phone = "  ".to_string();
        let draft = editor.to_draft().unwrap();
        assert_eq!(draft.role, Role::Customer);
        assert_eq!(draft.phone_number, None);
    }

    #[test]
    fn test_user_editor_patch_round_trips_existing_user() {
        let user = user_with_role(4, Role::Admin);
        let mut editor = UserEditor::from_entity(&user);
        assert_eq!(editor.editing_id(), Some(4));

        editor.first_name = "A".to_string();
        assert_eq!(
            editor.to_patch().unwrap_err(),
            AppError::Validation("First name must be at least 2 characters".to_string())
        );

        editor.first_name = " Anabel ".to_string();
        let patch = editor.to_patch().unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("Anabel"));
        assert_eq!(patch.role, Some(Role::Admin));
        assert_eq!(patch.email, None);
    }

    #[test]
    fn test_user_editor_patch_sends_phone_number() {
        let mut editor = UserEditor::from_entity(&user_with_role(4, Role::Customer));
        editor.phone = " 555-1234 ".to_string();

        let body = serde_json::to_value(editor.to_patch().unwrap()).unwrap();

        assert_eq!(body["phone_number"], "555-1234");
        assert!(body.get("phone").is_none());
    }

    #[test]
    fn test_product_editor_patch_can_clear_image() {
        let mut editor = ProductEditor {
            id: Some(3),
            name: "Brownie".to_string(),
            price: "3".to_string(),
            category_id: Some(1),
            image: "brownie.png".to_string(),
            ..ProductEditor::default()
        };
        assert_eq!(editor.to_patch().unwrap().image.as_deref(), Some("brownie.png"));

        editor.image = "   ".to_string();
        let body = serde_json::to_value(editor.to_patch().unwrap()).unwrap();
        assert_eq!(body["image"], "");
    }

    #[test]
    fn test_product_editor_parses_price_and_category() {
        let mut editor = ProductEditor {
            name: "Tres leches".to_string(),
            price: "12,50".to_string(),
            ..ProductEditor::default()
        };
        assert_eq!(
            editor.to_draft().unwrap_err(),
            AppError::Validation("Category is required".to_string())
        );

        editor.category_id = Some(2);
        let draft = editor.to_draft().unwrap();
        assert_eq!(draft.price, 12.5);
        assert_eq!(draft.image, None);

        editor.price = "abc".to_string();
        assert!(editor.to_patch().is_err());
    }

    #[test]
    fn test_category_and_ingredient_name_length() {
        let category = CategoryEditor {
            name: "Pi".to_string(),
            ..CategoryEditor::default()
        };
        assert!(category.to_draft().is_err());

        let ingredient = IngredientEditor {
            name: "Flour".to_string(),
            stock_quantity: "2.5".to_string(),
            ..IngredientEditor::default()
        };
        let patch = ingredient.to_patch().unwrap();
        assert_eq!(patch.stock_quantity, Some(2.5));
        assert_eq!(patch.unit, Some(IngredientUnit::Kg));
    }

    #[test]
    fn test_order_editor_only_patches() {
        let editor = OrderEditor {
            id: Some(9),
            status_id: 3,
            special_instructions: " ring twice ".to_string(),
        };
        assert!(editor.to_draft().is_err());
        let patch = editor.to_patch().unwrap();
        assert_eq!(patch.status_id, Some(3));
        assert_eq!(patch.special_instructions.as_deref(), Some("ring twice"));
    }
}
