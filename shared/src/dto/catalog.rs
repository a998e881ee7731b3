//! Catalog DTOs: products, categories and ingredients.

use serde::{Deserialize, Serialize};

use crate::utils::{flexible_id, flexible_number};

/// Product sold by the bakery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(with = "flexible_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "flexible_number")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(with = "flexible_id")]
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(with = "flexible_id")]
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Unit an ingredient's stock is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientUnit {
    G,
    Kg,
    Ml,
    L,
    Unit,
}

impl IngredientUnit {
    pub fn all() -> &'static [IngredientUnit] {
        &[
            IngredientUnit::G,
            IngredientUnit::Kg,
            IngredientUnit::Ml,
            IngredientUnit::L,
            IngredientUnit::Unit,
        ]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            IngredientUnit::G => "g",
            IngredientUnit::Kg => "kg",
            IngredientUnit::Ml => "ml",
            IngredientUnit::L => "l",
            IngredientUnit::Unit => "unit",
        }
    }
}

/// Raw ingredient kept in the bakery's stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    #[serde(with = "flexible_id")]
    pub id: i64,
    pub name: String,
    #[serde(with = "flexible_number")]
    pub stock_quantity: f64,
    pub unit: IngredientUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientDraft {
    pub name: String,
    pub stock_quantity: f64,
    pub unit: IngredientUnit,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IngredientPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<IngredientUnit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_accepts_string_price_and_ids() {
        let body = r#"{"id":"12","name":"Alfajor","description":"Dulce de leche","price":"3.50","category_id":"2"}"#;
        let product: Product = serde_json::from_str(body).unwrap();

        assert_eq!(product.id, 12);
        assert_eq!(product.category_id, 2);
        assert!((product.price - 3.5).abs() < f64::EPSILON);
        assert!(product.image.is_none());
    }

    #[test]
    fn test_patch_only_serializes_changed_fields() {
        let patch = ProductPatch {
            price: Some(4.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "price": 4.0 }));
    }

    #[test]
    fn test_ingredient_unit_wire_names() {
        let ingredient: Ingredient =
            serde_json::from_str(r#"{"id":1,"name":"Harina","stock_quantity":25,"unit":"kg"}"#).unwrap();
        assert_eq!(ingredient.unit, IngredientUnit::Kg);
        assert_eq!(serde_json::to_string(&IngredientUnit::Unit).unwrap(), "\"unit\"");
    }
}
