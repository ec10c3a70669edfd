//! Menu catalog entries for a restaurant.

use super::RestaurantId;
use crate::ids::{self, IdError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque identifier of a menu entry. Line items reference menu entries by
/// this id; the reference is not revalidated after the item enters a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuId(String);

impl MenuId {
    pub fn parse(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        if ids::is_object_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(IdError(raw))
        }
    }

    pub fn generate() -> Self {
        Self(ids::object_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
    /// Whether the dish can currently be ordered. Unavailable items stay on
    /// the menu so existing carts keep their line snapshots intact.
    pub available: bool,
    pub rating: Option<f32>,
}

/// Payload for adding a dish to the catalog.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
}

/// Partial update for a catalog entry. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

impl MenuItem {
    pub fn new(id: MenuId, params: MenuItemCreate) -> Self {
        Self {
            id,
            restaurant_id: params.restaurant_id,
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: params.image_url,
            category: params.category,
            available: true,
            rating: None,
        }
    }

    pub fn apply_update(&mut self, update: MenuItemUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
    }
}
