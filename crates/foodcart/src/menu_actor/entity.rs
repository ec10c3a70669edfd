//! [`StoreEntity`] implementation for [`MenuItem`].
//!
//! The catalog is plain CRUD plus a restaurant-scoped query; it has no
//! collection-level commands and no custom actions, so those associated
//! types are uninhabited.

use super::MenuError;
use crate::model::{MenuId, MenuItem, MenuItemCreate, MenuItemUpdate, RestaurantId};
use actor_store::StoreEntity;
use async_trait::async_trait;

/// Uninhabited: the catalog defines no custom actions.
#[derive(Debug)]
pub enum MenuAction {}

/// Uninhabited: the catalog defines no collection-level commands.
#[derive(Debug)]
pub enum MenuCommand {}

/// Catalog query predicate.
#[derive(Debug, Clone)]
pub struct MenuFilter {
    pub restaurant_id: Option<RestaurantId>,
    /// When set, hide items marked unavailable.
    pub only_available: bool,
}

impl MenuFilter {
    /// A restaurant's orderable menu.
    pub fn available_at(restaurant_id: RestaurantId) -> Self {
        Self {
            restaurant_id: Some(restaurant_id),
            only_available: true,
        }
    }

    /// A restaurant's full catalog, including unavailable items.
    pub fn all_at(restaurant_id: RestaurantId) -> Self {
        Self {
            restaurant_id: Some(restaurant_id),
            only_available: false,
        }
    }
}

#[async_trait]
impl StoreEntity for MenuItem {
    type Id = MenuId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = ();
    type Filter = MenuFilter;
    type Command = MenuCommand;
    type CommandResult = ();
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuId, params: MenuItemCreate) -> Result<Self, MenuError> {
        if params.name.trim().is_empty() {
            return Err(MenuError::InvalidItem("name must not be empty".into()));
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(MenuError::InvalidItem(format!(
                "price must be non-negative, got {}",
                params.price
            )));
        }
        Ok(MenuItem::new(id, params))
    }

    fn id(&self) -> &MenuId {
        &self.id
    }

    fn matches(&self, filter: &MenuFilter) -> bool {
        if let Some(restaurant_id) = &filter.restaurant_id {
            if &self.restaurant_id != restaurant_id {
                return false;
            }
        }
        !filter.only_available || self.available
    }

    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(price) = update.price {
            if !price.is_finite() || price < 0.0 {
                return Err(MenuError::InvalidItem(format!(
                    "price must be non-negative, got {price}"
                )));
            }
        }
        self.apply_update(update);
        Ok(())
    }

    async fn handle_action(&mut self, action: MenuAction, _ctx: &()) -> Result<(), MenuError> {
        match action {}
    }
}
