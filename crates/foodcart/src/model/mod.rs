//! # Domain Models
//!
//! Pure data types managed by the actors: [`Order`] with its line items and
//! lifecycle enums, and [`MenuItem`] for the restaurant catalog.
//!
//! Identifiers are per-entity newtypes over the opaque object-id format (see
//! [`crate::ids`]); externally supplied ids go through `parse`, which is
//! where format validation happens - an id that exists as a typed value is
//! already well-formed.

pub mod menu;
pub mod order;

pub use menu::{MenuId, MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{
    LineItem, LineItemId, NewLineItem, Order, OrderCreate, OrderId, OrderStage, OrderStatus,
};

use crate::ids::{self, IdError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Reference to a customer account. Accounts live in the external account
/// store; only the id format is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
    /// Validate and wrap an externally supplied customer id.
    pub fn parse(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        if ids::is_object_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(IdError(raw))
        }
    }

    /// Mint a fresh id (account creation, test fixtures).
    pub fn generate() -> Self {
        Self(ids::object_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a restaurant. Same story as [`CustomerId`]: format-checked,
/// not existence-checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(String);

impl RestaurantId {
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

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
