//! # Foodcart
//!
//! Actor-based backend for a food pickup service: customers build a cart,
//! walk it through checkout and placement, and pick the order up; restaurant
//! staff manage a menu catalog.
//!
//! ## Layout
//!
//! - **[model]**: pure data types ([`model::Order`], [`model::MenuItem`])
//!   and their identifier newtypes.
//! - **[order_actor]** / **[menu_actor]**: [`actor_store::StoreEntity`]
//!   implementations and actor factories. The order actor owns all cart
//!   logic; see [`order_actor::CartCommand`].
//! - **[clients]**: typed wrappers ([`clients::OrderClient`],
//!   [`clients::MenuClient`]) over the generic store clients.
//! - **[notify]**: the lifecycle notification seam.
//! - **[lifecycle]**: [`lifecycle::OrderSystem`], which spawns and joins the
//!   actors.
//!
//! ## Concurrency
//!
//! Each collection is owned by exactly one actor task. "Find the customer's
//! open cart, or create one" executes inside a single actor message, so two
//! concurrent add-to-cart calls for the same customer can never race into
//! two carts.

pub mod clients;
pub mod ids;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod notify;
pub mod order_actor;
