//! Typed client wrappers over the generic store clients.

pub mod menu_client;
pub mod order_client;

pub use menu_client::MenuClient;
pub use order_client::OrderClient;
