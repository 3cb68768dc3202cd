//! Grocery order domain types and flat-file order loading.
//!
//! - **Order**: an id and a mapping of product names to unit prices, with
//!   a tax-inclusive total
//! - **Money**: cents-based amounts so totals are exact to the cent
//! - **OrderRepository**: bulk loads orders from a comma-separated source
//!
//! # Example
//!
//! ```rust,no_run
//! use grocery_orders::prelude::*;
//!
//! let repository = OrderRepository::from_path("data/orders.csv");
//!
//! if let Some(mut order) = repository.find(OrderId::new(1))? {
//!     order.add_product("Rolled Oats", "3.49".parse()?);
//!     println!("Order {} total: {}", order.id(), order.total());
//! }
//! # Ok::<(), grocery_orders::OrderError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod order;
pub mod pricing;
pub mod record;
pub mod repository;
pub mod source;

pub use error::OrderError;
pub use ids::OrderId;
pub use money::Money;
pub use order::{Order, Products};
pub use pricing::{OrderPricing, TaxRate, SALES_TAX};
pub use repository::OrderRepository;
pub use source::{FileSource, InMemorySource, OrderSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::OrderError;
    pub use crate::ids::OrderId;
    pub use crate::money::Money;
    pub use crate::order::{Order, Products};
    pub use crate::pricing::{OrderPricing, TaxRate, SALES_TAX};
    pub use crate::repository::OrderRepository;
    pub use crate::source::{FileSource, InMemorySource, OrderSource};
}
