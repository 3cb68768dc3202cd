//! Order entity.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::OrderId;
use crate::money::Money;
use crate::pricing::{OrderPricing, SALES_TAX};

/// Product name to unit price.
pub type Products = BTreeMap<String, Money>;

/// A grocery order: an id and the products on it.
///
/// Product names are unique within an order. Adding a name that is
/// already present is refused rather than overwriting the price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    products: Products,
}

impl Order {
    /// Create an order. The product mapping may be empty.
    pub fn new(id: OrderId, products: Products) -> Self {
        Self {
            id,
            products,
        }
    }

    /// Create an order from `(name, price)` pairs.
    ///
    /// A repeated name keeps the last price given.
    pub fn from_pairs<I, S>(id: OrderId, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        let products = pairs
            .into_iter()
            .map(|(name, price)| (name.into(), price))
            .collect();
        Self::new(id, products)
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn products(&self) -> &Products {
        &self.products
    }

    /// Consume the order and return its product mapping.
    pub fn into_products(self) -> Products {
        self.products
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains_product(&self, name: &str) -> bool {
        self.products.contains_key(name)
    }

    /// Unit price of a product, if it is on the order.
    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.products.get(name).copied()
    }

    /// Sum of product prices before tax.
    pub fn subtotal(&self) -> Money {
        self.products.values().sum()
    }

    /// Sales tax on the subtotal.
    pub fn tax(&self) -> Money {
        SALES_TAX.tax_on(self.subtotal())
    }

    /// Subtotal plus 7.5% sales tax, rounded to the cent.
    ///
    /// An order with no products totals exactly [`Money::ZERO`].
    pub fn total(&self) -> Money {
        self.pricing().grand_total
    }

    /// Full pricing breakdown.
    pub fn pricing(&self) -> OrderPricing {
        OrderPricing::calculate(self.subtotal(), SALES_TAX)
    }

    /// Add a product.
    ///
    /// Returns `false` and leaves the order unchanged if a product with
    /// this name is already present.
    pub fn add_product(&mut self, name: impl Into<String>, price: Money) -> bool {
        match self.products.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(price);
                true
            }
        }
    }

    /// Remove a product by name.
    ///
    /// `_price` is not compared against the stored price: a product is
    /// removed whenever the name matches. Callers relying on the price as
    /// a guard get no protection here.
    pub fn remove_product(&mut self, name: &str, _price: Money) -> bool {
        self.products.remove(name).is_some()
    }
}
