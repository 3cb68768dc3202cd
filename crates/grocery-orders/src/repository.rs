//! Bulk loading of orders from a data source.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::OrderError;
use crate::ids::OrderId;
use crate::order::{Order, Products};
use crate::record::{parse_records, Record};
use crate::source::{FileSource, OrderSource};

/// Loads [`Order`]s from an [`OrderSource`].
///
/// Nothing is cached: every call reads the source again, so results always
/// reflect its current contents. A malformed line fails the whole load and
/// no orders are returned.
#[derive(Debug, Clone)]
pub struct OrderRepository<S = FileSource> {
    source: S,
}

impl OrderRepository<FileSource> {
    /// Repository over a CSV file on disk.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FileSource::new(path))
    }
}

impl<S: OrderSource> OrderRepository<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Every order in the source, in order of each id's first appearance.
    pub fn all(&self) -> Result<Vec<Order>, OrderError> {
        let contents = self.source.read_to_string()?;
        let records = parse_records(&contents)?;
        let record_count = records.len();
        let orders = group_records(records);

        debug!(
            source = %self.source.describe(),
            records = record_count,
            orders = orders.len(),
            "Loaded orders"
        );

        Ok(orders)
    }

    /// The order with `id`, or `None` if the source has no such order.
    pub fn find(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        let found = self.all()?.into_iter().find(|order| order.id() == id);
        if found.is_none() {
            debug!(order_id = %id, "Order not found");
        }
        Ok(found)
    }

    /// Distinct order ids, in order of first appearance.
    pub fn ids(&self) -> Result<Vec<OrderId>, OrderError> {
        Ok(self.all()?.iter().map(Order::id).collect())
    }
}

/// Merge records sharing an id into one order each.
fn group_records(records: Vec<Record>) -> Vec<Order> {
    let mut positions: HashMap<OrderId, usize> = HashMap::new();
    let mut grouped: Vec<(OrderId, Products)> = Vec::new();

    for record in records {
        let index = *positions.entry(record.order_id).or_insert_with(|| {
            grouped.push((record.order_id, Products::new()));
            grouped.len() - 1
        });

        let products = &mut grouped[index].1;
        if products
            .insert(record.product_name.clone(), record.price)
            .is_some()
        {
            warn!(
                order_id = %record.order_id,
                product = %record.product_name,
                line = record.line,
                "Duplicate product in order, keeping the later price"
            );
        }
    }

    grouped
        .into_iter()
        .map(|(id, products)| Order::new(id, products))
        .collect()
}
