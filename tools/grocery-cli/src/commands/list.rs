//! List orders.

use anyhow::{Context as _, Result};
use grocery_orders::{Money, Order};
use serde::Serialize;

use super::ListArgs;
use crate::context::Context;

const WIDTHS: [usize; 3] = [6, 9, 12];

/// One row of the order listing.
#[derive(Debug, Serialize, PartialEq)]
pub struct OrderSummary {
    pub id: u32,
    pub products: usize,
    pub total: Money,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().get(),
            products: order.product_count(),
            total: order.total(),
        }
    }
}

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let repository = ctx.repository();
    let mut orders = repository.all().with_context(|| {
        format!(
            "Failed to load orders from {}",
            ctx.config.data.path.display()
        )
    })?;

    if let Some(limit) = args.limit {
        orders.truncate(limit);
    }

    let summaries: Vec<OrderSummary> = orders.iter().map(OrderSummary::from).collect();

    if ctx.output.is_json() {
        ctx.output.json(&summaries);
        return Ok(());
    }

    if summaries.is_empty() {
        ctx.output.info("No orders found.");
        return Ok(());
    }

    ctx.output.header("Orders");
    ctx.output.table_row(&["ID", "PRODUCTS", "TOTAL"], &WIDTHS);
    for summary in &summaries {
        let id = summary.id.to_string();
        let products = summary.products.to_string();
        let total = summary.total.display();
        ctx.output.table_row(&[&id, &products, &total], &WIDTHS);
    }

    ctx.output.line("");
    ctx.output.info(&format!("Total: {} order(s)", summaries.len()));

    Ok(())
}
