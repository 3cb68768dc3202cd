//! Show a single order.

use anyhow::{bail, Context as _, Result};
use grocery_orders::{Money, Order, OrderId, OrderPricing, SALES_TAX};
use serde::Serialize;

use super::ShowArgs;
use crate::context::Context;

/// Full view of one order.
#[derive(Debug, Serialize)]
pub struct OrderDetail {
    pub id: u32,
    pub products: Vec<ProductLine>,
    pub pricing: OrderPricing,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ProductLine {
    pub name: String,
    pub price: Money,
}

impl From<&Order> for OrderDetail {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().get(),
            products: order
                .products()
                .iter()
                .map(|(name, price)| ProductLine {
                    name: name.clone(),
                    price: *price,
                })
                .collect(),
            pricing: order.pricing(),
        }
    }
}

/// Load one order, failing with a readable message when it is absent.
pub fn load_order(ctx: &Context, id: u32) -> Result<Order> {
    let order = ctx
        .repository()
        .find(OrderId::new(id))
        .with_context(|| {
            format!(
                "Failed to load orders from {}",
                ctx.config.data.path.display()
            )
        })?;

    match order {
        Some(order) => Ok(order),
        None => bail!("Order not found: {}", id),
    }
}

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let order = load_order(ctx, args.id)?;
    let detail = OrderDetail::from(&order);

    if ctx.output.is_json() {
        ctx.output.json(&detail);
        return Ok(());
    }

    ctx.output.header(&format!("Order {}", detail.id));
    if detail.products.is_empty() {
        ctx.output.info("No products.");
    }
    for line in &detail.products {
        ctx.output.kv(&line.name, &line.price.display());
    }

    ctx.output.line("");
    ctx.output.kv("Subtotal", &detail.pricing.subtotal.display());
    ctx.output.kv(
        &format!("Tax ({}%)", SALES_TAX.percent()),
        &detail.pricing.tax_total.display(),
    );
    ctx.output.kv("Total", &detail.pricing.grand_total.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;
    use grocery_orders::Products;
    use std::io::Write;

    fn context_for(file: &tempfile::NamedTempFile) -> Context {
        let mut config = CliConfig::default();
        config.data.path = file.path().to_path_buf();
        Context {
            config,
            output: Output::new(false, false),
        }
    }

    #[test]
    fn test_load_order_found() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1,Bran,14.72\n1,Honey,5.00\n2,Tea,3.10").unwrap();
        file.flush().unwrap();

        let order = load_order(&context_for(&file), 1).unwrap();
        assert_eq!(order.id(), OrderId::new(1));
        assert_eq!(order.product_count(), 2);
        assert_eq!(order.price_of("Honey"), Some(Money::new(500)));
    }

    #[test]
    fn test_load_order_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1,Bran,14.72").unwrap();
        file.flush().unwrap();

        let err = load_order(&context_for(&file), 101).unwrap_err();
        assert!(err.to_string().contains("Order not found: 101"));
    }

    #[test]
    fn test_load_order_unreadable_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1,Bran").unwrap();
        file.flush().unwrap();

        let err = load_order(&context_for(&file), 1).unwrap_err();
        assert!(err.to_string().contains("Failed to load orders from"));
    }

    #[test]
    fn test_detail_from_order() {
        let order = Order::new(
            OrderId::new(1),
            Products::from([
                ("Grape Seed Oil".to_string(), Money::new(7490)),
                ("Slivered Almonds".to_string(), Money::new(2288)),
                ("Wholewheat flour".to_string(), Money::new(193)),
            ]),
        );

        let detail = OrderDetail::from(&order);
        assert_eq!(detail.id, 1);
        assert_eq!(detail.products.len(), 3);
        assert_eq!(
            detail.products[0],
            ProductLine {
                name: "Grape Seed Oil".to_string(),
                price: Money::new(7490),
            }
        );
        assert_eq!(detail.pricing.subtotal, Money::new(9971));
        assert_eq!(detail.pricing.tax_total, Money::new(748));
        assert_eq!(detail.pricing.grand_total, Money::new(10719));
    }
}
