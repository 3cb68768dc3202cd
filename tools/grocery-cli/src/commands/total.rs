//! Print an order's total.

use anyhow::Result;
use grocery_orders::Money;
use serde::Serialize;

use super::show::load_order;
use super::TotalArgs;
use crate::context::Context;

/// JSON body of the total command.
#[derive(Debug, Serialize)]
pub struct OrderTotal {
    pub id: u32,
    pub total: Money,
}

/// Run the total command.
pub fn run(args: TotalArgs, ctx: &Context) -> Result<()> {
    let order = load_order(ctx, args.id)?;
    let total = OrderTotal {
        id: args.id,
        total: order.total(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&total);
        return Ok(());
    }

    ctx.output.line(&total.total.display_amount());
    Ok(())
}
