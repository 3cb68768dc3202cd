//! Tax and order pricing calculations.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sales tax applied to every order: 7.5%.
pub const SALES_TAX: TaxRate = TaxRate::from_basis_points(750);

const BASIS_POINTS_PER_UNIT: i64 = 10_000;

/// A tax rate expressed in basis points (1 bp = 0.01%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxRate {
    basis_points: i64,
}

impl TaxRate {
    pub const fn from_basis_points(basis_points: i64) -> Self {
        Self { basis_points }
    }

    pub const fn basis_points(&self) -> i64 {
        self.basis_points
    }

    /// Rate as a percentage (750 bp is 7.5).
    pub fn percent(&self) -> f64 {
        self.basis_points as f64 / 100.0
    }

    /// Tax owed on `amount`, rounded half away from zero to the cent.
    pub fn tax_on(&self, amount: Money) -> Money {
        amount.scale(self.basis_points, BASIS_POINTS_PER_UNIT)
    }
}

/// Pricing breakdown for an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderPricing {
    /// Sum of product prices.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax_total: Money,
    /// Subtotal plus tax.
    pub grand_total: Money,
}

impl OrderPricing {
    /// Price a subtotal at the given rate.
    pub fn calculate(subtotal: Money, rate: TaxRate) -> Self {
        let tax_total = rate.tax_on(subtotal);
        Self {
            subtotal,
            tax_total,
            grand_total: subtotal + tax_total,
        }
    }
}
