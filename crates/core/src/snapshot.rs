//! Read-only snapshots of the domain collections the insight layer analyzes.
//!
//! Amounts are integer ouguiya (MRU); there are no fractional prices in the
//! boutique's books.

use serde::{Deserialize, Serialize};

/// A product row as the inventory screen sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    /// Purchase cost per unit.
    pub cost: i64,
    /// Selling price per unit.
    pub price: i64,
    pub stock: i64,
}

impl Product {
    /// Capital tied up in this product at cost price.
    pub fn stock_value(&self) -> i64 {
        self.cost * self.stock
    }

    /// Gross margin per unit.
    pub fn margin(&self) -> i64 {
        self.price - self.cost
    }
}

/// A client with an outstanding-debt balance (what they owe the shop).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub debt: i64,
}

/// A supplier balance (what the shop owes them).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub debt: i64,
}

/// A recorded expense line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub title: String,
    pub amount: i64,
}

/// One point of the dashboard sales chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    /// Chart label (day, week, or month; the chart decides).
    pub period: String,
    /// Number of sales in the period.
    pub sales: i64,
}
