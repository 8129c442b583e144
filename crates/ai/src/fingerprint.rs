//! Cache-key derivation from dataset aggregates.
//!
//! A key is a namespace tag plus numeric fingerprints of the data it was
//! generated from. Identical fingerprints collapse to the same key, which is
//! the whole invalidation story: change the aggregates and the next lookup
//! misses. The fingerprints are lossy; two different datasets can collide on
//! the same sums and reuse a stale insight until the TTL runs out.

use boussala_core::{Client, Expense, Product, SalesPoint, Supplier};

/// Dashboard key: frozen capital at cost plus total sales volume.
pub fn dashboard_key(sales_chart: &[SalesPoint], products: &[Product]) -> String {
    let stock_value: i64 = products.iter().map(Product::stock_value).sum();
    let sales_volume: i64 = sales_chart.iter().map(|point| point.sales).sum();
    format!("dash_v2_{stock_value}_{sales_volume}")
}

/// Inventory key: item count plus units on hand.
pub fn inventory_key(products: &[Product]) -> String {
    let total_stock: i64 = products.iter().map(|product| product.stock).sum();
    format!("inv_{}_{}", products.len(), total_stock)
}

/// Clients key: client count plus outstanding debt.
pub fn clients_key(clients: &[Client]) -> String {
    let total_debt: i64 = clients.iter().map(|client| client.debt).sum();
    format!("cli_{}_{}", clients.len(), total_debt)
}

/// Suppliers key: supplier count plus what the shop owes.
pub fn suppliers_key(suppliers: &[Supplier]) -> String {
    let total_debt: i64 = suppliers.iter().map(|supplier| supplier.debt).sum();
    format!("sup_{}_{}", suppliers.len(), total_debt)
}

/// Expenses key: expense count plus the comparison sales total.
pub fn expenses_key(expenses: &[Expense], total_sales: i64) -> String {
    format!("exp_{}_{}", expenses.len(), total_sales)
}
