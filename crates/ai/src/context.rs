//! Data-context builders: what each generator shows the model.
//!
//! The dashboard gets a natural-language cash-flow report; every other
//! endpoint serializes its aggregates as JSON and lets the analyst prompt
//! frame them.

use serde_json::json;

use boussala_core::{format_ouguiya, Client, Expense, Product, SalesPoint, Supplier};

/// Stock above this counts as piled up for a boutique.
const DEAD_STOCK_MIN: i64 = 20;
/// Items with fewer units than this are running low.
const LOW_STOCK_MAX: i64 = 5;
/// Items with more units than this are overstocked.
const OVERSTOCK_MIN: i64 = 50;
/// Price floor for an expensive item whose stock-out hurts.
const CASH_COW_PRICE_MIN: i64 = 2000;

const DEAD_STOCK_LIMIT: usize = 5;
const TOP_DEBTORS_LIMIT: usize = 5;
const TOP_EXPENSES_LIMIT: usize = 3;
const PRODUCT_SAMPLE_LIMIT: usize = 10;

/// Direction of the sales chart over its last two points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SalesTrend {
    Rising,
    Falling,
    Stable,
}

impl SalesTrend {
    pub fn as_arabic(self) -> &'static str {
        match self {
            SalesTrend::Rising => "صاعد",
            SalesTrend::Falling => "هابط",
            SalesTrend::Stable => "مستقر",
        }
    }
}

/// Compare the last two chart points; anything shorter is stable.
pub fn sales_trend(chart: &[SalesPoint]) -> SalesTrend {
    match chart {
        [.., prev, last] => {
            if last.sales > prev.sales {
                SalesTrend::Rising
            } else {
                SalesTrend::Falling
            }
        }
        _ => SalesTrend::Stable,
    }
}

/// Piled-up items absorbing capital: stock above the threshold, ordered by
/// descending frozen value (cost × stock), capped at five.
pub fn dead_stock(products: &[Product]) -> Vec<String> {
    let mut piled: Vec<&Product> = products
        .iter()
        .filter(|product| product.stock > DEAD_STOCK_MIN)
        .collect();
    piled.sort_by(|a, b| b.stock_value().cmp(&a.stock_value()));
    piled
        .into_iter()
        .take(DEAD_STOCK_LIMIT)
        .map(|product| format!("{} ({} قطعة)", product.name, product.stock))
        .collect()
}

/// Expensive items about to run out.
pub fn low_stock_cash_cows(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .filter(|product| product.stock < LOW_STOCK_MAX && product.price > CASH_COW_PRICE_MIN)
        .map(|product| product.name.clone())
        .collect()
}

/// Arabic cash-flow report for the dashboard prompt.
pub fn dashboard_context(sales_chart: &[SalesPoint], products: &[Product]) -> String {
    let total_stock_value: i64 = products.iter().map(Product::stock_value).sum();
    let dead = dead_stock(products);
    let cows = low_stock_cash_cows(products);

    format!(
        "تقرير السيولة (Cash Flow Report):\n\
         - رأس المال المجمد في المخزن (بسعر التكلفة): {} أوقية.\n\
         - اتجاه المبيعات الأخير: {}.\n\
         - منتجات تمتص السيولة (مكدسة): {}.\n\
         - منتجات رابحة توشك على النفاد: {}.",
        format_ouguiya(total_stock_value),
        sales_trend(sales_chart).as_arabic(),
        if dead.is_empty() {
            "لا يوجد تكدس خطير".to_string()
        } else {
            dead.join(", ")
        },
        if cows.is_empty() {
            "لا يوجد".to_string()
        } else {
            cows.join(", ")
        },
    )
}

/// Inventory aggregates as JSON.
pub fn inventory_context(products: &[Product]) -> String {
    let total_value: i64 = products.iter().map(Product::stock_value).sum();
    let low_stock: Vec<&str> = products
        .iter()
        .filter(|product| product.stock < LOW_STOCK_MAX)
        .map(|product| product.name.as_str())
        .collect();
    let overstocked: Vec<&str> = products
        .iter()
        .filter(|product| product.stock > OVERSTOCK_MIN)
        .map(|product| product.name.as_str())
        .collect();

    let mut categories: Vec<&str> = Vec::new();
    for product in products {
        if !categories.contains(&product.category.as_str()) {
            categories.push(product.category.as_str());
        }
    }

    let sample: Vec<_> = products
        .iter()
        .take(PRODUCT_SAMPLE_LIMIT)
        .map(|product| json!({"name": product.name, "margin": product.margin()}))
        .collect();

    json!({
        "total_inventory_value": total_value,
        "total_items_count": products.len(),
        "low_stock_items": low_stock,
        "overstocked_items": overstocked,
        "categories_available": categories,
        "sample_products": sample,
    })
    .to_string()
}

/// Client-debt aggregates as JSON.
pub fn clients_context(clients: &[Client]) -> String {
    let total_debt: i64 = clients.iter().map(|client| client.debt).sum();
    let top_debtors: Vec<_> = clients
        .iter()
        .filter(|client| client.debt > 0)
        .take(TOP_DEBTORS_LIMIT)
        .map(|client| json!({"name": client.name, "debt": client.debt}))
        .collect();

    json!({
        "total_clients": clients.len(),
        "total_outstanding_debt": total_debt,
        "top_debtors": top_debtors,
    })
    .to_string()
}

/// Supplier-debt aggregates as JSON.
pub fn suppliers_context(suppliers: &[Supplier]) -> String {
    let total_debt: i64 = suppliers.iter().map(|supplier| supplier.debt).sum();
    let creditors: Vec<_> = suppliers
        .iter()
        .filter(|supplier| supplier.debt > 0)
        .map(|supplier| json!({"name": supplier.name, "amount_we_owe": supplier.debt}))
        .collect();

    json!({
        "total_suppliers": suppliers.len(),
        "total_debt_to_suppliers": total_debt,
        "suppliers_we_owe_money": creditors,
    })
    .to_string()
}

/// Expense aggregates as JSON, including the expense-to-sales ratio.
pub fn expenses_context(expenses: &[Expense], total_sales: i64) -> String {
    let total_expenses: i64 = expenses.iter().map(|expense| expense.amount).sum();
    let ratio = if total_sales > 0 {
        total_expenses as f64 / total_sales as f64 * 100.0
    } else {
        0.0
    };

    let mut by_amount: Vec<&Expense> = expenses.iter().collect();
    by_amount.sort_by(|a, b| b.amount.cmp(&a.amount));
    let top_expenses: Vec<_> = by_amount
        .into_iter()
        .take(TOP_EXPENSES_LIMIT)
        .map(|expense| json!({"title": expense.title, "amount": expense.amount}))
        .collect();

    json!({
        "total_sales_period": total_sales,
        "total_expenses": total_expenses,
        "expense_to_sales_ratio": format!("{ratio:.1}%"),
        "top_expenses": top_expenses,
    })
    .to_string()
}
