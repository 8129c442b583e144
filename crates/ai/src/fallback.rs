//! Fixed localized strings returned when generation is unavailable.
//!
//! Three tiers per endpoint: the placeholder when no API key is configured,
//! the substitute when the service answers with nothing usable, and the
//! fallback when the call fails outright. Clients and suppliers degrade to
//! an empty string instead; their screens hide empty insights.

pub const DASHBOARD_DISABLED: [&str; 1] = ["يرجى إضافة مفتاح API لتفعيل التوصيات الذكية."];

pub const DASHBOARD_NO_TIPS: [&str; 3] = [
    "راجع المنتجات المكدسة وقم بعمل تصفية.",
    "ركز على بيع المنتجات ذات الهامش الربحي العالي.",
    "راقب السيولة النقدية يومياً.",
];

pub const DASHBOARD_ERROR: [&str; 3] = [
    "ركز على المنتجات الأكثر مبيعاً لزيادة السيولة.",
    "تخلص من المخزون الراكد بعروض خاصة.",
    "راقب المصاريف التشغيلية بدقة.",
];

pub const INVENTORY_DISABLED: &str = "تحليل المخزون غير متاح حالياً.";
pub const INVENTORY_NO_TEXT: &str = "راجع المنتجات الراكدة وحاول تحريكها بعروض.";
pub const INVENTORY_ERROR: &str = "قم بجرد المخزون وتحديث الكميات لضمان دقة التحليل.";

pub const CLIENTS_NO_TEXT: &str = "تابع ديون العملاء بانتظام.";

pub const SUPPLIERS_NO_TEXT: &str = "حاول التفاوض على فترات سداد أطول.";

pub const EXPENSES_NO_TEXT: &str = "تحكم في المصاريف المتغيرة لزيادة الربحية.";
pub const EXPENSES_ERROR: [&str; 1] = ["راجع بنود الصرف الأعلى تكلفة."];

/// Owned copies of a static tip list.
pub fn owned(tips: &[&str]) -> Vec<String> {
    tips.iter().map(|tip| (*tip).to_string()).collect()
}
