//! Fixed reference data and supplier name synthesis.

use crate::generators::text::title_case;
use fake::faker::company::en::{Bs, CompanyName};
use fake::faker::name::en::LastName;
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Category rows as `(name, description)`. Ids are positions + 1.
pub const CATEGORIES: [(&str, &str); 8] = [
    ("Electronics", "Electronic devices and accessories"),
    ("Clothing", "Apparel and fashion items"),
    ("Food", "Food and beverages"),
    ("Books", "Books and publications"),
    ("Toys", "Toys and games"),
    ("Sports", "Sports equipment and gear"),
    ("Home", "Home and garden products"),
    ("Beauty", "Beauty and personal care"),
];

/// Product names, cycled through by row index.
pub const PRODUCT_NAMES: [&str; 25] = [
    // Electronics
    "Wireless Bluetooth Headphones",
    "USB-C Charging Cable",
    "Portable Power Bank",
    "Laptop Stand",
    "Wireless Mouse",
    // Home & Kitchen
    "Stainless Steel Water Bottle",
    "Coffee Maker",
    "Blender",
    "Non-Stick Frying Pan",
    "Kitchen Knife Set",
    // Clothing
    "Cotton T-Shirt",
    "Denim Jeans",
    "Running Shoes",
    "Winter Jacket",
    "Baseball Cap",
    // Health & Beauty
    "Electric Toothbrush",
    "Yoga Mat",
    "Resistance Bands",
    "Face Moisturizer",
    "Shampoo & Conditioner Set",
    // Office Supplies
    "Notebook Set",
    "Ballpoint Pens (Pack of 10)",
    "Desk Organizer",
    "Sticky Notes",
    "Printer Paper (500 Sheets)",
];

/// Legal-entity suffixes appended to supplier names. Empty means none.
pub const SUPPLIER_SUFFIXES: [&str; 9] = [
    "LLC",
    "Ltd",
    "PLC",
    "Inc",
    "Corp",
    "Co",
    "Group",
    "Industries",
    "",
];

/// Line-of-business words used by two of the naming strategies.
pub const SUPPLIER_TYPES: [&str; 10] = [
    "Electronics",
    "Distribution",
    "Supply",
    "Manufacturing",
    "Trading",
    "Global",
    "International",
    "Wholesale",
    "Solutions",
    "Technologies",
];

/// Trailing legal forms stripped from faker company names before a suffix
/// is chosen, so names never end up with two of them.
const COMPANY_FORMS: [&str; 6] = [", Inc.", ", LLC", ", Ltd", " Inc", " LLC", " Ltd"];

/// How a supplier base name is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierNameStrategy {
    /// Faker company name without its legal form
    Company,
    /// First word of a business buzz phrase plus a supplier type
    Business,
    /// Faker last name plus a supplier type
    Combined,
}

impl SupplierNameStrategy {
    pub const ALL: [SupplierNameStrategy; 3] = [
        SupplierNameStrategy::Company,
        SupplierNameStrategy::Business,
        SupplierNameStrategy::Combined,
    ];
}

/// Inclusive range of valid category ids.
pub fn category_id_range() -> (i32, i32) {
    (1, CATEGORIES.len() as i32)
}

/// Product name for a row index.
pub fn product_name(index: u64) -> &'static str {
    PRODUCT_NAMES[(index % PRODUCT_NAMES.len() as u64) as usize]
}

/// Remove one trailing legal form from a company name.
pub fn strip_company_form(name: &str) -> &str {
    COMPANY_FORMS
        .iter()
        .find_map(|form| name.strip_suffix(form))
        .unwrap_or(name)
}

/// Generate a supplier name.
///
/// Choices (strategy, type, suffix) come from `decisions`; faker content
/// comes from `faker`.
pub fn generate_supplier_name<D: Rng, F: Rng>(decisions: &mut D, faker: &mut F) -> String {
    let strategy = *SupplierNameStrategy::ALL
        .choose(decisions)
        .unwrap_or(&SupplierNameStrategy::Combined);

    let base = match strategy {
        SupplierNameStrategy::Company => {
            let company: String = CompanyName().fake_with_rng(faker);
            strip_company_form(&company).to_string()
        }
        SupplierNameStrategy::Business => {
            let phrase: String = Bs().fake_with_rng(faker);
            let first = phrase.split_whitespace().next().unwrap_or("Prime");
            format!("{} {}", title_case(first), supplier_type(decisions))
        }
        SupplierNameStrategy::Combined => {
            let last: String = LastName().fake_with_rng(faker);
            format!("{last} {}", supplier_type(decisions))
        }
    };

    match SUPPLIER_SUFFIXES.choose(decisions) {
        Some(suffix) if !suffix.is_empty() => format!("{base} {suffix}"),
        _ => base,
    }
}

fn supplier_type<R: Rng>(rng: &mut R) -> &'static str {
    SUPPLIER_TYPES.choose(rng).copied().unwrap_or("Supply")
}
