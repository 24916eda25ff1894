// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON contract of the products REST service and
// are used by the API client, the components and the tests alike.
// Nothing in here depends on Leptos, so the module compiles without features.

use serde::{Deserialize, Serialize};

pub mod form;
pub mod pager;

pub use form::{failure_text, FormError, FormMode, ProductDraft, SaveRequest, SearchDraft};
pub use pager::{total_pages, Pager};

/// Fixed number of rows requested per page
pub const PAGE_SIZE: u32 = 10;

/// Product as returned by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Body of `POST /products`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
}

/// Body of `PUT /products/{id}`; only the fields that are set are sent
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl From<ProductInput> for ProductPatch {
    fn from(input: ProductInput) -> Self {
        Self {
            name: Some(input.name),
            price: Some(input.price),
        }
    }
}

/// Every success body wraps its payload in `data`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Pagination block of a list response
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }
}

/// One page of `GET /products`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub pagination: Pagination,
}

/// Search filters applied by user
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilters {
    pub name: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl ProductFilters {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price_min.is_none() && self.price_max.is_none()
    }
}

/// Everything needed to request one page of products
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub filters: ProductFilters,
    pub page: u32,
    pub page_size: u32,
}

impl ListQuery {
    pub fn new(filters: ProductFilters, page: u32) -> Self {
        Self {
            filters,
            page,
            page_size: PAGE_SIZE,
        }
    }

    /// Query string parameters, absent filters omitted
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(name) = self.filters.name.as_deref().filter(|n| !n.is_empty()) {
            pairs.push(("name", name.to_string()));
        }
        if let Some(min) = self.filters.price_min {
            pairs.push(("price_min", min.to_string()));
        }
        if let Some(max) = self.filters.price_max {
            pairs.push(("price_max", max.to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("page_size", self.page_size.to_string()));
        pairs
    }
}

/// Format a yen amount the way a ja-JP locale prints it, e.g. `¥1,234.5`
pub fn format_price(price: f64) -> String {
    let rounded = format!("{:.3}", price.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 && (int_part != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac.is_empty() {
        format!("¥{sign}{grouped}")
    } else {
        format!("¥{sign}{grouped}.{frac}")
    }
}
