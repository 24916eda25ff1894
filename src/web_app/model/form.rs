// web_app/model/form.rs - Raw form text and its validation
//
// Inputs hold strings so a field can be empty while the user types.
// Conversion into typed values happens only on submit.

use thiserror::Error;

use super::{Product, ProductFilters, ProductInput, ProductPatch};

/// Validation failures of the product form
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required")]
    NameRequired,
    #[error("Price must be a non-negative number")]
    InvalidPrice,
}

/// Whether the product form creates a new record or edits an existing one
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Product",
            FormMode::Edit { .. } => "Edit Product",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Edit { .. } => "Update",
        }
    }
}

/// Unvalidated contents of the product form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
}

/// What a valid form submission sends to the products service
#[derive(Clone, Debug, PartialEq)]
pub enum SaveRequest {
    Create(ProductInput),
    Update { id: String, patch: ProductPatch },
}

impl ProductDraft {
    /// Initial state of the create form
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            price: "0".to_string(),
        }
    }

    pub fn validate(&self) -> Result<ProductInput, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::NameRequired);
        }
        let price = parse_price(&self.price).ok_or(FormError::InvalidPrice)?;
        Ok(ProductInput {
            name: name.to_string(),
            price,
        })
    }

    /// Validate and turn the draft into the request for `mode`
    ///
    /// An invalid draft yields no request at all.
    pub fn to_request(&self, mode: &FormMode) -> Result<SaveRequest, FormError> {
        let input = self.validate()?;
        Ok(match mode {
            FormMode::Create => SaveRequest::Create(input),
            FormMode::Edit { id } => SaveRequest::Update {
                id: id.clone(),
                patch: ProductPatch::from(input),
            },
        })
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
        }
    }
}

/// Text shown when a submit fails, "Failed" if there is nothing better
pub fn failure_text(message: &str) -> String {
    if message.trim().is_empty() {
        "Failed".to_string()
    } else {
        message.to_string()
    }
}

/// Parse a non-negative, finite price
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

/// Unvalidated contents of the search bar
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchDraft {
    pub name: String,
    pub price_min: String,
    pub price_max: String,
}

impl SearchDraft {
    /// Empty fields and unparseable numbers become "no filter"
    pub fn to_filters(&self) -> ProductFilters {
        let name = self.name.trim();
        ProductFilters {
            name: (!name.is_empty()).then(|| name.to_string()),
            price_min: parse_bound(&self.price_min),
            price_max: parse_bound(&self.price_max),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.price_min.clear();
        self.price_max.clear();
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
