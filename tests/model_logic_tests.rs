// tests/model_logic_tests.rs - Page logic without a browser or a backend
//
// The components delegate their decisions (what to send, which page to
// show, what to tell the user) to plain model types. These tests walk the
// same flows the page goes through, using only the public model API.

use products_ui::fixtures::{ProductsSeed, SeedData};
use products_ui::web_app::model::{
    failure_text, format_price, total_pages, FormError, FormMode, ListQuery, Pager,
    ProductDraft, ProductFilters, ProductPatch, SearchDraft, PAGE_SIZE,
};

// ===== Search bar =====

#[test]
fn test_search_draft_to_query() {
    let draft = SearchDraft {
        name: "  matcha ".to_string(),
        price_min: "500".to_string(),
        price_max: String::new(),
    };
    let query = ListQuery::new(draft.to_filters(), 1);

    assert_eq!(
        query.query_pairs(),
        vec![
            ("name", "matcha".to_string()),
            ("price_min", "500".to_string()),
            ("page", "1".to_string()),
            ("page_size", PAGE_SIZE.to_string()),
        ]
    );
}

#[test]
fn test_search_draft_drops_unparseable_bounds() {
    let draft = SearchDraft {
        name: String::new(),
        price_min: "cheap".to_string(),
        price_max: "1e3".to_string(),
    };
    let filters = draft.to_filters();

    assert_eq!(filters.price_min, None);
    assert_eq!(filters.price_max, Some(1000.0));
}

#[test]
fn test_blank_search_equals_refresh() {
    let mut draft = SearchDraft {
        name: "kettle".to_string(),
        price_min: "1".to_string(),
        price_max: "2".to_string(),
    };
    draft.clear();

    assert!(draft.to_filters().is_empty());
    assert_eq!(draft.to_filters(), ProductFilters::default());
}

#[test]
fn test_zero_bound_is_kept() {
    let draft = SearchDraft {
        price_min: "0".to_string(),
        ..Default::default()
    };
    let pairs = ListQuery::new(draft.to_filters(), 1).query_pairs();

    assert!(pairs.contains(&("price_min", "0".to_string())));
}

// ===== Pagination =====

#[test]
fn test_total_pages() {
    let cases = [(0, 0), (1, 1), (10, 1), (11, 2), (23, 3), (100, 10)];
    for (total, expected) in cases {
        assert_eq!(total_pages(total, PAGE_SIZE), expected, "total {}", total);
    }
}

#[test]
fn test_walk_through_seeded_catalog() {
    let pages = total_pages(ProductsSeed::records().len() as u64, PAGE_SIZE);
    let mut pager = Pager::new(1, pages);

    assert!(pager.is_visible());
    assert!(!pager.can_go_prev());

    let mut visited = vec![pager.page()];
    while pager.can_go_next() {
        pager = Pager::new(pager.next(), pages);
        visited.push(pager.page());
    }

    assert_eq!(visited, vec![1, 2, 3]);
    assert!(pager.can_go_prev());
    assert_eq!(pager.next(), 3);
    assert_eq!(pager.prev(), 2);
}

#[test]
fn test_single_page_hides_controls() {
    assert!(!Pager::new(1, 1).is_visible());
    assert!(!Pager::new(1, 0).is_visible());
}

#[test]
fn test_row_numbers_continue_across_pages() {
    let second = Pager::new(2, 3);
    assert_eq!(second.row_number(0, PAGE_SIZE), 11);
    assert_eq!(second.row_number(9, PAGE_SIZE), 20);
}

#[test]
fn test_deleting_last_row_of_last_page_moves_back() {
    // 21 products: page 3 holds a single row
    let before = Pager::new(3, total_pages(21, PAGE_SIZE));
    assert_eq!(before.clamped(), 3);

    let after = Pager::new(3, total_pages(20, PAGE_SIZE));
    assert_eq!(after.clamped(), 2);

    let emptied = Pager::new(1, total_pages(0, PAGE_SIZE));
    assert_eq!(emptied.clamped(), 1);
}

// ===== Create / edit form =====

#[test]
fn test_create_form_defaults() {
    let draft = ProductDraft::blank();
    assert_eq!(draft.name, "");
    assert_eq!(draft.price, "0");
    assert_eq!(draft.validate(), Err(FormError::NameRequired));

    assert_eq!(FormMode::Create.title(), "Add Product");
    assert_eq!(FormMode::Create.submit_label(), "Create");
}

#[test]
fn test_edit_form_round_trip() {
    let product = ProductsSeed::records().remove(1);
    let mode = FormMode::Edit {
        id: product.id.clone(),
    };
    assert_eq!(mode.title(), "Edit Product");
    assert_eq!(mode.submit_label(), "Update");

    let mut draft = ProductDraft::from(&product);
    assert_eq!(draft.name, product.name);

    draft.price = "1700".to_string();
    let patch = ProductPatch::from(draft.validate().unwrap());

    assert_eq!(patch.name.as_deref(), Some(product.name.as_str()));
    assert_eq!(patch.price, Some(1700.0));
}

#[test]
fn test_form_rejects_bad_price() {
    for price in ["", "abc", "-1", "NaN", "inf"] {
        let draft = ProductDraft {
            name: "Tea".to_string(),
            price: price.to_string(),
        };
        assert_eq!(draft.validate(), Err(FormError::InvalidPrice), "price {:?}", price);
    }
}

#[test]
fn test_form_error_messages() {
    assert_eq!(FormError::NameRequired.to_string(), "Name is required");
    assert_eq!(
        FormError::InvalidPrice.to_string(),
        "Price must be a non-negative number"
    );
}

#[test]
fn test_failure_text_fallback() {
    assert_eq!(failure_text(""), "Failed");
    assert_eq!(failure_text("  "), "Failed");
    assert_eq!(failure_text("product not found"), "product not found");
}

// ===== Display =====

#[test]
fn test_seeded_prices_render() {
    let rendered: Vec<String> = ProductsSeed::records()
        .iter()
        .map(|p| format_price(p.price))
        .collect();

    assert!(rendered.iter().all(|p| p.starts_with('¥')));
    assert!(rendered.contains(&"¥6,800".to_string()));
    assert!(rendered.contains(&"¥0".to_string()));
}
