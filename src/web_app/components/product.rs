// web_app/components/product.rs - Product table and product form
//
// - ProductTable: fetches one page of products, renders rows, paging and
//   the delete confirmation
// - ProductRow: a single table row with Edit / Delete actions
// - ProductForm: shared create/edit form with validation, busy and error state

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::SubmitEvent;

use super::common::{
    Button, ConfirmModal, ErrorBanner, ErrorDisplay, LabeledInput, LoadingOverlay, PriceDisplay,
};
use super::search::Pagination;
use crate::web_app::api::ProductApi;
use crate::web_app::model::{
    failure_text, total_pages, FormMode, ListQuery, Pager, Product, ProductDraft,
    ProductFilters, PAGE_SIZE,
};

/// Paged product table
///
/// Re-fetches whenever the filters, the page, the external reload counter
/// or its own post-delete counter change. A filter change starts over at
/// page 1. Only the most recent request may update the rows.
#[component]
pub fn ProductTable(
    /// Filters from the search bar
    #[prop(into)]
    filters: Signal<ProductFilters>,
    /// Bumped by the page after a create or update
    #[prop(into)]
    reload: Signal<u32>,
    /// Edit button handler
    on_edit: Callback<Product>,
) -> impl IntoView {
    let api = StoredValue::new(expect_context::<ProductApi>());

    // Pagination state
    let page = RwSignal::new(1_u32);
    let total = RwSignal::new(0_u64);

    // Loaded data
    let rows = RwSignal::new(Vec::<Product>::new());
    let rows_page = RwSignal::new(1_u32);
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let latest_request = StoredValue::new(0_u64);

    // Delete state
    let delete_id = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);
    let delete_error = RwSignal::new(None::<String>);
    let refresh = RwSignal::new(0_u32);

    let fetch = move |query: ListQuery| {
        let request_id = latest_request.get_value() + 1;
        latest_request.set_value(request_id);
        loading.set(true);
        load_error.set(None);

        let api = api.get_value();
        spawn_local(async move {
            let result = api.list_products(&query).await;

            // Superseded by a newer request, or the table is gone
            if latest_request.try_get_value() != Some(request_id) {
                return;
            }

            match result {
                Ok(loaded) => {
                    let pager = Pager::new(query.page, loaded.pagination.total_pages());
                    if pager.clamped() != query.page {
                        tracing::debug!("Page {} is past the end, moving to {}", query.page, pager.clamped());
                        page.set(pager.clamped());
                        return;
                    }
                    total.set(loaded.pagination.total);
                    rows_page.set(query.page);
                    rows.set(loaded.data);
                }
                Err(e) => {
                    tracing::warn!("Failed to load products: {}", e);
                    load_error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    let last_filters = StoredValue::new(filters.get_untracked());
    Effect::new(move || {
        let current = filters.get();
        let requested_page = page.get();
        reload.track();
        refresh.track();

        if last_filters.with_value(|last| *last != current) {
            last_filters.set_value(current.clone());
            if requested_page != 1 {
                // The page change re-runs this effect
                page.set(1);
                return;
            }
        }
        fetch(ListQuery::new(current, requested_page));
    });

    let on_delete = Callback::new(move |id: String| {
        delete_error.set(None);
        delete_id.set(Some(id));
    });

    let cancel_delete = Callback::new(move |()| delete_id.set(None));

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        delete_id.set(None);
        deleting.set(true);

        let api = api.get_value();
        spawn_local(async move {
            let result = api.delete_product(&id).await;
            if deleting.try_get_untracked().is_none() {
                return;
            }
            deleting.set(false);
            match result {
                // Reload the current page
                Ok(()) => refresh.update(|n| *n += 1),
                Err(e) => delete_error.set(Some(failure_text(&e.user_message()))),
            }
        });
    });

    let page_count = Signal::derive(move || total_pages(total.get(), PAGE_SIZE));

    view! {
        <Show
            when=move || load_error.with(Option::is_none)
            fallback=move || view! { <ErrorDisplay error=load_error.get().unwrap_or_default() /> }
        >
            <div class="relative">
                {move || delete_error.get().map(|error| view! {
                    <div class="mb-3">
                        <ErrorBanner error=error />
                    </div>
                })}

                <table class="min-w-full bg-white shadow rounded overflow-hidden">
                    <thead>
                        <tr class="bg-gray-100 text-center text-gray-700">
                            <th class="p-3 font-semibold">"#"</th>
                            <th class="p-3 font-semibold">"Name"</th>
                            <th class="p-3 font-semibold">"Price"</th>
                            <th class="p-3 font-semibold">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                view! {
                                    <tr>
                                        <td colspan="4" class="text-center p-6 text-gray-500">"Loading..."</td>
                                    </tr>
                                }.into_any()
                            } else if rows.with(Vec::is_empty) {
                                view! {
                                    <tr>
                                        <td colspan="4" class="text-center p-6 text-gray-500">"No products found"</td>
                                    </tr>
                                }.into_any()
                            } else {
                                let pager = Pager::new(rows_page.get(), page_count.get());
                                rows.get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, product)| view! {
                                        <ProductRow
                                            number=pager.row_number(index, PAGE_SIZE)
                                            product=product
                                            on_edit=on_edit
                                            on_delete=on_delete
                                        />
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>

                <Pagination current_page=page total_pages=page_count />

                {move || delete_id.get().map(|_| view! {
                    <ConfirmModal
                        title="Delete Product"
                        message="Are you sure you want to delete this product?"
                        confirm_label="Delete"
                        confirm_class="bg-red-600 hover:bg-red-700"
                        on_confirm=confirm_delete
                        on_cancel=cancel_delete
                    />
                })}

                <LoadingOverlay show=deleting />
            </div>
        </Show>
    }
}

/// One product row
#[component]
pub fn ProductRow(
    /// Running number across pages
    number: usize,
    product: Product,
    on_edit: Callback<Product>,
    /// Called with the product id
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = product.id.clone();
    let name = product.name.clone();
    let price = product.price;

    view! {
        <tr class="border-b last:border-b-0 odd:bg-white even:bg-gray-50 hover:bg-blue-50 transition text-center text-black">
            <td class="p-3">{number}</td>
            <td class="p-3">{name}</td>
            <td class="p-3"><PriceDisplay price=price /></td>
            <td class="p-3">
                <div class="flex gap-3 justify-center">
                    <button
                        type="button"
                        class="px-3 py-1 rounded bg-blue-100 text-blue-700 hover:bg-blue-200"
                        on:click=move |_| on_edit.run(product.clone())
                    >
                        "Edit"
                    </button>
                    <button
                        type="button"
                        class="px-3 py-1 rounded bg-red-100 text-red-700 hover:bg-red-200"
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        "Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}

/// Create/edit form for a product
///
/// Validates locally before any request. While the request is in flight
/// the submit button is disabled and reads "Saving...".
#[component]
pub fn ProductForm(
    /// Create a new product or update an existing one
    mode: FormMode,
    /// Initial field values
    initial: ProductDraft,
    /// Called with the saved product after a successful request
    on_saved: Callback<Product>,
) -> impl IntoView {
    let api = StoredValue::new(expect_context::<ProductApi>());
    let submit_label = mode.submit_label();
    let mode = StoredValue::new(mode);

    let name = RwSignal::new(initial.name);
    let price = RwSignal::new(initial.price);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);

        let draft = ProductDraft {
            name: name.get_untracked(),
            price: price.get_untracked(),
        };
        let request = match mode.with_value(|mode| draft.to_request(mode)) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        busy.set(true);
        let api = api.get_value();
        spawn_local(async move {
            let result = api.save(&request).await;
            if busy.try_get_untracked().is_none() {
                return;
            }
            busy.set(false);
            match result {
                Ok(product) => on_saved.run(product),
                Err(e) => error.set(Some(failure_text(&e.user_message()))),
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4" novalidate=true>
            {move || error.get().map(|error| view! { <ErrorBanner error=error /> })}
            <LabeledInput label="Name" value=name required=true />
            <LabeledInput label="Price (JPY)" value=price input_type="number" required=true />
            <Button button_type="submit" disabled=busy>
                {move || if busy.get() { "Saving..." } else { submit_label }}
            </Button>
        </form>
    }
}
