// web_app/components/search.rs - Search and paging controls
//
// - SearchBar: name / min price / max price fields with Search and Refresh
// - Pagination: Prev / Next controls under the product table

use leptos::prelude::*;

use super::common::{Button, LabeledInput, SecondaryButton};
use crate::web_app::model::{Pager, ProductFilters, SearchDraft};

/// Search bar component
///
/// Keeps its own field text and only reports filters when the user
/// presses Search (or Enter), or clears them with Refresh.
#[component]
pub fn SearchBar(
    /// Called with the new filters on search and on reset
    on_search: Callback<ProductFilters>,
) -> impl IntoView {
    // Local state for the inputs (typing does not trigger a fetch)
    let name = RwSignal::new(String::new());
    let price_min = RwSignal::new(String::new());
    let price_max = RwSignal::new(String::new());

    let draft = move || SearchDraft {
        name: name.get_untracked(),
        price_min: price_min.get_untracked(),
        price_max: price_max.get_untracked(),
    };

    let search = Callback::new(move |()| {
        on_search.run(draft().to_filters());
    });

    let reset = Callback::new(move |()| {
        let mut cleared = draft();
        cleared.clear();
        name.set(cleared.name);
        price_min.set(cleared.price_min);
        price_max.set(cleared.price_max);
        on_search.run(ProductFilters::default());
    });

    view! {
        <div class="p-4 bg-white shadow rounded flex gap-4 items-end flex-wrap">
            <LabeledInput label="Name" value=name placeholder="Search by name" on_enter=search />
            <LabeledInput
                label="Min Price"
                value=price_min
                input_type="number"
                placeholder="0"
                on_enter=search
            />
            <LabeledInput
                label="Max Price"
                value=price_max
                input_type="number"
                placeholder="100000"
                on_enter=search
            />
            <div class="flex gap-2">
                <Button on_click=search>"Search"</Button>
                <SecondaryButton on_click=reset>"Refresh"</SecondaryButton>
            </div>
        </div>
    }
}

/// Pagination component
///
/// Hidden when everything fits on one page.
#[component]
pub fn Pagination(
    /// Current page (1-based)
    current_page: RwSignal<u32>,
    /// Number of pages in the current result
    #[prop(into)]
    total_pages: Signal<u32>,
) -> impl IntoView {
    let pager = move || Pager::new(current_page.get(), total_pages.get());

    let go_prev = move |_| current_page.set(pager().prev());
    let go_next = move |_| current_page.set(pager().next());

    view! {
        <Show when=move || pager().is_visible()>
            <div class="flex justify-center items-center gap-3 mt-4">
                <button
                    type="button"
                    class="px-3 py-1 rounded bg-gray-200 hover:bg-gray-300 disabled:opacity-50"
                    disabled=move || !pager().can_go_prev()
                    on:click=go_prev
                >
                    "Prev"
                </button>

                <span class="text-sm text-gray-700">
                    "Page " {move || pager().page()} " of " {move || pager().total_pages()}
                </span>

                <button
                    type="button"
                    class="px-3 py-1 rounded bg-gray-200 hover:bg-gray-300 disabled:opacity-50"
                    disabled=move || !pager().can_go_next()
                    on:click=go_next
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
