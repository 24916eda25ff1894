// web_app/pages/products.rs - Products page component
//
// Composes the search bar, the product table and the create/edit dialogs.
// The page owns the filters and a reload counter; bumping the counter after
// a successful create or update makes the table fetch again.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::{FormMode, Product, ProductDraft, ProductFilters};

/// Main products page component
#[component]
pub fn ProductsPage() -> impl IntoView {
    let filters = RwSignal::new(ProductFilters::default());
    let reload = RwSignal::new(0_u32);

    // Dialog state
    let is_create_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Product>);

    let bump_reload = move || reload.update(|k| *k += 1);

    let on_search = Callback::new(move |next: ProductFilters| {
        tracing::debug!("Applying filters: {:?}", next);
        filters.set(next);
    });

    let open_create = Callback::new(move |()| is_create_open.set(true));
    let close_create = Callback::new(move |()| is_create_open.set(false));
    let on_created = Callback::new(move |_: Product| {
        is_create_open.set(false);
        bump_reload();
    });

    let on_edit = Callback::new(move |product: Product| editing.set(Some(product)));
    let close_edit = Callback::new(move |()| editing.set(None));
    let on_updated = Callback::new(move |_: Product| {
        editing.set(None);
        bump_reload();
    });

    view! {
        <div class="w-full max-w-7xl mx-auto p-6">
            <div class="flex justify-between items-center mb-4">
                <h1 class="text-2xl font-bold">"Products"</h1>
                <Button on_click=open_create>"+ Add Product"</Button>
            </div>

            <div class="mb-4">
                <SearchBar on_search=on_search />
            </div>

            <ProductTable filters=filters reload=reload on_edit=on_edit />

            // Create dialog
            <Show when=move || is_create_open.get()>
                <FormModal title=FormMode::Create.title() on_close=close_create>
                    <ProductForm
                        mode=FormMode::Create
                        initial=ProductDraft::blank()
                        on_saved=on_created
                    />
                </FormModal>
            </Show>

            // Edit dialog
            {move || editing.get().map(|product| {
                let mode = FormMode::Edit { id: product.id.clone() };
                let title = mode.title();
                view! {
                    <FormModal title=title on_close=close_edit>
                        <ProductForm
                            mode=mode
                            initial=ProductDraft::from(&product)
                            on_saved=on_updated
                        />
                    </FormModal>
                }
            })}
        </div>
    }
}
