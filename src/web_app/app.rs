// web_app/app.rs - Root application component
//
// Sets up meta tags, the products API client context and routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::api::{ApiConfig, ProductApi};
use crate::web_app::pages::ProductsPage;

/// Page title shown in the browser tab
pub const APP_TITLE: &str = "Products";

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The `ProductApi` context used by the table and the forms
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    // A caller (tests, an embedding host) may provide its own client first
    if use_context::<ProductApi>().is_none() {
        provide_context(ProductApi::new(ApiConfig::resolve()));
    }

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Manage the products catalog" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/products_ui.css" />

        <Router>
            <main class="min-h-screen bg-gray-50 text-gray-900">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProductsPage />
                    <Route path=path!("/products") view=ProductsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded hover:bg-blue-700"
                >
                    "Back to Products"
                </a>
            </div>
        </div>
    }
}

/// Publishes the products service URL the server resolved, so the
/// hydrated client calls the same backend
#[cfg(feature = "ssr")]
#[component]
pub fn ApiBaseMeta(config: ApiConfig) -> impl IntoView {
    use crate::web_app::api::config::API_BASE_META;

    view! { <meta name=API_BASE_META content=config.base_url().to_string() /> }
}

/// HTML document shell used by the server for every route
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <ApiBaseMeta config=ApiConfig::from_env() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}
