// common/mod.rs - In-memory products service for integration tests
//
// Each call to `spawn_backend` starts a fresh actix-web server on a random
// local port, seeded from the shared fixtures. Tests talk to it through the
// real `ProductApi`, so URLs, JSON shapes and status handling are exercised
// end to end without an external service.

#![allow(dead_code)]

use std::sync::Mutex;

use actix_web::{web, App, HttpResponse, HttpServer};
use serde::Deserialize;
use serde_json::json;

use products_ui::fixtures::{ProductsSeed, SeedData};
use products_ui::web_app::api::{ApiConfig, ProductApi};
use products_ui::web_app::model::{Product, ProductInput, ProductPatch};

/// Shared state of one mock backend
pub struct Catalog {
    products: Mutex<Vec<Product>>,
    next_id: Mutex<u32>,
}

impl Catalog {
    fn seeded() -> Self {
        let products = ProductsSeed::records();
        let next_id = products.len() as u32 + 1;
        Self {
            products: Mutex::new(products),
            next_id: Mutex::new(next_id),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListParams {
    name: Option<String>,
    price_min: Option<f64>,
    price_max: Option<f64>,
    page: Option<u32>,
    page_size: Option<u32>,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "product not found" }))
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message }))
}

async fn list_products(
    catalog: web::Data<Catalog>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(10).max(1);
    let needle = params.name.as_deref().map(str::to_lowercase);

    let products = catalog.products.lock().unwrap();
    let matching: Vec<&Product> = products
        .iter()
        .filter(|p| {
            needle
                .as_deref()
                .map_or(true, |n| p.name.to_lowercase().contains(n))
        })
        .filter(|p| params.price_min.map_or(true, |min| p.price >= min))
        .filter(|p| params.price_max.map_or(true, |max| p.price <= max))
        .collect();

    let start = ((page - 1) * page_size) as usize;
    let data: Vec<&Product> = matching
        .iter()
        .skip(start)
        .take(page_size as usize)
        .copied()
        .collect();

    HttpResponse::Ok().json(json!({
        "data": data,
        "pagination": {
            "total": matching.len(),
            "page": page,
            "page_size": page_size,
        }
    }))
}

async fn get_product(catalog: web::Data<Catalog>, id: web::Path<String>) -> HttpResponse {
    let products = catalog.products.lock().unwrap();
    match products.iter().find(|p| p.id == *id) {
        Some(product) => HttpResponse::Ok().json(json!({ "data": product })),
        None => not_found(),
    }
}

async fn create_product(
    catalog: web::Data<Catalog>,
    input: web::Json<ProductInput>,
) -> HttpResponse {
    if input.name.trim().is_empty() {
        return bad_request("name is required");
    }

    let mut next_id = catalog.next_id.lock().unwrap();
    let product = Product {
        id: format!("prd-{:03}", *next_id),
        name: input.name.clone(),
        price: input.price,
    };
    *next_id += 1;

    catalog.products.lock().unwrap().push(product.clone());
    HttpResponse::Created().json(json!({ "data": product }))
}

async fn update_product(
    catalog: web::Data<Catalog>,
    id: web::Path<String>,
    patch: web::Json<ProductPatch>,
) -> HttpResponse {
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return bad_request("name is required");
    }

    let mut products = catalog.products.lock().unwrap();
    let Some(product) = products.iter_mut().find(|p| p.id == *id) else {
        return not_found();
    };
    if let Some(name) = &patch.name {
        product.name = name.clone();
    }
    if let Some(price) = patch.price {
        product.price = price;
    }
    HttpResponse::Ok().json(json!({ "data": product }))
}

async fn delete_product(catalog: web::Data<Catalog>, id: web::Path<String>) -> HttpResponse {
    let mut products = catalog.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p.id != *id);
    if products.len() == before {
        return not_found();
    }
    HttpResponse::NoContent().finish()
}

/// Start a seeded backend and return a client pointed at it
///
/// Must be called from inside an actix runtime (`#[actix_web::test]`).
pub fn spawn_backend() -> anyhow::Result<ProductApi> {
    let catalog = web::Data::new(Catalog::seeded());

    let server = HttpServer::new(move || {
        App::new().app_data(catalog.clone()).service(
            web::scope("/api/v1")
                .route("/products", web::get().to(list_products))
                .route("/products", web::post().to(create_product))
                .route("/products/{id}", web::get().to(get_product))
                .route("/products/{id}", web::put().to(update_product))
                .route("/products/{id}", web::delete().to(delete_product)),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("mock backend did not bind"))?;

    actix_web::rt::spawn(server.run());

    let config = ApiConfig::new(&format!("http://{addr}/api/v1"))?;
    Ok(ProductApi::new(config))
}
