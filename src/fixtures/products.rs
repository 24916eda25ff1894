// fixtures/products.rs - A small catalog of realistic products
//
// 23 items: enough for three pages at the fixed page size of 10, with a
// few names sharing words so name filters match more than one row.

use super::SeedData;
use crate::web_app::model::Product;

pub struct ProductsSeed;

const CATALOG: &[(&str, f64)] = &[
    ("Sencha Green Tea 100g", 880.0),
    ("Matcha Powder 30g", 1620.0),
    ("Hojicha Roasted Tea 80g", 740.0),
    ("Genmaicha Tea Bags x20", 520.0),
    ("Cast Iron Teapot", 6800.0),
    ("Porcelain Tea Cup", 1200.0),
    ("Bamboo Whisk", 2350.0),
    ("Ceramic Matcha Bowl", 4100.0),
    ("Electric Kettle 1.0L", 5980.0),
    ("Glass Tea Infuser", 990.0),
    ("Drip Coffee Set", 3450.0),
    ("Coffee Beans Dark Roast 200g", 1480.0),
    ("Coffee Filter Papers x100", 330.0),
    ("Hand Coffee Grinder", 7200.0),
    ("Stainless Travel Mug", 2780.0),
    ("Wooden Coaster Set", 1100.0),
    ("Linen Tea Towel", 1650.0),
    ("Tea Canister 200g", 1980.0),
    ("Kyusu Side Handle Teapot", 5400.0),
    ("Barley Tea Bags x50", 398.0),
    ("Yuzu Honey Jar", 1280.0),
    ("Mizudashi Cold Brew Bottle", 2200.0),
    ("Sample Tasting Kit", 0.0),
];

impl SeedData for ProductsSeed {
    type Record = Product;

    fn records() -> Vec<Product> {
        CATALOG
            .iter()
            .enumerate()
            .map(|(i, (name, price))| Product {
                id: format!("prd-{:03}", i + 1),
                name: name.to_string(),
                price: *price,
            })
            .collect()
    }
}
