//! Builders and canonical catalogs shared by the workspace's tests and benches.

use catalog_core::config::SeedConfig;
use catalog_core::models::{derive_status, Product, ProductDraft, ProductId, ProductStatus};
use catalog_core::traits::IProductStore;
use catalog_store::seed::generate_drafts;
use catalog_store::ProductStore;
use rust_decimal::Decimal;

/// Fluent builder for a fully-formed [`Product`].
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            product: Product {
                id: ProductId(id),
                name: name.to_string(),
                category: "Sports".to_string(),
                brand: "Sportify".to_string(),
                price: Decimal::new(1000, 2),
                stock: 20,
                status: ProductStatus::InStock,
                description: String::new(),
                rating: 4.0,
                image_ref: format!("https://picsum.photos/seed/{id}/100/100"),
            },
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.product.category = category.to_string();
        self
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.product.brand = brand.to_string();
        self
    }

    /// Whole currency units.
    pub fn price(mut self, price: i64) -> Self {
        self.product.price = Decimal::from(price);
        self
    }

    pub fn price_decimal(mut self, price: Decimal) -> Self {
        self.product.price = price;
        self
    }

    /// Sets stock and derives the status from it.
    pub fn stock(mut self, stock: u32) -> Self {
        self.product.stock = stock;
        self.product.status = derive_status(stock);
        self
    }

    pub fn status(mut self, status: ProductStatus) -> Self {
        self.product.status = status;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.product.rating = rating;
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

pub fn product(id: u64, name: &str) -> ProductBuilder {
    ProductBuilder::new(id, name)
}

/// A draft with sensible defaults for store tests.
pub fn draft(name: &str, category: &str, price: i64, stock: u32) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: category.to_string(),
        brand: "Sportify".to_string(),
        price: Decimal::from(price),
        stock,
        description: String::new(),
        rating: 4.0,
        image_ref: String::new(),
    }
}

/// Red Shoe (id 1, Sports, 50, stock 0) and Blue Shoe (id 2, Sports, 80, stock 20).
pub fn shoes() -> Vec<Product> {
    vec![
        product(1, "Red Shoe").category("Sports").price(50).stock(0).build(),
        product(2, "Blue Shoe").category("Sports").price(80).stock(20).build(),
    ]
}

/// Same two shoes as drafts, for building a store with ids 1 and 2.
pub fn shoe_drafts() -> Vec<ProductDraft> {
    vec![
        draft("Red Shoe", "Sports", 50, 0),
        draft("Blue Shoe", "Sports", 80, 20),
    ]
}

/// A small mixed catalog covering every category and status.
pub fn mixed_catalog() -> Vec<Product> {
    vec![
        product(1, "Red Shoe").category("Sports").price(50).stock(0).build(),
        product(2, "Blue Shoe").category("Sports").price(80).stock(20).build(),
        product(3, "Laptop").category("Electronics").brand("TechGear").price(900).stock(5).build(),
        product(4, "Headphones").category("Electronics").brand("TechGear").price(80).stock(40).build(),
        product(5, "T-Shirt").category("Clothing").brand("Clothify").price(20).stock(12).build(),
        product(6, "Shoe Rack").category("Home").brand("HomePro").price(35).stock(3).build(),
        product(7, "Yo-yo").category("Toys").brand("FitLife").price(5).stock(0).build(),
        product(8, "Running Shoe").category("Sports").brand("FitLife").price(120).stock(9).build(),
    ]
}

/// Reproducible generated catalog of `count` products.
pub fn seeded_catalog(count: usize, seed: u64) -> Vec<Product> {
    seeded_store(count, seed).products().to_vec()
}

pub fn seeded_store(count: usize, seed: u64) -> ProductStore {
    let config = SeedConfig {
        product_count: count,
        rng_seed: Some(seed),
        ..SeedConfig::default()
    };
    ProductStore::from_drafts(generate_drafts(&config)).expect("generated drafts are valid")
}
