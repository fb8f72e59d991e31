// tests/support/builders.rs
use lumezza_catalog::domain::product::{
    Product, ProductCatalog, ProductId, ProductPrice, ProductTitle,
};

pub struct ProductBuilder {
    id: i64,
    title: String,
    description: String,
    price: f64,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Gold Ring".into(),
            description: "14k yellow gold band.".into(),
            price: 1200.0,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn build(self) -> Product {
        Product::new(
            ProductId(self.id),
            ProductTitle::new(self.title),
            self.description,
            ProductPrice::new(self.price).unwrap(),
        )
    }
}

/// Gold Ring (1), Silver Band (2), and a title that collides with Gold Ring (3).
pub fn sample_catalog() -> ProductCatalog {
    ProductCatalog::from(vec![
        ProductBuilder::new().id(1).title("Gold Ring").build(),
        ProductBuilder::new()
            .id(2)
            .title("Silver Band")
            .description("Sterling silver.")
            .price(85.5)
            .build(),
        ProductBuilder::new().id(3).title("GOLD RING!").price(990.0).build(),
    ])
}
