use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::product::entity::Product;
use crate::domain::product::slug::generate_slug;
use crate::domain::product::value_objects::ProductId;

/// Return the first product, in sequence order, whose title slugifies to
/// `slug`. The comparison is exact; `slug` is not normalised first.
pub fn find_product_by_slug<'a>(products: &'a [Product], slug: &str) -> Option<&'a Product> {
    products
        .iter()
        .find(|product| generate_slug(product.title.as_str()) == slug)
}

/// Return the first product, in sequence order, carrying `id`.
pub fn find_product_by_id(products: &[Product], id: ProductId) -> Option<&Product> {
    products.iter().find(|product| product.id == id)
}

/// Immutable, ordered snapshot of the catalog.
///
/// Clones share the same backing slice.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Arc<[Product]>,
}

/// Products whose titles produce the same slug. Only the first id is
/// reachable through slug lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCollision {
    pub slug: String,
    pub ids: Vec<ProductId>,
}

impl ProductCatalog {
    pub fn new(products: impl Into<Arc<[Product]>>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        find_product_by_slug(&self.products, slug)
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        find_product_by_id(&self.products, id)
    }

    /// Slugs shared by more than one product, in first-seen order.
    pub fn slug_collisions(&self) -> Vec<SlugCollision> {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<ProductId>> = HashMap::new();

        for product in self.products.iter() {
            let slug = product.slug();
            let ids = groups.entry(slug.clone()).or_insert_with(|| {
                order.push(slug);
                Vec::new()
            });
            ids.push(product.id);
        }

        order
            .into_iter()
            .filter_map(|slug| {
                let ids = groups.remove(&slug)?;
                (ids.len() > 1).then_some(SlugCollision { slug, ids })
            })
            .collect()
    }

    /// Ids carried by more than one product, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<ProductId> {
        let mut seen: HashMap<ProductId, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for product in self.products.iter() {
            let count = seen.entry(product.id).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(product.id);
            }
        }
        duplicates
    }
}

impl From<Vec<Product>> for ProductCatalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::{ProductPrice, ProductTitle};

    fn product(id: i64, title: &str) -> Product {
        Product::new(
            ProductId(id),
            ProductTitle::new(title),
            "",
            ProductPrice::new(100.0).unwrap(),
        )
    }

    fn sample() -> Vec<Product> {
        vec![product(1, "Gold Ring"), product(2, "Silver Band")]
    }

    #[test]
    fn slug_lookup_resolves_each_product() {
        let products = sample();
        assert_eq!(find_product_by_slug(&products, "gold-ring").map(|p| p.id), Some(ProductId(1)));
        assert_eq!(
            find_product_by_slug(&products, "silver-band").map(|p| p.id),
            Some(ProductId(2))
        );
        assert!(find_product_by_slug(&products, "nonexistent").is_none());
    }

    #[test]
    fn slug_lookup_is_exact_and_does_not_normalise_input() {
        let products = sample();
        assert!(find_product_by_slug(&products, "Gold-Ring").is_none());
        assert!(find_product_by_slug(&products, "gold ring").is_none());
        assert!(find_product_by_slug(&products, "-gold-ring").is_none());
    }

    #[test]
    fn slug_collision_resolves_to_first_in_order() {
        let products = vec![product(1, "Gold Ring!"), product(2, "Gold Ring")];
        assert_eq!(products[0].slug(), "gold-ring");
        assert_eq!(products[1].slug(), "gold-ring");
        assert_eq!(
            find_product_by_slug(&products, "gold-ring").map(|p| p.id),
            Some(ProductId(1))
        );
    }

    #[test]
    fn id_lookup_matches_first_and_reports_absence() {
        let products = sample();
        assert_eq!(
            find_product_by_id(&products, ProductId(2)).map(|p| p.title.as_str()),
            Some("Silver Band")
        );
        assert!(find_product_by_id(&products, ProductId(999)).is_none());
    }

    #[test]
    fn empty_collection_never_matches() {
        let empty: Vec<Product> = Vec::new();
        assert!(find_product_by_slug(&empty, "gold-ring").is_none());
        assert!(find_product_by_slug(&empty, "").is_none());
        assert!(find_product_by_id(&empty, ProductId(1)).is_none());

        let catalog = ProductCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.find_by_slug("gold-ring").is_none());
        assert!(catalog.find_by_id(ProductId(1)).is_none());
    }

    #[test]
    fn empty_slug_resolves_to_untitled_product() {
        let products = vec![product(1, "Gold Ring"), product(5, "???")];
        assert_eq!(find_product_by_slug(&products, "").map(|p| p.id), Some(ProductId(5)));
    }

    #[test]
    fn catalog_reports_collisions_and_duplicate_ids() {
        let catalog = ProductCatalog::from(vec![
            product(1, "Gold Ring!"),
            product(2, "Silver Band"),
            product(3, "GOLD RING"),
            product(2, "Pearl Studs"),
            product(4, "gold-ring"),
        ]);

        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.slug_collisions(),
            vec![SlugCollision {
                slug: "gold-ring".into(),
                ids: vec![ProductId(1), ProductId(3), ProductId(4)],
            }]
        );
        assert_eq!(catalog.duplicate_ids(), vec![ProductId(2)]);
        assert_eq!(
            catalog.find_by_id(ProductId(2)).map(|p| p.title.as_str()),
            Some("Silver Band")
        );
    }

    #[test]
    fn clones_share_the_snapshot() {
        let catalog = ProductCatalog::from(sample());
        let clone = catalog.clone();
        assert!(std::ptr::eq(catalog.products(), clone.products()));
    }
}
