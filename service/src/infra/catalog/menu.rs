//! Built-in [`Menu`] serving as a [`Catalog`].

use std::{convert::Infallible, sync::LazyLock};

use common::{
    operations::{By, Select},
    Money,
};

use crate::domain::{product, Product};

use super::{All, Catalog};

/// [`Catalog`] backed by the built-in menu of the house.
#[derive(Clone, Copy, Debug, Default)]
pub struct Menu;

impl Menu {
    /// Returns all the [`Product`]s of this [`Menu`], in listing order.
    #[must_use]
    pub fn products() -> &'static [Product] {
        &PRODUCTS
    }
}

impl Catalog<Select<By<Option<Product>, product::Id>>> for Menu {
    type Ok = Option<Product>;
    type Err = Infallible;

    async fn execute(
        &self,
        by: Select<By<Option<Product>, product::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.0.into_inner();
        Ok(PRODUCTS.iter().find(|p| p.id == id).cloned())
    }
}

impl Catalog<Select<By<Vec<Product>, product::Kind>>> for Menu {
    type Ok = Vec<Product>;
    type Err = Infallible;

    async fn execute(
        &self,
        by: Select<By<Vec<Product>, product::Kind>>,
    ) -> Result<Self::Ok, Self::Err> {
        let kind = by.0.into_inner();
        Ok(PRODUCTS.iter().filter(|p| p.kind == kind).cloned().collect())
    }
}

impl Catalog<Select<All>> for Menu {
    type Ok = Vec<Product>;
    type Err = Infallible;

    async fn execute(
        &self,
        _: Select<All>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(PRODUCTS.to_vec())
    }
}

/// Listing of the built-in menu.
static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        entry(Entry {
            id: "classic-burger",
            name: "Classic Burger",
            description: "Beef patty, cheddar, pickles and house sauce on a \
                          brioche bun.",
            price: 3000,
            original_price: Some(3500),
            kind: product::Kind::FastFood,
            ingredients: &["beef", "cheddar", "pickles", "brioche bun"],
            calories: 540,
            weight_grams: 280,
            preparation_minutes: 15,
            tags: &["burger", "beef"],
        }),
        entry(Entry {
            id: "double-cheese",
            name: "Double Cheese",
            description: "Two patties, double cheddar, caramelized onions.",
            price: 4500,
            original_price: None,
            kind: product::Kind::FastFood,
            ingredients: &["beef", "cheddar", "onions"],
            calories: 820,
            weight_grams: 390,
            preparation_minutes: 18,
            tags: &["burger", "beef", "cheese"],
        }),
        entry(Entry {
            id: "poulet-yassa",
            name: "Poulet Yassa",
            description: "Grilled chicken marinated in onions, lemon and \
                          mustard, served with rice.",
            price: 5000,
            original_price: None,
            kind: product::Kind::AfricanCuisine,
            ingredients: &["chicken", "onions", "lemon", "mustard", "rice"],
            calories: 650,
            weight_grams: 450,
            preparation_minutes: 25,
            tags: &["chicken", "senegal"],
        }),
        entry(Entry {
            id: "thieboudienne",
            name: "Thieboudienne",
            description: "Fish and rice simmered in tomato sauce with \
                          seasonal vegetables.",
            price: 5500,
            original_price: Some(6000),
            kind: product::Kind::AfricanCuisine,
            ingredients: &["fish", "broken rice", "tomato", "vegetables"],
            calories: 720,
            weight_grams: 520,
            preparation_minutes: 30,
            tags: &["fish", "rice", "senegal"],
        }),
        entry(Entry {
            id: "salade-cesar",
            name: "Salade César",
            description: "Romaine, grilled chicken, parmesan and croutons.",
            price: 3500,
            original_price: None,
            kind: product::Kind::Salads,
            ingredients: &["romaine", "chicken", "parmesan", "croutons"],
            calories: 380,
            weight_grams: 320,
            preparation_minutes: 10,
            tags: &["salad", "chicken"],
        }),
        entry(Entry {
            id: "jus-de-bissap",
            name: "Jus de Bissap",
            description: "Chilled hibiscus drink with a hint of mint.",
            price: 1000,
            original_price: None,
            kind: product::Kind::Drinks,
            ingredients: &["hibiscus", "mint", "sugar"],
            calories: 120,
            weight_grams: 330,
            preparation_minutes: 2,
            tags: &["drink", "cold"],
        }),
        entry(Entry {
            id: "jus-de-gingembre",
            name: "Jus de Gingembre",
            description: "Fresh ginger drink, pressed daily.",
            price: 1000,
            original_price: None,
            kind: product::Kind::Drinks,
            ingredients: &["ginger", "lemon", "sugar"],
            calories: 110,
            weight_grams: 330,
            preparation_minutes: 2,
            tags: &["drink", "cold"],
        }),
        entry(Entry {
            id: "thiakry",
            name: "Thiakry",
            description: "Sweet millet couscous with vanilla yogurt.",
            price: 1500,
            original_price: None,
            kind: product::Kind::Desserts,
            ingredients: &["millet", "yogurt", "vanilla"],
            calories: 290,
            weight_grams: 220,
            preparation_minutes: 5,
            tags: &["dessert", "sweet"],
        }),
    ]
});

/// Listing entry, as authored.
struct Entry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: u32,
    original_price: Option<u32>,
    kind: product::Kind,
    ingredients: &'static [&'static str],
    calories: u32,
    weight_grams: u32,
    preparation_minutes: u32,
    tags: &'static [&'static str],
}

/// Materializes an authored [`Entry`] as a [`Product`].
fn entry(e: Entry) -> Product {
    Product {
        id: product::Id::from(e.id),
        name: product::Name::new(e.name).expect("valid menu name"),
        description: e.description.to_owned(),
        price: Money::from(e.price),
        original_price: e.original_price.map(Money::from),
        kind: e.kind,
        ingredients: e.ingredients.iter().map(|&i| i.to_owned()).collect(),
        calories: e.calories,
        weight_grams: e.weight_grams,
        is_special_offer: e.original_price.is_some(),
        preparation_minutes: e.preparation_minutes,
        is_available: true,
        tags: e.tags.iter().map(|&t| t.to_owned()).collect(),
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{
        domain::{product, Product},
        infra::{catalog::All, Catalog as _},
    };

    use super::Menu;

    #[tokio::test]
    async fn finds_a_product_by_id() {
        let found: Option<Product> = Menu
            .execute(Select(By::new(product::Id::from("classic-burger"))))
            .await
            .unwrap();

        assert_eq!(
            found.unwrap().name,
            product::Name::new("Classic Burger").unwrap(),
        );
    }

    #[tokio::test]
    async fn unknown_id_selects_nothing() {
        let found: Option<Product> = Menu
            .execute(Select(By::new(product::Id::from("no-such-dish"))))
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn lists_a_category() {
        let drinks: Vec<Product> = Menu
            .execute(Select(By::new(product::Kind::Drinks)))
            .await
            .unwrap();

        assert_eq!(drinks.len(), 2);
        assert!(drinks.iter().all(|p| p.kind == product::Kind::Drinks));
    }

    #[tokio::test]
    async fn discounted_listings_never_charge_below_original_price() {
        let all: Vec<Product> = Menu.execute(Select(All)).await.unwrap();

        assert!(!all.is_empty());
        for p in all {
            if let Some(original) = p.original_price {
                assert!(original >= p.price, "{}", p.id);
            }
        }
    }
}
