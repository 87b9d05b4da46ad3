//! Menu Catalog Service
//!
//! Seeds the reference menu when the dish collection is empty and
//! answers filtered menu queries. Seeding is best-effort: it must
//! never block a read, so every failure is logged and swallowed.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::Dish;
use crate::db::repository::{DishRepository, RepoResult};

/// Default cap on returned dishes when the caller does not pass a limit
pub const DEFAULT_MENU_LIMIT: usize = 200;

#[derive(Clone)]
pub struct MenuCatalogService {
    repo: DishRepository,
}

impl MenuCatalogService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: DishRepository::new(db),
        }
    }

    /// Insert the reference menu if the dish collection is empty.
    ///
    /// The check and the inserts are not atomic: concurrent first
    /// requests can seed twice. The reference data is idempotent
    /// content, so the duplicate rows are tolerated rather than
    /// guarded against.
    pub async fn seed_if_empty(&self) {
        match self.repo.count().await {
            Ok(0) => {
                for dish in reference_menu() {
                    let name = dish.name.clone();
                    if let Err(e) = self.repo.insert(dish).await {
                        tracing::warn!("Menu seeding aborted at '{}': {}", name, e);
                        return;
                    }
                }
                tracing::info!("Seeded reference menu into empty dish collection");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Menu seeding skipped, count check failed: {}", e);
            }
        }
    }

    /// Filtered dish listing.
    ///
    /// Empty or whitespace-only filter values are treated as absent,
    /// matching how the website sends unfilled search boxes.
    pub async fn list_dishes(
        &self,
        text: Option<&str>,
        category: Option<&str>,
        limit: usize,
    ) -> RepoResult<Vec<Dish>> {
        let text = text.map(str::trim).filter(|s| !s.is_empty());
        let category = category.map(str::trim).filter(|s| !s.is_empty());
        self.repo.search(text, category, limit).await
    }
}

/// The fixed reference dataset: seven dishes spanning every category,
/// so the catalog is never empty on first run.
fn reference_menu() -> Vec<Dish> {
    fn entry(
        name: &str,
        description: &str,
        price: f64,
        category: &str,
        tags: &[&str],
        image: &str,
    ) -> Dish {
        Dish {
            id: None,
            name: name.to_string(),
            description: Some(description.to_string()),
            price,
            category: category.to_string(),
            image: Some(image.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    vec![
        entry(
            "Margherita",
            "San Marzano tomatoes, fior di latte, fresh basil",
            12.0,
            "pizza",
            &["classic", "vegetarian"],
            "https://images.unsplash.com/photo-1548365328-9f547fb09530?q=80&w=1200&auto=format&fit=crop",
        ),
        entry(
            "Diavola",
            "Spicy salami, mozzarella, tomato, chili oil",
            14.5,
            "pizza",
            &["spicy"],
            "https://images.unsplash.com/photo-1600628421055-c8b0f4f6c69a?q=80&w=1200&auto=format&fit=crop",
        ),
        entry(
            "Bruschetta",
            "Grilled bread, tomato, garlic, basil, EVOO",
            8.5,
            "starter",
            &["vegan"],
            "https://images.unsplash.com/photo-1523986371872-9d3ba2e2f642?q=80&w=1200&auto=format&fit=crop",
        ),
        entry(
            "Tagliatelle al Ragù",
            "Slow-cooked beef ragù, Parmigiano Reggiano",
            16.0,
            "pasta",
            &["house special"],
            "https://images.unsplash.com/photo-1525755662778-989d0524087e?q=80&w=1200&auto=format&fit=crop",
        ),
        entry(
            "Branzino al Forno",
            "Roasted sea bass, lemon, herbs",
            24.0,
            "main",
            &["seafood"],
            "https://images.unsplash.com/photo-1604909052743-89e532a5e2d3?q=80&w=1200&auto=format&fit=crop",
        ),
        entry(
            "Tiramisu",
            "Espresso-soaked ladyfingers, mascarpone, cocoa",
            7.5,
            "dessert",
            &["classic"],
            "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?q=80&w=1200&auto=format&fit=crop",
        ),
        entry(
            "Negroni",
            "Campari, gin, sweet vermouth",
            10.0,
            "drinks",
            &["cocktail"],
            "https://images.unsplash.com/photo-1541976076758-347942db1970?q=80&w=1200&auto=format&fit=crop",
        ),
    ]
}
