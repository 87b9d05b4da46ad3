//! Dish Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Dish;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "dish";

#[derive(Clone)]
pub struct DishRepository {
    base: BaseRepository,
}

impl DishRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Number of dishes in the collection
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM dish GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Insert a dish; the store assigns its id
    pub async fn insert(&self, dish: Dish) -> RepoResult<Dish> {
        let created: Option<Dish> = self.base.db().create(TABLE).content(dish).await?;
        created.ok_or_else(|| RepoError::Database("Failed to insert dish".to_string()))
    }

    /// Filtered dish lookup.
    ///
    /// `category` matches the category field with anchored, case-insensitive
    /// equality. `text` matches name OR description OR tags OR category as a
    /// case-insensitive substring. Both combine with AND. Results come back
    /// in store-native order; callers must not rely on it.
    pub async fn search(
        &self,
        text: Option<&str>,
        category: Option<&str>,
        limit: usize,
    ) -> RepoResult<Vec<Dish>> {
        let mut conditions: Vec<&str> = Vec::new();
        if category.is_some() {
            conditions.push("string::lowercase(category) = $category");
        }
        if text.is_some() {
            conditions.push(
                "(string::contains(string::lowercase(name), $q) \
                 OR string::contains(string::lowercase(description ?? ''), $q) \
                 OR string::contains(string::lowercase(array::join(tags, ' ')), $q) \
                 OR string::contains(string::lowercase(category), $q))",
            );
        }

        let mut sql = String::from("SELECT * FROM dish");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(&format!(" LIMIT {limit}"));

        let mut query = self.base.db().query(sql);
        if let Some(c) = category {
            query = query.bind(("category", c.to_lowercase()));
        }
        if let Some(t) = text {
            query = query.bind(("q", t.to_lowercase()));
        }

        let dishes: Vec<Dish> = query.await?.take(0)?;
        Ok(dishes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::engine::local::Mem;

    async fn repo() -> DishRepository {
        let db: Surreal<Db> = Surreal::new::<Mem>(()).await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        DishRepository::new(db)
    }

    fn dish(name: &str, category: &str, tags: &[&str]) -> Dish {
        Dish {
            id: None,
            name: name.to_string(),
            description: None,
            price: 10.0,
            category: category.to_string(),
            image: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn count_reflects_inserts() {
        let repo = repo().await;
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.insert(dish("Margherita", "pizza", &[])).await.unwrap();
        repo.insert(dish("Negroni", "drinks", &[])).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn category_match_is_anchored_and_case_insensitive() {
        let repo = repo().await;
        repo.insert(dish("Margherita", "pizza", &[])).await.unwrap();
        repo.insert(dish("Pizzette", "pizzas", &[])).await.unwrap();

        let found = repo.search(None, Some("PIZZA"), 200).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Margherita");
    }

    #[tokio::test]
    async fn text_search_spans_name_description_tags_and_category() {
        let repo = repo().await;
        let mut spicy = dish("Diavola", "pizza", &["spicy"]);
        spicy.description = Some("Spicy salami, chili oil".to_string());
        repo.insert(spicy).await.unwrap();
        repo.insert(dish("Bruschetta", "starter", &["vegan"])).await.unwrap();

        // tag hit
        let found = repo.search(Some("SPICY"), None, 200).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Diavola");

        // category substring hit
        let found = repo.search(Some("start"), None, 200).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bruschetta");

        // no hit is an empty list, not an error
        let found = repo.search(Some("sushi"), None, 200).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn text_and_category_combine_with_and() {
        let repo = repo().await;
        repo.insert(dish("Margherita", "pizza", &["classic"])).await.unwrap();
        repo.insert(dish("Tiramisu", "dessert", &["classic"])).await.unwrap();

        let found = repo.search(Some("classic"), Some("pizza"), 200).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Margherita");
    }

    #[tokio::test]
    async fn limit_caps_results() {
        let repo = repo().await;
        for i in 0..5 {
            repo.insert(dish(&format!("Dish {i}"), "main", &[])).await.unwrap();
        }

        let found = repo.search(None, None, 3).await.unwrap();
        assert_eq!(found.len(), 3);
    }
}
