//! Favorite factory for creating test favorite entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test favorites.
///
/// Defaults to a `"people"` favorite; `item_id` is not validated against any table.
pub struct FavoriteFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    category: String,
    item_id: i32,
}

impl<'a> FavoriteFactory<'a> {
    /// Creates a new FavoriteFactory for the given user.
    ///
    /// Defaults:
    /// - category: `"people"`
    /// - item_id: `1`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            category: "people".to_string(),
            item_id: 1,
        }
    }

    /// Sets the stored category string.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the referenced item id.
    pub fn item_id(mut self, item_id: i32) -> Self {
        self.item_id = item_id;
        self
    }

    /// Builds and inserts the favorite entity into the database.
    pub async fn build(self) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            id: ActiveValue::NotSet,
            category: ActiveValue::Set(self.category),
            item_id: ActiveValue::Set(self.item_id),
            user_id: ActiveValue::Set(self.user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a favorite for the user with an explicit category and item.
///
/// # Example
///
/// ```rust,ignore
/// let favorite = create_favorite(db, user.id, "planets", tatooine.id).await?;
/// ```
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    category: impl Into<String>,
    item_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id)
        .category(category)
        .item_id(item_id)
        .build()
        .await
}
