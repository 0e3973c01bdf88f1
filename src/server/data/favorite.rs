//! Favorite data repository for database operations
//!
//! Favorites are looked up by their owning user plus the `(category, item_id)` pair
//! of a `FavoriteItem`. The item id is never checked against the target table here.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::favorite::{Favorite, FavoriteItem},
};

/// Repository providing database operations for user favorites.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite for the user
    ///
    /// Does not check for an existing identical favorite; adding the same item twice
    /// stores two rows.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(AppError::ConstraintViolation)` - The user does not exist
    pub async fn create(&self, user_id: i32, item: FavoriteItem) -> Result<Favorite, AppError> {
        let favorite = entity::favorite::ActiveModel {
            category: ActiveValue::Set(item.category().as_str().to_string()),
            item_id: ActiveValue::Set(item.item_id()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Favorite::from_entity(favorite)
    }

    /// Gets every favorite of a user ordered by ID
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let favorites = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        favorites.into_iter().map(Favorite::from_entity).collect()
    }

    /// Finds the oldest favorite of a user pointing at the given item
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - A matching favorite
    /// - `Ok(None)` - The user has not favorited this item
    pub async fn find_one(
        &self,
        user_id: i32,
        item: FavoriteItem,
    ) -> Result<Option<Favorite>, AppError> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::Category.eq(item.category().as_str()))
            .filter(entity::favorite::Column::ItemId.eq(item.item_id()))
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await?
            .map(Favorite::from_entity)
            .transpose()
    }

    /// Deletes a favorite by ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
