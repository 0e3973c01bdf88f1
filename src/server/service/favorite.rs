//! Favorites workflow
//!
//! Every operation validates in the same order: the category string first, then the
//! owning user. Writes run inside a transaction that is committed at the end and rolled
//! back when dropped early by an error.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::favorite::FavoriteCategory,
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, user::UserRepository,
        },
        error::AppError,
        model::favorite::{Favorite, FavoriteItem, FavoriteTarget},
        util::parse::parse_request_enum,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the favorites of a user
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites, possibly empty
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(user_not_found(user_id));
        }

        FavoriteRepository::new(self.db).get_by_user(user_id).await
    }

    /// Adds a favorite for a user
    ///
    /// The item id is not checked against the target table.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The stored favorite
    /// - `Err(AppError::BadRequest)` - Category is neither `people` nor `planets`
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn add(
        &self,
        user_id: i32,
        category: &str,
        item_id: i32,
    ) -> Result<Favorite, AppError> {
        let item = parse_item(category, item_id)?;

        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).find_by_id(user_id).await?.is_none() {
            tracing::warn!("Rejected favorite for missing user {}", user_id);
            return Err(user_not_found(user_id));
        }

        let favorite = FavoriteRepository::new(&txn).create(user_id, item).await?;

        txn.commit().await?;

        tracing::info!(
            "User {} added favorite {} ({} {})",
            user_id,
            favorite.id,
            category,
            item_id
        );

        Ok(favorite)
    }

    /// Removes a favorite of a user
    ///
    /// When the same item was favorited more than once, only the oldest row is removed.
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was removed
    /// - `Err(AppError::BadRequest)` - Category is neither `people` nor `planets`
    /// - `Err(AppError::NotFound)` - No user with that ID, or no such favorite
    pub async fn remove(&self, user_id: i32, category: &str, item_id: i32) -> Result<(), AppError> {
        let item = parse_item(category, item_id)?;

        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).find_by_id(user_id).await?.is_none() {
            tracing::warn!("Rejected favorite removal for missing user {}", user_id);
            return Err(user_not_found(user_id));
        }

        let favorite_repo = FavoriteRepository::new(&txn);
        let Some(favorite) = favorite_repo.find_one(user_id, item).await? else {
            tracing::warn!(
                "User {} has no favorite {} {} to remove",
                user_id,
                category,
                item_id
            );
            return Err(AppError::NotFound("Favorite not found".to_string()));
        };

        favorite_repo.delete(favorite.id).await?;

        txn.commit().await?;

        tracing::info!("User {} removed favorite {}", user_id, favorite.id);

        Ok(())
    }

    /// Gets the item a user's favorite points at
    ///
    /// # Returns
    /// - `Ok(FavoriteTarget)` - The favorited character or planet
    /// - `Err(AppError::BadRequest)` - Category is neither `people` nor `planets`
    /// - `Err(AppError::NotFound)` - No such user, no such favorite, or the item no longer exists
    pub async fn get_item(
        &self,
        user_id: i32,
        category: &str,
        item_id: i32,
    ) -> Result<FavoriteTarget, AppError> {
        let item = parse_item(category, item_id)?;

        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(user_not_found(user_id));
        }

        if FavoriteRepository::new(self.db)
            .find_one(user_id, item)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }

        self.resolve(item).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "Favorited {} {} no longer exists",
                category, item_id
            ))
        })
    }

    /// Looks up the record a favorite item points at, in the table its kind selects
    ///
    /// # Returns
    /// - `Ok(Some(FavoriteTarget))` - The character or planet
    /// - `Ok(None)` - The referenced row does not exist
    pub async fn resolve(&self, item: FavoriteItem) -> Result<Option<FavoriteTarget>, AppError> {
        let target = match item {
            FavoriteItem::People(id) => CharacterRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(FavoriteTarget::People),
            FavoriteItem::Planet(id) => PlanetRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(FavoriteTarget::Planet),
        };

        Ok(target)
    }
}

fn parse_item(category: &str, item_id: i32) -> Result<FavoriteItem, AppError> {
    let category: FavoriteCategory = parse_request_enum(category).inspect_err(|_| {
        tracing::warn!("Rejected favorite with invalid category '{}'", category);
    })?;

    Ok(FavoriteItem::new(category, item_id))
}

fn user_not_found(user_id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", user_id))
}
