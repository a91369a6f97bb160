//! SeaORM-backed user repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};

use common::{AppError, AppResult};
use domain::{NewUser, User, UserChanges, UserId};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::port::{UserRepository, EMAIL_TAKEN};

/// Map write failures, turning unique index violations into conflicts.
fn write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(EMAIL_TAKEN),
        _ => AppError::from(err),
    }
}

/// Relational implementation of UserRepository
#[derive(Clone)]
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let now = Utc::now();
        let (email, name) = new_user.into_parts();
        let active_model = ActiveModel {
            email: Set(email),
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(write_error)?;
        Ok(User::from(model))
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> AppResult<Option<User>> {
        let Some(model) = UserEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(write_error)?;
        Ok(Some(User::from(model)))
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        UserEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
