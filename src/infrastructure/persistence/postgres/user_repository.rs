use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::accounts::{
  entities::User, errors::AccountError, ports::UserRepository, value_objects::Email,
};

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: Uuid,
  name: String,
  email: String,
  password_hash: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User::from_db(
      row.id,
      row.name,
      row.email,
      row.password_hash,
      row.created_at,
      row.updated_at,
    )
  }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn create(&self, user: User) -> Result<User, AccountError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .bind(user.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_all(&self) -> Result<Vec<User>, AccountError> {
    let rows = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            ORDER BY created_at, id
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(User::from).collect())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(User::from))
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AccountError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
    )
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(User::from))
  }

  async fn update(&self, user: User) -> Result<Option<User>, AccountError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            UPDATE users
            SET
                name = $2,
                email = $3,
                password_hash = $4,
                updated_at = $5
            WHERE id = $1
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.updated_at)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(User::from))
  }

  async fn delete(&self, id: Uuid) -> Result<Option<User>, AccountError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(User::from))
  }
}
