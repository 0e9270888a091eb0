//! 用户数据访问
//!
//! 处理器只依赖 [`UserRepository`]，生产环境使用 [`PgUserRepository`]，
//! 测试可以注入任意实现。

use async_trait::async_trait;
use sqlx::PgPool;

use super::model::{User, UserFilter, UserPayload};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 按 id 升序返回一页用户
    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, sqlx::Error>;

    /// 满足搜索条件的总行数，与分页无关
    async fn count(&self, search: Option<&str>) -> Result<i64, sqlx::Error>;

    async fn create(&self, payload: &UserPayload) -> Result<(), sqlx::Error>;

    /// 返回受影响的行数，id 不存在时为 0
    async fn update(&self, id: i32, payload: &UserPayload) -> Result<u64, sqlx::Error>;

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn like_pattern(search: &str) -> String {
    format!("%{}%", search)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, sqlx::Error> {
        match filter.search.as_deref() {
            Some(search) => {
                sqlx::query_as::<_, User>(
                    "SELECT id, name, email, age FROM users \
                     WHERE name ILIKE $1 OR email ILIKE $1 \
                     ORDER BY id LIMIT $2 OFFSET $3",
                )
                .bind(like_pattern(search))
                .bind(filter.limit)
                .bind(filter.offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, User>(
                    "SELECT id, name, email, age FROM users ORDER BY id LIMIT $1 OFFSET $2",
                )
                .bind(filter.limit)
                .bind(filter.offset)
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    async fn count(&self, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let total: (i64,) = match search {
            Some(search) => {
                sqlx::query_as("SELECT COUNT(*) FROM users WHERE name ILIKE $1 OR email ILIKE $1")
                    .bind(like_pattern(search))
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM users")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(total.0)
    }

    async fn create(&self, payload: &UserPayload) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO users (name, email, age) VALUES ($1, $2, $3)")
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(payload.age)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update(&self, id: i32, payload: &UserPayload) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET name = $1, email = $2, age = $3 WHERE id = $4")
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(payload.age)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
