//! User Repository
//!
//! 只读访问：订单接口只需要按 id 批量取 username

use std::collections::HashMap;

use super::{BaseRepository, RepoResult};
use crate::db::models::User;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Batch-resolve usernames for a set of user ids
    ///
    /// 一次查询取回全部引用用户，避免每单一次往返。
    /// 返回 "users:id" -> username 映射；缺失的用户不出现在映射里。
    pub async fn find_usernames(
        &self,
        ids: Vec<RecordId>,
    ) -> RepoResult<HashMap<String, String>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT id, username FROM users WHERE id INSIDE $ids")
            .bind(("ids", ids))
            .await?
            .take(0)?;

        Ok(users
            .into_iter()
            .filter_map(|u| u.id.map(|id| (id.to_string(), u.username)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn resolves_only_existing_users() {
        let service = DbService::memory().await.expect("in-memory db");
        service
            .db
            .query("CREATE users:alice SET username = 'alice'")
            .await
            .expect("seed");

        let repo = UserRepository::new(service.db);
        let ids = vec![
            "users:alice".parse().expect("id"),
            "users:ghost".parse().expect("id"),
        ];
        let map = repo.find_usernames(ids).await.expect("lookup");

        assert_eq!(map.get("users:alice").map(String::as_str), Some("alice"));
        assert!(!map.contains_key("users:ghost"));
        assert_eq!(map.len(), 1);
    }
}
