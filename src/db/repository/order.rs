//! Order Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Order, OrderCreate, OrderUpdate};
use chrono::Utc;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "orders";

/// 把唯一索引冲突映射为 Duplicate，其余写入错误归为 Database
///
/// SurrealDB 的唯一索引冲突报 "Database index `uniq_table_no` already
/// contains ..."，这是表编号唯一性的唯一执法点 (没有先查后写)。
fn map_write_err(err: surrealdb::Error) -> RepoError {
    let msg = err.to_string();
    if msg.contains("already contains") {
        RepoError::Duplicate("Duplicate order tableNo".to_string())
    } else {
        RepoError::Database(msg)
    }
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders (natural store order, not sorted)
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let order: Option<Order> = self.base.db().select(thing).await?;
        Ok(order)
    }

    /// Create a new order with `completed = false`
    ///
    /// 不校验 user 是否存在 (旧版行为)；表编号冲突由唯一索引拒绝。
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Option<Order>> {
        let user: RecordId = data
            .user
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid user ID: {}", data.user)))?;

        let now = Utc::now().to_rfc3339();
        let order = Order {
            id: None,
            user,
            table_no: data.table_no,
            ordertext: data.ordertext,
            completed: false,
            created_at: now.clone(),
            updated_at: now,
        };

        let created: Option<Order> = self
            .base
            .db()
            .create(TABLE)
            .content(order)
            .await
            .map_err(map_write_err)?;
        Ok(created)
    }

    /// Full-replacement update of the four mutable fields
    ///
    /// UPDATE 不会创建缺失记录：记录不存在时结果为空，报 NotFound；
    /// 记录存在但表编号撞上其他订单时，唯一索引报 Duplicate。
    pub async fn update(&self, data: OrderUpdate) -> RepoResult<Order> {
        let thing: RecordId = data
            .id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", data.id)))?;
        let user: RecordId = data
            .user
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid user ID: {}", data.user)))?;

        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $thing SET user = $user, tableNo = $table_no, \
                 ordertext = $ordertext, completed = $completed, updated_at = $updated_at",
            )
            .bind(("thing", thing))
            .bind(("user", user.to_string()))
            .bind(("table_no", data.table_no))
            .bind(("ordertext", data.ordertext))
            .bind(("completed", data.completed))
            .bind(("updated_at", Utc::now().to_rfc3339()))
            .await
            .map_err(map_write_err)?;

        let updated: Option<Order> = result.take(0).map_err(map_write_err)?;
        updated.ok_or_else(|| RepoError::NotFound("Order not found".to_string()))
    }

    /// Hard delete an order, returning the removed record
    pub async fn delete(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<Order> = self.base.db().delete(thing).await?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn payload(user: &str, table_no: u32, text: &str) -> OrderCreate {
        OrderCreate {
            user: user.to_string(),
            table_no,
            ordertext: text.to_string(),
        }
    }

    async fn repo() -> OrderRepository {
        let service = DbService::memory().await.expect("in-memory db");
        OrderRepository::new(service.db)
    }

    #[tokio::test]
    async fn create_defaults_completed_to_false() {
        let repo = repo().await;
        let created = repo
            .create(payload("users:alice", 4, "2x pad thai"))
            .await
            .expect("create")
            .expect("record");
        assert!(!created.completed);
        assert_eq!(created.table_no, 4);
    }

    #[tokio::test]
    async fn duplicate_table_no_is_rejected_by_index() {
        let repo = repo().await;
        repo.create(payload("users:alice", 7, "soup"))
            .await
            .expect("first create");
        let err = repo
            .create(payload("users:bob", 7, "noodles"))
            .await
            .expect_err("second create must fail");
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn update_missing_order_reports_not_found() {
        let repo = repo().await;
        let err = repo
            .update(OrderUpdate {
                id: "orders:missing".to_string(),
                user: "users:alice".to_string(),
                table_no: 1,
                ordertext: "tea".to_string(),
                completed: true,
            })
            .await
            .expect_err("update must fail");
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_keeping_own_table_no_succeeds() {
        let repo = repo().await;
        let created = repo
            .create(payload("users:alice", 9, "rice"))
            .await
            .expect("create")
            .expect("record");
        let id = created.id.expect("id").to_string();

        let updated = repo
            .update(OrderUpdate {
                id,
                user: "users:alice".to_string(),
                table_no: 9,
                ordertext: "rice and curry".to_string(),
                completed: true,
            })
            .await
            .expect("update");
        assert_eq!(updated.table_no, 9);
        assert!(updated.completed);
        assert_eq!(updated.ordertext, "rice and curry");
    }

    #[tokio::test]
    async fn delete_returns_removed_record() {
        let repo = repo().await;
        let created = repo
            .create(payload("users:alice", 2, "espresso"))
            .await
            .expect("create")
            .expect("record");
        let id = created.id.expect("id").to_string();

        let deleted = repo.delete(&id).await.expect("delete").expect("record");
        assert_eq!(deleted.table_no, 2);
        assert!(repo.find_by_id(&id).await.expect("find").is_none());
    }
}
