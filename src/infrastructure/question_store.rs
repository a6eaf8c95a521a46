use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Category, NewQuestion, Question};

/// 题库存储接口
///
/// 写操作（插入、删除）之间的串行化由实现方负责，调用方不加锁
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// 返回全部题目，按 ID 升序排列
    async fn all_questions(&self) -> StoreResult<Vec<Question>>;

    /// 按 ID 查找题目
    async fn question(&self, id: u64) -> StoreResult<Option<Question>>;

    /// 插入新题目并返回分配了 ID 的记录。
    /// 分类不存在时返回 `StoreError::UnknownCategory`。
    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question>;

    /// 删除题目；题目不存在时返回 `Ok(false)`
    async fn delete_question(&self, id: u64) -> StoreResult<bool>;

    /// 返回全部分类，按 ID 升序排列
    async fn categories(&self) -> StoreResult<Vec<Category>>;
}
