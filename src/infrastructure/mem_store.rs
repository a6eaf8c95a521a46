//! 内存题库 - 基础设施层
//!
//! 用 `RwLock` 保护两张表：读操作并发执行，插入和删除持有写锁串行执行

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{SeedError, StoreError, StoreResult};
use crate::infrastructure::question_store::QuestionStore;
use crate::models::{Category, NewQuestion, Question, SeedData};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<u64, Category>,
    questions: BTreeMap<u64, Question>,
    /// 下一个可分配的题目 ID，删除后不回收
    next_id: u64,
}

/// 内存题库
#[derive(Debug)]
pub struct MemQuestionStore {
    tables: RwLock<Tables>,
}

impl MemQuestionStore {
    /// 创建空题库
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                next_id: 1,
                ..Default::default()
            }),
        }
    }

    /// 用已有记录创建题库
    pub fn with_records(categories: Vec<Category>, questions: Vec<Question>) -> StoreResult<Self> {
        let mut tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            ..Default::default()
        };

        for question in questions {
            if !tables.categories.contains_key(&question.category) {
                return Err(StoreError::UnknownCategory(question.category));
            }
            if tables.questions.contains_key(&question.id) {
                return Err(StoreError::DuplicateQuestion(question.id));
            }
            tables.questions.insert(question.id, question);
        }

        tables.next_id = tables.questions.keys().next_back().map_or(1, |max| max + 1);

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    /// 用种子数据创建题库
    pub fn from_seed(seed: SeedData) -> Result<Self, SeedError> {
        let (categories, questions) = seed.into_records()?;
        Ok(Self::with_records(categories, questions)?)
    }
}

impl Default for MemQuestionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionStore for MemQuestionStore {
    async fn all_questions(&self) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn question(&self, id: u64) -> StoreResult<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.tables.write().await;

        if !tables.categories.contains_key(&question.category) {
            return Err(StoreError::UnknownCategory(question.category));
        }

        let id = tables.next_id;
        tables.next_id += 1;

        let record = question.with_id(id);
        tables.questions.insert(id, record.clone());
        debug!("插入题目 {}", record);

        Ok(record)
    }

    async fn delete_question(&self, id: u64) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let removed = tables.questions.remove(&id).is_some();
        debug!("删除题目 #{}: {}", id, if removed { "成功" } else { "不存在" });
        Ok(removed)
    }

    async fn categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }
}
