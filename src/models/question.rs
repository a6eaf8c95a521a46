use serde::{Deserialize, Serialize};

/// 题目记录
///
/// 由存储分配 ID，创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub question: String,
    pub answer: String,
    pub category: u64,
    pub difficulty: u32,
}

impl Question {
    /// 题干是否包含给定关键字（调用方需先转小写）
    pub fn text_contains_lowercase(&self, needle_lowercase: &str) -> bool {
        self.question.to_lowercase().contains(needle_lowercase)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题干以便显示（最多40个字符）
        write!(
            f,
            "#{} {} [分类: {}, 难度: {}]",
            self.id,
            crate::utils::truncate_text(&self.question, 40),
            self.category,
            self.difficulty
        )
    }
}

/// 待插入的新题目（尚未分配 ID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: u64,
    pub difficulty: u32,
}

impl NewQuestion {
    /// 校验字段
    ///
    /// 题干和答案不能为空，难度至少为 1；分类是否存在由存储判断
    pub fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("题干不能为空".to_string());
        }
        if self.answer.trim().is_empty() {
            return Err("答案不能为空".to_string());
        }
        if self.difficulty < 1 {
            return Err(format!("难度必须为正整数, 实际为 {}", self.difficulty));
        }
        Ok(())
    }

    pub fn with_id(self, id: u64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
