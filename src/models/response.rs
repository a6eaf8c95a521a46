//! 响应体数据结构
//!
//! 字段名沿用前端约定：列表接口用 `total_questions`，搜索和分类接口用 `totalQuestions`

use serde::Serialize;

use crate::models::category::CategoryMap;
use crate::models::question::Question;

/// `GET /categories`
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// `GET /questions`
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<u64>,
    pub categories: CategoryMap,
}

/// `DELETE /questions/{id}`
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: u64,
}

/// `POST /questions`（搜索）
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

/// `POST /questions`（新建）
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub success: bool,
}

/// `GET /categories/{id}/questions`
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: u64,
}

/// `POST /quizzes`
///
/// 没有可用题目时不输出 `question` 字段，表示本轮测验结束
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

/// 统一错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: code,
            message: message.into(),
        }
    }
}
