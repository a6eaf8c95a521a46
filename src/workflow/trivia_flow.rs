//! 接口流程 - 流程层
//!
//! 核心职责：每个接口对应一个方法，编排"取数据 → 过滤 → 分页/抽题 → 组装响应"
//!
//! - 不关心 HTTP，只返回响应结构或 `ApiError`
//! - 存储失败统一转换为 422
//! - 越界页码：普通列表返回 404，搜索和分类列表返回空列表

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::infrastructure::QuestionStore;
use crate::models::response::{
    CategoriesResponse, CategoryQuestionsResponse, CreateResponse, DeleteResponse,
    QuestionListResponse, QuizResponse, SearchResponse,
};
use crate::models::{category_map, NewQuestion, Question, QuestionPayload, QuizPayload};
use crate::services::{question_filter, Pager, QuizSelector, RandomSource};
use crate::utils::truncate_text;

/// `POST /questions` 的两种结果
#[derive(Debug)]
pub enum QuestionPostOutcome {
    /// 按关键字搜索
    Searched(SearchResponse),
    /// 新建了题目
    Created(CreateResponse),
}

/// 接口流程
///
/// - 持有存储、分页器和抽题器
/// - 自身无可变状态，可在多个请求间共享
#[derive(Clone)]
pub struct TriviaFlow {
    store: Arc<dyn QuestionStore>,
    pager: Pager,
    selector: QuizSelector,
}

impl TriviaFlow {
    /// 创建接口流程
    pub fn new(store: Arc<dyn QuestionStore>, pager: Pager, selector: QuizSelector) -> Self {
        Self {
            store,
            pager,
            selector,
        }
    }

    /// 按配置创建，使用线程随机数
    pub fn from_config(config: &Config, store: Arc<dyn QuestionStore>) -> Self {
        Self::new(store, Pager::new(config.questions_per_page), QuizSelector::default())
    }

    /// 替换随机数来源
    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.selector = QuizSelector::new(random);
        self
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    /// 列出全部分类
    pub async fn list_categories(&self) -> ApiResult<CategoriesResponse> {
        let categories = self.store.categories().await?;
        Ok(CategoriesResponse {
            success: true,
            categories: category_map(&categories),
        })
    }

    /// 分页列出全部题目
    ///
    /// 当前页为空时返回 404（包括题库为空的情况）
    pub async fn list_questions(&self, page: usize) -> ApiResult<QuestionListResponse> {
        let questions = self.store.all_questions().await?;
        let categories = self.store.categories().await?;

        let current_page = self.pager.paginate(&questions, page);
        if current_page.is_empty() {
            return Err(ApiError::not_found(format!(
                "第 {} 页没有题目 (共 {} 道)",
                page,
                questions.len()
            )));
        }

        Ok(QuestionListResponse {
            success: true,
            questions: current_page.to_vec(),
            total_questions: questions.len(),
            current_category: None,
            categories: category_map(&categories),
        })
    }

    /// 删除题目
    ///
    /// 题目不存在时返回 422
    pub async fn delete_question(&self, id: u64) -> ApiResult<DeleteResponse> {
        if self.store.question(id).await?.is_none() {
            return Err(ApiError::unprocessable(format!("题目 #{} 不存在", id)));
        }

        if !self.store.delete_question(id).await? {
            // 查询和删除之间被其他请求删掉了
            return Err(ApiError::unprocessable(format!("题目 #{} 已被删除", id)));
        }

        info!("🗑️ 已删除题目 #{}", id);
        Ok(DeleteResponse {
            success: true,
            deleted: id,
        })
    }

    /// 处理 `POST /questions`：有非空关键字时搜索，否则新建题目
    pub async fn submit_question(
        &self,
        payload: QuestionPayload,
        page: usize,
    ) -> ApiResult<QuestionPostOutcome> {
        if let Some(term) = payload.search_term() {
            return self
                .search_questions(term, page)
                .await
                .map(QuestionPostOutcome::Searched);
        }

        let draft = payload.into_new_question().map_err(ApiError::unprocessable)?;
        self.create_question(draft)
            .await
            .map(QuestionPostOutcome::Created)
    }

    /// 按题干关键字搜索并分页
    pub async fn search_questions(&self, term: &str, page: usize) -> ApiResult<SearchResponse> {
        let questions = self.store.all_questions().await?;
        let matched = question_filter::search(&questions, term);

        debug!(
            "🔍 搜索 \"{}\": 命中 {} 道",
            truncate_text(term, 30),
            matched.len()
        );

        Ok(SearchResponse {
            success: true,
            questions: self.page_of(&matched, page),
            total_questions: matched.len(),
        })
    }

    /// 新建题目
    pub async fn create_question(&self, draft: NewQuestion) -> ApiResult<CreateResponse> {
        draft.validate().map_err(ApiError::unprocessable)?;
        let created = self.store.insert_question(draft).await?;
        info!("✓ 新建题目 {}", created);
        Ok(CreateResponse { success: true })
    }

    /// 按分类列出题目并分页
    ///
    /// 分类不存在或页码越界时返回空列表
    pub async fn questions_by_category(
        &self,
        category: u64,
        page: usize,
    ) -> ApiResult<CategoryQuestionsResponse> {
        let questions = self.store.all_questions().await?;
        let in_category = question_filter::by_category(&questions, category);

        Ok(CategoryQuestionsResponse {
            success: true,
            questions: self.page_of(&in_category, page),
            total_questions: in_category.len(),
            current_category: category,
        })
    }

    /// 抽取下一道测验题
    ///
    /// 没有可用题目时返回不带 `question` 的成功响应
    pub async fn next_quiz_question(&self, payload: QuizPayload) -> ApiResult<QuizResponse> {
        let category = payload.category_filter();
        let asked: HashSet<u64> = payload.previous_questions.iter().copied().collect();

        let pool = self.store.all_questions().await?;
        let question = self.selector.next_question(&pool, category, &asked).cloned();

        match &question {
            Some(q) => debug!("🎲 抽到题目 {}", q),
            None => info!(
                "🏁 测验结束: 分类 {:?} 没有剩余题目 (已出 {} 道)",
                category,
                asked.len()
            ),
        }

        Ok(QuizResponse {
            success: true,
            question,
        })
    }

    fn page_of(&self, items: &[&Question], page: usize) -> Vec<Question> {
        self.pager
            .paginate(items, page)
            .iter()
            .map(|q| (*q).clone())
            .collect()
    }
}

impl std::fmt::Debug for TriviaFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriviaFlow")
            .field("pager", &self.pager)
            .finish_non_exhaustive()
    }
}
