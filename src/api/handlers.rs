//! 请求处理函数
//!
//! 只做参数转发和响应序列化，业务判断全部在 `TriviaFlow` 中

use serde::Serialize;
use tracing::{error, warn};
use warp::{
    http::StatusCode,
    reject::Rejection,
    reply::{self, Reply},
};

use crate::error::{ApiError, ApiResult};
use crate::models::response::ErrorResponse;
use crate::models::{PageQuery, QuestionPayload, QuizPayload};
use crate::workflow::{QuestionPostOutcome, TriviaFlow};

pub async fn list_categories(flow: TriviaFlow) -> Result<Box<dyn Reply>, Rejection> {
    Ok(respond(flow.list_categories().await))
}

pub async fn list_questions(query: PageQuery, flow: TriviaFlow) -> Result<Box<dyn Reply>, Rejection> {
    Ok(respond(flow.list_questions(query.page_number()).await))
}

pub async fn delete_question(id: u64, flow: TriviaFlow) -> Result<Box<dyn Reply>, Rejection> {
    Ok(respond(flow.delete_question(id).await))
}

pub async fn submit_question(
    query: PageQuery,
    payload: QuestionPayload,
    flow: TriviaFlow,
) -> Result<Box<dyn Reply>, Rejection> {
    let reply = match flow.submit_question(payload, query.page_number()).await {
        Ok(QuestionPostOutcome::Searched(found)) => json_reply(&found),
        Ok(QuestionPostOutcome::Created(created)) => json_reply(&created),
        Err(err) => error_reply(&err),
    };
    Ok(reply)
}

pub async fn questions_by_category(
    category: u64,
    query: PageQuery,
    flow: TriviaFlow,
) -> Result<Box<dyn Reply>, Rejection> {
    Ok(respond(
        flow.questions_by_category(category, query.page_number()).await,
    ))
}

pub async fn next_quiz_question(payload: QuizPayload, flow: TriviaFlow) -> Result<Box<dyn Reply>, Rejection> {
    Ok(respond(flow.next_quiz_question(payload).await))
}

fn respond<T: Serialize>(result: ApiResult<T>) -> Box<dyn Reply> {
    match result {
        Ok(body) => json_reply(&body),
        Err(err) => error_reply(&err),
    }
}

fn json_reply<T: Serialize>(body: &T) -> Box<dyn Reply> {
    Box::new(reply::with_status(reply::json(body), StatusCode::OK))
}

/// 把 `ApiError` 转换为统一的 JSON 错误响应
pub fn error_reply(err: &ApiError) -> Box<dyn Reply> {
    let code = err.status_code();
    if code >= 500 {
        error!("❌ 请求失败 [{}]: {}", code, err);
    } else {
        warn!("⚠️ 请求失败 [{}]: {}", code, err);
    }

    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = ErrorResponse::new(code, err.message());
    Box::new(reply::with_status(reply::json(&body), status))
}
