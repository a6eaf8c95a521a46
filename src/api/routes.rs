use serde::de::DeserializeOwned;
use std::convert::Infallible;
use warp::{
    http::header::{HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS},
    Filter, Reply,
};

use crate::api::{handlers, rejection};
use crate::models::{PageQuery, QuestionPayload, QuizPayload};
use crate::workflow::TriviaFlow;

/// 请求体大小上限
const MAX_BODY_BYTES: u64 = 16 * 1024;

const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS, PUT";

/// 组装全部路由
///
/// | 路径 | 方法 |
/// |---|---|
/// | `/categories` | GET |
/// | `/questions?page=N` | GET |
/// | `/questions/{id}` | DELETE |
/// | `/questions?page=N` | POST（搜索或新建） |
/// | `/categories/{id}/questions?page=N` | GET |
/// | `/quizzes` | POST |
pub fn routes(flow: TriviaFlow) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let categories = warp::path!("categories")
        .and(warp::get())
        .and(with_flow(flow.clone()))
        .and_then(handlers::list_categories);

    let list_questions = warp::path!("questions")
        .and(warp::get())
        .and(warp::query::<PageQuery>())
        .and(with_flow(flow.clone()))
        .and_then(handlers::list_questions);

    let delete_question = warp::path!("questions" / u64)
        .and(warp::delete())
        .and(with_flow(flow.clone()))
        .and_then(handlers::delete_question);

    let submit_question = warp::path!("questions")
        .and(warp::post())
        .and(warp::query::<PageQuery>())
        .and(json_body::<QuestionPayload>())
        .and(with_flow(flow.clone()))
        .and_then(handlers::submit_question);

    let category_questions = warp::path!("categories" / u64 / "questions")
        .and(warp::get())
        .and(warp::query::<PageQuery>())
        .and(with_flow(flow.clone()))
        .and_then(handlers::questions_by_category);

    let quizzes = warp::path!("quizzes")
        .and(warp::post())
        .and(json_body::<QuizPayload>())
        .and(with_flow(flow))
        .and_then(handlers::next_quiz_question);

    categories
        .or(list_questions)
        .or(delete_question)
        .or(submit_question)
        .or(category_questions)
        .or(quizzes)
        .with(cors())
        .recover(rejection::handle_rejection)
        .with(warp::reply::with::headers(access_control_headers()))
        .with(warp::trace::request())
}

fn with_flow(
    flow: TriviaFlow,
) -> impl Filter<Extract = (TriviaFlow,), Error = Infallible> + Clone {
    warp::any().map(move || flow.clone())
}

fn json_body<T: DeserializeOwned + Send>() -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

fn cors() -> warp::cors::Builder {
    warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Content-Type", "Authorization"])
        .allow_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS", "PUT"])
}

// 所有响应都带上，包括错误响应
fn access_control_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
    headers
}

#[tokio::test]
async fn test_categories_route() {
    use crate::infrastructure::MemQuestionStore;
    use crate::models::Category;
    use std::sync::Arc;

    let store = MemQuestionStore::with_records(
        vec![Category { id: 1, kind: "Science".to_string() }],
        Vec::new(),
    )
    .unwrap();
    let flow = TriviaFlow::new(Arc::new(store), Default::default(), Default::default());

    let result = warp::test::request()
        .path("/categories")
        .reply(&routes(flow))
        .await;

    assert_eq!(result.status(), 200, "{}", result.status());
    assert_eq!(result.headers()[ACCESS_CONTROL_ALLOW_METHODS], ALLOWED_METHODS);
}
