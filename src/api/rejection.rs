use std::convert::Infallible;
use warp::{
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    reject::{self, Rejection},
    reply::Reply,
};

use crate::api::handlers::error_reply;
use crate::error::ApiError;

/// 把 warp 的拒绝转换为统一错误响应
///
/// - 请求体无法解析 → 422
/// - 路径存在但方法不对 → 405
/// - 路径不存在 → 404
/// - 其他 → 500
// Ref. https://github.com/seanmonstar/warp/blob/master/examples/rejections.rs
pub async fn handle_rejection(err: Rejection) -> Result<Box<dyn Reply>, Infallible> {
    Ok(error_reply(&classify(&err)))
}

fn classify(err: &Rejection) -> ApiError {
    if let Some(e) = err.find::<BodyDeserializeError>() {
        return ApiError::unprocessable(format!("请求体无法解析: {}", e));
    }
    if err.find::<reject::UnsupportedMediaType>().is_some()
        || err.find::<reject::LengthRequired>().is_some()
        || err.find::<reject::PayloadTooLarge>().is_some()
    {
        return ApiError::unprocessable("请求体格式或长度不正确");
    }
    if let Some(e) = err.find::<reject::InvalidQuery>() {
        return ApiError::unprocessable(format!("查询参数无法解析: {}", e));
    }
    if err.find::<reject::MethodNotAllowed>().is_some() {
        return ApiError::MethodNotAllowed;
    }
    if let Some(e) = err.find::<CorsForbidden>() {
        return ApiError::unprocessable(format!("CORS 预检失败: {}", e));
    }
    if err.is_not_found() {
        return ApiError::not_found("没有匹配的路由");
    }

    ApiError::internal(format!("未处理的拒绝: {:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_rejection_maps_to_404() {
        assert_eq!(classify(&warp::reject::not_found()).status_code(), 404);
    }

    #[test]
    fn unknown_rejection_is_internal() {
        #[derive(Debug)]
        struct Boom;
        impl warp::reject::Reject for Boom {}

        assert_eq!(classify(&warp::reject::custom(Boom)).status_code(), 500);
    }
}
