use thiserror::Error;

/// 接口层错误
///
/// 每个变体对应一个 HTTP 状态码，`detail` 只写日志，不返回给客户端
#[derive(Debug, Error)]
pub enum ApiError {
    /// 资源不存在（404）
    #[error("资源不存在: {0}")]
    NotFound(String),
    /// 无法处理的请求（422）
    #[error("无法处理的请求: {0}")]
    Unprocessable(String),
    /// 请求方法不被允许（405）
    #[error("请求方法不被允许")]
    MethodNotAllowed,
    /// 服务内部错误（500）
    #[error("服务内部错误: {0}")]
    Internal(String),
}

impl ApiError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::Unprocessable(_) => 422,
            ApiError::MethodNotAllowed => 405,
            ApiError::Internal(_) => 500,
        }
    }

    /// 返回给客户端的统一错误信息
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "resource not found",
            ApiError::Unprocessable(_) => "unprocessable",
            ApiError::MethodNotAllowed => "method not allowed",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        ApiError::NotFound(detail.into())
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        ApiError::Unprocessable(detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::Internal(detail.into())
    }
}

/// 题库存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 引用了不存在的分类
    #[error("分类 {0} 不存在")]
    UnknownCategory(u64),
    /// 题目 ID 重复
    #[error("题目 ID {0} 已存在")]
    DuplicateQuestion(u64),
    /// 存储后端不可用
    #[error("存储不可用: {0}")]
    Unavailable(String),
}

// 存储失败统一按 422 处理
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Unprocessable(err.to_string())
    }
}

/// 种子数据错误
#[derive(Debug, Error)]
pub enum SeedError {
    /// TOML 解析失败
    #[error("TOML解析失败: {0}")]
    Parse(#[from] toml::de::Error),
    /// 分类 ID 重复
    #[error("分类 ID {0} 重复")]
    DuplicateCategory(u64),
    /// 题目记录不合法
    #[error("第 {index} 道题目不合法: {reason}")]
    InvalidQuestion { index: usize, reason: String },
    /// 写入存储失败
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ========== Result 类型别名 ==========

/// 接口层结果类型
pub type ApiResult<T> = Result<T, ApiError>;

/// 存储层结果类型
pub type StoreResult<T> = Result<T, StoreError>;
