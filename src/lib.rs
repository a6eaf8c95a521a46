//! # Trivia API
//!
//! 问答游戏后端：题目分类、分页列表、搜索、按分类查询、增删题目，以及每次返回一道未出过题目的测验接口
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 题库存储接口 `QuestionStore` 及内存实现 `MemQuestionStore`
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数能力，不碰存储和 HTTP
//! - `Pager` - 分页
//! - `question_filter` - 题干搜索、分类过滤
//! - `QuizSelector` - 测验抽题（随机数来源可注入）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 每个接口一个方法：取数据 → 过滤 → 分页/抽题 → 组装响应
//!
//! ### ④ 接口与编排层（API / App）
//! - `api/` - warp 路由、请求解析、统一错误响应
//! - `app` - 加载配置和种子数据，启动服务
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{ApiError, ApiResult, SeedError, StoreError};
pub use infrastructure::{MemQuestionStore, QuestionStore};
pub use models::{Category, NewQuestion, Question};
pub use services::{Pager, QuizSelector, RandomSource};
pub use workflow::TriviaFlow;
