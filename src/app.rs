//! 应用入口 - 编排层
//!
//! 1. 打印启动信息
//! 2. 从种子文件构建题库（文件不存在时使用空题库）
//! 3. 组装路由并启动 HTTP 服务

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api;
use crate::config::Config;
use crate::infrastructure::MemQuestionStore;
use crate::models::load_seed_file;
use crate::utils::logging::{log_seed_loaded, log_startup};
use crate::workflow::TriviaFlow;

/// 应用主结构
pub struct App {
    config: Config,
    flow: TriviaFlow,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let store = load_store(&config).await?;
        let flow = TriviaFlow::from_config(&config, Arc::new(store));

        Ok(Self { config, flow })
    }

    pub fn flow(&self) -> &TriviaFlow {
        &self.flow
    }

    /// 启动 HTTP 服务，直到进程退出
    pub async fn run(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_address()
            .parse()
            .with_context(|| format!("无效的监听地址: {}", self.config.bind_address()))?;

        info!(
            "🌐 Trivia API 开始监听 {} (每页 {} 道题)",
            addr,
            self.flow.pager().page_size()
        );
        warp::serve(api::routes(self.flow)).run(addr).await;

        Ok(())
    }
}

/// 加载题库
async fn load_store(config: &Config) -> Result<MemQuestionStore> {
    let path = Path::new(&config.seed_file);

    if !path.exists() {
        warn!("⚠️ 种子文件 {} 不存在，使用空题库", path.display());
        return Ok(MemQuestionStore::new());
    }

    let seed = load_seed_file(path).await?;
    let (category_count, question_count) = (seed.categories.len(), seed.questions.len());

    let store = MemQuestionStore::from_seed(seed)
        .with_context(|| format!("种子数据不合法: {}", path.display()))?;

    log_seed_loaded(category_count, question_count, &config.seed_file);
    Ok(store)
}
