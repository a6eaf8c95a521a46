/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use std::sync::Once;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

static INIT: Once = Once::new();

/// 初始化日志
///
/// `RUST_LOG` 优先；未设置时按 `verbose` 决定本 crate 的日志级别。
/// 多次调用只生效一次，测试中可以放心调用。
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let default_filter = if verbose {
            "trivia_api=debug,warp=info"
        } else {
            "trivia_api=info,warp=warn"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 程序配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 Trivia API 启动");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 监听地址: {}", config.bind_address());
    info!("📄 每页题目数: {}", config.questions_per_page);
    info!("{}", "=".repeat(60));
}

/// 记录种子数据加载结果
///
/// # 参数
/// - `categories`: 分类数量
/// - `questions`: 题目数量
/// - `source`: 数据来源
pub fn log_seed_loaded(categories: usize, questions: usize, source: &str) {
    info!("✓ 从 {} 加载了 {} 个分类, {} 道题目", source, categories, questions);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
