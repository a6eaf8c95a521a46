/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 每页题目数量
    pub questions_per_page: usize,
    /// 种子数据文件（TOML）
    pub seed_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(), // 127.0.0.1 在 docker 内无法访问
            port: 5000,
            questions_per_page: 10,
            seed_file: "data/trivia.toml".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            host: std::env::var("TRIVIA_HOST").unwrap_or(default.host),
            port: std::env::var("TRIVIA_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.port),
            questions_per_page: std::env::var("QUESTIONS_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size: &usize| *size > 0)
                .unwrap_or(default.questions_per_page),
            seed_file: std::env::var("TRIVIA_SEED_FILE").unwrap_or(default.seed_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 监听地址字符串，如 `0.0.0.0:5000`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
