use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 上游凭据的环境变量名
pub const GITHUB_PAT_ENV: &str = "GITHUB_PAT";

/// 中继服务配置
///
/// 所有字段均可省略；配置文件不存在时使用默认值，
/// 此时行为等同于固定监听 127.0.0.1:8000 并转发到默认仓库。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// 目标仓库，格式为 `owner/repo`
    #[serde(default = "default_repository")]
    pub repository: String,

    /// GitHub API 根地址（测试时可指向本地模拟服务）
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// GitHub Personal Access Token（可选，未配置时回退到 GITHUB_PAT 环境变量）
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,

    /// 上游请求超时时间（秒）
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    /// 请求体大小上限（字节），超过时返回 413
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// HTTP 代理地址（可选）
    /// 支持格式: http://host:port, https://host:port, socks5://host:port
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,

    /// 发往上游的 User-Agent（GitHub 要求必须携带）
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// 配置文件路径（运行时元数据，不写入 JSON）
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_repository() -> String {
    "ethck/bug-reporter".to_string()
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_user_agent() -> String {
    format!("issue-relay/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            repository: default_repository(),
            api_base_url: default_api_base_url(),
            github_token: None,
            upstream_timeout_secs: default_upstream_timeout_secs(),
            max_body_bytes: default_max_body_bytes(),
            proxy_url: None,
            user_agent: default_user_agent(),
            config_path: None,
        }
    }
}

impl Config {
    /// 获取默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// 从文件加载配置
    ///
    /// 文件不存在时返回默认配置；加载后校验 `repository` 格式
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
            serde_json::from_str::<Config>(&content)
                .with_context(|| format!("解析配置文件失败: {}", path.display()))?
        } else {
            Self::default()
        };
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// 获取配置文件路径（如果有）
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// 校验配置
    pub fn validate(&self) -> anyhow::Result<()> {
        self.repository_parts()?;
        if self.upstream_timeout_secs == 0 {
            anyhow::bail!("upstreamTimeoutSecs 必须大于 0");
        }
        if self.max_body_bytes == 0 {
            anyhow::bail!("maxBodyBytes 必须大于 0");
        }
        Ok(())
    }

    /// 拆分 `owner/repo`
    pub fn repository_parts(&self) -> anyhow::Result<(&str, &str)> {
        let (owner, repo) = self
            .repository
            .split_once('/')
            .ok_or_else(|| anyhow::anyhow!("无效的仓库名 '{}'，需要 owner/repo 格式", self.repository))?;

        let valid = |s: &str| {
            !s.is_empty()
                && s.chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        };
        if !valid(owner) || !valid(repo) {
            anyhow::bail!("无效的仓库名 '{}'，需要 owner/repo 格式", self.repository);
        }
        Ok((owner, repo))
    }

    /// 上游创建 Issue 的完整 URL
    pub fn issues_url(&self) -> anyhow::Result<String> {
        let (owner, repo) = self.repository_parts()?;
        Ok(format!(
            "{}/repos/{}/{}/issues",
            self.api_base_url.trim_end_matches('/'),
            owner,
            repo
        ))
    }

    /// 获取有效的上游凭据
    /// 优先使用配置文件中的 githubToken，未配置时回退到环境变量的值；空字符串视为未配置
    pub fn effective_github_token(&self, env_value: Option<String>) -> Option<String> {
        self.github_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| env_value.filter(|t| !t.trim().is_empty()))
    }
}
