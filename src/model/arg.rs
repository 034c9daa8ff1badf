use clap::Parser;

/// GitHub Issue 中继服务
#[derive(Parser, Debug)]
#[command(name = "issue-relay", version, about)]
pub struct Args {
    /// 配置文件路径（不存在时使用默认配置）
    #[arg(short, long)]
    pub config: Option<String>,
}
