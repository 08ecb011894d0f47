use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use ext_stats::config::{OutputMode, SortField};

/// 可以用单个 `-` 书写的长参数名
const LONG_FLAGS: &[&str] = &["orderby", "output", "config", "verbose", "help", "version"];

#[derive(Parser, Debug)]
#[command(name = "ext-stats")]
#[command(about = "按扩展名统计目录中的文件数量和大小")]
#[command(version)]
pub struct Cli {
    /// 要扫描的根目录 [默认: .]
    pub root: Option<PathBuf>,

    /// 排序字段 [默认: count]
    #[arg(long = "orderby", value_enum)]
    pub order_by: Option<SortField>,

    /// 输出格式 [默认: table]
    #[arg(long, value_enum)]
    pub output: Option<OutputMode>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 解析进程参数
    ///
    /// `--orderby` 或 `--output` 取值无效时在标准输出打印用法并返回 `None`，
    /// 其他解析错误（包括 `--help`）由 clap 处理并退出。
    pub fn parse_or_usage() -> Option<Self> {
        match Self::try_parse_from(normalize_args(std::env::args_os())) {
            Ok(cli) => Some(cli),
            Err(err) if err.kind() == ErrorKind::InvalidValue => {
                println!("{}", Self::command().render_help());
                None
            }
            Err(err) => err.exit(),
        }
    }
}

/// 把 `-orderby` 这类单横线长参数改写为 `--orderby`，`--` 之后的参数保持不变
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    LONG_FLAGS.contains(&name)
}
