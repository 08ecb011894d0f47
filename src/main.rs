mod cli;

use anyhow::Result;

use cli::Cli;
use ext_stats::config::Config;
use ext_stats::report;
use ext_stats::scanner::FileWalker;

fn main() -> Result<()> {
    let Some(cli) = Cli::parse_or_usage() else {
        return Ok(());
    };

    // 初始化日志，输出到标准错误以免混入报表
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // 加载配置，命令行参数优先
    let config = Config::load(cli.config.as_deref())?
        .with_overrides(cli.root, cli.order_by, cli.output);
    tracing::debug!("使用配置: {:?}", config);

    let walker = FileWalker::new(&config.scan)?.with_progress(true);
    // 遍历出错时只在标准输出打印一行 "Failed to walk Directory: <错误>"，
    // 不输出任何部分结果，退出码仍为 0；详细错误另由 tracing 写到标准错误
    let stats = match walker.scan(&config.scan.root) {
        Ok(stats) => stats,
        Err(err) => {
            println!("Failed to walk Directory: {}", err);
            return Ok(());
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(stats, config.report.order_by, config.report.output, &mut out)?;

    Ok(())
}
