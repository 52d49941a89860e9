//! # cryoprops - 低温工程材料物性命令行工具
//!
//! 在给定温度上计算热导率与比热，打印表格并可导出数据或曲线图。
//!
//! ## 子命令
//! - `conductivity`  - 热导率 (13 种材料)
//! - `specific-heat` - 比热 (304 / 316 不锈钢)
//! - `materials`     - 材料目录
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── report/   (表格、导出与绘图)
//!   ├── utils/      (终端输出)
//!   └── cryoprops   (物性拟合库, src/lib.rs)
//! ```

mod cli;
mod commands;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
