//! # sfta - 结构因子扭转平均
//!
//! 读取一组 cc4s 扭转角计算输出的结构因子，求扭转平均，
//! 并找出与平均结构因子残差最小的“特殊扭转角”。
//! 详见 https://doi.org/10.1038/s43588-021-00165-1
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (目录收集与并行加载)
//!   │     ├── parsers/   (.elements 解析器)
//!   │     ├── analysis/  (平均、残差、导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod analysis;
mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::timer::AnalysisTimer;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let timer = AnalysisTimer::start();
    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }

    timer.end();
}
