//! # sFTA 分析参数 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/analyse.rs`

use clap::Args;
use std::path::PathBuf;

/// 扭转平均分析参数
#[derive(Args, Debug)]
pub struct AnalyseArgs {
    /// Paths containing Structure Factor data to be analyzed
    #[arg(required = true, num_args = 1..)]
    pub directories: Vec<PathBuf>,

    /// A file to write the individual structure factor data, in a format
    /// amenable to the sfTA.py script ('.csv' is appended if missing)
    #[arg(short, long, value_name = "NAME")]
    pub write: Option<String>,
}
