//! # 命令执行模块
//!
//! 实现 sFTA 分析的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `analysis/`, `utils/`
//! - 子模块: analyse

pub mod analyse;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    analyse::execute(cli.args).map(|_| ())
}
