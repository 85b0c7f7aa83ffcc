//! # 工具函数模块
//!
//! 提供美化输出、进度条、运行计时等工具。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/` 和 `batch/` 模块使用
//! - 子模块: output, progress, timer

pub mod output;
pub mod progress;
pub mod timer;
