//! # 数据模型模块
//!
//! 定义扭转角结构因子表和扭转平均表。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `batch/`, `analysis/` 和 `commands/` 使用
//! - 子模块: twist, average

pub mod average;
pub mod twist;

pub use average::{AverageRow, AverageTable};
pub use twist::{GKey, GVector, GridPoint, RunTable};
