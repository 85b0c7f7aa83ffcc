//! # 结构因子扭转平均分析模块
//!
//! 提供 sFTA (structure factor twist averaging) 的核心计算。
//!
//! ## 子模块
//! - `averager`: 按 G 分组的平均值与 SEM
//! - `residual`: 残差计算与特殊扭转角选择
//! - `export`: 原始数据 CSV 导出
//!
//! ## 依赖关系
//! - 被 `commands/analyse.rs` 使用
//! - 使用 `models/`

pub mod averager;
pub mod export;
pub mod residual;

pub use averager::average_runs;
pub use residual::{find_special_twist, Selection};
