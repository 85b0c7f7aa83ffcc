//! # 批量处理模块
//!
//! 收集扭转角目录并并行加载结构因子数据。
//!
//! ## 功能
//! - 检查每个目录的 cc4s 输出文件
//! - 组合单个扭转角的三列数据
//! - 并行加载与进度反馈
//!
//! ## 依赖关系
//! - 被 `commands/analyse.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod loader;
pub mod runner;

pub use collector::TwistCollector;
pub use loader::load_run;
pub use runner::BatchRunner;
