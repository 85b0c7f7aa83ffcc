//! # 解析器模块
//!
//! 提供 cc4s 结构因子输出文件的解析器。
//!
//! ## 依赖关系
//! - 被 `batch/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: elements, grid_vectors

pub mod elements;
pub mod grid_vectors;

/// 每个扭转角目录中 G 矢量文件名
pub const GRID_VECTORS_FILE: &str = "GridVectors.elements";

/// Coulomb 势文件名
pub const COULOMB_POTENTIAL_FILE: &str = "CoulombPotential.elements";

/// 结构因子文件名
pub const STRUCTURE_FACTOR_FILE: &str = "SF.elements";
