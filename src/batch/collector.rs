//! # 扭转角输入收集器
//!
//! 根据用户给出的目录列表定位每个扭转角的三个 cc4s 输出文件。
//!
//! ## 功能
//! - 逐目录检查 `GridVectors.elements`, `CoulombPotential.elements`, `SF.elements`
//! - 任何一个文件缺失立即报错（在任何解析开始之前）
//! - 保持输入目录顺序
//!
//! ## 依赖关系
//! - 被 `commands/analyse.rs` 调用
//! - 使用 `parsers/mod.rs` 的文件名常量

use crate::error::{SftaError, Result};
use crate::parsers::{COULOMB_POTENTIAL_FILE, GRID_VECTORS_FILE, STRUCTURE_FACTOR_FILE};
use std::path::{Path, PathBuf};

/// 单个扭转角的输入文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwistInputs {
    /// 扭转角目录
    pub directory: PathBuf,
    /// G 矢量文件
    pub grid_vectors: PathBuf,
    /// Coulomb 势文件
    pub coulomb_potential: PathBuf,
    /// 结构因子文件
    pub structure_factor: PathBuf,
}

impl TwistInputs {
    /// 从目录推导三个文件路径（不检查存在性）
    pub fn in_directory(directory: &Path) -> Self {
        TwistInputs {
            directory: directory.to_path_buf(),
            grid_vectors: directory.join(GRID_VECTORS_FILE),
            coulomb_potential: directory.join(COULOMB_POTENTIAL_FILE),
            structure_factor: directory.join(STRUCTURE_FACTOR_FILE),
        }
    }

    /// 检查三个文件是否都存在，返回第一个缺失的文件
    pub fn first_missing(&self) -> Option<&Path> {
        [
            &self.grid_vectors,
            &self.coulomb_potential,
            &self.structure_factor,
        ]
        .into_iter()
        .find(|p| !p.is_file())
        .map(|p| p.as_path())
    }
}

/// 扭转角目录收集器
pub struct TwistCollector {
    /// 输入目录列表
    directories: Vec<PathBuf>,
}

impl TwistCollector {
    /// 创建新的收集器
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self { directories }
    }

    /// 目录数量
    pub fn len(&self) -> usize {
        self.directories.len()
    }

    /// 收集所有扭转角输入，第一个缺失文件即失败
    pub fn collect(&self) -> Result<Vec<TwistInputs>> {
        let mut inputs = Vec::with_capacity(self.directories.len());

        for directory in &self.directories {
            let twist = TwistInputs::in_directory(directory);
            if let Some(missing) = twist.first_missing() {
                return Err(SftaError::MissingFile {
                    path: missing.display().to_string(),
                });
            }
            inputs.push(twist);
        }

        Ok(inputs)
    }
}
