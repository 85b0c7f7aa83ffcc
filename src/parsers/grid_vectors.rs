//! # cc4s `GridVectors.elements` 解析器
//!
//! 将扁平数值序列按每 3 个一组重排为 G 矢量，并求模长。
//!
//! ## 依赖关系
//! - 被 `batch/loader.rs` 使用
//! - 使用 `parsers/elements.rs`, `models/twist.rs`

use super::elements;
use crate::error::{SftaError, Result};
use crate::models::GVector;
use std::path::Path;

const FORMAT: &str = "GridVectors";

/// 读取 G 矢量文件
pub fn parse_grid_vectors_file(path: &Path) -> Result<Vec<GVector>> {
    let values = elements::parse_elements_file(path, FORMAT)?;
    to_gvectors(&values, &path.display().to_string())
}

/// 读取 G 矢量文件并返回模长序列（文件顺序）
pub fn read_magnitudes(path: &Path) -> Result<Vec<f64>> {
    Ok(parse_grid_vectors_file(path)?
        .iter()
        .map(GVector::magnitude)
        .collect())
}

/// 扁平序列 -> N x 3
fn to_gvectors(values: &[f64], source: &str) -> Result<Vec<GVector>> {
    if values.len() % 3 != 0 {
        return Err(SftaError::ParseError {
            format: FORMAT.to_string(),
            path: source.to_string(),
            reason: format!(
                "element count {} is not a multiple of 3 (expected concatenated x y z triples)",
                values.len()
            ),
        });
    }

    Ok(values
        .chunks_exact(3)
        .map(|c| GVector::new(c[0], c[1], c[2]))
        .collect())
}
