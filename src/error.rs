//! # 统一错误处理模块
//!
//! 定义 sfta 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// sfta 统一错误类型
#[derive(Error, Debug)]
pub enum SftaError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} does not exist!")]
    MissingFile { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 数据一致性错误
    // ─────────────────────────────────────────────────────────────
    #[error(
        "Element counts disagree in '{directory}': {grid} G vectors, \
         {potential} Coulomb potential values, {structure_factor} structure factor values"
    )]
    LengthMismatch {
        directory: String,
        grid: usize,
        potential: usize,
        structure_factor: usize,
    },

    #[error(
        "G value arrays are not equivalent between the average SF and the SF of '{directory}' \
         ({found} distinct G values vs {expected} in the average{})",
        .first_mismatch.map(|g| format!(", first differing G = {}", g)).unwrap_or_default()
    )]
    InconsistentGrid {
        directory: String,
        expected: usize,
        found: usize,
        first_mismatch: Option<f64>,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SftaError>;
