//! # cc4s `.elements` 格式解析器
//!
//! 解析 cc4s 导出的扁平浮点数序列（`CoulombPotential.elements`, `SF.elements`
//! 以及 `GridVectors.elements` 的原始数据）。
//!
//! ## .elements 格式说明
//! ```text
//! # 可选注释行
//! 0.125
//! 0.250 0.375
//! -1.5e-3
//! ```
//! 数值之间以任意空白或换行分隔，`#` 之后到行尾为注释。
//!
//! ## 依赖关系
//! - 被 `parsers/grid_vectors.rs` 和 `batch/loader.rs` 使用

use crate::error::{SftaError, Result};
use std::fs;
use std::path::Path;

/// 读取 `.elements` 文件为扁平数值序列
///
/// 长度不在这里校验，由调用方与 G 矢量数目比对。
pub fn parse_elements_file(path: &Path, format: &str) -> Result<Vec<f64>> {
    let content = fs::read_to_string(path).map_err(|e| SftaError::ParseError {
        format: format.to_string(),
        path: path.display().to_string(),
        reason: format!("cannot read file ({})", e),
    })?;

    parse_elements_content(&content, format, &path.display().to_string())
}

/// 从字符串内容解析扁平数值序列
pub fn parse_elements_content(content: &str, format: &str, source: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let data = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        for token in data.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| SftaError::ParseError {
                format: format.to_string(),
                path: source.to_string(),
                reason: format!("non-numeric value '{}' on line {}", token, line_no + 1),
            })?;
            values.push(value);
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_one_value_per_line() {
        let values = parse_elements_content("1.0\n2.5\n-3e-2\n", "SF", "SF.elements").unwrap();
        assert_eq!(values, vec![1.0, 2.5, -0.03]);
    }

    #[test]
    fn test_parse_mixed_whitespace_and_comments() {
        let content = "# header\n 1.0\t2.0  3.0 # trailing\n\n4.0\n";
        let values = parse_elements_content(content, "SF", "SF.elements").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_parse_empty_content() {
        let values = parse_elements_content("", "SF", "SF.elements").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_parse_non_numeric_reports_line() {
        let err = parse_elements_content("1.0\nabc\n", "SF", "run/SF.elements").unwrap_err();
        match err {
            SftaError::ParseError { path, reason, .. } => {
                assert_eq!(path, "run/SF.elements");
                assert!(reason.contains("'abc'"));
                assert!(reason.contains("line 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_elements_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.5\n0.25\n0.125").unwrap();

        let values = parse_elements_file(file.path(), "CoulombPotential").unwrap();
        assert_eq!(values, vec![0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_elements_file(&dir.path().join("SF.elements"), "SF").unwrap_err();
        assert!(matches!(err, SftaError::ParseError { .. }));
    }
}
