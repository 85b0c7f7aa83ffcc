//! # 结构因子数据导出
//!
//! 将所有扭转角的原始结构因子导出为 CSV，附带扭转角序号到目录的映射表。
//!
//! ## 输出格式
//! - `<name>.csv`: `Twist angle Num,G,V_G,S_G`，每个扭转角块内按 G 升序
//! - `<name>_Twist_angle_Num_map.csv`: `Twist angle Num,directory`，输入顺序
//!
//! ## 依赖关系
//! - 被 `commands/analyse.rs` 调用
//! - 使用 `models/twist.rs` 的 RunTable
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::error::{SftaError, Result};
use crate::models::RunTable;

use serde::Serialize;
use std::path::{Path, PathBuf};

/// 导出的一行结构因子
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Twist angle Num")]
    pub twist: usize,
    #[serde(rename = "G")]
    pub g: f64,
    #[serde(rename = "V_G")]
    pub potential: f64,
    #[serde(rename = "S_G")]
    pub structure_factor: f64,
}

/// 扭转角序号映射
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwistMapRow {
    #[serde(rename = "Twist angle Num")]
    pub twist: usize,
    pub directory: String,
}

/// 两个输出文件的路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub data: PathBuf,
    pub map: PathBuf,
}

impl ExportPaths {
    /// 由用户给出的名称推导文件名；不含 `.csv` 时追加
    pub fn from_name(name: &str) -> Self {
        let data = if name.contains(".csv") {
            name.to_string()
        } else {
            format!("{}.csv", name)
        };
        let map = data.replace(".csv", "_Twist_angle_Num_map.csv");

        ExportPaths {
            data: PathBuf::from(data),
            map: PathBuf::from(map),
        }
    }
}

/// 展平所有扭转角：序号从 1 开始，块内按 G 升序，块按输入顺序
pub fn flatten_runs(runs: &[RunTable]) -> Vec<ExportRow> {
    runs.iter()
        .enumerate()
        .flat_map(|(i, run)| {
            run.sorted_by_g().into_iter().map(move |p| ExportRow {
                twist: i + 1,
                g: p.g,
                potential: p.potential,
                structure_factor: p.structure_factor,
            })
        })
        .collect()
}

/// 序号到目录的映射（输入顺序）
pub fn twist_map(directories: &[PathBuf]) -> Vec<TwistMapRow> {
    directories
        .iter()
        .enumerate()
        .map(|(i, d)| TwistMapRow {
            twist: i + 1,
            directory: d.display().to_string(),
        })
        .collect()
}

/// 写出两个 CSV 文件，已存在则覆盖
pub fn write_sfta_csv(name: &str, directories: &[PathBuf], runs: &[RunTable]) -> Result<ExportPaths> {
    let paths = ExportPaths::from_name(name);

    println!(" Saving structure factor data to: {}", paths.data.display());
    write_records(&flatten_runs(runs), &paths.data)?;

    println!(" Saving twist angle index map to: {}", paths.map.display());
    write_records(&twist_map(directories), &paths.map)?;

    Ok(paths)
}

/// 以表头 + 记录写出 CSV
fn write_records<T: Serialize>(records: &[T], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(SftaError::CsvError)?;

    for record in records {
        wtr.serialize(record).map_err(SftaError::CsvError)?;
    }

    wtr.flush().map_err(|e| SftaError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridPoint;
    use std::fs;

    fn runs() -> Vec<RunTable> {
        vec![
            RunTable::new(
                "dir/tw1",
                vec![
                    GridPoint::new(2.0, 0.25, 0.8),
                    GridPoint::new(1.0, 1.0, 0.5),
                ],
            ),
            RunTable::new(
                "dir/tw2",
                vec![
                    GridPoint::new(1.0, 1.0, 0.4),
                    GridPoint::new(2.0, 0.25, 0.9),
                ],
            ),
        ]
    }

    #[test]
    fn test_export_paths() {
        let p = ExportPaths::from_name("sf");
        assert_eq!(p.data, PathBuf::from("sf.csv"));
        assert_eq!(p.map, PathBuf::from("sf_Twist_angle_Num_map.csv"));

        let p = ExportPaths::from_name("out/sf.csv");
        assert_eq!(p.data, PathBuf::from("out/sf.csv"));
        assert_eq!(p.map, PathBuf::from("out/sf_Twist_angle_Num_map.csv"));
    }

    #[test]
    fn test_flatten_sorts_within_run_block() {
        let rows = flatten_runs(&runs());
        let twists: Vec<usize> = rows.iter().map(|r| r.twist).collect();
        let g: Vec<f64> = rows.iter().map(|r| r.g).collect();
        let s: Vec<f64> = rows.iter().map(|r| r.structure_factor).collect();

        assert_eq!(twists, vec![1, 1, 2, 2]);
        assert_eq!(g, vec![1.0, 2.0, 1.0, 2.0]);
        assert_eq!(s, vec![0.5, 0.8, 0.4, 0.9]);
    }

    #[test]
    fn test_twist_map_preserves_input_order() {
        let dirs = vec![PathBuf::from("z_last"), PathBuf::from("a_first")];
        let map = twist_map(&dirs);
        assert_eq!(map[0].twist, 1);
        assert_eq!(map[0].directory, "z_last");
        assert_eq!(map[1].twist, 2);
        assert_eq!(map[1].directory, "a_first");
    }

    #[test]
    fn test_write_sfta_csv() {
        let out = tempfile::tempdir().unwrap();
        let name = out.path().join("sfta").display().to_string();
        let dirs = vec![PathBuf::from("dir/tw1"), PathBuf::from("dir/tw2")];

        let paths = write_sfta_csv(&name, &dirs, &runs()).unwrap();

        let data = fs::read_to_string(&paths.data).unwrap();
        let lines: Vec<&str> = data.lines().collect();
        assert_eq!(lines[0], "Twist angle Num,G,V_G,S_G");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("1,1.0,"));
        assert!(lines[2].starts_with("1,2.0,"));
        assert!(lines[3].starts_with("2,1.0,"));

        let map = fs::read_to_string(&paths.map).unwrap();
        assert_eq!(map, "Twist angle Num,directory\n1,dir/tw1\n2,dir/tw2\n");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let out = tempfile::tempdir().unwrap();
        let name = out.path().join("sfta.csv").display().to_string();
        fs::write(&name, "stale contents\n").unwrap();

        let paths = write_sfta_csv(&name, &[PathBuf::from("tw1")], &runs()[..1]).unwrap();
        let data = fs::read_to_string(&paths.data).unwrap();
        assert!(!data.contains("stale"));
        assert_eq!(data.lines().count(), 3);
    }
}
