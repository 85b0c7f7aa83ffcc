//! # 单个扭转角加载器
//!
//! 读取一个扭转角的 G 矢量、Coulomb 势和结构因子，逐行组合成 `RunTable`。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/analyse.rs` 调用
//! - 使用 `parsers/grid_vectors.rs`, `parsers/elements.rs`

use super::collector::TwistInputs;
use crate::error::{SftaError, Result};
use crate::models::{GridPoint, RunTable};
use crate::parsers::{elements, grid_vectors};

/// 加载单个扭转角
pub fn load_run(inputs: &TwistInputs) -> Result<RunTable> {
    let g = grid_vectors::read_magnitudes(&inputs.grid_vectors)?;
    let v_g = elements::parse_elements_file(&inputs.coulomb_potential, "CoulombPotential")?;
    let s_g = elements::parse_elements_file(&inputs.structure_factor, "SF")?;

    build_run_table(inputs, &g, &v_g, &s_g)
}

/// 将三列数据组合为表，长度不一致即报错
pub fn build_run_table(
    inputs: &TwistInputs,
    g: &[f64],
    v_g: &[f64],
    s_g: &[f64],
) -> Result<RunTable> {
    if g.len() != v_g.len() || g.len() != s_g.len() {
        return Err(SftaError::LengthMismatch {
            directory: inputs.directory.display().to_string(),
            grid: g.len(),
            potential: v_g.len(),
            structure_factor: s_g.len(),
        });
    }

    let points = g
        .iter()
        .zip(v_g)
        .zip(s_g)
        .map(|((&g, &v), &s)| GridPoint::new(g, v, s))
        .collect();

    Ok(RunTable::new(inputs.directory.clone(), points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_run(dir: &Path, grid: &str, v: &str, s: &str) -> TwistInputs {
        let inputs = TwistInputs::in_directory(dir);
        fs::write(&inputs.grid_vectors, grid).unwrap();
        fs::write(&inputs.coulomb_potential, v).unwrap();
        fs::write(&inputs.structure_factor, s).unwrap();
        inputs
    }

    #[test]
    fn test_load_run_zips_rows() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_run(
            dir.path(),
            "0 0 1\n0 3 4\n",
            "4.0\n0.16\n",
            "0.9\n0.7\n",
        );

        let run = load_run(&inputs).unwrap();
        assert_eq!(run.len(), 2);
        assert_eq!(run.directory(), dir.path());
        assert_eq!(run.points()[0], GridPoint::new(1.0, 4.0, 0.9));
        assert_eq!(run.points()[1], GridPoint::new(5.0, 0.16, 0.7));
    }

    #[test]
    fn test_load_run_rounds_g() {
        let dir = tempfile::tempdir().unwrap();
        // |(1, 1, 1)| = sqrt(3)
        let inputs = write_run(dir.path(), "1 1 1\n", "1\n", "1\n");

        let run = load_run(&inputs).unwrap();
        assert_eq!(run.points()[0].g, 1.732_050_807_6);
    }

    #[test]
    fn test_length_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_run(dir.path(), "1 0 0\n0 1 0\n", "1\n2\n", "0.5\n");

        let err = load_run(&inputs).unwrap_err();
        match err {
            SftaError::LengthMismatch {
                grid,
                potential,
                structure_factor,
                ..
            } => {
                assert_eq!((grid, potential, structure_factor), (2, 2, 1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_grid_file_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_run(dir.path(), "1 0\n", "1\n", "1\n");
        assert!(matches!(
            load_run(&inputs),
            Err(SftaError::ParseError { .. })
        ));
    }
}
