//! # 特殊扭转角选择
//!
//! 对每个扭转角计算其结构因子与扭转平均结构因子之差的平方和（残差），
//! 残差最小者即为特殊扭转角。
//!
//! ## 算法
//! - 每个扭转角先按 G 自身分组求 S_G 平均（处理同一扭转角中重复的 G）
//! - 分组后的 G 序列必须与平均表的 G 序列完全一致，否则报错
//! - 残差 = Σ_G (S_avg(G) - S_run(G))²，NaN 项不计入
//! - 取最小残差；相同时取序号最小者，NaN 残差不参与比较
//!
//! ## 依赖关系
//! - 被 `commands/analyse.rs` 调用
//! - 使用 `analysis/averager.rs` 的分组
//! - 使用 `models/` 的 RunTable, AverageTable

use super::averager::group_by_g;
use crate::error::{SftaError, Result};
use crate::models::{AverageTable, RunTable};

/// 单个扭转角的残差
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResidual {
    /// 扭转角序号（0 起始，输入顺序）
    pub index: usize,
    /// 残差
    pub residual: f64,
}

/// 选择结果
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// 特殊扭转角序号（0 起始）
    pub index: usize,
    /// 所有扭转角的残差（输入顺序）
    pub residuals: Vec<RunResidual>,
}

impl Selection {
    /// 特殊扭转角的残差
    pub fn best_residual(&self) -> f64 {
        self.residuals[self.index].residual
    }
}

/// 计算单个扭转角相对于平均表的残差
pub fn run_residual(run: &RunTable, average: &AverageTable) -> Result<f64> {
    let groups = group_by_g(run.points());

    if groups.len() != average.len() || groups.keys().zip(average.rows()).any(|(k, r)| k.0 != r.g)
    {
        let first_mismatch = groups
            .keys()
            .map(|k| k.0)
            .zip(average.g_values())
            .find(|(run_g, avg_g)| run_g != avg_g)
            .map(|(run_g, _)| run_g);

        return Err(SftaError::InconsistentGrid {
            directory: run.directory().display().to_string(),
            expected: average.len(),
            found: groups.len(),
            first_mismatch,
        });
    }

    Ok(groups
        .values()
        .zip(average.rows())
        .map(|(stats, row)| (row.structure_factor - stats.structure_factor.mean()).powi(2))
        .filter(|term| !term.is_nan())
        .sum())
}

/// 计算全部残差并选出特殊扭转角
///
/// 任意一个扭转角的 G 网格与平均表不一致即整体失败。
pub fn find_special_twist(runs: &[RunTable], average: &AverageTable) -> Result<Selection> {
    let residuals = runs
        .iter()
        .enumerate()
        .map(|(index, run)| {
            run_residual(run, average).map(|residual| RunResidual { index, residual })
        })
        .collect::<Result<Vec<_>>>()?;

    if residuals.is_empty() {
        return Err(SftaError::Other(
            "No twist angles given, cannot select a special twist angle".to_string(),
        ));
    }

    Ok(Selection {
        index: argmin(&residuals),
        residuals,
    })
}

/// 第一个最小值的位置；NaN 不参与比较，全为 NaN 时返回 0
fn argmin(residuals: &[RunResidual]) -> usize {
    let mut best: Option<&RunResidual> = None;
    for r in residuals {
        if r.residual.is_nan() {
            continue;
        }
        match best {
            Some(b) if r.residual >= b.residual => {}
            _ => best = Some(r),
        }
    }
    best.map(|b| b.index).unwrap_or(0)
}
