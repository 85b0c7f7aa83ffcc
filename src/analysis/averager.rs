//! # 扭转平均
//!
//! 合并所有扭转角的记录，按 G 模长分组，计算每组平均值和平均值标准误差。
//!
//! ## 算法
//! - 以舍入后的 G 为键的 `BTreeMap`，遍历顺序即 G 升序
//! - 每个字段单遍累加 (计数, 均值, 偏差平方和)
//! - 样本方差用 n-1 归一；SEM = sqrt(方差 / n)，单元素组为 NaN
//! - NaN 样本不计入统计；G 为 NaN 的记录不参与分组
//!
//! ## 依赖关系
//! - 被 `commands/analyse.rs` 和 `analysis/residual.rs` 调用
//! - 使用 `models/` 的 RunTable, AverageTable

use crate::models::{AverageRow, AverageTable, GKey, GridPoint, RunTable};
use std::collections::BTreeMap;

/// 单字段的在线统计量
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Accumulator {
    /// 加入一个样本，NaN 被忽略
    pub fn push(&mut self, x: f64) {
        if x.is_nan() {
            return;
        }
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// 算术平均；空时为 NaN
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// 样本方差 (n-1)；n < 2 时为 NaN
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// 平均值标准误差
    pub fn sem(&self) -> f64 {
        (self.variance() / self.count as f64).sqrt()
    }
}

/// 一个 G 分组内三个字段的统计量
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupStats {
    pub g: Accumulator,
    pub potential: Accumulator,
    pub structure_factor: Accumulator,
}

impl GroupStats {
    pub fn push(&mut self, point: &GridPoint) {
        self.g.push(point.g);
        self.potential.push(point.potential);
        self.structure_factor.push(point.structure_factor);
    }
}

/// 按 G 分组累加任意记录序列，跳过 G 为 NaN 的记录
pub fn group_by_g<'a>(
    points: impl IntoIterator<Item = &'a GridPoint>,
) -> BTreeMap<GKey, GroupStats> {
    let mut groups: BTreeMap<GKey, GroupStats> = BTreeMap::new();
    for point in points.into_iter().filter(|p| !p.g.is_nan()) {
        groups.entry(GKey(point.g)).or_default().push(point);
    }
    groups
}

/// 计算所有扭转角的平均结构因子
pub fn average_runs(runs: &[RunTable]) -> AverageTable {
    let groups = group_by_g(runs.iter().flat_map(|run| run.points()));

    let rows = groups
        .into_iter()
        .map(|(key, stats)| AverageRow {
            g: key.0,
            potential: stats.potential.mean(),
            structure_factor: stats.structure_factor.mean(),
            g_error: stats.g.sem(),
            potential_error: stats.potential.sem(),
            structure_factor_error: stats.structure_factor.sem(),
            count: stats.g.count(),
        })
        .collect();

    AverageTable::new(rows)
}
