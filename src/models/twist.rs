//! # 扭转角数据模型
//!
//! 定义单个扭转角（一个 cc4s 输出目录）的 G 矢量与逐点结构因子表。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `batch/` 和 `analysis/` 使用
//! - 无外部模块依赖

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// G 模长保留的小数位数
pub const G_DECIMALS: i32 = 10;

/// 将 G 模长舍入到 [`G_DECIMALS`] 位小数（四舍六入五成双）
pub fn round_g(g: f64) -> f64 {
    let scale = 10f64.powi(G_DECIMALS);
    (g * scale).round_ties_even() / scale
}

/// 倒空间 G 矢量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        GVector { x, y, z }
    }

    /// 欧几里得模长
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// 单个 G 点记录
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// 舍入后的 G 模长
    pub g: f64,

    /// Coulomb 势 V_G
    pub potential: f64,

    /// 结构因子 S_G
    pub structure_factor: f64,
}

impl GridPoint {
    /// 创建记录，G 模长在此处舍入
    pub fn new(g: f64, potential: f64, structure_factor: f64) -> Self {
        GridPoint {
            g: round_g(g),
            potential,
            structure_factor,
        }
    }
}

/// 单个扭转角的结构因子表
#[derive(Debug, Clone)]
pub struct RunTable {
    /// 数据来源目录
    directory: PathBuf,

    /// G 点记录（文件顺序）
    points: Vec<GridPoint>,
}

impl RunTable {
    pub fn new(directory: impl Into<PathBuf>, points: Vec<GridPoint>) -> Self {
        RunTable {
            directory: directory.into(),
            points,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 按 G 升序排列的记录副本（稳定排序）
    pub fn sorted_by_g(&self) -> Vec<GridPoint> {
        let mut points = self.points.clone();
        points.sort_by(|a, b| a.g.total_cmp(&b.g));
        points
    }
}

/// 可排序的 G 分组键
///
/// `f64` 本身不满足 `Ord`，这里用 `total_cmp` 给出全序，
/// 以便作为 `BTreeMap` 的键按 G 升序遍历。
#[derive(Debug, Clone, Copy)]
pub struct GKey(pub f64);

impl PartialEq for GKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GKey {}

impl PartialOrd for GKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
