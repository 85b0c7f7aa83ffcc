//! # 扭转平均结构因子数据模型
//!
//! 存储按 G 模长分组后的平均值与平均值标准误差 (SEM)。
//!
//! ## 依赖关系
//! - 被 `analysis/averager.rs` 构建
//! - 被 `analysis/residual.rs` 和 `commands/analyse.rs` 使用

/// 平均表中的一行（一个不同的 G 模长）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageRow {
    /// 舍入后的 G 模长
    pub g: f64,

    /// 平均 Coulomb 势
    pub potential: f64,

    /// 平均结构因子
    pub structure_factor: f64,

    /// G 的 SEM
    pub g_error: f64,

    /// V_G 的 SEM
    pub potential_error: f64,

    /// S_G 的 SEM
    pub structure_factor_error: f64,

    /// 参与该组的记录数
    pub count: usize,
}

/// 扭转平均表，按 G 升序
#[derive(Debug, Clone, Default)]
pub struct AverageTable {
    rows: Vec<AverageRow>,
}

impl AverageTable {
    pub fn new(rows: Vec<AverageRow>) -> Self {
        AverageTable { rows }
    }

    pub fn rows(&self) -> &[AverageRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// G 模长序列
    pub fn g_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.g).collect()
    }

    /// 平均结构因子序列
    pub fn structure_factors(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.structure_factor).collect()
    }
}
