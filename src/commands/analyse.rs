//! # sFTA 分析命令实现
//!
//! 对一组扭转角目录执行结构因子扭转平均，并报告特殊扭转角。
//!
//! ## 功能
//! - 检查每个目录的 cc4s 输出文件（任何解析之前）
//! - 并行加载各扭转角
//! - 按 G 求平均结构因子
//! - 计算残差并选出特殊扭转角
//! - 可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/analyse.rs` 定义的参数
//! - 使用 `batch/` 收集和加载数据
//! - 使用 `analysis/` 进行计算
//! - 使用 `utils/output.rs`

use crate::analysis::{self, export, Selection};
use crate::batch::{self, BatchRunner, TwistCollector};
use crate::cli::analyse::AnalyseArgs;
use crate::error::Result;
use crate::models::{AverageTable, RunTable};
use crate::utils::output;

use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 残差表中的一行
#[derive(Debug, Clone, Tabled)]
struct ResidualRow {
    #[tabled(rename = "Twist angle Num")]
    twist: usize,
    #[tabled(rename = "Directory")]
    directory: String,
    #[tabled(rename = "Residual")]
    residual: String,
    #[tabled(rename = "")]
    marker: String,
}

/// 平均表预览中的一行
#[derive(Debug, Clone, Tabled)]
struct AverageRowView {
    #[tabled(rename = "G")]
    g: String,
    #[tabled(rename = "N")]
    count: usize,
    #[tabled(rename = "V_G")]
    potential: String,
    #[tabled(rename = "V_G error")]
    potential_error: String,
    #[tabled(rename = "S_G")]
    structure_factor: String,
    #[tabled(rename = "S_G error")]
    structure_factor_error: String,
    #[tabled(rename = "G error")]
    g_error: String,
}

/// 预览的平均表行数
const AVERAGE_PREVIEW_ROWS: usize = 10;

/// 执行 sFTA 分析，返回特殊扭转角目录
pub fn execute(args: AnalyseArgs) -> Result<PathBuf> {
    output::print_header("Structure Factor Twist Averaging");

    // 先检查所有目录，任何缺失都在解析前失败
    let collector = TwistCollector::new(args.directories.clone());
    output::print_info(&format!(
        "Checking {} twist angle directories...",
        collector.len()
    ));
    let inputs = collector.collect()?;

    // 并行加载
    let runner = BatchRunner::new(0);
    output::print_info(&format!("Loading with {} threads", runner.jobs()));
    let runs = runner.run(&inputs, "Loading", batch::load_run)?;
    output::print_success(&format!(
        "Loaded {} twist angles ({} G vectors in total)",
        runs.len(),
        runs.iter().map(RunTable::len).sum::<usize>()
    ));

    let average = analysis::average_runs(&runs);
    output::print_info(&format!(
        "Averaged structure factor over {} distinct |G| values",
        average.len()
    ));
    print_average_preview(&average, AVERAGE_PREVIEW_ROWS);

    let selection = analysis::find_special_twist(&runs, &average)?;

    if let Some(ref name) = args.write {
        export::write_sfta_csv(name, &args.directories, &runs)?;
        output::print_done("Structure factor data written");
    }

    print_residual_table(&args.directories, &selection);
    output::print_success(&format!(
        "Minimum residual: {:.6e} (twist angle {})",
        selection.best_residual(),
        selection.index + 1
    ));

    let special = args.directories[selection.index].clone();
    println!("\n Found Special Twist Angle:");
    println!(" {}\n", special.display());

    Ok(special)
}

/// 打印最小的若干个 |G| 处的平均结构因子
fn print_average_preview(average: &AverageTable, limit: usize) {
    let rows: Vec<AverageRowView> = average
        .rows()
        .iter()
        .take(limit)
        .map(|r| AverageRowView {
            g: format!("{:.10}", r.g),
            count: r.count,
            potential: format!("{:.6e}", r.potential),
            potential_error: format!("{:.3e}", r.potential_error),
            structure_factor: format!("{:.6e}", r.structure_factor),
            structure_factor_error: format!("{:.3e}", r.structure_factor_error),
            g_error: format!("{:.3e}", r.g_error),
        })
        .collect();

    if rows.is_empty() {
        return;
    }

    println!("{}", Table::new(&rows));
    if average.len() > limit {
        output::print_info(&format!("... {} more |G| values", average.len() - limit));
    }
}

/// 打印所有扭转角的残差
fn print_residual_table(directories: &[PathBuf], selection: &Selection) {
    let rows: Vec<ResidualRow> = selection
        .residuals
        .iter()
        .map(|r| ResidualRow {
            twist: r.index + 1,
            directory: directories[r.index].display().to_string(),
            residual: format!("{:.6e}", r.residual),
            marker: if r.index == selection.index {
                "<- special".to_string()
            } else {
                String::new()
            },
        })
        .collect();

    output::print_separator();
    println!("{}", Table::new(&rows));
    output::print_separator();
}
