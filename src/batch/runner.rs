//! # 批量执行器
//!
//! 并行加载所有扭转角。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 结果按输入顺序返回，失败时报告序号最小的错误
//!
//! ## 依赖关系
//! - 被 `commands/analyse.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{SftaError, Result};
use crate::utils::progress;

use rayon::prelude::*;

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行作业数
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理输入列表
    ///
    /// 各任务之间没有数据依赖；全部完成后按输入顺序汇总，
    /// 任意一个失败则整体失败。
    pub fn run<I, T, F>(&self, items: &[I], message: &str, processor: F) -> Result<Vec<T>>
    where
        I: Sync,
        T: Send,
        F: Fn(&I) -> Result<T> + Sync + Send,
    {
        let pb = progress::create_progress_bar(items.len() as u64, message);

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| SftaError::Other(format!("Failed to start thread pool: {}", e)))?;

        let results: Vec<Result<T>> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_preserves_input_order() {
        let items: Vec<usize> = (0..64).collect();
        let out = BatchRunner::new(4)
            .run(&items, "Squaring", |&i| Ok(i * i))
            .unwrap();
        assert_eq!(out, items.iter().map(|i| i * i).collect::<Vec<_>>());
    }

    #[test]
    fn test_run_reports_first_failure_in_input_order() {
        let items: Vec<usize> = (0..32).collect();
        let err = BatchRunner::new(4)
            .run(&items, "Checking", |&i| {
                if i == 5 || i == 20 {
                    Err(SftaError::Other(format!("bad item {}", i)))
                } else {
                    Ok(i)
                }
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "bad item 5");
    }

    #[test]
    fn test_zero_jobs_uses_all_cpus() {
        assert_eq!(BatchRunner::new(0).jobs(), num_cpus::get());
        assert_eq!(BatchRunner::new(3).jobs(), 3);
    }
}
