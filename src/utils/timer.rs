//! # 运行计时
//!
//! 程序启动时创建，在唯一的正常退出点调用 `end()` 报告总耗时（分钟）。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用

use std::time::{Duration, Instant};

/// 分析计时器
#[derive(Debug)]
pub struct AnalysisTimer {
    start: Instant,
}

impl AnalysisTimer {
    pub fn start() -> Self {
        AnalysisTimer {
            start: Instant::now(),
        }
    }

    /// 已经过的时间
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// 结束计时并打印耗时，返回分钟数
    pub fn end(self) -> f64 {
        let minutes = to_minutes(self.elapsed());
        println!(" Script execution time: {:>8.4} (minutes)", minutes);
        minutes
    }
}

fn to_minutes(d: Duration) -> f64 {
    d.as_secs_f64() / 60.0
}
