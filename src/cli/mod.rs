//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 用法
//! ```text
//! sfta [options] directory_1 directory_2 ... directory_N
//! ```
//! 每个目录须包含 cc4s 结构因子输出 `GridVectors.elements`,
//! `CoulombPotential.elements` 和 `SF.elements`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: analyse

pub mod analyse;

use clap::Parser;

/// sfta - 结构因子扭转平均，寻找特殊扭转角
#[derive(Parser, Debug)]
#[command(name = "sfta")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Perform sFTA on cc4s structure factor outputs and report the special twist angle",
    long_about = "Perform sFTA on a list of user provided directories which contain cc4s \
                  structure factor outputs `GridVectors.elements`, `CoulombPotential.elements`, \
                  and `SF.elements`.\n\nThe final report provides the directory for the \
                  structure factor data which minimizes the residual of the difference between \
                  the average structure factor and the given individual structure factor.\n\n\
                  More details can be found in: https://doi.org/10.1038/s43588-021-00165-1"
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    pub args: analyse::AnalyseArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_directories_and_write() {
        let cli = Cli::try_parse_from(["sfta", "-w", "out", "tw1", "tw2"]).unwrap();
        assert_eq!(
            cli.args.directories,
            vec![PathBuf::from("tw1"), PathBuf::from("tw2")]
        );
        assert_eq!(cli.args.write.as_deref(), Some("out"));

        let cli = Cli::try_parse_from(["sfta", "tw1", "--write", "sf.csv"]).unwrap();
        assert_eq!(cli.args.write.as_deref(), Some("sf.csv"));
    }

    #[test]
    fn test_no_arguments_shows_help() {
        let err = Cli::try_parse_from(["sfta"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_write_without_directory_fails() {
        assert!(Cli::try_parse_from(["sfta", "-w", "out"]).is_err());
    }
}
