//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `conductivity`: 热导率计算
//! - `specific-heat`: 比热计算
//! - `materials`: 列出支持的材料
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: evaluate

pub mod evaluate;

use clap::{Parser, Subcommand};

/// cryoprops - 低温材料物性曲线拟合
#[derive(Parser)]
#[command(name = "cryoprops")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Thermal conductivity and specific heat of cryogenic engineering materials",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print debug logging to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate thermal conductivity [W/(m·K)]
    Conductivity(evaluate::ConductivityArgs),

    /// Evaluate specific heat [J/(kg·K)]
    SpecificHeat(evaluate::SpecificHeatArgs),

    /// List supported materials, fit models and validity ranges
    Materials,
}
