//! # 物性计算子命令 CLI 定义
//!
//! `conductivity` 与 `specific-heat` 共用温度输入与输出参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/evaluate.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// 共用参数
// ─────────────────────────────────────────────────────────────

/// 温度输入：显式列表或区间扫描
#[derive(Args, Debug)]
pub struct TemperatureArgs {
    /// Temperatures in K, comma-separated (e.g., "4,77,300")
    #[arg(
        short,
        long,
        value_delimiter = ',',
        conflicts_with = "range",
        required_unless_present = "range"
    )]
    pub temperature: Vec<f64>,

    /// Temperature range in K (e.g., "4-300")
    #[arg(short, long)]
    pub range: Option<String>,

    /// Number of points sampled over --range
    #[arg(short = 'n', long, default_value_t = 20)]
    pub points: usize,

    /// Sample --range with logarithmic spacing
    #[arg(long, default_value_t = false)]
    pub log_spacing: bool,
}

/// 输出文件格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// CSV data file (material, temperature, value, unit)
    Csv,
    /// XY data file (temperature column + one column per material)
    Xy,
    /// PNG log-log plot
    Png,
    /// SVG log-log plot
    Svg,
}

/// 输出参数
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Write results to this file (the table is always printed)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Title for the plot
    #[arg(long)]
    pub title: Option<String>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}

// ─────────────────────────────────────────────────────────────
// 子命令参数
// ─────────────────────────────────────────────────────────────

/// conductivity 子命令参数
#[derive(Args, Debug)]
pub struct ConductivityArgs {
    /// Materials, comma-separated and case-insensitive (e.g., "cu,304,g-10n")
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub material: Vec<String>,

    /// Residual resistivity ratio, required for pure metals (al, cu, fe, w)
    #[arg(long, env = "CRYOPROPS_RRR")]
    pub rrr: Option<f64>,

    #[command(flatten)]
    pub temperatures: TemperatureArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// specific-heat 子命令参数
#[derive(Args, Debug)]
pub struct SpecificHeatArgs {
    /// Materials, comma-separated and case-insensitive (304, 316)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub material: Vec<String>,

    #[command(flatten)]
    pub temperatures: TemperatureArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}
