//! # 数据模型模块
//!
//! 定义计算器的输入（温度）与输出（带警告的结果）。
//!
//! ## 依赖关系
//! - 被 `materials/` 和 `properties/` 使用
//! - 子模块: temperature, evaluation

pub mod evaluation;
pub mod temperature;

pub use evaluation::{Evaluation, FitWarning, Property, ValidRange};
pub use temperature::{sweep, Temperatures};
