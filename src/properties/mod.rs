//! # 物性计算模块
//!
//! 两个互相独立、无状态的计算器。字符串材料标识在入口处解析为枚举，
//! 之后的计算不会失败，只可能附带提示性警告。
//!
//! ## 子模块
//! - `conductivity`: 热导率（13 种材料）
//! - `specific_heat`: 比热（304、316）
//!
//! ## 依赖关系
//! - 使用 `materials/` 与 `models/`
//! - 被 `lib.rs` 重新导出，被命令行 `commands/` 调用

pub mod conductivity;
pub mod specific_heat;

pub use conductivity::{conductivity, thermal_conductivity};
pub use specific_heat::{heat_capacity, specific_heat};
