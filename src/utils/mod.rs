//! # 工具函数模块
//!
//! 终端输出样式。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output

pub mod output;
