//! # cryoprops - 低温材料物性曲线拟合
//!
//! 按 NIST 及相关来源发布的拟合公式，计算工程材料随温度变化的热导率与比热，
//! 用于低温/恒温器的漏热估算等工程计算。
//!
//! ## 材料
//! - 纯金属 Al, Cu, Fe, W：Matthiessen 定则模型，依赖 RRR
//! - 合金与绝缘材料 304, 304L, 316, G-10N, G-10W, Kapton, Brass, Mylar, P-Bronze：对数多项式拟合
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── properties/ (热导率、比热计算器)
//!   │     └── materials/ (材料目录与系数表)
//!   ├── models/     (温度输入、计算结果)
//!   └── error.rs    (错误处理)
//! ```
//!
//! ```
//! use cryoprops::{conductivity, specific_heat};
//!
//! let k = conductivity([4.0, 77.0, 300.0], 100.0, "Al").unwrap();
//! assert_eq!(k.value.len(), 3);
//!
//! let cp = specific_heat(40.0, 1.0, "316").unwrap();
//! assert!(cp.warnings.is_empty());
//! ```

pub mod error;
pub mod materials;
pub mod models;
pub mod properties;

pub use error::{CryoError, Result};
pub use materials::{Material, SpecificHeatMaterial};
pub use models::{Evaluation, FitWarning, Property, Temperatures, ValidRange};
pub use properties::{conductivity, heat_capacity, specific_heat, thermal_conductivity};
