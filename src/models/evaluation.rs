//! # 物性计算结果数据模型
//!
//! 计算结果本身与拟合公式给出的提示性警告一起返回。
//! 警告只是提示（拟合精度下降或数据来源非 NIST），不会中断计算，也不会改变返回值。
//!
//! ## 依赖关系
//! - 被 `properties/` 的两个计算器构造
//! - 被 `materials/` 用来描述有效温度区间
//! - 使用 `tracing` 同步输出警告

use serde::{Deserialize, Serialize};
use std::fmt;

/// 可计算的物性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// 热导率 [W/(m·K)]
    ThermalConductivity,
    /// 比热 [J/(kg·K)]
    SpecificHeat,
}

impl Property {
    /// 物性单位
    pub fn unit(&self) -> &'static str {
        match self {
            Property::ThermalConductivity => "W/(m·K)",
            Property::SpecificHeat => "J/(kg·K)",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::ThermalConductivity => write!(f, "thermal conductivity"),
            Property::SpecificHeat => write!(f, "specific heat"),
        }
    }
}

/// 拟合公式的有效温度区间（K，两端闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
}

impl ValidRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 温度是否落在区间内（边界值视为有效）
    pub fn contains(&self, kelvin: f64) -> bool {
        !(kelvin > self.max || kelvin < self.min)
    }

    /// 是否有任一温度落在区间外
    pub fn any_outside(&self, kelvin: &[f64]) -> bool {
        kelvin.iter().any(|&t| !self.contains(t))
    }
}

impl fmt::Display for ValidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<T<{}", self.min, self.max)
    }
}

/// 提示性警告
#[derive(Debug, Clone, PartialEq)]
pub enum FitWarning {
    /// 至少一个温度超出拟合有效区间（每次调用最多一条）
    OutOfRange {
        material: &'static str,
        range: ValidRange,
    },
    /// 拟合数据并非来自 NIST
    NotNistSourced {
        material: &'static str,
        origin: &'static str,
    },
}

impl FitWarning {
    /// 通过 tracing 输出警告
    pub(crate) fn emit(&self) {
        match self {
            FitWarning::OutOfRange { material, range } => {
                tracing::warn!(material, min = range.min, max = range.max, "{}", self);
            }
            FitWarning::NotNistSourced { material, .. } => {
                tracing::warn!(material, "{}", self);
            }
        }
    }
}

impl fmt::Display for FitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitWarning::OutOfRange { material, range } => write!(
                f,
                "{}: temperature outside range of validity: {}",
                material, range
            ),
            FitWarning::NotNistSourced { material, origin } => {
                write!(f, "{}: no NIST data available, {}", material, origin)
            }
        }
    }
}

/// 一次计算的结果：数值（与输入温度同形）及本次调用产生的警告
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<V> {
    pub value: V,
    pub warnings: Vec<FitWarning>,
}

impl<V> Evaluation<V> {
    pub(crate) fn new(value: V, warnings: Vec<FitWarning>) -> Self {
        for warning in &warnings {
            warning.emit();
        }
        Self { value, warnings }
    }

    /// 丢弃警告，只保留数值
    pub fn into_value(self) -> V {
        self.value
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// 是否包含超出有效区间的警告
    pub fn is_out_of_range(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, FitWarning::OutOfRange { .. }))
    }
}
