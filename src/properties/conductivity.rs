//! # 热导率计算器
//!
//! 根据材料选择 Matthiessen 模型（纯金属）或对数多项式拟合（合金、绝缘材料）。
//!
//! ## 警告策略
//! - 磷青铜：总是给出"非 NIST 数据"提示
//! - 有有效区间的材料：任一温度越界时给出一条越界警告（按调用计，而非按元素）
//! - 纯金属：不做区间检查
//!
//! ## 依赖关系
//! - 使用 `materials/` 的 Material 与系数表
//! - 使用 `models/` 的 Temperatures, Evaluation

use crate::error::Result;
use crate::materials::{ConductivityModel, Material};
use crate::models::{Evaluation, FitWarning, Temperatures};

/// 计算热导率 [W/(m·K)]
///
/// `material` 不区分大小写；未知材料返回 `CryoError::UnsupportedMaterial`。
/// `rrr` 只被纯金属使用，但始终需要传入。
///
/// ```
/// let k = cryoprops::conductivity(273.0, 50.0, "Cu").unwrap();
/// assert!(k.value > 300.0 && k.value < 500.0);
/// ```
pub fn conductivity<T: Temperatures>(
    temperature: T,
    rrr: f64,
    material: &str,
) -> Result<Evaluation<T::Output>> {
    let material: Material = material.parse()?;
    Ok(thermal_conductivity(material, temperature, rrr))
}

/// 已解析材料的热导率计算
pub fn thermal_conductivity<T: Temperatures>(
    material: Material,
    temperature: T,
    rrr: f64,
) -> Evaluation<T::Output> {
    let mut warnings = Vec::new();

    match material.conductivity_model() {
        ConductivityModel::Matthiessen(_) => {
            tracing::debug!(%material, rrr, "Matthiessen conductivity model");
        }
        ConductivityModel::Polynomial(fit) => {
            tracing::debug!(%material, "log-polynomial conductivity fit");
            if let Some(origin) = fit.non_nist_origin {
                warnings.push(FitWarning::NotNistSourced {
                    material: material.identifier(),
                    origin,
                });
            }
            if fit.range.any_outside(temperature.kelvin()) {
                warnings.push(FitWarning::OutOfRange {
                    material: material.identifier(),
                    range: fit.range,
                });
            }
        }
    }

    let value = temperature.map_kelvin(|t| material.conductivity_at(t, rrr));
    Evaluation::new(value, warnings)
}
