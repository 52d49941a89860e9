//! # 比热计算器
//!
//! 目前只收录 304 与 316 不锈钢。316 按温度在两组系数之间切换（T > 50 K 与 T ≤ 50 K），
//! 分界处的不连续按原拟合保留，不做平滑。
//!
//! ## 依赖关系
//! - 使用 `materials/` 的 SpecificHeatMaterial
//! - 使用 `models/` 的 Temperatures, Evaluation

use crate::error::Result;
use crate::materials::SpecificHeatMaterial;
use crate::models::{Evaluation, FitWarning, Temperatures};

/// 计算比热 [J/(kg·K)]
///
/// `rrr` 仅为与 [`conductivity`](crate::conductivity()) 保持相同的调用签名，不参与计算。
/// 不支持的材料返回 `CryoError::UnsupportedMaterial`。
pub fn specific_heat<T: Temperatures>(
    temperature: T,
    _rrr: f64,
    material: &str,
) -> Result<Evaluation<T::Output>> {
    let material: SpecificHeatMaterial = material.parse()?;
    Ok(heat_capacity(material, temperature))
}

/// 已解析材料的比热计算
pub fn heat_capacity<T: Temperatures>(
    material: SpecificHeatMaterial,
    temperature: T,
) -> Evaluation<T::Output> {
    let range = material.valid_range();
    let mut warnings = Vec::new();
    if range.any_outside(temperature.kelvin()) {
        warnings.push(FitWarning::OutOfRange {
            material: material.identifier(),
            range,
        });
    }

    let model = material.model();
    tracing::debug!(%material, "specific heat fit");
    let value = temperature.map_kelvin(|t| model.evaluate(t));
    Evaluation::new(value, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CryoError;
    use crate::materials::polynomial::{SS316_HEAT_CAPACITY_ABOVE, SS316_HEAT_CAPACITY_BELOW};
    use crate::models::Property;
    use approx::assert_relative_eq;

    #[test]
    fn test_304_reference() {
        let cp = specific_heat(77.0, 1.0, "304").unwrap();
        assert_relative_eq!(cp.value, 204.49302744916713, max_relative = 1e-9);
        assert!(cp.warnings.is_empty());
    }

    #[test]
    fn test_316_uses_two_coefficient_sets() {
        let above = specific_heat(60.0, 1.0, "316").unwrap().value;
        let below = specific_heat(40.0, 1.0, "316").unwrap().value;
        assert_relative_eq!(above, 141.77458782903778, max_relative = 1e-9);
        assert_relative_eq!(below, 57.55160398283896, max_relative = 1e-9);

        // 每个结果都不在另一分支的延拓曲线上
        let below_branch_at_60 = SS316_HEAT_CAPACITY_BELOW.evaluate(60.0);
        let above_branch_at_40 = SS316_HEAT_CAPACITY_ABOVE.evaluate(40.0);
        assert!((above - below_branch_at_60).abs() > 0.1);
        assert!((below - above_branch_at_40).abs() > 1.0);
    }

    #[test]
    fn test_316_discontinuity_at_50k_is_kept() {
        let at = specific_heat(50.0, 1.0, "316").unwrap().value;
        let just_above = specific_heat(50.0001, 1.0, "316").unwrap().value;
        assert_relative_eq!(at, 100.38993206186602, max_relative = 1e-9);
        assert_relative_eq!(just_above, 100.23941024294217, max_relative = 1e-9);
        assert!(at - just_above > 0.1);
    }

    #[test]
    fn test_array_branches_per_element() {
        let temps = [40.0, 50.0, 60.0];
        let cp = specific_heat(temps, 1.0, "316").unwrap().value;
        for (t, v) in temps.iter().zip(cp.iter()) {
            assert_eq!(*v, specific_heat(*t, 1.0, "316").unwrap().value);
        }
    }

    #[test]
    fn test_range_warning_once_per_call() {
        let ok = specific_heat(vec![4.0, 300.0], 1.0, "304").unwrap();
        assert!(ok.warnings.is_empty());

        let bad = specific_heat(vec![3.0, 77.0, 301.0], 1.0, "316").unwrap();
        assert_eq!(bad.warnings.len(), 1);
        assert_eq!(bad.value.len(), 3);
    }

    #[test]
    fn test_rrr_unused() {
        let a = specific_heat(20.0, 1.0, "304").unwrap().value;
        let b = specific_heat(20.0, 1000.0, "304").unwrap().value;
        assert_eq!(a, b);
    }

    #[test]
    fn test_other_materials_are_rejected() {
        for bad in ["cu", "al", "304l", "kapton", "brass", "unobtainium"] {
            match specific_heat(77.0, 1.0, bad) {
                Err(CryoError::UnsupportedMaterial { property, .. }) => {
                    assert_eq!(property, Property::SpecificHeat)
                }
                other => panic!("'{}' should be rejected, got {:?}", bad, other),
            }
        }
    }
}
