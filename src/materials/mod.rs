//! # 材料目录
//!
//! 支持的材料是一个封闭集合：字符串标识只在边界处解析一次（不区分大小写），
//! 之后通过枚举做穷尽匹配，各变体关联固定的拟合系数表。
//!
//! ## 子模块
//! - `metals`: 纯金属（Al, Cu, Fe, W）的 Matthiessen 模型
//! - `polynomial`: 合金与绝缘材料的对数多项式拟合
//!
//! ## 依赖关系
//! - 被 `properties/` 计算器使用
//! - 被命令行的 `materials` 子命令用于列出目录

pub mod metals;
pub mod polynomial;

pub use metals::{MetalFit, ThermalResistivity, LORENTZ_RATIO};
pub use polynomial::{LogBase, LogPolynomial, PolynomialFit};

use crate::error::CryoError;
use crate::models::{Property, ValidRange};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 材料类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    PureMetal,
    Alloy,
    Insulator,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::PureMetal => write!(f, "pure metal"),
            Category::Alloy => write!(f, "alloy"),
            Category::Insulator => write!(f, "insulator"),
        }
    }
}

/// 热导率模型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConductivityModel {
    /// 纯金属：残余/本征/混合热阻，依赖 RRR
    Matthiessen(&'static MetalFit),
    /// 合金与绝缘材料：对数多项式，不使用 RRR
    Polynomial(&'static PolynomialFit),
}

/// 支持热导率计算的材料
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Aluminum,
    Copper,
    Iron,
    Tungsten,
    Stainless304,
    Stainless304L,
    Stainless316,
    G10Normal,
    G10Warp,
    Kapton,
    Brass,
    Mylar,
    PhosphorBronze,
}

impl Material {
    /// 全部材料，按目录顺序
    pub const ALL: [Material; 13] = [
        Material::Aluminum,
        Material::Copper,
        Material::Iron,
        Material::Tungsten,
        Material::Stainless304,
        Material::Stainless304L,
        Material::Stainless316,
        Material::G10Normal,
        Material::G10Warp,
        Material::Kapton,
        Material::Brass,
        Material::Mylar,
        Material::PhosphorBronze,
    ];

    /// 规范标识（小写）
    pub fn identifier(&self) -> &'static str {
        match self {
            Material::Aluminum => "al",
            Material::Copper => "cu",
            Material::Iron => "fe",
            Material::Tungsten => "w",
            Material::Stainless304 => "304",
            Material::Stainless304L => "304l",
            Material::Stainless316 => "316",
            Material::G10Normal => "g-10n",
            Material::G10Warp => "g-10w",
            Material::Kapton => "kapton",
            Material::Brass => "brass",
            Material::Mylar => "mylar",
            Material::PhosphorBronze => "p-bronze",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Aluminum => "Aluminum",
            Material::Copper => "Copper",
            Material::Iron => "Iron",
            Material::Tungsten => "Tungsten",
            Material::Stainless304 => "Stainless steel 304",
            Material::Stainless304L => "Stainless steel 304L",
            Material::Stainless316 => "Stainless steel 316",
            Material::G10Normal => "G-10 (normal direction)",
            Material::G10Warp => "G-10 (warp direction)",
            Material::Kapton => "Kapton",
            Material::Brass => "Brass (UNS C26000)",
            Material::Mylar => "Mylar",
            Material::PhosphorBronze => "Phosphor bronze",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Material::Aluminum | Material::Copper | Material::Iron | Material::Tungsten => {
                Category::PureMetal
            }
            Material::Stainless304
            | Material::Stainless304L
            | Material::Stainless316
            | Material::Brass
            | Material::PhosphorBronze => Category::Alloy,
            Material::G10Normal | Material::G10Warp | Material::Kapton | Material::Mylar => {
                Category::Insulator
            }
        }
    }

    /// 热导率模型及其系数表
    pub fn conductivity_model(&self) -> ConductivityModel {
        use ConductivityModel::{Matthiessen, Polynomial};

        match self {
            Material::Aluminum => Matthiessen(&metals::ALUMINUM),
            Material::Copper => Matthiessen(&metals::COPPER),
            Material::Iron => Matthiessen(&metals::IRON),
            Material::Tungsten => Matthiessen(&metals::TUNGSTEN),
            Material::Stainless304 | Material::Stainless304L | Material::Stainless316 => {
                Polynomial(&polynomial::STAINLESS_CONDUCTIVITY)
            }
            Material::G10Normal => Polynomial(&polynomial::G10_NORMAL_CONDUCTIVITY),
            Material::G10Warp => Polynomial(&polynomial::G10_WARP_CONDUCTIVITY),
            Material::Kapton => Polynomial(&polynomial::KAPTON_CONDUCTIVITY),
            Material::Brass => Polynomial(&polynomial::BRASS_CONDUCTIVITY),
            Material::Mylar => Polynomial(&polynomial::MYLAR_CONDUCTIVITY),
            Material::PhosphorBronze => Polynomial(&polynomial::PHOSPHOR_BRONZE_CONDUCTIVITY),
        }
    }

    /// 热导率拟合的有效温度区间；纯金属没有区间检查
    pub fn valid_range(&self) -> Option<ValidRange> {
        match self.conductivity_model() {
            ConductivityModel::Matthiessen(_) => None,
            ConductivityModel::Polynomial(fit) => Some(fit.range),
        }
    }

    /// 是否需要 RRR
    pub fn uses_rrr(&self) -> bool {
        matches!(self.conductivity_model(), ConductivityModel::Matthiessen(_))
    }

    /// 数据出处
    pub fn source(&self) -> &'static str {
        match self.category() {
            Category::PureMetal => "NBSIR 84-3007",
            _ if *self == Material::PhosphorBronze => "NASA NTRS 20090032058",
            _ => "NIST TRC cryogenic materials",
        }
    }

    /// 对应的比热材料（若有比热拟合）
    pub fn specific_heat(&self) -> Option<SpecificHeatMaterial> {
        match self {
            Material::Stainless304 => Some(SpecificHeatMaterial::Stainless304),
            Material::Stainless316 => Some(SpecificHeatMaterial::Stainless316),
            _ => None,
        }
    }

    /// 标量热导率 [W/(m·K)]，不检查有效区间
    pub fn conductivity_at(&self, kelvin: f64, rrr: f64) -> f64 {
        match self.conductivity_model() {
            ConductivityModel::Matthiessen(fit) => fit.conductivity(kelvin, rrr),
            ConductivityModel::Polynomial(fit) => fit.polynomial.evaluate(kelvin),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl FromStr for Material {
    type Err = CryoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase();
        Material::ALL
            .iter()
            .copied()
            .find(|m| m.identifier() == key)
            .ok_or_else(|| CryoError::unsupported(s, Property::ThermalConductivity))
    }
}

/// 比热模型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecificHeatModel {
    /// 单一拟合
    Single(&'static LogPolynomial),
    /// 按温度切换系数：T > boundary 用 `above`，否则用 `at_or_below`
    Split {
        boundary: f64,
        at_or_below: &'static LogPolynomial,
        above: &'static LogPolynomial,
    },
}

impl SpecificHeatModel {
    /// 选取 T 处使用的拟合
    pub fn branch(&self, kelvin: f64) -> &'static LogPolynomial {
        match *self {
            SpecificHeatModel::Single(fit) => fit,
            SpecificHeatModel::Split {
                boundary,
                at_or_below,
                above,
            } => {
                if kelvin > boundary {
                    above
                } else {
                    at_or_below
                }
            }
        }
    }

    pub fn evaluate(&self, kelvin: f64) -> f64 {
        self.branch(kelvin).evaluate(kelvin)
    }
}

/// 支持比热计算的材料
// TODO: Al, Cu, G-10 与 Kapton 在 NIST TRC 表中也有比热拟合，尚未收录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecificHeatMaterial {
    Stainless304,
    Stainless316,
}

impl SpecificHeatMaterial {
    pub const ALL: [SpecificHeatMaterial; 2] = [
        SpecificHeatMaterial::Stainless304,
        SpecificHeatMaterial::Stainless316,
    ];

    pub fn identifier(&self) -> &'static str {
        match self {
            SpecificHeatMaterial::Stainless304 => "304",
            SpecificHeatMaterial::Stainless316 => "316",
        }
    }

    pub fn model(&self) -> SpecificHeatModel {
        match self {
            SpecificHeatMaterial::Stainless304 => {
                SpecificHeatModel::Single(&polynomial::SS304_HEAT_CAPACITY)
            }
            SpecificHeatMaterial::Stainless316 => SpecificHeatModel::Split {
                boundary: polynomial::SS316_BRANCH_TEMPERATURE,
                at_or_below: &polynomial::SS316_HEAT_CAPACITY_BELOW,
                above: &polynomial::SS316_HEAT_CAPACITY_ABOVE,
            },
        }
    }

    pub fn valid_range(&self) -> ValidRange {
        polynomial::STAINLESS_HEAT_CAPACITY_RANGE
    }

    /// 标量比热 [J/(kg·K)]，不检查有效区间
    pub fn specific_heat_at(&self, kelvin: f64) -> f64 {
        self.model().evaluate(kelvin)
    }
}

impl fmt::Display for SpecificHeatMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl FromStr for SpecificHeatMaterial {
    type Err = CryoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "304" => Ok(SpecificHeatMaterial::Stainless304),
            "316" => Ok(SpecificHeatMaterial::Stainless316),
            _ => Err(CryoError::unsupported(s, Property::SpecificHeat)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_13_unique_identifiers() {
        let mut ids: Vec<_> = Material::ALL.iter().map(|m| m.identifier()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 13);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        for m in Material::ALL {
            let id = m.identifier();
            assert_eq!(id.parse::<Material>().unwrap(), m);
            assert_eq!(id.to_uppercase().parse::<Material>().unwrap(), m);
        }
        assert_eq!("Cu".parse::<Material>().unwrap(), Material::Copper);
        assert_eq!("P-Bronze".parse::<Material>().unwrap(), Material::PhosphorBronze);
        assert_eq!("G-10N".parse::<Material>().unwrap(), Material::G10Normal);
    }

    #[test]
    fn test_unknown_material_is_an_error() {
        for bad in ["", "copper", "ss304", " cu", "g10n", "bronze", "304 "] {
            let err = bad.parse::<Material>().unwrap_err();
            assert!(
                matches!(err, CryoError::UnsupportedMaterial { .. }),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_model_split() {
        let metals: Vec<_> = Material::ALL.iter().filter(|m| m.uses_rrr()).collect();
        assert_eq!(metals.len(), 4);
        assert!(metals.iter().all(|m| m.category() == Category::PureMetal));
        assert!(metals.iter().all(|m| m.valid_range().is_none()));

        let fits = Material::ALL.iter().filter(|m| !m.uses_rrr()).count();
        assert_eq!(fits, 9);
    }

    #[test]
    fn test_304l_shares_304_fit() {
        assert_eq!(
            Material::Stainless304L.conductivity_model(),
            Material::Stainless304.conductivity_model()
        );
        assert!(Material::Stainless304L.specific_heat().is_none());
    }

    #[test]
    fn test_documented_ranges() {
        let range = |m: Material| m.valid_range().unwrap();
        assert_eq!(range(Material::Stainless316), ValidRange::new(4.0, 300.0));
        assert_eq!(range(Material::Kapton), ValidRange::new(4.0, 300.0));
        assert_eq!(range(Material::Brass), ValidRange::new(5.0, 116.0));
        assert_eq!(range(Material::Mylar), ValidRange::new(1.0, 83.0));
        assert_eq!(range(Material::PhosphorBronze), ValidRange::new(4.0, 295.0));
    }

    #[test]
    fn test_specific_heat_catalog() {
        assert_eq!(
            "316".parse::<SpecificHeatMaterial>().unwrap(),
            SpecificHeatMaterial::Stainless316
        );
        for bad in ["304l", "cu", "kapton", "x"] {
            let err = bad.parse::<SpecificHeatMaterial>().unwrap_err();
            assert!(matches!(
                err,
                CryoError::UnsupportedMaterial {
                    property: Property::SpecificHeat,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_316_branch_selection() {
        let model = SpecificHeatMaterial::Stainless316.model();
        assert_eq!(model.branch(50.0), &polynomial::SS316_HEAT_CAPACITY_BELOW);
        assert_eq!(model.branch(50.0001), &polynomial::SS316_HEAT_CAPACITY_ABOVE);
        assert_eq!(model.branch(4.0), &polynomial::SS316_HEAT_CAPACITY_BELOW);
        assert_eq!(model.branch(300.0), &polynomial::SS316_HEAT_CAPACITY_ABOVE);
    }
}
