//! # 纯金属热导率模型
//!
//! 基于 Matthiessen 定则，把热阻拆成残余、本征（声子散射）与混合三项。
//!
//! ## 公式
//! ρ₀ = ρ₂₇₃ / (RRR − 1)
//! W₀ = (ρ₀ / L₀) / T
//! Wᵢ = P₁Tᴾ² / (1 + P₁P₃Tᴾ²⁺ᴾ⁴ exp(−(P₅/T)ᴾ⁶)) + W_c
//! Wᵢ₀ = P₇ WᵢW₀ / (Wᵢ + W₀)
//! λ = 1 / (W₀ + Wᵢ + Wᵢ₀)
//!
//! W_c 为经验修正项（若干对数高斯项之和），只用于减小拟合残差，没有独立的物理含义。
//!
//! ## 数据来源
//! NBSIR 84-3007, Hust & Lankford, "Thermal conductivity of aluminum, copper,
//! iron, and tungsten for temperatures from 1 K to the melting point"
//! https://nvlpubs.nist.gov/nistpubs/Legacy/IR/nbsir84-3007.pdf
//!
//! ## 依赖关系
//! - 被 `materials/mod.rs` 通过 ConductivityModel::Matthiessen 引用
//! - 纯静态数据，无外部依赖

/// Lorentz 常数 L₀ (V²/K²)
pub const LORENTZ_RATIO: f64 = 2.443e-8;

/// 混合项系数 P₇
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MixingCoefficient {
    /// 与纯度无关的常数（铁、钨为 0）
    Constant(f64),
    /// 铜：P₇ = coefficient / (β / beta_reference)^exponent，其中 β = ρ₀ / L₀
    PurityScaled {
        coefficient: f64,
        beta_reference: f64,
        exponent: f64,
    },
}

impl MixingCoefficient {
    fn value(&self, beta: f64) -> f64 {
        match *self {
            MixingCoefficient::Constant(p7) => p7,
            MixingCoefficient::PurityScaled {
                coefficient,
                beta_reference,
                exponent,
            } => coefficient / (beta / beta_reference).powf(exponent),
        }
    }
}

/// 修正项中的单个对数高斯项
///
/// amplitude · ln(T / log_center) · exp(−(ln(T / peak) / spread)²)
///
/// `log_center` 为 None 时省略对数因子（钨的高温项）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionTerm {
    pub amplitude: f64,
    pub log_center: Option<f64>,
    pub peak: f64,
    pub spread: f64,
}

impl CorrectionTerm {
    const fn new(amplitude: f64, log_center: f64, peak: f64, spread: f64) -> Self {
        Self {
            amplitude,
            log_center: Some(log_center),
            peak,
            spread,
        }
    }

    const fn gaussian(amplitude: f64, peak: f64, spread: f64) -> Self {
        Self {
            amplitude,
            log_center: None,
            peak,
            spread,
        }
    }

    pub fn evaluate(&self, kelvin: f64) -> f64 {
        let log_factor = self.log_center.map_or(1.0, |c| (kelvin / c).ln());
        let width = (kelvin / self.peak).ln() / self.spread;
        self.amplitude * log_factor * (-(width * width)).exp()
    }
}

/// 纯金属拟合参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetalFit {
    /// 273 K 电阻率 (Ω·m)
    pub resistivity_273: f64,
    /// P₁ .. P₆
    pub p: [f64; 6],
    /// P₇
    pub mixing: MixingCoefficient,
    /// W_c
    pub correction: &'static [CorrectionTerm],
}

/// 热阻分解 [m·K/W]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalResistivity {
    /// W₀：杂质散射
    pub residual: f64,
    /// Wᵢ：声子散射（含经验修正）
    pub ideal: f64,
    /// Wᵢ₀：偏离 Matthiessen 定则的混合项
    pub mixed: f64,
}

impl ThermalResistivity {
    pub fn total(&self) -> f64 {
        self.residual + self.ideal + self.mixed
    }

    /// λ = 1 / (W₀ + Wᵢ + Wᵢ₀)
    pub fn conductivity(&self) -> f64 {
        1.0 / self.total()
    }
}

impl MetalFit {
    /// 计算 T (K)、给定 RRR 下的热阻分解
    ///
    /// RRR = 1 时 ρ₀ 发散，结果为非有限值；此处不做钳制。
    pub fn resistivity(&self, kelvin: f64, rrr: f64) -> ThermalResistivity {
        let [p1, p2, p3, p4, p5, p6] = self.p;

        let resistivity_0 = self.resistivity_273 / (rrr - 1.0);
        let beta = resistivity_0 / LORENTZ_RATIO;
        let residual = beta / kelvin;

        let correction: f64 = self.correction.iter().map(|c| c.evaluate(kelvin)).sum();
        let ideal = p1 * kelvin.powf(p2)
            / (1.0 + p1 * p3 * kelvin.powf(p2 + p4) * (-(p5 / kelvin).powf(p6)).exp())
            + correction;

        let p7 = self.mixing.value(beta);
        let mixed = p7 * ideal * residual / (residual + ideal);

        ThermalResistivity {
            residual,
            ideal,
            mixed,
        }
    }

    /// 热导率 [W/(m·K)]
    pub fn conductivity(&self, kelvin: f64, rrr: f64) -> f64 {
        self.resistivity(kelvin, rrr).conductivity()
    }
}

pub static ALUMINUM: MetalFit = MetalFit {
    resistivity_273: 24.8e-9,
    p: [4.716e-8, 2.446, 623.6, -0.16, 130.9, 2.5],
    mixing: MixingCoefficient::Constant(0.8168),
    correction: &[
        CorrectionTerm::new(-0.0005, 330.0, 380.0, 0.6),
        CorrectionTerm::new(-0.0013, 110.0, 94.0, 0.5),
    ],
};

pub static COPPER: MetalFit = MetalFit {
    resistivity_273: 15.4e-9,
    p: [1.754e-8, 2.763, 1102.0, -0.165, 70.0, 1.765],
    mixing: MixingCoefficient::PurityScaled {
        coefficient: 0.838,
        beta_reference: 0.0003,
        exponent: 0.1661,
    },
    correction: &[
        CorrectionTerm::new(-0.00012, 420.0, 470.0, 0.7),
        CorrectionTerm::new(-0.00016, 73.0, 87.0, 0.45),
        CorrectionTerm::new(-0.00002, 18.0, 21.0, 0.5),
    ],
};

pub static IRON: MetalFit = MetalFit {
    resistivity_273: 87e-9,
    p: [166.9e-8, 1.868, 1.503e5, -1.22, 238.6, 1.392],
    mixing: MixingCoefficient::Constant(0.0),
    correction: &[
        CorrectionTerm::new(-0.004, 440.0, 650.0, 0.8),
        CorrectionTerm::new(-0.002, 90.0, 90.0, 0.45),
    ],
};

pub static TUNGSTEN: MetalFit = MetalFit {
    resistivity_273: 48.4e-9,
    p: [31.70e-8, 2.29, 541.3, -0.22, 69.94, 3.557],
    mixing: MixingCoefficient::Constant(0.0),
    correction: &[
        CorrectionTerm::new(-0.00085, 130.0, 230.0, 0.7),
        CorrectionTerm::gaussian(0.00015, 3500.0, 0.8),
        CorrectionTerm::new(0.0006, 90.0, 80.0, 0.4),
        CorrectionTerm::new(0.0003, 24.0, 33.0, 0.5),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_copper_reference_values() {
        assert_relative_eq!(COPPER.conductivity(4.0, 50.0), 310.81404647600476, max_relative = 1e-9);
        assert_relative_eq!(COPPER.conductivity(20.0, 50.0), 1356.216677493939, max_relative = 1e-9);
        assert_relative_eq!(COPPER.conductivity(273.0, 50.0), 394.0537206267126, max_relative = 1e-9);
    }

    #[test]
    fn test_aluminum_reference_values() {
        assert_relative_eq!(ALUMINUM.conductivity(4.0, 50.0), 192.98102805597964, max_relative = 1e-9);
        assert_relative_eq!(ALUMINUM.conductivity(77.0, 50.0), 360.2531927039191, max_relative = 1e-9);
        assert_relative_eq!(ALUMINUM.conductivity(300.0, 50.0), 230.49310314396863, max_relative = 1e-9);
    }

    #[test]
    fn test_iron_and_tungsten_reference_values() {
        assert_relative_eq!(IRON.conductivity(20.0, 50.0), 244.88990989113745, max_relative = 1e-9);
        assert_relative_eq!(IRON.conductivity(273.0, 50.0), 80.84123147856461, max_relative = 1e-9);
        assert_relative_eq!(TUNGSTEN.conductivity(4.0, 50.0), 98.8572536544171, max_relative = 1e-9);
        assert_relative_eq!(TUNGSTEN.conductivity(77.0, 50.0), 225.27499264637765, max_relative = 1e-9);
    }

    #[test]
    fn test_mixed_term_vanishes_without_p7() {
        for fit in [IRON, TUNGSTEN] {
            for t in [1.0, 4.0, 20.0, 77.0, 150.0, 273.0, 300.0, 1000.0] {
                let w = fit.resistivity(t, 30.0);
                assert_eq!(w.mixed, 0.0, "W_io should vanish at {} K", t);
                assert_eq!(w.conductivity(), 1.0 / (w.residual + w.ideal));
            }
        }
    }

    #[test]
    fn test_mixed_term_present_for_al_and_cu() {
        assert!(ALUMINUM.resistivity(77.0, 50.0).mixed > 0.0);
        assert!(COPPER.resistivity(77.0, 50.0).mixed > 0.0);
    }

    #[test]
    fn test_residual_term_follows_rrr() {
        // ρ₀ ∝ 1/(RRR−1)，W₀ 同比例
        let low = COPPER.resistivity(10.0, 11.0).residual;
        let high = COPPER.resistivity(10.0, 101.0).residual;
        assert_relative_eq!(low / high, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_copper_diverges_as_rrr_approaches_one() {
        let near = COPPER.conductivity(273.0, 1.0001);
        let far = COPPER.conductivity(273.0, 50.0);
        assert_relative_eq!(near, 0.04330285957554068, max_relative = 1e-6);
        assert!(near < far / 1000.0);

        let at_singularity = COPPER.conductivity(273.0, 1.0);
        assert!(!at_singularity.is_finite() || at_singularity == 0.0);
    }

    #[test]
    fn test_tungsten_gaussian_term_has_no_log_factor() {
        let term = TUNGSTEN.correction[1];
        assert!(term.log_center.is_none());
        // 峰值处 exp(0) = 1
        assert_relative_eq!(term.evaluate(3500.0), 0.00015, max_relative = 1e-12);
    }
}
