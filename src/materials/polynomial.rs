//! # 对数多项式拟合
//!
//! NIST 低温材料数据库对合金与绝缘材料使用 8 阶对数多项式拟合：
//!
//! ## 公式
//! log10(y) = Σₖ cₖ (log10 T)ᵏ,  k = 0..8
//!
//! 磷青铜的拟合使用自然对数：ln(y) = Σₖ cₖ (ln T)ᵏ
//!
//! ## 数据来源
//! - 热导率与比热：NIST Cryogenic Technologies Group, Material Properties
//!   https://trc.nist.gov/cryogenics/materials/materialproperties.htm
//! - 磷青铜：JWST 导线束测量拟合，NASA NTRS 20090032058
//!
//! ## 依赖关系
//! - 被 `materials/mod.rs` 通过 ConductivityModel / SpecificHeatModel 引用
//! - 纯静态数据，无外部依赖

use crate::models::ValidRange;

/// 多项式自变量与结果所用的对数底
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogBase {
    /// y = 10^P(log10 T)
    Ten,
    /// y = exp(P(ln T))
    Natural,
}

/// 8 阶对数多项式拟合
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogPolynomial {
    /// c₀ .. c₈
    pub coefficients: [f64; 9],
    pub base: LogBase,
}

impl LogPolynomial {
    pub const fn log10(coefficients: [f64; 9]) -> Self {
        Self {
            coefficients,
            base: LogBase::Ten,
        }
    }

    pub const fn ln(coefficients: [f64; 9]) -> Self {
        Self {
            coefficients,
            base: LogBase::Natural,
        }
    }

    /// 计算 T (K) 处的拟合值
    pub fn evaluate(&self, kelvin: f64) -> f64 {
        match self.base {
            LogBase::Ten => 10f64.powf(self.exponent(kelvin.log10())),
            LogBase::Natural => self.exponent(kelvin.ln()).exp(),
        }
    }

    /// Σₖ cₖ xᵏ（Horner 形式）
    fn exponent(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

/// 带有效温度区间的热导率拟合
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialFit {
    pub polynomial: LogPolynomial,
    pub range: ValidRange,
    /// 非 NIST 来源时的出处说明
    pub non_nist_origin: Option<&'static str>,
}

// ─────────────────────────────────────────────────────────────
// 热导率 [W/(m·K)]
// ─────────────────────────────────────────────────────────────

/// 304 / 304L / 316 不锈钢共用同一组系数
pub static STAINLESS_CONDUCTIVITY: PolynomialFit = PolynomialFit {
    polynomial: LogPolynomial::log10([
        -1.4087, 1.3982, 0.2543, -0.6260, 0.2334, 0.4256, -0.4658, 0.1650, -0.0199,
    ]),
    range: ValidRange::new(4.0, 300.0),
    non_nist_origin: None,
};

/// G-10 法向
pub static G10_NORMAL_CONDUCTIVITY: PolynomialFit = PolynomialFit {
    polynomial: LogPolynomial::log10([
        -4.1236, 13.788, -26.068, 26.272, -14.663, 4.4954, -0.6905, 0.0397, 0.0,
    ]),
    range: ValidRange::new(4.0, 300.0),
    non_nist_origin: None,
};

/// G-10 经向
pub static G10_WARP_CONDUCTIVITY: PolynomialFit = PolynomialFit {
    polynomial: LogPolynomial::log10([
        -2.64827, 8.80228, -24.8998, 41.1625, -39.8754, 23.1778, -7.95635, 1.48806, -0.11701,
    ]),
    range: ValidRange::new(4.0, 300.0),
    non_nist_origin: None,
};

pub static KAPTON_CONDUCTIVITY: PolynomialFit = PolynomialFit {
    polynomial: LogPolynomial::log10([
        5.73101, -39.5199, 79.9313, -83.8572, 50.9157, -17.9835, 3.42413, -0.27133, 0.0,
    ]),
    range: ValidRange::new(4.0, 300.0),
    non_nist_origin: None,
};

/// 黄铜 UNS C26000，7 阶拟合（c₈ = 0）
pub static BRASS_CONDUCTIVITY: PolynomialFit = PolynomialFit {
    polynomial: LogPolynomial::log10([
        0.021035, -1.01835, 4.54083, -5.03374, 3.20536, -1.12933, 0.174057, -0.0038151, 0.0,
    ]),
    range: ValidRange::new(5.0, 116.0),
    non_nist_origin: None,
};

pub static MYLAR_CONDUCTIVITY: PolynomialFit = PolynomialFit {
    polynomial: LogPolynomial::log10([
        -1.37737, -3.40668, 20.5842, -53.1244, 73.2476, -57.6546, 26.1192, -6.34790, 0.640331,
    ]),
    range: ValidRange::new(1.0, 83.0),
    non_nist_origin: None,
};

pub static PHOSPHOR_BRONZE_CONDUCTIVITY: PolynomialFit = PolynomialFit {
    polynomial: LogPolynomial::ln([
        -10.9482, 28.4752, -32.3378, 20.9036, -8.05399, 1.90329, -0.271774, 0.0215998,
        -7.35095e-4,
    ]),
    range: ValidRange::new(4.0, 295.0),
    non_nist_origin: Some("fit from wires in JWST"),
};

// ─────────────────────────────────────────────────────────────
// 比热 [J/(kg·K)]
// ─────────────────────────────────────────────────────────────

/// 不锈钢比热的有效区间
pub const STAINLESS_HEAT_CAPACITY_RANGE: ValidRange = ValidRange::new(4.0, 300.0);

pub static SS304_HEAT_CAPACITY: LogPolynomial = LogPolynomial::log10([
    22.0061, -127.5528, 303.647, -381.0098, 274.0328, -112.9212, 24.7593, -2.239153, 0.0,
]);

/// 316 在 T > 50 K 时使用的系数
pub static SS316_HEAT_CAPACITY_ABOVE: LogPolynomial = LogPolynomial::log10([
    -1879.464, 3643.198, 76.70125, -6176.028, 7437.6247, -4305.7217, 1382.4627, -237.22704,
    17.05262,
]);

/// 316 在 T ≤ 50 K 时使用的系数
pub static SS316_HEAT_CAPACITY_BELOW: LogPolynomial = LogPolynomial::log10([
    12.2486, -80.6422, 218.743, -308.854, 239.5296, -89.9982, 3.15315, 8.44996, -1.91368,
]);

/// 316 两组系数的分界温度 (K)
pub const SS316_BRANCH_TEMPERATURE: f64 = 50.0;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_polynomial() {
        let p = LogPolynomial::log10([2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_relative_eq!(p.evaluate(123.0), 100.0, max_relative = 1e-12);

        let p = LogPolynomial::ln([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_relative_eq!(p.evaluate(42.0), std::f64::consts::E, max_relative = 1e-12);
    }

    #[test]
    fn test_linear_term_is_power_law() {
        // log10 y = log10 T  =>  y = T
        let p = LogPolynomial::log10([0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_relative_eq!(p.evaluate(77.0), 77.0, max_relative = 1e-12);
    }

    #[test]
    fn test_stainless_conductivity_reference() {
        let fit = STAINLESS_CONDUCTIVITY.polynomial;
        assert_relative_eq!(fit.evaluate(4.0), 0.2723961889664812, max_relative = 1e-9);
        assert_relative_eq!(fit.evaluate(77.0), 7.9206516022584, max_relative = 1e-9);
        assert_relative_eq!(fit.evaluate(300.0), 15.308653824348747, max_relative = 1e-9);
    }

    #[test]
    fn test_insulators_reference() {
        assert_relative_eq!(
            G10_NORMAL_CONDUCTIVITY.polynomial.evaluate(77.0),
            0.27996541317078194,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            G10_WARP_CONDUCTIVITY.polynomial.evaluate(77.0),
            0.38582223255084036,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            KAPTON_CONDUCTIVITY.polynomial.evaluate(77.0),
            0.12552190401115523,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            MYLAR_CONDUCTIVITY.polynomial.evaluate(20.0),
            0.07349191810265718,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_brass_reference() {
        let fit = BRASS_CONDUCTIVITY.polynomial;
        assert_relative_eq!(fit.evaluate(5.0), 2.5433124450595077, max_relative = 1e-9);
        assert_relative_eq!(fit.evaluate(77.0), 39.79577522853466, max_relative = 1e-9);
        assert_relative_eq!(fit.evaluate(116.0), 52.55713272795812, max_relative = 1e-9);
    }

    #[test]
    fn test_phosphor_bronze_uses_natural_log() {
        let fit = PHOSPHOR_BRONZE_CONDUCTIVITY.polynomial;
        assert_eq!(fit.base, LogBase::Natural);
        assert_relative_eq!(fit.evaluate(4.0), 1.4093576107097445, max_relative = 1e-9);
        assert_relative_eq!(fit.evaluate(77.0), 27.200283293790854, max_relative = 1e-9);
        assert_relative_eq!(fit.evaluate(295.0), 98.4000009085326, max_relative = 1e-9);
        assert!(PHOSPHOR_BRONZE_CONDUCTIVITY.non_nist_origin.is_some());
    }

    #[test]
    fn test_heat_capacity_reference() {
        assert_relative_eq!(SS304_HEAT_CAPACITY.evaluate(77.0), 204.49302744916713, max_relative = 1e-9);
        assert_relative_eq!(SS304_HEAT_CAPACITY.evaluate(300.0), 469.44884067402404, max_relative = 1e-9);
        assert_relative_eq!(SS316_HEAT_CAPACITY_BELOW.evaluate(40.0), 57.55160398283896, max_relative = 1e-9);
        assert_relative_eq!(SS316_HEAT_CAPACITY_ABOVE.evaluate(60.0), 141.77458782903778, max_relative = 1e-9);
    }
}
