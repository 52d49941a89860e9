//! # 温度输入
//!
//! 计算器接受单个温度或一组温度（K）。标量输入得到标量结果，
//! 序列输入逐元素套用同一公式，得到等长结果。
//!
//! ## 依赖关系
//! - 被 `properties/` 的计算器作为泛型约束使用
//! - 无外部模块依赖

/// 单个温度或一组温度（K）
pub trait Temperatures {
    /// 与输入同形的结果类型
    type Output;

    /// 以切片形式查看全部温度
    fn kelvin(&self) -> &[f64];

    /// 逐元素套用标量公式
    fn map_kelvin<F: Fn(f64) -> f64>(&self, f: F) -> Self::Output;
}

impl Temperatures for f64 {
    type Output = f64;

    fn kelvin(&self) -> &[f64] {
        std::slice::from_ref(self)
    }

    fn map_kelvin<F: Fn(f64) -> f64>(&self, f: F) -> f64 {
        f(*self)
    }
}

impl Temperatures for Vec<f64> {
    type Output = Vec<f64>;

    fn kelvin(&self) -> &[f64] {
        self
    }

    fn map_kelvin<F: Fn(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.iter().map(|&t| f(t)).collect()
    }
}

impl Temperatures for &Vec<f64> {
    type Output = Vec<f64>;

    fn kelvin(&self) -> &[f64] {
        self
    }

    fn map_kelvin<F: Fn(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.iter().map(|&t| f(t)).collect()
    }
}

impl Temperatures for &[f64] {
    type Output = Vec<f64>;

    fn kelvin(&self) -> &[f64] {
        self
    }

    fn map_kelvin<F: Fn(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.iter().map(|&t| f(t)).collect()
    }
}

impl<const N: usize> Temperatures for [f64; N] {
    type Output = [f64; N];

    fn kelvin(&self) -> &[f64] {
        self
    }

    fn map_kelvin<F: Fn(f64) -> f64>(&self, f: F) -> [f64; N] {
        self.map(f)
    }
}

impl<const N: usize> Temperatures for &[f64; N] {
    type Output = [f64; N];

    fn kelvin(&self) -> &[f64] {
        &self[..]
    }

    fn map_kelvin<F: Fn(f64) -> f64>(&self, f: F) -> [f64; N] {
        self.map(f)
    }
}

/// 生成温度扫描点
///
/// `log_spacing` 为 true 时在对数坐标下等间距，适合跨越数个量级的低温区间。
pub fn sweep(min: f64, max: f64, points: usize, log_spacing: bool) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![min],
        n => {
            let steps = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let frac = i as f64 / steps;
                    if log_spacing {
                        (min.ln() + frac * (max.ln() - min.ln())).exp()
                    } else {
                        min + frac * (max - min)
                    }
                })
                .collect()
        }
    }
}
