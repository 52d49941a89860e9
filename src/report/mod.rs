//! # 结果报告模块
//!
//! 把多种材料在同一组温度上的计算结果整理成曲线集合，供表格、导出与绘图使用。
//!
//! ## 子模块
//! - `export`: CSV / XY 数据导出
//! - `plot`: 双对数曲线图
//!
//! ## 依赖关系
//! - 被 `commands/evaluate.rs` 使用
//! - 使用 `cryoprops::models::Property` 标注物性与单位

pub mod export;
pub mod plot;

use cryoprops::Property;

/// 单种材料的曲线
#[derive(Debug, Clone)]
pub struct Series {
    /// 材料标识
    pub material: String,
    /// 与 `PropertyCurves::temperatures` 一一对应
    pub values: Vec<f64>,
}

/// 同一组温度上的多条物性曲线
#[derive(Debug, Clone)]
pub struct PropertyCurves {
    pub property: Property,
    /// 温度（K）
    pub temperatures: Vec<f64>,
    pub series: Vec<Series>,
}

impl PropertyCurves {
    pub fn new(property: Property, temperatures: Vec<f64>) -> Self {
        Self {
            property,
            temperatures,
            series: Vec::new(),
        }
    }

    pub fn push(&mut self, material: &str, values: Vec<f64>) {
        self.series.push(Series {
            material: material.to_string(),
            values,
        });
    }

    /// 坐标轴/表头使用的标签，如 "thermal conductivity [W/(m·K)]"
    pub fn label(&self) -> String {
        format!("{} [{}]", self.property, self.property.unit())
    }
}

/// 数值格式：常规量级用定点，过大或过小用科学计数
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || (1e-2..1e5).contains(&magnitude) {
        format!("{:.4}", value)
    } else {
        format!("{:.4e}", value)
    }
}
