//! # 物性曲线图
//!
//! 使用 `plotters` 库生成双对数坐标的物性-温度曲线，每种材料一条。
//!
//! ## 功能
//! - 支持 PNG 和 SVG 输出
//! - 非正或非有限的数值（拟合外推的结果）不参与绘制
//!
//! ## 依赖关系
//! - 被 `commands/evaluate.rs` 调用
//! - 使用 `report/mod.rs` 的 PropertyCurves 结构
//! - 使用 `plotters` 渲染图表

use crate::report::PropertyCurves;
use cryoprops::{CryoError, Result};

use plotters::prelude::*;
use std::path::Path;

/// 生成曲线图
pub fn generate_plot(
    curves: &PropertyCurves,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_chart(&root, curves, title)?;
        root.present()
            .map_err(|e| CryoError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_chart(&root, curves, title)?;
        root.present()
            .map_err(|e| CryoError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 可在对数坐标上绘制的点
fn plottable(curves: &PropertyCurves, values: &[f64]) -> Vec<(f64, f64)> {
    curves
        .temperatures
        .iter()
        .zip(values.iter())
        .filter(|(t, v)| **t > 0.0 && v.is_finite() && **v > 0.0)
        .map(|(t, v)| (*t, *v))
        .collect()
}

/// 坐标范围 ((x_min, x_max), (y_min, y_max))，y 方向上下各留余量
fn axis_bounds(curves: &PropertyCurves) -> Option<((f64, f64), (f64, f64))> {
    let points: Vec<(f64, f64)> = curves
        .series
        .iter()
        .flat_map(|s| plottable(curves, &s.values))
        .collect();

    if points.is_empty() {
        return None;
    }

    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    // 单点时给出一个非退化区间
    let (x_min, x_max) = if x_max > x_min {
        (x_min, x_max)
    } else {
        (x_min / 2.0, x_max * 2.0)
    };

    Some(((x_min, x_max), (y_min / 2.0, y_max * 2.0)))
}

/// 绘制曲线图的核心逻辑
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curves: &PropertyCurves,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let ((x_min, x_max), (y_min, y_max)) = axis_bounds(curves).ok_or_else(|| {
        CryoError::PlotError("no positive finite values to plot".to_string())
    })?;

    root.fill(&WHITE)
        .map_err(|e| CryoError::PlotError(format!("{:?}", e)))?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())
        .map_err(|e| CryoError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("T (K)")
        .y_desc(curves.label())
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| CryoError::PlotError(format!("{:?}", e)))?;

    for (i, series) in curves.series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(
                plottable(curves, &series.values),
                color.stroke_width(2),
            ))
            .map_err(|e| CryoError::PlotError(format!("{:?}", e)))?
            .label(series.material.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 16))
        .draw()
        .map_err(|e| CryoError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryoprops::Property;

    #[test]
    fn test_axis_bounds_skip_unplottable_values() {
        let mut curves =
            PropertyCurves::new(Property::ThermalConductivity, vec![1.0, 4.0, 300.0]);
        curves.push("a", vec![f64::NAN, 0.5, 20.0]);
        curves.push("b", vec![-1.0, 2.0, 0.0]);

        let ((x_min, x_max), (y_min, y_max)) = axis_bounds(&curves).unwrap();
        assert_eq!((x_min, x_max), (4.0, 300.0));
        assert_eq!((y_min, y_max), (0.25, 40.0));
    }

    #[test]
    fn test_single_point_gets_nondegenerate_axis() {
        let mut curves = PropertyCurves::new(Property::SpecificHeat, vec![77.0]);
        curves.push("304", vec![204.5]);
        let ((x_min, x_max), _) = axis_bounds(&curves).unwrap();
        assert!(x_max > x_min);
    }

    #[test]
    fn test_nothing_to_plot() {
        let mut curves = PropertyCurves::new(Property::SpecificHeat, vec![77.0]);
        curves.push("304", vec![f64::NAN]);
        assert!(axis_bounds(&curves).is_none());
    }
}
