//! # 物性计算子命令实现
//!
//! 在一组温度上计算一种或多种材料的热导率/比热。
//!
//! ## 功能
//! - 温度来自显式列表或区间扫描（线性/对数间距）
//! - 终端表格输出，每种材料一列
//! - 可选导出数据文件 (CSV/XY) 或曲线图 (PNG/SVG)
//!
//! ## 依赖关系
//! - 使用 `cli/evaluate.rs` 定义的参数
//! - 使用 `cryoprops` 库的计算器
//! - 使用 `report/` 模块导出与绘图

use crate::cli::evaluate::{
    ConductivityArgs, OutputArgs, OutputFormat, SpecificHeatArgs, TemperatureArgs,
};
use crate::report::{self, export, plot, PropertyCurves};
use crate::utils::output;

use cryoprops::models::sweep;
use cryoprops::{
    heat_capacity, thermal_conductivity, CryoError, FitWarning, Material, Property, Result,
    SpecificHeatMaterial,
};

use std::path::Path;
use tabled::builder::Builder;
use tabled::settings::Style;

/// 执行热导率计算
pub fn execute_conductivity(args: ConductivityArgs) -> Result<()> {
    output::print_header("Thermal Conductivity");

    let materials = parse_materials::<Material>(&args.material)?;
    let temperatures = resolve_temperatures(&args.temperatures)?;
    let rrr = resolve_rrr(&materials, args.rrr)?;

    let mut curves = PropertyCurves::new(Property::ThermalConductivity, temperatures);
    for material in materials {
        let eval = thermal_conductivity(material, &curves.temperatures, rrr);
        report_warnings(&eval.warnings);
        curves.push(material.identifier(), eval.value);
    }

    emit(&curves, &args.output)
}

/// 执行比热计算
pub fn execute_specific_heat(args: SpecificHeatArgs) -> Result<()> {
    output::print_header("Specific Heat");

    let materials = parse_materials::<SpecificHeatMaterial>(&args.material)?;
    let temperatures = resolve_temperatures(&args.temperatures)?;

    let mut curves = PropertyCurves::new(Property::SpecificHeat, temperatures);
    for material in materials {
        let eval = heat_capacity(material, &curves.temperatures);
        report_warnings(&eval.warnings);
        curves.push(material.identifier(), eval.value);
    }

    emit(&curves, &args.output)
}

/// 在入口处一次性解析全部材料标识
fn parse_materials<M>(names: &[String]) -> Result<Vec<M>>
where
    M: std::str::FromStr<Err = CryoError>,
{
    names.iter().map(|name| name.trim().parse::<M>()).collect()
}

/// 展开温度输入
fn resolve_temperatures(args: &TemperatureArgs) -> Result<Vec<f64>> {
    let temperatures = match &args.range {
        Some(range) => {
            let (min, max) = parse_range(range)?;
            if args.points == 0 {
                return Err(CryoError::InvalidArgument(
                    "--points must be at least 1".to_string(),
                ));
            }
            sweep(min, max, args.points, args.log_spacing)
        }
        None => args.temperature.clone(),
    };

    if let Some(t) = temperatures.iter().find(|t| !(**t > 0.0)) {
        return Err(CryoError::InvalidArgument(format!(
            "temperature must be positive, got {} K",
            t
        )));
    }

    Ok(temperatures)
}

/// 解析温度范围 "min-max"
fn parse_range(range: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(CryoError::InvalidRange(range.to_string()));
    }

    let min: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| CryoError::InvalidRange(range.to_string()))?;
    let max: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| CryoError::InvalidRange(range.to_string()))?;

    if min <= 0.0 || max <= min {
        return Err(CryoError::InvalidRange(format!(
            "{} (must be 0 < min < max)",
            range
        )));
    }

    Ok((min, max))
}

/// 纯金属需要 RRR；其他材料忽略它
fn resolve_rrr(materials: &[Material], rrr: Option<f64>) -> Result<f64> {
    let metals: Vec<&str> = materials
        .iter()
        .filter(|m| m.uses_rrr())
        .map(|m| m.identifier())
        .collect();

    if metals.is_empty() {
        return Ok(rrr.unwrap_or(f64::NAN));
    }

    let rrr = rrr.ok_or_else(|| {
        CryoError::InvalidArgument(format!(
            "--rrr (or CRYOPROPS_RRR) is required for pure metals: {}",
            metals.join(", ")
        ))
    })?;

    if rrr <= 1.0 {
        output::print_warning(&format!(
            "RRR = {} is not physical for {} (RRR must exceed 1)",
            rrr,
            metals.join(", ")
        ));
    } else {
        output::print_info(&format!("Using RRR = {}", rrr));
    }

    Ok(rrr)
}

fn report_warnings(warnings: &[FitWarning]) {
    for warning in warnings {
        output::print_warning(&warning.to_string());
    }
}

/// 打印表格并按需写出文件
fn emit(curves: &PropertyCurves, args: &OutputArgs) -> Result<()> {
    print_table(curves);

    let Some(path) = &args.output else {
        return Ok(());
    };

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(path));

    match format {
        OutputFormat::Csv => export::to_csv(curves, path)?,
        OutputFormat::Xy => export::to_xy(curves, path)?,
        OutputFormat::Png | OutputFormat::Svg => {
            let title = args.title.clone().unwrap_or_else(|| {
                let mut title = curves.property.to_string();
                if let Some(first) = title.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                title
            });
            plot::generate_plot(
                curves,
                path,
                &title,
                args.width,
                args.height,
                format == OutputFormat::Svg,
            )?
        }
    }

    output::print_success(&format!("Results saved to '{}'", path.display()));
    Ok(())
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> OutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("png") => OutputFormat::Png,
        Some("svg") => OutputFormat::Svg,
        Some("xy") | Some("dat") | Some("txt") => OutputFormat::Xy,
        _ => OutputFormat::Csv,
    }
}

/// 打印结果表格
fn print_table(curves: &PropertyCurves) {
    let mut builder = Builder::default();

    let mut header = vec!["T (K)".to_string()];
    header.extend(curves.series.iter().map(|s| s.material.clone()));
    builder.push_record(header);

    for (i, t) in curves.temperatures.iter().enumerate() {
        let mut row = vec![format!("{:.3}", t)];
        row.extend(curves.series.iter().map(|s| report::format_value(s.values[i])));
        builder.push_record(row);
    }

    output::print_info(&curves.label());
    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);
}
