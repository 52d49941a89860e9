//! # 物性数据导出
//!
//! 导出计算结果到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: 长表格式，每行一个 (material, temperature_k, value, unit)
//! - XY: 首列温度，其后每种材料一列，`#` 开头的注释行说明列含义
//!
//! ## 依赖关系
//! - 被 `commands/evaluate.rs` 调用
//! - 使用 `report/mod.rs` 的 PropertyCurves 结构
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::report::PropertyCurves;
use cryoprops::{CryoError, Result};

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV 行
#[derive(Debug, Serialize)]
struct CsvRecord<'a> {
    material: &'a str,
    temperature_k: f64,
    value: f64,
    unit: &'a str,
}

/// 导出为 CSV 格式
pub fn to_csv(curves: &PropertyCurves, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    let unit = curves.property.unit();

    for series in &curves.series {
        for (t, v) in curves.temperatures.iter().zip(series.values.iter()) {
            wtr.serialize(CsvRecord {
                material: &series.material,
                temperature_k: *t,
                value: *v,
                unit,
            })?;
        }
    }

    wtr.flush().map_err(|e| CryoError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出为 XY 格式
pub fn to_xy(curves: &PropertyCurves, output_path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| CryoError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut out = BufWriter::new(file);

    let materials: Vec<&str> = curves.series.iter().map(|s| s.material.as_str()).collect();
    writeln!(out, "# cryoprops: {}", curves.label()).map_err(write_err)?;
    writeln!(out, "# Columns: T (K), {}", materials.join(", ")).map_err(write_err)?;
    writeln!(out, "#").map_err(write_err)?;

    for (i, t) in curves.temperatures.iter().enumerate() {
        let mut line = format!("{:.4}", t);
        for series in &curves.series {
            line.push_str(&format!("\t{:.6e}", series.values[i]));
        }
        writeln!(out, "{}", line).map_err(write_err)?;
    }

    out.flush().map_err(write_err)?;
    Ok(())
}
