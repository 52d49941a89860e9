//! # 材料目录子命令实现
//!
//! 列出所有支持的材料、拟合模型、有效温度区间与数据出处。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `cryoprops::Material` 的目录信息
//! - 使用 `tabled` 打印表格

use crate::utils::output;
use cryoprops::materials::ConductivityModel;
use cryoprops::{Material, Result};

use tabled::{Table, Tabled};

/// 目录表格行
#[derive(Debug, Clone, Tabled)]
struct CatalogRow {
    #[tabled(rename = "ID")]
    identifier: &'static str,
    #[tabled(rename = "Material")]
    name: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "k(T) model")]
    model: &'static str,
    #[tabled(rename = "Range (K)")]
    range: String,
    #[tabled(rename = "Cp(T)")]
    specific_heat: &'static str,
    #[tabled(rename = "Source")]
    source: &'static str,
}

impl From<Material> for CatalogRow {
    fn from(material: Material) -> Self {
        let model = match material.conductivity_model() {
            ConductivityModel::Matthiessen(_) => "Matthiessen (RRR)",
            ConductivityModel::Polynomial(_) => "log polynomial",
        };
        let range = material
            .valid_range()
            .map(|r| format!("{} - {}", r.min, r.max))
            .unwrap_or_else(|| "-".to_string());

        CatalogRow {
            identifier: material.identifier(),
            name: material.display_name(),
            category: material.category().to_string(),
            model,
            range,
            specific_heat: if material.specific_heat().is_some() {
                "yes"
            } else {
                "-"
            },
            source: material.source(),
        }
    }
}

/// 执行材料列表
pub fn execute() -> Result<()> {
    output::print_header("Supported Materials");

    let rows: Vec<CatalogRow> = Material::ALL.iter().copied().map(CatalogRow::from).collect();
    println!("{}", Table::new(&rows));

    output::print_info("Identifiers are case-insensitive; pure metals require --rrr");
    Ok(())
}
