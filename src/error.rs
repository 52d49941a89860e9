//! # 统一错误处理模块
//!
//! 定义 cryoprops 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 使用 `models/evaluation.rs` 的 Property 标注出错的物性

use crate::models::Property;
use thiserror::Error;

/// cryoprops 统一错误类型
#[derive(Error, Debug)]
pub enum CryoError {
    // ─────────────────────────────────────────────────────────────
    // 材料查询错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown material '{material}' for {property}, please check spelling")]
    UnsupportedMaterial { material: String, property: Property },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),
}

impl CryoError {
    /// 构造未知材料错误
    pub fn unsupported(material: &str, property: Property) -> Self {
        CryoError::UnsupportedMaterial {
            material: material.to_string(),
            property,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CryoError>;
