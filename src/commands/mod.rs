//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `report/`, `utils/` 与 `cryoprops` 库
//! - 子模块: evaluate, materials

pub mod evaluate;
pub mod materials;

use crate::cli::Commands;
use cryoprops::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Conductivity(args) => evaluate::execute_conductivity(args),
        Commands::SpecificHeat(args) => evaluate::execute_specific_heat(args),
        Commands::Materials => materials::execute(),
    }
}
