//! 基础设施层
//!
//! 持有稀缺资源，只暴露能力：
//! - `Navigator` - 唯一的 page owner，提供导航和 DOM 扫描能力
//! - `Workspace` - 每次运行的输出目录，提供生命周期管理

pub mod navigator;
pub mod workspace;

pub use navigator::Navigator;
pub use workspace::Workspace;
