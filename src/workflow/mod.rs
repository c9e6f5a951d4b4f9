//! 流程层
//!
//! 定义"一个候选链接"的完整处理流程：
//! - `SubjectCtx` - 上下文封装（候选序号 + 地址）
//! - `SubjectFlow` - 流程编排（导航 → 枚举图片 → 逐张校验）

pub mod subject_ctx;
pub mod subject_flow;

pub use subject_ctx::SubjectCtx;
pub use subject_flow::SubjectFlow;
