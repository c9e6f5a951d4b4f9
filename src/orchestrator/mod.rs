//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责把一次完整的采集运行串起来，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::HarvestPipeline (一轮运行)
//!     ↓
//! workflow::SubjectFlow (处理单个候选链接)
//!     ↓
//! services (能力层：discover / harvest / validate / pdf / zip)
//!     ↓
//! infrastructure (基础设施：Navigator / Workspace)
//! ```
//!
//! ## 设计原则
//!
//! 1. **资源隔离**：只有编排层持有 Browser，保证任何退出路径都会关闭它
//! 2. **严格顺序**：候选之间、图片之间都是串行处理，输出顺序由 DOM 顺序决定
//! 3. **无业务逻辑**：只做调度和统计，不做具体业务判断

pub mod pipeline;

pub use pipeline::{HarvestOutput, HarvestPipeline};
