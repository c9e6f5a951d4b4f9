//! # Savol Harvest
//!
//! 一个从测验网站批量采集题目图片的 Rust 流水线：
//! 给定测试首页地址，用无头浏览器找出所有题目（savol）子页面，
//! 抓取每页的图片，按最小尺寸过滤后汇编成一份 PDF 和一个 ZIP。
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源，只暴露能力
//! - `Navigator` - 唯一的 page owner，提供导航和 eval() 能力
//! - `Workspace` - 每轮运行的输出目录，先清空后写入
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个对象
//! - `LinkDiscoverer` - 从首页找题目链接
//! - `ImageHarvester` - 从题目页枚举图片地址
//! - `Validator` - 下载单张图片并做尺寸校验
//! - `PdfBuilder` / `ArchiveBuilder` - 产物汇编
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个候选链接"的完整处理流程
//! - `SubjectCtx` - 上下文封装（候选序号 + 地址）
//! - `SubjectFlow` - 流程编排（导航 → 枚举 → 校验）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/pipeline` - 一轮运行的状态推进和资源管理
//!
//! ## 运行约束
//!
//! 一轮运行是单一协作式串行流：候选之间、图片之间都不并发，
//! 输出顺序完全由 DOM 发现顺序决定。浏览器会话在任何退出路径上
//! 都会被关闭；工作目录默认共享、开始时清空，同一时刻只允许一轮运行。

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use browser::launch_headless_browser;
pub use config::Config;
pub use error::{HarvestError, Result};
pub use infrastructure::{Navigator, Workspace};
pub use models::{CandidateLink, RejectReason, Subject, Verdict};
pub use orchestrator::{HarvestOutput, HarvestPipeline};
pub use workflow::{SubjectCtx, SubjectFlow};
