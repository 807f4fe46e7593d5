//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - clinical threshold constants (`HDL_LOW`, `HDL_PROTECTIVE`, ...)
//! - the chart data model (`Sample`, `AxisRange`, `Band`, `Rgb`)
//! - scheme presets (`SchemeKind`) and risk labels (`RiskLevel`)
//! - run configuration (`ChartConfig`) and computed output (`ChartSpec`)

pub mod types;

pub use types::*;
