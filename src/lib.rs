//! gpui_heatmap crate: grid heat maps over bubble-chart data in GPUI

pub mod animation;
pub mod bounds;
pub mod builder;
pub mod canvas;
pub mod color;
pub mod data_types;
pub mod formatter;
pub mod geometry;
pub mod plot_types;
pub mod renderer;
pub mod scales;
pub mod transform;
pub mod utils;
pub mod viewport;

pub use builder::{HeatmapBuilder, HeatmapModel};
pub use canvas::{Canvas, RecordingCanvas, WindowCanvas};
pub use data_types::{BubbleData, BubbleDataSet, BubbleEntry, HeatmapConfig, Highlight};
pub use plot_types::{HeatmapPlot, PlotRenderer};
pub use renderer::{DataRenderer, HeatMapRenderer, RenderContext};
