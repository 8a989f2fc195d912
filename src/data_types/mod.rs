pub mod bubble_data;
pub mod data;
pub mod datasource;
pub mod hex_color;
pub mod highlight;
pub mod plot_configs;

pub use bubble_data::*;
pub use data::*;
pub use datasource::*;
pub use highlight::*;
pub use plot_configs::*;
