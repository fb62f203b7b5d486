mod details;
mod display;
mod feature_chart;
mod list;

pub use details::ModelDetailsCard;
pub use list::Models;
