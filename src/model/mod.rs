pub mod category;
pub mod results;
