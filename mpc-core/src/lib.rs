pub mod designation;
pub mod resolver;
