pub mod model;
pub mod response;
pub mod routes;
pub mod views;
