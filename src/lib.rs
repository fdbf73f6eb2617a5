pub mod components;
pub mod route;
pub mod spinner;
pub mod views;
