pub mod direction;
pub mod field;
pub mod hold;
