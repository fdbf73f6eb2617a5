mod horizontal;
pub use horizontal::Horizontal;

mod vertical;
pub use vertical::Vertical;
