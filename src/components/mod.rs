mod anglebutton;
pub use anglebutton::AngleButton;

mod navbar;
pub use navbar::Navbar;

mod numberinput;
pub use numberinput::NumberInput;

mod release;
pub use release::use_window_release;

mod timepicker;
pub use timepicker::TimePicker;
