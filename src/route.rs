use dioxus::prelude::*;

use crate::components::Navbar;
use crate::views::{Horizontal, Vertical};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Horizontal {},
    #[route("/vertical")]
    Vertical {},
}
