use dioxus::prelude::*;

use crate::components;
use crate::spinner::direction::ButtonSize;

#[component]
pub fn Vertical() -> Element {
    rsx! {
        div { id: "vertical",
            header { "Time" }
            components::TimePicker { vertical_angles: true, init_hours: 9 }
            header { "Large" }
            components::TimePicker { vertical_angles: true, size: ButtonSize::Large }
        }
    }
}
