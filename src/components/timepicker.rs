use dioxus::{logger::tracing::debug, prelude::*};

use crate::components::NumberInput;
use crate::spinner::direction::ButtonSize;

/// Hours, minutes and seconds spinners with a readout of what they report.
#[component]
pub fn TimePicker(
    #[props(default)] vertical_angles: bool,
    #[props(default)] size: ButtonSize,
    #[props(default = 25)] init_hours: i32,
) -> Element {
    let mut hours = use_signal(|| 0u8);
    let mut minutes = use_signal(|| 0u8);
    let mut seconds = use_signal(|| 0u8);

    let readout = format!("{:02}:{:02}:{:02}", hours(), minutes(), seconds());

    rsx!(
        div { class: "time-picker flex flex-col",
            div { class: "flex flex-row",
                NumberInput {
                    min: 0,
                    max: 23,
                    init_value: Some(init_hours),
                    vertical_angles,
                    size,
                    separator: ":".to_string(),
                    on_change: move |value| {
                        debug!("Hours {value}");
                        hours.set(value)
                    },
                }
                NumberInput {
                    max: 59,
                    vertical_angles,
                    size,
                    separator: ":".to_string(),
                    on_change: move |value| minutes.set(value),
                }
                NumberInput {
                    max: 59,
                    vertical_angles,
                    size,
                    on_change: move |value| seconds.set(value),
                }
            }
            div { class: "readout", "{readout}" }
        }
    )
}
