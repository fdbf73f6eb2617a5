use std::rc::Rc;

use dioxus::{
    logger::tracing::{debug, warn},
    prelude::*,
};

use crate::components::AngleButton;
use crate::spinner::{
    direction::{ButtonSize, Direction},
    field::{FieldBounds, FieldInput, NumberField},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum KeyAction {
    Step(i32),
    /// Leave the input; the blur handler commits.
    Blur,
}

fn key_action(key: &Key) -> Option<KeyAction> {
    match key {
        Key::ArrowUp => Some(KeyAction::Step(1)),
        Key::ArrowDown => Some(KeyAction::Step(-1)),
        Key::Enter => Some(KeyAction::Blur),
        _ => None,
    }
}

/// Two digit number field between two angle buttons.
///
/// `on_change` only ever sees values inside `min..=max`.
#[component]
pub fn NumberInput(
    #[props(default)] size: ButtonSize,
    min: Option<i32>,
    max: Option<i32>,
    #[props(default)] vertical_angles: bool,
    separator: Option<String>,
    #[props(!optional, default = Some(0))] init_value: Option<i32>,
    on_change: Option<EventHandler<u8>>,
) -> Element {
    let mut field = use_signal(|| NumberField::new(FieldBounds::new(min, max), init_value));
    let mut input_element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    use_effect(use_reactive!(|(min, max, init_value)| {
        debug!("Initializing number input with {init_value:?} in {min:?}..={max:?}");
        field.write().reset(FieldBounds::new(min, max), init_value);
    }));

    let mut dispatch = move |input: FieldInput| {
        let reported = field.write().handle(input);
        if let (Some(value), Some(on_change)) = (reported, on_change) {
            on_change.call(value);
        }
    };

    let (first, second) = Direction::pair(vertical_angles);
    let layout = match vertical_angles {
        true => "",
        false => "is-flex",
    };
    let input_class = size.input_class();
    let text = field.read().text().to_string();

    rsx!(
        div { class: "number-spinner is-inline-block is-unselectable",
            div { class: "is-flex",
                div {
                    class: "has-text-centered {layout}",
                    style: "align-items: center;",
                    AngleButton {
                        direction: first,
                        size,
                        handle_click: move |delta| dispatch(FieldInput::Step(delta)),
                    }
                    div {
                        input {
                            class: "input {input_class} p-0 number-input",
                            r#type: "text",
                            inputmode: "numeric",
                            maxlength: 2,
                            size: 2,
                            placeholder: "00",
                            value: "{text}",
                            onmounted: move |event| input_element.set(Some(event.data())),
                            onfocus: move |_event| dispatch(FieldInput::Focus),
                            oninput: move |event| dispatch(FieldInput::Edit(event.value())),
                            onblur: move |_event| dispatch(FieldInput::Commit),
                            onkeydown: move |event| match key_action(&event.key()) {
                                Some(KeyAction::Step(delta)) => {
                                    event.prevent_default();
                                    dispatch(FieldInput::Step(delta));
                                }
                                Some(KeyAction::Blur) => match input_element() {
                                    Some(element) => {
                                        spawn(async move {
                                            if let Err(err) = element.set_focus(false).await {
                                                warn!("Could not blur number input! {err:?}");
                                            }
                                        });
                                    }
                                    None => dispatch(FieldInput::Commit),
                                },
                                None => {}
                            },
                        }
                    }
                    AngleButton {
                        direction: second,
                        size,
                        handle_click: move |delta| dispatch(FieldInput::Step(delta)),
                    }
                }
                div { class: "is-flex is-align-items-center",
                    {separator.map(|separator| rsx!(
                        div { class: "px-0", "{separator}" }
                    ))}
                }
            }
        }
    )
}

#[cfg(test)]
pub mod tests {
    use dioxus::prelude::*;

    use super::{key_action, KeyAction, NumberInput};

    #[test]
    fn enter_only_blurs() {
        assert_eq!(key_action(&Key::Enter), Some(KeyAction::Blur));
        assert_eq!(key_action(&Key::ArrowUp), Some(KeyAction::Step(1)));
        assert_eq!(key_action(&Key::ArrowDown), Some(KeyAction::Step(-1)));
        assert_eq!(key_action(&Key::Tab), None);
    }

    fn hour_field() -> Element {
        rsx! {
            NumberInput { min: 0, max: 23, init_value: Some(7), separator: ":".to_string() }
        }
    }

    fn out_of_range_hour_field() -> Element {
        rsx! {
            NumberInput { min: 0, max: 23, init_value: Some(25) }
        }
    }

    #[test]
    fn renders_formatted_initial_value() {
        let mut dom = VirtualDom::new(hour_field);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("07"), "{html}");
        assert!(html.contains(">:<"), "{html}");
        assert!(html.contains("angle-button"), "{html}");
    }

    #[test]
    fn out_of_range_initial_value_renders_min() {
        let mut dom = VirtualDom::new(out_of_range_hour_field);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("value=\"00\""), "{html}");
    }
}
