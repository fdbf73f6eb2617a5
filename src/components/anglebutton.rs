use dioxus::{
    html::{input_data::MouseButton, point_interaction::PointerInteraction},
    logger::tracing::debug,
    prelude::*,
};
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdChevronLeft, LdChevronRight, LdChevronUp};
use dioxus_free_icons::Icon;
use gloo_timers::future::TimeoutFuture;

use crate::components::use_window_release;
use crate::spinner::{
    direction::{ButtonSize, Direction},
    hold::{HoldMachine, RepeatTiming},
};

fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[component]
fn Chevron(direction: Direction, size: ButtonSize) -> Element {
    let px = size.icon_px();
    match direction {
        Direction::Left => rsx!(Icon {
            class: "chevron",
            width: px,
            height: px,
            icon: LdChevronLeft,
        }),
        Direction::Up => rsx!(Icon {
            class: "chevron",
            width: px,
            height: px,
            icon: LdChevronUp,
        }),
        Direction::Right => rsx!(Icon {
            class: "chevron",
            width: px,
            height: px,
            icon: LdChevronRight,
        }),
        Direction::Down => rsx!(Icon {
            class: "chevron",
            width: px,
            height: px,
            icon: LdChevronDown,
        }),
    }
}

/// Chevron button that reports its step once per press and keeps
/// repeating it while held.
#[component]
pub fn AngleButton(
    direction: Direction,
    #[props(default)] size: ButtonSize,
    #[props(default)] timing: RepeatTiming,
    handle_click: EventHandler<i32>,
) -> Element {
    let step = direction.step();
    let mut machine = use_signal(|| HoldMachine::new(timing));
    let mut hold_task: Signal<Option<Task>> = use_signal(|| None);

    let mut release = move || {
        // Window releases reach every button; idle ones must not re-render.
        if !machine.peek().is_held() {
            return;
        }
        machine.write().cancel();
        debug!("Released {direction:?} angle");
        if let Some(task) = hold_task.write().take() {
            task.cancel();
        }
    };

    use_effect(use_reactive!(|timing| {
        if machine.peek().timing() != timing {
            debug!("Retiming {direction:?} angle to {timing:?}");
            release();
            machine.write().retime(timing);
        }
    }));

    let mut press = move || {
        release();
        let ticket = machine.write().press();
        debug!("Pressed {direction:?} angle");
        handle_click.call(step);

        let task = spawn(async move {
            let mut ticket = ticket;
            loop {
                TimeoutFuture::new(ticket.delay_ms()).await;
                let next = machine.write().fire(ticket);
                match next {
                    Some(next) => {
                        handle_click.call(step);
                        ticket = next;
                    }
                    None => break,
                }
            }
        });
        hold_task.set(Some(task));
    };

    use_window_release(release);

    // Tasks spawned here die with the scope; this also resets the machine.
    use_drop(move || {
        if let Ok(mut machine) = machine.try_write() {
            machine.cancel();
        }
        if let Ok(mut hold_task) = hold_task.try_write() {
            if let Some(task) = hold_task.take() {
                task.cancel();
            }
        }
    });

    let orientation = match direction.is_horizontal() {
        true => "horizontal px-2",
        false => "vertical",
    };
    let held = match machine.read().is_held() {
        true => "is-held",
        false => "",
    };

    rsx!(
        button {
            class: "angle-button is-unselectable {orientation} {held}",
            r#type: "button",
            onpointerdown: move |event| {
                if event.trigger_button() == Some(MouseButton::Primary) {
                    press();
                }
            },
            onpointerup: move |_event| release(),
            onpointerleave: move |_event| release(),
            onpointercancel: move |_event| release(),
            onblur: move |_event| release(),
            onkeydown: move |event| {
                if is_activation_key(&event.key()) && !event.is_auto_repeating() {
                    event.prevent_default();
                    press();
                }
            },
            onkeyup: move |event| {
                if is_activation_key(&event.key()) {
                    release();
                }
            },
            oncontextmenu: move |event| event.prevent_default(),
            Chevron { direction, size }
        }
    )
}

#[cfg(test)]
pub mod tests {
    use dioxus::prelude::Key;

    use super::is_activation_key;

    #[test]
    fn activation_keys() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string())));
        assert!(!is_activation_key(&Key::Character("a".to_string())));
        assert!(!is_activation_key(&Key::Escape));
    }
}
