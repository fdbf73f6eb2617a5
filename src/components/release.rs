use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::{
    logger::tracing::{debug, warn},
    prelude::*,
};

const RELEASE_EVENTS: &str = r#"["pointerup", "pointercancel", "blur"]"#;

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(0);

fn subscribe_script(id: u64) -> String {
    format!(
        r#"
        const handler = (event) => dioxus.send(event.type);
        window.__angleReleaseListeners = window.__angleReleaseListeners || {{}};
        window.__angleReleaseListeners[{id}] = handler;
        for (const kind of {RELEASE_EVENTS}) {{
            window.addEventListener(kind, handler);
        }}
        await new Promise(() => {{}});
        "#
    )
}

fn unsubscribe_script(id: u64) -> String {
    format!(
        r#"
        const listeners = window.__angleReleaseListeners || {{}};
        const handler = listeners[{id}];
        if (handler) {{
            for (const kind of {RELEASE_EVENTS}) {{
                window.removeEventListener(kind, handler);
            }}
            delete listeners[{id}];
        }}
        "#
    )
}

async fn listen(id: u64, mut on_release: impl FnMut()) {
    let mut subscription = document::eval(&subscribe_script(id));
    loop {
        match subscription.recv::<String>().await {
            Ok(kind) => {
                debug!("Window {kind} on release listener {id}");
                on_release();
            }
            Err(err) => {
                warn!("Release listener {id} stopped! {err}");
                break;
            }
        }
    }
}

/// Calls `on_release` whenever a pointer is released anywhere in the
/// window, or the window loses focus.
///
/// The subscription belongs to the calling component: it is created on
/// mount and removed from the window when the component is dropped.
pub fn use_window_release(on_release: impl FnMut() + 'static) {
    let id = use_hook(|| NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed));
    use_hook(move || spawn(listen(id, on_release)));
    use_drop(move || {
        debug!("Dropping release listener {id}");
        let _unsubscribe = document::eval(&unsubscribe_script(id));
    });
}
