use yew::prelude::*;

use super::gesture_area::GestureArea;
use crate::model::{GestureEvent, GestureKind, Settings};

const SETTINGS_KEY: &str = "gp_settings";

#[function_component(App)]
pub fn app() -> Html {
    // Load persisted settings
    let settings = use_state(|| {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                    if let Ok(s) = serde_json::from_str(&raw) {
                        return s;
                    }
                }
            }
        }
        Settings::default()
    });

    // Persist settings changes
    {
        use_effect_with((*settings).clone(), move |current: &Settings| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(raw) = serde_json::to_string(current) {
                        let _ = store.set_item(SETTINGS_KEY, &raw);
                    }
                }
            }
            || ()
        });
    }

    // Entry point for the external gesture recognizer: the canvas view hands
    // its event sink up on mount, and whoever owns the recognizer pushes
    // completed gestures into it.
    let gesture_sink = use_mut_ref(|| None::<Callback<GestureEvent>>);
    let on_sink_ready = {
        let gesture_sink = gesture_sink.clone();
        Callback::from(move |sink: Callback<GestureEvent>| {
            *gesture_sink.borrow_mut() = Some(sink);
        })
    };

    // Notification hook: once per completed gesture.
    let on_gesture = Callback::from(move |(kind, message): (GestureKind, String)| {
        log::info!("gesture {}: {}", kind.label(), message);
    });

    let on_toggle_marker = {
        let settings = settings.clone();
        Callback::from(move |_| {
            let mut s = (*settings).clone();
            s.show_contact_marker = !s.show_contact_marker;
            settings.set(s);
        })
    };

    html! {
        <GestureArea
            settings={(*settings).clone()}
            on_sink_ready={on_sink_ready}
            on_gesture={on_gesture}
            on_toggle_marker={on_toggle_marker}
        />
    }
}
