use yew::prelude::*;

use crate::util::format_fade_duration;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub fade_duration_ms: u32,
    pub show_contact_marker: bool,
    pub on_clear: Callback<()>,
    pub on_toggle_marker: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let marker_cb = {
        let cb = props.on_toggle_marker.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let marker_label = if props.show_contact_marker {
        "Hide Contact Marker"
    } else {
        "Show Contact Marker"
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={clear_cb}>{"Clear"}</button>
        <button onclick={marker_cb}>{ marker_label }</button>
        <div style="font-size:11px; opacity:0.7;">{ format!("Traces fade over {}", format_fade_duration(props.fade_duration_ms)) }</div>
        <div style="font-size:11px; opacity:0.7;">{"Hotkey: 'R' clears the canvas"}</div>
    </div>}
}
