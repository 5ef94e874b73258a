use yew::prelude::*;

use crate::model::GestureKind;

#[derive(Properties, PartialEq, Clone)]
pub struct OutputPanelProps {
    /// Most recent completed gesture, if any.
    pub feedback: Option<(GestureKind, String)>,
}

#[function_component]
pub fn OutputPanel(props: &OutputPanelProps) -> Html {
    let body = match &props.feedback {
        Some((kind, message)) => html! {
            <>
                <div style="font-weight:600; text-transform:capitalize;">{ kind.label() }</div>
                <div>{ message.clone() }</div>
            </>
        },
        None => html! {
            <div style="opacity:0.7;">{"Perform a gesture to see feedback here"}</div>
        },
    };
    html! {<div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:4px; font-size:14px;">
        { body }
    </div>}
}
