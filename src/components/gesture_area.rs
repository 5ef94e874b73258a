use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, TouchEvent};
use yew::prelude::*;

use super::{controls_panel::ControlsPanel, output_panel::OutputPanel};
use crate::model::{GestureEvent, GestureKind, Point, Settings};
use crate::painter;
use crate::state::{FADE_STEPS, FadeTick, PointerState, TraceState};
use crate::timer::{Interval, Timeout};
use crate::util::now_ms;

/// Pointer input stays suppressed this long after recognizer feedback.
const SUPPRESS_MS: u32 = 300;

/// Surface extent in CSS pixels; the backing store is this times the device
/// pixel ratio.
#[derive(Clone, Copy, Debug, Default)]
struct SurfaceSize {
    css_width: f64,
    css_height: f64,
}

#[derive(Properties, PartialEq, Clone)]
pub struct GestureAreaProps {
    pub settings: Settings,
    /// Receives the gesture sink once the canvas is mounted. The external
    /// recognizer pushes completed gestures into it.
    pub on_sink_ready: Callback<Callback<GestureEvent>>,
    /// Invoked once per completed gesture with kind + description.
    pub on_gesture: Callback<(GestureKind, String)>,
    pub on_toggle_marker: Callback<()>,
}

#[function_component(GestureArea)]
pub fn gesture_area(props: &GestureAreaProps) -> Html {
    let canvas_ref = use_node_ref();
    let trace = use_mut_ref(TraceState::default);
    let pointer = use_mut_ref(PointerState::default);
    let surface = use_mut_ref(SurfaceSize::default);
    let fade_timer = use_mut_ref(|| None::<Interval>);
    let suppress_timer = use_mut_ref(|| None::<Timeout>);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let last_feedback = use_state(|| None::<(GestureKind, String)>);
    // Mirror settings into plain cells so event closures read current values.
    let fade_duration_flag = use_mut_ref(|| props.settings.fade_duration_ms);
    let show_marker_flag = use_mut_ref(|| props.settings.show_contact_marker);

    // Effect: settings prop changed -> refresh mirrors, redraw
    {
        let fade_duration_flag = fade_duration_flag.clone();
        let show_marker_flag = show_marker_flag.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with(props.settings.clone(), move |s| {
            *fade_duration_flag.borrow_mut() = s.fade_duration_ms;
            *show_marker_flag.borrow_mut() = s.show_contact_marker;
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }

    // Full reset: cancel any fade, clear history and surface, back to idle.
    // Shared by the Clear button and the 'R' hotkey.
    let reset_all: Rc<dyn Fn()> = {
        let trace = trace.clone();
        let pointer = pointer.clone();
        let fade_timer = fade_timer.clone();
        let draw_ref = draw_ref.clone();
        let last_feedback = last_feedback.clone();
        Rc::new(move || {
            *fade_timer.borrow_mut() = None;
            trace.borrow_mut().reset();
            let mut p = pointer.borrow_mut();
            p.drawing = false;
            p.contacts = 0;
            drop(p);
            last_feedback.set(None);
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
        })
    };

    // Main mount effect (sizing, draw closure, listeners, gesture sink)
    {
        let canvas_ref = canvas_ref.clone();
        let trace_setup = trace.clone();
        let pointer_setup = pointer.clone();
        let surface_setup = surface.clone();
        let fade_timer_setup = fade_timer.clone();
        let suppress_timer_setup = suppress_timer.clone();
        let draw_ref_setup = draw_ref.clone();
        let feedback_handle = last_feedback.clone();
        let fade_duration_setup = fade_duration_flag.clone();
        let show_marker_setup = show_marker_flag.clone();
        let reset_all_setup = reset_all.clone();
        let on_sink_ready = props.on_sink_ready.clone();
        let on_gesture = props.on_gesture.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");

            // HiDPI sizing: backing store scaled by devicePixelRatio, the
            // context transform keeps drawing coordinates in CSS pixels.
            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                let surface = surface_setup.clone();
                move || {
                    let scale = window.device_pixel_ratio().max(1.0);
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width((width * scale).max(0.0) as u32);
                    canvas.set_height((height * scale).max(0.0) as u32);
                    if let Some(ctx) = context_2d(&canvas) {
                        ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0).ok();
                    }
                    *surface.borrow_mut() = SurfaceSize {
                        css_width: width,
                        css_height: height,
                    };
                }
            };
            compute_and_apply_canvas_size();

            // Draw closure: clear + replay the trace at its opacity, then
            // the contact marker while a pointer is down.
            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let trace = trace_setup.clone();
                let pointer = pointer_setup.clone();
                let surface = surface_setup.clone();
                let show_marker_flag = show_marker_setup.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = context_2d(&canvas) else { return };
                    let size = *surface.borrow();
                    let tr = trace.borrow();
                    painter::redraw_trace(
                        &ctx,
                        tr.segments(),
                        tr.opacity(),
                        size.css_width,
                        size.css_height,
                    );
                    drop(tr);
                    let p = pointer.borrow();
                    if p.drawing && *show_marker_flag.borrow() {
                        painter::draw_contact_marker(
                            &ctx,
                            Point {
                                x: p.last_x,
                                y: p.last_y,
                            },
                            p.contact_radius(),
                        );
                    }
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            (draw_closure)();

            // Trace lifecycle, shared by mouse and touch handlers.
            let begin_stroke: Rc<dyn Fn(f64, f64, u32)> = {
                let trace = trace_setup.clone();
                let pointer = pointer_setup.clone();
                let fade_timer = fade_timer_setup.clone();
                let draw_ref = draw_ref_setup.clone();
                Rc::new(move |x, y, contacts| {
                    let mut p = pointer.borrow_mut();
                    if p.suppressed {
                        return;
                    }
                    p.drawing = true;
                    p.contacts = contacts;
                    p.last_x = x;
                    p.last_y = y;
                    drop(p);
                    // Cancel any in-flight fade before the new trace starts.
                    *fade_timer.borrow_mut() = None;
                    trace.borrow_mut().begin(Point { x, y });
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                })
            };
            let move_stroke: Rc<dyn Fn(f64, f64)> = {
                let trace = trace_setup.clone();
                let pointer = pointer_setup.clone();
                let draw_ref = draw_ref_setup.clone();
                Rc::new(move |x, y| {
                    let mut p = pointer.borrow_mut();
                    if !p.drawing || p.suppressed {
                        return;
                    }
                    let from = Point {
                        x: p.last_x,
                        y: p.last_y,
                    };
                    p.last_x = x;
                    p.last_y = y;
                    drop(p);
                    let recorded = trace
                        .borrow_mut()
                        .extend(from, Point { x, y }, now_ms())
                        .is_some();
                    if recorded {
                        if let Some(f) = &*draw_ref.borrow() {
                            f();
                        }
                    }
                })
            };
            let end_stroke: Rc<dyn Fn()> = {
                let trace = trace_setup.clone();
                let pointer = pointer_setup.clone();
                let fade_timer = fade_timer_setup.clone();
                let fade_duration = fade_duration_setup.clone();
                let draw_ref = draw_ref_setup.clone();
                Rc::new(move || {
                    let mut p = pointer.borrow_mut();
                    if !p.drawing {
                        return;
                    }
                    p.drawing = false;
                    p.contacts = 0;
                    drop(p);
                    let fade = trace.borrow_mut().end();
                    if !fade {
                        return;
                    }
                    // Drop the contact marker right away.
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                    let period = (*fade_duration.borrow() / FADE_STEPS).max(1);
                    let tick = {
                        let trace = trace.clone();
                        let draw_ref = draw_ref.clone();
                        let fade_timer = fade_timer.clone();
                        move || {
                            let outcome = trace.borrow_mut().fade_tick();
                            match outcome {
                                FadeTick::Faded(_) | FadeTick::Done => {
                                    if let Some(f) = &*draw_ref.borrow() {
                                        f();
                                    }
                                }
                                FadeTick::Ignored => {}
                            }
                            if outcome == FadeTick::Done {
                                // Stop the browser timer; the handle itself
                                // is dropped when the cell is next replaced.
                                if let Some(h) = &*fade_timer.borrow() {
                                    h.stop();
                                }
                            }
                        }
                    };
                    *fade_timer.borrow_mut() = Interval::start(period, tick);
                })
            };

            // Mouse events
            let mousedown_cb = {
                let begin_stroke = begin_stroke.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() == 0 {
                        begin_stroke(e.offset_x() as f64, e.offset_y() as f64, 1);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                )
                .unwrap();
            let mousemove_cb = {
                let move_stroke = move_stroke.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    move_stroke(e.offset_x() as f64, e.offset_y() as f64);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .unwrap();
            let mouseup_cb = {
                let end_stroke = end_stroke.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    end_stroke();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();
            let mouseleave_cb = {
                let end_stroke = end_stroke.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    end_stroke();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Touch events. Coordinates are mapped to surface-local CSS
            // pixels via the bounding rect.
            let touch_start_cb = {
                let canvas_tc = canvas.clone();
                let begin_stroke = begin_stroke.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().item(0) {
                        let rect = canvas_tc.get_bounding_client_rect();
                        let cx = t0.client_x() as f64 - rect.left();
                        let cy = t0.client_y() as f64 - rect.top();
                        begin_stroke(cx, cy, e.touches().length());
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let touch_move_cb = {
                let canvas_tc = canvas.clone();
                let move_stroke = move_stroke.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().item(0) {
                        let rect = canvas_tc.get_bounding_client_rect();
                        let cx = t0.client_x() as f64 - rect.left();
                        let cy = t0.client_y() as f64 - rect.top();
                        move_stroke(cx, cy);
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let touch_end_cb = {
                let end_stroke = end_stroke.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    end_stroke();
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            canvas
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Keyboard: 'R' resets canvas and history.
            let keydown_cb = {
                let reset_all = reset_all_setup.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key().eq_ignore_ascii_case("r") {
                        e.prevent_default();
                        reset_all();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .ok();

            // Resize
            let resize_cb = {
                let compute_and_apply_canvas_size = compute_and_apply_canvas_size.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    compute_and_apply_canvas_size();
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            // Ingestion seam for the external recognizer: completed gestures
            // arrive here with their contact points already surface-local.
            let sink = {
                let canvas_sk = canvas.clone();
                let pointer_sk = pointer_setup.clone();
                let suppress_timer = suppress_timer_setup.clone();
                let feedback_handle = feedback_handle.clone();
                let on_gesture = on_gesture.clone();
                Callback::from(move |event: GestureEvent| {
                    // Feedback sits on top of the current trace; the next
                    // full redraw wipes it.
                    if let Some(ctx) = context_2d(&canvas_sk) {
                        painter::draw_feedback(&ctx, &event);
                    }
                    pointer_sk.borrow_mut().suppressed = true;
                    {
                        let pointer = pointer_sk.clone();
                        *suppress_timer.borrow_mut() = Timeout::start(SUPPRESS_MS, move || {
                            pointer.borrow_mut().suppressed = false;
                        });
                    }
                    let message = event.kind.describe();
                    feedback_handle.set(Some((event.kind, message.clone())));
                    on_gesture.emit((event.kind, message));
                })
            };
            on_sink_ready.emit(sink);

            // Cleanup for all listeners & timers
            let window_clone = window.clone();
            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                *fade_timer_setup.borrow_mut() = None;
                *suppress_timer_setup.borrow_mut() = None;
                let _keep_alive = (
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseleave_cb,
                    &mouseup_cb,
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                    &keydown_cb,
                    &resize_cb,
                );
            }
        });
    }

    let on_clear = {
        let reset_all = reset_all.clone();
        Callback::from(move |_| reset_all())
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden; touch-action:none;">
            <canvas ref={canvas_ref.clone()} id="gesture-canvas" style="display:block; width:100%; height:100%;"></canvas>
            <OutputPanel feedback={(*last_feedback).clone()} />
            <ControlsPanel
                fade_duration_ms={props.settings.fade_duration_ms}
                show_contact_marker={props.settings.show_contact_marker}
                on_clear={on_clear}
                on_toggle_marker={props.on_toggle_marker.clone()}
            />
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
}
