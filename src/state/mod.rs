pub mod pointer;
pub mod trace;

pub use pointer::PointerState;
pub use trace::{FADE_STEPS, FadeTick, TracePhase, TraceState};
