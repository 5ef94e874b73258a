//! Core data model for the gesture playground.
//! Pure types only; everything here is testable on the host target.

use serde::{Deserialize, Serialize};

/// Default total fade duration applied to a finished trace.
pub const DEFAULT_FADE_DURATION_MS: u32 = 3000;

/// A surface-local position in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One drawn line of a trace. Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeSegment {
    pub from: Point,
    pub to: Point,
    /// Wall-clock milliseconds at record time.
    pub recorded_at_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    pub fn label(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
        }
    }
}

/// Gesture kind tag as delivered by the recognizer. Multi-point kinds carry
/// the derived values the recognizer computed for them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GestureKind {
    Tap,
    DoubleTap,
    Press,
    Swipe { direction: Option<SwipeDirection> },
    Pinch { scale: f64 },
    Rotate { delta_deg: f64 },
}

/// Disc radius/fill used when drawing feedback for a gesture kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeedbackStyle {
    pub radius: f64,
    pub color: &'static str,
}

impl GestureKind {
    pub fn label(&self) -> &'static str {
        match self {
            GestureKind::Tap => "tap",
            GestureKind::DoubleTap => "doubletap",
            GestureKind::Press => "press",
            GestureKind::Swipe { .. } => "swipe",
            GestureKind::Pinch { .. } => "pinch",
            GestureKind::Rotate { .. } => "rotate",
        }
    }

    /// Human-readable description for the notification hook and output panel.
    pub fn describe(&self) -> String {
        match self {
            GestureKind::Tap => "Tap detected".into(),
            GestureKind::DoubleTap => "Double tap detected".into(),
            GestureKind::Press => "Press and hold detected".into(),
            GestureKind::Swipe { direction: Some(d) } => format!("Swipe {} detected", d.label()),
            GestureKind::Swipe { direction: None } => "Swipe detected".into(),
            GestureKind::Pinch { scale } => {
                if *scale > 1.0 {
                    "Pinch out (zoom in) detected".into()
                } else {
                    "Pinch in (zoom out) detected".into()
                }
            }
            GestureKind::Rotate { .. } => "Rotation detected".into(),
        }
    }

    pub fn feedback_style(&self) -> FeedbackStyle {
        match self {
            GestureKind::Tap => FeedbackStyle { radius: 30.0, color: "rgba(52, 199, 89, 0.5)" },
            GestureKind::DoubleTap => FeedbackStyle { radius: 40.0, color: "rgba(255, 149, 0, 0.5)" },
            GestureKind::Press => FeedbackStyle { radius: 50.0, color: "rgba(255, 59, 48, 0.5)" },
            GestureKind::Swipe { .. } => FeedbackStyle { radius: 10.0, color: "rgba(88, 86, 214, 0.5)" },
            GestureKind::Pinch { .. } => FeedbackStyle { radius: 15.0, color: "rgba(175, 82, 222, 0.5)" },
            GestureKind::Rotate { .. } => FeedbackStyle { radius: 15.0, color: "rgba(255, 45, 85, 0.5)" },
        }
    }
}

/// One recognized gesture with its contact points in surface-local CSS
/// pixels. Produced by the external recognizer and pushed into the canvas
/// view's sink.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub points: Vec<Point>,
}

/// User-tweakable options, persisted to localStorage by the shell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub fade_duration_ms: u32,
    pub show_contact_marker: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fade_duration_ms: DEFAULT_FADE_DURATION_MS,
            show_contact_marker: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_matches_demo_messages() {
        assert_eq!(GestureKind::Tap.describe(), "Tap detected");
        assert_eq!(GestureKind::Press.describe(), "Press and hold detected");
        assert_eq!(
            GestureKind::Swipe { direction: Some(SwipeDirection::Left) }.describe(),
            "Swipe left detected"
        );
        assert_eq!(
            GestureKind::Swipe { direction: None }.describe(),
            "Swipe detected"
        );
    }

    #[test]
    fn pinch_description_follows_scale() {
        assert_eq!(
            GestureKind::Pinch { scale: 1.4 }.describe(),
            "Pinch out (zoom in) detected"
        );
        assert_eq!(
            GestureKind::Pinch { scale: 0.6 }.describe(),
            "Pinch in (zoom out) detected"
        );
    }

    #[test]
    fn feedback_discs_grow_with_gesture_weight() {
        let tap = GestureKind::Tap.feedback_style().radius;
        let double = GestureKind::DoubleTap.feedback_style().radius;
        let press = GestureKind::Press.feedback_style().radius;
        assert!(tap < double && double < press);
    }
}
