// Transient pointer-contact state for the gesture canvas.
#[derive(Default, Debug, Clone)]
pub struct PointerState {
    /// A primary-button or touch contact is currently drawing.
    pub drawing: bool,
    /// Recognizer feedback is on screen; pointer input is ignored until the
    /// suppression window elapses.
    pub suppressed: bool,
    pub last_x: f64,
    pub last_y: f64,
    /// Active contact points (1 for mouse).
    pub contacts: u32,
}

impl PointerState {
    /// Marker disc radius grows with the number of active contacts.
    pub fn contact_radius(&self) -> f64 {
        f64::from(self.contacts.max(1)) * 10.0
    }
}
