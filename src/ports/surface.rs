//! Interactive surface probe port.

/// Capability to tell whether a foreground interactive surface exists.
///
/// The system-owned biometric prompt needs a foreground context to attach to;
/// without one, ceremonies fail before any hardware is engaged.
pub trait SurfaceProbe: Send + Sync {
    fn has_foreground_surface(&self) -> bool;
}
