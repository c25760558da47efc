//! Viewport helpers for the responsive sidebar behavior.

/// Breakpoint below which the sidebar behaves as a full-screen drawer.
const NARROW_BREAKPOINT: f64 = 768.0;

/// True when the window is narrower than the drawer breakpoint.
pub fn is_narrow() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| width < NARROW_BREAKPOINT)
        .unwrap_or(false)
}
