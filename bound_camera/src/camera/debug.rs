/// Debug visualization settings.
///
/// Passed explicitly to whatever draws debug overlays; there is no global
/// switch.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugSettings {
    /// Produce the outline of each camera's tight area
    pub camera_limits: bool,
}
