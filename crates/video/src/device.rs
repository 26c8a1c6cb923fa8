use base::Vec2;

/// A camera found by `enumerate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub index: usize,
    pub size: Vec2<usize>,
    pub name: Option<String>,
}

impl DeviceInfo {
    /// One-line description for selection lists, e.g. `[0] HD Webcam — 640x480`.
    pub fn label(&self) -> String {
        let name = match &self.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => format!("Camera #{}", self.index),
        };
        format!("[{}] {} — {}", self.index, name, self.size)
    }
}

/// Probe camera indices `0..max_devices` and describe every capture device.
///
/// Indices that cannot be opened, or that are not video capture nodes, are
/// skipped.
pub fn enumerate(max_devices: usize) -> Vec<DeviceInfo> {
    #[cfg(feature = "v4l2")]
    {
        (0..max_devices).filter_map(crate::v4l2::probe).collect()
    }
    #[cfg(not(feature = "v4l2"))]
    {
        let _ = max_devices;
        Vec::new()
    }
}
