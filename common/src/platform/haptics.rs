use crate::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseStyle {
    /// Tap on a grid cell or digit key.
    Light,
    Success,
    Error,
}

pub trait HapticPulse: Send + Sync {
    fn pulse(&self, style: PulseStyle);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullHaptics;

impl HapticPulse for NullHaptics {
    fn pulse(&self, style: PulseStyle) {
        log!("Haptic pulse {:?} (no device)", style);
    }
}

/// A pulse device gated by the player's haptics preference.
pub struct Haptics<H: HapticPulse> {
    device: H,
    enabled: bool,
}

impl<H: HapticPulse> Haptics<H> {
    pub fn new(device: H, enabled: bool) -> Self {
        Self { device, enabled }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn pulse(&self, style: PulseStyle) {
        if self.enabled {
            self.device.pulse(style);
        }
    }
}
