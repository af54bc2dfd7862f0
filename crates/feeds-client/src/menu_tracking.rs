//! Whether the status item's menu is being tracked right now.

use feeds_client_core::MenuTracking;

/// [`MenuTracking`] answered from the main thread's run loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformMenuTracking;

#[cfg(target_os = "macos")]
impl MenuTracking for PlatformMenuTracking {
    fn is_tracking(&self) -> Option<bool> {
        use objc2_foundation::NSRunLoop;

        // AppKit runs menu tracking in this run loop mode.
        const EVENT_TRACKING_MODE: &str = "NSEventTrackingRunLoopMode";

        #[allow(unused_unsafe)]
        let mode = unsafe { NSRunLoop::currentRunLoop().currentMode() };
        mode.map(|mode| mode.to_string() == EVENT_TRACKING_MODE)
    }
}

#[cfg(not(target_os = "macos"))]
impl MenuTracking for PlatformMenuTracking {
    fn is_tracking(&self) -> Option<bool> {
        None
    }
}
