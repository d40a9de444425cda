//! Serialises redraws: the click trigger is detached for as long as a redraw runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawState {
    Idle,
    Drawing,
}

/// Click-to-redraw trigger. Clones share the same attachment flag, so a handle
/// can be given to whatever delivers clicks.
#[derive(Debug, Clone)]
pub struct ClickBinding {
    attached: Arc<AtomicBool>,
}

impl Default for ClickBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickBinding {
    pub fn new() -> Self {
        Self {
            attached: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    pub fn state(&self) -> RedrawState {
        if self.is_attached() {
            RedrawState::Idle
        } else {
            RedrawState::Drawing
        }
    }

    /// Detach the trigger and enter `Drawing`. Returns `None` while another
    /// guard is alive.
    pub fn try_acquire(&self) -> Option<InteractionGuard> {
        self.attached
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InteractionGuard {
                attached: Arc::clone(&self.attached),
            })
    }
}

/// Reattaches the click trigger when dropped, whichever way the redraw ended.
#[derive(Debug)]
pub struct InteractionGuard {
    attached: Arc<AtomicBool>,
}

impl Drop for InteractionGuard {
    fn drop(&mut self) {
        self.attached.store(true, Ordering::Release);
    }
}
