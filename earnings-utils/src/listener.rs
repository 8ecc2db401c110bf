//! Attach/detach pairing for event listeners.
//!
//! A [`ScopedListener`] owns at most one live registration on its
//! [`ListenerHost`]. Switching it inactive, or dropping it, detaches that
//! registration exactly once.

/// Something that can register and unregister a single listener.
pub trait ListenerHost {
    /// Token returned by `attach` and handed back to `detach`.
    type Handle;

    fn attach(&mut self) -> Self::Handle;
    fn detach(&mut self, handle: Self::Handle);
}

/// Keeps a listener registered only while it is active.
pub struct ScopedListener<H: ListenerHost> {
    host: H,
    handle: Option<H::Handle>,
}

impl<H: ListenerHost> ScopedListener<H> {
    pub fn new(host: H) -> Self {
        Self { host, handle: None }
    }

    /// Attach when becoming active, detach when becoming inactive.
    /// Repeating the current state is a no-op.
    pub fn set_active(&mut self, active: bool) {
        if active {
            if self.handle.is_none() {
                self.handle = Some(self.host.attach());
            }
        } else {
            self.release();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Detach the live registration, if any.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.detach(handle);
        }
    }
}

impl<H: ListenerHost> Drop for ScopedListener<H> {
    fn drop(&mut self) {
        self.release();
    }
}
