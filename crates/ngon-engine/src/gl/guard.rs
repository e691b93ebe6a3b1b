use std::fmt::Debug;

use super::{check, GlApi, GlError};

/// Owns a GL object until it is either released to a long-lived owner or
/// deleted.
///
/// Explicit deletion goes through [`Transient::delete`], which error-checks the
/// call. An object still armed on drop (an early `?` return) is deleted
/// unchecked; a driver error at that point is only logged.
pub(crate) struct Transient<'g, G: GlApi, T: Copy + Debug> {
    gl: &'g G,
    raw: T,
    armed: bool,
    delete: fn(&G, T),
}

impl<'g, G: GlApi, T: Copy + Debug> Transient<'g, G, T> {
    pub(crate) fn new(gl: &'g G, raw: T, delete: fn(&G, T)) -> Self {
        Self { gl, raw, armed: true, delete }
    }

    /// Returns the handle without giving up ownership.
    #[inline]
    pub(crate) fn raw(&self) -> T {
        self.raw
    }

    /// Hands the object to a long-lived owner; it will not be deleted here.
    pub(crate) fn release(mut self) -> T {
        self.armed = false;
        self.raw
    }

    /// Deletes the object now and checks the driver error state.
    pub(crate) fn delete(mut self, call: &'static str) -> Result<(), GlError> {
        self.armed = false;
        (self.delete)(self.gl, self.raw);
        check(self.gl, call)
    }
}

impl<G: GlApi, T: Copy + Debug> Drop for Transient<'_, G, T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        (self.delete)(self.gl, self.raw);
        let code = self.gl.get_error();
        if code != 0 {
            log::warn!("deleting GL object {:?} during cleanup reported {code:#06x}", self.raw);
        }
    }
}
