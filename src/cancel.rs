use std::{
    sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
    time::Duration,
};


/// a cancellation token, shared between the monitor and whatever may stop it.
///
/// cloning a token yields a handle to the same cancellation.
#[derive(Clone, Debug, Default)]
pub struct Cancel {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// whether cancellation has been requested.
    done: Mutex<bool>,
    /// woken when `done` is set.
    cvar: Condvar,
}

// === impl Cancel ===

impl Cancel {
    pub fn new() -> Self {
        Self::default()
    }

    /// requests cancellation, waking anything blocked in [`Cancel::wait()`].
    pub fn cancel(&self) {
        let Inner { done, cvar } = &*self.inner;
        *Self::lock(done) = true;
        cvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *Self::lock(&self.inner.done)
    }

    /// blocks until cancellation is requested or the timeout elapses.
    ///
    /// returns `true` if cancellation was requested.
    pub fn wait(&self, timeout: Duration) -> bool {
        let Inner { done, cvar } = &*self.inner;
        let (done, _) = cvar
            .wait_timeout_while(Self::lock(done), timeout, |done| !*done)
            .unwrap_or_else(PoisonError::into_inner);
        *done
    }

    /// a flag cannot be left half-written, so a poisoned lock is still usable.
    fn lock(done: &Mutex<bool>) -> MutexGuard<'_, bool> {
        done.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
