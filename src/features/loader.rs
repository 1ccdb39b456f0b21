use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Loading indicator for a UI. Nothing sets it automatically; callers flip it
/// around their own async work.
///
/// The flag reads true while the manual switch is on or while any
/// [`LoadingGuard`] is alive.
#[derive(Debug, Default)]
pub struct LoadingFlag {
    manual: AtomicBool,
    active: AtomicUsize,
}

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.manual.load(Ordering::SeqCst) || self.active.load(Ordering::SeqCst) > 0
    }

    pub fn loading_state_on(&self) {
        self.manual.store(true, Ordering::SeqCst);
    }

    /// Clears the manual switch. Guards still alive keep the flag on.
    pub fn loading_state_off(&self) {
        self.manual.store(false, Ordering::SeqCst);
    }

    /// Keeps the flag on until the returned guard is dropped.
    pub fn track(&self) -> LoadingGuard<'_> {
        self.active.fetch_add(1, Ordering::SeqCst);
        LoadingGuard { flag: self }
    }
}

#[must_use = "the tracked scope ends as soon as the guard is dropped"]
pub struct LoadingGuard<'a> {
    flag: &'a LoadingFlag,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.active.fetch_sub(1, Ordering::SeqCst);
    }
}
