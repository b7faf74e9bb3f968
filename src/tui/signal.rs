//! # Resize Signal
//!
//! Hand-off between the resize listener and the event loop. The listener
//! thread only ever stores `true`; the loop swaps it back to `false` once per
//! iteration and recomputes the pane layout when it was set. Nothing else is
//! shared between the two threads.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone)]
pub struct ResizeFlag {
    dirty: Arc<AtomicBool>,
}

impl Default for ResizeFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeFlag {
    /// Starts dirty so the first iteration lays out the panes.
    pub fn new() -> Self {
        Self {
            dirty: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn mark(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Returns whether a resize happened since the last call, and resets it.
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }
}

#[cfg(unix)]
mod listener {
    use std::io;
    use std::thread::JoinHandle;

    use log::debug;
    use signal_hook::consts::signal::SIGWINCH;
    use signal_hook::iterator::{Handle, Signals};

    use super::ResizeFlag;

    /// Background thread marking the flag on every SIGWINCH.
    /// Stops and joins the thread when dropped.
    pub struct ResizeListener {
        handle: Handle,
        thread: Option<JoinHandle<()>>,
    }

    impl ResizeListener {
        pub fn spawn(flag: ResizeFlag) -> io::Result<Self> {
            let mut signals = Signals::new([SIGWINCH]).map_err(io::Error::other)?;
            let handle = signals.handle();
            let thread = std::thread::spawn(move || {
                for _ in signals.forever() {
                    debug!("SIGWINCH received");
                    flag.mark();
                }
            });
            Ok(Self {
                handle,
                thread: Some(thread),
            })
        }
    }

    impl Drop for ResizeListener {
        fn drop(&mut self) {
            self.handle.close();
            if let Some(thread) = self.thread.take() {
                let _ = thread.join();
            }
        }
    }
}

#[cfg(not(unix))]
mod listener {
    use std::io;

    use super::ResizeFlag;

    /// No signal to listen to; the crossterm resize event marks the flag.
    pub struct ResizeListener;

    impl ResizeListener {
        pub fn spawn(_flag: ResizeFlag) -> io::Result<Self> {
            Ok(Self)
        }
    }
}

pub use listener::ResizeListener;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_starts_dirty_and_resets() {
        let flag = ResizeFlag::new();
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_mark_from_other_thread() {
        let flag = ResizeFlag::new();
        flag.take();
        let remote = flag.clone();
        std::thread::spawn(move || remote.mark()).join().unwrap();
        assert!(flag.take());
        assert!(!flag.take());
    }
}
