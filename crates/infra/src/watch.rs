use std::{path::Path, time::Duration};

#[cfg(not(feature = "watch"))]
use code_counter_shared_kernel::InfrastructureError;
use code_counter_shared_kernel::Result;

#[cfg(feature = "watch")]
use {
    code_counter_shared_kernel::InfrastructureError,
    notify::{RecommendedWatcher, RecursiveMode, Watcher, event::EventKind},
    std::{
        sync::mpsc,
        thread,
        time::{Instant, SystemTime},
    },
};

#[cfg(feature = "watch")]
type EventRx = mpsc::Receiver<std::result::Result<notify::Event, notify::Error>>;

/// Re-runs a callback whenever the input file changes.
#[cfg(feature = "watch")]
pub struct WatchService;

#[cfg(feature = "watch")]
impl WatchService {
    /// Run the watch service: try to use filesystem notifications and fall back to polling.
    /// Events arriving within `interval` of each other are coalesced into one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the provided `on_change` callback returns an error.
    pub fn run<F>(path: &Path, interval: Duration, mut on_change: F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        match Self::watch_with_notify(path, interval, &mut on_change) {
            Ok(()) => Ok(()),
            Err(err) => {
                log::warn!("file watcher unavailable ({err}). Falling back to polling every {interval:?}.");
                Self::poll_loop(path, interval, &mut on_change)
            }
        }
    }

    fn watch_with_notify<F>(path: &Path, interval: Duration, on_change: &mut F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let (watcher, rx) = Self::create_watcher(path)?;
        // Keep `watcher` alive in this scope so it continues watching.
        let _keep = &watcher;
        Self::event_loop(path, &rx, interval, on_change)
    }

    fn create_watcher(path: &Path) -> std::result::Result<(RecommendedWatcher, EventRx), InfrastructureError> {
        let to_error = |err: notify::Error| InfrastructureError::WatchError {
            path: path.to_path_buf(),
            details: err.to_string(),
        };

        let (tx, rx) = mpsc::channel();
        let mut watcher: RecommendedWatcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })
        .map_err(to_error)?;

        watcher.watch(path, RecursiveMode::NonRecursive).map_err(to_error)?;

        Ok((watcher, rx))
    }

    fn event_loop<F>(path: &Path, rx: &EventRx, interval: Duration, on_change: &mut F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let mut pending: Option<Instant> = None;

        loop {
            let received = match pending {
                Some(start) => {
                    let remaining = interval.checked_sub(start.elapsed()).unwrap_or_default();
                    rx.recv_timeout(remaining)
                }
                None => rx.recv().map_err(|_| mpsc::RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(Ok(event)) => {
                    if Self::is_relevant(event.kind) {
                        pending.get_or_insert_with(Instant::now);
                    }
                }
                Ok(Err(err)) => log::warn!("watcher error: {err}"),
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    pending = None;
                    on_change()?;
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    return Self::poll_loop(path, interval, on_change);
                }
            }
        }
    }

    fn poll_loop<F>(path: &Path, interval: Duration, on_change: &mut F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let mut last = modified(path);
        loop {
            thread::sleep(interval);
            let current = modified(path);
            if current != last {
                last = current;
                on_change()?;
            }
        }
    }

    const fn is_relevant(kind: EventKind) -> bool {
        matches!(
            kind,
            EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Other
        )
    }
}

#[cfg(feature = "watch")]
fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(not(feature = "watch"))]
pub struct WatchService;

#[cfg(not(feature = "watch"))]
impl WatchService {
    pub fn run<F>(path: &Path, _interval: Duration, _on_change: F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        Err(InfrastructureError::WatchError {
            path: path.to_path_buf(),
            details: "watch feature disabled at compile time".to_string(),
        }
        .into())
    }
}
