//! File watching for live reload.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Quiet period after the last relevant event before it is delivered.
const DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchEvent {
    /// The content file was written or replaced
    ContentModified(PathBuf),

    /// The content file was removed
    ContentRemoved(PathBuf),

    /// Something under the public directory changed
    PublicChanged(PathBuf),
}

/// What the watcher is looking at.
#[derive(Debug, Clone)]
struct WatchTargets {
    content_name: Option<OsString>,
    public_dir: Option<PathBuf>,
}

/// File watcher for the content file and the public directory.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Watch `content_path` and, recursively, `public_dir`.
    ///
    /// The content file's directory is watched rather than the file itself so
    /// editors that save by renaming still produce events.
    ///
    /// Returns the watcher and a channel to receive events.
    pub fn new(
        content_path: &Path,
        public_dir: &Path,
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        let content_dir = content_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        watcher
            .watch(content_dir, RecursiveMode::NonRecursive)
            .map_err(std::io::Error::other)?;

        let public_dir = if public_dir.exists() {
            watcher
                .watch(public_dir, RecursiveMode::Recursive)
                .map_err(std::io::Error::other)?;
            public_dir.canonicalize().ok()
        } else {
            None
        };

        let targets = WatchTargets {
            content_name: content_path.file_name().map(|n| n.to_os_string()),
            public_dir,
        };

        std::thread::spawn(move || {
            debounce_events(&sync_rx, &targets, DEBOUNCE_WINDOW, |e| {
                let _ = async_tx.blocking_send(e);
            });
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Trailing-edge debounce over raw notify events.
///
/// Relevant events are held until `window` passes without another one, then
/// the latest event per target (content file, public directory) is emitted.
/// Pending events are flushed when the sender hangs up.
fn debounce_events(
    rx: &mpsc::Receiver<notify::Event>,
    targets: &WatchTargets,
    window: Duration,
    mut emit: impl FnMut(WatchEvent),
) {
    let mut pending: Vec<WatchEvent> = Vec::new();

    loop {
        let event = if pending.is_empty() {
            match rx.recv() {
                Ok(event) => event,
                Err(_) => return,
            }
        } else {
            match rx.recv_timeout(window) {
                Ok(event) => event,
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    pending.drain(..).for_each(&mut emit);
                    continue;
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    pending.drain(..).for_each(&mut emit);
                    return;
                }
            }
        };

        for e in event
            .paths
            .iter()
            .filter_map(|path| classify_event(path, &event.kind, targets))
        {
            coalesce(&mut pending, e);
        }
    }
}

/// Replace any pending event for the same target with `event`.
fn coalesce(pending: &mut Vec<WatchEvent>, event: WatchEvent) {
    let is_content = |e: &WatchEvent| !matches!(e, WatchEvent::PublicChanged(_));
    let content = is_content(&event);
    pending.retain(|e| is_content(e) != content);
    pending.push(event);
}

/// Classify a notify event into a WatchEvent.
fn classify_event(
    path: &Path,
    kind: &notify::EventKind,
    targets: &WatchTargets,
) -> Option<WatchEvent> {
    use notify::EventKind;

    if !matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return None;
    }

    if let Some(ref public_dir) = targets.public_dir {
        if path.starts_with(public_dir) {
            return Some(WatchEvent::PublicChanged(path.to_path_buf()));
        }
    }

    if targets.content_name.is_some() && path.file_name() == targets.content_name.as_deref() {
        return match kind {
            EventKind::Remove(_) => Some(WatchEvent::ContentRemoved(path.to_path_buf())),
            _ => Some(WatchEvent::ContentModified(path.to_path_buf())),
        };
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind, RemoveKind};
    use notify::EventKind;
    use std::fs;
    use tempfile::tempdir;

    fn targets(public: &Path) -> WatchTargets {
        WatchTargets {
            content_name: Some(OsString::from("site.toml")),
            public_dir: Some(public.to_path_buf()),
        }
    }

    #[test]
    fn classifies_content_and_public_paths() {
        let t = targets(Path::new("/project/public"));
        let modify = EventKind::Modify(ModifyKind::Any);

        assert_eq!(
            classify_event(Path::new("/project/site.toml"), &modify, &t),
            Some(WatchEvent::ContentModified(PathBuf::from("/project/site.toml")))
        );
        assert_eq!(
            classify_event(
                Path::new("/project/site.toml"),
                &EventKind::Remove(RemoveKind::File),
                &t
            ),
            Some(WatchEvent::ContentRemoved(PathBuf::from("/project/site.toml")))
        );
        assert_eq!(
            classify_event(
                Path::new("/project/public/logo.png"),
                &EventKind::Create(CreateKind::File),
                &t
            ),
            Some(WatchEvent::PublicChanged(PathBuf::from("/project/public/logo.png")))
        );
    }

    #[test]
    fn ignores_unrelated_files_and_reads() {
        let t = targets(Path::new("/project/public"));

        assert_eq!(
            classify_event(
                Path::new("/project/README.md"),
                &EventKind::Modify(ModifyKind::Any),
                &t
            ),
            None
        );
        assert_eq!(
            classify_event(
                Path::new("/project/site.toml"),
                &EventKind::Access(AccessKind::Any),
                &t
            ),
            None
        );
    }

    fn event(kind: EventKind, path: &str) -> notify::Event {
        notify::Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn debounce_delivers_last_event_of_a_burst() {
        let t = targets(Path::new("/project/public"));
        let (tx, rx) = mpsc::channel();

        tx.send(event(EventKind::Remove(RemoveKind::File), "/project/site.toml"))
            .unwrap();
        tx.send(event(EventKind::Access(AccessKind::Any), "/project/site.toml"))
            .unwrap();
        tx.send(event(
            EventKind::Create(CreateKind::File),
            "/project/public/logo.svg",
        ))
        .unwrap();
        tx.send(event(EventKind::Modify(ModifyKind::Any), "/project/site.toml"))
            .unwrap();
        drop(tx);

        let mut emitted = Vec::new();
        debounce_events(&rx, &t, Duration::from_secs(5), |e| emitted.push(e));

        assert_eq!(
            emitted,
            vec![
                WatchEvent::PublicChanged(PathBuf::from("/project/public/logo.svg")),
                WatchEvent::ContentModified(PathBuf::from("/project/site.toml")),
            ]
        );
    }

    #[test]
    fn debounce_emits_after_quiet_window() {
        let t = targets(Path::new("/project/public"));
        let (tx, rx) = mpsc::channel();

        let sender = std::thread::spawn(move || {
            tx.send(event(EventKind::Modify(ModifyKind::Any), "/project/site.toml"))
                .unwrap();
            std::thread::sleep(Duration::from_millis(200));
            tx.send(event(EventKind::Modify(ModifyKind::Any), "/project/site.toml"))
                .unwrap();
        });

        let mut emitted = Vec::new();
        debounce_events(&rx, &t, Duration::from_millis(20), |e| emitted.push(e));
        sender.join().unwrap();

        assert_eq!(emitted.len(), 2);
    }

    #[tokio::test]
    async fn watches_content_file() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("site.toml");
        fs::write(&content, "company_name = \"A\"").unwrap();

        let (watcher, mut rx) = FileWatcher::new(&content, &temp.path().join("public")).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(150)).await;

        fs::write(&content, "company_name = \"B\"").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        assert!(event.is_ok(), "timeout waiting for file watch event");
        assert!(matches!(
            event.unwrap(),
            Some(WatchEvent::ContentModified(_))
        ));
    }
}
