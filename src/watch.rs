//! Viewport visibility subscriptions.
//!
//! A watcher is anything that can start and stop observing a target. The
//! same dispatch path serves persistent watches (re-fire on every entry) and
//! one-shot watches (unsubscribe after the first qualifying notification).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchMode {
    Persistent,
    OneShot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    pub mode: WatchMode,
}

impl WatchOptions {
    /// Card fade-in: 10% visible, bottom edge pulled up by 100px.
    pub fn reveal() -> Self {
        Self {
            threshold: 0.1,
            root_margin: Some("0px 0px -100px 0px"),
            mode: WatchMode::Persistent,
        }
    }

    pub fn counters() -> Self {
        Self {
            threshold: 0.5,
            root_margin: None,
            mode: WatchMode::OneShot,
        }
    }

    pub fn lazy() -> Self {
        Self {
            threshold: 0.0,
            root_margin: None,
            mode: WatchMode::OneShot,
        }
    }
}

pub trait Observe<T: ?Sized> {
    fn observe(&self, target: &T);
    fn unobserve(&self, target: &T);
}

/// Handles one visibility notification. Returns whether `on_visible` ran.
pub fn dispatch<T, O, F>(
    observer: &O,
    mode: WatchMode,
    target: &T,
    intersecting: bool,
    on_visible: F,
) -> bool
where
    T: ?Sized,
    O: Observe<T> + ?Sized,
    F: FnOnce(&T),
{
    if !intersecting {
        return false;
    }

    on_visible(target);
    if mode == WatchMode::OneShot {
        observer.unobserve(target);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct FakeObserver {
        watched: RefCell<BTreeSet<u32>>,
    }

    impl Observe<u32> for FakeObserver {
        fn observe(&self, target: &u32) {
            self.watched.borrow_mut().insert(*target);
        }

        fn unobserve(&self, target: &u32) {
            self.watched.borrow_mut().remove(target);
        }
    }

    impl FakeObserver {
        // Delivers a notification only while the target is still watched,
        // as a real intersection observer would.
        fn notify(&self, mode: WatchMode, target: u32, intersecting: bool, fired: &mut Vec<u32>) {
            if !self.watched.borrow().contains(&target) {
                return;
            }
            dispatch(self, mode, &target, intersecting, |target| fired.push(*target));
        }
    }

    #[test]
    fn persistent_watch_fires_on_every_entry() {
        let observer = FakeObserver::default();
        observer.observe(&1);
        let mut fired = Vec::new();

        observer.notify(WatchMode::Persistent, 1, true, &mut fired);
        observer.notify(WatchMode::Persistent, 1, false, &mut fired);
        observer.notify(WatchMode::Persistent, 1, true, &mut fired);

        assert_eq!(fired, vec![1, 1]);
        assert!(observer.watched.borrow().contains(&1));
    }

    #[test]
    fn one_shot_watch_unsubscribes_after_first_entry() {
        let observer = FakeObserver::default();
        observer.observe(&1);
        observer.observe(&2);
        let mut fired = Vec::new();

        observer.notify(WatchMode::OneShot, 1, false, &mut fired);
        assert!(observer.watched.borrow().contains(&1));

        observer.notify(WatchMode::OneShot, 1, true, &mut fired);
        observer.notify(WatchMode::OneShot, 1, true, &mut fired);

        assert_eq!(fired, vec![1]);
        assert_eq!(observer.watched.borrow().iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn preset_options_match_their_components() {
        assert_eq!(WatchOptions::reveal().mode, WatchMode::Persistent);
        assert_eq!(WatchOptions::reveal().root_margin, Some("0px 0px -100px 0px"));
        assert_eq!(WatchOptions::counters().threshold, 0.5);
        assert_eq!(WatchOptions::lazy().mode, WatchMode::OneShot);
    }
}
