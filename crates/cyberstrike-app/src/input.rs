//! Device input staging.
//!
//! Any thread may dispatch `InputEvent`s into the `InputRouter`. While a
//! listener is attached the events are staged in its `InputSampler`; the game
//! loop drains the sampler once per tick into an `InputFrame`. Events arriving
//! with no listener attached are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::trace;

use cyberstrike_core::enums::MoveKey;
use cyberstrike_core::input::{HeldKeys, InputFrame};
use cyberstrike_core::types::Position;

/// Raw device input as delivered by a frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    KeyDown { key: String },
    KeyUp { key: String },
    PointerMove { x: f64, y: f64 },
    /// A click also moves the pointer to the click position.
    Click { x: f64, y: f64 },
}

#[derive(Debug, Default)]
struct Staged {
    held: HeldKeys,
    pointer: Position,
    clicks: Vec<Position>,
}

/// Input staged between ticks.
#[derive(Debug, Default)]
pub struct InputSampler {
    staged: Mutex<Staged>,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage one event. Keys other than w/a/s/d are ignored.
    pub fn apply(&self, event: &InputEvent) {
        let mut staged = self.lock();
        match event {
            InputEvent::KeyDown { key } => {
                if let Some(key) = MoveKey::from_key(key) {
                    staged.held.set(key, true);
                }
            }
            InputEvent::KeyUp { key } => {
                if let Some(key) = MoveKey::from_key(key) {
                    staged.held.set(key, false);
                }
            }
            InputEvent::PointerMove { x, y } => {
                staged.pointer = Position::new(*x, *y);
            }
            InputEvent::Click { x, y } => {
                let at = Position::new(*x, *y);
                staged.pointer = at;
                staged.clicks.push(at);
            }
        }
    }

    /// Frame for the next tick. Held keys and pointer persist; clicks are drained.
    pub fn take_frame(&self) -> InputFrame {
        let mut staged = self.lock();
        InputFrame {
            held: staged.held,
            pointer: staged.pointer,
            clicks: std::mem::take(&mut staged.clicks),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Staged> {
        // Staged input stays usable even if a dispatcher panicked mid-update.
        self.staged.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Routes dispatched input to the currently attached sampler, if any.
#[derive(Debug, Default)]
pub struct InputRouter {
    active: Mutex<Option<Arc<InputSampler>>>,
    dropped: AtomicU64,
}

impl InputRouter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Attach a fresh sampler, replacing any existing one. Input is routed to
    /// it until the returned guard is dropped.
    pub fn attach(self: &Arc<Self>) -> InputListenerGuard {
        let sampler = Arc::new(InputSampler::new());
        *self.lock() = Some(Arc::clone(&sampler));
        trace!("input listener attached");
        InputListenerGuard {
            router: Arc::clone(self),
            sampler,
        }
    }

    /// Deliver an event. Returns false when no listener is attached and the
    /// event was dropped.
    pub fn dispatch(&self, event: InputEvent) -> bool {
        match self.lock().as_ref() {
            Some(sampler) => {
                sampler.apply(&event);
                true
            }
            None => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                false
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        self.lock().is_some()
    }

    /// Events dropped because no listener was attached.
    pub fn dropped_events(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn detach(&self, sampler: &Arc<InputSampler>) {
        let mut active = self.lock();
        // A newer listener may have replaced this one.
        if active.as_ref().is_some_and(|a| Arc::ptr_eq(a, sampler)) {
            *active = None;
            trace!("input listener detached");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<InputSampler>>> {
        self.active.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Scoped input subscription. Dropping it detaches the sampler and discards
/// whatever was staged.
#[derive(Debug)]
pub struct InputListenerGuard {
    router: Arc<InputRouter>,
    sampler: Arc<InputSampler>,
}

impl InputListenerGuard {
    pub fn take_frame(&self) -> InputFrame {
        self.sampler.take_frame()
    }
}

impl Drop for InputListenerGuard {
    fn drop(&mut self) {
        self.router.detach(&self.sampler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: &str) -> InputEvent {
        InputEvent::KeyDown { key: key.into() }
    }

    #[test]
    fn test_dispatch_without_listener_is_dropped() {
        let router = InputRouter::new();
        assert!(!router.is_attached());
        assert!(!router.dispatch(key_down("w")));
        assert!(!router.dispatch(InputEvent::Click { x: 1.0, y: 2.0 }));
        assert_eq!(router.dropped_events(), 2);
    }

    #[test]
    fn test_attached_listener_receives_input() {
        let router = InputRouter::new();
        let guard = router.attach();

        assert!(router.dispatch(key_down("W")));
        assert!(router.dispatch(key_down("d")));
        assert!(router.dispatch(InputEvent::PointerMove { x: 300.0, y: 200.0 }));

        let frame = guard.take_frame();
        assert!(frame.held.up);
        assert!(frame.held.right);
        assert!(!frame.held.down);
        assert_eq!(frame.pointer, Position::new(300.0, 200.0));
        assert!(frame.clicks.is_empty());
    }

    #[test]
    fn test_take_frame_drains_clicks_but_keeps_held_keys() {
        let router = InputRouter::new();
        let guard = router.attach();
        router.dispatch(key_down("s"));
        router.dispatch(InputEvent::Click { x: 10.0, y: 20.0 });
        router.dispatch(InputEvent::Click { x: 30.0, y: 40.0 });

        let first = guard.take_frame();
        assert_eq!(
            first.clicks,
            vec![Position::new(10.0, 20.0), Position::new(30.0, 40.0)]
        );
        assert_eq!(first.pointer, Position::new(30.0, 40.0));

        let second = guard.take_frame();
        assert!(second.clicks.is_empty());
        assert!(second.held.down);
        assert_eq!(second.pointer, Position::new(30.0, 40.0));
    }

    #[test]
    fn test_key_up_releases_and_unknown_keys_ignored() {
        let sampler = InputSampler::new();
        sampler.apply(&key_down("a"));
        sampler.apply(&key_down("q"));
        sampler.apply(&InputEvent::KeyUp { key: "A".into() });

        let frame = sampler.take_frame();
        assert_eq!(frame.held, HeldKeys::default());
    }

    #[test]
    fn test_dropping_guard_detaches() {
        let router = InputRouter::new();
        let guard = router.attach();
        assert!(router.is_attached());
        drop(guard);
        assert!(!router.is_attached());
        assert!(!router.dispatch(key_down("w")));
    }

    #[test]
    fn test_reattach_starts_with_clean_sampler() {
        let router = InputRouter::new();
        let guard = router.attach();
        router.dispatch(key_down("w"));
        router.dispatch(InputEvent::Click { x: 5.0, y: 5.0 });
        drop(guard);

        let guard = router.attach();
        let frame = guard.take_frame();
        assert!(!frame.held.up);
        assert!(frame.clicks.is_empty());
    }

    #[test]
    fn test_stale_guard_does_not_detach_newer_listener() {
        let router = InputRouter::new();
        let old = router.attach();
        let new = router.attach();
        drop(old);

        assert!(router.is_attached());
        assert!(router.dispatch(key_down("d")));
        assert!(new.take_frame().held.right);
    }

    #[test]
    fn test_input_event_json_tagging() {
        let event: InputEvent =
            serde_json::from_str(r#"{"type":"Click","x":4.0,"y":8.0}"#).unwrap();
        assert_eq!(event, InputEvent::Click { x: 4.0, y: 8.0 });
    }
}
