use std::collections::BTreeMap;
use std::fmt::Debug;
use std::time::Duration;

use leptos::prelude::*;

/// Runs a callback after a delay and can take it back before it fires.
pub trait TimerBackend: Copy + Send + Sync + 'static {
    type Handle: Copy + Send + Sync + 'static;
    type Error: Debug;

    fn start(
        self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Result<Self::Handle, Self::Error>;

    fn cancel(self, handle: Self::Handle);
}

/// `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerBackend for BrowserTimers {
    type Handle = TimeoutHandle;
    type Error = wasm_bindgen::JsValue;

    fn start(
        self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Result<TimeoutHandle, wasm_bindgen::JsValue> {
        set_timeout_with_handle(callback, delay)
    }

    fn cancel(self, handle: TimeoutHandle) {
        handle.clear();
    }
}

struct Pending<H> {
    next_id: u64,
    handles: BTreeMap<u64, H>,
}

impl<H> Default for Pending<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            handles: BTreeMap::new(),
        }
    }
}

/// Timeouts owned by the reactive owner that created them. A timer leaves
/// the set when it fires; whatever is still pending when the owner is
/// disposed is cancelled, so a late callback never touches signals of an
/// unmounted section.
pub struct Timers<B: TimerBackend = BrowserTimers> {
    backend: B,
    pending: StoredValue<Pending<B::Handle>>,
}

impl<B: TimerBackend> Clone for Timers<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: TimerBackend> Copy for Timers<B> {}

impl Timers<BrowserTimers> {
    pub fn new() -> Self {
        Self::with_backend(BrowserTimers)
    }
}

impl<B: TimerBackend> Timers<B> {
    pub fn with_backend(backend: B) -> Self {
        let pending = StoredValue::new(Pending::<B::Handle>::default());
        on_cleanup(move || {
            pending.try_update_value(|pending| {
                for (_, handle) in std::mem::take(&mut pending.handles) {
                    backend.cancel(handle);
                }
            });
        });
        Self { backend, pending }
    }

    pub fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        let pending = self.pending;
        let Some(id) = pending.try_update_value(|pending| {
            let id = pending.next_id;
            pending.next_id += 1;
            id
        }) else {
            return;
        };

        let fire = move || {
            pending.try_update_value(|pending| pending.handles.remove(&id));
            callback();
        };
        match self.backend.start(delay, fire) {
            Ok(handle) => {
                pending.try_update_value(|pending| pending.handles.insert(id, handle));
            }
            Err(err) => log::warn!("could not schedule timer: {err:?}"),
        }
    }

    /// Timers started that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.pending
            .try_with_value(|pending| pending.handles.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::convert::Infallible;
    use std::rc::Rc;

    type Queued = (u32, Box<dyn FnOnce()>);

    thread_local! {
        static QUEUE: RefCell<Vec<Queued>> = RefCell::new(Vec::new());
        static CANCELLED: RefCell<Vec<u32>> = const { RefCell::new(Vec::new()) };
        static NEXT_HANDLE: Cell<u32> = const { Cell::new(0) };
    }

    /// Timers that only fire when the test says so.
    #[derive(Debug, Clone, Copy)]
    struct ManualClock;

    impl TimerBackend for ManualClock {
        type Handle = u32;
        type Error = Infallible;

        fn start(self, _delay: Duration, callback: impl FnOnce() + 'static) -> Result<u32, Infallible> {
            let handle = NEXT_HANDLE.with(|next| {
                let handle = next.get();
                next.set(handle + 1);
                handle
            });
            QUEUE.with_borrow_mut(|queue| queue.push((handle, Box::new(callback))));
            Ok(handle)
        }

        fn cancel(self, handle: u32) {
            CANCELLED.with_borrow_mut(|cancelled| cancelled.push(handle));
            QUEUE.with_borrow_mut(|queue| queue.retain(|(queued, _)| *queued != handle));
        }
    }

    fn fire_next() {
        let next = QUEUE.with_borrow_mut(|queue| (!queue.is_empty()).then(|| queue.remove(0)));
        if let Some((_, callback)) = next {
            callback();
        }
    }

    fn queued() -> usize {
        QUEUE.with_borrow(Vec::len)
    }

    fn cancelled() -> usize {
        CANCELLED.with_borrow(Vec::len)
    }

    #[test]
    fn test_disposing_owner_cancels_pending_timers() {
        let fired = Rc::new(Cell::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let timers = Timers::with_backend(ManualClock);
            for delay in [100, 200, 300] {
                let fired = Rc::clone(&fired);
                timers.schedule(Duration::from_millis(delay), move || fired.set(fired.get() + 1));
            }
            assert_eq!(timers.pending(), 3);
        });
        assert_eq!(queued(), 3);

        owner.cleanup();

        assert_eq!(cancelled(), 3);
        assert_eq!(queued(), 0);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_fired_timer_is_forgotten() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let owner = Owner::new();
        owner.with(|| {
            let timers = Timers::with_backend(ManualClock);
            for label in ["first", "second"] {
                let log = Rc::clone(&log);
                timers.schedule(Duration::from_millis(10), move || log.borrow_mut().push(label));
            }

            fire_next();
            assert_eq!(timers.pending(), 1);
            assert_eq!(*log.borrow(), vec!["first"]);
        });

        owner.cleanup();

        // only the timer that had not fired is cancelled
        assert_eq!(cancelled(), 1);
        assert_eq!(queued(), 0);
        assert_eq!(*log.borrow(), vec!["first"]);
    }

    #[test]
    fn test_pending_stays_bounded_across_rounds() {
        let owner = Owner::new();
        owner.with(|| {
            let timers = Timers::with_backend(ManualClock);
            for _ in 0..50 {
                timers.schedule(Duration::from_millis(2000), || {});
                fire_next();
            }
            assert_eq!(timers.pending(), 0);
        });
        owner.cleanup();
        assert_eq!(cancelled(), 0);
    }
}
