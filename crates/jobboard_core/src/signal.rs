//! Single-threaded observable cells.
//!
//! A [`Signal`] holds a value and a list of listeners. Setting the value
//! notifies every attached listener synchronously, in registration order.
//! [`Signal::subscribe`] returns a [`Subscription`] guard; the listener stays
//! attached exactly as long as the guard lives.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Slot<T> {
    id: u64,
    listener: Listener<T>,
}

struct Inner<T> {
    value: Rc<T>,
    listeners: Vec<Slot<T>>,
    next_id: u64,
}

pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Signal")
            .field("value", &*inner.value)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl<T: Default + Clone + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value: Rc::new(value),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn get(&self) -> T {
        T::clone(&self.inner.borrow().value)
    }

    /// Borrows the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.inner.borrow().value)
    }

    /// Stores `value` and notifies listeners.
    ///
    /// The borrow is released before listeners run, so a listener may read
    /// this signal or set other signals. Listeners see the stored value, not
    /// a copy.
    pub fn set(&self, value: T) {
        let current = Rc::new(value);
        let listeners: Vec<Listener<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = Rc::clone(&current);
            inner
                .listeners
                .iter()
                .map(|slot| Rc::clone(&slot.listener))
                .collect()
        };
        for listener in listeners {
            listener(&*current);
        }
    }

    /// Attaches `listener`. It is not called for the current value, only for
    /// later `set`s.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push(Slot {
                id,
                listener: Rc::new(listener),
            });
            id
        };

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|slot| slot.id != id);
            }
        })
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Registration of one listener. Dropping it detaches the listener.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Detaches now. Equivalent to dropping the guard.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_listeners_in_order() {
        let signal = Signal::new(0u32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let seen = Rc::clone(&seen);
            signal.subscribe(move |v| seen.borrow_mut().push(("first", *v)))
        };
        let second = {
            let seen = Rc::clone(&seen);
            signal.subscribe(move |v| seen.borrow_mut().push(("second", *v)))
        };

        signal.set(7);

        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
        assert_eq!(signal.get(), 7);
        drop((first, second));
    }

    #[test]
    fn dropping_subscription_detaches_listener() {
        let signal = Signal::new(String::new());
        let calls = Rc::new(Cell::new(0));

        let sub = {
            let calls = Rc::clone(&calls);
            signal.subscribe(move |_| calls.set(calls.get() + 1))
        };
        signal.set("a".to_string());
        assert_eq!(signal.listener_count(), 1);

        drop(sub);
        signal.set("b".to_string());

        assert_eq!(calls.get(), 1);
        assert_eq!(signal.listener_count(), 0);
        assert_eq!(signal.get(), "b");
    }

    #[test]
    fn unsubscribe_releases_only_its_own_listener() {
        let signal = Signal::new(0i32);
        let kept_calls = Rc::new(Cell::new(0));

        let removed = signal.subscribe(|_| panic!("detached listener must not run"));
        let kept = {
            let kept_calls = Rc::clone(&kept_calls);
            signal.subscribe(move |_| kept_calls.set(kept_calls.get() + 1))
        };

        removed.unsubscribe();
        signal.set(1);

        assert_eq!(kept_calls.get(), 1);
        assert_eq!(signal.listener_count(), 1);
        drop(kept);
    }

    #[test]
    fn listener_may_read_the_signal_it_observes() {
        let signal = Signal::new(1u8);
        let observed = Rc::new(Cell::new(0u8));

        let _sub = {
            let reader = signal.clone();
            let observed = Rc::clone(&observed);
            signal.subscribe(move |_| observed.set(reader.get()))
        };
        signal.set(9);

        assert_eq!(observed.get(), 9);
    }

    struct CountsClones(Rc<Cell<usize>>);

    impl Clone for CountsClones {
        fn clone(&self) -> Self {
            self.0.set(self.0.get() + 1);
            Self(Rc::clone(&self.0))
        }
    }

    #[test]
    fn set_hands_listeners_the_stored_value_without_cloning() {
        let clones = Rc::new(Cell::new(0));
        let signal = Signal::new(CountsClones(Rc::clone(&clones)));
        let seen = Rc::new(Cell::new(0));

        let _subs: Vec<Subscription> = (0..3)
            .map(|_| {
                let seen = Rc::clone(&seen);
                signal.subscribe(move |_| seen.set(seen.get() + 1))
            })
            .collect();
        signal.set(CountsClones(Rc::clone(&clones)));
        signal.with(|_| {});

        assert_eq!(seen.get(), 3);
        assert_eq!(clones.get(), 0);

        let _copy = signal.get();
        assert_eq!(clones.get(), 1);
    }

    #[test]
    fn subscription_outliving_signal_is_harmless() {
        let signal = Signal::new(0u8);
        let sub = signal.subscribe(|_| {});
        drop(signal);
        drop(sub);
    }
}
