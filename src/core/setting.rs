use std::fmt;

type Fallback<T, S> = Box<dyn Fn(&S) -> T>;
type ChangeCallback<T> = Box<dyn FnMut(&T)>;

/// A value that is either pinned by the user or generated from a source.
///
/// The fallback is a pure function of the source snapshot passed to
/// [`Setting::update`] and [`Setting::reset`]; it never captures mutable
/// outer state. `set` and `reset` fire the change callback, `update` is
/// silent so bulk refreshes do not re-trigger dependent recomputation.
pub struct Setting<T, S: ?Sized = ()> {
    value: T,
    is_user_value: bool,
    fallback: Fallback<T, S>,
    on_change: Option<ChangeCallback<T>>,
}

impl<T, S: ?Sized> Setting<T, S> {
    /// Creates a setting. Without an initial value the fallback is evaluated
    /// immediately and the result is not pinned.
    pub fn new<F>(value: Option<T>, fallback: F, source: &S) -> Self
    where
        F: Fn(&S) -> T + 'static,
    {
        let value = value.unwrap_or_else(|| fallback(source));
        Self {
            value,
            is_user_value: false,
            fallback: Box::new(fallback),
            on_change: None,
        }
    }

    /// Creates a setting that starts pinned to `value`.
    pub fn pinned<F>(value: T, fallback: F) -> Self
    where
        F: Fn(&S) -> T + 'static,
    {
        Self {
            value,
            is_user_value: true,
            fallback: Box::new(fallback),
            on_change: None,
        }
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn is_user_value(&self) -> bool {
        self.is_user_value
    }

    /// Installs (or replaces) the change notification callback.
    pub fn on_change<C>(&mut self, callback: C)
    where
        C: FnMut(&T) + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Pins `value` and notifies.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.is_user_value = true;
        self.notify();
    }

    /// Drops the pin, recomputes from the fallback and notifies.
    pub fn reset(&mut self, source: &S) {
        self.value = (self.fallback)(source);
        self.is_user_value = false;
        self.notify();
    }

    /// Recomputes from the fallback unless pinned. Does not notify.
    ///
    /// Returns `true` when the value was recomputed.
    pub fn update(&mut self, source: &S) -> bool {
        if self.is_user_value {
            return false;
        }
        self.value = (self.fallback)(source);
        true
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.value);
        }
    }
}

impl<T: fmt::Debug, S: ?Sized> fmt::Debug for Setting<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setting")
            .field("value", &self.value)
            .field("is_user_value", &self.is_user_value)
            .field("has_on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::Setting;

    #[test]
    fn update_is_silent_while_set_and_reset_notify() {
        let calls = Rc::new(Cell::new(0));
        let mut setting = Setting::new(None, |source: &i32| source * 2, &1);
        let counter = Rc::clone(&calls);
        setting.on_change(move |_| counter.set(counter.get() + 1));

        assert!(setting.update(&5));
        assert_eq!(*setting.value(), 10);
        assert_eq!(calls.get(), 0);

        setting.set(3);
        assert_eq!(calls.get(), 1);
        setting.reset(&4);
        assert_eq!(calls.get(), 2);
        assert_eq!(*setting.value(), 8);
    }

    #[test]
    fn initial_value_skips_fallback_but_is_not_pinned() {
        let setting = Setting::new(Some(7), |_: &()| 0, &());
        assert_eq!(*setting.value(), 7);
        assert!(!setting.is_user_value());
    }

    #[test]
    fn pinned_constructor_ignores_updates() {
        let mut setting = Setting::pinned(1, |source: &i32| *source);
        assert!(!setting.update(&9));
        assert_eq!(*setting.value(), 1);
    }
}
