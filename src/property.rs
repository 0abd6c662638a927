/// A value paired with change listeners.
///
/// Listeners fire only when [`Observable::set`] receives a value different
/// from the current one.
pub struct Observable<T> {
    value: T,
    listeners: Vec<Box<dyn FnMut(&T) + Send>>,
}

impl<T: PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Stores `value` and notifies listeners. Returns whether it changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for listener in self.listeners.iter_mut() {
            listener(&self.value);
        }
        true
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }
}

impl<T: Default + PartialEq> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
