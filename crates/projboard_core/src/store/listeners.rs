//! Ordered listener list with synchronous fan-out.

/// Callback receiving an owned snapshot.
pub type Listener<T> = Box<dyn FnMut(Vec<T>)>;

/// Registered callbacks, invoked in registration order.
pub struct ListenerList<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> Default for ListenerList<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<T: Clone> ListenerList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener. It is not called until the next `notify`.
    pub fn add(&mut self, listener: impl FnMut(Vec<T>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Calls every listener once with its own copy of `items`.
    pub fn notify(&mut self, items: &[T]) {
        for listener in &mut self.listeners {
            listener(items.to_vec());
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
