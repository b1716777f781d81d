//! Controller Events
//!
//! Controllers report upward through a listener callback; the owning
//! component decides what to do with each event.

use std::sync::Arc;

pub type Listener<E> = Arc<dyn Fn(E) + Send + Sync>;

pub fn listener<E>(f: impl Fn(E) + Send + Sync + 'static) -> Listener<E> {
    Arc::new(f)
}

/// Listener that just collects events, for tests
#[cfg(test)]
pub fn recorder<E: Send + 'static>() -> (Listener<E>, Arc<std::sync::Mutex<Vec<E>>>) {
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = seen.clone();
    (listener(move |event| sink.lock().unwrap().push(event)), seen)
}
