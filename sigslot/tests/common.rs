use std::cell::{Cell, RefCell};

/// Records every value it is handed; `take` drains the record.
pub struct Recorder<T> {
    values: RefCell<Vec<T>>,
}

#[allow(unused)]
impl<T> Recorder<T> {
    pub fn new() -> Self { Self { values: RefCell::new(Vec::new()) } }

    pub fn record(&self, value: T) { self.values.borrow_mut().push(value); }

    pub fn take(&self) -> Vec<T> { self.values.borrow_mut().drain(..).collect() }
}

/// Counts invocations without caring about arguments.
pub struct Probe {
    count: Cell<u32>,
}

#[allow(unused)]
impl Probe {
    pub fn new() -> Self { Self { count: Cell::new(0) } }

    pub fn ping(&self) { self.count.set(self.count.get() + 1); }

    /// A second method with a distinct body, for identity tests.
    pub fn pong(&self) { self.count.set(self.count.get() + 100); }

    pub fn count(&self) -> u32 { self.count.get() }
}

#[allow(unused)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}
