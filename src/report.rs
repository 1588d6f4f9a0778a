//! Allocation-failure reporting.

/// Sink notified whenever the table fails to allocate storage.
///
/// The table calls [`out_of_memory`](Self::out_of_memory) once per failed
/// allocation, immediately before the failing operation returns its error.
pub trait ErrorSink {
    fn out_of_memory(&self);
}

/// Default sink: one line to standard error per failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl ErrorSink for StderrSink {
    fn out_of_memory(&self) {
        eprintln!("range-hashmap: out of memory");
    }
}
