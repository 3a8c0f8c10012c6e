//! Counted completion barrier.
//!
//! A move is presented by several independent tile animations. The board
//! may only be finalized once all of them have finished, and exactly once.

type Finalizer<T> = Box<dyn FnOnce() -> T + Send>;

/// Runs a finalize callback once `pending` completions have been signalled.
///
/// Armed with zero pending completions, the callback runs immediately in
/// [`CompletionBarrier::new`]. Signals after completion are ignored.
pub struct CompletionBarrier<T> {
    pending: usize,
    finalize: Option<Finalizer<T>>,
    output: Option<T>,
}

impl<T> CompletionBarrier<T> {
    pub fn new(pending: usize, finalize: impl FnOnce() -> T + Send + 'static) -> Self {
        let mut barrier = Self {
            pending,
            finalize: Some(Box::new(finalize)),
            output: None,
        };
        if pending == 0 {
            barrier.complete();
        }
        barrier
    }

    /// Records one completion. Returns `true` only for the signal that
    /// released the barrier.
    pub fn signal(&mut self) -> bool {
        if self.pending == 0 {
            tracing::trace!("completion signalled on a released barrier");
            return false;
        }
        self.pending -= 1;
        if self.pending == 0 {
            self.complete();
            return true;
        }
        false
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_complete(&self) -> bool {
        self.finalize.is_none()
    }

    /// Takes the finalize result. Yields `Some` at most once.
    pub fn take_output(&mut self) -> Option<T> {
        self.output.take()
    }

    fn complete(&mut self) {
        if let Some(finalize) = self.finalize.take() {
            self.output = Some(finalize());
        }
    }
}

impl<T> std::fmt::Debug for CompletionBarrier<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionBarrier")
            .field("pending", &self.pending)
            .field("complete", &self.is_complete())
            .finish()
    }
}
