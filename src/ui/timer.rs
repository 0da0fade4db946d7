use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A scheduled callback that can be cancelled before it fires.
///
/// Dropping the handle cancels the timer; call [`TimerHandle::detach`] to let it
/// run unattended.
#[derive(Debug)]
pub struct TimerHandle {
    task: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// Must be called from within a tokio runtime.
    pub fn start<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Self { task: Some(task) }
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    pub fn detach(mut self) {
        self.task.take();
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs `func` only after `wait` has passed without another call.
pub struct Debouncer<A> {
    func: Arc<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    pending: Option<TimerHandle>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(wait: Duration, func: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            wait,
            pending: None,
        }
    }

    pub fn call(&mut self, arg: A) {
        self.cancel();
        let func = Arc::clone(&self.func);
        self.pending = Some(TimerHandle::start(self.wait, move || func(arg)));
    }

    pub fn cancel(&mut self) {
        if let Some(mut pending) = self.pending.take() {
            pending.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test(start_paused = true)]
    async fn timer_fires_after_delay() {
        let fired = Arc::new(Mutex::new(false));
        let flag = fired.clone();
        let handle = TimerHandle::start(Duration::from_millis(100), move || {
            *flag.lock().unwrap() = true;
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!*fired.lock().unwrap());

        tokio::time::sleep(Duration::from_millis(60)).await;
        tokio::task::yield_now().await;
        assert!(*fired.lock().unwrap());
        drop(handle);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let fired = Arc::new(Mutex::new(false));
        let flag = fired.clone();
        let mut handle = TimerHandle::start(Duration::from_millis(100), move || {
            *flag.lock().unwrap() = true;
        });
        handle.cancel();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!*fired.lock().unwrap());
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn debouncer_only_runs_last_call() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut debounced = Debouncer::new(Duration::from_millis(300), move |q: &'static str| {
            sink.lock().unwrap().push(q);
        });

        debounced.call("B");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debounced.call("BU");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debounced.call("BUS1");
        assert!(debounced.is_pending());

        tokio::time::sleep(Duration::from_millis(350)).await;
        tokio::task::yield_now().await;
        assert_eq!(*seen.lock().unwrap(), vec!["BUS1"]);
        assert!(!debounced.is_pending());
    }
}
