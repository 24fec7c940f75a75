//! Cancellable timed sequences
//!
//! A [`Timeline`] owns a tokio task that waits out each step's delay and then
//! hands the step's payload back to the UI thread over a channel. The UI
//! drains the channel once per frame with [`Timeline::poll`], so all view
//! state is still mutated from a single thread.
//!
//! Dropping a timeline cancels it: the task stops at its next suspension
//! point and nothing it had already queued is delivered.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// One scripted step: wait `delay`, then emit `payload`
#[derive(Debug, Clone)]
pub struct Step<T> {
    pub delay: Duration,
    pub payload: T,
}

impl<T> Step<T> {
    pub fn new(delay: Duration, payload: T) -> Self {
        Self { delay, payload }
    }
}

/// Something a timeline reports back to its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineEvent<T> {
    /// A step's delay elapsed
    Step(T),
    /// Every step has been emitted
    Finished,
}

/// Handle to a running sequence
pub struct Timeline<T> {
    label: &'static str,
    events: mpsc::UnboundedReceiver<TimelineEvent<T>>,
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
    cancelled: bool,
    finished: bool,
}

impl<T: Send + 'static> Timeline<T> {
    /// Start running `steps` on the given runtime
    pub fn spawn(runtime: &Handle, label: &'static str, steps: Vec<Step<T>>) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let (cancel, cancel_rx) = watch::channel(false);

        tracing::debug!(timeline = label, steps = steps.len(), "timeline started");
        let task = runtime.spawn(run_steps(label, steps, tx, cancel_rx));

        Self {
            label,
            events,
            cancel,
            task,
            cancelled: false,
            finished: false,
        }
    }
}

impl<T> Timeline<T> {
    /// Drain every event emitted since the last poll, without blocking
    pub fn poll(&mut self) -> Vec<TimelineEvent<T>> {
        let mut out = Vec::new();
        if self.cancelled {
            return out;
        }
        while let Ok(event) = self.events.try_recv() {
            if matches!(event, TimelineEvent::Finished) {
                self.finished = true;
            }
            out.push(event);
        }
        out
    }

    /// Stop the sequence. Pending and already-queued steps are dropped.
    pub fn cancel(&mut self) {
        if self.cancelled || self.finished {
            return;
        }
        self.cancelled = true;
        let _ = self.cancel.send(true);
        self.events.close();
        tracing::debug!(timeline = self.label, "timeline cancelled");
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// True once `Finished` has been polled
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True once the backing task has exited
    pub fn is_task_done(&self) -> bool {
        self.task.is_finished()
    }
}

impl<T> Drop for Timeline<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_steps<T>(
    label: &'static str,
    steps: Vec<Step<T>>,
    tx: mpsc::UnboundedSender<TimelineEvent<T>>,
    mut cancel: watch::Receiver<bool>,
) {
    for (index, step) in steps.into_iter().enumerate() {
        tokio::select! {
            _ = tokio::time::sleep(step.delay) => {}
            // Fires on an explicit cancel and when the sender is dropped.
            _ = cancel.changed() => {
                tracing::debug!(timeline = label, step = index, "timeline stopped early");
                return;
            }
        }

        if tx.send(TimelineEvent::Step(step.payload)).is_err() {
            return;
        }
        tracing::trace!(timeline = label, step = index, "timeline step emitted");
    }

    let _ = tx.send(TimelineEvent::Finished);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(values: &[u32], each_ms: u64) -> Vec<Step<u32>> {
        values
            .iter()
            .map(|&v| Step::new(Duration::from_millis(each_ms), v))
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_steps_in_order_then_finished() {
        let mut timeline = Timeline::spawn(&Handle::current(), "test", steps(&[1, 2, 3], 100));

        tokio::time::sleep(Duration::from_millis(350)).await;
        let events = timeline.poll();

        assert_eq!(
            events,
            vec![
                TimelineEvent::Step(1),
                TimelineEvent::Step(2),
                TimelineEvent::Step(3),
                TimelineEvent::Finished,
            ]
        );
        assert!(timeline.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_steps_wait_for_their_delay() {
        let mut timeline = Timeline::spawn(&Handle::current(), "test", steps(&[1, 2], 100));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(timeline.poll().is_empty());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(timeline.poll(), vec![TimelineEvent::Step(1)]);
        assert!(!timeline.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_pending_steps() {
        let mut timeline = Timeline::spawn(&Handle::current(), "test", steps(&[1, 2, 3], 100));

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(timeline.poll(), vec![TimelineEvent::Step(1)]);

        timeline.cancel();
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert!(timeline.poll().is_empty());
        assert!(timeline.is_cancelled());
        assert!(!timeline.is_finished());
        assert!(timeline.is_task_done());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_unpolled_steps() {
        let mut timeline = Timeline::spawn(&Handle::current(), "test", steps(&[1, 2, 3], 100));

        tokio::time::sleep(Duration::from_millis(250)).await;
        timeline.cancel();

        assert!(timeline.poll().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_task() {
        let (probe_tx, mut probe_rx) = mpsc::unbounded_channel::<()>();
        let timeline = Timeline::spawn(
            &Handle::current(),
            "test",
            vec![Step::new(Duration::from_millis(100), probe_tx)],
        );
        drop(timeline);

        tokio::time::sleep(Duration::from_millis(500)).await;

        // The payload (the only sender) was dropped with the task without
        // ever being emitted.
        assert!(probe_rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_timeline_finishes_immediately() {
        let mut timeline = Timeline::<u32>::spawn(&Handle::current(), "test", Vec::new());
        tokio::task::yield_now().await;
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(timeline.poll(), vec![TimelineEvent::Finished]);
    }
}
