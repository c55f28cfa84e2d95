//! Tick-driven task scheduler.
//!
//! Replaces run-loop timers: one-shot and repeating tasks are keyed by tick,
//! and the engine pulls due tasks once per tick. Cancelling a handle that has
//! already fired or been cancelled is a no-op.

use wizard_core::types::ActorHandle;

/// Work the engine schedules for later ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Fire one enemy projectile at the viewer.
    SpawnEnemy,
    /// Remove an actor whose lifespan ran out.
    Expire(ActorHandle),
}

/// Cancel token for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    handle: TaskHandle,
    due_tick: u64,
    /// `Some` for repeating tasks.
    interval: Option<u64>,
    task: T,
}

/// Pending tasks ordered by due tick, then by scheduling order.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: u64,
    next_handle: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: 0,
            next_handle: 0,
            entries: Vec::new(),
        }
    }
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler tick.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Run `task` once, `delay_ticks` from now (at least one tick).
    pub fn schedule_once(&mut self, delay_ticks: u64, task: T) -> TaskHandle {
        self.push(delay_ticks.max(1), None, task)
    }

    /// Run `task` every `interval_ticks`, first firing one interval from now.
    pub fn schedule_repeating(&mut self, interval_ticks: u64, task: T) -> TaskHandle {
        let interval = interval_ticks.max(1);
        self.push(interval, Some(interval), task)
    }

    /// Cancel a task. Returns whether anything was still pending.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance one tick and return the tasks that fell due, in order.
    ///
    /// Repeating tasks are rescheduled before they are returned, so a task
    /// may be cancelled while the caller processes the batch.
    pub fn advance(&mut self) -> Vec<T> {
        self.now += 1;
        let now = self.now;

        let mut due: Vec<(u64, TaskHandle, T)> = Vec::new();
        self.entries.retain_mut(|entry| {
            if entry.due_tick > now {
                return true;
            }
            due.push((entry.due_tick, entry.handle, entry.task.clone()));
            match entry.interval {
                Some(interval) => {
                    entry.due_tick += interval;
                    true
                }
                None => false,
            }
        });

        due.sort_by_key(|(tick, handle, _)| (*tick, *handle));
        due.into_iter().map(|(_, _, task)| task).collect()
    }

    fn push(&mut self, delay: u64, interval: Option<u64>, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            due_tick: self.now + delay,
            interval,
            task,
        });
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run_ticks<T: Clone>(scheduler: &mut Scheduler<T>, ticks: u64) -> Vec<(u64, T)> {
        let mut fired = Vec::new();
        for _ in 0..ticks {
            for task in scheduler.advance() {
                fired.push((scheduler.now(), task));
            }
        }
        fired
    }

    #[test]
    fn once_fires_after_delay_and_is_gone() {
        let mut s = Scheduler::new();
        let h = s.schedule_once(3, "boom");
        assert_eq!(run_ticks(&mut s, 5), vec![(3, "boom")]);
        assert!(!s.is_scheduled(h));
        assert!(s.is_empty());
    }

    #[test]
    fn zero_delay_fires_next_tick() {
        let mut s = Scheduler::new();
        s.schedule_once(0, 1);
        assert_eq!(s.advance(), vec![1]);
    }

    #[test]
    fn repeating_fires_every_interval() {
        let mut s = Scheduler::new();
        s.schedule_repeating(4, 'x');
        let ticks: Vec<u64> = run_ticks(&mut s, 12).into_iter().map(|(t, _)| t).collect();
        assert_eq!(ticks, vec![4, 8, 12]);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut s = Scheduler::new();
        let h = s.schedule_repeating(2, ());
        assert!(s.cancel(h));
        assert!(!s.cancel(h));
        assert!(run_ticks(&mut s, 10).is_empty());
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let mut s = Scheduler::new();
        let h = s.schedule_once(1, ());
        s.advance();
        assert!(!s.cancel(h));
    }

    #[test]
    fn same_tick_tasks_keep_schedule_order() {
        let mut s = Scheduler::new();
        s.schedule_once(2, "first");
        s.schedule_once(2, "second");
        s.schedule_once(1, "earlier");
        assert_eq!(s.advance(), vec!["earlier"]);
        assert_eq!(s.advance(), vec!["first", "second"]);
    }

    proptest! {
        #[test]
        fn cancelled_tasks_never_fire(
            delays in prop::collection::vec(1u64..20, 1..16),
            cancel_mask in prop::collection::vec(any::<bool>(), 16),
        ) {
            let mut s = Scheduler::new();
            let mut kept = Vec::new();
            for (i, delay) in delays.iter().enumerate() {
                let h = s.schedule_once(*delay, i);
                if cancel_mask[i] {
                    s.cancel(h);
                } else {
                    kept.push(i);
                }
            }
            let mut fired: Vec<usize> = run_ticks(&mut s, 25).into_iter().map(|(_, i)| i).collect();
            fired.sort_unstable();
            prop_assert_eq!(fired, kept);
            prop_assert!(s.is_empty());
        }
    }
}
