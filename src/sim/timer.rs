//! Deferred one-shot actions
//!
//! Each entry carries its fire time and a token that can cancel it. The
//! owner advances its own clock and drains due actions once per tick.

use serde::{Deserialize, Serialize};

/// Cancellation token for a scheduled action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Scheduled<A> {
    id: TimerId,
    fire_at: f64,
    action: A,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<A> {
    /// Seconds since creation. Kept in f64 so long levels still advance at `SIM_DT`.
    now: f64,
    entries: Vec<Scheduled<A>>,
    next_id: u64,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Current queue time (seconds since creation)
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Schedule `action` to fire `delay` seconds from now
    pub fn schedule(&mut self, delay: f32, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Scheduled {
            id,
            fire_at: self.now + f64::from(delay.max(0.0)),
            action,
        });
        id
    }

    /// Returns false if the timer already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance the clock by `dt` and return every action now due,
    /// ordered by fire time, ties in scheduling order.
    pub fn advance(&mut self, dt: f32) -> Vec<A> {
        self.now += f64::from(dt);
        let now = self.now;

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].fire_at <= now {
                due.push(self.entries.remove(i));
            } else {
                i += 1;
            }
        }

        // Ids grow with scheduling order, so they break fire-time ties
        due.sort_by(|a, b| a.fire_at.total_cmp(&b.fire_at).then(a.id.0.cmp(&b.id.0)));
        due.into_iter().map(|e| e.action).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let mut timers = TimerQueue::new();
        timers.schedule(1.0, "respawn");

        assert!(timers.advance(0.5).is_empty());
        assert_eq!(timers.advance(0.5), vec!["respawn"]);
        assert!(timers.is_empty());
        assert!(timers.advance(10.0).is_empty());
    }

    #[test]
    fn test_drains_in_fire_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(3.0, 'c');
        timers.schedule(1.0, 'a');
        timers.schedule(2.0, 'b');
        timers.schedule(1.0, 'd');

        assert_eq!(timers.advance(5.0), vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_cancel() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(1.0, 1);
        timers.schedule(1.0, 2);

        assert!(timers.is_pending(id));
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert_eq!(timers.advance(1.0), vec![2]);
    }

    #[test]
    fn test_schedule_relative_to_now() {
        let mut timers = TimerQueue::new();
        timers.advance(2.0);
        assert_eq!(timers.now(), 2.0);
        timers.schedule(1.0, ());
        assert!(timers.advance(0.75).is_empty());
        assert_eq!(timers.advance(0.25).len(), 1);
    }

    #[test]
    fn test_clock_keeps_advancing_in_long_levels() {
        let mut timers = TimerQueue::new();
        timers.advance(300_000.0);
        let start = timers.now();
        timers.schedule(1.0, "launch");

        let mut fired = Vec::new();
        for _ in 0..121 {
            fired.extend(timers.advance(crate::consts::SIM_DT));
        }
        assert!(timers.now() > start + 1.0);
        assert_eq!(fired, vec!["launch"]);
    }
}
