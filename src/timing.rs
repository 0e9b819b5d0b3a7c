//! Debounce and throttle
//!
//! Time is passed in as milliseconds so the logic stays deterministic; the web
//! layer feeds it `performance.now()` and schedules the timers.

/// Arguments the JS wrappers forward to the wrapped function
pub const MAX_FORWARDED_ARGS: usize = 3;

/// Arguments actually passed: trailing missing values are dropped so the
/// wrapped function sees the caller's arity
pub fn passed_args<T>(args: &[T], is_missing: impl Fn(&T) -> bool) -> &[T] {
    let end = args
        .iter()
        .rposition(|a| !is_missing(a))
        .map_or(0, |i| i + 1);
    &args[..end]
}

/// What to do with a call under [`Throttle::admit`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Run now
    Run,
    /// Schedule one trailing run after `delay_ms`
    Defer { delay_ms: f64 },
    /// A trailing run is already scheduled
    Pending,
}

/// Leading-edge throttle: run now, drop calls until `limit_ms` has passed.
/// [`Throttle::admit`] adds a single trailing run so the last call of a burst is not lost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    limit_ms: f64,
    reopens_at: Option<f64>,
    trailing: bool,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms: limit_ms.max(0.0),
            reopens_at: None,
            trailing: false,
        }
    }

    pub fn limit_ms(&self) -> f64 {
        self.limit_ms
    }

    /// True if the call at `now_ms` should run
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        match self.reopens_at {
            Some(at) if now_ms < at => false,
            _ => {
                self.reopens_at = Some(now_ms + self.limit_ms);
                true
            }
        }
    }

    /// Like [`Throttle::try_acquire`], but a refused call asks for a trailing run
    /// at the end of the window. Only one trailing run is outstanding at a time.
    pub fn admit(&mut self, now_ms: f64) -> Gate {
        match self.reopens_at {
            Some(_) if self.trailing => Gate::Pending,
            Some(at) if now_ms < at => {
                self.trailing = true;
                Gate::Defer {
                    delay_ms: at - now_ms,
                }
            }
            _ => {
                self.reopens_at = Some(now_ms + self.limit_ms);
                Gate::Run
            }
        }
    }

    /// The trailing run scheduled by [`Throttle::admit`] is executing
    pub fn fire_trailing(&mut self, now_ms: f64) {
        self.trailing = false;
        self.reopens_at = Some(now_ms + self.limit_ms);
    }
}

/// A scheduled debounce call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pending {
    pub generation: u64,
    pub deadline: f64,
}

/// Trailing-edge debounce: only the last call in a burst runs, `wait_ms` after it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debounce {
    wait_ms: f64,
    generation: u64,
    pending: bool,
}

impl Debounce {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms: wait_ms.max(0.0),
            generation: 0,
            pending: false,
        }
    }

    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }

    /// Record a call; any earlier pending call is superseded
    pub fn call(&mut self, now_ms: f64) -> Pending {
        self.generation += 1;
        self.pending = true;
        Pending {
            generation: self.generation,
            deadline: now_ms + self.wait_ms,
        }
    }

    /// Timer for `generation` elapsed. True if it is still the latest call.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.pending && generation == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
