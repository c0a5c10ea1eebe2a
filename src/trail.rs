use glam::Vec3;

/// Minimum world-space movement between frames before a vertex sheds a
/// trail sample.
pub const MOVE_THRESHOLD: f32 = 0.5;

/// Seconds a sample stays alive before eviction.
pub const TRAIL_LIFE: f32 = 3.5;

/// One world-space sample point, tagged with its creation time in seconds
/// since sketch start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub position: Vec3,
    pub created_at: f32,
}

impl TrailSample {
    pub fn age(&self, now: f32) -> f32 {
        now - self.created_at
    }
}

/// Time-windowed, append-ordered collection of samples shed by moving
/// vertices. Unbounded except by age-based eviction; the buffer owns its
/// samples outright, callers only append and trigger eviction.
#[derive(Debug, Default)]
pub struct TrailBuffer {
    samples: Vec<TrailSample>,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample at `current` if the vertex moved further than
    /// [`MOVE_THRESHOLD`] since `previous`. Returns whether a sample was
    /// recorded.
    pub fn record_if_moved(&mut self, current: Vec3, previous: Vec3, now: f32) -> bool {
        if current.distance(previous) > MOVE_THRESHOLD {
            self.samples.push(TrailSample {
                position: current,
                created_at: now,
            });
            true
        } else {
            false
        }
    }

    /// Drop every sample older than [`TRAIL_LIFE`]. A retain pass over the
    /// whole buffer; never removes mid-iteration, so nothing gets skipped.
    pub fn evict_expired(&mut self, now: f32) {
        self.samples.retain(|s| s.age(now) <= TRAIL_LIFE);
    }

    /// Surviving samples in append order.
    pub fn samples(&self) -> &[TrailSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
