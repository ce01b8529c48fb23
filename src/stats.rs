//! Per-generation fitness history for the graph panel.

use crate::genetic_algorithm::Statistics;

/// Ring buffer that stores the last N samples of a metric.
pub struct RingBuffer {
    data: Vec<f32>,
    head: usize,
    len: usize,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: vec![0.0; capacity],
            head: 0,
            len: 0,
            capacity,
        }
    }

    pub fn push(&mut self, value: f32) {
        self.data[self.head] = value;
        self.head = (self.head + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
    }

    /// Return samples in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let start = if self.len < self.capacity {
            0
        } else {
            self.head
        };
        (0..self.len).map(move |i| self.data[(start + i) % self.capacity])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last(&self) -> Option<f32> {
        if self.len == 0 {
            None
        } else {
            let idx = (self.head + self.capacity - 1) % self.capacity;
            Some(self.data[idx])
        }
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

/// Min / max / average satiation of each finished generation.
pub struct FitnessHistory {
    pub min: RingBuffer,
    pub max: RingBuffer,
    pub avg: RingBuffer,
    best_ever: f32,
}

impl FitnessHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            min: RingBuffer::new(capacity),
            max: RingBuffer::new(capacity),
            avg: RingBuffer::new(capacity),
            best_ever: 0.0,
        }
    }

    pub fn record(&mut self, stats: &Statistics) {
        self.min.push(stats.min_fitness);
        self.max.push(stats.max_fitness);
        self.avg.push(stats.avg_fitness);
        self.best_ever = self.best_ever.max(stats.max_fitness);
    }

    /// Highest single-animal satiation seen since the last reset.
    pub fn best_ever(&self) -> f32 {
        self.best_ever
    }

    pub fn len(&self) -> usize {
        self.avg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.avg.is_empty()
    }

    /// Called on restart; the old population's curve means nothing now.
    pub fn reset(&mut self) {
        self.min.clear();
        self.max.clear();
        self.avg.clear();
        self.best_ever = 0.0;
    }
}
