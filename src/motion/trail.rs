use std::collections::VecDeque;

/// Bounded FIFO of trail markers. Pushing at capacity hands back the oldest
/// marker so the caller can detach it.
#[derive(Debug)]
pub struct TrailQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> TrailQueue<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    #[must_use = "the evicted marker still has to be detached"]
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// Runs `attach` first and only queues `item` once it is attached. A
    /// marker that failed to attach is handed back and takes no slot.
    pub fn admit<F>(&mut self, item: T, attach: F) -> Result<Option<T>, T>
    where
        F: FnOnce(&T) -> bool,
    {
        if !attach(&item) {
            return Err(item);
        }
        Ok(self.push(item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    pub size_px: u32,
    pub opacity: f64,
}

pub const DOT_STYLE: DotStyle = DotStyle {
    size_px: 8,
    opacity: 0.6,
};

pub fn dot_css(client_x: i32, client_y: i32) -> String {
    format!(
        "position: fixed; width: {size}px; height: {size}px; border-radius: 50%; \
         background: var(--primary); left: {client_x}px; top: {client_y}px; \
         pointer-events: none; opacity: {opacity}; transition: all 0.5s ease-out; \
         z-index: 9999;",
        size = DOT_STYLE.size_px,
        opacity = DOT_STYLE.opacity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_never_exceeds_capacity_and_evicts_oldest_first() {
        let mut queue = TrailQueue::new(20);
        let mut evicted = Vec::new();

        for dot in 0..55 {
            if let Some(old) = queue.push(dot) {
                evicted.push(old);
            }
            assert!(queue.len() <= 20);
        }

        assert_eq!(evicted, (0..35).collect::<Vec<_>>());
        assert_eq!(queue.drain().collect::<Vec<_>>(), (35..55).collect::<Vec<_>>());
        assert!(queue.is_empty());
    }

    #[test]
    fn nothing_is_evicted_below_capacity() {
        let mut queue = TrailQueue::new(3);
        assert_eq!(queue.push('a'), None);
        assert_eq!(queue.push('b'), None);
        assert_eq!(queue.push('c'), None);
        assert_eq!(queue.push('d'), Some('a'));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut queue = TrailQueue::new(0);
        assert_eq!(queue.capacity(), 1);
        assert_eq!(queue.push(1), None);
        assert_eq!(queue.push(2), Some(1));
    }

    #[test]
    fn failed_attach_takes_no_slot() {
        let mut queue = TrailQueue::new(2);
        assert_eq!(queue.admit('a', |_| true), Ok(None));
        assert_eq!(queue.admit('b', |_| true), Ok(None));

        assert_eq!(queue.admit('x', |_| false), Err('x'));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.admit('c', |_| true), Ok(Some('a')));
        assert_eq!(queue.drain().collect::<Vec<_>>(), vec!['b', 'c']);
    }

    #[test]
    fn dot_is_placed_at_the_pointer() {
        let css = dot_css(120, 45);
        assert!(css.contains("left: 120px;"));
        assert!(css.contains("top: 45px;"));
        assert!(css.contains("width: 8px;"));
        assert!(css.contains("opacity: 0.6;"));
    }
}
