//! A first-in-first-out queue built on `LinkedList`.

use list::LinkedList;
use std::iter::FromIterator;

/// A FIFO queue. Items are enqueued at the tail of the underlying list and
/// dequeued from its head.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Queue<T> {
        Queue::new()
    }
}

impl<T> Queue<T> {
    /// Construct a new, empty queue.
    pub fn new() -> Queue<T> {
        Queue {
            list: LinkedList::new(),
        }
    }

    /// Insert `item` at the rear of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.list.append(item);
    }

    /// Remove the item at the front of the queue, or `None` if it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Peek at the front item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Get the number of queued items.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Is the queue empty?
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Drop every queued item.
    pub fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Queue<T> {
        let mut queue = Queue::new();
        queue.extend(iterable);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for item in iterable {
            self.enqueue(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Queue;

    #[test]
    fn dequeues_in_enqueue_order() {
        let mut queue = Queue::new();
        assert_eq!(queue.dequeue(), None);

        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.dequeue(), Some(1));

        queue.enqueue(3);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn collect_then_drain() {
        let mut queue: Queue<_> = "abc".chars().collect();
        let mut dequeued = String::new();
        while let Some(c) = queue.dequeue() {
            dequeued.push(c);
        }
        assert_eq!(dequeued, "abc");
    }

    #[test]
    fn clear() {
        let mut queue: Queue<_> = "(()".chars().collect();
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
    }
}
