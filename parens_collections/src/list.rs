//! A doubly linked list whose nodes live in an index arena.

use std::error;
use std::fmt;
use std::io::{self, Write};
use std::iter::FromIterator;

/// A handle naming a node of one particular `LinkedList`.
///
/// A `NodeId` is only meaningful while the node it names is still in the list
/// that handed it out. Once that node is removed its slot may be reused by a
/// later insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single value with links to its neighbours.
#[derive(Clone, Debug)]
pub struct Node<T> {
    data: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(data: T) -> Node<T> {
        Node {
            data: data,
            prev: None,
            next: None,
        }
    }

    /// Get this node's value.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Replace this node's value.
    pub fn set_data(&mut self, data: T) {
        self.data = data;
    }

    /// The node before this one, if any.
    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    /// The node after this one, if any.
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// A positional operation was given an index past the end of the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    op: &'static str,
    index: usize,
    len: usize,
}

impl OutOfRange {
    fn new(op: &'static str, index: usize, len: usize) -> OutOfRange {
        OutOfRange {
            op: op,
            index: index,
            len: len,
        }
    }

    /// The name of the operation that failed.
    pub fn op(&self) -> &'static str {
        self.op
    }

    /// The offending index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The length of the list at the time of the failure.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "index {} out of range for {} (len {})",
            self.index,
            self.op,
            self.len
        )
    }
}

impl error::Error for OutOfRange {
    fn description(&self) -> &str {
        "index out of range"
    }
}

/// A doubly linked list.
///
/// Nodes are stored in a slot arena and link to each other by `NodeId`.
/// Freed slots are recycled by later insertions. The list owns every value it
/// holds: removing a node or clearing the list drops its value.
#[derive(Clone, Debug)]
pub struct LinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> LinkedList<T> {
        LinkedList::new()
    }
}

impl<T> LinkedList<T> {
    /// Construct a new, empty list.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            slots: vec![],
            free: vec![],
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Get the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first node, if any.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// The last node, if any.
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Get the node named by `id`, or `None` if it is not in this list.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Get the node named by `id` mutably, or `None` if it is not in this
    /// list.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Get the node at index `i`.
    ///
    /// Walks from whichever end of the list is closer to `i`.
    pub fn goto_node(&self, i: usize) -> Result<NodeId, OutOfRange> {
        self.locate("goto_node", i)
    }

    /// Get a reference to the value at index `i`.
    pub fn get(&self, i: usize) -> Result<&T, OutOfRange> {
        let id = self.locate("get", i)?;
        self.node(id)
            .map(Node::data)
            .ok_or_else(|| OutOfRange::new("get", i, self.len))
    }

    /// The first value, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.node(id)).map(Node::data)
    }

    /// The last value, if any.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.node(id)).map(Node::data)
    }

    /// Link a new node holding `data` after the tail.
    pub fn append(&mut self, data: T) -> NodeId {
        let id = self.alloc(Node::new(data));
        match self.tail {
            None => self.head = Some(id),
            Some(tail) => {
                self.set_next(tail, Some(id));
                self.set_prev(id, Some(tail));
            }
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    /// Link a new node holding `data` before the head.
    pub fn push(&mut self, data: T) -> NodeId {
        let id = self.alloc(Node::new(data));
        match self.head {
            None => self.tail = Some(id),
            Some(head) => {
                self.set_prev(head, Some(id));
                self.set_next(id, Some(head));
            }
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Insert a new node holding `data` so that it ends up at index `i`.
    ///
    /// `i` may equal `len()`, which appends.
    pub fn add(&mut self, i: usize, data: T) -> Result<NodeId, OutOfRange> {
        if i > self.len {
            return Err(OutOfRange::new("add", i, self.len));
        }
        if i == 0 {
            return Ok(self.push(data));
        }
        if i == self.len {
            return Ok(self.append(data));
        }

        let after = self.locate("add", i)?;
        let before = self.node(after).and_then(Node::prev);

        let id = self.alloc(Node {
            data: data,
            prev: before,
            next: Some(after),
        });
        if let Some(before) = before {
            self.set_next(before, Some(id));
        }
        self.set_prev(after, Some(id));
        self.len += 1;
        Ok(id)
    }

    /// Unlink the node at index `i` and return its value.
    pub fn remove(&mut self, i: usize) -> Result<T, OutOfRange> {
        let len = self.len;
        let id = self.locate("remove", i)?;
        self.unlink(id).ok_or_else(|| OutOfRange::new("remove", i, len))
    }

    /// Unlink the head and return its value, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Unlink the tail and return its value, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Write each node on its own line as `Node(x)`, followed by its
    /// neighbours' values when it has them.
    pub fn write_nodes<W>(&self, to: &mut W) -> io::Result<()>
    where
        W: Write,
        T: fmt::Display,
    {
        let mut cur = self.head;
        while let Some(node) = cur.and_then(|id| self.node(id)) {
            write!(to, "Node({})", node.data)?;
            if let Some(prev) = node.prev.and_then(|id| self.node(id)) {
                write!(to, " prev: {}", prev.data)?;
            }
            if let Some(next) = node.next.and_then(|id| self.node(id)) {
                write!(to, " next: {}", next.data)?;
            }
            writeln!(to)?;
            cur = node.next;
        }
        Ok(())
    }

    fn locate(&self, op: &'static str, i: usize) -> Result<NodeId, OutOfRange> {
        if i >= self.len {
            return Err(OutOfRange::new(op, i, self.len));
        }

        let found = if i < self.len / 2 {
            self.walk(self.head, i, Node::next)
        } else {
            self.walk(self.tail, self.len - 1 - i, Node::prev)
        };
        found.ok_or_else(|| OutOfRange::new(op, i, self.len))
    }

    fn walk<F>(&self, start: Option<NodeId>, steps: usize, step: F) -> Option<NodeId>
    where
        F: Fn(&Node<T>) -> Option<NodeId>,
    {
        let mut cur = start;
        for _ in 0..steps {
            cur = cur.and_then(|id| self.node(id)).and_then(|node| step(node));
        }
        cur
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn unlink(&mut self, id: NodeId) -> Option<T> {
        let node = self.slots.get_mut(id.0).and_then(Option::take)?;
        self.free.push(id.0);

        match node.prev {
            Some(prev) => self.set_next(prev, node.next),
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.set_prev(next, node.prev),
            None => self.tail = node.prev,
        }

        self.len -= 1;
        Some(node.data)
    }

    fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.next = next;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> LinkedList<T> {
        let mut list = LinkedList::new();
        list.extend(iterable);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for item in iterable {
            self.append(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator over a list's values, head to tail. See `LinkedList::iter`.
#[derive(Debug)]
pub struct Iter<'a, T: 'a> {
    list: &'a LinkedList<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let list = self.list;
        let node = self.next.and_then(|id| list.node(id))?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
