//! Recency List Module
//!
//! Doubly linked list over an arena of slots, used to track access order for
//! LRU eviction. Links are slot indices rather than pointers.

// == Slot Id ==
/// Stable position of an element in a [`RecencyList`].
///
/// Valid until the element is removed; removed slots are recycled.
pub type SlotId = usize;

#[derive(Debug)]
struct Node<T> {
    value: T,
    /// Neighbour towards the front (more recent)
    prev: Option<SlotId>,
    /// Neighbour towards the back (less recent)
    next: Option<SlotId>,
}

// == Recency List ==
/// Access-ordered sequence with O(1) relocation and removal.
///
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a value as the most recently used element.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        self.link_front(id);
        self.len += 1;
        id
    }

    // == Move To Front ==
    /// Marks an element as most recently used.
    ///
    /// Returns false if `id` is not occupied.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.is_occupied(id) {
            return false;
        }
        if self.head != Some(id) {
            self.unlink(id);
            self.link_front(id);
        }
        true
    }

    // == Remove ==
    /// Removes an arbitrary element, returning its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.is_occupied(id) {
            return None;
        }
        self.unlink(id);
        let node = self.slots[id].take()?;
        self.free.push(id);
        self.len -= 1;
        Some(node.value)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used element.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Returns the least recently used element without removing it.
    pub fn peek_back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the element stored at `id`.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots
            .get(id)
            .and_then(Option::as_ref)
            .map(|node| &node.value)
    }

    /// Iterates from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // == Clear ==
    /// Drops every element and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn is_occupied(&self, id: SlotId) -> bool {
        matches!(self.slots.get(id), Some(Some(_)))
    }

    fn node_mut(&mut self, id: SlotId) -> &mut Node<T> {
        self.slots[id]
            .as_mut()
            .unwrap_or_else(|| unreachable!("recency slot {} is vacant", id))
    }

    /// Attaches a detached, occupied slot at the front.
    fn link_front(&mut self, id: SlotId) {
        let old_head = self.head;
        {
            let node = self.node_mut(id);
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(h) => self.node_mut(h).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Detaches an occupied slot from its neighbours.
    fn unlink(&mut self, id: SlotId) {
        let (prev, next) = {
            let node = self.node_mut(id);
            (node.prev.take(), node.next.take())
        };
        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.tail = prev,
        }
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: Option<SlotId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.slots.get(id)?.as_ref()?;
        self.cursor = node.next;
        Some(&node.value)
    }
}
