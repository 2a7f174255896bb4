use crate::index::{IndexType, NodeIndex};

/// Node of the red-black tree
#[derive(Debug, Clone)]
pub struct Node<T, Ix> {
    /// Left child, the sentinel when missing
    pub left: NodeIndex<Ix>,
    /// Right child, the sentinel when missing
    pub right: NodeIndex<Ix>,
    /// Parent, the sentinel for the root.
    ///
    /// The sentinel's own parent points at the root between operations.
    pub parent: NodeIndex<Ix>,
    /// Color of the node
    pub color: Color,

    /// Stored key or key/value pair, `None` for the sentinel and freed slots
    pub payload: Option<T>,
}

impl<T, Ix> Node<T, Ix>
where
    Ix: IndexType,
{
    /// Create the black sentinel node
    pub fn new_sentinel() -> Self {
        Node {
            left: NodeIndex::sentinel(),
            right: NodeIndex::sentinel(),
            parent: NodeIndex::sentinel(),
            color: Color::Black,
            payload: None,
        }
    }

    /// Empty a freed slot, chaining it to the next free slot through `left`.
    pub fn vacate(&mut self, next_free: NodeIndex<Ix>) -> Option<T> {
        self.left = next_free;
        self.right = NodeIndex::sentinel();
        self.parent = NodeIndex::sentinel();
        self.color = Color::Black;
        self.payload.take()
    }

    /// Create a new red leaf holding `payload`
    pub fn new_leaf(payload: T) -> Self {
        Node {
            left: NodeIndex::sentinel(),
            right: NodeIndex::sentinel(),
            parent: NodeIndex::sentinel(),
            color: Color::Red,
            payload: Some(payload),
        }
    }
}

// Convenient getter/setter methods
impl<T, Ix> Node<T, Ix>
where
    Ix: IndexType,
{
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn left(&self) -> NodeIndex<Ix> {
        self.left
    }

    pub fn right(&self) -> NodeIndex<Ix> {
        self.right
    }

    pub fn parent(&self) -> NodeIndex<Ix> {
        self.parent
    }

    /// `true` for the sentinel and for freed slots.
    pub fn is_vacant(&self) -> bool {
        self.payload.is_none()
    }

    pub fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    pub fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn payload_mut(&mut self) -> Option<&mut T> {
        self.payload.as_mut()
    }

    pub fn set_color(color: Color) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            node.color = color;
        }
    }

    pub fn set_left(left: NodeIndex<Ix>) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            node.left = left;
        }
    }

    pub fn set_right(right: NodeIndex<Ix>) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            node.right = right;
        }
    }

    pub fn set_parent(parent: NodeIndex<Ix>) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            node.parent = parent;
        }
    }
}

/// The color of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Red node
    Red,
    /// Black node
    Black,
}
