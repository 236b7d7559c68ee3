//! Graph store for the mind-map tree
//!
//! Owns the nodes, the connections, and the selected-parent reference, and
//! enforces the structural invariants: a single immutable root, connection
//! endpoints that exist at creation time, and monotonically assigned ids
//! that are never reused. Nodes and connections are only ever created as a
//! pair by [`MindMap::add_child`] (the root excepted) and only destroyed by
//! [`MindMap::remove`], which cascades to incident connections.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::layout;
use crate::core::{Connection, ConnectionId, MapError, Node, NodeId, Point};

/// Id of the root node, fixed for the lifetime of a diagram
pub const ROOT_ID: NodeId = NodeId(1);

/// Label of the root node created by [`MindMap::new`]
pub const DEFAULT_ROOT_LABEL: &str = "Central Idea";

/// Position of the root node created by [`MindMap::new`]
pub const DEFAULT_ROOT_POSITION: Point = Point { x: 400.0, y: 300.0 };

/// The mind-map graph store
///
/// Nodes are indexed by id; insertion order is kept separately so
/// iteration (and therefore scene composition) is deterministic.
#[derive(Debug, Clone)]
pub struct MindMap {
    /// Nodes indexed by id
    nodes: HashMap<NodeId, Node>,
    /// Node ids in insertion order
    node_order: Vec<NodeId>,
    /// Connections in insertion order
    connections: Vec<Connection>,
    /// Next node id to assign; never decreases
    next_node_id: u32,
    /// Next connection id to assign; never decreases
    next_connection_id: u32,
    /// The node new children attach to
    selected_parent: NodeId,
}

impl MindMap {
    /// Create a store holding only the default root node
    pub fn new() -> Self {
        let root = Node {
            id: ROOT_ID,
            text: DEFAULT_ROOT_LABEL.to_string(),
            position: DEFAULT_ROOT_POSITION,
            is_root: true,
        };
        let mut nodes = HashMap::new();
        nodes.insert(ROOT_ID, root);

        Self {
            nodes,
            node_order: vec![ROOT_ID],
            connections: Vec::new(),
            next_node_id: 2,
            next_connection_id: 1,
            selected_parent: ROOT_ID,
        }
    }

    /// Create a store with a custom root label and position
    ///
    /// Rejects empty/whitespace-only labels like every other text input.
    pub fn with_root(text: &str, position: Point) -> Result<Self, MapError> {
        if text.trim().is_empty() {
            return Err(MapError::EmptyLabel);
        }
        let mut map = Self::new();
        if let Some(root) = map.nodes.get_mut(&ROOT_ID) {
            root.text = text.to_string();
            root.position = position;
        }
        Ok(map)
    }

    /// Attach a new child node to `parent`
    ///
    /// The child's position comes from the radial placement of the
    /// parent's next free sector. Creates the node and its incoming
    /// connection as a pair and returns the new node's id.
    pub fn add_child(&mut self, parent: NodeId, text: &str) -> Result<NodeId, MapError> {
        if text.trim().is_empty() {
            return Err(MapError::EmptyLabel);
        }
        let parent_node = self
            .nodes
            .get(&parent)
            .ok_or(MapError::NodeNotFound { id: parent })?;

        let position = layout::place(parent_node.position, self.child_count(parent));

        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.insert(
            id,
            Node {
                id,
                text: text.to_string(),
                position,
                is_root: false,
            },
        );
        self.node_order.push(id);

        let connection_id = ConnectionId(self.next_connection_id);
        self.next_connection_id += 1;
        self.connections.push(Connection {
            id: connection_id,
            from: parent,
            to: id,
        });

        debug!(
            node = %id,
            parent = %parent,
            x = position.x,
            y = position.y,
            "Added child node"
        );
        Ok(id)
    }

    /// Replace a node's label in place; id and position are untouched
    pub fn rename(&mut self, id: NodeId, text: &str) -> Result<(), MapError> {
        if text.trim().is_empty() {
            return Err(MapError::EmptyLabel);
        }
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(MapError::NodeNotFound { id })?;
        node.text = text.to_string();
        trace!(node = %id, "Renamed node");
        Ok(())
    }

    /// Remove a non-root node and every connection incident to it
    ///
    /// This is a shallow delete: connections where the node is either
    /// endpoint disappear, but its descendants stay in the diagram as
    /// orphans. If the removed node was the selected parent, selection
    /// falls back to the root.
    pub fn remove(&mut self, id: NodeId) -> Result<(), MapError> {
        let node = self.nodes.get(&id).ok_or(MapError::NodeNotFound { id })?;
        if node.is_root {
            return Err(MapError::RootImmutable { id });
        }

        if self.selected_parent == id {
            self.selected_parent = ROOT_ID;
        }

        self.nodes.remove(&id);
        self.node_order.retain(|n| *n != id);
        let before = self.connections.len();
        self.connections.retain(|c| c.from != id && c.to != id);

        debug!(
            node = %id,
            removed_connections = before - self.connections.len(),
            "Removed node"
        );
        Ok(())
    }

    /// Set the selected parent (the node new children attach to)
    pub fn select_parent(&mut self, id: NodeId) -> Result<(), MapError> {
        if !self.nodes.contains_key(&id) {
            return Err(MapError::NodeNotFound { id });
        }
        self.selected_parent = id;
        trace!(node = %id, "Selected parent");
        Ok(())
    }

    /// Reset the selected parent to the root
    pub fn return_to_root(&mut self) {
        self.selected_parent = ROOT_ID;
    }

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// The root node
    pub fn root(&self) -> &Node {
        // The root is created at initialization and can never be removed,
        // so the lookup cannot fail.
        self.nodes
            .get(&ROOT_ID)
            .unwrap_or_else(|| unreachable!("root node always exists"))
    }

    /// Iterate over nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.node_order.iter().filter_map(move |id| self.nodes.get(id))
    }

    /// Iterate over connections in insertion order
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Number of children attached to a node
    pub fn child_count(&self, id: NodeId) -> usize {
        self.connections.iter().filter(|c| c.from == id).count()
    }

    /// Ids of a node's children, in attachment order
    pub fn children_of(&self, id: NodeId) -> Vec<NodeId> {
        self.connections
            .iter()
            .filter(|c| c.from == id)
            .map(|c| c.to)
            .collect()
    }

    /// The node new children will attach to next
    pub fn selected_parent(&self) -> NodeId {
        self.selected_parent
    }
}

impl Default for MindMap {
    fn default() -> Self {
        Self::new()
    }
}
