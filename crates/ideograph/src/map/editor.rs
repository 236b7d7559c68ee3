//! Editor state binding the store, viewport, and theme together
//!
//! A single owned value carrying everything a presentation adapter needs:
//! the graph, the viewport, the active theme, the edit-in-progress draft,
//! and the most recently composed scene. All mutations are explicit
//! command methods returning success or failure; adapters decide for
//! themselves when to re-render (there is no implicit observation
//! mechanism in the engine).

use tracing::debug;

use crate::core::{MapError, NodeId, Point, Theme};

use super::export;
use super::scene::Scene;
use super::store::MindMap;
use super::viewport::Viewport;

/// An in-progress rename of one node
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    /// The node being edited
    pub node: NodeId,
    /// The label text as typed so far
    pub text: String,
}

/// The complete editor state
#[derive(Debug, Clone, Default)]
pub struct Editor {
    map: MindMap,
    viewport: Viewport,
    theme: Theme,
    draft: Option<Draft>,
    rendered: Option<Scene>,
}

impl Editor {
    /// Create an editor with the default root node and light theme
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor with a specific theme
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// The graph store
    pub fn map(&self) -> &MindMap {
        &self.map
    }

    /// The viewport controller
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The active theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set the active theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Attach a new child to a node; see [`MindMap::add_child`]
    pub fn add_child(&mut self, parent: NodeId, text: &str) -> Result<NodeId, MapError> {
        self.map.add_child(parent, text)
    }

    /// Attach a new child to the currently selected parent
    pub fn add_to_selection(&mut self, text: &str) -> Result<NodeId, MapError> {
        let parent = self.map.selected_parent();
        self.map.add_child(parent, text)
    }

    /// Rename a node; see [`MindMap::rename`]
    pub fn rename(&mut self, id: NodeId, text: &str) -> Result<(), MapError> {
        self.map.rename(id, text)
    }

    /// Remove a non-root node; see [`MindMap::remove`]
    ///
    /// Also discards any draft targeting the removed node.
    pub fn remove(&mut self, id: NodeId) -> Result<(), MapError> {
        self.map.remove(id)?;
        if self.draft.as_ref().is_some_and(|d| d.node == id) {
            self.draft = None;
        }
        Ok(())
    }

    /// Select the node new children attach to
    pub fn select_parent(&mut self, id: NodeId) -> Result<(), MapError> {
        self.map.select_parent(id)
    }

    /// Reset the selection to the root
    pub fn return_to_root(&mut self) {
        self.map.return_to_root();
    }

    /// Zoom in one step
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    /// Zoom out one step
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Start a pan drag
    pub fn begin_drag(&mut self, pointer: Point) {
        self.viewport.begin_drag(pointer);
    }

    /// Continue a pan drag
    pub fn drag_to(&mut self, pointer: Point) {
        self.viewport.drag_to(pointer);
    }

    /// End a pan drag
    pub fn end_drag(&mut self) {
        self.viewport.end_drag();
    }

    /// Start editing a node's label, seeding the draft with its text
    pub fn begin_edit(&mut self, id: NodeId) -> Result<(), MapError> {
        let node = self.map.node(id).ok_or(MapError::NodeNotFound { id })?;
        self.draft = Some(Draft {
            node: id,
            text: node.text.clone(),
        });
        Ok(())
    }

    /// Replace the draft text; no-op when nothing is being edited
    pub fn set_draft_text(&mut self, text: &str) {
        if let Some(draft) = self.draft.as_mut() {
            draft.text = text.to_string();
        }
    }

    /// Apply the draft as a rename and close it
    ///
    /// A blank draft is rejected and stays open, matching the rename
    /// validation; committing with no draft open is a harmless no-op.
    pub fn commit_edit(&mut self) -> Result<(), MapError> {
        let Some(draft) = self.draft.take() else {
            return Ok(());
        };
        match self.map.rename(draft.node, &draft.text) {
            Ok(()) => Ok(()),
            Err(error @ MapError::EmptyLabel) => {
                self.draft = Some(draft);
                Err(error)
            }
            Err(error) => Err(error),
        }
    }

    /// Discard the draft without applying it
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// The in-progress draft, if any
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Compose a fresh scene from the current state and keep it as the
    /// export source
    pub fn render(&mut self) -> &Scene {
        debug!(
            nodes = self.map.node_count(),
            connections = self.map.connection_count(),
            zoom = self.viewport.zoom(),
            "Composed scene"
        );
        self.rendered
            .insert(Scene::compose(&self.map, &self.viewport, self.theme))
    }

    /// The most recently rendered scene, if any
    pub fn rendered(&self) -> Option<&Scene> {
        self.rendered.as_ref()
    }

    /// Export the last rendered scene as a standalone SVG document
    ///
    /// Fails with [`MapError::NothingRendered`] until [`Editor::render`]
    /// has run at least once.
    pub fn export_svg(&self) -> Result<String, MapError> {
        let scene = self.rendered.as_ref().ok_or(MapError::NothingRendered)?;
        Ok(export::write_svg(scene))
    }
}
