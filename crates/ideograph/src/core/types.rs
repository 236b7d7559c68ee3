//! Core type definitions for the mind-map engine
//!
//! This module contains the fundamental types used throughout Ideograph:
//! node and connection identifiers, diagram-space points, themes, and the
//! color palette derived from a theme.

use std::fmt;
use std::ops::{Add, Sub};

/// Identifier of a node in the diagram
///
/// Ids are assigned monotonically by the store and are never reused, even
/// after the node they referred to has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a connection (parent → child edge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u32);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in diagram space (or, for viewport offsets, in screen pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin, `(0, 0)`
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A labeled node in the diagram
///
/// Exactly one node is the root; it is created when the store is
/// initialized and can never be removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique identifier for the node
    pub id: NodeId,
    /// Display label; never empty or whitespace-only
    pub text: String,
    /// Position in diagram space
    pub position: Point,
    /// True for the single root node
    pub is_root: bool,
}

/// A directed parent → child edge linking two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    /// Unique identifier for the connection
    pub id: ConnectionId,
    /// Parent node id
    pub from: NodeId,
    /// Child node id
    pub to: NodeId,
}

/// Color theme for the live view and the exported document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Theme {
    /// Light background, slate strokes
    #[default]
    Light,
    /// Dark background, lighter strokes
    Dark,
}

impl Theme {
    /// Parse a theme name ("light" or "dark")
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Returns true for the dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The opposite theme
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Stroke/fill colors selected by the active theme
///
/// Both the live scene and the exported SVG draw from the same palette so
/// the export reproduces the visible diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Stroke color for connection lines
    pub connection_stroke: &'static str,
    /// Stroke color for node outlines
    pub node_stroke: &'static str,
    /// Fill for the root node
    pub root_fill: &'static str,
    /// Fill for non-root nodes
    pub branch_fill: &'static str,
    /// Fill for the currently selected parent node
    pub selected_fill: &'static str,
    /// Fill for node labels
    pub label_fill: &'static str,
    /// Fill for editor-only control affordances
    pub control_fill: &'static str,
}

impl Palette {
    /// The palette for a theme
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                connection_stroke: "#94a3b8",
                node_stroke: "#94a3b8",
                root_fill: "#e2e8f0",
                branch_fill: "#f1f5f9",
                selected_fill: "#818cf8",
                label_fill: "#334155",
                control_fill: "#e2e8f0",
            },
            Theme::Dark => Palette {
                connection_stroke: "#475569",
                node_stroke: "#64748b",
                root_fill: "#475569",
                branch_fill: "#334155",
                selected_fill: "#6366f1",
                label_fill: "#e2e8f0",
                control_fill: "#475569",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parsing() {
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str("DARK"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("sepia"), None);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn test_theme_display() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 2.0);
        assert_eq!(a + b, Point::new(4.0, 6.0));
        assert_eq!(a - b, Point::new(2.0, 2.0));
        assert_eq!(Point::ORIGIN, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(NodeId(7).to_string(), "7");
        assert_eq!(ConnectionId(3).to_string(), "3");
    }

    #[test]
    fn test_palettes_differ_by_theme() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.branch_fill, dark.branch_fill);
        assert_ne!(light.label_fill, dark.label_fill);
    }
}
