//! Command-script adapter
//!
//! A line-oriented command language representing the already-normalized
//! user actions of the editor: attach, rename, remove, select, zoom, pan
//! drags, and theme switches. Statements are separated by newlines or
//! `;`, and `#` starts a comment line. Statement splitting happens
//! before parsing, so labels cannot contain `;` or `"`.
//!
//! Running a script applies the commands strictly in order. Syntax errors
//! abort before anything is applied; semantic rejections (blank labels,
//! unknown ids, deleting the root) are recorded and logged without
//! stopping the run, mirroring how an interactive surface rejects a
//! single action and carries on.

mod parser;

use std::fmt;

use tracing::{debug, warn};

use crate::core::{MapError, NodeId, Point, Theme};
use crate::map::Editor;

/// One editor action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Attach a new child node to `parent`
    Add { parent: NodeId, text: String },
    /// Replace a node's label
    Rename { id: NodeId, text: String },
    /// Remove a non-root node
    Remove { id: NodeId },
    /// Set the selected parent
    Select { id: NodeId },
    /// Reset the selection to the root
    ReturnToRoot,
    /// Zoom in one step
    ZoomIn,
    /// Zoom out one step
    ZoomOut,
    /// Start a pan drag at a pointer position
    DragBegin { at: Point },
    /// Move the pan drag to a pointer position
    DragTo { at: Point },
    /// End the pan drag
    DragEnd,
    /// Switch the color theme
    SetTheme { theme: Theme },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add { parent, text } => write!(f, "add {} \"{}\"", parent, text),
            Command::Rename { id, text } => write!(f, "rename {} \"{}\"", id, text),
            Command::Remove { id } => write!(f, "remove {}", id),
            Command::Select { id } => write!(f, "select {}", id),
            Command::ReturnToRoot => write!(f, "root"),
            Command::ZoomIn => write!(f, "zoom in"),
            Command::ZoomOut => write!(f, "zoom out"),
            Command::DragBegin { at } => write!(f, "drag begin {} {}", at.x, at.y),
            Command::DragTo { at } => write!(f, "drag to {} {}", at.x, at.y),
            Command::DragEnd => write!(f, "drag end"),
            Command::SetTheme { theme } => write!(f, "theme {}", theme),
        }
    }
}

/// A command that was parsed but rejected by the engine
#[derive(Debug)]
pub struct Rejection {
    /// Zero-based position of the command in the script
    pub index: usize,
    /// The rejected command
    pub command: Command,
    /// Why the engine refused it
    pub error: MapError,
}

/// Outcome of running a script
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of commands that applied successfully
    pub applied: usize,
    /// Commands the engine rejected, in script order
    pub rejections: Vec<Rejection>,
}

impl RunReport {
    /// True when every command applied
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }
}

/// Parse one command
pub fn parse_command(input: &str) -> Result<Command, MapError> {
    parser::parse_statement(input.trim()).map_err(MapError::script)
}

/// Parse a whole script into its commands
pub fn parse_script(input: &str) -> Result<Vec<Command>, MapError> {
    let mut commands = Vec::new();
    for (line_number, line) in input.lines().enumerate() {
        for statement in line.split(';') {
            let statement = statement.trim();
            if statement.is_empty() || statement.starts_with('#') {
                continue;
            }
            let command = parser::parse_statement(statement).map_err(|message| {
                MapError::script(format!("line {}: {}", line_number + 1, message))
            })?;
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parse and apply a script against an editor
///
/// The editor re-renders after every command so the export snapshot
/// always matches the state the script produced.
pub fn run_script(editor: &mut Editor, input: &str) -> Result<RunReport, MapError> {
    let commands = parse_script(input)?;
    debug!(commands = commands.len(), "Running script");

    let mut report = RunReport::default();
    for (index, command) in commands.into_iter().enumerate() {
        match apply(editor, &command) {
            Ok(()) => report.applied += 1,
            Err(error) => {
                warn!(%error, command = %command, "Command rejected");
                report.rejections.push(Rejection {
                    index,
                    command,
                    error,
                });
            }
        }
        editor.render();
    }
    Ok(report)
}

fn apply(editor: &mut Editor, command: &Command) -> Result<(), MapError> {
    match command {
        Command::Add { parent, text } => editor.add_child(*parent, text).map(|_| ()),
        Command::Rename { id, text } => editor.rename(*id, text),
        Command::Remove { id } => editor.remove(*id),
        Command::Select { id } => editor.select_parent(*id),
        Command::ReturnToRoot => {
            editor.return_to_root();
            Ok(())
        }
        Command::ZoomIn => {
            editor.zoom_in();
            Ok(())
        }
        Command::ZoomOut => {
            editor.zoom_out();
            Ok(())
        }
        Command::DragBegin { at } => {
            editor.begin_drag(*at);
            Ok(())
        }
        Command::DragTo { at } => {
            editor.drag_to(*at);
            Ok(())
        }
        Command::DragEnd => {
            editor.end_drag();
            Ok(())
        }
        Command::SetTheme { theme } => {
            editor.set_theme(*theme);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::ROOT_ID;

    #[test]
    fn test_parse_script_splits_lines_and_semicolons() {
        let commands = parse_script("add 1 \"A\"; add 1 \"B\"\nzoom in").unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2], Command::ZoomIn);
    }

    #[test]
    fn test_parse_script_skips_comments_and_blanks() {
        let script = "# build a small map\n\nadd 1 \"A\"\n   \n# done\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn test_parse_script_reports_line_numbers() {
        let error = parse_script("add 1 \"A\"\nnonsense\n").unwrap_err();
        assert!(error.to_string().contains("line 2"));
    }

    #[test]
    fn test_run_script_applies_in_order() {
        let mut editor = Editor::new();
        let report = run_script(
            &mut editor,
            "add 1 \"Branch A\"\nselect 2\nadd 2 \"Leaf\"\n",
        )
        .unwrap();

        assert!(report.is_clean());
        assert_eq!(report.applied, 3);
        assert_eq!(editor.map().node_count(), 3);
        assert_eq!(editor.map().children_of(NodeId(2)), vec![NodeId(3)]);
    }

    #[test]
    fn test_run_script_collects_rejections_and_continues() {
        let mut editor = Editor::new();
        let report = run_script(
            &mut editor,
            "remove 1\nadd 9 \"missing parent\"\nadd 1 \"still applied\"\n",
        )
        .unwrap();

        assert_eq!(report.applied, 1);
        assert_eq!(report.rejections.len(), 2);
        assert_eq!(report.rejections[0].index, 0);
        assert_eq!(editor.map().node_count(), 2);
    }

    #[test]
    fn test_run_script_leaves_editor_renderable() {
        let mut editor = Editor::new();
        run_script(&mut editor, "add 1 \"A\"").unwrap();
        assert!(editor.export_svg().is_ok());
    }

    #[test]
    fn test_run_script_drag_sequence_pans_viewport() {
        let mut editor = Editor::new();
        run_script(
            &mut editor,
            "zoom in\ndrag begin 0 0\ndrag to 30 40\ndrag end\n",
        )
        .unwrap();

        assert_eq!(editor.viewport().offset(), Point::new(30.0, 40.0));
        assert!(!editor.viewport().is_dragging());
    }

    #[test]
    fn test_command_display_round_trips() {
        let commands = [
            Command::Add {
                parent: ROOT_ID,
                text: "A".to_string(),
            },
            Command::Remove { id: NodeId(2) },
            Command::ZoomOut,
            Command::DragTo {
                at: Point::new(3.0, -4.0),
            },
            Command::SetTheme { theme: Theme::Dark },
        ];
        for command in commands {
            let reparsed = parse_command(&command.to_string()).unwrap();
            assert_eq!(reparsed, command);
        }
    }
}
