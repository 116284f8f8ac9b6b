//! Human-readable dumps of the control tree.
//!
//! ```
//! use horizon_trellis::{ControlTree, debug::{ControlTreeDebug, TreeFormatOptions}};
//! use horizon_trellis::widgets::Panel;
//!
//! let mut tree = ControlTree::new();
//! let root = tree.insert(Panel);
//! tree.set_name(root, "window").unwrap();
//! tree.insert_child(root, Panel).unwrap();
//!
//! let dump = ControlTreeDebug::with_options(&tree, TreeFormatOptions::minimal())
//!     .format_subtree(root)
//!     .unwrap();
//! assert_eq!(dump, "window\n\u{2514}\u{2500}\u{2500} (unnamed)\n");
//! ```

use std::fmt;

use horizon_trellis_core::{ControlId, LayoutResult};
use serde::{Deserialize, Serialize};

use crate::tree::ControlTree;

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show control ids.
    pub show_ids: bool,
    /// Whether to show type names.
    pub show_types: bool,
    /// Whether to show bounds and measured size.
    pub show_geometry: bool,
    /// Whether to show dock and lifecycle flags.
    pub show_flags: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_types: true,
            show_geometry: false,
            show_flags: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Everything, for chasing layout bugs.
    pub fn detailed() -> Self {
        Self {
            show_geometry: true,
            show_flags: true,
            ..Default::default()
        }
    }

    /// Names only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_types: false,
            show_geometry: false,
            show_flags: false,
            ..Default::default()
        }
    }

    /// Default options with a different style.
    pub fn with_style(style: TreeStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }
}

/// Formats a [`ControlTree`] as an indented outline.
#[derive(Clone)]
pub struct ControlTreeDebug<'a> {
    tree: &'a ControlTree,
    options: TreeFormatOptions,
}

impl<'a> ControlTreeDebug<'a> {
    pub fn new(tree: &'a ControlTree) -> Self {
        Self::with_options(tree, TreeFormatOptions::default())
    }

    pub fn with_options(tree: &'a ControlTree, options: TreeFormatOptions) -> Self {
        Self { tree, options }
    }

    /// Format the subtree rooted at `root`, following actual children.
    pub fn format_subtree(&self, root: ControlId) -> LayoutResult<String> {
        let mut output = String::new();
        self.format_subtree_into(root, 0, true, &mut output)?;
        Ok(output)
    }

    fn format_subtree_into(
        &self,
        id: ControlId,
        depth: usize,
        is_last: bool,
        output: &mut String,
    ) -> LayoutResult<()> {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        let base = self.tree.base(id)?;
        output.push_str(&self.build_prefix(depth, is_last));
        output.push_str(if base.name().is_empty() {
            "(unnamed)"
        } else {
            base.name()
        });

        if self.options.show_ids {
            output.push_str(&format!(" [{:?}]", id));
        }
        if self.options.show_types {
            output.push_str(&format!(" ({})", base.short_type_name()));
        }
        if self.options.show_geometry {
            let b = base.bounds();
            let m = base.measured_size();
            output.push_str(&format!(
                " bounds=({}, {}, {}x{}) measured={}x{}",
                b.left(),
                b.top(),
                b.width(),
                b.height(),
                m.width,
                m.height
            ));
        }
        if self.options.show_flags {
            output.push_str(&format!(" dock={:?}", base.dock()));
            for (set, flag) in [
                (base.needs_layout(), "dirty"),
                (base.is_virtual(), "virtual"),
                (base.is_collapsed(), "collapsed"),
                (base.is_hidden(), "hidden"),
                (base.is_pending_delete(), "pending-delete"),
            ] {
                if set {
                    output.push(' ');
                    output.push_str(flag);
                }
            }
        }
        output.push('\n');

        let children = base.children();
        let child_count = children.len();
        for (i, &child) in children.iter().enumerate() {
            self.format_subtree_into(child, depth + 1, i + 1 == child_count, output)?;
        }
        Ok(())
    }

    /// Build the prefix string for a tree node.
    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, corner, last) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "\\--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            prefix.push_str(&" ".repeat(self.options.indent_size));
        }
        prefix.push_str(if is_last { last } else { corner });
        prefix.push(' ');
        prefix
    }
}

impl fmt::Display for ControlTreeDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Control Tree ({} total controls):", self.tree.len())?;
        match self.tree.root() {
            None => writeln!(f, "  (no canvas)"),
            Some(root) => match self.format_subtree(root) {
                Ok(output) => write!(f, "{}", output),
                Err(e) => write!(f, "Error formatting control tree: {}", e),
            },
        }
    }
}
