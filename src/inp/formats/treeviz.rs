//! Treeviz formatter for AST nodes
//!
//! Treeviz is a one-line-per-node rendering of the AST, for scanning the shape of a parse
//! quickly. Nesting is drawn with box connectors and each line is
//! `<prefix><connector> <icon> <label>`, with labels truncated to 30 characters.
//!
//! Example:
//!
//!   ⧉ 3 elements
//!   ├─ ◐ SENSITIVITY ON
//!   ├─ ▣ INITIATORS
//!   │ └─ ≔ VarName(1) = 1
//!   └─ ⁄ A comment
//!
//! Icons
//!     program: ⧉
//!     sensitivity: ◐
//!     title: ⊤
//!     file: /
//!     block: ▣
//!     conditional_block: ⑂
//!     alias: ≡
//!     plotfil: ▤
//!     row: ↵
//!     user_evt: ⚑
//!     parameter: •
//!     action: ▸
//!     function: ƒ
//!     set_timer: ⏱
//!     lookup_variable: ⌕
//!     assignment: ≔
//!     as_expression: ⇒
//!     comment: ⁄
//!     anything else (expressions): ○

use crate::inp::ast::{snapshot_from_program, AstSnapshot, Program};

use super::registry::{FormatError, Formatter};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "program" => "⧉",
        "sensitivity" => "◐",
        "title" => "⊤",
        "file" => "/",
        "block" => "▣",
        "conditional_block" => "⑂",
        "alias" => "≡",
        "plotfil" => "▤",
        "row" => "↵",
        "user_evt" => "⚑",
        "parameter" => "•",
        "action" => "▸",
        "function" => "ƒ",
        "set_timer" => "⏱",
        "lookup_variable" => "⌕",
        "assignment" => "≔",
        "as_expression" => "⇒",
        "comment" => "⁄",
        _ => "○",
    }
}

/// Single-line label; multi-line titles and rows are joined with `⏎`
fn flatten(label: &str) -> String {
    label.replace('\n', "⏎")
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    show_linum: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let icon = get_icon(&snapshot.node_type);
    let label = truncate(&flatten(&snapshot.label), 30);

    if show_linum {
        match snapshot.line {
            Some(line) => output.push_str(&format!("{:02} ", line)),
            None => output.push_str("   "),
        }
    }
    output.push_str(&format!("{}{} {} {}\n", prefix, connector, icon, label));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i + 1 == child_count, show_linum, output);
    }
}

/// Render a snapshot whose root is drawn without a connector
pub fn snapshot_to_treeviz(snapshot: &AstSnapshot, show_linum: bool) -> String {
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&flatten(&snapshot.label), 30)
    );

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, "", i + 1 == child_count, show_linum, &mut output);
    }

    output
}

pub fn to_treeviz_str(program: &Program) -> String {
    snapshot_to_treeviz(&snapshot_from_program(program), false)
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormatter {
    pub show_linum: bool,
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(snapshot_to_treeviz(
            &snapshot_from_program(program),
            self.show_linum,
        ))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and icons"
    }
}
