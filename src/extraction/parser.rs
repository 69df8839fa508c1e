//! Tree-sitter parser integration for Go
//!
//! Wraps the `tree-sitter-go` grammar and turns error-tolerant parse trees
//! into hard parse failures.

use crate::core::{line_column, Error, Result};
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// A parsed Go file together with the text its byte ranges refer to
#[derive(Debug)]
pub struct GoAst {
    pub tree: Tree,
    pub source: String,
    pub path: PathBuf,
}

impl GoAst {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Name from the `package` clause
    pub fn package_name(&self) -> Option<&str> {
        let root = self.root();
        let mut cursor = root.walk();
        let clause = root
            .children(&mut cursor)
            .find(|n| n.kind() == "package_clause")?;

        let mut cursor = clause.walk();
        let ident = clause
            .named_children(&mut cursor)
            .find(|n| n.kind() == "package_identifier")?;
        Some(node_text(&ident, &self.source))
    }
}

pub fn new_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| Error::Grammar(e.to_string()))?;
    Ok(parser)
}

/// Kinds Go accepts at the top level once the package clause and imports are done
const TOP_LEVEL_DECLARATIONS: &[&str] = &[
    "function_declaration",
    "method_declaration",
    "type_declaration",
    "const_declaration",
    "var_declaration",
];

/// Parse Go source code, failing on the first syntax error in the tree
/// or on a file layout the Go compiler would reject.
pub fn parse_source(parser: &mut Parser, content: String, path: &Path) -> Result<GoAst> {
    if let Some(offset) = content.find('\0') {
        let (line, column) = line_column(&content.as_bytes()[..offset]);
        return Err(Error::parse(path, line, column, "illegal character NUL"));
    }

    let tree = parser
        .parse(&content, None)
        .ok_or_else(|| Error::parse(path, 1, 1, "parser produced no tree"))?;

    if has_parse_errors(&tree) {
        let root = tree.root_node();
        let node = first_error_node(root).unwrap_or(root);
        return Err(Error::parse(
            path,
            node_line(&node),
            node_column(&node),
            describe_error(&node, &content),
        ));
    }

    check_file_structure(tree.root_node(), &content, path)?;

    Ok(GoAst {
        tree,
        source: content,
        path: path.to_path_buf(),
    })
}

/// Enforce Go's top-level layout: one leading package clause, imports
/// before anything else, declarations only, each ended by `;` or a newline.
fn check_file_structure(root: Node<'_>, source: &str, path: &Path) -> Result<()> {
    let mut cursor = root.walk();
    let (comments, decls): (Vec<_>, Vec<_>) = root
        .named_children(&mut cursor)
        .partition(|n| n.kind() == "comment");

    let Some(first) = decls.first() else {
        return Err(Error::parse(path, 1, 1, "expected 'package' clause"));
    };
    if first.kind() != "package_clause" {
        return Err(error_at(path, first, "expected 'package' clause"));
    }

    let mut imports_open = true;
    for pair in decls.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let misplaced = match next.kind() {
            "package_clause" => Some("unexpected 'package' clause"),
            "import_declaration" if !imports_open => {
                Some("imports must appear before other declarations")
            }
            "import_declaration" => None,
            kind if TOP_LEVEL_DECLARATIONS.contains(&kind) => {
                imports_open = false;
                None
            }
            _ => Some("non-declaration statement outside function body"),
        };
        if let Some(message) = misplaced {
            return Err(error_at(path, next, message));
        }
        if !is_terminated(prev, next, &comments, source) {
            return Err(error_at(path, next, "expected ';' or newline after declaration"));
        }
    }

    Ok(())
}

fn error_at(path: &Path, node: &Node, message: &str) -> Error {
    Error::parse(path, node_line(node), node_column(node), message)
}

/// A `;` or newline sits between `prev` and `next`. Semicolons inside
/// comments do not count; a comment spanning lines acts as a newline.
fn is_terminated(prev: &Node, next: &Node, comments: &[Node], source: &str) -> bool {
    let (start, end) = (prev.end_byte(), next.start_byte());
    let mut pos = start;

    for comment in comments
        .iter()
        .filter(|c| c.start_byte() >= start && c.end_byte() <= end)
    {
        if source[pos..comment.start_byte()].contains([';', '\n'])
            || node_text(comment, source).contains('\n')
        {
            return true;
        }
        pos = comment.end_byte();
    }

    source[pos..end].contains([';', '\n'])
}

/// Check if a parse tree has errors
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// Depth-first search for the earliest `ERROR` or `MISSING` node
pub fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error_node)
}

fn describe_error(node: &Node, source: &str) -> String {
    if node.is_missing() {
        return format!("missing '{}'", node.kind());
    }

    let text = node_text(node, source);
    let snippet: String = text
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(24)
        .collect();
    if snippet.trim().is_empty() {
        "syntax error".to_string()
    } else {
        format!("syntax error near '{}'", snippet.trim())
    }
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}
