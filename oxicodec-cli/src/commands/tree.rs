//! Tree command implementation.

use super::TableFormatArg;
use crate::utils::{CliResult, resolve_path};
use oxicodec_huffman::{CodeTable, HuffmanModel, HuffmanTree, Node, NodeId};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

/// Columns of indentation per tree level.
const INDENT: usize = 4;

/// Marker printed for internal nodes.
const INTERNAL_MARK: char = '*';

/// Render a tree sideways: right subtree above, left subtree below, each
/// level indented one step further. Reading top to bottom lists leaves in
/// descending code order.
pub fn render_tree(tree: &HuffmanTree) -> String {
    let mut out = String::new();
    // (node, depth, children already scheduled)
    let mut stack: Vec<(NodeId, usize, bool)> = vec![(tree.root(), 0, false)];

    while let Some((id, depth, expanded)) = stack.pop() {
        let node = tree.node(id);
        if expanded {
            out.push_str(&" ".repeat(depth * INDENT));
            out.push_str(&node_label(node));
            out.push('\n');
            continue;
        }
        if let Some(left) = node.left() {
            stack.push((left, depth + 1, false));
        }
        stack.push((id, depth, true));
        if let Some(right) = node.right() {
            stack.push((right, depth + 1, false));
        }
    }
    out
}

fn node_label(node: &Node) -> String {
    match (node.symbol(), node.weight()) {
        (Some(symbol), 0) => symbol.to_string(),
        (Some(symbol), weight) => format!("{} ({})", symbol, weight),
        (None, 0) => INTERNAL_MARK.to_string(),
        (None, weight) => format!("{} ({})", INTERNAL_MARK, weight),
    }
}

/// Print the tree for an input file or a persisted code table.
pub fn cmd_tree(
    input: Option<PathBuf>,
    table: Option<PathBuf>,
    table_format: TableFormatArg,
) -> CliResult<()> {
    let tree = match table {
        Some(path) => {
            let table = CodeTable::read_from(BufReader::new(File::open(&path)?), table_format.into())?;
            println!("Huffman decoding tree ({}):", path.display());
            HuffmanTree::from_code_table(&table)?
        }
        None => {
            let input = resolve_path(input, "Enter name of text file", None)?;
            let data = fs::read(&input)?;
            println!("Huffman encoding tree ({}):", input.display());
            HuffmanModel::build(&data).tree().clone()
        }
    };

    print!("{}", render_tree(&tree));
    log::debug!("{} nodes, {} leaves", tree.len(), tree.leaf_count());
    Ok(())
}
