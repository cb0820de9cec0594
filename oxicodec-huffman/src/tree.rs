//! Huffman tree construction and traversal.
//!
//! Nodes live in an arena owned by [`HuffmanTree`] and refer to their
//! children by [`NodeId`]. A tree is built either from frequencies (for
//! encoding) or from a persisted [`CodeTable`] (for decoding); it is never
//! modified afterwards.

use crate::code::Code;
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use crate::table::CodeTable;
use oxicodec_core::{BitReader, OxiCodecError, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::io::Read;

/// Handle of a node inside a [`HuffmanTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// A tree node: a leaf carries a symbol, an internal node has children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    symbol: Option<Symbol>,
    /// Sum of leaf frequencies below this node (0 when rebuilt from a table).
    weight: u64,
    /// Left (`0`) and right (`1`) children.
    children: [Option<NodeId>; 2],
}

impl Node {
    fn empty() -> Self {
        Self {
            symbol: None,
            weight: 0,
            children: [None, None],
        }
    }

    fn leaf(symbol: Symbol, weight: u64) -> Self {
        Self {
            symbol: Some(symbol),
            weight,
            children: [None, None],
        }
    }

    fn internal(weight: u64, left: NodeId, right: NodeId) -> Self {
        Self {
            symbol: None,
            weight,
            children: [Some(left), Some(right)],
        }
    }

    /// Symbol stored at this node (leaves only).
    pub fn symbol(&self) -> Option<Symbol> {
        self.symbol
    }

    /// Combined frequency of this subtree.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Child reached by a `0` bit.
    pub fn left(&self) -> Option<NodeId> {
        self.children[0]
    }

    /// Child reached by a `1` bit.
    pub fn right(&self) -> Option<NodeId> {
        self.children[1]
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children == [None, None]
    }
}

/// A binary Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build a tree from symbol frequencies.
    ///
    /// Leaves enter a min-priority queue in the order yielded by
    /// [`FrequencyTable::iter`]; the two lightest nodes are repeatedly merged
    /// (first popped becomes the left child) until one root remains. Equal
    /// weights are ordered by creation, so the result is deterministic.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Self {
        let mut nodes = Vec::new();
        let mut heap = BinaryHeap::new();

        for (symbol, weight) in freqs.iter() {
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node::leaf(symbol, weight));
        }

        while heap.len() > 1 {
            let (Some(Reverse((lw, left))), Some(Reverse((rw, right)))) = (heap.pop(), heap.pop())
            else {
                break;
            };
            let weight = lw + rw;
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node::internal(weight, NodeId(left), NodeId(right)));
        }

        // The pseudo-EOF leaf guarantees at least one node.
        let root = heap.pop().map_or(NodeId(0), |Reverse((_, id))| NodeId(id));
        Self { nodes, root }
    }

    /// Rebuild the decoding tree from a code table.
    ///
    /// Each code is walked from the root, creating internal nodes as needed,
    /// and its symbol is placed at the terminal node. Fails if two codes
    /// collide or if the table has no pseudo-EOF. An empty code claims the
    /// root, so it is only valid for a pseudo-EOF standing alone.
    pub fn from_code_table(table: &CodeTable) -> Result<Self> {
        if table.get(Symbol::Eof).is_none() {
            return Err(OxiCodecError::malformed_table(0, "missing pseudo-EOF symbol"));
        }

        let mut tree = Self {
            nodes: vec![Node::empty()],
            root: NodeId(0),
        };

        for (i, (symbol, code)) in table.iter().enumerate() {
            tree.insert(symbol, code, i + 1)?;
        }
        Ok(tree)
    }

    /// Place `symbol` at the end of `code`'s path.
    fn insert(&mut self, symbol: Symbol, code: &Code, line: usize) -> Result<()> {
        let mut current = self.root;

        for &bit in code.bits() {
            if self.nodes[current.0].symbol.is_some() {
                // An earlier code is a prefix of this one.
                return Err(OxiCodecError::code_conflict(line));
            }
            current = match self.nodes[current.0].children[bit as usize] {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(Node::empty());
                    self.nodes[current.0].children[bit as usize] = Some(child);
                    child
                }
            };
        }

        let terminal = &mut self.nodes[current.0];
        if terminal.symbol.is_some() || !terminal.is_leaf() {
            return Err(OxiCodecError::code_conflict(line));
        }
        terminal.symbol = Some(symbol);
        Ok(())
    }

    /// Root node handle.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaves (symbols).
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.symbol.is_some()).count()
    }

    /// Assign codes by depth-first traversal.
    ///
    /// A left edge appends `0` and a right edge `1`; each leaf receives the
    /// accumulated prefix. Leaves are visited left subtree first, which fixes
    /// the record order of the resulting table.
    pub fn codes(&self) -> CodeTable {
        let mut table = CodeTable::new();
        let mut stack = vec![(self.root, Code::new())];

        while let Some((id, prefix)) = stack.pop() {
            let node = self.node(id);
            if let Some(symbol) = node.symbol {
                table.push_unchecked(symbol, prefix.clone());
            }
            if let Some(right) = node.right() {
                stack.push((right, prefix.child(true)));
            }
            if let Some(left) = node.left() {
                stack.push((left, prefix.child(false)));
            }
        }
        table
    }

    /// Read bits until a leaf is reached and return its symbol.
    ///
    /// A tree whose root is a leaf consumes no bits. Fails with
    /// `UnexpectedEof` if the stream runs out mid-code, or `InvalidCode` if
    /// the bits lead off the tree.
    pub fn decode_symbol<R: Read>(&self, reader: &mut BitReader<R>) -> Result<Symbol> {
        let mut current = self.root;

        loop {
            let node = self.node(current);
            if let Some(symbol) = node.symbol {
                return Ok(symbol);
            }

            let bit = reader.read_bit()?;
            current = node.children[bit as usize]
                .ok_or_else(|| OxiCodecError::invalid_code(reader.bits_read()))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(table: &CodeTable, symbol: Symbol) -> String {
        table.get(symbol).map(Code::to_string).unwrap_or_default()
    }

    #[test]
    fn test_build_aaabbc() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"aaabbc"));
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.node(tree.root()).weight(), 7);

        let table = tree.codes();
        assert_eq!(code_of(&table, Symbol::Byte(b'a')), "0");
        assert_eq!(code_of(&table, Symbol::Byte(b'b')), "10");
        assert_eq!(code_of(&table, Symbol::Byte(b'c')), "110");
        assert_eq!(code_of(&table, Symbol::Eof), "111");

        let order: Vec<Symbol> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(
            order,
            vec![
                Symbol::Byte(b'a'),
                Symbol::Byte(b'b'),
                Symbol::Byte(b'c'),
                Symbol::Eof
            ]
        );
    }

    #[test]
    fn test_empty_input_single_node() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::new());
        assert_eq!(tree.len(), 1);
        assert!(tree.node(tree.root()).is_leaf());

        let table = tree.codes();
        assert_eq!(table.len(), 1);
        assert!(table.get(Symbol::Eof).is_some_and(Code::is_empty));
    }

    #[test]
    fn test_single_symbol_two_leaves() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"zzzz"));
        let table = tree.codes();
        assert_eq!(table.len(), 2);
        assert!(table.iter().all(|(_, code)| code.len() == 1));
    }

    #[test]
    fn test_internal_nodes_have_two_children() {
        let data = b"it was the best of times, it was the worst of times";
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(data));
        for i in 0..tree.len() {
            let node = tree.node(NodeId(i));
            if node.symbol().is_none() {
                assert!(node.left().is_some() && node.right().is_some());
            } else {
                assert!(node.is_leaf());
            }
        }
    }

    #[test]
    fn test_rebuild_from_codes() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"hello world"));
        let rebuilt = HuffmanTree::from_code_table(&tree.codes()).unwrap();
        assert_eq!(rebuilt.leaf_count(), tree.leaf_count());
        assert_eq!(rebuilt.codes(), tree.codes());
    }

    #[test]
    fn test_rebuild_rejects_prefix_conflict() {
        let mut table = CodeTable::new();
        table.insert(Symbol::Byte(b'a'), Code::parse(b"0", 1).unwrap()).unwrap();
        table.insert(Symbol::Byte(b'b'), Code::parse(b"01", 2).unwrap()).unwrap();
        table.insert(Symbol::Eof, Code::parse(b"1", 3).unwrap()).unwrap();
        let err = HuffmanTree::from_code_table(&table).unwrap_err();
        assert!(matches!(err, OxiCodecError::CodeConflict { line: 2 }));

        // Longer code first, shorter prefix second.
        let mut table = CodeTable::new();
        table.insert(Symbol::Byte(b'a'), Code::parse(b"01", 1).unwrap()).unwrap();
        table.insert(Symbol::Byte(b'b'), Code::parse(b"0", 2).unwrap()).unwrap();
        table.insert(Symbol::Eof, Code::parse(b"1", 3).unwrap()).unwrap();
        let err = HuffmanTree::from_code_table(&table).unwrap_err();
        assert!(matches!(err, OxiCodecError::CodeConflict { line: 2 }));
    }

    #[test]
    fn test_rebuild_rejects_empty_data_code() {
        let mut table = CodeTable::new();
        table.insert(Symbol::Byte(b'a'), Code::new()).unwrap();
        table.insert(Symbol::Eof, Code::parse(b"0", 2).unwrap()).unwrap();
        let err = HuffmanTree::from_code_table(&table).unwrap_err();
        assert!(matches!(err, OxiCodecError::CodeConflict { line: 2 }));

        let mut table = CodeTable::new();
        table.insert(Symbol::Eof, Code::new()).unwrap();
        table.insert(Symbol::Byte(b'a'), Code::new()).unwrap();
        let err = HuffmanTree::from_code_table(&table).unwrap_err();
        assert!(matches!(err, OxiCodecError::CodeConflict { line: 2 }));

        let mut table = CodeTable::new();
        table.insert(Symbol::Byte(b'a'), Code::new()).unwrap();
        let err = HuffmanTree::from_code_table(&table).unwrap_err();
        assert!(matches!(err, OxiCodecError::MalformedTable { line: 0, .. }));
    }

    #[test]
    fn test_rebuild_requires_eof() {
        let mut table = CodeTable::new();
        table.insert(Symbol::Byte(b'a'), Code::parse(b"0", 1).unwrap()).unwrap();
        assert!(matches!(
            HuffmanTree::from_code_table(&table),
            Err(OxiCodecError::MalformedTable { .. })
        ));
    }

    #[test]
    fn test_decode_symbol_invalid_path() {
        // Only "0" is defined; a leading 1 bit leaves the tree.
        let mut table = CodeTable::new();
        table.insert(Symbol::Eof, Code::parse(b"0", 1).unwrap()).unwrap();
        let tree = HuffmanTree::from_code_table(&table).unwrap();

        let data = [0x80u8];
        let mut reader = BitReader::new(&data[..]);
        let err = tree.decode_symbol(&mut reader).unwrap_err();
        assert!(matches!(err, OxiCodecError::InvalidCode { bit_position: 1 }));
    }
}
