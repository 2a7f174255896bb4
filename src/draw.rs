//! Graphviz rendering of the tree shape, enabled by the `graphviz` feature.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::index::IndexType;
use crate::node::{Color, Node};
use crate::tree::RbTree;

impl<T, P, C, Ix> RbTree<T, P, C, Ix>
where
    T: Debug,
    Ix: IndexType,
{
    /// Write the tree as a dot graph to the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from creating or writing the file.
    pub fn draw(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_dot(&mut out)?;
        out.flush()
    }

    /// Write the tree as a dot graph. Nodes are filled with their color and
    /// labelled with their payload; sentinel children are omitted.
    pub fn write_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "digraph rbtree {{")?;
        writeln!(out, "    node [style=filled, fontcolor=white];")?;
        let mut queue = VecDeque::new();
        if !self.root.is_sentinel() {
            queue.push_back(self.root);
        }
        while let Some(x) = queue.pop_front() {
            let fill = match self.node_ref(x, Node::color) {
                Color::Red => "red",
                Color::Black => "black",
            };
            if let Some(payload) = self.get(x) {
                writeln!(
                    out,
                    "    n{} [label=\"{}\", fillcolor={fill}];",
                    x.index(),
                    format!("{payload:?}").replace('"', "\\\"")
                )?;
            }
            for child in [self.node_ref(x, Node::left), self.node_ref(x, Node::right)] {
                if !child.is_sentinel() {
                    writeln!(out, "    n{} -> n{};", x.index(), child.index())?;
                    queue.push_back(child);
                }
            }
        }
        writeln!(out, "}}")
    }
}
