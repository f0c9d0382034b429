use crate::geometry::{Coord, CoordSource, Primitive};
use crate::position::FilePosition;

/// A named point as it was resolved at one place in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointRef {
    pub name: String,
    pub at: Coord,
    pub source: CoordSource,
    pub pos: FilePosition,
}

impl PointRef {
    pub fn new(
        name: &str,
        at: Coord,
        source: CoordSource,
        pos: FilePosition
    ) -> Self {
        PointRef {
            name: name.to_string(),
            at,
            source,
            pos,
        }
    }

    pub fn primitive(&self) -> Primitive {
        Primitive::Point {
            name: self.name.clone(),
            at: self.at,
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.at)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Operation,
    PutPoint(PointRef),
    ConnectPoints,
    DrawSegment(PointRef, PointRef),
    DrawPerpendicular {
        segment: String,
        from: PointRef,
        to: PointRef,
        ends: [Coord; 2],
    },
    BuildTriangle,
    BuildSquare { side: String },
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Operation => "Operation",
            NodeKind::PutPoint(_) => "PutPoint",
            NodeKind::ConnectPoints => "ConnectPoints",
            NodeKind::DrawSegment(..) => "DrawSegment",
            NodeKind::DrawPerpendicular { .. } => "DrawPerpendicular",
            NodeKind::BuildTriangle => "BuildTriangle",
            NodeKind::BuildSquare { .. } => "BuildSquare",
        }
    }

    /// Leaf labels printed under the node, name and coordinates of every
    /// point the node carries.
    pub fn labels(&self) -> Vec<String> {
        match self {
            NodeKind::PutPoint(p) => vec![p.name.clone(), p.at.to_string()],
            NodeKind::DrawSegment(a, b) => vec![a.label(), b.label()],
            NodeKind::DrawPerpendicular { from, to, ends, .. } => vec![
                from.label(),
                to.label(),
                format!("C1 {}", ends[0]),
                format!("C2 {}", ends[1]),
            ],
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    pub pos: FilePosition,
}

impl Node {
    pub fn new(kind: NodeKind, pos: FilePosition) -> Self {
        Node {
            kind,
            children: Vec::new(),
            pos,
        }
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// The operations of a program in source order, following the
    /// `Operation` chain.
    pub fn operations(&self) -> Vec<&Node> {
        let mut result = Vec::new();
        let mut chain = match self.kind {
            NodeKind::Program => self.children.first(),
            NodeKind::Operation => Some(self),
            _ => None,
        };

        while let Some(link) = chain {
            let mut next = None;
            for child in &link.children {
                if child.kind == NodeKind::Operation {
                    next = Some(child);
                } else {
                    result.push(child);
                }
            }
            chain = next;
        }

        result
    }

    /// Renders the tree with box-drawing branches, one node per line.
    pub fn tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, "", true);
        out
    }

    fn write_tree(&self, out: &mut String, indent: &str, last: bool) {
        Self::write_line(out, indent, last, self.kind.name());

        let inner = format!("{}{}", indent, if last { "    " } else { "│   " });
        let labels = self.kind.labels();
        let total = labels.len() + self.children.len();

        for (i, label) in labels.iter().enumerate() {
            Self::write_line(out, &inner, i + 1 == total, label);
        }

        for (i, child) in self.children.iter().enumerate() {
            child.write_tree(out, &inner, labels.len() + i + 1 == total);
        }
    }

    fn write_line(out: &mut String, indent: &str, last: bool, text: &str) {
        out.push_str(indent);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(text);
        out.push('\n');
    }
}
