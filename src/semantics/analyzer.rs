use std::collections::HashSet;

use crate::{
    error::{CompilationError, CompilationErrorKind, Errors},
    parsing::ast::{Node, NodeKind, PointRef},
    position::FilePosition,
    semantics::Scope,
};

/// Walks a parsed program once, top-down, and collects diagnostics.
///
/// Nothing found here stops the walk or changes the tree.
pub struct SemanticAnalyzer {
    points: Scope,
    lines: Scope,
    errors: Errors,
    path: Option<String>,
}

impl SemanticAnalyzer {
    pub fn new(path: &Option<String>) -> Self {
        SemanticAnalyzer {
            points: Scope::default(),
            lines: Scope::default(),
            errors: Errors::new(),
            path: path.clone(),
        }
    }

    pub fn analyze(mut self, node: &Node) -> Errors {
        self.traverse(node);
        self.errors
    }

    fn traverse(&mut self, node: &Node) {
        match &node.kind {
            NodeKind::PutPoint(p) => self.put_point(p),
            NodeKind::ConnectPoints => self.connect_points(node),
            NodeKind::DrawSegment(a, b) => self.draw_segment(a, b, node.pos),
            NodeKind::DrawPerpendicular { segment, from, to, .. } =>
                self.draw_perpendicular(segment, from, to, node.pos),
            NodeKind::BuildTriangle => self.build_triangle(node),
            NodeKind::BuildSquare { .. } => self.build_square(node),
            NodeKind::Program | NodeKind::Operation => {
                for child in &node.children {
                    self.traverse(child);
                }
            }
        }
    }

    fn put_point(&mut self, p: &PointRef) {
        if let Err(e) = self.points.put(&p.name) {
            self.semantic_error(p.pos, &format!("point \"{}\" is already defined", e.id()));
        }
    }

    fn connect_points(&mut self, node: &Node) {
        for p in Self::placements(node) {
            if !self.is_defined(p) {
                self.undefined_point(p, "");
            }
        }
    }

    fn draw_segment(&mut self, a: &PointRef, b: &PointRef, pos: FilePosition) {
        self.check_endpoints(a, b, pos, "segment");
        self.lines.set(&format!("{}{}", a.name, b.name));
    }

    fn draw_perpendicular(
        &mut self,
        segment: &str,
        a: &PointRef,
        b: &PointRef,
        pos: FilePosition
    ) {
        self.check_endpoints(a, b, pos, "perpendicular line");

        if !self.lines.contains(segment) {
            self.semantic_error(pos, &format!(
                "line \"{}\" is not defined for perpendicular line", segment
            ));
        }

        self.lines.set(segment);
    }

    fn build_triangle(&mut self, node: &Node) {
        let points = Self::placements(node);
        if points.len() != 3 {
            self.semantic_error(node.pos, &format!(
                "triangle requires 3 points, found {}", points.len()
            ));
        }

        for p in points {
            if !self.is_defined(p) {
                self.undefined_point(p, " for triangle");
            }
        }
    }

    fn build_square(&mut self, node: &Node) {
        let corners = Self::placements(node);
        let segments = node.children.iter()
            .filter(|c| matches!(c.kind, NodeKind::DrawSegment(..)))
            .count();
        let names: HashSet<&str> = corners.iter()
            .map(|p| p.name.as_str())
            .collect();

        for p in &corners {
            if !self.is_defined(p) {
                self.undefined_point(p, " for square");
            }
        }

        if corners.len() != 4 {
            self.semantic_error(node.pos, &format!(
                "square requires exactly 4 points, found {}", corners.len()
            ));
        }

        if segments != 4 {
            self.semantic_error(node.pos, &format!(
                "square requires exactly 4 segments, found {}", segments
            ));
        }

        if names.len() < 4 {
            self.semantic_error(node.pos, &format!(
                "square requires 4 distinct points, found {}", names.len()
            ));
        }
    }

    // Both endpoints count as defined as soon as one of them carries its
    // own coordinates.
    fn check_endpoints(
        &mut self,
        a: &PointRef,
        b: &PointRef,
        pos: FilePosition,
        what: &str
    ) {
        let registered = self.points.contains(&a.name) && self.points.contains(&b.name);
        let placed = a.source.carries_coords() || b.source.carries_coords();

        if !registered && !placed {
            self.semantic_error(pos, &format!(
                "points \"{}\" or \"{}\" are not defined for {}", a.name, b.name, what
            ));
        }
    }

    fn is_defined(&self, p: &PointRef) -> bool {
        self.points.contains(&p.name) || p.source.carries_coords()
    }

    fn placements(node: &Node) -> Vec<&PointRef> {
        node.children.iter()
            .filter_map(|c| match &c.kind {
                NodeKind::PutPoint(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn undefined_point(&mut self, p: &PointRef, context: &str) {
        self.semantic_error(p.pos, &format!(
            "point \"{}\" is not defined{}", p.name, context
        ));
    }

    fn semantic_error(&mut self, pos: FilePosition, msg: &str) {
        self.errors.push(CompilationError::new(
            CompilationErrorKind::SemanticError,
            &self.path,
            pos,
            msg
        ));
    }
}
