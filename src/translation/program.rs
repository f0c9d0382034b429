use std::io::{self, BufWriter, Write};

use crate::{geometry::Primitive, render::Grid, translation::output::Output};

/// Writes a Rust program that rebuilds the drawing primitive by primitive.
///
/// Primitives arrive one by one while the input is parsed; nothing reaches
/// the writer before `program_end`.
pub struct ProgramExport {
    writer: BufWriter<Box<dyn Write>>,
    pushes: Output,
    grid: Grid,
    silenced: bool,
}

impl ProgramExport {
    pub fn new(writer: Box<dyn Write>, grid: Grid) -> Self {
        Self {
            writer: BufWriter::new(writer),
            pushes: Output::new(),
            grid,
            silenced: false,
        }
    }

    /// Stops all further output and drops what was not written yet.
    pub fn silence(&mut self) {
        self.silenced = true;
        self.pushes.clear();
    }

    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Primitives recorded and not yet written.
    pub fn count(&self) -> usize {
        self.pushes.len()
    }

    pub fn primitive(&mut self, p: &Primitive) {
        if self.silenced {
            return;
        }

        let call = match p {
            Primitive::Point { name, at } =>
                format!("Primitive::point({:?}, {}, {})", name, at.x, at.y),
            Primitive::Segment { from, to } => format!(
                "Primitive::segment({}, {}, {}, {})",
                from.x, from.y, to.x, to.y
            ),
        };
        self.pushes.line(&format!("primitives.push({});", call));
    }

    pub fn program_end(&mut self) -> io::Result<()> {
        if self.silenced {
            return Ok(());
        }

        let mut program = Output::new();
        program.line(&format!(
            "// Rebuilds a drawing on a {}x{} grid.",
            self.grid.width, self.grid.height
        ));
        program.line("use geodsl::{Grid, Primitive};");
        program.line("");
        program.line("fn main() {");
        program.indent_in();
        program.line(&format!(
            "let mut primitives = Vec::with_capacity({});", self.count()
        ));
        program.block(&self.pushes);
        program.line("");
        program.line(&format!(
            "let grid = Grid::new({}, {}, {});",
            self.grid.width, self.grid.height, self.grid.spacing
        ));
        program.line("for mark in grid.plot(&primitives) {");
        program.indent_in();
        program.line("println!(\"{}\", mark);");
        program.indent_out();
        program.line("}");
        program.indent_out();
        program.line("}");

        program.write_to(&mut self.writer)?;
        self.pushes.clear();
        Ok(())
    }
}
