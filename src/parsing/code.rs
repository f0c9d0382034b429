use std::io::Write;

use crate::{error::{
        CompilationError,
        CompilationErrorKind,
        Errors,
        ParseResult,
    }, geometry::{
        Coord,
        CoordSource,
        CoordinateTable,
        Primitive,
        perpendicular,
        square_corners,
    }, parsing::ast::{
        Node,
        NodeKind,
        PointRef,
    }, position::FilePosition,
    render::Grid,
    semantics::SemanticAnalyzer,
    tokenization::{
        Category,
        Keyword,
        Noun,
        Token,
        TokenStream,
    }, translation::ProgramExport};

/// Everything a successful parse produces.
pub struct Drawing {
    pub tree: Node,
    pub primitives: Vec<Primitive>,
    pub table: CoordinateTable,
}

/// A parsed drawing together with its semantic diagnostics.
pub struct Compilation {
    pub drawing: Drawing,
    pub errors: Errors,
}

pub struct Code {
    token_stream: TokenStream,
    lookahead: Option<Token>,
    table: CoordinateTable,
    primitives: Vec<Primitive>,
    export: ProgramExport,
}

impl Code {
    pub fn new(
        token_stream: TokenStream,
        output: Box<dyn Write>
    ) -> Code {
        Code {
            token_stream,
            lookahead: None,
            table: CoordinateTable::new(),
            primitives: Vec::new(),
            export: ProgramExport::new(output, Grid::default()),
        }
    }

    /// Replaces the coordinate table, e.g. with a seeded one.
    pub fn with_table(mut self, table: CoordinateTable) -> Code {
        self.table = table;
        self
    }

    /// Sets the grid the exported program draws on.
    pub fn with_grid(mut self, grid: Grid) -> Code {
        self.export.set_grid(grid);
        self
    }

    /// Parses the commands, runs the semantic checks, and writes the
    /// exported program.
    pub fn compile(self) -> ParseResult<Compilation> {
        let path = self.token_stream.filepath().clone();
        let (drawing, mut export) = self.parse_with_export()?;

        let errors = SemanticAnalyzer::new(&path).analyze(&drawing.tree);
        for e in errors.iter() {
            log::warn!("{}", e);
        }

        export.program_end().map_err(|e| CompilationError::new(
            CompilationErrorKind::OutputError,
            &path,
            FilePosition::new(1, 1),
            &format!("failed to write the exported program: {}", e)
        ))?;

        Ok(Compilation { drawing, errors })
    }

    /// Checks the commands without exporting anything.
    pub fn check(mut self) -> ParseResult<Compilation> {
        self.export.silence();
        self.compile()
    }

    /// Parses the commands only.
    pub fn parse(mut self) -> ParseResult<Drawing> {
        self.export.silence();
        self.parse_with_export().map(|(drawing, _)| drawing)
    }

    fn parse_with_export(mut self) -> ParseResult<(Drawing, ProgramExport)> {
        self.proceed();

        let tree = self.program().map_err(|e| {
            self.export.silence();
            e
        })?;

        log::debug!("parsed tree:\n{}", tree.tree());

        let drawing = Drawing {
            tree,
            primitives: self.primitives,
            table: self.table,
        };

        Ok((drawing, self.export))
    }

    // <program> ::= <text>
    fn program(&mut self) -> ParseResult<Node> {
        let mut program = Node::new(NodeKind::Program, self.pos());
        program.push(self.text()?);

        if let Some(t) = self.lookahead.to_owned() {
            return Err(self.syntax_error_at(
                t.pos,
                &format!("expected \";\" or end of input, found \"{}\"", t.lexeme)
            ));
        }

        Ok(program)
    }

    // <text> ::= <operation> <next operations>
    // <next operations> ::= ; <text> | <empty>
    fn text(&mut self) -> ParseResult<Node> {
        let mut text = Node::new(NodeKind::Operation, self.pos());
        text.push(self.operation()?);

        if self.at_delimiter(";") {
            self.proceed();
            if self.lookahead.is_some() {
                text.push(self.text()?);
            }
        }

        Ok(text)
    }

    // <operation> ::= <put> | <draw> | <connect> | <build>
    fn operation(&mut self) -> ParseResult<Node> {
        let pos = self.pos();
        let keyword = self.lookahead.as_ref().and_then(Token::keyword);

        match keyword {
            Some(Keyword::Place) => self.put_point(),
            Some(Keyword::Connect) => self.connect_points(),
            Some(Keyword::Draw) => {
                self.proceed();
                match self.lookahead_noun() {
                    Some(Noun::Line) => self.draw_perpendicular(pos),
                    _ => self.draw_segment(pos),
                }
            },
            Some(Keyword::Build) => {
                self.proceed();
                match self.lookahead_noun() {
                    Some(Noun::Triangle) => self.build_triangle(pos),
                    Some(Noun::Square) => self.build_square(pos),
                    _ => Err(self.syntax_error(&format!(
                        "unknown figure {}", self.found()
                    )))
                }
            },
            _ => Err(self.syntax_error(&format!(
                "unknown operation {}", self.found()
            )))
        }
    }

    // <put> ::= поставити точку <point>
    fn put_point(&mut self) -> ParseResult<Node> {
        let pos = self.pos();
        self.keyword(Keyword::Place)?;
        self.noun(Noun::Point)?;
        let point = self.point()?;

        log::debug!("PutPoint {}", point.label());
        self.emit(point.primitive());

        Ok(Node::new(NodeKind::PutPoint(point), pos))
    }

    // <connect> ::= зʼєднати точки <list of points>
    // <list of points> ::= <name> <coordinates> {, <name> <coordinates>}
    fn connect_points(&mut self) -> ParseResult<Node> {
        let pos = self.pos();
        self.keyword(Keyword::Connect)?;
        self.noun(Noun::Point)?;

        let mut points = vec![self.listed_point()?];
        while self.at_delimiter(",") {
            self.proceed();
            points.push(self.listed_point()?);
        }

        // a name listed twice ends up at its last position
        for p in points.iter_mut() {
            if let Some(at) = self.table.get(&p.name) {
                p.at = at;
            }
        }

        log::debug!("ConnectPoints {} points", points.len());

        let mut node = Node::new(NodeKind::ConnectPoints, pos);
        for p in &points {
            self.emit(p.primitive());
            node.push(Node::new(NodeKind::PutPoint(p.clone()), p.pos));
        }

        for (i, a) in points.iter().enumerate() {
            for b in points.iter().skip(i + 1) {
                self.emit(Primitive::between(a.at, b.at));
                node.push(Node::new(
                    NodeKind::DrawSegment(a.clone(), b.clone()),
                    a.pos
                ));
            }
        }

        Ok(node)
    }

    // <segment> ::= відрізок через дві точки <point> та <point>
    fn draw_segment(&mut self, pos: FilePosition) -> ParseResult<Node> {
        self.noun(Noun::Segment)?;
        self.keyword(Keyword::Through)?;
        self.keyword(Keyword::Two)?;
        self.noun(Noun::Point)?;

        let a = self.point()?;
        self.keyword(Keyword::And)?;
        let b = self.point()?;

        log::debug!("DrawSegment {} - {}", a.label(), b.label());
        self.emit(Primitive::between(a.at, b.at));
        self.emit(a.primitive());
        self.emit(b.primitive());

        Ok(Node::new(NodeKind::DrawSegment(a, b), pos))
    }

    // <perpendicular> ::= пряму , перпендикулярну до відрізка <name2>
    fn draw_perpendicular(&mut self, pos: FilePosition) -> ParseResult<Node> {
        self.noun(Noun::Line)?;
        self.delimiter(",")?;
        self.noun(Noun::Perpendicular)?;
        self.keyword(Keyword::To)?;
        self.noun(Noun::Segment)?;

        let (segment, first, second, name_pos) = self.pair_name()?;

        let (a_at, a_source) = self.table.lookup(&first);
        let (b_at, b_source) = self.table.lookup(&second);
        let from = PointRef::new(&first, a_at, a_source, name_pos);
        let to = PointRef::new(&second, b_at, b_source, name_pos);

        let p = perpendicular(a_at, b_at).map_err(|e| self.error(
            CompilationErrorKind::GeometryError,
            name_pos,
            &format!("no perpendicular to {}: {}", segment, e)
        ))?;

        log::debug!("DrawPerpendicular to {} through {}", segment, p.mid);
        self.emit(Primitive::between(p.mid, p.ends[0]));
        self.emit(Primitive::between(p.mid, p.ends[1]));

        Ok(Node::new(
            NodeKind::DrawPerpendicular { segment, from, to, ends: p.ends },
            pos
        ))
    }

    // <triangle> ::= трикутник за точками <point> , <point> , <point>
    fn build_triangle(&mut self, pos: FilePosition) -> ParseResult<Node> {
        self.noun(Noun::Triangle)?;
        self.keyword(Keyword::By)?;
        self.noun(Noun::Point)?;

        let a = self.point()?;
        self.delimiter(",")?;
        let b = self.point()?;
        self.delimiter(",")?;
        let c = self.point()?;

        log::debug!("BuildTriangle {}{}{}", a.name, b.name, c.name);
        self.emit(Primitive::between(a.at, b.at));
        self.emit(Primitive::between(b.at, c.at));
        self.emit(Primitive::between(c.at, a.at));

        let mut node = Node::new(NodeKind::BuildTriangle, pos);
        for p in [a, b, c].iter() {
            self.emit(p.primitive());
            node.push(Node::new(NodeKind::PutPoint(p.clone()), p.pos));
        }

        Ok(node)
    }

    // <square> ::= квадрат зі стороною <name2>
    fn build_square(&mut self, pos: FilePosition) -> ParseResult<Node> {
        self.noun(Noun::Square)?;
        self.keyword(Keyword::With)?;
        self.noun(Noun::Side)?;

        let (side, first, second, name_pos) = self.pair_name()?;
        let a = self.resolve(&first, name_pos)?;
        let b = self.resolve(&second, name_pos)?;

        let (c_at, d_at) = square_corners(a.at, b.at).map_err(|e| self.error(
            CompilationErrorKind::GeometryError,
            name_pos,
            &format!("no square on {}: {}", side, e)
        ))?;
        let c = PointRef::new(&format!("{}1", first), c_at, CoordSource::Derived, name_pos);
        let d = PointRef::new(&format!("{}1", second), d_at, CoordSource::Derived, name_pos);

        log::debug!("BuildSquare {}: {} {} {} {}", side, a.at, b.at, c.at, d.at);
        self.emit(Primitive::between(a.at, c.at));
        self.emit(Primitive::between(a.at, b.at));
        self.emit(Primitive::between(b.at, d.at));
        self.emit(Primitive::between(c.at, d.at));

        let mut node = Node::new(NodeKind::BuildSquare { side }, pos);
        for p in [&a, &b, &c, &d].iter() {
            self.emit(p.primitive());
            node.push(Node::new(NodeKind::PutPoint((*p).clone()), p.pos));
        }

        for (from, to) in [(&a, &b), (&c, &d), (&a, &c), (&b, &d)].iter() {
            node.push(Node::new(
                NodeKind::DrawSegment((*from).clone(), (*to).clone()),
                from.pos
            ));
        }

        Ok(node)
    }

    // <point> ::= <name> [<coordinates>]
    fn point(&mut self) -> ParseResult<PointRef> {
        let (name, pos) = self.name()?;
        self.resolve(&name, pos)
    }

    // <name> <coordinates>
    fn listed_point(&mut self) -> ParseResult<PointRef> {
        let (name, pos) = self.name()?;
        if self.lookahead_category() != Some(Category::Coordinates) {
            return Err(self.syntax_error(&format!(
                "expected coordinates of {}, found {}", name, self.found()
            )));
        }

        self.resolve(&name, pos)
    }

    /// Takes inline coordinates if they follow, then asks the table.
    fn resolve(&mut self, name: &str, pos: FilePosition) -> ParseResult<PointRef> {
        let explicit = if self.lookahead_category() == Some(Category::Coordinates) {
            Some(self.coordinates()?)
        } else {
            None
        };

        let (at, source) = self.table.resolve(name, explicit).map_err(|e| self.error(
            CompilationErrorKind::GeometryError,
            pos,
            &format!("cannot place {}: {}", name, e)
        ))?;

        Ok(PointRef::new(name, at, source, pos))
    }

    fn coordinates(&mut self) -> ParseResult<Coord> {
        let t = self.expect(Category::Coordinates, "coordinates")?;
        Coord::parse(&t.lexeme).map_err(|msg| self.syntax_error_at(t.pos, &msg))
    }

    fn name(&mut self) -> ParseResult<(String, FilePosition)> {
        let t = self.expect(Category::Name, "point name")?;
        Ok((t.lexeme, t.pos))
    }

    /// A two-letter name such as `AB`, split into its letters.
    fn pair_name(&mut self) -> ParseResult<(String, String, String, FilePosition)> {
        let t = self.expect(Category::Name, "two-letter name")?;
        let letters: Vec<char> = t.lexeme.chars().collect();

        if letters.len() != 2 {
            return Err(self.syntax_error_at(t.pos, &format!(
                "expected two-letter name, found \"{}\"", t.lexeme
            )));
        }

        Ok((
            t.lexeme.clone(),
            letters[0].to_string(),
            letters[1].to_string(),
            t.pos
        ))
    }

    fn keyword(&mut self, keyword: Keyword) -> ParseResult<()> {
        if self.lookahead.as_ref().and_then(Token::keyword) == Some(keyword) {
            self.proceed();
            Ok(())
        } else {
            Err(self.syntax_error(&format!(
                "expected \"{}\", found {}", keyword.word(), self.found()
            )))
        }
    }

    fn noun(&mut self, noun: Noun) -> ParseResult<()> {
        if self.lookahead_noun() == Some(noun) {
            self.proceed();
            Ok(())
        } else {
            Err(self.syntax_error(&format!(
                "expected \"{}…\", found {}", noun.stem(), self.found()
            )))
        }
    }

    fn delimiter(&mut self, symbol: &str) -> ParseResult<()> {
        if self.at_delimiter(symbol) {
            self.proceed();
            Ok(())
        } else {
            Err(self.syntax_error(&format!(
                "expected \"{}\", found {}", symbol, self.found()
            )))
        }
    }

    fn expect(&mut self, category: Category, what: &str) -> ParseResult<Token> {
        match self.lookahead.to_owned() {
            Some(t) if t.category == category => {
                self.proceed();
                Ok(t)
            },
            _ => Err(self.syntax_error(&format!(
                "expected {}, found {}", what, self.found()
            )))
        }
    }

    fn emit(&mut self, p: Primitive) {
        log::trace!("emit {}", p);
        self.export.primitive(&p);
        self.primitives.push(p);
    }

    fn proceed(&mut self) {
        self.lookahead = self.token_stream.next();
    }

    fn at_delimiter(&self, symbol: &str) -> bool {
        self.lookahead.as_ref().map_or(false, |t| t.is_delimiter(symbol))
    }

    fn lookahead_noun(&self) -> Option<Noun> {
        self.lookahead.as_ref().and_then(Token::noun)
    }

    fn lookahead_category(&self) -> Option<Category> {
        self.lookahead.as_ref().map(|t| t.category)
    }

    /// Position of the lookahead, or of the end of input.
    fn pos(&self) -> FilePosition {
        self.lookahead.as_ref()
            .map(|t| t.pos)
            .unwrap_or_else(|| self.token_stream.end_pos())
    }

    fn found(&self) -> String {
        match &self.lookahead {
            Some(t) => format!("\"{}\" ({})", t.lexeme, t.category),
            None => "end of input".to_string(),
        }
    }

    fn syntax_error(&self, msg: &str) -> CompilationError {
        self.syntax_error_at(self.pos(), msg)
    }

    fn syntax_error_at(&self, pos: FilePosition, msg: &str) -> CompilationError {
        self.error(CompilationErrorKind::SyntaxError, pos, msg)
    }

    fn error(
        &self,
        kind: CompilationErrorKind,
        pos: FilePosition,
        message: &str
    ) -> CompilationError {
        CompilationError::new(
            kind,
            self.token_stream.filepath(),
            pos,
            message
        )
    }
}
