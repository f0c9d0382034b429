use std::io::sink;

use geodsl::{
    Code,
    Compilation,
    Coord,
    CoordinateTable,
    Grid,
    Mark,
    NodeKind,
    Primitive,
    TokenStream,
};

fn check(input: &str, seed: u64) -> Compilation {
    let ts = TokenStream::new(input, None);
    Code::new(ts, Box::new(sink()))
        .with_table(CoordinateTable::seeded(seed))
        .check()
        .unwrap()
}

#[test]
fn point_and_segment_with_generated_endpoint() {
    for seed in 0..16 {
        let c = check(
            "поставити точку A (3,1) ; провести відрізок через дві точки C (1,2) та B",
            seed
        );
        let p = &c.drawing.primitives;

        assert!(c.errors.is_empty(), "seed {}: {}", seed, c.errors);
        assert!(p.contains(&Primitive::point("A", 3, 1)));
        assert!(p.contains(&Primitive::point("C", 1, 2)));

        let b = c.drawing.table.get("B").unwrap();
        assert!((0..4).contains(&b.x) && (0..6).contains(&b.y));
        assert!(p.contains(&Primitive::point("B", b.x, b.y)));
        assert!(p.contains(&Primitive::between(Coord::new(1, 2), b)));
    }
}

#[test]
fn triangle_of_undefined_points() {
    let c = check("побудувати трикутник за точками A , B , C", 5);

    let messages: Vec<&str> = c.errors.iter().map(|e| e.msg()).collect();
    assert_eq!(messages, [
        "point \"A\" is not defined for triangle",
        "point \"B\" is not defined for triangle",
        "point \"C\" is not defined for triangle",
    ]);

    let p = &c.drawing.primitives;
    assert_eq!(p.len(), 6);
    assert!(p[..3].iter().all(Primitive::is_segment));
    assert!(p[3..].iter().all(Primitive::is_point));
}

#[test]
fn point_placed_twice() {
    let c = check("поставити точку A ; поставити точку A", 9);

    assert_eq!(c.errors.count(), 1);
    assert_eq!(c.drawing.table.len(), 1);

    let placed: Vec<Coord> = c.drawing.tree.operations()
        .iter()
        .filter_map(|n| match &n.kind {
            NodeKind::PutPoint(p) => Some(p.at),
            _ => None,
        })
        .collect();
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0], placed[1]);
}

#[test]
fn square_on_defined_side() {
    let c = check(
        "поставити точку A (1,2) ; поставити точку B (1,6) ; побудувати квадрат зі стороною AB",
        0
    );

    assert!(c.errors.is_empty(), "{}", c.errors);

    let segments: Vec<&Primitive> = c.drawing.primitives.iter()
        .filter(|p| p.is_segment())
        .collect();
    assert_eq!(segments, [
        &Primitive::segment(1, 2, -3, 2),
        &Primitive::segment(1, 2, 1, 6),
        &Primitive::segment(1, 6, -3, 6),
        &Primitive::segment(-3, 2, -3, 6),
    ]);
}

#[test]
fn drawing_plots_on_grid() {
    let c = check("зʼєднати точки A (0,0) , B (2,-1)", 0);
    let marks = Grid::new(800, 600, 40).plot(&c.drawing.primitives);

    assert_eq!(marks, [
        Mark::Point { name: "A".to_string(), x: 400, y: 300 },
        Mark::Point { name: "B".to_string(), x: 480, y: 340 },
        Mark::Line { x1: 400, y1: 300, x2: 480, y2: 340 },
    ]);
}
