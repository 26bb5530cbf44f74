use lib_game::{Bounds, is_hit};

struct HitTest {
    name: &'static str,
    point: (f32, f32),
    expected: bool,
}

fn unit_box() -> Bounds {
    Bounds::new(0.0, 0.0, 10.0, 10.0)
}

fn run_tests(tests: impl IntoIterator<Item = HitTest>) {
    for case in tests {
        println!("Running {:?}", case.name);
        let (px, py) = case.point;
        assert_eq!(
            is_hit(unit_box(), px, py),
            case.expected,
            "Test {:?} failed",
            case.name,
        );
    }
}

#[test]
fn inside_points() {
    run_tests([
        HitTest {
            name: "center",
            point: (5.0, 5.0),
            expected: true,
        },
        HitTest {
            name: "near top-left",
            point: (0.001, 0.001),
            expected: true,
        },
        HitTest {
            name: "near bottom-right",
            point: (9.999, 9.999),
            expected: true,
        },
    ]);
}

#[test]
fn edges_are_not_hits() {
    run_tests([
        HitTest {
            name: "left edge",
            point: (0.0, 5.0),
            expected: false,
        },
        HitTest {
            name: "right edge",
            point: (10.0, 5.0),
            expected: false,
        },
        HitTest {
            name: "top edge",
            point: (5.0, 0.0),
            expected: false,
        },
        HitTest {
            name: "bottom edge",
            point: (5.0, 10.0),
            expected: false,
        },
        HitTest {
            name: "top-left corner",
            point: (0.0, 0.0),
            expected: false,
        },
        HitTest {
            name: "bottom-right corner",
            point: (10.0, 10.0),
            expected: false,
        },
    ]);
}

#[test]
fn outside_points() {
    run_tests([
        HitTest {
            name: "right of the box",
            point: (11.0, 5.0),
            expected: false,
        },
        HitTest {
            name: "above the box",
            point: (5.0, -1.0),
            expected: false,
        },
        HitTest {
            name: "inside x, below y",
            point: (5.0, 11.0),
            expected: false,
        },
        HitTest {
            name: "far away",
            point: (-1000.0, 1000.0),
            expected: false,
        },
    ]);
}
