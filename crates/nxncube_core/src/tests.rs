use itertools::iproduct;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

const SIZES: std::ops::RangeInclusive<usize> = 1..=5;

fn solved(size: usize) -> Cube {
    Cube::new(size).expect("valid size")
}

/// Returns a cube where every sticker has a distinct value, so that every
/// sticker can be tracked through a turn.
fn labeled(size: usize) -> Cube {
    let count = 6 * size * size;
    assert!(count <= 256, "too many stickers to label");
    Cube::from_stickers(size, (0..count).map(|i| Color(i as u8))).expect("valid layout")
}

fn all_turns(size: usize) -> impl Iterator<Item = (usize, usize)> {
    iproduct!(0..6, 1..=size)
}

#[test]
fn test_new_cube_is_solved() {
    for size in 1..=8 {
        let cube = solved(size);
        assert!(cube.is_solved());
        assert!(cube.is_correct());
        for (face, _, _, color) in cube.iter() {
            assert_eq!(color, face.solved_color());
        }
    }
    assert_eq!(Cube::new(0), Err(CubeError::InvalidSize));
}

#[test]
fn test_full_cycle_is_identity() {
    for size in SIZES {
        let start = labeled(size);
        for (face, depth) in all_turns(size) {
            let mut cube = start.clone();
            cube.rotate(face, depth, 4).expect("valid turn");
            assert_eq!(cube, start);

            for _ in 0..4 {
                cube.rotate(face, depth, 1).expect("valid turn");
            }
            assert_eq!(cube, start, "face {face} depth {depth} size {size}");
        }
    }
}

#[test]
fn test_inverse_turns() {
    for size in SIZES {
        let start = labeled(size);
        for (face, depth) in all_turns(size) {
            for undo in [-1, 3, 7, -5] {
                let mut cube = start.clone();
                cube.rotate(face, depth, 1)
                    .and_then(|c| c.rotate(face, depth, undo))
                    .expect("valid turn");
                assert_eq!(cube, start, "face {face} depth {depth} undo {undo}");
            }
        }
    }
}

#[test]
fn test_times_is_taken_modulo_4() {
    let start = labeled(3);
    for (face, depth) in all_turns(3) {
        for times in -4..4 {
            let mut a = start.clone();
            let mut b = start.clone();
            a.rotate(face, depth, times).expect("valid turn");
            b.rotate(face, depth, times + 8).expect("valid turn");
            assert_eq!(a, b);
        }
        let mut twice = start.clone();
        twice.rotate(face, depth, 1).expect("valid turn");
        twice.rotate(face, depth, 1).expect("valid turn");
        let mut half = start.clone();
        half.rotate(face, depth, 2).expect("valid turn");
        assert_eq!(half, twice);
    }
}

#[test]
fn test_whole_cube_turn_only_moves_faces() {
    for size in SIZES {
        let start = labeled(size);
        for face in 0..6 {
            let mut cube = start.clone();
            cube.rotate(face, size, 1).expect("valid turn");

            // Every face of the result holds exactly the stickers of some
            // face of the original.
            let mut sources = vec![];
            for f in Face::ALL {
                let mut colors = cube.face_stickers(f).to_vec();
                colors.sort();
                let source = Face::ALL.into_iter().find(|&g| {
                    let mut original = start.face_stickers(g).to_vec();
                    original.sort();
                    original == colors
                });
                sources.push(source.expect("face is a rearrangement of a face"));
            }
            sources.sort();
            assert_eq!(sources, Face::ALL.to_vec());

            let mut solved_cube = solved(size);
            solved_cube.rotate(face, size, 1).expect("valid turn");
            assert!(solved_cube.is_solved());
        }
    }
}

#[test]
fn test_front_turn_on_4x4() {
    let size = 4;
    let mut cube = solved(size);
    cube.rotate(Face::Front.index(), 1, 1).expect("valid turn");

    let rows = |face: Face| {
        cube.face_rows(face)
            .map(|row| row.iter().map(|c| c.0).collect::<Vec<_>>())
            .collect::<Vec<_>>()
    };
    assert_eq!(rows(Face::Front), vec![vec![2; 4]; 4]);
    assert_eq!(rows(Face::Back), vec![vec![4; 4]; 4]);
    assert_eq!(
        rows(Face::Top),
        vec![vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![1, 1, 1, 1]],
    );
    assert_eq!(rows(Face::Left), vec![vec![1, 1, 1, 5]; 4]);
    assert_eq!(rows(Face::Right), vec![vec![0, 3, 3, 3]; 4]);
    assert_eq!(
        rows(Face::Bottom),
        vec![vec![3, 3, 3, 3], vec![5, 5, 5, 5], vec![5, 5, 5, 5], vec![5, 5, 5, 5]],
    );
    assert!(!cube.is_solved());
    assert!(cube.is_correct());
}

#[test]
fn test_top_turn_on_4x4() {
    let size = 4;
    let start = labeled(size);
    let mut cube = start.clone();
    cube.rotate(0, 1, 1).expect("valid turn");

    // The top face turns clockwise in place.
    for (row, col) in iproduct!(0..size, 0..size) {
        assert_eq!(
            cube[(Face::Top, row, col)],
            start[(Face::Top, size - 1 - col, row)],
        );
    }

    // Top rows cycle front -> left -> back -> right -> front.
    let cycle = [
        (Face::Front, Face::Left),
        (Face::Left, Face::Back),
        (Face::Back, Face::Right),
        (Face::Right, Face::Front),
    ];
    for (from, to) in cycle {
        assert_eq!(cube.face_rows(to).next(), start.face_rows(from).next());
        assert_eq!(
            cube.face_rows(to).skip(1).collect::<Vec<_>>(),
            start.face_rows(to).skip(1).collect::<Vec<_>>(),
        );
    }
    assert_eq!(
        cube.face_stickers(Face::Bottom),
        start.face_stickers(Face::Bottom),
    );
}

#[test]
fn test_shallow_turn_leaves_far_face_alone() {
    for size in SIZES {
        let start = labeled(size);
        for (face, depth) in all_turns(size).filter(|&(_, depth)| depth < size) {
            let face = Face::from_index(face).expect("valid face");
            let mut cube = start.clone();
            cube.rotate(face.index(), depth, 1).expect("valid turn");
            assert_eq!(
                cube.face_stickers(face.opposite()),
                start.face_stickers(face.opposite()),
            );

            // Only the first `depth` layers of each side face change.
            for slot in face.ring() {
                for (layer, pos) in iproduct!(depth..size, 0..size) {
                    let (row, col) = slot.transform.apply(size, (layer, pos));
                    assert_eq!(cube[(slot.face, row, col)], start[(slot.face, row, col)]);
                }
            }
        }
    }
}

#[test]
fn test_turn_then_solved() {
    for size in 2..=5 {
        for (face, depth) in all_turns(size).filter(|&(_, depth)| depth < size) {
            for times in [1, 2, 3, -1] {
                let mut cube = solved(size);
                cube.rotate(face, depth, times).expect("valid turn");
                assert!(
                    !cube.is_solved(),
                    "face {face} depth {depth} times {times} size {size}",
                );
                assert!(cube.is_correct());
                cube.rotate(face, depth, -times).expect("valid turn");
                assert!(cube.is_solved());
            }
        }
    }
}

#[test]
fn test_rotate_invalid_arguments() {
    let mut cube = solved(4);
    assert_eq!(cube.rotate(6, 1, 1).err(), Some(CubeError::InvalidFace(6)));
    assert_eq!(
        cube.rotate(0, 0, -1).err(),
        Some(CubeError::InvalidDepth { depth: 0, size: 4 }),
    );
    assert_eq!(
        cube.rotate(0, 5, 2).err(),
        Some(CubeError::InvalidDepth { depth: 5, size: 4 }),
    );
    assert!(
        cube.rotate(6, 1, 1)
            .err()
            .is_some_and(|e| e.is_invalid_argument())
    );

    // Whole turns are free, even with bad arguments.
    assert!(cube.rotate(17, 0, 0).is_ok());
    assert!(cube.rotate(17, 99, -8).is_ok());
    assert_eq!(cube, solved(4));
}

#[test]
fn test_rotate_chains() {
    let mut cube = solved(3);
    cube.rotate(2, 1, 1)
        .and_then(|c| c.rotate(0, 2, -1))
        .and_then(|c| c.rotate(0, 2, 1))
        .and_then(|c| c.rotate(2, 1, -1))
        .expect("valid turns");
    assert!(cube.is_solved());
}

#[test]
fn test_is_solved_requires_distinct_faces() {
    let size = 2;
    let mut stickers = vec![];
    for face in Face::ALL {
        let color = match face {
            Face::Bottom => Color(0),
            _ => face.solved_color(),
        };
        stickers.extend([color; 4]);
    }
    let cube = Cube::from_stickers(size, stickers).expect("valid layout");
    assert!(!cube.is_solved());
    assert_eq!(
        cube.validate(),
        Err(Defect::WrongColorCount {
            color: Color(0),
            count: 8,
            expected: 4,
        }),
    );

    // A permutation of colors among faces is still solved.
    let cube = Cube::from_stickers(
        size,
        [3, 1, 4, 0, 5, 2].into_iter().flat_map(|c| [Color(c); 4]),
    )
    .expect("valid layout");
    assert!(cube.is_solved());
    assert!(cube.is_correct());
}

#[test]
fn test_validate() {
    for size in 1..=6 {
        assert_eq!(solved(size).validate(), Ok(()));
    }

    let mut cube = solved(3);
    cube[(Face::Right, 1, 2)] = Color(9);
    assert!(!cube.is_correct());
    assert_eq!(
        cube.validate(),
        Err(Defect::ColorOutOfRange {
            face: Face::Right,
            row: 1,
            col: 2,
            color: Color(9),
        }),
    );

    let mut cube = solved(3);
    cube[(Face::Top, 0, 0)] = Color(5);
    assert_eq!(
        cube.validate(),
        Err(Defect::WrongColorCount {
            color: Color(0),
            count: 8,
            expected: 9,
        }),
    );
}

#[test]
fn test_sticker_access() {
    let mut cube = solved(3);
    assert_eq!(cube.get(Face::Back, 2, 2), Some(Color(4)));
    assert_eq!(cube.get(Face::Back, 3, 0), None);
    assert_eq!(cube.get(Face::Back, 0, 3), None);
    *cube.get_mut(Face::Left, 0, 1).expect("in range") = Color(2);
    assert_eq!(cube[(Face::Left, 0, 1)], Color(2));
    assert_eq!(cube.stickers()[9 + 1], Color(2));
}

#[test]
fn test_from_stickers_count() {
    assert_eq!(
        Cube::from_stickers(2, vec![Color(0); 23]),
        Err(CubeError::StickerCount {
            expected: 24,
            got: 23,
        }),
    );
    assert_eq!(Cube::from_stickers(0, vec![]), Err(CubeError::InvalidSize));
}

#[test]
fn test_serde_layout() {
    let mut cube = solved(2);
    cube.rotate(2, 1, 1).expect("valid turn");
    let json = serde_json::to_string(&cube).expect("serializable");
    assert!(json.starts_with(r#"{"size":2,"faces":[[[0,0],[1,1]],"#));
    assert_eq!(serde_json::from_str::<Cube>(&json).expect("valid json"), cube);

    let bad = r#"{"size":2,"faces":[[[0,0],[0]],[],[],[],[],[]]}"#;
    assert!(serde_json::from_str::<Cube>(bad).is_err());
}

/// Position of a sticker center in 3D, doubled so that it is an integer, for a
/// cube spanning `0..=2*size` on each axis. `x` points right, `y` up, and `z`
/// toward the viewer of the front face.
fn sticker_position(size: usize, face: Face, row: usize, col: usize) -> [i64; 3] {
    let m = 2 * size as i64;
    let r = 2 * row as i64 + 1;
    let c = 2 * col as i64 + 1;
    match face {
        Face::Top => [c, m, r],
        Face::Left => [0, m - r, c],
        Face::Front => [c, m - r, m],
        Face::Right => [m, m - r, m - c],
        Face::Back => [m - c, m - r, 0],
        Face::Bottom => [c, 0, m - r],
    }
}

/// Returns the outward axis of a face as `(axis, is_positive)`.
fn face_axis(face: Face) -> (usize, bool) {
    match face {
        Face::Top => (1, true),
        Face::Bottom => (1, false),
        Face::Left => (0, false),
        Face::Right => (0, true),
        Face::Front => (2, true),
        Face::Back => (2, false),
    }
}

/// Rotates a point a quarter turn clockwise as seen from outside `face`.
fn rotate_position(size: usize, p: [i64; 3], face: Face) -> [i64; 3] {
    let (axis, positive) = face_axis(face);
    let center = size as i64;
    let mut q = p.map(|v| v - center);
    let (i, j) = ((axis + 1) % 3, (axis + 2) % 3);
    let (qi, qj) = (q[i], q[j]);
    // Counterclockwise about the positive axis maps e_i to e_j.
    if positive {
        (q[i], q[j]) = (qj, -qi);
    } else {
        (q[i], q[j]) = (-qj, qi);
    }
    q.map(|v| v + center)
}

/// Returns how many layers deep a sticker is from `face`, 0 being outermost.
fn layer_from(size: usize, p: [i64; 3], face: Face) -> usize {
    let m = 2 * size as i64;
    let (axis, positive) = face_axis(face);
    // Move from the sticker onto the center of its piece.
    let v = p[axis].clamp(1, m - 1);
    let dist = if positive { m - v } else { v };
    ((dist - 1) / 2) as usize
}

#[test]
fn test_turns_are_rigid_rotations() {
    for size in SIZES {
        let start = labeled(size);
        let at_position: std::collections::HashMap<[i64; 3], (Face, usize, usize)> = start
            .iter()
            .map(|(f, r, c, _)| (sticker_position(size, f, r, c), (f, r, c)))
            .collect();
        for (face, depth) in all_turns(size) {
            let turned = Face::from_index(face).expect("valid face");
            let mut cube = start.clone();
            cube.rotate(face, depth, 1).expect("valid turn");
            for (f, r, c, color) in start.iter() {
                let p = sticker_position(size, f, r, c);
                let (f2, r2, c2) = if layer_from(size, p, turned) < depth {
                    at_position[&rotate_position(size, p, turned)]
                } else {
                    (f, r, c)
                };
                assert_eq!(
                    cube[(f2, r2, c2)],
                    color,
                    "size {size}, turning {turned} depth {depth}: \
                     sticker from {f} ({r}, {c}) should be at {f2} ({r2}, {c2})",
                );
            }
        }
    }
}

fn cube_and_twists() -> impl Strategy<Value = (usize, Vec<Twist>)> {
    (1..=6_usize).prop_flat_map(|size| {
        let twist = (any::<Face>(), 1..=size, -8..8_i32)
            .prop_map(|(face, depth, times)| Twist::new(face, depth, times));
        (Just(size), prop::collection::vec(twist, 0..20))
    })
}

proptest! {
    #[test]
    fn proptest_twists_then_inverses((size, twists) in cube_and_twists()) {
        let start = labeled(size);
        let mut cube = start.clone();
        cube.apply_all(twists.iter().copied()).expect("valid twists");
        cube.apply_all(twists.iter().rev().map(|t| t.inverse())).expect("valid twists");
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn proptest_turns_preserve_validity((size, twists) in cube_and_twists()) {
        let mut cube = solved(size);
        cube.apply_all(twists).expect("valid twists");
        prop_assert!(cube.is_correct());

        let before = cube.clone();
        for face in 0..6 {
            cube.rotate(face, 1, 4).expect("valid turn");
        }
        prop_assert_eq!(cube, before);
    }
}
