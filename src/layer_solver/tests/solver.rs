use cube_core::{CubeState, Face, RotationCommand, Scrambler, parse_sequence};
use layer_solver::{BOTTOM_CROSS, Layer, LayerSolver, Solve, SolveStage, SolverConfig};
use log::info;

/// Solves a cube built from `notation` and checks the whole bottom layer.
fn test_solving(notation: &str) -> Vec<RotationCommand> {
    let scramble = parse_sequence(notation).unwrap();
    let mut cube = CubeState::from_commands(&scramble);
    let solution = cube.solve().unwrap();

    assert_bottom_layer_solved(&cube, notation);
    assert_eq!(solution.stage(), SolveStage::BottomCornersDone);
    assert_eq!(solution.unsolved_layers(), [Layer::Middle, Layer::Top]);

    // Replaying the moves on the scramble reproduces the solved state
    let mut replay = CubeState::from_commands(&scramble);
    replay.rotate_all(solution.moves());
    assert_eq!(replay, cube, "replay differs for {notation}");

    solution.into_moves()
}

fn assert_bottom_layer_solved(cube: &CubeState, context: &str) {
    for local in 0..9 {
        assert_eq!(
            cube.current_face(Face::Down, local),
            Face::Down,
            "DOWN {local} after {context}\n{cube}"
        );
    }
    for side in Face::SIDES {
        for local in [6, 7, 8] {
            assert_eq!(
                cube.current_face(side, local),
                side,
                "{side} {local} after {context}\n{cube}"
            );
        }
    }
    assert!(BOTTOM_CROSS.iter().all(|piece| piece.is_placed(cube)));
    assert!(cube.is_cubelet_bijection());
}

#[test_log::test]
fn test_bottom_layer_front_rotations() {
    test_solving("F");
    test_solving("F F");
    test_solving("F'");
}

#[test_log::test]
fn test_bottom_layer_left_rotations() {
    test_solving("L");
    test_solving("L L");
    test_solving("L'");
}

#[test_log::test]
fn test_bottom_layer_back_rotations() {
    test_solving("B");
    test_solving("B B");
    test_solving("B'");
}

#[test_log::test]
fn test_bottom_layer_right_rotations() {
    test_solving("R");
    test_solving("R R");
    test_solving("R'");
}

#[test_log::test]
fn test_bottom_layer_front_and_up_rotations() {
    test_solving("F F U");
    test_solving("F F U U");
    test_solving("F F U'");
}

#[test_log::test]
fn test_bottom_layer_left_back_and_right_rotations() {
    test_solving("F F U L");
    test_solving("F F U L'");

    test_solving("F F U U B");
    test_solving("F F U U B'");

    test_solving("F F U' R");
    test_solving("F F U' R'");
}

#[test_log::test]
fn test_piece_in_bottom_layer_but_wrong_position() {
    test_solving("F L");
    test_solving("F F U L L");
}

#[test_log::test]
fn test_bottom_layer_down_rotations() {
    test_solving("D");
    test_solving("D D");
    test_solving("D'");
}

#[test_log::test]
fn test_regressions() {
    test_solving("D D L D' F' L' U' U' B' R F' F' R D F L D F' U' R");
    test_solving("B F' B R' R' R' R' U' B' U' R' U L L' F' F U' L U U'");
    test_solving("R L' D B' R' F R' F' R U' B' F U' B F' U L F' D' R");
}

#[test_log::test]
fn test_random_scrambles() {
    let mut scrambler = Scrambler::with_seed(20, 0x5eed);
    let mut longest = 0;
    for _ in 0..500 {
        let scramble = scrambler.scramble();
        let notation = cube_core::format_sequence(&scramble);
        longest = longest.max(test_solving(&notation).len());
    }
    info!("Longest bottom layer solution: {longest} moves");
}

#[test_log::test]
fn test_random_scramble_lengths() {
    fastrand::seed(17);
    for _ in 0..200 {
        let length = fastrand::usize(0..60);
        let mut scrambler = Scrambler::with_seed(length, fastrand::u64(..));
        let notation = cube_core::format_sequence(&scrambler.scramble());
        test_solving(&notation);
    }
}

#[test_log::test]
fn test_solving_twice_is_a_no_op() {
    let mut cube = CubeState::from_commands(&parse_sequence("R U F' L D2 B").unwrap());
    cube.solve().unwrap();
    let solved = cube.clone();
    let again = cube.solve().unwrap();
    assert!(again.moves().is_empty());
    assert_eq!(cube, solved);
}

#[test_log::test]
fn test_middle_and_top_layers_are_not_attempted() {
    let mut cube = CubeState::from_commands(&parse_sequence("F R U").unwrap());
    let solution = LayerSolver::new(SolverConfig::default())
        .solve(&mut cube)
        .unwrap();
    assert_bottom_layer_solved(&cube, "F R U");
    assert_eq!(solution.solved_layers(), [Layer::Bottom]);
    assert_eq!(solution.unsolved_layers(), [Layer::Middle, Layer::Top]);
}

#[test_log::test]
fn test_step_limit_from_config() {
    let config = SolverConfig::from_toml_str("max_steps = 2").unwrap();
    let mut cube = CubeState::from_commands(&parse_sequence("D").unwrap());
    let before = cube.clone();
    assert!(LayerSolver::new(config).solve(&mut cube).is_err());
    assert_eq!(cube, before);
}
