use serde::Deserialize;

use chess_rules::board::{Board, Color, GameStatus};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    layout: String,
    to_move: String,
    expected: String,
}

fn color_from_name(name: &str) -> Color {
    match name {
        "white" => Color::White,
        "black" => Color::Black,
        other => panic!("unknown color '{other}'"),
    }
}

fn status_from_name(name: &str) -> GameStatus {
    match name {
        "ongoing" => GameStatus::Ongoing,
        "check" => GameStatus::Check,
        "checkmate" => GameStatus::Checkmate,
        "stalemate" => GameStatus::Stalemate,
        other => panic!("unknown status '{other}'"),
    }
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");

    for scenario in &set.scenarios {
        let mut board = Board::try_from_layout(&scenario.layout)
            .unwrap_or_else(|e| panic!("{}: {e}", scenario.name));
        let color = color_from_name(&scenario.to_move);
        let expected = status_from_name(&scenario.expected);

        assert_eq!(
            board.status(color),
            Ok(expected),
            "status mismatch for {}",
            scenario.name
        );
        assert_eq!(
            board.is_checkmate(color),
            Ok(expected == GameStatus::Checkmate),
            "checkmate mismatch for {}",
            scenario.name
        );
        assert_eq!(
            board.is_stalemate(color),
            Ok(expected == GameStatus::Stalemate),
            "stalemate mismatch for {}",
            scenario.name
        );
        assert_eq!(
            board.to_layout(),
            scenario.layout,
            "detection changed the position in {}",
            scenario.name
        );
    }
}
