use std::io::Cursor;

use connect_four::error::ShellError;
use connect_four::game::{ActivePlayer, Board, GameEngine, GameOutcome};
use connect_four::shell::ConsoleShell;

fn play(first: ActivePlayer, input: &str) -> (Result<GameOutcome, ShellError>, String) {
    let mut engine = GameEngine::with_state(Board::new(), first);
    let mut shell = ConsoleShell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let result = engine.run_session(&mut shell);
    let transcript = String::from_utf8(shell.into_output()).unwrap();
    (result, transcript)
}

#[test]
fn vertical_win_is_announced() {
    // Ada (X) stacks column 1 while Grace (O) stacks column 2.
    let input = "Ada\nGrace\n1\n2\n1\n2\n1\n2\n1\n";
    let (result, transcript) = play(ActivePlayer::Player1, input);

    assert_eq!(result.unwrap(), GameOutcome::Winner(ActivePlayer::Player1));
    assert!(transcript.starts_with("Enter name for player 1: Enter name for player 2: "));
    assert!(transcript.contains("Enter move for Ada: "));
    assert!(transcript.contains("Enter move for Grace: "));
    assert!(transcript.contains("| X | O |   |   |   |   |   |"));
    assert!(transcript.ends_with("Congratulations, Ada!\n"));
}

#[test]
fn bad_input_lists_available_columns() {
    let input = "Ada\nGrace\nseven\n0\n4\n";
    let (result, transcript) = play(ActivePlayer::Player2, input);

    // Input runs out on Ada's first turn.
    assert!(matches!(result, Err(ShellError::InputClosed("move"))));
    assert_eq!(
        transcript
            .matches("Available columns are: 1, 2, 3, 4, 5, 6, 7\n")
            .count(),
        2
    );
    assert!(transcript.contains("|   |   |   | O |   |   |   |"));
    assert!(transcript.trim_end().ends_with("Enter move for Ada:"));
}

#[test]
fn full_column_is_rejected_at_the_prompt() {
    // Six drops fill column 1 without a winner; the seventh attempt is refused.
    let input = "Ada\nGrace\n1\n1\n1\n1\n1\n1\n1\n";
    let (result, transcript) = play(ActivePlayer::Player1, input);

    assert!(matches!(result, Err(ShellError::InputClosed("move"))));
    assert!(transcript.contains("Available columns are: 2, 3, 4, 5, 6, 7\n"));
}
