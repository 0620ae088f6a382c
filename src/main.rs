use std::io::{self, BufRead, Write};

use tictactoe_engine::agent::ai::MinimaxPlayer;
use tictactoe_engine::agent::{GameResult, HumanPlayer, Player};
use tictactoe_engine::game_repr::{Board, Mark};

/// Run one game between the two players. `players[0]` owns X, `players[1]`
/// owns O; the board dictates whose turn it is.
fn play_game(players: &mut [Box<dyn Player>; 2]) -> io::Result<()> {
    let mut board = Board::new();

    while !board.is_terminal() {
        println!("{}", board);

        let mover = board.to_move();
        let index = match mover {
            Mark::X => 0,
            Mark::O => 1,
        };

        let Some(mv) = players[index].get_move(&board) else {
            println!("{} resigned.", players[index].name());
            return Ok(());
        };

        if let Err(err) = board.apply_move(mv) {
            // Humans are re-prompted inside get_move; an illegal move here
            // means a buggy engine.
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} produced an illegal move {}: {}", players[index].name(), mv, err),
            ));
        }

        log::debug!("{} played {}", players[index].name(), mv);
        println!("{} played at {}", players[index].name(), mv);
        players[1 - index].opponent_moved(mv);
    }

    println!("{}", board);
    let result = board
        .outcome()
        .map(GameResult::from_outcome)
        .expect("loop exits only on a terminal board");
    for player in players.iter_mut() {
        player.game_ended(result);
    }
    match result {
        GameResult::XWins => println!("X wins!"),
        GameResult::OWins => println!("O wins!"),
        GameResult::Draw => println!("It's a draw!"),
    }

    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    println!("Tic-Tac-Toe AI Player");
    println!("1. Play as X (go first)");
    println!("2. Play as O (go second)");
    print!("Choose (1/2): ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().lock().read_line(&mut choice)?;
    let human_first = choice.trim() != "2";

    let human_mark = if human_first { Mark::X } else { Mark::O };
    let engine_mark = human_mark.opposite();

    println!();
    println!("Welcome to Intelligent Tic-Tac-Toe!");
    println!("You are playing as {}", human_mark.name());
    println!("Enter moves as row and column numbers (0-2), separated by space");
    println!();

    let human: Box<dyn Player> = Box::new(HumanPlayer::new("You"));
    let engine: Box<dyn Player> = Box::new(MinimaxPlayer::perfect(engine_mark));

    let mut players: [Box<dyn Player>; 2] = if human_first {
        [human, engine]
    } else {
        [engine, human]
    };

    play_game(&mut players)
}
