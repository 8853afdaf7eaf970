use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use log::{info, warn};

use minimax_ttt::board::{Move, Player};
use minimax_ttt::config::{self, Config, Opponent};
use minimax_ttt::evaluator::{Evaluator, TerminalEvaluator, WIN_SCORE};
use minimax_ttt::search::Minimax;
use minimax_ttt::tic_tac_toe::TicTacToe;
use minimax_ttt::{players, rules};

fn parse_move(line: &str) -> Result<Move> {
    let mut parts = line.split_whitespace();
    let mut next = |name: &str| -> Result<usize> {
        parts
            .next()
            .ok_or_else(|| anyhow!("missing {}", name))?
            .parse()
            .with_context(|| format!("{} must be a number from 0 to 2", name))
    };
    let row = next("row")?;
    let col = next("column")?;
    if parts.next().is_some() {
        bail!("expected only a row and a column");
    }
    Ok(Move::new(row, col))
}

// Keeps asking until the answer names an empty cell.
fn read_human_move<R: BufRead, W: Write>(input: &mut R, output: &mut W, game: &TicTacToe) -> Result<Move> {
    let mut question = "Your turn (O). Enter row and column (e.g. 0 0): ";
    loop {
        let line = config::prompt(input, output, question)?;
        match parse_move(&line) {
            Ok(mv) if rules::is_legal(&game.board, mv.row, mv.col) => return Ok(mv),
            Ok(mv) => warn!("{} is out of bounds or already taken", mv),
            Err(err) => warn!("{:#}", err),
        }
        question = "Invalid move. Try again: ";
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    println!("Welcome to Tic-Tac-Toe vs Computer (minimax)!");
    let config = Config::read(&mut input, &mut output)?;
    let minimax = Minimax::new(config.evaluator.build());
    let mut rng = rand::thread_rng();
    let mut game = TicTacToe::new(config.first);
    info!("starting with {:?} to move", game.current_player);

    while !game.done() {
        println!("{}", game);
        let mv = match game.current_player {
            Player::Max => {
                println!("Computer (X) is thinking...");
                minimax
                    .find_best_move(&game.board, config.depth)
                    .context("no move available")?
            }
            Player::Min => match config.opponent {
                Opponent::Human => read_human_move(&mut input, &mut output, &game)?,
                Opponent::Random => players::random_move(&game.board, &mut rng).context("no move available")?,
            },
        };
        game.step(mv)?;
    }

    println!("{}", game);
    match TerminalEvaluator.score(&game.board) {
        WIN_SCORE => println!("Computer (X) wins!"),
        score if score == -WIN_SCORE => println!("You (O) win!"),
        _ => println!("It's a draw!"),
    }

    Ok(())
}
