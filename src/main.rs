//! Perft divide runner.
//!
//! Usage:
//! `cargo run --release -- 5`
//! `cargo run --release -- 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -`
//! `cargo run --release -- 3 r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -`
//!
//! Prints the node count under every root move followed by the total.

use std::process::ExitCode;
use std::time::Instant;

use alder_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use alder_chess::game_state::game_state::GameState;
use alder_chess::move_generation::perft::perft_divide;
use alder_chess::utils::render_game_state::render_game_state;

const DEFAULT_DEPTH: u8 = 4;

/// Split the command line into a depth and a FEN. A leading argument that is
/// not a number starts the FEN and the default depth is used.
fn parse_args(args: &[String]) -> (u8, String) {
    let (depth, fen_fields) = match args.first().map(|arg| arg.parse::<u8>()) {
        Some(Ok(depth)) => (depth, &args[1..]),
        _ => (DEFAULT_DEPTH, args),
    };

    let fen = if fen_fields.is_empty() {
        STARTING_POSITION_FEN.to_owned()
    } else {
        fen_fields.join(" ")
    };
    (depth, fen)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (depth, fen) = parse_args(&args);

    let game = match GameState::from_fen(&fen) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("invalid FEN '{fen}': {err}");
            eprintln!("usage: alder_chess [depth] [fen...]");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", render_game_state(&game));
    println!("{}", game.get_fen());
    println!();

    let started = Instant::now();
    let divide = perft_divide(&game, depth);
    let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();
    for (mv, nodes) in &divide {
        println!("{mv}: {nodes}");
    }
    let elapsed = started.elapsed();

    println!();
    println!("depth {depth}: {total} nodes in {:.3}s", elapsed.as_secs_f64());
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn no_arguments_use_start_position_and_default_depth() {
        assert_eq!(parse_args(&[]), (DEFAULT_DEPTH, STARTING_POSITION_FEN.to_owned()));
    }

    #[test]
    fn depth_then_fen() {
        let (depth, fen) = parse_args(&args("3 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"));
        assert_eq!(depth, 3);
        assert_eq!(fen, "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -");
    }

    #[test]
    fn fen_without_depth_uses_default_depth() {
        let (depth, fen) = parse_args(&args("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"));
        assert_eq!(depth, DEFAULT_DEPTH);
        assert_eq!(fen, "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -");
        assert!(GameState::from_fen(&fen).is_ok());
    }
}
