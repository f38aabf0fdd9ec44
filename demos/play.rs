use anyhow::Result;
use scrabble_referee::{Game, Outcome, Placement, Play};
use tracing_subscriber::EnvFilter;

const WORDS: &[&str] = &["button", "home", "know", "no", "not", "ow", "snow"];

/// (letter, row, col) of the tiles in each turn
const TURNS: &[&[(char, usize, usize)]] = &[
    &[('n', 7, 7), ('o', 7, 8)],
    &[('s', 7, 6), ('w', 7, 9)],
    &[('h', 9, 8), ('o', 9, 9), ('m', 9, 10), ('e', 9, 11)],
    &[('n', 6, 8), ('o', 6, 9), ('t', 6, 10)],
];

fn run() -> Result<()> {
    let mut game = match std::env::args().nth(1) {
        Some(wordfile) => Game::new().with_wordlist_from_file(&wordfile)?,
        None => Game::new().with_wordlist_from_words(WORDS),
    };
    for tiles in TURNS {
        let play: Play = tiles.iter().copied().map(Placement::from).collect();
        match game.play(&play)? {
            Outcome::Accepted { score, words } => println!("{:?}: {} points", words, score),
            Outcome::Rejected(rejection) => println!("rejected: {}", rejection),
        }
    }
    println!("{}", game.board());
    println!("Game score: {}", game.game_score());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    run()
}
