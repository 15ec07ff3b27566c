//! Kotoba Hunters entry point
//!
//! The browser build starts through `platform::start`. The native build
//! prints a puzzle to the terminal:
//!
//! `kotoba-hunters --level N4 --size 8 --seed 42 --data-dir data`

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use kotoba_hunters::{
    JlptLevel, Word,
    consts::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE},
    sim::{GameConfig, GameState},
    vocab,
};

#[cfg(not(target_arch = "wasm32"))]
fn parse_level(s: &str) -> Result<JlptLevel, String> {
    JlptLevel::from_str(s).ok_or_else(|| format!("unknown JLPT level {s:?} (expected N1-N5)"))
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "kotoba-hunters", version, about = "Print a JLPT word-search puzzle")]
struct Cli {
    /// Vocabulary level (N1-N5)
    #[arg(long, short, default_value = "N5", value_parser = parse_level)]
    level: JlptLevel,
    /// Grid side length
    #[arg(
        long,
        short,
        default_value_t = DEFAULT_GRID_SIZE as u8,
        value_parser = clap::value_parser!(u8).range(MIN_GRID_SIZE as i64..=MAX_GRID_SIZE as i64)
    )]
    size: u8,
    /// Run seed (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,
    /// Directory holding n1.csv .. n5.csv; the built-in N5 list is used otherwise
    #[arg(long)]
    data_dir: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Cli {
    /// Vocabulary from `data_dir`, or the built-in list
    fn words(&self) -> Vec<Word> {
        let Some(dir) = &self.data_dir else {
            return vocab::builtin_words();
        };
        match vocab::load_words_from_dir(dir, self.level) {
            Ok(words) => words,
            Err(err) => {
                log::error!("{}", err);
                log::warn!("Falling back to built-in N5 words");
                vocab::builtin_words()
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Kotoba Hunters (native) starting...");

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(kotoba_hunters::time_seed);
    let size = cli.size as usize;
    let words = cli.words();
    let config = GameConfig {
        level: cli.level,
        grid_size: size,
        ..Default::default()
    };
    let state = GameState::new(&words, config, seed);

    println!("{} / {}x{} / seed {}\n", cli.level, size, size, seed);
    println!("{}\n", state.grid.to_text());
    for word in &state.words {
        println!("{}  {}  {}", word.hiragana, word.kanji, word.meaning);
    }
    println!("\n{} words placed", state.total_words());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::start, this is just to satisfy the compiler
}
