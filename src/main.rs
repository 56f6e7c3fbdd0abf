use wordle_helper::cli::parse_cli;
use wordle_helper::wordbank::{
    EMBEDDED_WORDLIST, WordBank, load_wordbank_from_file, load_wordbank_from_str,
    user_wordlist_path,
};

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let wordbank = match load_wordbank(cli.wordlist_path.as_deref()) {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    log::info!("loaded {} words", wordbank.len());

    let query = match cli.to_query() {
        Ok(query) => query,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    for word in query.run(&wordbank) {
        println!("{word}");
    }
}

/// An explicit `-w` path wins; otherwise a per-user wordlist is picked up if
/// one exists, falling back to the embedded list.
fn load_wordbank(wordlist_path: Option<&str>) -> Result<WordBank, String> {
    if let Some(path) = wordlist_path {
        return load_wordbank_from_file(path)
            .map_err(|e| format!("failed to load wordlist from '{path}': {e}"));
    }

    if let Some(path) = user_wordlist_path()
        && path.is_file()
    {
        log::info!("using user wordlist at {}", path.display());
        return load_wordbank_from_file(&path)
            .map_err(|e| format!("failed to load wordlist from '{}': {e}", path.display()));
    }

    Ok(load_wordbank_from_str(EMBEDDED_WORDLIST))
}
