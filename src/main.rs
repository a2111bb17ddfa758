use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use searchlab::engines::{Algorithm, ExactMatchStore, PatternMatcher, PrefixTree, SortedSequence};
use searchlab::output;
use searchlab::utils::{self, AppConfig};
use serde_json::json;
use std::io::Write;

#[derive(Parser)]
#[command(name = "searchlab")]
#[command(about = "Classic search engines with step-by-step traces")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Start from empty engines instead of the sample data
    #[arg(long, global = true)]
    empty: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Binary search over a sorted integer sequence
    Binary {
        /// Value to look for
        #[arg(allow_negative_numbers = true)]
        target: i64,

        /// Replace the sample sequence with these values
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Insert a value before searching (repeatable)
        #[arg(short, long, allow_negative_numbers = true)]
        insert: Vec<i64>,
    },
    /// Exact-match key/value lookup
    Store {
        /// Key to look up
        key: String,

        /// Insert a KEY=VALUE pair before searching (repeatable)
        #[arg(short, long)]
        insert: Vec<String>,

        /// List all entries after the lookup
        #[arg(short, long)]
        list: bool,
    },
    /// Prefix tree lookups and autocomplete
    Trie {
        /// Insert a word before running the action (repeatable)
        #[arg(short, long)]
        insert: Vec<String>,

        #[command(subcommand)]
        action: TrieAction,
    },
    /// Naive and KMP substring search
    Substring {
        /// Pattern to look for
        pattern: String,

        /// Algorithm to run
        #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Both)]
        algorithm: AlgorithmArg,

        /// Add a text to search (repeatable)
        #[arg(short, long)]
        text: Vec<String>,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Subcommand)]
enum TrieAction {
    /// Exact word search
    Search { word: String },
    /// Words starting with a prefix
    Complete {
        prefix: String,

        /// Maximum number of suggestions (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List every stored word
    Words,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Naive,
    Kmp,
    Both,
}

impl AlgorithmArg {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmArg::Naive => &[Algorithm::Naive],
            AlgorithmArg::Kmp => &[Algorithm::Kmp],
            AlgorithmArg::Both => &[Algorithm::Naive, Algorithm::Kmp],
        }
    }
}

/// Per-invocation settings resolved from the CLI flags and the config file
struct Session {
    config: AppConfig,
    json: bool,
}

impl Session {
    fn color(&self) -> bool {
        self.config.color
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = AppConfig::load()?;
    if cli.no_color {
        config.color = false;
    }
    if cli.empty {
        config.seed_samples = false;
    }
    let session = Session {
        config,
        json: cli.json,
    };

    match cli.command {
        Commands::Binary {
            target,
            values,
            insert,
        } => run_binary(&session, target, values, insert),
        Commands::Store { key, insert, list } => run_store(&session, &key, &insert, list),
        Commands::Trie { insert, action } => run_trie(&session, &insert, action),
        Commands::Substring {
            pattern,
            algorithm,
            text,
        } => run_substring(&session, &pattern, algorithm, text),
        Commands::Config { init } => run_config(&session, init),
    }
}

fn run_binary(session: &Session, target: i64, values: Vec<i64>, insert: Vec<i64>) -> Result<()> {
    let mut seq = if !values.is_empty() {
        SortedSequence::from_values(values)
    } else if session.config.seed_samples {
        utils::sample_sequence()
    } else {
        SortedSequence::new()
    };

    for value in insert {
        seq.insert(value);
    }

    let result = seq.search(target);

    if session.json {
        let mut out = std::io::stdout().lock();
        output::print_json(&mut out, &json!({ "values": seq.values(), "result": result }))?;
    } else {
        let mut out = output::stdout(session.color());
        output::print_binary_search(&mut out, seq.values(), target, &result)?;
    }
    Ok(())
}

fn run_store(session: &Session, key: &str, insert: &[String], list: bool) -> Result<()> {
    if key.trim().is_empty() {
        bail!("Key must not be empty");
    }

    let mut store = if session.config.seed_samples {
        utils::sample_store()
    } else {
        ExactMatchStore::new()
    };

    for pair in insert {
        let (k, v) = parse_pair(pair)?;
        store.insert(k, v);
    }

    let result = store.search(key.trim());

    if session.json {
        let mut out = std::io::stdout().lock();
        let entries = list.then(|| store.entries());
        output::print_json(
            &mut out,
            &json!({
                "result": result,
                "size": store.size(),
                "entries": entries,
                "operations": store.operations(),
            }),
        )?;
        return Ok(());
    }

    let mut out = output::stdout(session.color());
    output::print_lookup(&mut out, key.trim(), &result)?;
    if list {
        output::print_entries(&mut out, &store.entries())?;
    }
    output::print_operations(&mut out, store.operations())?;
    Ok(())
}

/// Split `KEY=VALUE`, rejecting empty sides
fn parse_pair(pair: &str) -> Result<(&str, &str)> {
    let (key, value) = pair
        .split_once('=')
        .with_context(|| format!("Expected KEY=VALUE, got '{}'", pair))?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        bail!("Key and value must not be empty in '{}'", pair);
    }
    Ok((key, value))
}

fn run_trie(session: &Session, insert: &[String], action: TrieAction) -> Result<()> {
    let mut trie = PrefixTree::with_inventory_limit(session.config.inventory_limit);
    if session.config.seed_samples {
        utils::seed_trie(&mut trie);
    }

    for word in insert {
        let word = word.trim();
        if word.is_empty() {
            bail!("Cannot insert an empty word");
        }
        trie.insert(word);
    }

    let mut out = output::stdout(session.color());

    match action {
        TrieAction::Search { word } => {
            let result = trie.search(word.trim());
            if session.json {
                print_stdout_json(&json!({ "result": result, "operations": trie.operations() }))?;
            } else {
                output::print_trie_search(&mut out, word.trim(), &result)?;
                output::print_operations(&mut out, trie.operations())?;
            }
        }
        TrieAction::Complete { prefix, limit } => {
            let limit = limit.unwrap_or(session.config.autocomplete_limit);
            let words = trie.autocomplete(prefix.trim(), limit);
            if session.json {
                print_stdout_json(&json!({ "suggestions": words, "operations": trie.operations() }))?;
            } else {
                output::print_words(&mut out, &format!("Suggestions for \"{}\"", prefix.trim()), &words)?;
                output::print_operations(&mut out, trie.operations())?;
            }
        }
        TrieAction::Words => {
            let words = trie.all_words();
            if session.json {
                print_stdout_json(&json!({
                    "words": words,
                    "word_count": trie.word_count(),
                    "node_count": trie.node_count(),
                }))?;
            } else {
                output::print_words(&mut out, "Stored words", &words)?;
                writeln!(out, "{} nodes", trie.node_count())?;
            }
        }
    }

    Ok(())
}

fn run_substring(
    session: &Session,
    pattern: &str,
    algorithm: AlgorithmArg,
    texts: Vec<String>,
) -> Result<()> {
    if pattern.is_empty() {
        bail!("Pattern must not be empty");
    }

    let mut matcher = if session.config.seed_samples {
        utils::sample_matcher()
    } else {
        PatternMatcher::new()
    };
    for text in texts {
        matcher.add_text(text);
    }

    let mut results = Vec::new();
    let mut out = output::stdout(session.color());

    for &alg in algorithm.algorithms() {
        let result = matcher.search(alg, pattern);
        if !session.json {
            output::print_substring_result(&mut out, pattern, &result)?;
            output::print_operations(&mut out, matcher.operations())?;
            writeln!(out)?;
        }
        results.push(result);
    }

    if session.json {
        print_stdout_json(&json!({ "texts": matcher.texts(), "results": results }))?;
    }
    Ok(())
}

fn run_config(session: &Session, init: bool) -> Result<()> {
    let path = utils::get_config_path()?;

    if init {
        let written = session.config.save()?;
        println!("Wrote {}", written.display());
        return Ok(());
    }

    if session.json {
        return print_stdout_json(&json!({ "path": path, "config": session.config }));
    }

    println!("Config file:          {}", path.display());
    println!("Exists:               {}", path.exists());
    println!("Autocomplete limit:   {}", session.config.autocomplete_limit);
    println!("Inventory limit:      {}", session.config.inventory_limit);
    println!("Seed samples:         {}", session.config.seed_samples);
    println!("Color:                {}", session.config.color);
    Ok(())
}

fn print_stdout_json(value: &serde_json::Value) -> Result<()> {
    let mut out = std::io::stdout().lock();
    output::print_json(&mut out, value).context("Failed to write JSON output")
}
