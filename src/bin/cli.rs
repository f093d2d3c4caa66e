use clap::{Parser, Subcommand};
use scripture_engine::ScriptureEngine;

#[derive(Parser)]
#[command(name = "scripture-cli")]
#[command(about = "Scripture Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a Christian-canon reference
    Lookup {
        /// Reference, e.g. "John 3:16" or "Gen 1:1-5"
        reference: String,

        /// Version short code or long name
        #[arg(short, long)]
        version: Option<String>,
    },

    /// Look up a Jewish-canon reference
    Hebrew {
        /// Reference, e.g. "Berakhot 2:1"
        reference: String,

        /// Version/edition title
        #[arg(short, long)]
        version: Option<String>,

        /// Language hint, e.g. "English"
        #[arg(short, long)]
        language: Option<String>,

        /// Leave gaps in sparse editions unfilled
        #[arg(long)]
        no_fill: bool,
    },

    /// Scan a message for embedded references and fetch each one
    Scan {
        /// The message text
        message: String,
    },

    /// Look a Hebrew word up in the lexicons
    Lexicon {
        /// The word (in Hebrew)
        word: String,

        /// Reference to narrow the search, e.g. "Genesis 1:1"
        #[arg(short, long)]
        lookup_ref: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let engine = ScriptureEngine::new().await?;

    match cli.command {
        Commands::Lookup { reference, version } => {
            let passage = engine.lookup_bible(&reference, version.as_deref()).await?;
            print_passage(&passage);
        }

        Commands::Hebrew {
            reference,
            version,
            language,
            no_fill,
        } => {
            let passage = engine
                .lookup_hebrew(
                    &reference,
                    version.as_deref(),
                    language.as_deref(),
                    !no_fill,
                )
                .await?;
            print_passage(&passage);
        }

        Commands::Scan { message } => {
            let responses = engine.scan_message(&message).await;
            if responses.is_empty() {
                println!("No references found");
            }
            for passage in &responses {
                print_passage(passage);
                println!();
            }
        }

        Commands::Lexicon { word, lookup_ref } => {
            let entries = engine.lexicon(&word, lookup_ref.as_deref()).await?;
            if entries.is_empty() {
                println!("No lexicon entries found for: {word}");
            }
            for entry in &entries {
                println!("{} [{}]", entry.headword, entry.lexicon);
                for definition in &entry.definitions {
                    println!("  - {definition}");
                }
            }
        }
    }

    Ok(())
}

fn print_passage(passage: &scripture_engine::PassageResponse) {
    match &passage.version {
        Some(version) => println!("{} [{} / {}]", passage.reference, passage.provider, version),
        None => println!("{} [{}]", passage.reference, passage.provider),
    }
    for line in passage.text.segments() {
        println!("{line}");
    }
}
