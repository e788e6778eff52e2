use std::env;
use std::io::Write;

use campusbrain_core::config::Config;
use campusbrain_core::types::SearchOutcome;
use campusbrain_embed::default_embedder;
use campusbrain_retrieval::{load_corpus, CorpusIndex, Metric, RetrievalService};

fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;

    let corpus_dir = config.corpus_dir();
    let metric: Metric = config.metric().parse()?;
    let corpus = load_corpus(&corpus_dir)?;
    println!("📚 Loaded {} documents from {}", corpus.len(), corpus_dir.display());

    // Let a configured model directory take effect unless the operator
    // already pointed APP_MODEL_DIR somewhere else.
    if env::var("APP_MODEL_DIR").is_err() {
        let model_dir = config.model_dir();
        if model_dir.exists() {
            env::set_var("APP_MODEL_DIR", &model_dir);
        }
    }
    let embedder = default_embedder()?;
    let index = CorpusIndex::build(corpus, embedder.as_ref(), metric)?;
    let service = RetrievalService::new(embedder, index, config.preview_chars());

    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return interactive(&service);
    }
    let cmd = args.remove(0);
    match cmd.as_str() {
        "ask" => {
            let query = args.join(" ");
            if query.trim().is_empty() {
                eprintln!("Usage: campusbrain ask \"<query>\"");
                std::process::exit(1);
            }
            print_outcome(&service.answer(&query)?);
        }
        "list" => {
            for name in service.list_documents() {
                println!("{name}");
            }
        }
        _ => {
            eprintln!("Unknown command: {cmd}");
            eprintln!("Usage: campusbrain [ask \"<query>\" | list]");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn interactive(service: &RetrievalService) -> anyhow::Result<()> {
    println!("Ask a question (Ctrl+D to exit)");
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut query = String::new();
        if std::io::stdin().read_line(&mut query)? == 0 {
            break; // EOF
        }
        print_outcome(&service.answer(query.trim())?);
    }
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Match(result) => {
            println!("\n📖 Source: {}  (score {:.4})", result.source, result.score);
            println!("{}", result.preview);
            println!("💡 Next: {}\n", result.recommendation);
        }
        SearchOutcome::EmptyQuery => println!("Please enter a question."),
        SearchOutcome::EmptyCorpus => println!("No knowledge files found."),
    }
}
