use anyhow::Context;
use docfinder::finder::service::DocFinder;
use docfinder::storage::memory::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} [--noise <file>] [--doc <name>=<file>]... [--json] \
             (--find <term>... | --complete <text> | --get <name>)",
            args[0]
        );
        eprintln!("Example: {} --noise noise.txt --doc a=a.txt --find cat dog", args[0]);
        eprintln!("Example: {} --doc a=a.txt --complete \"the sna\"", args[0]);
        std::process::exit(1);
    }

    let mut noise_files: Vec<String> = vec![];
    let mut docs: Vec<(String, String)> = vec![];
    let mut find_terms: Vec<String> = vec![];
    let mut complete_text: Option<String> = None;
    let mut get_name: Option<String> = None;
    let mut json_output = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--noise" => {
                noise_files.push(args[i + 1].clone());
                i += 2;
            }
            "--doc" => {
                let Some((name, path)) = args[i + 1].split_once('=') else {
                    eprintln!("--doc expects <name>=<file>, got {}", args[i + 1]);
                    std::process::exit(1);
                };
                docs.push((name.to_string(), path.to_string()));
                i += 2;
            }
            "--find" => {
                // Every remaining argument is a search term.
                find_terms = args[i + 1..].to_vec();
                break;
            }
            "--complete" => {
                complete_text = Some(args[i + 1].clone());
                i += 2;
            }
            "--get" => {
                get_name = Some(args[i + 1].clone());
                i += 2;
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            _ => {
                i += 1;
            }
        }
    }

    let finder = DocFinder::new(MemoryStore::new());
    finder.init().await?;

    for path in &noise_files {
        let noise_text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading noise file {}", path))?;
        finder.add_noise_words(&noise_text).await?;
    }

    for (name, path) in &docs {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading document file {}", path))?;
        finder.add_document(name, &content).await?;
        tracing::info!("Indexed {} from {}", name, path);
    }

    if !find_terms.is_empty() {
        let results = finder.find(&find_terms).await?;
        if json_output {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            for result in &results {
                print!("{}", result);
            }
        }
    } else if let Some(text) = complete_text {
        let completions = finder.complete(&text).await;
        if json_output {
            println!("{}", serde_json::to_string_pretty(&completions)?);
        } else {
            for word in &completions {
                println!("{}", word);
            }
        }
    } else if let Some(name) = get_name {
        let content = finder.doc_content(&name).await?;
        print!("{}", content);
    }

    Ok(())
}
