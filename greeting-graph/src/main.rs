//! `greeting` binary: build the greeting graph, invoke it, print the greeting.

use clap::Parser;
use greeting_graph::{logging, render, run_with_config, RunConfig, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "greeting")]
#[command(about = "Greeting graph: runs START → greeting_node → END and prints the greeting")]
struct Args {
    /// Name to greet (defaults to Alice)
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,

    /// Untyped JSON input record, e.g. '{"name": "Alice"}'
    #[arg(long, value_name = "JSON", conflicts_with_all = ["name", "rest"])]
    input: Option<String>,

    /// Print the whole output record as JSON
    #[arg(long)]
    json: bool,

    /// Log node enter/exit to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Positional name words (when -n/--name is not used); use `--` before words starting with `-`
    #[arg(num_args = 0..)]
    rest: Vec<String>,
}

impl Args {
    fn to_options(&self) -> RunOptions {
        let name = match &self.name {
            Some(n) => Some(n.clone()),
            None if !self.rest.is_empty() => Some(self.rest.join(" ")),
            None => None,
        };
        RunOptions {
            name,
            input: self.input.clone(),
            json: self.json,
            verbose: self.verbose,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = RunConfig::default();
    config.apply_options(&args.to_options());

    let output = run_with_config(&config)
        .await
        .and_then(|state| render(&config, &state));
    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
