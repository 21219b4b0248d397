use anyhow::Result;
use clap::Parser;
use log::{error, info};
use rdfsgen::{build, graph_to_turtle, load_document, write_graph_to_file};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rdfsgen")]
#[command(about = "Convert a YAML schema description of classes and properties into RDFS Turtle")]
struct Cli {
    /// Input file, the YAML description of the schema
    #[clap(long, short, default_value = "schema.yml")]
    infile: PathBuf,
    /// Output file, the RDFS description of the schema in Turtle
    #[clap(long, short, default_value = "schema.ttl")]
    outfile: PathBuf,
    /// Print the Turtle output to stdout as well
    #[clap(long, short, action, default_value = "false")]
    print: bool,
    /// Verbose mode - sets the RUST_LOG level to info, defaults to warning level
    #[clap(long, short, action, default_value = "false")]
    verbose: bool,
    /// Debug mode - sets the RUST_LOG level to debug, defaults to warning level
    #[clap(long, action, default_value = "false")]
    debug: bool,
}

fn main() -> Result<()> {
    let cmd = Cli::parse();

    let log_level = if cmd.verbose { "info" } else { "warn" };
    let log_level = if cmd.debug { "debug" } else { log_level };
    std::env::set_var("RUST_LOG", log_level);
    env_logger::init();

    // a load failure is fatal: no graph is built from a partial document
    let document = load_document(&cmd.infile)?;
    let graph = build(&document);
    info!("Built {} triples from {}", graph.len(), cmd.infile.display());

    if cmd.print {
        print!("{}", graph_to_turtle(&graph)?);
    }

    // a save failure is advisory; the conversion itself succeeded
    if let Err(e) = write_graph_to_file(&graph, &cmd.outfile) {
        error!("{e}");
    }

    Ok(())
}
