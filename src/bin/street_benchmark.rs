use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use street_paths::{
    graphs::network_loader::{LoadPolicy, NetworkLoader},
    utility::{benchmark, gen_requests, par_shortest_path_distances},
};

/// Times random shortest path queries on a road map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Road file, one `<from> <to> <distance> <road-name>` per line
    #[arg(short, long)]
    map: PathBuf,

    /// Number of random queries
    #[arg(short, long, default_value = "1000")]
    queries: u32,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let (graph, report) = match NetworkLoader::new(LoadPolicy::SkipMalformed).load_file(&args.map)
    {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Loaded {} roads between {} locations",
        report.roads, report.locations
    );

    let requests = gen_requests(&graph, args.queries);

    let distances = par_shortest_path_distances(&graph, &requests);
    let unreachable = distances
        .iter()
        .filter(|distance| matches!(distance, Ok(None)))
        .count();
    println!(
        "{} of {} queries had no path",
        unreachable,
        requests.len()
    );

    let average_duration = benchmark(&graph, &requests);
    println!("Average dijkstra duration is {:?}", average_duration);

    ExitCode::SUCCESS
}
