use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::{
    error::{ContextKind, ContextValue, ErrorKind},
    Parser,
};
use street_paths::{
    error::{LoadError, QueryError, SearchError},
    graphs::network_loader::{LoadPolicy, NetworkLoader},
    search::{
        dijkstra::{Dijkstra, StopCondition},
        path::{QueryOutcome, ShortestPathRequest},
    },
    utility::get_progressspinner,
};

const USAGE: &str = "Usage: street_searcher <map_name> <start_coords> <end_coords>";

/// Finds the shortest route between two locations of a road map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Road file, one `<from> <to> <distance> <road-name>` per line
    map: PathBuf,

    /// Name of the start location
    start: String,

    /// Name of the end location
    end: String,

    /// Skip malformed lines instead of aborting the load
    #[arg(long)]
    skip_malformed: bool,

    /// Give up the search after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print the result as json
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if is_wrong_argument_count(&err) => {
            log::debug!("{}", err);
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(err) => err.exit(),
    };

    let policy = if args.skip_malformed {
        LoadPolicy::SkipMalformed
    } else {
        LoadPolicy::Abort
    };

    let spinner = get_progressspinner("Loading network");
    let loaded = NetworkLoader::new(policy).load_file(&args.map);
    spinner.finish_and_clear();

    let (graph, report) = match loaded {
        Ok(loaded) => loaded,
        Err(LoadError::Io { path, source }) => {
            log::debug!("{}", source);
            eprintln!("Could not find file {}", path.display());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("Could not load network: {}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("Network Loaded!");
    println!("Loaded {} roads", report.roads);
    println!("Loaded {} endpoints", report.locations);
    for skipped in &report.skipped_lines {
        eprintln!("Skipped line {}: {}", skipped.line_number, skipped.kind);
    }

    let request = match ShortestPathRequest::resolve(&graph, &args.start, &args.end) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let stop = match args.timeout_ms {
        Some(timeout) => StopCondition::none().with_timeout(Duration::from_millis(timeout)),
        None => StopCondition::none(),
    };

    let route = match Dijkstra::new(&graph).one_to_one(request.source, request.target, &stop) {
        Ok(route) => route,
        Err(err @ (SearchError::DeadlineExceeded | SearchError::Cancelled)) => {
            eprintln!("Search aborted: {}", err);
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("{}", QueryError::from(err));
            return ExitCode::FAILURE;
        }
    };

    let outcome = QueryOutcome::new(&graph, route.as_ref());
    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Could not serialize result: {}", err);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    print_outcome(&outcome);
    ExitCode::SUCCESS
}

/// Too few or too many positional arguments. Bad option values and unknown
/// flags are ordinary clap errors.
fn is_wrong_argument_count(err: &clap::Error) -> bool {
    match err.kind() {
        ErrorKind::MissingRequiredArgument | ErrorKind::TooManyValues => true,
        ErrorKind::UnknownArgument => match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => !arg.starts_with('-'),
            _ => false,
        },
        _ => false,
    }
}

fn print_outcome(outcome: &QueryOutcome) {
    match outcome {
        QueryOutcome::Found { distance, segments } => {
            println!("Total Distance: {}", distance);
            for segment in segments {
                println!("{} {}", segment.road, segment.distance);
            }
        }
        QueryOutcome::NoPath => println!("No path found"),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{is_wrong_argument_count, Args};

    fn parse_error(args: &[&str]) -> clap::Error {
        match Args::try_parse_from(args) {
            Ok(args) => panic!("unexpectedly parsed {:?}", args),
            Err(err) => err,
        }
    }

    #[test]
    fn positional_count_errors_get_the_usage_line() {
        assert!(is_wrong_argument_count(&parse_error(&["street_searcher"])));
        assert!(is_wrong_argument_count(&parse_error(&["street_searcher", "map.txt", "A"])));
        assert!(is_wrong_argument_count(&parse_error(&[
            "street_searcher",
            "map.txt",
            "A",
            "B",
            "C"
        ])));
    }

    #[test]
    fn option_errors_are_reported_by_clap() {
        assert!(!is_wrong_argument_count(&parse_error(&[
            "street_searcher",
            "map.txt",
            "A",
            "B",
            "--timeout-ms",
            "abc"
        ])));
        assert!(!is_wrong_argument_count(&parse_error(&[
            "street_searcher",
            "map.txt",
            "A",
            "B",
            "--fast"
        ])));
    }

    #[test]
    fn three_arguments_parse() {
        let args = Args::try_parse_from(["street_searcher", "map.txt", "A", "B"]).unwrap();
        assert_eq!(args.start, "A");
        assert_eq!(args.end, "B");
        assert!(!args.skip_malformed);
    }
}
