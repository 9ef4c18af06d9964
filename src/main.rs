use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use wayfinder::loader;
use wayfinder::search::{AStar, Dijkstra, GreedyBestFirst, PathSearch};
use wayfinder::Graph;


/// Interactive route search over a road graph loaded from CSV files
#[derive(Debug, Parser)]
#[command(name = "wayfinder", version, about)]
struct Args {
    /// Directed edge list: source,destination,highway,distance
    #[arg(long, default_value = "graph_v2.txt")]
    graph_file: PathBuf,

    /// Vertex coordinate registry: vertex,latitude,longitude
    #[arg(long, default_value = "vertices_v1.txt")]
    vertices_file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let graph = match loader::read_graph(&args.graph_file, &args.vertices_file) {
        Ok(graph) => graph,
        Err(err) => {
            error!("{err}");
            eprintln!("Failed to load graph: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run_menu(&graph) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_menu(graph: &Graph) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the Oregon Pathfinder!");
    loop {
        println!();
        println!("Select pathfinding algorithm:");
        println!("1. Dijkstra's Algorithm");
        println!("2. Greedy Best-First Search");
        println!("3. A* Algorithm");
        let Some(choice) = prompt(&mut lines, "Enter choice (1-3): ")? else {
            break;
        };
        let algorithm: &dyn PathSearch = match choice.as_str() {
            "1" => &Dijkstra,
            "2" => &GreedyBestFirst,
            "3" => &AStar,
            _ => {
                println!("Invalid choice. Please enter 1, 2, or 3.");
                continue;
            }
        };

        let Some(start) = prompt(&mut lines, "\nEnter start city: ")? else {
            break;
        };
        let Some(goal) = prompt(&mut lines, "Enter destination city: ")? else {
            break;
        };

        println!("\nRunning {}...\n", algorithm.name());
        let result = algorithm.find_path(graph, &start, &goal);

        if result.path_found {
            println!("Path found: {}", result.directions_with(" → "));
            println!("Total distance: {} miles", result.total_distance);
        } else {
            println!("{}", result.directions);
        }
        println!("Vertices explored: {}", result.vertices_explored);
        println!("Edges evaluated: {}", result.edges_evaluated);
        println!(
            "Execution time: {:.3} seconds",
            result.execution_time.as_secs_f64()
        );

        let Some(again) = prompt(&mut lines, "\nSearch another route? (y/n): ")? else {
            break;
        };
        if !again.eq_ignore_ascii_case("y") {
            println!("Thank you for using the Oregon Pathfinder!");
            break;
        }
    }
    Ok(())
}

/// Print a prompt and read one trimmed line; None on end of input
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
