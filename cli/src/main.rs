//! algotrace CLI — console renderer for the step-observable algorithm engines
//!
//! Runs one algorithm per invocation, printing the trace as it is produced
//! and a result summary at the end. This binary is just one Observer
//! implementation; the engines themselves never touch the console.

use algotrace::{
    bfs, dfs, dijkstra, sort, Algorithm, Graph, InspectStatus, Observer, RelaxOutcome,
    ShortestPaths, SortAlgorithm, TraceEvent,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use comfy_table::{ContentArrangement, Table};
use std::error::Error;

#[derive(Parser)]
#[command(
    name = "algotrace",
    version,
    about = "Step-by-step traces of classic sorting and graph algorithms"
)]
struct Cli {
    /// Output format
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortKind {
    Bubble,
    Quick,
    Merge,
    Heap,
}

impl From<SortKind> for SortAlgorithm {
    fn from(kind: SortKind) -> Self {
        match kind {
            SortKind::Bubble => SortAlgorithm::Bubble,
            SortKind::Quick => SortAlgorithm::Quick,
            SortKind::Merge => SortAlgorithm::Merge,
            SortKind::Heap => SortAlgorithm::Heap,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Sort an array, tracing every swap, partition, and merge
    Sort {
        #[arg(value_enum)]
        algorithm: SortKind,

        /// Values to sort
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Breadth-first search over an undirected graph
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,

        /// Starting vertex
        #[arg(long)]
        start: usize,
    },
    /// Depth-first search over an undirected graph
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,

        /// Starting vertex
        #[arg(long)]
        start: usize,
    },
    /// Dijkstra shortest paths over a weighted undirected graph
    Dijkstra {
        #[command(flatten)]
        graph: GraphArgs,

        /// Starting vertex
        #[arg(long)]
        start: usize,
    },
}

#[derive(Args)]
struct GraphArgs {
    /// Use the built-in 5-vertex sample graph
    #[arg(long, conflicts_with_all = ["vertices", "edge"])]
    sample: bool,

    /// Number of vertices (vertices are numbered 0..N)
    #[arg(long)]
    vertices: Option<usize>,

    /// Edge as "u,v" (BFS/DFS) or "u,v,w" (Dijkstra); repeatable
    #[arg(long = "edge", value_name = "U,V[,W]")]
    edge: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sort { algorithm, values } => run_sort(algorithm.into(), values, cli.format),
        Commands::Bfs { graph, start } => run_traversal(Algorithm::Bfs, &graph, start, cli.format),
        Commands::Dfs { graph, start } => run_traversal(Algorithm::Dfs, &graph, start, cli.format),
        Commands::Dijkstra { graph, start } => run_dijkstra(&graph, start, cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_sort(
    algorithm: SortAlgorithm,
    mut values: Vec<i64>,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let mut printer = printer(format);
    let steps = sort(algorithm, &mut values, printer.as_mut());

    match format {
        OutputFormat::Text => {
            println!("\nSorted array: {}", join(&values));
            println!("Total steps: {}", steps);
            print_complexity(algorithm.algorithm());
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "result": { "sorted": values, "steps": steps } })
            );
        }
    }
    Ok(())
}

fn run_traversal(
    algorithm: Algorithm,
    args: &GraphArgs,
    start: usize,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let graph = build_graph(args, false)?;
    let mut printer = printer(format);
    let order = match algorithm {
        Algorithm::Bfs => bfs(&graph, start, printer.as_mut())?,
        _ => dfs(&graph, start, printer.as_mut())?,
    };

    match format {
        OutputFormat::Text => {
            println!("\nVisitation order: {}", join(&order));
            print_complexity(algorithm);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "result": { "order": order } }));
        }
    }
    Ok(())
}

fn run_dijkstra(args: &GraphArgs, start: usize, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let graph = build_graph(args, true)?;
    let mut printer = printer(format);
    let paths = dijkstra(&graph, start, printer.as_mut())?;

    match format {
        OutputFormat::Text => {
            println!();
            print_distance_table(&paths);
            print_complexity(Algorithm::Dijkstra);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "result": paths }));
        }
    }
    Ok(())
}

fn build_graph(args: &GraphArgs, weighted: bool) -> Result<Graph, Box<dyn Error>> {
    if args.sample {
        return Ok(if weighted {
            Graph::sample_weighted()
        } else {
            Graph::sample()
        });
    }

    let vertices = args
        .vertices
        .ok_or("either --sample or --vertices is required")?;
    let mut graph = Graph::new(vertices)?;
    for raw in &args.edge {
        let parts: Vec<&str> = raw.split(',').collect();
        match (weighted, parts.as_slice()) {
            (false, [u, v]) => graph.add_edge(u.trim().parse()?, v.trim().parse()?)?,
            (true, [u, v, w]) => {
                graph.add_weighted_edge(u.trim().parse()?, v.trim().parse()?, w.trim().parse()?)?
            }
            _ => {
                let expected = if weighted { "u,v,w" } else { "u,v" };
                return Err(format!("invalid edge '{}': expected '{}'", raw, expected).into());
            }
        }
    }
    Ok(graph)
}

fn printer(format: OutputFormat) -> Box<dyn Observer> {
    match format {
        OutputFormat::Text => Box::new(ConsolePrinter),
        OutputFormat::Json => Box::new(JsonPrinter),
    }
}

fn print_distance_table(paths: &ShortestPaths) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Vertex", "Distance", "Path"]);
    for vertex in 0..paths.dist.len() {
        let (distance, path) = match paths.dist[vertex] {
            Some(d) => {
                let path = paths
                    .path_to(vertex)
                    .map(|p| join(&p))
                    .unwrap_or_default();
                (d.to_string(), path)
            }
            None => ("inf".to_string(), "no path".to_string()),
        };
        table.add_row(vec![vertex.to_string(), distance, path]);
    }
    println!("{table}");
}

fn print_complexity(algorithm: Algorithm) {
    let (time, space) = match algorithm {
        Algorithm::BubbleSort => ("O(n²)", "O(1)"),
        Algorithm::QuickSort => ("O(n log n) average, O(n²) worst", "O(log n)"),
        Algorithm::MergeSort => ("O(n log n)", "O(n)"),
        Algorithm::HeapSort => ("O(n log n)", "O(1)"),
        Algorithm::Bfs | Algorithm::Dfs => ("O(V + E)", "O(V)"),
        Algorithm::Dijkstra => ("O((V + E) log V)", "O(V)"),
    };
    println!("{}: time {}, space {}", algorithm, time, space);
}

/// Text renderer for trace events, one line per event.
struct ConsolePrinter;

impl Observer for ConsolePrinter {
    fn on_event(&mut self, event: &TraceEvent) {
        match event {
            TraceEvent::Started { algorithm } => println!("=== {} ===", algorithm),
            TraceEvent::Finished { algorithm, steps } => {
                println!("{} completed in {} steps", algorithm, steps)
            }
            TraceEvent::PassStarted { pass } => println!("--- Pass {} ---", pass),
            TraceEvent::Swapped {
                step,
                left,
                right,
                left_value,
                right_value,
                array,
            } => println!(
                "Step {} - swapped {} and {} (positions {}, {}): {}",
                step,
                right_value,
                left_value,
                left,
                right,
                join(array)
            ),
            TraceEvent::Partitioned {
                step,
                low,
                high,
                pivot_index,
                pivot_value,
                array,
            } => println!(
                "Step {} - partitioned [{}..{}] around pivot {} at index {}: {}",
                step,
                low,
                high,
                pivot_value,
                pivot_index,
                join(array)
            ),
            TraceEvent::Merged {
                step,
                left,
                mid,
                right,
                merged,
            } => println!(
                "Step {} - merged [{}..{}] and [{}..{}]: {}",
                step,
                left,
                mid,
                mid + 1,
                right,
                join(merged)
            ),
            TraceEvent::HeapBuilt { step, array } => {
                println!("Step {} - max heap built: {}", step, join(array))
            }
            TraceEvent::MaxExtracted {
                step,
                value,
                position,
                array,
            } => println!(
                "Step {} - moved max {} to position {}: {}",
                step,
                value,
                position,
                join(array)
            ),
            TraceEvent::Heapified { step, heap } => {
                println!("Step {} - heap after sift-down: {}", step, join(heap))
            }
            TraceEvent::Dequeued { vertex, queue } => {
                println!("Visiting vertex {} [queue: {}]", vertex, join(queue))
            }
            TraceEvent::Visited { vertex, stack } => {
                println!("Visiting vertex {} [stack: {}]", vertex, join(stack))
            }
            TraceEvent::Inspected {
                vertex: _,
                neighbor,
                status,
            } => {
                let label = match status {
                    InspectStatus::Added => "added",
                    InspectStatus::AlreadyVisited => "already visited",
                };
                println!("  neighbor {}: {}", neighbor, label);
            }
            TraceEvent::Finalized {
                step,
                vertex,
                distance,
                distances,
            } => {
                let table: Vec<String> = distances
                    .iter()
                    .map(|d| match d {
                        Some(d) => d.to_string(),
                        None => "inf".to_string(),
                    })
                    .collect();
                println!(
                    "Step {} - finalized vertex {} at distance {} [distances: {}]",
                    step,
                    vertex,
                    distance,
                    table.join(", ")
                );
            }
            TraceEvent::Relaxed {
                vertex: _,
                neighbor,
                weight,
                outcome,
            } => {
                let label = match outcome {
                    RelaxOutcome::Updated { distance } => {
                        format!("updated distance to {}", distance)
                    }
                    RelaxOutcome::AlreadyVisited => "already visited".to_string(),
                    RelaxOutcome::NoImprovement { current } => {
                        format!("no improvement (current: {})", current)
                    }
                };
                println!("  neighbor {} (weight {}): {}", neighbor, weight, label);
            }
        }
    }
}

/// JSON renderer: one object per trace event, suitable for replay tooling.
struct JsonPrinter;

impl Observer for JsonPrinter {
    fn on_event(&mut self, event: &TraceEvent) {
        match serde_json::to_string(event) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("Error: failed to serialize event: {}", e),
        }
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
