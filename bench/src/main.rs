use std::time::Instant;

use graph_search_core::{BreadthFirstSearch, DepthFirstSearch, Graph, GraphResult, Search};

type Generator = fn(usize) -> GraphResult<Graph>;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-search-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Branching tree (every vertex has 3 children)");
        println!("  smallworld  Ring lattice with random shortcuts");
        println!("  random      Uniform random edges");
        println!("  barbell     Two dense clusters joined by a thin bridge");
        println!();
        println!("Default vertex_count: 1000000");
        return;
    }

    let generators: Vec<(&str, Generator)> = match mode {
        "tree" => vec![("Branching tree", gen_tree)],
        "smallworld" => vec![("Small-world ring", gen_small_world)],
        "random" => vec![("Uniform random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "all" => vec![
            ("Branching tree", gen_tree as Generator),
            ("Small-world ring", gen_small_world),
            ("Uniform random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    println!("graph-search-bench");
    println!("==================");
    println!();

    for (name, generator) in generators {
        if let Err(e) = run_benchmark(name, generator, vertex_count) {
            eprintln!("{}: {}", name, e);
        }
    }
}

fn run_benchmark(name: &str, generator: Generator, vertex_count: usize) -> GraphResult<()> {
    println!("--- {} ---", name);

    let t = Instant::now();
    let graph = generator(vertex_count)?;
    println!(
        "Generated in {:.2}s: {} vertices, {} edges, ~{:.0}MB",
        t.elapsed().as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let far = graph.vertex_count() - 1;

    let t = Instant::now();
    let bfs = BreadthFirstSearch::new(&graph, 0)?;
    let bfs_ms = t.elapsed().as_secs_f64() * 1000.0;

    let t = Instant::now();
    let dfs = DepthFirstSearch::new(&graph, 0)?;
    let dfs_ms = t.elapsed().as_secs_f64() * 1000.0;

    println!();
    println!("{:>6} {:>12} {:>10} {:>14}", "algo", "reached", "time", "hops 0 -> last");
    println!("{:->6} {:->12} {:->10} {:->14}", "", "", "", "");
    println!(
        "{:>6} {:>12} {:>8.1}ms {:>14}",
        "bfs",
        bfs.reached_count(),
        bfs_ms,
        hops(bfs.path_to(far)?.len())
    );
    println!(
        "{:>6} {:>12} {:>8.1}ms {:>14}",
        "dfs",
        dfs.reached_count(),
        dfs_ms,
        hops(dfs.path_to(far)?.len())
    );
    println!();
    Ok(())
}

fn hops(path_len: usize) -> String {
    match path_len {
        0 => "unreachable".to_string(),
        n => (n - 1).to_string(),
    }
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded, O(vertices + edges)
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Branching tree: vertex `i` hangs off vertex `(i - 1) / 3`.
///
/// Logarithmic depth, no cycles. Every vertex is reachable from 0 and DFS
/// and BFS paths coincide.
fn gen_tree(vertex_count: usize) -> GraphResult<Graph> {
    Graph::from_edges(vertex_count, (1..vertex_count).map(|child| ((child - 1) / 3, child)))
}

/// Ring lattice joined to the `k` next vertices, each edge rewired to a
/// random endpoint with probability `p`. Short BFS paths, long DFS paths.
fn gen_small_world(vertex_count: usize) -> GraphResult<Graph> {
    let k = 5usize;
    let p = 0.05f64;
    let mut graph = Graph::new(vertex_count)?;
    let mut rng = FastRng::new(67890);

    for v in 0..vertex_count {
        for j in 1..=k {
            let w = if rng.next_f64() < p {
                rng.next(vertex_count)
            } else {
                (v + j) % vertex_count
            };
            graph.add_edge(v, w)?;
        }
    }

    Ok(graph)
}

/// Uniform random edges, ~5 per vertex. May leave vertices unreachable.
fn gen_random(vertex_count: usize) -> GraphResult<Graph> {
    let mut graph = Graph::new(vertex_count)?;
    let mut rng = FastRng::new(54321);

    for _ in 0..vertex_count * 5 {
        let v = rng.next(vertex_count);
        let w = rng.next(vertex_count);
        graph.add_edge(v, w)?;
    }

    Ok(graph)
}

/// Two dense clusters joined by a chain of bridge vertices. The only route
/// from vertex 0 to the last vertex goes through the bridge.
fn gen_barbell(vertex_count: usize) -> GraphResult<Graph> {
    let bridge_len = 10usize.min(vertex_count / 3);
    let cluster = (vertex_count - bridge_len) / 2;
    let mut graph = Graph::new(vertex_count)?;
    let mut rng = FastRng::new(99999);

    let second = cluster + bridge_len;
    let second_len = vertex_count - second;

    for (start, len) in [(0, cluster), (second, second_len)] {
        // Spanning chain keeps each cluster connected; random chords make it dense.
        for i in 1..len {
            graph.add_edge(start + i - 1, start + i)?;
        }
        for i in 0..len {
            for _ in 0..10 {
                graph.add_edge(start + i, start + rng.next(len))?;
            }
        }
    }

    // Bridge: last vertex of the first cluster through to the second cluster
    for v in cluster..=second {
        if v > 0 {
            graph.add_edge(v - 1, v)?;
        }
    }

    Ok(graph)
}
