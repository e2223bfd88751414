//! CLI command implementations.
//!
//! Each command renders to a `String` first so the output can be tested
//! without spawning the binary.

use std::path::Path;

use clap::ValueEnum;
use serde_json::json;

use graph_search_core::{
    read_edge_list, sample_graph, BreadthFirstSearch, DepthFirstSearch, Distance, Graph,
    GraphResult, Search, VertexId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Breadth-first: shortest paths and hop distances
    Bfs,
    /// Depth-first: discovery-tree paths
    Dfs,
}

impl Algorithm {
    fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }
}

/// Run BFS from 0 over the sample graph and report on vertices 3 and 7.
pub fn cmd_demo(format: Format) -> GraphResult<()> {
    println!("{}", render_demo(format)?);
    Ok(())
}

/// Print the arc dump of an edge-list file.
pub fn cmd_dump(path: &Path, format: Format) -> GraphResult<()> {
    let graph = read_edge_list(path)?;
    print!("{}", render_dump(&graph, format));
    Ok(())
}

/// Traverse an edge-list file and report on the requested targets.
pub fn cmd_search(
    path: &Path,
    source: VertexId,
    algorithm: Algorithm,
    targets: &[VertexId],
    format: Format,
) -> GraphResult<()> {
    let graph = read_edge_list(path)?;
    println!(
        "{}",
        render_search(&graph, source, algorithm, targets, format)?
    );
    Ok(())
}

fn render_demo(format: Format) -> GraphResult<String> {
    let graph = sample_graph()?;
    let search = BreadthFirstSearch::new(&graph, 0)?;
    let path = search.path_to(3)?;

    let rendered = match format {
        Format::Json => pretty(&json!({
            "graph": graph_json(&graph),
            "source": 0,
            "exists": {
                "3": search.exists(3)?,
                "7": search.exists(7)?,
            },
            "path": path,
        })),
        Format::Text => format!(
            "{}\npath from 0 -> 3: {}\npath from 0 -> 7: {}\npath: (0 - 3): {}",
            graph,
            search.exists(3)?,
            search.exists(7)?,
            join(&path)
        ),
    };
    Ok(rendered)
}

fn render_dump(graph: &Graph, format: Format) -> String {
    match format {
        Format::Json => pretty(&graph_json(graph)) + "\n",
        Format::Text => graph.to_string(),
    }
}

/// One line of a search report.
struct TargetReport {
    vertex: VertexId,
    path: Vec<VertexId>,
    distance: Option<Distance>,
}

fn render_search(
    graph: &Graph,
    source: VertexId,
    algorithm: Algorithm,
    targets: &[VertexId],
    format: Format,
) -> GraphResult<String> {
    let bfs;
    let dfs;
    let (search, breadth_first): (&dyn Search, Option<&BreadthFirstSearch>) = match algorithm {
        Algorithm::Bfs => {
            bfs = BreadthFirstSearch::new(graph, source)?;
            (&bfs as &dyn Search, Some(&bfs))
        }
        Algorithm::Dfs => {
            dfs = DepthFirstSearch::new(graph, source)?;
            (&dfs as &dyn Search, None)
        }
    };

    let targets = if targets.is_empty() {
        search.reachable()
    } else {
        targets.to_vec()
    };

    let reports = targets
        .iter()
        .map(|&vertex| -> GraphResult<TargetReport> {
            let distance = match breadth_first {
                Some(shortest) => shortest.distance_to(vertex)?,
                None => None,
            };
            Ok(TargetReport {
                vertex,
                path: search.path_to(vertex)?,
                distance,
            })
        })
        .collect::<GraphResult<Vec<_>>>()?;

    let rendered = match format {
        Format::Json => pretty(&json!({
            "algorithm": algorithm.name(),
            "source": source,
            "vertices": graph.vertex_count(),
            "reached": search.reached_count(),
            "targets": reports
                .iter()
                .map(|r| json!({
                    "vertex": r.vertex,
                    "reachable": !r.path.is_empty(),
                    "path": r.path,
                    "distance": r.distance,
                }))
                .collect::<Vec<_>>(),
        })),
        Format::Text => {
            let mut out = format!(
                "{} from {}: reached {} of {} vertices",
                algorithm.name(),
                source,
                search.reached_count(),
                graph.vertex_count()
            );
            for r in &reports {
                out.push('\n');
                out.push_str(&format!("{} -> {}: ", source, r.vertex));
                if r.path.is_empty() {
                    out.push_str("unreachable");
                    continue;
                }
                if let Some(d) = r.distance {
                    out.push_str(&format!("distance {}, ", d));
                }
                out.push_str(&format!("path {}", join(&r.path)));
            }
            out
        }
    };
    Ok(rendered)
}

fn graph_json(graph: &Graph) -> serde_json::Value {
    json!({
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
        "adjacency": graph.iter().map(|(_, list)| list.to_vec()).collect::<Vec<_>>(),
    })
}

fn pretty(value: &serde_json::Value) -> String {
    // A Value has only string keys, so serializing it cannot fail.
    serde_json::to_string_pretty(value).expect("serializing a json Value")
}

fn join(path: &[VertexId]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_search_core::GraphError;

    fn sample() -> Graph {
        sample_graph().unwrap()
    }

    #[test]
    fn test_demo_text() {
        let out = render_demo(Format::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        // 13 edges -> 26 arcs, then a blank separator
        assert_eq!(lines[0], "0 -> 5");
        assert_eq!(lines[25], "12 -> 11");
        assert_eq!(lines[26], "");
        assert_eq!(lines[27], "path from 0 -> 3: true");
        assert_eq!(lines[28], "path from 0 -> 7: false");
        assert_eq!(lines[29], "path: (0 - 3): 0 5 3");
        assert_eq!(lines.len(), 30);
    }

    #[test]
    fn test_demo_json() {
        let out = render_demo(Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["path"], json!([0, 5, 3]));
        assert_eq!(value["exists"]["3"], json!(true));
        assert_eq!(value["exists"]["7"], json!(false));
        assert_eq!(value["graph"]["edges"], json!(13));
    }

    #[test]
    fn test_pretty_is_parseable_json() {
        let value = json!({"path": [0, 5, 3], "distance": null});
        let out = pretty(&value);
        assert!(out.contains('\n'));
        assert_eq!(serde_json::from_str::<serde_json::Value>(&out).unwrap(), value);
    }

    #[test]
    fn test_demo_uses_core_sample() {
        let out = render_demo(Format::Text).unwrap();
        assert!(out.starts_with(&sample().to_string()));
    }

    #[test]
    fn test_dump_text_matches_display() {
        let g = sample();
        assert_eq!(render_dump(&g, Format::Text), g.to_string());
    }

    #[test]
    fn test_dump_json_adjacency() {
        let g = sample();
        let value: serde_json::Value =
            serde_json::from_str(&render_dump(&g, Format::Json)).unwrap();
        assert_eq!(value["vertices"], json!(13));
        assert_eq!(value["adjacency"][0], json!([5, 1, 2, 6]));
        assert_eq!(value["adjacency"][7], json!([8]));
    }

    #[test]
    fn test_search_bfs_targets() {
        let g = sample();
        let out = render_search(&g, 0, Algorithm::Bfs, &[3, 7], Format::Text).unwrap();
        assert_eq!(
            out,
            "bfs from 0: reached 7 of 13 vertices\n\
             0 -> 3: distance 2, path 0 5 3\n\
             0 -> 7: unreachable"
        );
    }

    #[test]
    fn test_search_dfs_targets() {
        let g = sample();
        let out = render_search(&g, 0, Algorithm::Dfs, &[3], Format::Text).unwrap();
        assert_eq!(
            out,
            "dfs from 0: reached 7 of 13 vertices\n0 -> 3: path 0 5 4 3"
        );
    }

    #[test]
    fn test_search_defaults_to_reachable() {
        let g = sample();
        let out = render_search(&g, 9, Algorithm::Bfs, &[], Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let vertices: Vec<u64> = value["targets"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["vertex"].as_u64().unwrap())
            .collect();
        assert_eq!(vertices, vec![9, 10, 11, 12]);
        assert_eq!(value["reached"], json!(4));
        assert_eq!(value["targets"][0]["distance"], json!(0));
    }

    #[test]
    fn test_search_dfs_json_has_no_distance() {
        let g = sample();
        let out = render_search(&g, 0, Algorithm::Dfs, &[6], Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["algorithm"], json!("dfs"));
        assert_eq!(value["targets"][0]["distance"], serde_json::Value::Null);
        assert_eq!(value["targets"][0]["path"], json!([0, 5, 4, 6]));
    }

    #[test]
    fn test_search_out_of_range() {
        let g = sample();
        assert!(matches!(
            render_search(&g, 13, Algorithm::Bfs, &[], Format::Text),
            Err(GraphError::VertexOutOfRange { vertex: 13, .. })
        ));
        assert!(matches!(
            render_search(&g, 0, Algorithm::Dfs, &[20], Format::Text),
            Err(GraphError::VertexOutOfRange { vertex: 20, .. })
        ));
    }
}
