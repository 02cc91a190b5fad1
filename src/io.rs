//! Loaders for the plain-text inputs of a planning run
//!
//! - edge list: one `cityA cityB weight` per line, whitespace-delimited
//! - city names: `id name with spaces` per line
//! - delivery points: JSON array of ids, numbers or strings

use crate::collections::FxIndexMap;
use crate::errors::{Result, RouteError};
use crate::graph::{Graph, NodeId};

use std::{fs, path::Path};
use serde_json::{Number, Value};
use log::{debug, warn};


/// Parse an undirected edge list
/// Blank lines are ignored, columns after the weight are ignored
pub fn parse_graph(text: &str) -> Result<Graph<f64>> {
    let mut graph = Graph::new();

    for (number, line) in text.lines().enumerate() {
        let line_no = number + 1;
        let mut fields = line.split_whitespace();

        let (Some(a), Some(b), Some(raw_weight)) = (fields.next(), fields.next(), fields.next()) else {
            if !line.trim().is_empty() {
                return Err(RouteError::InvalidEdge {
                    line: line_no,
                    reason: format!("expected 'cityA cityB weight', got '{}'", line.trim()),
                });
            }
            continue;
        };

        let weight: f64 = raw_weight.parse().map_err(|_| RouteError::InvalidEdge {
            line: line_no,
            reason: format!("weight '{raw_weight}' is not a number"),
        })?;

        graph.add_edge(a, b, weight).map_err(|e| RouteError::InvalidEdge {
            line: line_no,
            reason: e.to_string(),
        })?;
    }

    debug!("parsed graph with {} nodes and {} edges", graph.len(), graph.edge_count());
    Ok(graph)
}


pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph<f64>> {
    parse_graph(&read(path.as_ref())?)
}


/// Display names of cities, only used for presentation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityNames(FxIndexMap<NodeId, String>);

impl CityNames {

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Name of the city, or its id when it has none
    pub fn label<'a>(&'a self, id: &'a NodeId) -> &'a str {
        self.get(id.as_str()).unwrap_or(id.as_str())
    }

    pub fn insert(&mut self, id: impl Into<NodeId>, name: impl Into<String>) {
        self.0.insert(id.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}


/// Parse `id name` lines, the name is the rest of the line after the first whitespace
/// Lines without a name are skipped
pub fn parse_city_names(text: &str) -> CityNames {
    let mut names = CityNames::default();

    for line in text.lines() {
        let Some((id, name)) = line.trim().split_once(char::is_whitespace) else {
            continue;
        };
        let name = name.trim();
        if !name.is_empty() {
            names.insert(id, name);
        }
    }

    names
}


pub fn load_city_names(path: impl AsRef<Path>) -> Result<CityNames> {
    Ok(parse_city_names(&read(path.as_ref())?))
}


/// Parse a JSON array of city ids
/// Numbers are taken by their decimal text so `[3]`, `[3.0]` and `["3"]` name the same city
pub fn parse_stops(raw: &str) -> Result<Vec<NodeId>> {
    let value: Value = serde_json::from_str(raw).map_err(|e| RouteError::MalformedStops(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(RouteError::MalformedStops(format!("expected a JSON array, got '{raw}'")));
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(NodeId::new(s)),
            Value::Number(n) => Ok(NodeId::new(number_text(&n))),
            other => Err(RouteError::MalformedStops(format!("'{other}' is not a city id"))),
        })
        .collect()
}


/// Integral numbers lose their fraction and exponent (`3.0` -> `3`, `1e2` -> `100`),
/// other floats use the shortest text that reads back the same value
fn number_text(n: &Number) -> String {
    if n.is_u64() || n.is_i64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}


/// Like `parse_stops`, but a malformed list is logged and replaced by an empty one
pub fn parse_stops_or_empty(raw: &str) -> Vec<NodeId> {
    parse_stops(raw).unwrap_or_else(|e| {
        warn!("{e}; continuing without delivery points");
        Vec::new()
    })
}


fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RouteError::Io { path: path.to_path_buf(), source })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_graph_symmetrizes_edges() {
        let graph = parse_graph("1 2 10.5\n2 3 4\n\n1 3 20\n").unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight("2", "1"), Some(10.5));
        assert_eq!(graph.weight("3", "2"), Some(4.0));
    }

    #[test]
    fn test_parse_graph_tolerates_extra_whitespace_and_columns() {
        let graph = parse_graph("  A\tB   7  km\r\n").unwrap();
        assert_eq!(graph.weight("A", "B"), Some(7.0));
    }

    #[test]
    fn test_parse_graph_missing_weight() {
        let result = parse_graph("1 2 3\n4 5\n");
        assert!(matches!(result, Err(RouteError::InvalidEdge { line: 2, .. })));
    }

    #[test]
    fn test_parse_graph_bad_weight() {
        let result = parse_graph("1 2 far\n");
        assert!(matches!(result, Err(RouteError::InvalidEdge { line: 1, .. })));

        let negative = parse_graph("1 2 3\n2 3 -4\n");
        assert!(matches!(negative, Err(RouteError::InvalidEdge { line: 2, .. })));
    }

    #[test]
    fn test_parse_city_names() {
        let names = parse_city_names("1 New Delhi\n2   Mumbai  \n3\n\n");

        assert_eq!(names.len(), 2);
        assert_eq!(names.get("1"), Some("New Delhi"));
        assert_eq!(names.get("2"), Some("Mumbai"));
        assert_eq!(names.get("3"), None);

        let id = NodeId::from("3");
        assert_eq!(names.label(&id), "3");
    }

    #[test]
    fn test_parse_stops_accepts_strings_and_numbers() {
        let stops = parse_stops(r#"[2, "3", " 4 "]"#).unwrap();
        assert_eq!(stops, vec![NodeId::from("2"), NodeId::from("3"), NodeId::from("4")]);
    }

    #[test]
    fn test_parse_stops_integral_floats_match_integer_ids() {
        let stops = parse_stops("[3.0, 1e2, 7, -2.0, 2.5]").unwrap();
        assert_eq!(stops, vec![
            NodeId::from("3"),
            NodeId::from("100"),
            NodeId::from("7"),
            NodeId::from("-2"),
            NodeId::from("2.5"),
        ]);
    }

    #[test]
    fn test_parse_stops_rejects_non_arrays() {
        assert!(matches!(parse_stops("not json"), Err(RouteError::MalformedStops(_))));
        assert!(matches!(parse_stops(r#"{"a": 1}"#), Err(RouteError::MalformedStops(_))));
        assert!(matches!(parse_stops("[true]"), Err(RouteError::MalformedStops(_))));
    }

    #[test]
    fn test_parse_stops_or_empty_falls_back() {
        assert!(parse_stops_or_empty("[1, 2").is_empty());
        assert_eq!(parse_stops_or_empty("[]"), Vec::<NodeId>::new());
        assert_eq!(parse_stops_or_empty("[7]"), vec![NodeId::from("7")]);
    }
}
