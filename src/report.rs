use crate::graph::NodeId;
use crate::io::CityNames;
use crate::tour::Route;

use std::fmt;


/// Human-readable route summary
/// Cities are shown by name when one is known, otherwise by id
pub struct RouteSummary<'a> {
    pub start: &'a NodeId,
    pub stops: &'a [NodeId],
    pub route: &'a Route<f64>,
    pub names: &'a CityNames,
}

impl fmt::Display for RouteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.names;

        writeln!(f, "Delivery Route Information")?;
        writeln!(f, "Starting City: {} (ID: {})", names.label(self.start), self.start)?;

        let stops = self
            .stops
            .iter()
            .map(|id| format!("{id}: {}", names.get(id.as_str()).unwrap_or("Unknown")))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "Delivery Points: {stops}")?;

        writeln!(f, "Total Distance: {} km", self.route.total_distance)?;
        writeln!(f, "Route Order: {}", labelled(&self.route.tour, names))?;
        write!(f, "Full Path: {}", labelled(&self.route.full_path, names))?;

        for hop in &self.route.unreachable_hops {
            write!(f, "\nUnreachable: {} -> {}", names.label(&hop.from), names.label(&hop.to))?;
        }

        Ok(())
    }
}


fn labelled(nodes: &[NodeId], names: &CityNames) -> String {
    nodes
        .iter()
        .map(|id| format!("{} ({id})", names.label(id)))
        .collect::<Vec<_>>()
        .join(" → ")
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::Hop;

    #[test]
    fn test_summary_uses_names_when_known() {
        let mut names = CityNames::default();
        names.insert("1", "Pune");
        names.insert("2", "Nashik");

        let ids = |v: &[&str]| v.iter().map(|&s| NodeId::from(s)).collect::<Vec<_>>();
        let route = Route {
            tour: ids(&["1", "2", "3", "1"]),
            full_path: ids(&["1", "2", "3", "1"]),
            total_distance: 12.5,
            unreachable_hops: vec![],
        };
        let start = NodeId::from("1");
        let stops = ids(&["2", "3"]);

        let text = RouteSummary { start: &start, stops: &stops, route: &route, names: &names }.to_string();

        assert!(text.contains("Starting City: Pune (ID: 1)"));
        assert!(text.contains("Delivery Points: 2: Nashik, 3: Unknown"));
        assert!(text.contains("Total Distance: 12.5 km"));
        assert!(text.contains("Route Order: Pune (1) → Nashik (2) → 3 (3) → Pune (1)"));
        assert!(!text.contains("Unreachable"));
    }

    #[test]
    fn test_summary_lists_unreachable_hops() {
        let names = CityNames::default();
        let route = Route {
            tour: vec![NodeId::from("A"), NodeId::from("C"), NodeId::from("A")],
            full_path: vec![NodeId::from("A")],
            total_distance: 0.0,
            unreachable_hops: vec![Hop { from: NodeId::from("A"), to: NodeId::from("C") }],
        };
        let start = NodeId::from("A");
        let stops = vec![NodeId::from("C")];

        let text = RouteSummary { start: &start, stops: &stops, route: &route, names: &names }.to_string();
        assert!(text.ends_with("Unreachable: A -> C"));
    }
}
