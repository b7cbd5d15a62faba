//! Header and record types for the adjacency-list text format.
//!
//! Each type knows how to parse itself from a single line (with surrounding
//! whitespace tolerated) and how to render itself back through [`fmt::Display`].

use std::fmt;
use std::str::FromStr;

/// Identifier of a vertex.
pub type VertexId = u32;

/// Cost carried by an edge. Costs may be negative.
pub type Cost = i64;

/// The first line of a graph file: declared vertex and edge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Number of vertices the file declares.
    pub vertex_count: usize,
    /// Number of edges the file declares.
    pub edge_count: usize,
}

impl Header {
    /// Create a header from its two counts.
    #[must_use]
    pub fn new(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertex_count,
            edge_count,
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vertex_count, self.edge_count)
    }
}

impl FromStr for Header {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_ascii_whitespace().collect();
        match fields.as_slice() {
            [vertices, edges] => Ok(Self {
                vertex_count: parse_field(vertices, "vertex count")?,
                edge_count: parse_field(edges, "edge count")?,
            }),
            _ => Err(format!(
                "header must have 2 fields, found {}",
                fields.len()
            )),
        }
    }
}

/// A single body line of a graph file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    /// `source target cost`: one directed edge.
    Edge {
        /// Tail of the edge.
        source: VertexId,
        /// Head of the edge.
        target: VertexId,
        /// Cost of traversing the edge.
        cost: Cost,
    },

    /// A lone vertex id: a vertex with no incident edges.
    Vertex(VertexId),
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edge {
                source,
                target,
                cost,
            } => write!(f, "{source} {target} {cost}"),
            Self::Vertex(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for Record {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_ascii_whitespace().collect();
        match fields.as_slice() {
            [id] => Ok(Self::Vertex(parse_field(id, "vertex id")?)),
            [source, target, cost] => Ok(Self::Edge {
                source: parse_field(source, "source vertex")?,
                target: parse_field(target, "target vertex")?,
                cost: parse_field(cost, "cost")?,
            }),
            _ => Err(format!(
                "expected 1 field (vertex) or 3 fields (edge), found {}",
                fields.len()
            )),
        }
    }
}

fn parse_field<T>(field: &str, what: &str) -> std::result::Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    field
        .parse()
        .map_err(|e| format!("invalid {what} `{field}`: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn header_parses_two_counts() {
        let header: Header = "5 7".parse().unwrap();
        assert_eq!(header, Header::new(5, 7));
        assert_eq!(header.to_string(), "5 7");
    }

    #[test]
    fn header_tolerates_trailing_whitespace() {
        let header: Header = "3 2  \r".parse().unwrap();
        assert_eq!(header, Header::new(3, 2));
    }

    #[rstest]
    #[case::edge("0 1 4", Record::Edge { source: 0, target: 1, cost: 4 })]
    #[case::negative_cost("1 2 -3", Record::Edge { source: 1, target: 2, cost: -3 })]
    #[case::vertex("9", Record::Vertex(9))]
    #[case::trailing_space("4 ", Record::Vertex(4))]
    fn record_parses(#[case] line: &str, #[case] expected: Record) {
        assert_eq!(line.parse::<Record>().unwrap(), expected);
    }

    #[rstest]
    #[case::two_fields("1 2")]
    #[case::four_fields("1 2 3 4")]
    #[case::negative_vertex("-1 2 3")]
    #[case::not_a_number("a b c")]
    #[case::empty("")]
    fn record_rejects(#[case] line: &str) {
        assert!(line.parse::<Record>().is_err());
    }

    #[test]
    fn record_display_matches_file_format() {
        let edge = Record::Edge {
            source: 3,
            target: 8,
            cost: -12,
        };
        assert_eq!(edge.to_string(), "3 8 -12");
        assert_eq!(Record::Vertex(42).to_string(), "42");
    }

    #[test]
    fn parse_error_names_the_field() {
        let err = "0 x 1".parse::<Record>().unwrap_err();
        assert!(err.contains("target vertex"));
        assert!(err.contains("`x`"));
    }
}
