use depgraph_util::errors::DepgraphError;

/// Output formats recognized on the command line and in `depgraph.toml`.
///
/// Only some of them can be rendered; the others are recognized so that a
/// misconfiguration is reported as "unsupported" rather than "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphFormat {
    Dot,
    Gml,
    Puml,
    Json,
    Text,
    GraphStore,
}

impl GraphFormat {
    pub const ALL: [GraphFormat; 6] = [
        GraphFormat::Dot,
        GraphFormat::Gml,
        GraphFormat::Puml,
        GraphFormat::Json,
        GraphFormat::Text,
        GraphFormat::GraphStore,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GraphFormat::Dot => "dot",
            GraphFormat::Gml => "gml",
            GraphFormat::Puml => "puml",
            GraphFormat::Json => "json",
            GraphFormat::Text => "text",
            GraphFormat::GraphStore => "graph-store",
        }
    }

    /// Extension of the file the rendered graph is written to.
    pub fn file_extension(&self) -> &'static str {
        match self {
            GraphFormat::Dot => ".dot",
            GraphFormat::Gml => ".gml",
            GraphFormat::Puml => ".puml",
            GraphFormat::Json | GraphFormat::GraphStore => ".json",
            GraphFormat::Text => ".txt",
        }
    }
}

impl std::str::FromStr for GraphFormat {
    type Err = DepgraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot" => Ok(GraphFormat::Dot),
            "gml" => Ok(GraphFormat::Gml),
            "puml" => Ok(GraphFormat::Puml),
            "json" => Ok(GraphFormat::Json),
            "text" => Ok(GraphFormat::Text),
            "graph-store" | "graphstore" | "neo4j" => Ok(GraphFormat::GraphStore),
            _ => Err(DepgraphError::config(format!(
                "Unknown graph format '{s}'. Expected one of: dot, gml, puml, json, text, graph-store"
            ))),
        }
    }
}

impl std::fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_name_is_case_insensitive() {
        for name in ["json", "Json", "JSON"] {
            assert_eq!(name.parse::<GraphFormat>().unwrap(), GraphFormat::Json);
        }
        for name in ["text", "Text", "TEXT"] {
            assert_eq!(name.parse::<GraphFormat>().unwrap(), GraphFormat::Text);
        }
    }

    #[test]
    fn graph_store_aliases() {
        assert_eq!("graph-store".parse::<GraphFormat>().unwrap(), GraphFormat::GraphStore);
        assert_eq!("neo4j".parse::<GraphFormat>().unwrap(), GraphFormat::GraphStore);
    }

    #[test]
    fn unknown_format_fails() {
        let err = "unknown_format".parse::<GraphFormat>().unwrap_err();
        assert!(err.to_string().contains("Unknown graph format 'unknown_format'"));
    }

    #[test]
    fn file_extensions() {
        assert_eq!(GraphFormat::Json.file_extension(), ".json");
        assert_eq!(GraphFormat::Text.file_extension(), ".txt");
        assert_eq!(GraphFormat::GraphStore.file_extension(), ".json");
        assert_eq!(GraphFormat::Puml.file_extension(), ".puml");
    }

    #[test]
    fn name_roundtrip() {
        for format in GraphFormat::ALL {
            assert_eq!(format.name().parse::<GraphFormat>().unwrap(), format);
        }
    }
}
