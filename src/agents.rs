//! Database-type to assistant-agent capability table
//!
//! A fixed enumeration: each supported database type maps to the identifier
//! of the agent that writes queries for it. Adding or removing a supported
//! type means editing this table only.

/// Supported database types and their query-assistant agent identifiers
const AGENT_TABLE: [(&str, &str); 9] = [
    ("postgresql", "sql-assistant-postgres"),
    ("postgres", "sql-assistant-postgres"),
    ("mysql", "sql-assistant-mysql"),
    ("mariadb", "sql-assistant-mysql"),
    ("sqlserver", "sql-assistant-mssql"),
    ("mssql", "sql-assistant-mssql"),
    ("sqlite", "sql-assistant-sqlite"),
    ("duckdb", "sql-assistant-duckdb"),
    ("neo4j", "cypher-assistant-neo4j"),
];

/// Agent identifier for a database type, if one exists
///
/// Matching is case-insensitive and ignores surrounding whitespace; unknown
/// types are unsupported.
pub fn agent_for(db_type: &str) -> Option<&'static str> {
    let key = db_type.trim().to_lowercase();
    AGENT_TABLE
        .iter()
        .find(|(ty, _)| *ty == key)
        .map(|(_, agent)| *agent)
}

/// True if a query assistant exists for the database type
pub fn has_query_assistant(db_type: &str) -> bool {
    agent_for(db_type).is_some()
}

/// All database types with a query assistant
pub fn supported_types() -> impl Iterator<Item = &'static str> {
    AGENT_TABLE.iter().map(|(ty, _)| *ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_resolve() {
        assert_eq!(agent_for("postgresql"), Some("sql-assistant-postgres"));
        assert_eq!(agent_for("neo4j"), Some("cypher-assistant-neo4j"));
        // Aliases share an agent
        assert_eq!(agent_for("postgres"), agent_for("postgresql"));
        assert_eq!(agent_for("mariadb"), agent_for("mysql"));
        assert_eq!(agent_for("mssql"), agent_for("sqlserver"));
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trims() {
        assert_eq!(agent_for("PostgreSQL"), Some("sql-assistant-postgres"));
        assert_eq!(agent_for("  NEO4J "), Some("cypher-assistant-neo4j"));
    }

    #[test]
    fn test_unknown_types_unsupported() {
        assert_eq!(agent_for("oracle"), None);
        assert_eq!(agent_for(""), None);
        assert!(!has_query_assistant("mongodb"));
    }

    #[test]
    fn test_supported_types_all_have_assistants() {
        for ty in supported_types() {
            assert!(has_query_assistant(ty), "{ty} missing an assistant");
        }
    }
}
