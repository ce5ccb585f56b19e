//! Validation caps from the environment.
//!
//! Reads:
//! - `ALGOTRACE_MAX_ARRAY_LEN`: array element cap (default: 12)
//! - `ALGOTRACE_MAX_GRAPH_NODES`: graph node cap (default: 12)
//! - `ALGOTRACE_MAX_GRAPH_EDGES`: graph edge cap (default: 40)
//!
//! A `--max-array-len` flag takes precedence over the environment.

use algotrace_core::Limits;

pub const MAX_ARRAY_LEN_VAR: &str = "ALGOTRACE_MAX_ARRAY_LEN";
pub const MAX_GRAPH_NODES_VAR: &str = "ALGOTRACE_MAX_GRAPH_NODES";
pub const MAX_GRAPH_EDGES_VAR: &str = "ALGOTRACE_MAX_GRAPH_EDGES";

/// Builds [`Limits`] from `lookup` (normally `std::env::var`) and an optional
/// flag override. Unset variables keep their defaults; unparsable ones are
/// an error naming the variable.
pub fn limits_from<F>(lookup: F, max_array_len_flag: Option<usize>) -> Result<Limits, String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut limits = Limits::default();
    if let Some(len) = parse_var(&lookup, MAX_ARRAY_LEN_VAR)? {
        limits.max_array_len = len;
    }
    if let Some(nodes) = parse_var(&lookup, MAX_GRAPH_NODES_VAR)? {
        limits.max_graph_nodes = nodes;
    }
    if let Some(edges) = parse_var(&lookup, MAX_GRAPH_EDGES_VAR)? {
        limits.max_graph_edges = edges;
    }
    if let Some(len) = max_array_len_flag {
        limits.max_array_len = len;
    }
    Ok(limits)
}

/// Reads the process environment.
pub fn limits_from_env(max_array_len_flag: Option<usize>) -> Result<Limits, String> {
    limits_from(|name| std::env::var(name).ok(), max_array_len_flag)
}

fn parse_var<F>(lookup: &F, name: &str) -> Result<Option<usize>, String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| format!("{name} must be a non-negative integer, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_without_env() {
        assert_eq!(limits_from(env(&[]), None).unwrap(), Limits::default());
    }

    #[test]
    fn env_overrides_defaults() {
        let limits = limits_from(
            env(&[
                (MAX_ARRAY_LEN_VAR, "20"),
                (MAX_GRAPH_NODES_VAR, " 6 "),
                (MAX_GRAPH_EDGES_VAR, "15"),
            ]),
            None,
        )
        .unwrap();
        assert_eq!(limits.max_array_len, 20);
        assert_eq!(limits.max_graph_nodes, 6);
        assert_eq!(limits.max_graph_edges, 15);
        assert_eq!(limits.max_operand, Limits::default().max_operand);
    }

    #[test]
    fn flag_beats_env() {
        let limits = limits_from(env(&[(MAX_ARRAY_LEN_VAR, "20")]), Some(5)).unwrap();
        assert_eq!(limits.max_array_len, 5);
    }

    #[test]
    fn garbage_is_reported() {
        let err = limits_from(env(&[(MAX_GRAPH_NODES_VAR, "lots")]), None).unwrap_err();
        assert!(err.contains(MAX_GRAPH_NODES_VAR));
        assert!(err.contains("lots"));
    }
}
