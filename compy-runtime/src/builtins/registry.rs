//! Builtin port registry
//!
//! Describes which builtins a compiled program may call, the native headers
//! each one needs, and which other builtins it links against (`input` prints
//! its prompt, so it links `print`). Resolving a set of names yields every
//! builtin that must be emitted, dependencies first.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::algo::toposort;
use petgraph::graph::DiGraph;

use crate::error::{Result, RuntimeError};
use crate::logging::debug;

/// One ported builtin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builtin {
    pub name: String,
    pub params: Vec<String>,
    pub headers: Vec<String>,
    pub links: Vec<String>,
}

impl Builtin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            headers: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Table of ported builtins, keyed by their Python-facing name
#[derive(Debug, Clone, Default)]
pub struct BuiltinRegistry {
    entries: BTreeMap<String, Builtin>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtins every compiled program can use
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Builtin::new("range").with_params(["end"]));
        registry.register(
            Builtin::new("print")
                .with_params(["print_string"])
                .with_headers(["iostream"]),
        );
        registry.register(
            Builtin::new("input")
                .with_params(["print_string"])
                .with_headers(["iostream", "utility"])
                .with_links(["print"]),
        );
        registry.register(Builtin::new("str").with_params(["obj"]).with_headers(["iostream"]));
        registry.register(Builtin::new("int").with_params(["obj"]).with_headers(["iostream"]));
        registry.register(
            Builtin::new("pow")
                .with_params(["value", "exponent"])
                .with_headers(["cmath"]),
        );
        registry.register(Builtin::new("add").with_params(["number_one", "number_two"]));
        registry.register(Builtin::new("mul").with_params(["x", "y"]));
        registry
    }

    /// Add or replace a builtin. Returns the entry it replaced, if any.
    pub fn register(&mut self, builtin: Builtin) -> Option<Builtin> {
        debug!(target: "builtins", name = %builtin.name, links = ?builtin.links, "registering builtin");
        self.entries.insert(builtin.name.clone(), builtin)
    }

    /// Merge another port library; its entries win on name clashes
    pub fn link_library(&mut self, library: BuiltinRegistry) {
        for (_, builtin) in library.entries {
            self.register(builtin);
        }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&Builtin> {
        self.entries
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownBuiltin { name: name.to_string() })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Requested builtins plus everything they link, dependencies first
    pub fn resolve<'a, I>(&self, names: I) -> Result<Vec<&Builtin>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let closure = self.closure(names)?;

        let mut graph = DiGraph::<&str, ()>::new();
        let nodes: HashMap<&str, _> = closure
            .iter()
            .map(|&name| (name, graph.add_node(name)))
            .collect();

        for &name in &closure {
            for link in &self.entries[name].links {
                graph.add_edge(nodes[link.as_str()], nodes[name], ());
            }
        }

        let order = toposort(&graph, None).map_err(|cycle| RuntimeError::LinkCycle {
            name: graph[cycle.node_id()].to_string(),
        })?;

        Ok(order.into_iter().map(|idx| &self.entries[graph[idx]]).collect())
    }

    /// Sorted native headers needed by the resolved builtins
    pub fn headers<'a, I>(&self, names: I) -> Result<Vec<&str>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: BTreeSet<&str> = self
            .resolve(names)?
            .into_iter()
            .flat_map(|builtin| builtin.headers.iter().map(String::as_str))
            .collect();
        Ok(headers.into_iter().collect())
    }

    fn closure<'a, I>(&self, names: I) -> Result<BTreeSet<&str>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = BTreeSet::new();
        let mut pending: Vec<String> = names.into_iter().map(str::to_string).collect();

        while let Some(name) = pending.pop() {
            let (key, builtin) = self
                .entries
                .get_key_value(name.as_str())
                .ok_or(RuntimeError::UnknownBuiltin { name })?;
            if seen.insert(key.as_str()) {
                pending.extend(builtin.links.iter().cloned());
            }
        }

        Ok(seen)
    }
}
