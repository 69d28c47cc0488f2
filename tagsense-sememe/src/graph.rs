//! Sememe forest with parent pointers.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::path::Path;

use tagsense_core::errors::LoadError;
use tagsense_core::models::LoadStats;
use tagsense_tokens::read_resource;
use tracing::{info, warn};

use crate::name::parse_sememe_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SememeNode {
    pub id: i64,
    /// Equal to `id` at a root.
    pub parent: i64,
    pub zh: String,
    pub en: String,
}

impl SememeNode {
    /// Parse an `id name parent` line.
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [id, name, parent] = fields[..] else {
            return None;
        };
        let (zh, en) = parse_sememe_name(name);
        Some(Self {
            id: id.parse().ok()?,
            parent: parent.parse().ok()?,
            zh: zh.to_string(),
            en: en.to_string(),
        })
    }
}

/// Weight of the hop at `position` along an ancestor path.
pub fn path_weight(position: usize) -> f64 {
    let i = position as f64;
    (1.0 - i / 13.0) * (1.0 + (i * PI / 45.0).sin())
}

#[derive(Debug, Clone, Default)]
pub struct SememeGraph {
    nodes: HashMap<i64, SememeNode>,
    by_name: HashMap<String, i64>,
}

impl SememeGraph {
    pub fn load(path: &Path) -> Result<(Self, LoadStats), LoadError> {
        let text = read_resource(path)?;
        Self::parse(&text, &path.display().to_string())
    }

    pub fn parse(text: &str, source: &str) -> Result<(Self, LoadStats), LoadError> {
        let mut graph = SememeGraph::default();
        let mut stats = LoadStats::default();
        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match SememeNode::parse(line) {
                Some(node) => {
                    graph.insert(node);
                    stats.accept();
                }
                None => {
                    warn!(source, line = line_no + 1, "skipping malformed sememe line");
                    stats.skip();
                }
            }
        }
        if graph.nodes.is_empty() {
            return Err(LoadError::EmptyResource {
                path: source.to_string(),
            });
        }
        info!(source, nodes = graph.nodes.len(), skipped = stats.skipped, "sememe graph loaded");
        Ok((graph, stats))
    }

    /// Add a node; a later node with the same Chinese name shadows earlier ones.
    pub fn insert(&mut self, node: SememeNode) {
        self.by_name.insert(node.zh.clone(), node.id);
        self.nodes.insert(node.id, node);
    }

    pub fn node(&self, id: i64) -> Option<&SememeNode> {
        self.nodes.get(&id)
    }

    pub fn find(&self, name: &str) -> Option<&SememeNode> {
        self.by_name.get(name).and_then(|id| self.nodes.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Weighted tree distance between two sememes, `None` if either is unknown.
    ///
    /// The first sememe's ancestor path is recorded, then the second climbs
    /// one hop at a time until it lands on that path. The walk is directional,
    /// so `distance(a, b)` and `distance(b, a)` can differ. Sememes in
    /// different trees are `unreachable` apart.
    pub fn distance(&self, s1: &str, s2: &str, unreachable: f64) -> Option<f64> {
        let n1 = self.find(s1)?;
        let n2 = self.find(s2)?;
        let max_steps = self.nodes.len();

        let mut path = Vec::new();
        let (mut id, mut parent) = (n1.id, n1.parent);
        let mut steps = 0;
        while id != parent && steps < max_steps {
            path.push(id);
            id = parent;
            if let Some(p) = self.nodes.get(&parent) {
                parent = p.parent;
            }
            steps += 1;
        }
        path.push(id);

        let on_path = |id: i64| path.iter().position(|&p| p == id);
        let (mut id, mut parent) = (n2.id, n2.parent);
        let mut len = 0.0;
        let mut steps = 0;
        while id != parent && steps < max_steps {
            if let Some(pos) = on_path(id) {
                return Some(path_weight(pos) + len);
            }
            id = parent;
            if let Some(p) = self.nodes.get(&parent) {
                parent = p.parent;
            }
            len += path_weight(1);
            steps += 1;
        }
        match on_path(id) {
            Some(pos) => Some(path_weight(pos) + len),
            None => Some(unreachable),
        }
    }
}
