use anyhow::{Context, Result};
use std::collections::{HashMap, VecDeque};
use std::path::Path;

use super::error::ScenarioError;
use super::types::{RoomSpec, Scenario};
use crate::rooms::{RoomGraph, RoomId, Side};

const DEFAULT_SCENARIO: &str = include_str!("../../scenarios/mansion.toml");
const DEFAULT_TITLE: &str = "The Mansion";

/// A scenario turned into a playable map.
#[derive(Debug)]
pub struct Mansion {
    pub title: String,
    pub graph: RoomGraph,
}

pub fn default_mansion() -> Result<Mansion, ScenarioError> {
    parse_mansion(DEFAULT_SCENARIO)
}

pub fn load_mansion(path: &Path) -> Result<Mansion> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    let mansion = parse_mansion(&content)
        .with_context(|| format!("loading scenario {}", path.display()))?;
    Ok(mansion)
}

pub fn parse_mansion(content: &str) -> Result<Mansion, ScenarioError> {
    let scenario: Scenario = toml::from_str(content)?;
    let graph = build_graph(&scenario)?;
    tracing::info!(rooms = graph.len(), "scenario loaded");
    Ok(Mansion {
        title: scenario.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        graph,
    })
}

/// Builds the room tree breadth-first from the root, so the root is the
/// first room in the graph.
pub fn build_graph(scenario: &Scenario) -> Result<RoomGraph, ScenarioError> {
    if scenario.rooms.is_empty() {
        return Err(ScenarioError::Empty);
    }

    let mut by_id: HashMap<&str, &RoomSpec> = HashMap::new();
    for spec in &scenario.rooms {
        if by_id.insert(spec.id.as_str(), spec).is_some() {
            return Err(ScenarioError::DuplicateRoom(spec.id.clone()));
        }
    }
    for spec in &scenario.rooms {
        for target in [&spec.left, &spec.right].into_iter().flatten() {
            if !by_id.contains_key(target.as_str()) {
                return Err(ScenarioError::UnknownChild {
                    room: spec.id.clone(),
                    target: target.clone(),
                });
            }
        }
    }
    let root = *by_id
        .get(scenario.root.as_str())
        .ok_or_else(|| ScenarioError::UnknownRoot(scenario.root.clone()))?;

    let mut graph = RoomGraph::new();
    let mut placed: HashMap<&str, RoomId> = HashMap::new();
    let mut queue = VecDeque::new();

    placed.insert(root.id.as_str(), add(&mut graph, root));
    queue.push_back(root);

    while let Some(spec) = queue.pop_front() {
        let parent = placed[spec.id.as_str()];
        for (side, target) in [(Side::Left, &spec.left), (Side::Right, &spec.right)] {
            let Some(target) = target else { continue };
            if placed.contains_key(target.as_str()) {
                return Err(ScenarioError::SharedRoom(target.clone()));
            }
            let child_spec = by_id[target.as_str()];
            let child = add(&mut graph, child_spec);
            if !graph.connect(parent, side, child) {
                return Err(ScenarioError::SharedRoom(target.clone()));
            }
            placed.insert(child_spec.id.as_str(), child);
            queue.push_back(child_spec);
        }
    }

    if let Some(orphan) = scenario
        .rooms
        .iter()
        .find(|spec| !placed.contains_key(spec.id.as_str()))
    {
        return Err(ScenarioError::Unreachable(orphan.id.clone()));
    }

    Ok(graph)
}

fn add(graph: &mut RoomGraph, spec: &RoomSpec) -> RoomId {
    graph.add_room(spec.name.as_str(), spec.clue.clone(), &spec.suspects)
}
