//! Reaction graph storage and construction
//!
//! Stores every resource as a node in an arena indexed by name, with
//! adjacency kept in both directions: what a resource is made from
//! (`uses`) and which reactions consume it (`used_in`). The graph is
//! built once from a parsed reaction list and never mutated afterwards,
//! so queries can share it freely.

use std::collections::HashMap;

use crate::errors::ChainError;
use crate::models::RecipeRecord;

pub type NodeId = usize;

/// A single resource in the reaction graph.
#[derive(Debug)]
pub struct Node {
    pub name: String,
    /// Units produced per reaction run (1 for the base resource).
    pub batch_size: i64,
    /// Ingredients consumed per batch: (ingredient, amount).
    pub uses: Vec<(NodeId, i64)>,
    /// Reactions consuming this resource: (consumer, amount per consumer batch).
    pub used_in: Vec<(NodeId, i64)>,
}

/// Immutable DAG of resources and their production reactions.
#[derive(Debug)]
pub struct RecipeGraph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    base: NodeId,
    /// Topological order with every consumer ahead of its ingredients.
    resolve_order: Vec<NodeId>,
}

impl RecipeGraph {
    /// Build the graph from parsed reaction records.
    ///
    /// Two-phase: first an arena entry per produced resource (plus the
    /// always-present base resource with batch size 1), then adjacency
    /// wired by index so ingredient lookups never see a half-built node.
    /// An ingredient name must be the base resource or produced by some
    /// reaction in the list.
    pub fn build(base: &str, records: &[RecipeRecord]) -> Result<Self, ChainError> {
        let mut nodes = Vec::with_capacity(records.len() + 1);
        let mut index = HashMap::with_capacity(records.len() + 1);

        nodes.push(Node {
            name: base.to_string(),
            batch_size: 1,
            uses: Vec::new(),
            used_in: Vec::new(),
        });
        index.insert(base.to_string(), 0);

        for record in records {
            if record.batch_size < 1 {
                return Err(ChainError::InvalidArgument(format!(
                    "batch size for '{}' must be positive",
                    record.produced
                )));
            }
            if index.contains_key(record.produced.as_str()) {
                return Err(ChainError::DuplicateRecipe(record.produced.clone()));
            }
            let id = nodes.len();
            nodes.push(Node {
                name: record.produced.clone(),
                batch_size: record.batch_size,
                uses: Vec::new(),
                used_in: Vec::new(),
            });
            index.insert(record.produced.clone(), id);
        }

        for record in records {
            let consumer = index[record.produced.as_str()];
            for ingredient in &record.ingredients {
                if ingredient.amount_per_batch < 1 {
                    return Err(ChainError::InvalidArgument(format!(
                        "amount of '{}' per batch of '{}' must be positive",
                        ingredient.name, record.produced
                    )));
                }
                let Some(&id) = index.get(ingredient.name.as_str()) else {
                    return Err(ChainError::UnknownResource(ingredient.name.clone()));
                };
                nodes[consumer].uses.push((id, ingredient.amount_per_batch));
                nodes[id]
                    .used_in
                    .push((consumer, ingredient.amount_per_batch));
            }
        }

        let resolve_order = topological_order(&nodes)?;

        Ok(RecipeGraph {
            nodes,
            index,
            base: 0,
            resolve_order,
        })
    }

    /// Look up a resource by name.
    pub fn lookup(&self, name: &str) -> Result<NodeId, ChainError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ChainError::UnknownResource(name.to_string()))
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn base(&self) -> NodeId {
        self.base
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Node ids ordered so that every consumer precedes its ingredients.
    pub fn resolve_order(&self) -> &[NodeId] {
        &self.resolve_order
    }
}

/// Kahn's algorithm over the consumed-by relation. A node is ready once
/// all reactions consuming it have been placed; anything left over sits
/// on a cycle.
fn topological_order(nodes: &[Node]) -> Result<Vec<NodeId>, ChainError> {
    let mut pending: Vec<usize> = nodes.iter().map(|n| n.used_in.len()).collect();
    let mut ready: Vec<NodeId> = (0..nodes.len()).filter(|&id| pending[id] == 0).collect();
    let mut order = Vec::with_capacity(nodes.len());

    while let Some(id) = ready.pop() {
        order.push(id);
        for &(ingredient, _) in &nodes[id].uses {
            pending[ingredient] -= 1;
            if pending[ingredient] == 0 {
                ready.push(ingredient);
            }
        }
    }

    if order.len() < nodes.len() {
        // Raw ingredients below the cycle also stay pending; skip them so
        // the reported name at least sits on or feeds into the cycle.
        let stuck = (0..nodes.len())
            .find(|&id| pending[id] > 0 && !nodes[id].uses.is_empty())
            .or_else(|| (0..nodes.len()).find(|&id| pending[id] > 0))
            .map(|id| nodes[id].name.clone())
            .unwrap_or_default();
        return Err(ChainError::CyclicDependency(stuck));
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_reactions;

    fn build(input: &str) -> Result<RecipeGraph, ChainError> {
        RecipeGraph::build("ORE", &parse_reactions(input).unwrap())
    }

    #[test]
    fn adjacency_is_mirrored() {
        let graph = build("10 ORE => 10 A\n7 A => 1 FUEL").unwrap();
        assert_eq!(graph.len(), 3);

        let ore = graph.lookup("ORE").unwrap();
        let a = graph.lookup("A").unwrap();
        let fuel = graph.lookup("FUEL").unwrap();

        assert_eq!(ore, graph.base());
        assert_eq!(graph.node(ore).batch_size, 1);
        assert!(graph.node(ore).uses.is_empty());
        assert_eq!(graph.node(ore).used_in, vec![(a, 10)]);

        assert_eq!(graph.node(a).batch_size, 10);
        assert_eq!(graph.node(a).uses, vec![(ore, 10)]);
        assert_eq!(graph.node(a).used_in, vec![(fuel, 7)]);

        assert_eq!(graph.node(fuel).uses, vec![(a, 7)]);
        assert!(graph.node(fuel).used_in.is_empty());
    }

    #[test]
    fn resolve_order_puts_consumers_first() {
        let graph = build("10 ORE => 10 A\n7 A => 1 FUEL").unwrap();
        let order = graph.resolve_order();
        assert_eq!(order.len(), 3);

        let position = |name: &str| {
            let id = graph.lookup(name).unwrap();
            order.iter().position(|&n| n == id).unwrap()
        };
        assert!(position("FUEL") < position("A"));
        assert!(position("A") < position("ORE"));
    }

    #[test]
    fn rejects_unknown_ingredient() {
        let err = build("3 XYZZY => 1 FUEL").unwrap_err();
        assert_eq!(err, ChainError::UnknownResource("XYZZY".to_string()));
    }

    #[test]
    fn rejects_duplicate_recipe() {
        let err = build("1 ORE => 1 A\n2 ORE => 3 A\n1 A => 1 FUEL").unwrap_err();
        assert_eq!(err, ChainError::DuplicateRecipe("A".to_string()));
    }

    #[test]
    fn rejects_recipe_producing_the_base_resource() {
        let err = build("1 ORE => 1 A\n1 A => 5 ORE").unwrap_err();
        assert_eq!(err, ChainError::DuplicateRecipe("ORE".to_string()));
    }

    #[test]
    fn rejects_cycle() {
        let err = build("1 ORE, 1 B => 1 A\n1 A => 1 B\n1 B => 1 FUEL").unwrap_err();
        assert!(matches!(err, ChainError::CyclicDependency(_)));
    }

    #[test]
    fn rejects_zero_amounts() {
        assert!(matches!(
            build("1 ORE => 0 A").unwrap_err(),
            ChainError::InvalidArgument(_)
        ));
        assert!(matches!(
            build("0 ORE => 1 A").unwrap_err(),
            ChainError::InvalidArgument(_)
        ));
    }

    #[test]
    fn unknown_lookup_fails() {
        let graph = build("1 ORE => 1 FUEL").unwrap();
        assert_eq!(
            graph.lookup("XYZZY").unwrap_err(),
            ChainError::UnknownResource("XYZZY".to_string())
        );
    }
}
