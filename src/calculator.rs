//! Reaction chain cost resolution and yield search
//!
//! `total_required` answers "how much of one resource does it take to
//! produce exactly N of another", honoring whole-batch rounding at every
//! step of the chain. `max_yield` inverts it: since the cost never
//! decreases as the requested amount grows, the largest affordable
//! amount can be found by bracketing and converging on the budget
//! instead of scanning every value.

use crate::errors::ChainError;
use crate::graph::RecipeGraph;

/// Total units of `source` consumed to produce exactly `amount` units
/// of `target`.
///
/// Walks the graph with consumers ahead of their ingredients, so each
/// resource's demand is aggregated across every reaction that needs it
/// before its own batch count is taken. Shared intermediates in
/// diamond-shaped chains are therefore rounded once against their
/// combined demand, never once per consumer.
pub fn total_required(
    graph: &RecipeGraph,
    source: &str,
    target: &str,
    amount: i64,
) -> Result<i64, ChainError> {
    if amount < 0 {
        return Err(ChainError::InvalidArgument(format!(
            "amount must be non-negative, got {amount}"
        )));
    }
    let source = graph.lookup(source)?;
    let target = graph.lookup(target)?;

    let mut demand = vec![0i64; graph.len()];
    demand[target] = amount;

    for &id in graph.resolve_order() {
        let needed = demand[id];
        if needed == 0 {
            continue;
        }
        let node = graph.node(id);
        let batches = needed / node.batch_size + i64::from(needed % node.batch_size != 0);
        for &(ingredient, per_batch) in &node.uses {
            demand[ingredient] += batches * per_batch;
        }
    }

    Ok(demand[source])
}

/// Largest `amount` such that `total_required(source, target, amount)`
/// stays within `budget` units of `source`.
pub fn max_yield(
    graph: &RecipeGraph,
    source: &str,
    target: &str,
    budget: i64,
) -> Result<i64, ChainError> {
    if budget < 0 {
        return Err(ChainError::InvalidArgument(format!(
            "budget must be non-negative, got {budget}"
        )));
    }

    let mut used = total_required(graph, source, target, 1)?;
    if used == 0 {
        return Err(ChainError::InvalidArgument(format!(
            "producing '{target}' consumes no '{source}', so the yield is unbounded"
        )));
    }

    // Rough first approximation: double until the cost passes half the budget.
    let mut trial: i64 = 1;
    while used <= budget / 2 {
        trial *= 2;
        used = total_required(graph, source, target, trial)?;
    }

    // Close the remaining gap with a linear extrapolation of the cost per
    // unit. Batch rounding makes the real cost piecewise-linear, so the
    // step can overshoot, but it shrinks to 1 as the gap closes. The
    // product is widened to i128: trillion-scale budgets overflow i64.
    while used < budget {
        let step = (budget - used) as i128 * trial as i128 / used as i128;
        trial += (step as i64).max(1);
        used = total_required(graph, source, target, trial)?;
    }

    // The loop leaves trial at or just past the boundary. Normally the
    // final step was 1 and a single decrement lands on the answer; the
    // loop form also covers a coarse step crossing the boundary in one
    // jump, and keeps trial itself when the cost hits the budget exactly.
    while trial > 0 && total_required(graph, source, target, trial)? > budget {
        trial -= 1;
    }
    Ok(trial)
}
