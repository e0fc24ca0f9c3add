//! Reaction list parsing
//!
//! Parses the textual reaction format, one reaction per line:
//!
//! ```text
//! 7 A, 1 B => 1 C
//! ```
//!
//! meaning one batch of 1 C consumes 7 A and 1 B. Only the shape of each
//! line is checked here; structural validation (unknown ingredients,
//! duplicate reactions, cycles) happens when the graph is built.

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::models::{Ingredient, RecipeRecord};

/// Parse a full reaction list. Blank lines are skipped.
pub fn parse_reactions(input: &str) -> Result<Vec<RecipeRecord>> {
    // Pattern: <amount> <name>, e.g. "7 A" or "44 XJWVT"
    let term_re = Regex::new(r"^(\d+)\s+(\w+)$")?;

    let mut records = Vec::new();
    for (lineno, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = parse_reaction(&term_re, line)
            .with_context(|| format!("Malformed reaction on line {}", lineno + 1))?;
        records.push(record);
    }
    Ok(records)
}

fn parse_reaction(term_re: &Regex, line: &str) -> Result<RecipeRecord> {
    let Some((inputs, output)) = line.split_once("=>") else {
        bail!("expected '=>' separator in '{line}'");
    };

    let (batch_size, produced) = parse_term(term_re, output)?;

    let mut ingredients = Vec::new();
    for term in inputs.split(',') {
        let (amount_per_batch, name) = parse_term(term_re, term)?;
        ingredients.push(Ingredient {
            name,
            amount_per_batch,
        });
    }

    Ok(RecipeRecord {
        produced,
        batch_size,
        ingredients,
    })
}

fn parse_term(term_re: &Regex, term: &str) -> Result<(i64, String)> {
    let term = term.trim();
    let Some(cap) = term_re.captures(term) else {
        bail!("expected '<amount> <name>', got '{term}'");
    };
    let amount = cap[1]
        .parse::<i64>()
        .with_context(|| format!("amount out of range in '{term}'"))?;
    Ok((amount, cap[2].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multi_ingredient_reaction() {
        let records = parse_reactions("44 XJWVT, 5 KHKGT => 1 FUEL").unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.produced, "FUEL");
        assert_eq!(record.batch_size, 1);
        assert_eq!(record.ingredients.len(), 2);
        assert_eq!(record.ingredients[0].name, "XJWVT");
        assert_eq!(record.ingredients[0].amount_per_batch, 44);
        assert_eq!(record.ingredients[1].name, "KHKGT");
        assert_eq!(record.ingredients[1].amount_per_batch, 5);
    }

    #[test]
    fn skips_blank_lines() {
        let records = parse_reactions("10 ORE => 10 A\n\n  \n1 A => 1 FUEL\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].produced, "A");
        assert_eq!(records[0].batch_size, 10);
        assert_eq!(records[1].produced, "FUEL");
    }

    #[test]
    fn rejects_missing_separator() {
        let err = parse_reactions("10 ORE, 10 A").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn rejects_malformed_term() {
        assert!(parse_reactions("ORE 10 => 1 A").is_err());
        assert!(parse_reactions("10 ORE => A").is_err());
    }
}
