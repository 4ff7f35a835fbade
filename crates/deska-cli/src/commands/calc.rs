use anyhow::{Context, Result};
use deska_core::math::calculate;

/// Evaluates an expression directly, without intent matching.
pub fn run(expression: &str) -> Result<()> {
    let answer = calculate(expression).with_context(|| format!("Invalid expression '{}'", expression))?;
    println!("{}", answer);
    Ok(())
}
