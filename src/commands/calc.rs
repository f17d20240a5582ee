use anyhow::{bail, Result};
use clap::Args as ClapArgs;

use crate::engine::format_result;
use crate::math::evaluate;

#[derive(ClapArgs)]
pub struct Args {
    /// Expression to evaluate, e.g. "2 * (3 + 4)"
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub expression: Vec<String>,
}

pub async fn execute(args: Args) -> Result<()> {
    let expression = args.expression.join(" ");

    match evaluate(&expression) {
        Ok(value) => {
            println!("{}", format_result(value));
            Ok(())
        }
        Err(e) => {
            tracing::debug!("calc failed for {:?}: {}", expression, e);
            bail!("Cannot evaluate '{}': {}", expression, e)
        }
    }
}
