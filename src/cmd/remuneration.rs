//! Remuneration command - statutory limit on LLP partner remuneration

use crate::core::inputs::MAX_AMOUNT;
use crate::core::{allowable_remuneration, amount_arg};
use crate::format::format_inr;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct RemunerationCommand {
    /// LLP book profit before partner remuneration
    #[arg(short, long, value_parser = amount_arg, allow_negative_numbers = true)]
    book_profit: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct RemunerationOutput {
    book_profit: Decimal,
    allowable_remuneration: Decimal,
}

impl RemunerationCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if self.book_profit < Decimal::ZERO {
            anyhow::bail!("--book-profit: Value cannot be negative");
        }
        if self.book_profit > MAX_AMOUNT {
            anyhow::bail!("--book-profit: Value exceeds the supported maximum");
        }
        let allowable = allowable_remuneration(self.book_profit);

        if self.json {
            let output = RemunerationOutput {
                book_profit: self.book_profit,
                allowable_remuneration: allowable,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!(
                "Allowable Remuneration (LLP): {} on book profit of {}",
                format_inr(allowable),
                format_inr(self.book_profit)
            );
        }
        Ok(())
    }
}
