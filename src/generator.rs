/// The generator: a single straight-line pass over a seeded RNG.
///
/// Produces one `def currency` line, `people` person declarations, and
/// `transactions` payment lines. Payer and payee are drawn from the declared
/// people uniformly and with replacement, so a person may pay themselves;
/// identifiers may collide. Amounts are uniform in `[0, 1000)`.
use std::io::Write;

use anyhow::{Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ident::random_ident;
use crate::output;

/// Exclusive upper bound for sampled amounts.
const MAX_AMOUNT: f64 = 1000.0;

/// What to generate. Counts are taken at face value; the only rejected
/// combination is asking for transactions with nobody to draw from.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub people: u64,
    pub transactions: u64,
    /// Fixed seed for reproducible output; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

pub struct Generator {
    config: Config,
    rng: StdRng,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Emit the whole document in order: currency, people, transactions.
    ///
    /// Exactly `1 + people + transactions` lines on success. The person list
    /// is materialized once and immutable afterwards; transaction records are
    /// written as they are sampled and never retained.
    pub fn write_to<W: Write>(&mut self, w: &mut W) -> Result<()> {
        if self.config.people == 0 && self.config.transactions > 0 {
            bail!(
                "cannot generate {} transaction(s) with zero people",
                self.config.transactions
            );
        }

        output::write_currency_decl(w)?;

        let people: Vec<String> = (0..self.config.people)
            .map(|_| random_ident(&mut self.rng))
            .collect();
        for id in &people {
            output::write_person_decl(w, id)?;
        }

        for _ in 0..self.config.transactions {
            let payer = &people[self.rng.gen_range(0..people.len())];
            let payee = &people[self.rng.gen_range(0..people.len())];
            let amount = self.rng.gen_range(0.0..MAX_AMOUNT);
            output::write_transaction(w, payer, amount, payee)?;
        }

        Ok(())
    }
}
