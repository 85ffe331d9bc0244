/*!
An oracle backed by [otter_sat].

On each call a fresh [context](otter_sat::context::Context) is built, every clause is added to the context, and the context is solved.
Nothing is kept between calls, so the answer to a call depends on the clauses given and nothing else.

# Unit clauses

otter_sat values the literal of a unit clause as the clause is added, and refuses a unit clause whose literal conflicts with the value already given to the atom.
So, before any clause is added, the unit clauses are gathered, and if some pair of unit clauses conflict the clauses are unsatisfiable without a solve.
Likewise, the empty clause is unsatisfiable without a solve.

After this, any error from the context is a failure of the oracle, and is never read as either answer.

# Time

If a [time limit](crate::config::Config::time_limit) is given, the limit covers the whole call.
The time remaining after the clauses are added is passed to the context, and a solve which ends without a report of (un)satisfiability is taken to have run out of time.
*/

use std::{
    collections::HashSet,
    time::{Duration, Instant},
};

use otter_sat::{
    context::Context,
    reports::Report,
    structures::literal::{self as otter_literal, Literal as _},
};

use crate::{
    config::{Config, PolarityLean},
    misc::log::targets::{self},
    oracle::Oracle,
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// An oracle deciding satisfiability through a fresh otter_sat context on each call.
#[derive(Clone, Debug)]
pub struct Otter {
    polarity_lean: PolarityLean,
    time_limit: Option<Duration>,
}

impl Otter {
    /// An oracle configured by the given configuration.
    ///
    /// Fails if some option of the configuration is out of bounds.
    pub fn from_config(config: &Config) -> Result<Self, err::ConfigError> {
        config.check()?;

        Ok(Otter {
            polarity_lean: config.polarity_lean.value,
            time_limit: config.time_limit.value,
        })
    }

    fn context_config(&self, remaining: Option<Duration>) -> otter_sat::config::Config {
        let mut context_config = otter_sat::config::Config::default();
        context_config.polarity_lean.value = self.polarity_lean;
        if let Some(remaining) = remaining {
            context_config.time_limit.value = remaining;
        }
        context_config
    }
}

impl Default for Otter {
    fn default() -> Self {
        Otter {
            polarity_lean: 0.0,
            time_limit: None,
        }
    }
}

/// Whether some unit clause is the negation of another, or some clause is empty.
fn trivially_unsatisfiable(clauses: &[&CClause]) -> bool {
    let mut units: HashSet<CLiteral> = HashSet::default();
    for clause in clauses {
        match clause.as_slice() {
            [] => return true,
            [literal] => {
                if units.contains(&literal.negate()) {
                    return true;
                }
                units.insert(*literal);
            }
            _ => {}
        }
    }
    false
}

fn context_literal(literal: &CLiteral) -> otter_literal::CLiteral {
    otter_literal::CLiteral::new(literal.atom(), literal.polarity())
}

impl Oracle for Otter {
    fn is_satisfiable<'c, I>(&self, clauses: I) -> Result<bool, err::OracleError>
    where
        I: IntoIterator<Item = &'c CClause>,
    {
        let start = Instant::now();
        let clauses = clauses.into_iter().collect::<Vec<_>>();

        if trivially_unsatisfiable(&clauses) {
            log::debug!(target: targets::ORACLE, "Unsatisfiable without a solve, over {} clauses", clauses.len());
            return Ok(false);
        }

        let mut the_context = Context::from_config(self.context_config(None));
        for clause in &clauses {
            let literals = clause.literals().map(context_literal).collect::<Vec<_>>();
            if let Err(e) = the_context.add_clause(literals) {
                log::error!(target: targets::ORACLE, "Failed to add {}: {e:?}", clause.as_string());
                return Err(err::OracleError::Failure(format!("{e:?}")));
            }
        }

        if let Some(limit) = self.time_limit {
            let elapsed = start.elapsed();
            if elapsed >= limit {
                return Err(err::OracleError::TimeUp);
            }
            the_context.config.time_limit.value = limit - elapsed;
        }

        if let Err(e) = the_context.solve() {
            log::error!(target: targets::ORACLE, "Solve failed: {e:?}");
            return Err(err::OracleError::Failure(format!("{e:?}")));
        }

        let report = the_context.report();
        log::debug!(target: targets::ORACLE, "{report} over {} clauses in {:?}", clauses.len(), start.elapsed());

        match report {
            Report::Satisfiable => Ok(true),
            Report::Unsatisfiable => Ok(false),
            Report::Unknown => Err(err::OracleError::TimeUp),
        }
    }
}
