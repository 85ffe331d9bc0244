/*!
A session, for sharing a reasoner between threads.

A [Session] holds a reasoner behind a reader-writer lock.
Procedures which add to the knowledge base take the write lock, and so are made one at a time.
Queries take the read lock, and so may be made together.

A batch of queries is answered by a [scoped](crossbeam::scope) collection of workers, under a single read lock.
So, no event is recorded part way through a batch.
Each worker takes the next unanswered query of the batch, and sends the answer back over a [channel](crossbeam::channel).
Answers are returned in the order of the batch, regardless of the order the workers finish.

A batch which takes too long may only be cut short by a [time limit](crate::config::Config::time_limit) on the oracle.

# Example

```rust
# use clue_sat::config::Config;
# use clue_sat::reports::Answer;
# use clue_sat::session::Session;
let session = Session::from_config(Config::default()).unwrap();
assert!(session.initialize().is_ok());
assert!(session.record_hand("sc", &["wh", "li", "st"]).is_ok());

let answers = session.query_batch(&[("sc", "wh"), ("mu", "wh"), ("sc", "ro")], 2);
assert_eq!(answers, Ok(vec![Answer::True, Answer::False, Answer::Unknown]));
```
*/

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use crossbeam::channel::unbounded;

use crate::{
    config::Config,
    misc::log::targets::{self},
    oracle::{Oracle, Otter},
    reasoner::GenericReasoner,
    reports::Answer,
    structures::entity::CardIndex,
    types::err::{self},
};

/// A reasoner, shared.
pub struct Session<O: Oracle> {
    reasoner: RwLock<GenericReasoner<O>>,
}

impl Session<Otter> {
    /// Creates a session over a [Reasoner](crate::reasoner::Reasoner) built from the given configuration.
    pub fn from_config(config: Config) -> Result<Self, err::ErrorKind> {
        let oracle = Otter::from_config(&config)?;
        let reasoner = GenericReasoner::with_oracle(config, oracle)?;
        Ok(Self::new(reasoner))
    }
}

impl<O: Oracle> Session<O> {
    pub fn new(reasoner: GenericReasoner<O>) -> Self {
        Session {
            reasoner: RwLock::new(reasoner),
        }
    }

    /// Ends the session, returning the reasoner.
    pub fn into_inner(self) -> Result<GenericReasoner<O>, err::ErrorKind> {
        self.reasoner
            .into_inner()
            .map_err(|_| err::StateError::Poisoned.into())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, GenericReasoner<O>>, err::StateError> {
        self.reasoner.read().map_err(|_| err::StateError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, GenericReasoner<O>>, err::StateError> {
        self.reasoner.write().map_err(|_| err::StateError::Poisoned)
    }

    /// See [initialize](crate::procedures::initialize).
    pub fn initialize(&self) -> Result<(), err::ErrorKind> {
        self.write()?.initialize()
    }

    /// See [hand](crate::procedures::hand).
    pub fn record_hand(&self, player: &str, cards: &[&str]) -> Result<(), err::ErrorKind> {
        self.write()?.record_hand(player, cards)
    }

    /// See [suggestion](crate::procedures::suggestion).
    pub fn record_suggestion(
        &self,
        suggester: &str,
        cards: [&str; 3],
        refuter: Option<&str>,
        shown: Option<&str>,
    ) -> Result<(), err::ErrorKind> {
        self.write()?
            .record_suggestion(suggester, cards, refuter, shown)
    }

    /// See [accusation](crate::procedures::accusation).
    pub fn record_accusation(
        &self,
        accuser: &str,
        cards: [&str; 3],
        is_correct: bool,
    ) -> Result<(), err::ErrorKind> {
        self.write()?.record_accusation(accuser, cards, is_correct)
    }

    /// See [query](crate::procedures::query).
    pub fn query(&self, entity: &str, card: &str) -> Result<Answer, err::ErrorKind> {
        self.read()?.query(entity, card)
    }

    pub fn clause_count(&self) -> Result<usize, err::ErrorKind> {
        Ok(self.read()?.clause_count())
    }
}

impl<O: Oracle + Sync> Session<O> {
    /// Answers to each (entity, card) query of a batch, in the order given, using (at most) the given number of workers.
    ///
    /// Every name is resolved before any query is made.
    /// If some query fails, the first failure in the order given is returned.
    pub fn query_batch(
        &self,
        requests: &[(&str, &str)],
        workers: usize,
    ) -> Result<Vec<Answer>, err::ErrorKind> {
        let reasoner = self.read()?;
        reasoner.ensure_initialized()?;

        let mut pairs = Vec::with_capacity(requests.len());
        for (entity, card) in requests {
            let entity_index = reasoner.registry.entity_index(entity)?;
            let card_index = reasoner.registry.card_index(card)?;
            pairs.push((entity_index, card_index));
        }

        answer_pairs(&reasoner, &pairs, workers)
    }

    /// Answers to every query, indexed first by card and then by entity, as with [query_all](GenericReasoner::query_all).
    pub fn query_grid(&self, workers: usize) -> Result<Vec<Vec<Answer>>, err::ErrorKind> {
        let reasoner = self.read()?;
        reasoner.ensure_initialized()?;

        let entity_count = reasoner.registry.entity_count();
        let pairs = (0..reasoner.registry.card_count())
            .flat_map(|card| (0..entity_count).map(move |entity| (entity, card)))
            .collect::<Vec<_>>();

        let answers = answer_pairs(&reasoner, &pairs, workers)?;
        Ok(answers
            .chunks(entity_count)
            .map(|row| row.to_vec())
            .collect())
    }
}

/// Answers to each (entity index, card index) query, in order.
fn answer_pairs<O: Oracle + Sync>(
    reasoner: &GenericReasoner<O>,
    pairs: &[(usize, CardIndex)],
    workers: usize,
) -> Result<Vec<Answer>, err::ErrorKind> {
    if pairs.is_empty() {
        return Ok(Vec::default());
    }
    let workers = workers.clamp(1, pairs.len());
    log::info!(target: targets::SESSION, "Batch of {} queries over {workers} workers", pairs.len());

    let next = AtomicUsize::new(0);
    let (tx, rx) = unbounded::<(usize, Result<Answer, err::ErrorKind>)>();

    let scope = crossbeam::scope(|scope| {
        for worker in 0..workers {
            let tx = tx.clone();
            let next = &next;
            scope.spawn(move |_| {
                let mut answered = 0;
                loop {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some((entity, card)) = pairs.get(index) else {
                        break;
                    };
                    let answer = reasoner.query_indices(*entity, *card);
                    if tx.send((index, answer)).is_err() {
                        break;
                    }
                    answered += 1;
                }
                log::trace!(target: targets::SESSION, "Worker {worker} answered {answered} queries");
            });
        }
    });
    drop(tx);

    if scope.is_err() {
        log::error!(target: targets::SESSION, "A worker panicked");
        return Err(err::OracleError::Failure("A worker panicked".to_string()).into());
    }

    let mut answers: Vec<Option<Result<Answer, err::ErrorKind>>> =
        (0..pairs.len()).map(|_| None).collect();
    for (index, answer) in rx {
        answers[index] = Some(answer);
    }

    answers
        .into_iter()
        .map(|answer| {
            answer.unwrap_or_else(|| {
                Err(err::OracleError::Failure("A query went unanswered".to_string()).into())
            })
        })
        .collect()
}
