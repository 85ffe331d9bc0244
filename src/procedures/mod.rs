/*!
Procedures of a reasoner.

# Building the knowledge base

Each procedure here which adds to the [knowledge base](crate::db::knowledge) resolves every name it is given before adding any clause.
So, a procedure given an unknown name fails without changing the knowledge base.

- [initialize](crate::procedures::initialize) adds the rules of the game, and is required before any other procedure.
- [hand](crate::procedures::hand) records the cards a player is known to hold.
- [suggestion](crate::procedures::suggestion) records a suggestion and how it was (or was not) refuted.
- [accusation](crate::procedures::accusation) records an accusation and whether it was correct.

None of these procedures check whether the recorded events are consistent.
An inconsistent collection of events is found only by a query, as an error.

# Querying the knowledge base

- [query](crate::procedures::query) decides whether a fact is forced, impossible, or unknown, through two calls to an oracle.
*/

pub mod accusation;
pub mod hand;
pub mod initialize;
pub mod query;
pub mod suggestion;
