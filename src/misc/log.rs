/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for following a game and for fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [registry](crate::db::registry)
    pub const REGISTRY: &str = "registry";

    /// Logs related to the [knowledge base](crate::db::knowledge) and the procedures which add to it
    pub const KNOWLEDGE: &str = "knowledge";

    /// Logs related to [queries](crate::procedures::query)
    pub const QUERY: &str = "query";

    /// Logs related to an [oracle](crate::oracle)
    pub const ORACLE: &str = "oracle";

    /// Logs related to a [session](crate::session)
    pub const SESSION: &str = "session";
}
