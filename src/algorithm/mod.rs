/// Greedy plate placement engine
pub mod executor;
/// Coverage checks over placement lists
pub mod verification;
