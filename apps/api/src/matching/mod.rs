// Matching engine: closed-vocabulary keyword extraction, per-dimension scorers,
// weighted composite score and the reason generator that explains it.
// Everything in here is pure and synchronous; storage lives in `store`.

pub mod composite;
pub mod dimensions;
pub mod keywords;
pub mod reasons;
pub mod scorer;
