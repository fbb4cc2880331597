/// This trait is used to control something that can return a score from a game state
///
/// Scores are always from the point of view of the maximizing agent, higher is better. A
/// scoring function must not depend on how deep in the search the state was found.
///
/// Any `Fn(&GameType) -> f64` implements this trait, so plain functions and closures can be
/// handed to a search directly.
pub trait Scorable<GameType> {
    /// Convert the given game state into a score
    fn score(&self, game: &GameType) -> f64;
}

impl<GameType, FnLike: Fn(&GameType) -> f64> Scorable<GameType> for FnLike {
    fn score(&self, game: &GameType) -> f64 {
        (self)(game)
    }
}
