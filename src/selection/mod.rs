pub mod elitist;
pub mod pool;
pub mod roulette;
pub mod selection_strategy;

pub use elitist::ElitistSelection;
pub use pool::select_pool;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
