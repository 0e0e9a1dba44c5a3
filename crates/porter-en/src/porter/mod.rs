// Porter suffix-stripping engine
//
// - state: per-call scan state, predicates and the measure function
// - steps: the six rule stages
// - irregular: exception table consulted before the pipeline

pub mod irregular;
pub mod state;
pub mod steps;

pub use irregular::IrregularForms;
pub use state::StemmingState;
