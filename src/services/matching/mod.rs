pub mod classifier;
pub mod equivalence;
pub mod matcher;
pub mod normalizer;
pub mod similarity;
pub mod suggester;

pub use classifier::{classify_kit, is_compatible, KitCategory};
pub use matcher::{match_kit, KitMatch};
pub use suggester::{rank_kits, suggest_kits};
