mod flag_set;

pub use flag_set::ByteFlagSet;
pub use flag_set::FlagSet;
pub use flag_set::FLAG_COUNT;
