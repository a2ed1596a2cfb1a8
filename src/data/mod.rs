pub mod database;
pub mod loader;
pub mod mechanics;
pub mod rampage;
pub mod skill;
pub mod types;
pub mod validate;
pub mod weapon;

pub use database::GameDatabase;
pub use loader::{load_dir, load_dir_with_report, DataError, LoadOutcome};
pub use types::{EleStat, SharpnessBar, WeaponCategory};
pub use weapon::WeaponRO;
