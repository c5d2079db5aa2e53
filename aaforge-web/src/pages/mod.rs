pub mod abilities;
pub mod builds;
pub mod character;
pub mod equipment;
pub mod spells;
pub mod summary;

pub use abilities::AbilitiesPage;
pub use builds::BuildsPage;
pub use character::CharacterPage;
pub use equipment::EquipmentPage;
pub use spells::SpellsPage;
pub use summary::SummaryPage;
