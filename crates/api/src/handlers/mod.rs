pub mod health;
pub mod history;
pub mod vehicles;
pub mod zones;

pub use health::health_check;
pub use history::get_history;
pub use vehicles::get_vehicles;
pub use zones::get_zones;
