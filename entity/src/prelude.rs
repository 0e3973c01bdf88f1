pub use super::character::Entity as Character;
pub use super::character_film::Entity as CharacterFilm;
pub use super::character_starship::Entity as CharacterStarship;
pub use super::character_vehicle::Entity as CharacterVehicle;
pub use super::favorite::Entity as Favorite;
pub use super::film::Entity as Film;
pub use super::planet::Entity as Planet;
pub use super::species::Entity as Species;
pub use super::starship::Entity as Starship;
pub use super::starship_film::Entity as StarshipFilm;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_film::Entity as VehicleFilm;
