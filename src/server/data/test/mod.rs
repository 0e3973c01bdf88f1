mod character;
mod favorite;
mod film;
mod planet;
mod species;
mod starship;
mod user;
mod vehicle;
