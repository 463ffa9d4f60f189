mod competition;
mod drone;
mod drone_category;
mod pilot;
mod toy;
mod user;
