pub mod prelude;

pub mod api_token;
pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod toy;
pub mod user;
