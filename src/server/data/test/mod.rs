mod application;
mod counter;
mod department;
mod user;
