mod common;

mod user;
