pub mod erapi;
pub mod newsdata;
