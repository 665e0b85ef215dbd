pub mod compose;
pub mod dedup;

#[cfg(test)]
mod tests;
