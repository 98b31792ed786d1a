pub mod batting_order;
pub mod cursor;
pub mod indexes;
pub mod lineup;
pub mod lineup_card;
pub mod team;

#[cfg(test)]
mod tests;
