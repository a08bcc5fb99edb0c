pub mod ping;
pub mod preview;
pub mod recommend;
