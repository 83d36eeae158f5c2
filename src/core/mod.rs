pub mod josa;
pub mod unicode;
