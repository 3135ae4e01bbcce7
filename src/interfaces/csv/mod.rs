pub mod account_writer;
pub mod seed_reader;
