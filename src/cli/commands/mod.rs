pub mod analyse;
pub mod fetch;
pub mod test_api;
