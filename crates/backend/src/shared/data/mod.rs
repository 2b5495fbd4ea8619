pub mod db;
pub mod migration_runner;
pub mod seed;

#[cfg(test)]
pub mod test_support;
