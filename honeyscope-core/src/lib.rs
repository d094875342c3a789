pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod dataset;
pub mod geo;
pub mod ingest;
pub mod logging;
pub mod present;
pub mod record;

#[cfg(test)]
mod test_support;
