use std::time::Duration;

use binday_provider_tameside::SourceConfig;
use clap::Parser;

/// Print the bin collection dates of a Tameside household.
#[derive(Debug, Parser)]
#[command(name = "binday", version)]
pub(crate) struct Arguments {
    /// Postcode of the address, spaces allowed
    #[arg(long, env = "BINDAY_POSTCODE")]
    pub postcode: String,
    /// Unique property reference number of the address
    #[arg(long, env = "BINDAY_UPRN")]
    pub uprn: String,
    /// Give up on the request after this many seconds
    #[arg(long, env = "BINDAY_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,
    /// Print the collections as JSON
    #[arg(long)]
    pub json: bool,
}

impl Arguments {
    pub(crate) fn source_config(&self) -> SourceConfig {
        SourceConfig::new(self.postcode.as_str(), self.uprn.as_str())
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
