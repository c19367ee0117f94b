use clap::Parser;

/// translate a routing request document into search-ready parameters
#[derive(Parser, Debug)]
#[command(name = "waypost")]
pub struct CliArgs {
    /// path to a JSON file holding the routing request
    pub request_file: String,
    /// pretty-print the resulting search context
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
