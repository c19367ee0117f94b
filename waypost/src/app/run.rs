use thiserror::Error;

use crate::model::convert::RouteRequestHandler;
use crate::model::error_code::ErrorCodeRegistry;
use crate::model::request::RouteRequest;
use crate::model::request_error::RequestError;

use super::cli_args::CliArgs;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failure reading request file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure parsing request file {0}: {1}")]
    ParseError(String, serde_json::Error),
    #[error("failure serializing search context: {0}")]
    SerializeError(serde_json::Error),
    #[error(transparent)]
    RequestError(#[from] RequestError),
}

/// reads a routing request document, translates it, and prints the
/// resulting search context as JSON on stdout
pub fn run(args: &CliArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.request_file)
        .map_err(|e| AppError::ReadError(args.request_file.clone(), e))?;
    let request: RouteRequest = serde_json::from_str(&text)
        .map_err(|e| AppError::ParseError(args.request_file.clone(), e))?;
    log::debug!("read routing request for profile {}", request.profile);

    let handler = RouteRequestHandler::new(ErrorCodeRegistry::routing());
    let context = handler.search_context(&request)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&context)
    } else {
        serde_json::to_string(&context)
    }
    .map_err(AppError::SerializeError)?;
    println!("{rendered}");
    Ok(())
}
