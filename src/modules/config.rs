use clap::clap_app;
use super::error::ImportError;

pub struct Config {
    pub table_name: String,
    pub source: String,
    pub profile: String,
}

// DynamoDB allows at most 25 write requests per BatchWriteItem call
pub const BATCH_SIZE: usize = 25;
pub const PROFILE_DEFAULT: &str = "default";

pub fn get_arguments() -> Result<Config, ImportError> {
    let matches = clap_app!(x =>
        (name: "JSON_To_DynamoDB")
        (version: "0.1.0")
        (author: "Devin (github.com/devin-git)")
        (about: "Import a JSON array into a DynamoDB table using batch writes")
        (@arg TABLE: +required "Specify DynamoDB table name")
        (@arg JSON_DATA: +required "Provide a URL or a path to a .json file containing a JSON array")
        (@arg PROFILE: -p --profile +takes_value "Specify AWS credential profile. Default \"default\"")
    )
    .get_matches();

    let source = matches.value_of("JSON_DATA").unwrap().to_string();
    validate_source(&source)?;

    Ok(Config {
        table_name: matches.value_of("TABLE").unwrap().to_string(),
        source,
        profile: matches.value_of("PROFILE").unwrap_or(PROFILE_DEFAULT).to_string(),
    })
}

// reject anything that is neither a URL nor a .json file, before any I/O happens
pub fn validate_source(source: &str) -> Result<(), ImportError> {
    if source.starts_with("http") || source.ends_with(".json") {
        Ok(())
    } else {
        Err(ImportError::Format(source.to_string()))
    }
}
