use std::process::exit;
use modules::config::{get_arguments, Config};
use modules::dynamo::Dynamo;
use modules::error::ImportError;
use modules::loader::load;

mod modules;

#[tokio::main]
async fn main() {
    let config = match get_arguments() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {}", error);
            exit(error.exit_code());
        }
    };

    if let Err(error) = run(config).await {
        eprintln!("Error: {}", error);
        exit(error.exit_code());
    }
}

async fn run(config: Config) -> Result<(), ImportError> {
    println!("Reading records from {}...", config.source);
    let records = load(&config.source).await?;

    let client = Dynamo::new(&config.profile, config.table_name.to_owned())?;
    let count = client.import(&records).await?;

    println!(
        "Successfully imported {} items into table {}",
        count, config.table_name
    );
    Ok(())
}
