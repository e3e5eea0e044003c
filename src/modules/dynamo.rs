use rusoto_dynamodb::{DynamoDb, DynamoDbClient, BatchWriteItemInput, PutRequest, WriteRequest};
use rusoto_core::credential::ProfileProvider;
use rusoto_core::{HttpClient, Region};
use std::collections::HashMap;
use super::config::BATCH_SIZE;
use super::error::ImportError;
use super::loader::Record;
use super::parser::build_attr;

pub struct Dynamo {
    client: DynamoDbClient,
    table_name: String,
}

impl Dynamo {

    // resolve credentials for the named profile and bind to the table
    pub fn new(profile: &str, table_name: String) -> Result<Dynamo, ImportError> {
        let mut provider = ProfileProvider::new()?;
        provider.set_profile(profile);

        let client = DynamoDbClient::new_with(HttpClient::new()?, provider, Region::default());
        Ok(Dynamo { client, table_name })
    }

    // construct from an existing client, so tests can inject a fake dispatcher
    pub fn with_client(client: DynamoDbClient, table_name: String) -> Dynamo {
        Dynamo { client, table_name }
    }

    // save all records into DynamoDB (multiple batches), preserving input order
    pub async fn import(&self, records: &[Record]) -> Result<usize, ImportError> {
        let batch_count = (records.len() + BATCH_SIZE - 1) / BATCH_SIZE;
        let mut written = 0;

        for (i, batch) in records.chunks(BATCH_SIZE).enumerate() {
            self.batch_write(batch).await?;
            written += batch.len();
            println!(
                "Batch {}/{} written ({}/{} records)",
                i + 1,
                batch_count,
                written,
                records.len()
            );
        }

        Ok(written)
    }

    // one batch write, BATCH_SIZE records at most
    async fn batch_write(&self, records: &[Record]) -> Result<(), ImportError> {
        let write_requests = records.iter().map(build_write_request).collect();

        let mut batch_items = HashMap::new();
        batch_items.insert(self.table_name.to_owned(), write_requests);

        let input = BatchWriteItemInput {
            request_items: batch_items,
            ..Default::default()
        };

        let output = self.client.batch_write_item(input).await?;

        // no retry policy: items DynamoDB could not process are only reported
        if let Some(unprocessed) = output.unprocessed_items {
            let count: usize = unprocessed.values().map(|requests| requests.len()).sum();
            if count > 0 {
                println!("Warning: {} items were not processed by DynamoDB", count);
            }
        }

        Ok(())
    }
}

// build a single unconditional put for one record
fn build_write_request(record: &Record) -> WriteRequest {
    let mut item = HashMap::new();

    for (attribute_name, value) in record {
        item.insert(attribute_name.to_owned(), build_attr(value));
    }

    WriteRequest {
        put_request: Some(PutRequest { item }),
        ..Default::default()
    }
}
