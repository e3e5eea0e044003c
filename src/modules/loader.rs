use std::fs;
use serde_json::{from_slice, Map, Value};
use super::error::ImportError;

// one JSON object destined for one DynamoDB item, passed through unmodified
pub type Record = Map<String, Value>;

// read raw bytes from a URL or a local file, then parse them as a JSON array
pub async fn load(source: &str) -> Result<Vec<Record>, ImportError> {
    let raw = if source.starts_with("http") {
        fetch_url(source).await?
    } else {
        read_file(source)?
    };

    Ok(from_slice(&raw)?)
}

async fn fetch_url(url: &str) -> Result<Vec<u8>, ImportError> {
    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

fn read_file(path: &str) -> Result<Vec<u8>, ImportError> {
    fs::read(path).map_err(|source| ImportError::Read {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn reads_records_from_file_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.json");
        fs::write(&file, r#"[{"id":1},{"id":2}]"#).unwrap();

        let records = load(file.to_str().unwrap()).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["id"], json!(1));
        assert_eq!(records[1]["id"], json!(2));
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let error = load("no_such_file.json").await.unwrap_err();
        match error {
            ImportError::Read { path, .. } => assert_eq!(path, "no_such_file.json"),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.json");
        fs::write(&file, "this is not json").unwrap();

        let error = load(file.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(error, ImportError::Parse(_)));
    }

    #[tokio::test]
    async fn top_level_object_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.json");
        fs::write(&file, r#"{"id":1}"#).unwrap();

        let error = load(file.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(error, ImportError::Parse(_)));
    }

    #[tokio::test]
    async fn fetches_records_from_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"[{"id":1}]"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let records = load(&format!("{}/data.json", server.uri())).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], json!(1));
    }

    #[tokio::test]
    async fn non_success_status_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let error = load(&format!("{}/data.json", server.uri())).await.unwrap_err();
        assert!(matches!(error, ImportError::Fetch(_)));
    }
}
