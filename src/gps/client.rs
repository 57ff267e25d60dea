use crate::app_config::AppConfig;
use reqwest::Client;
use thiserror::Error;

/// Builds the HTTP client used against the GPS provider. The request timeout
/// doubles as the poll cycle's upper bound, so a stalled upstream call never
/// overlaps the next tick.
pub fn new_client(config: &AppConfig) -> Result<Client, GpsClientError> {
    let client = Client::builder().timeout(config.gps().timeout()).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum GpsClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[tokio::test]
    async fn new_client_issues_plain_get_requests() -> Result<(), GpsClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("GET", "/").with_status(200).create_async().await;

        let config = AppConfigBuilder::new().gps_url(server.url()).build();
        let client = new_client(&config)?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        mock.assert();

        Ok(())
    }
}
