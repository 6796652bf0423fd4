use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::Result;

const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(client)
    })
}

/// One GET for the results page. No retry, no cache, no pagination; a
/// transport failure or non-success status aborts the run.
pub fn fetch_results_page(url: &str) -> Result<String> {
    log::info!("fetching results page: {url}");
    let resp = http_client()?
        .get(url)
        .header(USER_AGENT, "Mozilla/5.0")
        .send()?
        .error_for_status()?;
    Ok(resp.text()?)
}
