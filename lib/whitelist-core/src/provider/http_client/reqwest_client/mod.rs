use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::{Error, Headers, HttpClient, Request, RequestBuilder, Response, StatusCode};

#[derive(Clone, Default)]
pub struct ReqwestClient {
    pub client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Arc::new(self.clone()), url)
    }

    async fn fetch(&self, request: Request) -> Result<Response, Error> {
        let response = self
            .client
            .get(&request.url)
            .headers(to_header_map(&request.headers)?)
            .send()
            .await
            .map_err(|e| Error::HttpError(e.to_string()))?;

        let status = StatusCode(response.status().as_u16());
        let headers = from_header_map(response.headers())?;
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::HttpError(e.to_string()))?;

        Ok(Response {
            body: body.to_vec(),
            headers,
            status,
            request: request.for_logs(),
        })
    }
}

fn to_header_map(headers: &Headers) -> Result<HeaderMap, Error> {
    headers
        .iter()
        .map(|(name, value)| {
            let name = HeaderName::try_from(name).map_err(|e| Error::Other(e.to_string()))?;
            let value = HeaderValue::try_from(value).map_err(|e| Error::Other(e.to_string()))?;

            Ok((name, value))
        })
        .collect()
}

// `HeaderMap::iter` yields one item per field, so repeated names survive
fn from_header_map(map: &HeaderMap) -> Result<Headers, Error> {
    let mut headers = Headers::default();
    for (name, value) in map {
        let value = value.to_str().map_err(|e| Error::Other(e.to_string()))?;
        headers.append(name.as_str(), value);
    }

    Ok(headers)
}
