use super::SoapTransport;
use super::envelope;
use crate::config::{Credentials, TransportOptions};
use crate::error::{CreditsafeError, TransportFault};
use crate::operation::Operation;
use crate::xml::XmlNode;

use std::time::Duration;

use log::debug;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";
const SOAP_ACTION_HEADER_KEY: &str = "SOAPAction";

/// SOAP over HTTPS with basic authentication.
#[derive(Clone)]
pub struct HttpSoapTransport {
    endpoint: Url,
    client: Client,
}

impl HttpSoapTransport {
    /// Build the underlying HTTP client with the auth header baked in.
    ///
    /// # Errors
    ///
    /// Returns [`CreditsafeError::Http`] if the credentials cannot form a header
    /// value or the HTTP client cannot be constructed.
    pub fn new(
        endpoint: Url,
        credentials: &Credentials,
        options: &TransportOptions,
    ) -> Result<Self, CreditsafeError> {
        let mut auth_value = HeaderValue::from_str(&credentials.basic_auth_header())
            .map_err(|e| CreditsafeError::http(format!("Invalid credentials header: {e}")))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(SOAP_CONTENT_TYPE));

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .user_agent(options.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| CreditsafeError::http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SoapTransport for HttpSoapTransport {
    async fn call(
        &self,
        operation: Operation,
        message: &XmlNode,
    ) -> Result<XmlNode, TransportFault> {
        let body = envelope::wrap(message)
            .to_xml_string()
            .map_err(|e| TransportFault::malformed(e.to_string()))?;

        debug!("POST {} ({operation}, {} bytes)", self.endpoint, body.len());

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(SOAP_ACTION_HEADER_KEY, format!("\"{}\"", operation.soap_action()))
            .body(body)
            .send()
            .await
            .map_err(|e| TransportFault::from_reqwest(&e))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportFault::from_reqwest(&e))?;

        debug!("{operation} answered HTTP {status} ({} bytes)", text.len());

        envelope::unwrap(status, &text)
    }
}
