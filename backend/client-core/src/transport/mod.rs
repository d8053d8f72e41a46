//! The SOAP transport seam.
//!
//! [`OperationInvoker`](crate::invoker::OperationInvoker) only sees this trait;
//! [`HttpSoapTransport`] is the production implementation.

pub mod envelope;
pub mod http;

pub use http::HttpSoapTransport;

use crate::error::TransportFault;
use crate::operation::Operation;
use crate::xml::XmlNode;

use std::future::Future;

pub trait SoapTransport: Send + Sync {
    /// Send one operation and return the SOAP `Body` of the response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportFault`] for SOAP faults, non-success HTTP statuses,
    /// timeouts, connection failures and unparseable responses.
    fn call(
        &self,
        operation: Operation,
        message: &XmlNode,
    ) -> impl Future<Output = Result<XmlNode, TransportFault>> + Send;
}
