//! HTTP request/response pipeline
//!
//! The generic engine every facade funnels through: request construction
//! with credential injection and correlation-id tracing, single-shot send
//! with timing, and ordered response validation.

pub mod dispatcher;
pub mod response;

pub use dispatcher::{
    ApiDispatcher, Dispatch, RequestOptions, SessionContext, AUTHORIZATION_MASK,
    CORRELATION_HEADER,
};
pub use response::{handle, InboundResponse};
