//! Integration tests for adclink-connector
//!
//! Uses wiremock to stand in for the connector's local service and checks
//! both the wire format of each operation and the end-to-end behavior of
//! the facade over HTTP.


mod test_facade;
mod test_operations;
