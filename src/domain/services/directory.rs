//! Decoding of director payloads into typed view models
//!
//! Every entry point rejects payloads that break the record invariants
//! (unknown server type, missing capability flag, missing nullable key,
//! `namespaces` and `namespacePrefixes` that disagree) instead of filling
//! in defaults.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::models::{ServerDetailed, ServerGeneral};
use crate::shared::{logging, Result};

fn decode<T: DeserializeOwned>(record: &str, payload: &str) -> Result<T> {
    serde_json::from_str(payload).map_err(|e| {
        logging::log_decode_rejected(record, &e.to_string());
        e.into()
    })
}

pub fn decode_server_detailed(payload: &str) -> Result<ServerDetailed> {
    let server: ServerDetailed = decode("server_detailed", payload)?;
    logging::log_decode_success("server_detailed", 1);
    Ok(server)
}

pub fn decode_server_general(payload: &str) -> Result<ServerGeneral> {
    let server: ServerGeneral = decode("server_general", payload)?;
    logging::log_decode_success("server_general", 1);
    Ok(server)
}

/// Decode a server listing; one bad record rejects the whole payload.
pub fn decode_server_list(payload: &str) -> Result<Vec<ServerGeneral>> {
    let servers: Vec<ServerGeneral> = decode("server_list", payload)?;
    logging::log_decode_success("server_list", servers.len());
    Ok(servers)
}

pub fn encode_json<T: Serialize>(record: &T) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}
