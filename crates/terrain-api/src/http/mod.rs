//! HTTP client for the Terrain API.

mod client;
mod endpoints;

pub(crate) use client::TerrainClient;
pub(crate) use endpoints::*;
