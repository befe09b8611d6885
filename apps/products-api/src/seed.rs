//! Startup seed records

use domain_products::CreateProduct;
use eyre::WrapErr;
use std::path::Path;

/// Parse a JSON array of `{ "nome": ..., "preco": ... }` objects.
pub fn parse_seed(raw: &str) -> eyre::Result<Vec<CreateProduct>> {
    serde_json::from_str(raw).wrap_err("Seed must be a JSON array of {nome, preco} objects")
}

/// Read and parse the seed file at `path`.
pub fn load_seed(path: &Path) -> eyre::Result<Vec<CreateProduct>> {
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read seed file {}", path.display()))?;

    parse_seed(&raw).wrap_err_with(|| format!("Invalid seed file {}", path.display()))
}
