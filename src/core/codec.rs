use crate::core::{Product, Result};
use crate::utils::error::CatalogError;

/// Parses a JSON array of `{name, price}` objects.
pub fn products_from_json(input: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(input)?;
    tracing::debug!("Parsed {} products from JSON", products.len());
    Ok(products)
}

pub fn products_to_json(products: &[Product]) -> Result<String> {
    Ok(serde_json::to_string_pretty(products)?)
}

/// Parses headered CSV (`name,price`) into products.
pub fn products_from_csv(input: &str) -> Result<Vec<Product>> {
    let mut reader = csv::Reader::from_reader(input.as_bytes());
    let mut products = Vec::new();
    for row in reader.deserialize() {
        products.push(row?);
    }
    tracing::debug!("Parsed {} products from CSV", products.len());
    Ok(products)
}

pub fn products_to_csv(products: &[Product]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for product in products {
        writer.serialize(product)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::ProcessingError {
            message: format!("Failed to flush CSV writer: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| CatalogError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_product_list_serializes_to_empty_json_array() {
        assert_eq!(products_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_csv_without_rows_still_parses() {
        let products = products_from_csv("name,price\n").unwrap();
        assert!(products.is_empty());
    }
}
