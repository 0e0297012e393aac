//! Load household inputs from JSON documents
//!
//! Any field missing from the document falls back to [`Inputs::default`].

use super::{InputError, Inputs};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load inputs from a JSON file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Inputs, InputError> {
    let file = File::open(path)?;
    load_inputs_from_reader(BufReader::new(file))
}

/// Load inputs from any reader (e.g., string buffer, stdin)
pub fn load_inputs_from_reader<R: Read>(reader: R) -> Result<Inputs, InputError> {
    let inputs: Inputs = serde_json::from_reader(reader)?;
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_uses_defaults() {
        let json = r#"{ "currentHomeValue": 950000, "years": 20, "includeStorage": false }"#;
        let inputs = load_inputs_from_reader(json.as_bytes()).unwrap();

        assert_eq!(inputs.current_home_value, 950_000.0);
        assert_eq!(inputs.years, 20);
        assert!(!inputs.include_storage);
        assert_eq!(inputs.smaller_home_price, 700_000.0);
        assert_eq!(inputs.discount_rate_pct, 5.5);
    }

    #[test]
    fn test_round_trips_form_record() {
        let original = Inputs::default();
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"downPaymentFromProceedsPct\":50.0"));

        let loaded = load_inputs_from_reader(json.as_bytes()).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_malformed_document() {
        let result = load_inputs_from_reader("{ \"years\": \"fifteen\" }".as_bytes());
        assert!(matches!(result, Err(InputError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_inputs("does/not/exist.json");
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
