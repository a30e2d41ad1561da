use serde::Deserialize;

use super::{CatalogError, Country};

/// Suffix count above which a root is treated as shared by many countries.
///
/// The NANP region reports `+1` with hundreds of area-code suffixes; joining
/// them would produce a meaningless code, so only the root is kept.
const SHARED_ROOT_SUFFIXES: usize = 5;

/// Country record as served by the catalog endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCountry {
	pub name: RawName,
	pub idd: Option<RawIdd>,
	pub flag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawName {
	pub common: String,
}

/// International direct dialing data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIdd {
	pub root: Option<String>,
	pub suffixes: Option<Vec<String>>,
}

/// Derive a display dial code from the `idd` root and suffixes.
#[must_use]
pub fn dial_code(root: &str, suffixes: &[String]) -> String {
	let root = root.strip_prefix('+').unwrap_or(root);
	if suffixes.len() > SHARED_ROOT_SUFFIXES {
		format!("+{root}")
	} else {
		format!("+{root}{}", suffixes.concat())
	}
}

impl From<RawCountry> for Country {
	fn from(raw: RawCountry) -> Self {
		let idd = raw.idd.unwrap_or_default();
		let root = idd.root.unwrap_or_default();
		let suffixes = idd.suffixes.unwrap_or_default();
		Country {
			name: raw.name.common,
			dial_code: dial_code(&root, &suffixes),
			flag: raw.flag.unwrap_or_default(),
		}
	}
}

/// Parse a catalog payload, preserving the source order.
pub fn parse_catalog(json: &str) -> Result<Vec<Country>, CatalogError> {
	let raw: Vec<RawCountry> = serde_json::from_str(json)?;
	Ok(raw.into_iter().map(Country::from).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn suffixes(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	#[test]
	fn joins_root_and_single_suffix() {
		assert_eq!(dial_code("+3", &suffixes(&["3"])), "+33");
	}

	#[test]
	fn root_without_plus_is_prefixed_once() {
		assert_eq!(dial_code("4", &suffixes(&["4"])), "+44");
		assert_eq!(dial_code("+4", &suffixes(&["4"])), "+44");
	}

	#[test]
	fn shared_root_drops_suffixes() {
		let many = suffixes(&["201", "202", "203", "204", "205", "206"]);
		assert_eq!(dial_code("+1", &many), "+1");

		let five = suffixes(&["1", "2", "3", "4", "5"]);
		assert_eq!(dial_code("+7", &five), "+712345");
	}

	#[test]
	fn missing_idd_yields_bare_plus() {
		let country = Country::from(RawCountry {
			name: RawName {
				common: "Antarctica".into(),
			},
			idd: None,
			flag: Some("🇦🇶".into()),
		});
		assert_eq!(country.dial_code, "+");
		assert_eq!(country.flag, "🇦🇶");
	}

	#[test]
	fn parses_api_shape_and_ignores_unknown_fields() {
		let json = r#"[
			{
				"name": {"common": "France", "official": "French Republic"},
				"idd": {"root": "+3", "suffixes": ["3"]},
				"flag": "🇫🇷",
				"cca2": "FR"
			},
			{
				"name": {"common": "Heard Island and McDonald Islands"},
				"idd": {}
			}
		]"#;

		let countries = parse_catalog(json).expect("parse catalog");
		assert_eq!(countries.len(), 2);
		assert_eq!(countries[0], Country::new("France", "+33", "🇫🇷"));
		assert_eq!(countries[1].dial_code, "+");
		assert_eq!(countries[1].flag, "");
	}

	#[test]
	fn rejects_non_array_payload() {
		let err = parse_catalog(r#"{"status": 404}"#).unwrap_err();
		assert!(matches!(err, CatalogError::Parse(_)));
	}
}
